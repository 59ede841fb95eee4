use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};


pub const NUM_ROWS: u8 = 8;
pub const NUM_COLS: u8 = 8;


// Row 0 is the top-most row on the canvas.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Row {
    idx: u8,  // 0-based
}

impl Row {
    pub const fn from_zero_based(idx: u8) -> Self {
        assert!(idx < NUM_ROWS);
        Self { idx }
    }
    pub fn try_from_zero_based(idx: i32) -> Option<Self> {
        (0..i32::from(NUM_ROWS)).contains(&idx).then(|| Self { idx: idx as u8 })
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub fn all() -> impl Iterator<Item = Self> + Clone {
        (0..NUM_ROWS).map(Self::from_zero_based)
    }
}


// Col 0 is the left-most column on the canvas.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Col {
    idx: u8,  // 0-based
}

impl Col {
    pub const fn from_zero_based(idx: u8) -> Self {
        assert!(idx < NUM_COLS);
        Self { idx }
    }
    pub fn try_from_zero_based(idx: i32) -> Option<Self> {
        (0..i32::from(NUM_COLS)).contains(&idx).then(|| Self { idx: idx as u8 })
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub fn all() -> impl Iterator<Item = Self> + Clone {
        (0..NUM_COLS).map(Self::from_zero_based)
    }
}


// A board square. Ordering is row-major, which is also the painting order.
//
// On the wire a cell is `{"x": col, "y": row}`. Out-of-range values are rejected during
// deserialization, so a `Cell` is always a valid square.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCell", into = "RawCell")]
pub struct Cell {
    pub row: Row,
    pub col: Col,
}

impl Cell {
    pub const fn new(col: Col, row: Row) -> Self { Self { row, col } }
    pub const fn from_zero_based(col: u8, row: u8) -> Self {
        Self::new(Col::from_zero_based(col), Row::from_zero_based(row))
    }
    pub fn try_from_zero_based(col: i32, row: i32) -> Option<Self> {
        Some(Self::new(Col::try_from_zero_based(col)?, Row::try_from_zero_based(row)?))
    }
    pub fn all() -> impl Iterator<Item = Cell> {
        Row::all().cartesian_product(Col::all()).map(|(row, col)| Cell { row, col })
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({}, {})", self.col.to_zero_based(), self.row.to_zero_based())
    }
}


#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct RawCell {
    x: i32,
    y: i32,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CellOutOfRange {
    pub x: i32,
    pub y: i32,
}

impl fmt::Display for CellOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell ({}, {}) is outside of the {}x{} board", self.x, self.y, NUM_COLS, NUM_ROWS)
    }
}

impl TryFrom<RawCell> for Cell {
    type Error = CellOutOfRange;
    fn try_from(raw: RawCell) -> Result<Self, Self::Error> {
        Cell::try_from_zero_based(raw.x, raw.y).ok_or(CellOutOfRange { x: raw.x, y: raw.y })
    }
}

impl From<Cell> for RawCell {
    fn from(cell: Cell) -> Self {
        RawCell {
            x: i32::from(cell.col.to_zero_based()),
            y: i32::from(cell.row.to_zero_based()),
        }
    }
}
