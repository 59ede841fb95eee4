// Pixel space: (0, 0) is the top-left corner of the canvas, x grows to the right, y grows
// downwards. One cell is a `cell_size_px` by `cell_size_px` square.

use serde::{Deserialize, Serialize};

use crate::coord::{Cell, Col, NUM_COLS, NUM_ROWS, Row};


#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub const fn new(x: f64, y: f64) -> Self { PixelPoint { x, y } }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BoardGeometry {
    pub cell_size_px: f64,
}

impl BoardGeometry {
    pub const fn new(cell_size_px: f64) -> Self { BoardGeometry { cell_size_px } }

    pub fn board_width_px(self) -> f64 { self.cell_size_px * f64::from(NUM_COLS) }
    pub fn board_height_px(self) -> f64 { self.cell_size_px * f64::from(NUM_ROWS) }

    pub fn contains(self, p: PixelPoint) -> bool {
        (0.0..self.board_width_px()).contains(&p.x) && (0.0..self.board_height_px()).contains(&p.y)
    }

    // Validated version of `pixel_to_cell`.
    pub fn cell_at(self, p: PixelPoint) -> Option<Cell> {
        self.contains(p).then(|| pixel_to_cell(p, self.cell_size_px))
    }
}

// Panics if the point is outside of the board. Callers are expected to check bounds first,
// see `BoardGeometry::cell_at`.
pub fn pixel_to_cell(p: PixelPoint, cell_size_px: f64) -> Cell {
    Cell::new(
        Col::from_zero_based(floor_index(p.x, cell_size_px)),
        Row::from_zero_based(floor_index(p.y, cell_size_px)),
    )
}

pub fn cell_to_pixel_center(cell: Cell, cell_size_px: f64) -> PixelPoint {
    let corner = cell_to_pixel_corner(cell, cell_size_px);
    PixelPoint::new(corner.x + cell_size_px / 2.0, corner.y + cell_size_px / 2.0)
}

// Top-left corner of a cell.
pub fn cell_to_pixel_corner(cell: Cell, cell_size_px: f64) -> PixelPoint {
    PixelPoint::new(
        f64::from(cell.col.to_zero_based()) * cell_size_px,
        f64::from(cell.row.to_zero_based()) * cell_size_px,
    )
}

fn floor_index(coord: f64, cell_size_px: f64) -> u8 {
    let idx = (coord / cell_size_px).floor();
    assert!(
        (0.0..f64::from(u8::MAX)).contains(&idx),
        "pixel coordinate {coord} is outside of the board"
    );
    idx as u8
}


#[cfg(test)]
mod tests {
    use super::*;

    const CELL: f64 = 40.0;

    #[test]
    fn pixel_to_cell_floors() {
        assert_eq!(pixel_to_cell(PixelPoint::new(0.0, 0.0), CELL), Cell::from_zero_based(0, 0));
        assert_eq!(pixel_to_cell(PixelPoint::new(39.9, 40.0), CELL), Cell::from_zero_based(0, 1));
        assert_eq!(pixel_to_cell(PixelPoint::new(319.5, 170.0), CELL), Cell::from_zero_based(7, 4));
    }

    #[test]
    fn center_is_inverse_within_half_cell() {
        let mut y = 0.0;
        while y < 320.0 {
            let mut x = 0.0;
            while x < 320.0 {
                let p = PixelPoint::new(x, y);
                let center = cell_to_pixel_center(pixel_to_cell(p, CELL), CELL);
                assert!((center.x - x).abs() <= CELL / 2.0, "{p:?} -> {center:?}");
                assert!((center.y - y).abs() <= CELL / 2.0, "{p:?} -> {center:?}");
                x += 7.3;
            }
            y += 7.3;
        }
    }

    #[test]
    fn bounds() {
        let geometry = BoardGeometry::new(CELL);
        assert_eq!(geometry.board_width_px(), 320.0);
        assert!(geometry.contains(PixelPoint::new(0.0, 319.9)));
        assert!(!geometry.contains(PixelPoint::new(320.0, 10.0)));
        assert!(!geometry.contains(PixelPoint::new(-0.1, 10.0)));
        assert_eq!(geometry.cell_at(PixelPoint::new(-5.0, 5.0)), None);
        assert_eq!(geometry.cell_at(PixelPoint::new(85.0, 5.0)), Some(Cell::from_zero_based(2, 0)));
    }

    #[test]
    #[should_panic]
    fn mapper_does_not_clamp_negative() { pixel_to_cell(PixelPoint::new(-1.0, 5.0), CELL); }

    #[test]
    #[should_panic]
    fn mapper_does_not_clamp_past_board() { pixel_to_cell(PixelPoint::new(5.0, 320.0), CELL); }
}
