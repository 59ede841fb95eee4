// Test utilities shared by unit tests and the integration tests in "tests".

use crate::board::BoardSnapshot;
use crate::coord::Cell;
use crate::display::PixelPoint;
use crate::force::Force;
use crate::piece::{Piece, PieceId};
use crate::surface::Surface;


#[derive(Clone, PartialEq, Debug)]
pub enum DrawOp {
    Rect { top_left: PixelPoint, width: f64, height: f64, color: String },
    Circle { center: PixelPoint, radius: f64, color: String },
    Text { text: String, center: PixelPoint, color: String },
}

// Remembers everything painted since the last `clear`.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
    visible: bool,
    num_clears: usize,
}

impl RecordingSurface {
    pub fn new() -> Self { Self::default() }

    pub fn ops(&self) -> &[DrawOp] { &self.ops }
    pub fn is_visible(&self) -> bool { self.visible }
    pub fn num_clears(&self) -> usize { self.num_clears }

    pub fn circles(&self) -> Vec<&DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Circle { .. })).collect()
    }
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
    pub fn circle_centers_with_color(&self, color: &str) -> Vec<PixelPoint> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Circle { center, color: c, .. } if c == color => Some(*center),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.clear();
        self.num_clears += 1;
    }
    fn fill_rect(&mut self, top_left: PixelPoint, width: f64, height: f64, color: &str) {
        self.ops.push(DrawOp::Rect { top_left, width, height, color: color.to_owned() });
    }
    fn fill_circle(&mut self, center: PixelPoint, radius: f64, color: &str) {
        self.ops.push(DrawOp::Circle { center, radius, color: color.to_owned() });
    }
    fn fill_text(&mut self, text: &str, center: PixelPoint, color: &str) {
        self.ops.push(DrawOp::Text { text: text.to_owned(), center, color: color.to_owned() });
    }
    fn set_visible(&mut self, visible: bool) { self.visible = visible; }
}

pub fn sample_piece(id: u32, kind: &str, force: Force, col: u8, row: u8) -> Piece {
    Piece::new(PieceId(id), kind.to_owned(), force, Cell::from_zero_based(col, row), true)
}

// A few pieces mid-game:
//   #5  white pawn   (4, 6)
//   #9  white knight (6, 7)
//   #12 black knight (5, 5)
//   #20 black pawn   (3, 1)
//   #7  white bishop (2, 2), captured
pub fn sample_board() -> BoardSnapshot {
    use Force::*;
    let mut captured = sample_piece(7, "Bishop", White, 2, 2);
    captured.alive = false;
    BoardSnapshot::new(vec![
        sample_piece(5, "Pawn", White, 4, 6),
        sample_piece(9, "Knight", White, 6, 7),
        sample_piece(12, "Knight", Black, 5, 5),
        sample_piece(20, "Pawn", Black, 3, 1),
        captured,
    ])
}
