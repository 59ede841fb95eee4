use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::coord::Cell;
use crate::piece::{Piece, PieceId};


// All pieces at one instant, in provider order. Later pieces are painted on top of earlier
// ones, so hit testing walks the list backwards.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardSnapshot {
    pieces: Vec<Piece>,
}

impl BoardSnapshot {
    pub fn new(pieces: Vec<Piece>) -> Self { BoardSnapshot { pieces } }

    pub fn pieces(&self) -> &[Piece] { &self.pieces }
    pub fn alive_pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().filter(|p| p.alive)
    }
    pub fn alive_piece_at(&self, cell: Cell) -> Option<&Piece> {
        self.pieces.iter().rev().find(|p| p.alive && p.cell == cell)
    }
    pub fn piece(&self, id: PieceId) -> Option<&Piece> { self.pieces.iter().find(|p| p.id == id) }
}


#[derive(Clone, Copy, PartialEq, Eq, Debug, strum::Display)]
pub enum MarkerKind {
    Killable,
    Movable,
}

// Destinations for one selected piece. Only meaningful until the next selection or move.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct MoveOptionSet {
    #[serde(default)]
    pub movable: BTreeSet<Cell>,
    #[serde(default)]
    pub killable: BTreeSet<Cell>,
}

impl MoveOptionSet {
    pub fn is_empty(&self) -> bool { self.movable.is_empty() && self.killable.is_empty() }

    // Captures are checked first: a capture marker sits on top of the captured piece.
    pub fn marker_at(&self, cell: Cell) -> Option<MarkerKind> {
        if self.killable.contains(&cell) {
            Some(MarkerKind::Killable)
        } else if self.movable.contains(&cell) {
            Some(MarkerKind::Movable)
        } else {
            None
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::force::Force;

    fn piece(id: u32, col: u8, row: u8, alive: bool) -> Piece {
        Piece::new(PieceId(id), "Rook".to_owned(), Force::Black, Cell::from_zero_based(col, row), alive)
    }

    #[test]
    fn dead_pieces_are_not_found_by_cell() {
        let board = BoardSnapshot::new(vec![piece(1, 0, 0, false), piece(2, 1, 0, true)]);
        assert_eq!(board.alive_piece_at(Cell::from_zero_based(0, 0)), None);
        assert_eq!(board.alive_piece_at(Cell::from_zero_based(1, 0)).unwrap().id, PieceId(2));
        assert_eq!(board.alive_pieces().count(), 1);
        assert!(board.piece(PieceId(1)).is_some());
    }

    #[test]
    fn topmost_piece_wins() {
        let board = BoardSnapshot::new(vec![piece(1, 3, 3, true), piece(2, 3, 3, true)]);
        assert_eq!(board.alive_piece_at(Cell::from_zero_based(3, 3)).unwrap().id, PieceId(2));
    }

    #[test]
    fn killable_before_movable() {
        let cell = Cell::from_zero_based(2, 5);
        let options = MoveOptionSet {
            movable: [cell].into(),
            killable: [cell].into(),
        };
        assert_eq!(options.marker_at(cell), Some(MarkerKind::Killable));
        assert_eq!(options.marker_at(Cell::from_zero_based(0, 0)), None);
    }

    #[test]
    fn parse_wire_options() {
        let options: Option<MoveOptionSet> = serde_json::from_str(
            r#"{"movable": [{"x": 4, "y": 5}, {"x": 4, "y": 4}], "killable": []}"#,
        )
        .unwrap();
        let options = options.unwrap();
        assert_eq!(options.movable.len(), 2);
        assert!(options.killable.is_empty());
        assert_eq!(serde_json::from_str::<Option<MoveOptionSet>>("null").unwrap(), None);
    }
}
