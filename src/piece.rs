use std::fmt;

use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::coord::Cell;
use crate::force::Force;


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceId(pub u32);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "#{}", self.0) }
}

// A piece as reported by the provider. The client never changes pieces: a new board
// snapshot replaces all of them at once.
#[derive(Clone, PartialEq, Eq, Debug, new, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub kind: String,
    #[serde(rename = "white")]
    pub force: Force,
    #[serde(rename = "position")]
    pub cell: Cell,
    pub alive: bool,
}

// Short label drawn on top of the piece circle. Kinds are free-form text owned by the
// provider; the standard chess kinds get their algebraic letters.
pub fn kind_label(kind: &str) -> String {
    match kind.to_ascii_lowercase().as_str() {
        "pawn" => "P".to_owned(),
        "knight" => "N".to_owned(),
        "bishop" => "B".to_owned(),
        "rook" => "R".to_owned(),
        "queen" => "Q".to_owned(),
        "king" => "K".to_owned(),
        _ => match kind.chars().next() {
            Some(ch) => ch.to_uppercase().collect(),
            None => "?".to_owned(),
        },
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_wire_piece() {
        let piece: Piece = serde_json::from_str(
            r#"{"id": 5, "kind": "Pawn", "white": true, "position": {"x": 4, "y": 6}, "alive": true}"#,
        )
        .unwrap();
        assert_eq!(
            piece,
            Piece::new(PieceId(5), "Pawn".to_owned(), Force::White, Cell::from_zero_based(4, 6), true)
        );
    }

    #[test]
    fn labels() {
        assert_eq!(kind_label("Knight"), "N");
        assert_eq!(kind_label("QUEEN"), "Q");
        assert_eq!(kind_label("archbishop"), "A");
        assert_eq!(kind_label(""), "?");
    }
}
