use std::fmt;

use crate::board::{BoardSnapshot, MoveOptionSet};
use crate::coord::Cell;
use crate::piece::PieceId;
use crate::remote::RemoteError;


// Identifies the selection a request was made for. Bumped every time the selection changes,
// so a response carrying an older generation is known to be stale.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct RequestGeneration(u64);

impl RequestGeneration {
    pub fn next(self) -> Self { RequestGeneration(self.0 + 1) }
}

impl fmt::Display for RequestGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "g{}", self.0) }
}

// Board fetches are not tied to a selection, but an older snapshot must never replace a newer
// one.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct BoardRequestId(u64);

impl BoardRequestId {
    pub fn next(self) -> Self { BoardRequestId(self.0 + 1) }
}


#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ProviderRequest {
    GetBoard {
        request_id: BoardRequestId,
    },
    GetOptions {
        generation: RequestGeneration,
        piece_id: PieceId,
    },
    SetPosition {
        piece_id: PieceId,
        destination: Cell,
    },
}

#[derive(Clone, PartialEq, Debug)]
pub enum ProviderResponse {
    Board {
        request_id: BoardRequestId,
        result: Result<BoardSnapshot, RemoteError>,
    },
    Options {
        generation: RequestGeneration,
        piece_id: PieceId,
        // `None` means the piece cannot move now, e.g. it's not this side's turn.
        result: Result<Option<MoveOptionSet>, RemoteError>,
    },
    PositionSet {
        piece_id: PieceId,
        destination: Cell,
        result: Result<(), RemoteError>,
    },
}
