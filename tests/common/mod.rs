// Rust-upgrade (https://github.com/rust-lang/rust/issues/46379):
//   remove `#[allow(dead_code)]` before public functions.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::mpsc;
use std::time::Duration;

use async_trait::async_trait;
use chessboard_client::board::{BoardSnapshot, MoveOptionSet};
use chessboard_client::config::BoardConfig;
use chessboard_client::controller::BoardController;
use chessboard_client::coord::Cell;
use chessboard_client::display::{PixelPoint, cell_to_pixel_center};
use chessboard_client::double_buffer::DoubleBuffer;
use chessboard_client::event::{ProviderRequest, ProviderResponse};
use chessboard_client::piece::PieceId;
use chessboard_client::remote::{GameStateProvider, RemoteError};
use chessboard_client::test_util::RecordingSurface;


pub type TestController = BoardController<RecordingSurface>;

#[macro_export]
macro_rules! cell {
    ($col:literal, $row:literal) => {
        chessboard_client::coord::Cell::from_zero_based($col, $row)
    };
}

#[allow(dead_code)]
pub fn new_controller() -> (TestController, mpsc::Receiver<ProviderRequest>) {
    let (requests_tx, requests_rx) = mpsc::channel();
    let buffer = DoubleBuffer::new(RecordingSurface::new(), RecordingSurface::new());
    (BoardController::new(BoardConfig::default(), buffer, requests_tx), requests_rx)
}

#[allow(dead_code)]
pub fn pixel_center(cell: Cell) -> PixelPoint {
    cell_to_pixel_center(cell, BoardConfig::default().cell_size_px)
}

#[allow(dead_code)]
pub fn click(controller: &mut TestController, cell: Cell) { controller.on_click(pixel_center(cell)); }

#[allow(dead_code)]
pub fn take_requests(requests_rx: &mpsc::Receiver<ProviderRequest>) -> Vec<ProviderRequest> {
    requests_rx.try_iter().collect()
}

#[allow(dead_code)]
pub fn options(movable: &[Cell], killable: &[Cell]) -> MoveOptionSet {
    MoveOptionSet {
        movable: movable.iter().copied().collect(),
        killable: killable.iter().copied().collect(),
    }
}

#[allow(dead_code)]
pub fn respond_board(controller: &mut TestController, request: &ProviderRequest, board: BoardSnapshot) {
    let ProviderRequest::GetBoard { request_id } = request else {
        panic!("Expected board request, got {request:?}");
    };
    controller.process_response(ProviderResponse::Board {
        request_id: *request_id,
        result: Ok(board),
    });
}

#[allow(dead_code)]
pub fn respond_options(
    controller: &mut TestController, request: &ProviderRequest,
    result: Result<Option<MoveOptionSet>, RemoteError>,
) {
    let ProviderRequest::GetOptions { generation, piece_id } = request else {
        panic!("Expected options request, got {request:?}");
    };
    controller.process_response(ProviderResponse::Options {
        generation: *generation,
        piece_id: *piece_id,
        result,
    });
}

// Starts the controller and answers the initial board fetch.
#[allow(dead_code)]
pub fn start_with_board(
    controller: &mut TestController, requests_rx: &mpsc::Receiver<ProviderRequest>,
    board: BoardSnapshot,
) {
    controller.start();
    let requests = take_requests(requests_rx);
    assert_eq!(requests.len(), 1);
    respond_board(controller, &requests[0], board);
}

// Splits the requests issued by a piece click into the options request and the board fetch.
#[allow(dead_code)]
pub fn split_selection_requests(requests: &[ProviderRequest]) -> (ProviderRequest, ProviderRequest) {
    assert_eq!(requests.len(), 2, "{requests:?}");
    let options = requests
        .iter()
        .find(|r| matches!(r, ProviderRequest::GetOptions { .. }))
        .expect("no options request");
    let board = requests
        .iter()
        .find(|r| matches!(r, ProviderRequest::GetBoard { .. }))
        .expect("no board request");
    (options.clone(), board.clone())
}


// In-memory provider. Knows nothing about chess: options are scripted per piece, and a move
// just puts the piece on the destination, capturing whatever was there.
#[allow(dead_code)]
pub struct FakeProvider {
    board: RefCell<BoardSnapshot>,
    options: HashMap<PieceId, Option<MoveOptionSet>>,
    options_delays: HashMap<PieceId, Duration>,
    options_calls: RefCell<Vec<PieceId>>,
    moves: RefCell<Vec<(PieceId, Cell)>>,
}

#[allow(dead_code)]
impl FakeProvider {
    pub fn new(board: BoardSnapshot) -> Self {
        FakeProvider {
            board: RefCell::new(board),
            options: HashMap::new(),
            options_delays: HashMap::new(),
            options_calls: RefCell::new(Vec::new()),
            moves: RefCell::new(Vec::new()),
        }
    }
    pub fn with_options(mut self, piece_id: PieceId, options: Option<MoveOptionSet>) -> Self {
        self.options.insert(piece_id, options);
        self
    }
    pub fn with_options_delay(mut self, piece_id: PieceId, delay: Duration) -> Self {
        self.options_delays.insert(piece_id, delay);
        self
    }

    pub fn board(&self) -> BoardSnapshot { self.board.borrow().clone() }
    pub fn options_calls(&self) -> Vec<PieceId> { self.options_calls.borrow().clone() }
    pub fn moves(&self) -> Vec<(PieceId, Cell)> { self.moves.borrow().clone() }
}

#[async_trait(?Send)]
impl GameStateProvider for FakeProvider {
    async fn get_board(&self) -> Result<BoardSnapshot, RemoteError> { Ok(self.board()) }

    async fn get_options(&self, piece_id: PieceId) -> Result<Option<MoveOptionSet>, RemoteError> {
        self.options_calls.borrow_mut().push(piece_id);
        if let Some(delay) = self.options_delays.get(&piece_id) {
            async_std::task::sleep(*delay).await;
        }
        self.options
            .get(&piece_id)
            .cloned()
            .ok_or_else(|| RemoteError::Provider(format!("unknown piece {piece_id}")))
    }

    async fn set_position(&self, piece_id: PieceId, destination: Cell) -> Result<(), RemoteError> {
        self.moves.borrow_mut().push((piece_id, destination));
        let mut pieces = self.board.borrow().pieces().to_vec();
        for piece in pieces.iter_mut() {
            if piece.id == piece_id {
                piece.cell = destination;
            } else if piece.alive && piece.cell == destination {
                piece.alive = false;
            }
        }
        *self.board.borrow_mut() = BoardSnapshot::new(pieces);
        Ok(())
    }
}
