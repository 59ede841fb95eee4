// Interaction state machine of the board.
//
// The controller never waits for the provider. Requests go out through `requests_tx`;
// whoever owns the other end performs them (see `driver` and the web client) and feeds the
// results back via `process_response`, in whatever order they complete. Responses that belong
// to a superseded selection or an older board fetch are dropped.

use std::sync::mpsc;

use log::{debug, info, trace, warn};

use crate::board::{BoardSnapshot, MarkerKind, MoveOptionSet};
use crate::config::BoardConfig;
use crate::coord::Cell;
use crate::display::PixelPoint;
use crate::double_buffer::DoubleBuffer;
use crate::event::{BoardRequestId, ProviderRequest, ProviderResponse, RequestGeneration};
use crate::internal_error_message;
use crate::piece::PieceId;
use crate::remote::RemoteError;
use crate::render;
use crate::surface::Surface;


#[derive(Clone, Copy, PartialEq, Eq, Debug, strum::Display)]
pub enum InteractionState {
    Idle,
    AwaitingOptions,
    Selected,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Selection {
    AwaitingOptions { piece_id: PieceId },
    Selected { piece_id: PieceId, options: MoveOptionSet },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HitTarget {
    Marker(MarkerKind),
    Piece(PieceId),
    Empty,
}

pub struct BoardController<S> {
    config: BoardConfig,
    buffer: DoubleBuffer<S>,
    requests_tx: mpsc::Sender<ProviderRequest>,
    // Last applied board. Everything on screen comes from here.
    snapshot: Option<BoardSnapshot>,
    selection: Option<Selection>,
    generation: RequestGeneration,
    last_board_request: BoardRequestId,
    last_applied_board: Option<BoardRequestId>,
    // Markers on the front surface.
    displayed_markers: MoveOptionSet,
}


impl Selection {
    pub fn piece_id(&self) -> PieceId {
        match self {
            Selection::AwaitingOptions { piece_id } | Selection::Selected { piece_id, .. } => {
                *piece_id
            }
        }
    }
}

impl<S: Surface> BoardController<S> {
    pub fn new(
        config: BoardConfig, buffer: DoubleBuffer<S>, requests_tx: mpsc::Sender<ProviderRequest>,
    ) -> Self {
        BoardController {
            config,
            buffer,
            requests_tx,
            snapshot: None,
            selection: None,
            generation: RequestGeneration::default(),
            last_board_request: BoardRequestId::default(),
            last_applied_board: None,
            displayed_markers: MoveOptionSet::default(),
        }
    }

    pub fn buffer(&self) -> &DoubleBuffer<S> { &self.buffer }
    pub fn snapshot(&self) -> Option<&BoardSnapshot> { self.snapshot.as_ref() }
    pub fn selection(&self) -> Option<&Selection> { self.selection.as_ref() }
    pub fn generation(&self) -> RequestGeneration { self.generation }
    pub fn displayed_markers(&self) -> &MoveOptionSet { &self.displayed_markers }

    pub fn state(&self) -> InteractionState {
        match self.selection {
            None => InteractionState::Idle,
            Some(Selection::AwaitingOptions { .. }) => InteractionState::AwaitingOptions,
            Some(Selection::Selected { .. }) => InteractionState::Selected,
        }
    }

    // Requests the initial board.
    pub fn start(&mut self) { self.fetch_board(); }

    // Re-reads the board keeping the selection, e.g. after something changed provider-side.
    pub fn refresh(&mut self) { self.fetch_board(); }

    pub fn hit_test(&self, cell: Cell) -> HitTarget {
        if let Some(Selection::Selected { options, .. }) = &self.selection {
            if let Some(kind) = options.marker_at(cell) {
                return HitTarget::Marker(kind);
            }
        }
        match self.snapshot.as_ref().and_then(|snapshot| snapshot.alive_piece_at(cell)) {
            Some(piece) => HitTarget::Piece(piece.id),
            None => HitTarget::Empty,
        }
    }

    pub fn on_click(&mut self, p: PixelPoint) {
        let Some(cell) = self.config.geometry().cell_at(p) else {
            trace!("Ignoring click outside of the board at {p:?}");
            return;
        };
        self.on_cell_click(cell);
    }

    pub fn on_cell_click(&mut self, cell: Cell) {
        match self.hit_test(cell) {
            HitTarget::Marker(kind) => self.submit_move(cell, kind),
            HitTarget::Piece(piece_id) => self.select_piece(piece_id),
            HitTarget::Empty => {
                if self.selection.is_some() {
                    self.deselect();
                } else if self.snapshot.is_none() {
                    // The board never arrived. Use the click as a reason to try again.
                    self.fetch_board();
                } else {
                    trace!("Click on empty {cell:?} while idle");
                }
            }
        }
    }

    pub fn process_response(&mut self, response: ProviderResponse) {
        match response {
            ProviderResponse::Board { request_id, result } => self.apply_board(request_id, result),
            ProviderResponse::Options { generation, piece_id, result } => {
                self.apply_options(generation, piece_id, result)
            }
            ProviderResponse::PositionSet { piece_id, destination, result } => {
                self.apply_position_set(piece_id, destination, result)
            }
        }
    }

    fn select_piece(&mut self, piece_id: PieceId) {
        self.generation = self.generation.next();
        debug!("Selecting piece {} ({})", piece_id, self.generation);
        self.selection = Some(Selection::AwaitingOptions { piece_id });
        self.send(ProviderRequest::GetOptions { generation: self.generation, piece_id });
        // Full redraw: clears the markers of the previous selection. New markers are added
        // when the options arrive.
        self.fetch_board();
    }

    fn submit_move(&mut self, destination: Cell, kind: MarkerKind) {
        let piece_id = match &self.selection {
            Some(Selection::Selected { piece_id, .. }) => *piece_id,
            _ => {
                warn!("{}", internal_error_message!("marker hit without selected piece"));
                return;
            }
        };
        info!("Moving piece {piece_id} to {destination:?} ({kind})");
        self.selection = None;
        self.generation = self.generation.next();
        self.send(ProviderRequest::SetPosition { piece_id, destination });
        // Options are void once a move is submitted. The board after the move comes with the
        // fetch that follows the acknowledgement.
        self.clear_markers();
    }

    fn deselect(&mut self) {
        if let Some(selection) = self.selection.take() {
            debug!("Deselecting piece {}", selection.piece_id());
        }
        self.generation = self.generation.next();
        self.redraw();
    }

    fn apply_board(&mut self, request_id: BoardRequestId, result: Result<BoardSnapshot, RemoteError>) {
        if self.last_applied_board.is_some_and(|last| request_id <= last) {
            debug!("Dropping stale board response {request_id:?}");
            return;
        }
        let snapshot = match result {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!("Cannot fetch board: {err}");
                // A newer fetch is still on its way if this one is not the latest.
                if request_id == self.last_board_request {
                    self.abandon_selection();
                }
                return;
            }
        };
        self.last_applied_board = Some(request_id);
        if let Some(selection) = &self.selection {
            let piece_id = selection.piece_id();
            let old_cell = self.snapshot.as_ref().and_then(|s| s.piece(piece_id)).map(|p| p.cell);
            match snapshot.piece(piece_id) {
                Some(piece) if piece.alive && old_cell.is_none_or(|cell| cell == piece.cell) => {}
                Some(piece) if piece.alive => {
                    debug!("Selected piece {piece_id} moved to {:?}", piece.cell);
                    self.selection = None;
                    self.generation = self.generation.next();
                }
                _ => {
                    debug!("Selected piece {piece_id} is no longer on the board");
                    self.selection = None;
                    self.generation = self.generation.next();
                }
            }
        }
        self.snapshot = Some(snapshot);
        self.redraw();
    }

    fn apply_options(
        &mut self, generation: RequestGeneration, piece_id: PieceId,
        result: Result<Option<MoveOptionSet>, RemoteError>,
    ) {
        let is_current = generation == self.generation
            && self.selection == Some(Selection::AwaitingOptions { piece_id });
        if !is_current {
            debug!("Dropping stale options for piece {piece_id} ({generation})");
            return;
        }
        match result {
            Ok(Some(options)) => {
                debug!(
                    "Piece {} options: {} movable, {} killable",
                    piece_id,
                    options.movable.len(),
                    options.killable.len()
                );
                self.selection = Some(Selection::Selected { piece_id, options });
                self.redraw();
            }
            Ok(None) => {
                debug!("Piece {piece_id} cannot move now");
                self.selection = None;
                self.clear_markers();
            }
            Err(err) => {
                warn!("Cannot get options for piece {piece_id}: {err}");
                self.selection = None;
                self.clear_markers();
            }
        }
    }

    fn apply_position_set(
        &mut self, piece_id: PieceId, destination: Cell, result: Result<(), RemoteError>,
    ) {
        match result {
            Ok(()) => debug!("Move of piece {piece_id} to {destination:?} acknowledged"),
            Err(err) => warn!("Cannot move piece {piece_id} to {destination:?}: {err}"),
        }
        // Either way the provider is the judge of what the board looks like now.
        self.fetch_board();
    }

    fn abandon_selection(&mut self) {
        if let Some(selection) = self.selection.take() {
            debug!("Dropping selection of piece {}", selection.piece_id());
            self.generation = self.generation.next();
            self.clear_markers();
        }
    }

    fn fetch_board(&mut self) {
        self.last_board_request = self.last_board_request.next();
        self.send(ProviderRequest::GetBoard { request_id: self.last_board_request });
    }

    // Markers of a previous selection may still be on screen if the board fetch that was
    // supposed to clear them has not come back yet.
    fn clear_markers(&mut self) {
        if !self.displayed_markers.is_empty() {
            self.redraw();
        }
    }

    // One full redraw cycle: background, pieces and markers go to the back surface, which then
    // becomes visible.
    fn redraw(&mut self) {
        let Some(snapshot) = &self.snapshot else {
            debug!("Nothing to draw: no board yet");
            return;
        };
        let markers = match &self.selection {
            Some(Selection::Selected { options, .. }) => options.clone(),
            _ => MoveOptionSet::default(),
        };
        let geometry = self.config.geometry();
        let style = &self.config.style;
        let surface = self.buffer.begin_redraw(geometry, style);
        render::paint_board(surface, snapshot, &markers, geometry, style);
        self.buffer.commit_redraw();
        self.displayed_markers = markers;
    }

    fn send(&self, request: ProviderRequest) {
        if let Err(err) = self.requests_tx.send(request) {
            warn!("{}", internal_error_message!("cannot send request {:?}", err.0));
        }
    }
}
