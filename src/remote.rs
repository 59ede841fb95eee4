use std::fmt;

use async_trait::async_trait;

use crate::board::{BoardSnapshot, MoveOptionSet};
use crate::coord::Cell;
use crate::event::{ProviderRequest, ProviderResponse};
use crate::piece::PieceId;


// None of these are fatal: the controller logs them and goes back to idle.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum RemoteError {
    // The call did not reach the provider or the answer did not come back.
    Transport(String),
    // The provider received the call and failed it.
    Provider(String),
    // The answer came back but could not be understood.
    Malformed(String),
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteError::Transport(message) => write!(f, "transport error: {message}"),
            RemoteError::Provider(message) => write!(f, "provider error: {message}"),
            RemoteError::Malformed(message) => write!(f, "malformed response: {message}"),
        }
    }
}

impl std::error::Error for RemoteError {}


// The game-state authority. It owns the rules; the board client only asks and displays.
//
// Methods take `&self` so that several calls can be in flight at once. Futures are not `Send`:
// the client runs on a single thread (in the browser there is no other choice).
#[async_trait(?Send)]
pub trait GameStateProvider {
    async fn get_board(&self) -> Result<BoardSnapshot, RemoteError>;
    async fn get_options(&self, piece_id: PieceId) -> Result<Option<MoveOptionSet>, RemoteError>;
    async fn set_position(&self, piece_id: PieceId, destination: Cell) -> Result<(), RemoteError>;
}

// Performs one request and tags the result with everything needed to tell whether it's stale.
pub async fn execute<P>(provider: &P, request: ProviderRequest) -> ProviderResponse
where
    P: GameStateProvider + ?Sized,
{
    match request {
        ProviderRequest::GetBoard { request_id } => ProviderResponse::Board {
            request_id,
            result: provider.get_board().await,
        },
        ProviderRequest::GetOptions { generation, piece_id } => ProviderResponse::Options {
            generation,
            piece_id,
            result: provider.get_options(piece_id).await,
        },
        ProviderRequest::SetPosition { piece_id, destination } => ProviderResponse::PositionSet {
            piece_id,
            destination,
            result: provider.set_position(piece_id, destination).await,
        },
    }
}
