// Game-state provider living in the Tauri backend, reached through the `invoke` bridge that
// Tauri injects into the page as `window.__TAURI__.tauri.invoke`.

use async_trait::async_trait;
use chessboard_client::board::{BoardSnapshot, MoveOptionSet};
use chessboard_client::coord::Cell;
use chessboard_client::piece::PieceId;
use chessboard_client::remote::{GameStateProvider, RemoteError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::web_error_handling::describe_js_error;


#[derive(Serialize)]
struct NoArgs {}

#[derive(Serialize)]
struct PieceArgs {
    id: PieceId,
}

#[derive(Serialize)]
struct PositionArgs {
    id: PieceId,
    position: Cell,
}

#[derive(Serialize)]
struct PlayerColorArgs {
    white: bool,
}

pub struct TauriProvider;

impl TauriProvider {
    pub fn new() -> Self { TauriProvider }

    // Tells the backend which side this player is. Not part of the board protocol: the board
    // only sees the consequences through `get_options`.
    pub async fn set_player_color(&self, white: bool) -> Result<(), RemoteError> {
        self.invoke("set_player_color", &PlayerColorArgs { white }).await
    }

    async fn invoke<T: DeserializeOwned>(
        &self, command: &str, args: &impl Serialize,
    ) -> Result<T, RemoteError> {
        let invoke = tauri_invoke_function()?;
        let args = to_js(args)?;
        let promise = invoke
            .call2(&JsValue::NULL, &JsValue::from_str(command), &args)
            .map_err(|err| RemoteError::Transport(describe_js_error(&err)))?
            .dyn_into::<js_sys::Promise>()
            .map_err(|_| RemoteError::Transport("invoke did not return a promise".to_owned()))?;
        // Tauri rejects the promise with whatever the command returned as its error.
        let value = JsFuture::from(promise)
            .await
            .map_err(|err| RemoteError::Provider(format!("{command}: {}", describe_js_error(&err))))?;
        from_js(&value)
    }
}

#[async_trait(?Send)]
impl GameStateProvider for TauriProvider {
    async fn get_board(&self) -> Result<BoardSnapshot, RemoteError> {
        self.invoke("get_board", &NoArgs {}).await
    }

    async fn get_options(&self, piece_id: PieceId) -> Result<Option<MoveOptionSet>, RemoteError> {
        self.invoke("get_options", &PieceArgs { id: piece_id }).await
    }

    async fn set_position(&self, piece_id: PieceId, destination: Cell) -> Result<(), RemoteError> {
        self.invoke("set_position", &PositionArgs { id: piece_id, position: destination }).await
    }
}

fn tauri_invoke_function() -> Result<js_sys::Function, RemoteError> {
    let window = web_sys::window()
        .ok_or_else(|| RemoteError::Transport("no window".to_owned()))?;
    let lookup = |target: &JsValue, key: &str| {
        js_sys::Reflect::get(target, &JsValue::from_str(key))
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .ok_or_else(|| RemoteError::Transport(format!("Tauri API not found: missing \"{key}\"")))
    };
    let tauri = lookup(&window, "__TAURI__")?;
    let api = lookup(&tauri, "tauri")?;
    lookup(&api, "invoke")?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| RemoteError::Transport("Tauri invoke is not a function".to_owned()))
}

// Values cross the bridge as JSON, so the wire format is exactly the serde one.
fn to_js(value: &impl Serialize) -> Result<JsValue, RemoteError> {
    let json = serde_json::to_string(value).map_err(|err| RemoteError::Malformed(err.to_string()))?;
    js_sys::JSON::parse(&json).map_err(|err| RemoteError::Malformed(describe_js_error(&err)))
}

fn from_js<T: DeserializeOwned>(value: &JsValue) -> Result<T, RemoteError> {
    // Commands returning nothing resolve to `undefined`, which has no JSON representation.
    let json = if value.is_undefined() {
        "null".to_owned()
    } else {
        js_sys::JSON::stringify(value)
            .map_err(|err| RemoteError::Malformed(describe_js_error(&err)))?
            .into()
    };
    serde_json::from_str(&json).map_err(|err| RemoteError::Malformed(err.to_string()))
}
