// Browser host of the board: two stacked canvases, clicks from the DOM and a game-state
// provider in the Tauri backend.

pub mod canvas_surface;
pub mod tauri_provider;
pub mod web_document;
pub mod web_element_ext;
pub mod web_error_handling;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc;

use chessboard_client::config::BoardConfig;
use chessboard_client::controller::BoardController;
use chessboard_client::display::PixelPoint;
use chessboard_client::double_buffer::DoubleBuffer;
use chessboard_client::event::ProviderRequest;
use chessboard_client::remote::execute;
use log::{info, warn};
use wasm_bindgen::prelude::*;

use crate::canvas_surface::CanvasSurface;
use crate::tauri_provider::TauriProvider;
use crate::web_document::web_document;
use crate::web_element_ext::WebElementExt;
use crate::web_error_handling::JsResult;


#[wasm_bindgen]
pub fn init_logging() -> JsResult<()> {
    console_log::init_with_level(log::Level::Debug)
        .map_err(|err| rust_error!("Cannot initialize logging: {err}"))
}

// Everything event handlers and remote calls need. The page is single-threaded, so handlers
// never overlap and a `RefCell` borrow is never held across an `await`.
struct Shared {
    controller: RefCell<BoardController<CanvasSurface>>,
    requests_rx: mpsc::Receiver<ProviderRequest>,
    provider: TauriProvider,
}

#[wasm_bindgen]
pub struct WebBoard {
    shared: Rc<Shared>,
}

#[wasm_bindgen]
impl WebBoard {
    // `config_json` may be empty, in which case default colors and sizes are used.
    pub fn new(front_canvas_id: &str, back_canvas_id: &str, config_json: &str) -> JsResult<WebBoard> {
        let config = if config_json.trim().is_empty() {
            BoardConfig::default()
        } else {
            BoardConfig::from_json(config_json).map_err(|err| rust_error!("{err}"))?
        };
        let document = web_document()?;
        let front = document.get_existing_typed_element_by_id::<web_sys::HtmlCanvasElement>(front_canvas_id)?;
        let back = document.get_existing_typed_element_by_id::<web_sys::HtmlCanvasElement>(back_canvas_id)?;
        let buffer = DoubleBuffer::new(
            CanvasSurface::new(front.clone(), config.geometry())?,
            CanvasSurface::new(back.clone(), config.geometry())?,
        );
        let (requests_tx, requests_rx) = mpsc::channel();
        let shared = Rc::new(Shared {
            controller: RefCell::new(BoardController::new(config, buffer, requests_tx)),
            requests_rx,
            provider: TauriProvider::new(),
        });
        // Only the visible canvas gets clicks, but which one that is changes on every redraw.
        for canvas in [front, back] {
            let shared = Rc::clone(&shared);
            canvas.add_event_listener_and_forget("click", move |event: web_sys::MouseEvent| {
                let p = PixelPoint::new(f64::from(event.offset_x()), f64::from(event.offset_y()));
                shared.controller.borrow_mut().on_click(p);
                dispatch_requests(&shared);
                Ok(())
            })?;
        }
        Ok(WebBoard { shared })
    }

    pub fn start(&self) {
        self.shared.controller.borrow_mut().start();
        dispatch_requests(&self.shared);
    }

    pub fn refresh(&self) {
        self.shared.controller.borrow_mut().refresh();
        dispatch_requests(&self.shared);
    }

    pub fn state(&self) -> String { self.shared.controller.borrow().state().to_string() }

    // Wires a form with a "color" field ("true" for white) to the backend's player color.
    pub fn bind_player_color_form(&self, form_id: &str) -> JsResult<()> {
        let form = web_document()?.get_existing_typed_element_by_id::<web_sys::HtmlFormElement>(form_id)?;
        let shared = Rc::clone(&self.shared);
        let form_for_listener = form.clone();
        form.add_event_listener_and_forget("submit", move |event: web_sys::Event| {
            event.prevent_default();
            let data = web_sys::FormData::new_with_form(&form_for_listener)?;
            let white = data.get("color").as_string().is_some_and(|value| value == "true");
            let shared = Rc::clone(&shared);
            wasm_bindgen_futures::spawn_local(async move {
                match shared.provider.set_player_color(white).await {
                    Ok(()) => info!("Playing as {}", if white { "white" } else { "black" }),
                    Err(err) => warn!("Cannot set player color: {err}"),
                }
                shared.controller.borrow_mut().refresh();
                dispatch_requests(&shared);
            });
            Ok(())
        })
    }
}

// Starts every queued remote call. Responses may queue more calls, so each one dispatches again
// once applied.
fn dispatch_requests(shared: &Rc<Shared>) {
    for request in shared.requests_rx.try_iter() {
        let shared = Rc::clone(shared);
        wasm_bindgen_futures::spawn_local(async move {
            let response = execute(&shared.provider, request).await;
            shared.controller.borrow_mut().process_response(response);
            dispatch_requests(&shared);
        });
    }
}
