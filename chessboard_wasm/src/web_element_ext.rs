use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;

use crate::web_error_handling::JsResult;


pub trait WebElementExt {
    fn set_displayed(&self, displayed: bool) -> JsResult<()>;

    fn add_event_listener_and_forget<E: FromWasmAbi + 'static>(
        &self, event_type: &str, listener: impl FnMut(E) -> JsResult<()> + 'static,
    ) -> JsResult<()>;
}

impl WebElementExt for web_sys::HtmlElement {
    fn set_displayed(&self, displayed: bool) -> JsResult<()> {
        self.style().set_property("display", if displayed { "block" } else { "none" })
    }

    // Listeners live as long as the page: board elements are never removed.
    fn add_event_listener_and_forget<E: FromWasmAbi + 'static>(
        &self, event_type: &str, listener: impl FnMut(E) -> JsResult<()> + 'static,
    ) -> JsResult<()> {
        let closure = Closure::<dyn FnMut(E) -> JsResult<()>>::new(listener);
        self.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }
}
