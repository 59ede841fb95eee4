use wasm_bindgen::JsCast;

use crate::rust_error;
use crate::web_error_handling::JsResult;


pub struct WebDocument(web_sys::Document);

impl WebDocument {
    pub fn get_existing_element_by_id(&self, element_id: &str) -> JsResult<web_sys::Element> {
        self.0
            .get_element_by_id(element_id)
            .ok_or_else(|| rust_error!("Cannot find element \"{}\"", element_id))
    }

    pub fn get_existing_typed_element_by_id<T: JsCast>(&self, element_id: &str) -> JsResult<T> {
        self.get_existing_element_by_id(element_id)?
            .dyn_into::<T>()
            .map_err(|_| rust_error!("Element \"{}\" has unexpected type", element_id))
    }
}

pub fn web_document() -> JsResult<WebDocument> {
    let window = web_sys::window().ok_or_else(|| rust_error!("Cannot find window"))?;
    let document = window.document().ok_or_else(|| rust_error!("Cannot find document"))?;
    Ok(WebDocument(document))
}
