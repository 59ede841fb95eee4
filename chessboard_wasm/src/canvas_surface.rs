use std::f64::consts::TAU;

use chessboard_client::display::{BoardGeometry, PixelPoint};
use chessboard_client::surface::Surface;
use log::error;
use wasm_bindgen::JsCast;

use crate::rust_error;
use crate::web_element_ext::WebElementExt;
use crate::web_error_handling::{JsResult, describe_js_error};


// One of the two stacked board canvases.
pub struct CanvasSurface {
    canvas: web_sys::HtmlCanvasElement,
    context: web_sys::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web_sys::HtmlCanvasElement, geometry: BoardGeometry) -> JsResult<Self> {
        canvas.set_width(geometry.board_width_px().ceil() as u32);
        canvas.set_height(geometry.board_height_px().ceil() as u32);
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| rust_error!("Canvas has no 2d context"))?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()
            .map_err(|_| rust_error!("Unexpected canvas context type"))?;
        context.set_font(&format!("bold {}px sans-serif", (geometry.cell_size_px * 0.45).round()));
        context.set_text_align("center");
        context.set_text_baseline("middle");
        Ok(CanvasSurface { canvas, context })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        let width = f64::from(self.canvas.width());
        let height = f64::from(self.canvas.height());
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_rect(&mut self, top_left: PixelPoint, width: f64, height: f64, color: &str) {
        self.context.set_fill_style_str(color);
        self.context.fill_rect(top_left.x, top_left.y, width, height);
    }

    fn fill_circle(&mut self, center: PixelPoint, radius: f64, color: &str) {
        self.context.set_fill_style_str(color);
        self.context.begin_path();
        if let Err(err) = self.context.arc(center.x, center.y, radius, 0.0, TAU) {
            error!("Cannot draw circle at {center:?}: {}", describe_js_error(&err));
            return;
        }
        self.context.fill();
    }

    fn fill_text(&mut self, text: &str, center: PixelPoint, color: &str) {
        self.context.set_fill_style_str(color);
        if let Err(err) = self.context.fill_text(text, center.x, center.y) {
            error!("Cannot draw text \"{text}\": {}", describe_js_error(&err));
        }
    }

    fn set_visible(&mut self, visible: bool) {
        if let Err(err) = self.canvas.set_displayed(visible) {
            error!("Cannot change canvas visibility: {}", describe_js_error(&err));
        }
    }
}
