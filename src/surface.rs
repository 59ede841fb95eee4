use crate::display::PixelPoint;


// Drawing primitives the board renderer needs. Colors are CSS color strings.
//
// Implementations are not expected to fail: a backend that can fail (e.g. a browser canvas)
// should log the error and carry on, since a glitch in one frame is fixed by the next redraw.
pub trait Surface {
    fn clear(&mut self);
    fn fill_rect(&mut self, top_left: PixelPoint, width: f64, height: f64, color: &str);
    fn fill_circle(&mut self, center: PixelPoint, radius: f64, color: &str);
    fn fill_text(&mut self, text: &str, center: PixelPoint, color: &str);
    fn set_visible(&mut self, visible: bool);
}
