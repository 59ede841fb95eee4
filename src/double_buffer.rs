use crate::config::BoardStyle;
use crate::display::BoardGeometry;
use crate::render::paint_background;
use crate::surface::Surface;


// Two surfaces: the front one is visible, the back one is where the next frame is painted.
// A frame becomes visible only by `commit_redraw`, which swaps the roles in one step, so the
// user never sees a half-painted board.
pub struct DoubleBuffer<S> {
    surfaces: [S; 2],
    front: usize,
    redraw_pending: bool,
}

impl<S: Surface> DoubleBuffer<S> {
    pub fn new(mut first: S, mut second: S) -> Self {
        first.set_visible(true);
        second.set_visible(false);
        DoubleBuffer {
            surfaces: [first, second],
            front: 0,
            redraw_pending: false,
        }
    }

    pub fn front(&self) -> &S { &self.surfaces[self.front] }
    pub fn back(&self) -> &S { &self.surfaces[self.back_index()] }
    pub fn front_index(&self) -> usize { self.front }
    pub fn is_redraw_pending(&self) -> bool { self.redraw_pending }

    // Starts a new frame on the back surface and returns it for painting the rest.
    pub fn begin_redraw(&mut self, geometry: BoardGeometry, style: &BoardStyle) -> &mut S {
        let back_index = self.back_index();
        let back = &mut self.surfaces[back_index];
        back.clear();
        paint_background(back, geometry, style);
        self.redraw_pending = true;
        back
    }

    // Makes the frame started by `begin_redraw` visible. Without a pending frame this is a
    // no-op. Returns whether the buffers were swapped.
    pub fn commit_redraw(&mut self) -> bool {
        if !self.redraw_pending {
            return false;
        }
        self.redraw_pending = false;
        self.front = self.back_index();
        let back_index = self.back_index();
        self.surfaces[self.front].set_visible(true);
        self.surfaces[back_index].set_visible(false);
        true
    }

    fn back_index(&self) -> usize { 1 - self.front }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::RecordingSurface;

    const GEOMETRY: BoardGeometry = BoardGeometry::new(40.0);

    fn new_buffer() -> DoubleBuffer<RecordingSurface> {
        DoubleBuffer::new(RecordingSurface::new(), RecordingSurface::new())
    }

    #[test]
    fn exactly_one_visible() {
        let mut buffer = new_buffer();
        for _ in 0..3 {
            assert!(buffer.front().is_visible());
            assert!(!buffer.back().is_visible());
            buffer.begin_redraw(GEOMETRY, &BoardStyle::default());
            assert!(buffer.front().is_visible());
            assert!(!buffer.back().is_visible());
            assert!(buffer.commit_redraw());
        }
    }

    #[test]
    fn paints_on_back_only() {
        let mut buffer = new_buffer();
        let surface = buffer.begin_redraw(GEOMETRY, &BoardStyle::default());
        surface.fill_text("x", crate::display::PixelPoint::new(1.0, 1.0), "red");
        assert!(buffer.front().ops().is_empty());
        assert_eq!(buffer.back().ops().len(), 65);
        buffer.commit_redraw();
        assert_eq!(buffer.front().ops().len(), 65);
        assert_eq!(buffer.front_index(), 1);
    }

    #[test]
    fn begin_clears_reused_surface() {
        let mut buffer = new_buffer();
        buffer.begin_redraw(GEOMETRY, &BoardStyle::default());
        buffer.commit_redraw();
        buffer.begin_redraw(GEOMETRY, &BoardStyle::default());
        buffer.commit_redraw();
        buffer.begin_redraw(GEOMETRY, &BoardStyle::default());
        assert_eq!(buffer.back().num_clears(), 2);
        assert_eq!(buffer.back().ops().len(), 64);
    }

    #[test]
    fn second_commit_is_noop() {
        let mut buffer = new_buffer();
        buffer.begin_redraw(GEOMETRY, &BoardStyle::default());
        assert!(buffer.is_redraw_pending());
        assert!(buffer.commit_redraw());
        let front = buffer.front_index();
        assert!(!buffer.commit_redraw());
        assert_eq!(buffer.front_index(), front);
        assert!(buffer.front().is_visible());
        assert!(!buffer.back().is_visible());
    }
}
