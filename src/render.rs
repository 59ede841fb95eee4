use crate::board::{BoardSnapshot, MoveOptionSet};
use crate::config::BoardStyle;
use crate::coord::Cell;
use crate::display::{BoardGeometry, cell_to_pixel_center, cell_to_pixel_corner};
use crate::piece::kind_label;
use crate::surface::Surface;


// Tone is chosen by `(col + row) % 2` rather than by a running fill counter. For a square
// board both give the same picture; this one does not depend on traversal order.
pub fn is_dark_square(cell: Cell) -> bool {
    (cell.col.to_zero_based() + cell.row.to_zero_based()) % 2 == 0
}

pub fn paint_background(surface: &mut impl Surface, geometry: BoardGeometry, style: &BoardStyle) {
    let size = geometry.cell_size_px;
    for cell in Cell::all() {
        let color = if is_dark_square(cell) { &style.dark_square } else { &style.light_square };
        surface.fill_rect(cell_to_pixel_corner(cell, size), size, size, color);
    }
}

pub fn paint_pieces(
    surface: &mut impl Surface, snapshot: &BoardSnapshot, geometry: BoardGeometry,
    style: &BoardStyle,
) {
    let size = geometry.cell_size_px;
    for piece in snapshot.alive_pieces() {
        let center = cell_to_pixel_center(piece.cell, size);
        surface.fill_circle(center, size * style.piece_radius_fraction, style.piece_fill(piece.force));
        surface.fill_text(&kind_label(&piece.kind), center, style.piece_label(piece.force));
    }
}

pub fn paint_markers<'a>(
    surface: &mut impl Surface, cells: impl IntoIterator<Item = &'a Cell>, color: &str,
    radius_fraction: f64, geometry: BoardGeometry,
) {
    let size = geometry.cell_size_px;
    for &cell in cells {
        surface.fill_circle(cell_to_pixel_center(cell, size), size * radius_fraction, color);
    }
}

// Everything that goes on top of the background: pieces, then the two marker sets as separate
// layers.
pub fn paint_board(
    surface: &mut impl Surface, snapshot: &BoardSnapshot, options: &MoveOptionSet,
    geometry: BoardGeometry, style: &BoardStyle,
) {
    paint_pieces(surface, snapshot, geometry, style);
    paint_markers(
        surface,
        &options.movable,
        &style.movable_marker_color,
        style.movable_marker_radius_fraction,
        geometry,
    );
    paint_markers(
        surface,
        &options.killable,
        &style.killable_marker_color,
        style.killable_marker_radius_fraction,
        geometry,
    );
}
