//! The transform engine: primitive masks, chains, and the action registry.

pub mod chain;
pub mod channel;
pub mod consts;
pub mod cp;
pub mod flip;
pub mod glass;
pub mod meko;
pub mod op;
pub mod registry;
pub mod spiral;
pub mod win;
pub mod xor;

use crate::buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::foundation::geom::Selection;

/// Axis a mirror-style mask works across.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Copy one `cell`×`cell` block from a selection snapshot into the live
/// buffer. `src` is a cell coordinate in snapshot space (origin at the
/// selection's top-left), `dst` a cell coordinate inside the selection.
pub(crate) fn copy_cell(
    buf: &mut PixelBuffer,
    snapshot: &PixelBuffer,
    sel: Selection,
    cell: u32,
    src: (u32, u32),
    dst: (u32, u32),
) {
    let row = cell as usize * BYTES_PER_PIXEL;
    for cy in 0..cell {
        let s = snapshot.offset(src.0 * cell, src.1 * cell + cy);
        let d = buf.offset(sel.x + dst.0 * cell, sel.y + dst.1 * cell + cy);
        buf.data[d..d + row].copy_from_slice(&snapshot.data[s..s + row]);
    }
}
