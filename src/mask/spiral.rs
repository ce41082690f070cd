use crate::buffer::PixelBuffer;
use crate::foundation::error::{RemaskError, RemaskResult};
use crate::foundation::geom::Selection;
use crate::mask::consts::GRID_SIZE;

/// The FL spiral: walk the selection's 8x8 blocks in a counter-clockwise
/// spiral starting at the bottom-left block, then reverse the walk pairwise
/// by swapping whole blocks. Re-running the same pairwise reversal restores
/// the original placement, so the transform is self-inverse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlSpiralMask;

impl FlSpiralMask {
    pub fn apply(self, buf: &mut PixelBuffer, sel: Selection) -> RemaskResult<()> {
        sel.validate_for(buf.width, buf.height)?;
        if sel.w % GRID_SIZE != 0 || sel.h % GRID_SIZE != 0 {
            return Err(RemaskError::validation(format!(
                "fl needs a selection quantized to {GRID_SIZE}px, got {}x{}",
                sel.w, sel.h
            )));
        }

        let order = spiral_order(sel.w / GRID_SIZE, sel.h / GRID_SIZE);
        let n = order.len();
        for i in 0..n / 2 {
            swap_blocks(buf, sel, order[i], order[n - 1 - i]);
        }
        Ok(())
    }
}

/// Counter-clockwise spiral over a `bx`×`by` block grid, starting at the
/// bottom-left block. Direction cycle: +x, -y, -x, +y, shrinking the
/// corresponding boundary after each completed side.
pub(crate) fn spiral_order(bx: u32, by: u32) -> Vec<(u32, u32)> {
    let mut order = Vec::with_capacity(bx as usize * by as usize);
    let (mut min_x, mut max_x) = (0i64, bx as i64 - 1);
    let (mut min_y, mut max_y) = (0i64, by as i64 - 1);

    while min_x <= max_x && min_y <= max_y {
        for x in min_x..=max_x {
            order.push((x as u32, max_y as u32));
        }
        max_y -= 1;
        if min_y > max_y {
            break;
        }
        for y in (min_y..=max_y).rev() {
            order.push((max_x as u32, y as u32));
        }
        max_x -= 1;
        if min_x > max_x {
            break;
        }
        for x in (min_x..=max_x).rev() {
            order.push((x as u32, min_y as u32));
        }
        min_y += 1;
        if min_y > max_y {
            break;
        }
        for y in min_y..=max_y {
            order.push((min_x as u32, y as u32));
        }
        min_x += 1;
    }
    order
}

fn swap_blocks(buf: &mut PixelBuffer, sel: Selection, a: (u32, u32), b: (u32, u32)) {
    for cy in 0..GRID_SIZE {
        for cx in 0..GRID_SIZE {
            let pa = buf.offset(sel.x + a.0 * GRID_SIZE + cx, sel.y + a.1 * GRID_SIZE + cy);
            let pb = buf.offset(sel.x + b.0 * GRID_SIZE + cx, sel.y + b.1 * GRID_SIZE + cy);
            buf.swap_px(pa, pb);
        }
    }
}
