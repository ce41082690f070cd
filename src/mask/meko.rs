use crate::buffer::PixelBuffer;
use crate::foundation::error::{RemaskError, RemaskResult};
use crate::foundation::geom::Selection;
use crate::mask::consts::{GRID_SIZE_DOUBLE, MEKO_KEY};
use crate::mask::copy_cell;

/// Which way the Meko permutation moves cells. The two directions are each
/// other's exact inverses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MekoDirection {
    /// Gather: destination cell (x, y) is filled from the mapped source cell.
    Plus,
    /// Scatter: source cell (x, y) is written to the mapped destination cell.
    Minus,
}

/// The Meko cell permutation: 16px cells are reordered by the fixed
/// [`MEKO_KEY`] table. Cell reads go through a pre-pass snapshot because
/// the remapping aliases the selection globally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MekoMask {
    direction: MekoDirection,
}

impl MekoMask {
    pub fn new(direction: MekoDirection) -> Self {
        Self { direction }
    }

    pub fn inverse(self) -> Self {
        Self {
            direction: match self.direction {
                MekoDirection::Plus => MekoDirection::Minus,
                MekoDirection::Minus => MekoDirection::Plus,
            },
        }
    }

    pub fn apply(self, buf: &mut PixelBuffer, sel: Selection) -> RemaskResult<()> {
        sel.validate_for(buf.width, buf.height)?;
        let cell = GRID_SIZE_DOUBLE;
        if sel.w % cell != 0 || sel.h % cell != 0 {
            return Err(RemaskError::validation(format!(
                "meko needs a selection quantized to {cell}px, got {}x{}",
                sel.w, sel.h
            )));
        }

        let (bx, by) = (sel.w / cell, sel.h / cell);
        let table = permutation((bx * by) as usize)?;
        let snapshot = buf.get_region(sel)?;

        for (slot, &mapped) in table.iter().enumerate() {
            let here = (slot as u32 % bx, slot as u32 / bx);
            let there = (mapped as u32 % bx, mapped as u32 / bx);
            match self.direction {
                MekoDirection::Plus => copy_cell(buf, &snapshot, sel, cell, there, here),
                MekoDirection::Minus => copy_cell(buf, &snapshot, sel, cell, here, there),
            }
        }
        Ok(())
    }
}

/// Permutation table for a grid of `cells` cells: cell indices sorted
/// ascending by their key. `table[slot]` is the original cell index placed
/// at `slot`. Pure function of the cell count.
pub(crate) fn permutation(cells: usize) -> RemaskResult<Vec<usize>> {
    if cells > MEKO_KEY.len() {
        return Err(RemaskError::validation(format!(
            "selection has {cells} cells, meko supports at most {}",
            MEKO_KEY.len()
        )));
    }
    let mut table: Vec<usize> = (0..cells).collect();
    // Stable sort: equal keys keep index order, so the table stays a
    // deterministic bijection.
    table.sort_by_key(|&i| MEKO_KEY[i]);
    Ok(table)
}
