use crate::buffer::PixelBuffer;
use crate::foundation::error::{RemaskError, RemaskResult};
use crate::foundation::geom::Selection;
use crate::mask::consts::{GRID_SIZE_DOUBLE, WIN_XFORM};

/// The Win scramble: for every row and every 16px column start, run the
/// fixed [`WIN_XFORM`] swap sequence. The sequence composes to an
/// involution, so the transform is self-inverse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WinMask;

impl WinMask {
    pub fn apply(self, buf: &mut PixelBuffer, sel: Selection) -> RemaskResult<()> {
        sel.validate_for(buf.width, buf.height)?;
        if sel.w % GRID_SIZE_DOUBLE != 0 {
            return Err(RemaskError::validation(format!(
                "win needs a selection width quantized to {GRID_SIZE_DOUBLE}px, got {}",
                sel.w
            )));
        }

        for y in sel.y..sel.y + sel.h {
            for col in (0..sel.w).step_by(GRID_SIZE_DOUBLE as usize) {
                for (k, &target) in WIN_XFORM.iter().enumerate() {
                    let a = buf.offset(sel.x + col + k as u32, y);
                    let b = buf.offset(sel.x + col + target as u32, y);
                    buf.swap_px(a, b);
                }
            }
        }
        Ok(())
    }
}
