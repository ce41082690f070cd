use crate::buffer::PixelBuffer;
use crate::foundation::error::{RemaskError, RemaskResult};
use crate::foundation::geom::Selection;
use crate::mask::Axis;
use crate::mask::consts::GRID_SIZE;

/// The "glass block" effect: the selection is cut into 8px strips and each
/// strip is mirrored in place (offset k swaps with offset 7-k), like light
/// through ribbed glass. Self-inverse.
///
/// `Horizontal` mirrors within 8px-wide column strips, `Vertical` within
/// 8px-tall row strips.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlassMask {
    axis: Axis,
}

impl GlassMask {
    pub fn new(axis: Axis) -> Self {
        Self { axis }
    }

    pub fn apply(self, buf: &mut PixelBuffer, sel: Selection) -> RemaskResult<()> {
        sel.validate_for(buf.width, buf.height)?;
        if sel.w % GRID_SIZE != 0 || sel.h % GRID_SIZE != 0 {
            return Err(RemaskError::validation(format!(
                "glass needs a selection quantized to {GRID_SIZE}px, got {}x{}",
                sel.w, sel.h
            )));
        }

        match self.axis {
            Axis::Horizontal => {
                for strip in (0..sel.w).step_by(GRID_SIZE as usize) {
                    for y in sel.y..sel.y + sel.h {
                        for k in 0..GRID_SIZE / 2 {
                            let a = buf.offset(sel.x + strip + k, y);
                            let b = buf.offset(sel.x + strip + GRID_SIZE - 1 - k, y);
                            buf.swap_px(a, b);
                        }
                    }
                }
            }
            Axis::Vertical => {
                for strip in (0..sel.h).step_by(GRID_SIZE as usize) {
                    for k in 0..GRID_SIZE / 2 {
                        for x in sel.x..sel.x + sel.w {
                            let a = buf.offset(x, sel.y + strip + k);
                            let b = buf.offset(x, sel.y + strip + GRID_SIZE - 1 - k);
                            buf.swap_px(a, b);
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
