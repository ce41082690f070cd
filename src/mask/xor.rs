use crate::buffer::PixelBuffer;
use crate::foundation::error::{RemaskError, RemaskResult};
use crate::foundation::geom::Selection;

/// XORs the R, G and B channels of every pixel in the selection with a
/// fixed byte; alpha is untouched. Self-inverse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct XorMask {
    mask: u8,
}

impl XorMask {
    /// Masks outside `0x00..=0xff` are a configuration error and are
    /// rejected here, before the transform can be scheduled.
    pub fn new(mask: u32) -> RemaskResult<Self> {
        if mask > 0xff {
            return Err(RemaskError::validation(format!(
                "xor mask must be between 0x00 and 0xff, got {mask:#x}"
            )));
        }
        Ok(Self { mask: mask as u8 })
    }

    pub fn mask(self) -> u8 {
        self.mask
    }

    pub fn apply(self, buf: &mut PixelBuffer, sel: Selection) -> RemaskResult<()> {
        sel.validate_for(buf.width, buf.height)?;
        for y in sel.y..sel.y + sel.h {
            for x in sel.x..sel.x + sel.w {
                let o = buf.offset(x, y);
                buf.data[o] ^= self.mask;
                buf.data[o + 1] ^= self.mask;
                buf.data[o + 2] ^= self.mask;
            }
        }
        Ok(())
    }
}
