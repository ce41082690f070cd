use crate::buffer::PixelBuffer;
use crate::foundation::error::RemaskResult;
use crate::foundation::geom::Selection;
use crate::mask::Axis;

/// Mirrors the selection across its own center axis by swapping symmetric
/// pixel pairs. Self-inverse; an odd-size selection leaves the center
/// row/column in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlipMask {
    axis: Axis,
}

impl FlipMask {
    pub fn new(axis: Axis) -> Self {
        Self { axis }
    }

    pub fn apply(self, buf: &mut PixelBuffer, sel: Selection) -> RemaskResult<()> {
        sel.validate_for(buf.width, buf.height)?;
        match self.axis {
            Axis::Horizontal => {
                for y in sel.y..sel.y + sel.h {
                    for i in 0..sel.w / 2 {
                        let a = buf.offset(sel.x + i, y);
                        let b = buf.offset(sel.x + sel.w - 1 - i, y);
                        buf.swap_px(a, b);
                    }
                }
            }
            Axis::Vertical => {
                for i in 0..sel.h / 2 {
                    for x in sel.x..sel.x + sel.w {
                        let a = buf.offset(x, sel.y + i);
                        let b = buf.offset(x, sel.y + sel.h - 1 - i);
                        buf.swap_px(a, b);
                    }
                }
            }
        }
        Ok(())
    }
}
