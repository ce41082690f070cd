use crate::buffer::PixelBuffer;
use crate::foundation::error::{RemaskError, RemaskResult};
use crate::foundation::geom::Selection;

/// Permutes the R, G and B channels of every pixel in the selection.
///
/// A rotation is *not* self-inverse; `forward` and `backward` are each
/// other's inverses and the registry carries them as distinct entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelRotate {
    // src[c] is the source channel written into output channel c.
    src: [usize; 3],
}

impl ChannelRotate {
    /// The `rgb` action: r <- b, g <- r, b <- g.
    pub fn forward() -> Self {
        Self { src: [2, 0, 1] }
    }

    /// The opposite rotation: r <- g, g <- b, b <- r.
    pub fn backward() -> Self {
        Self { src: [1, 2, 0] }
    }

    /// Arbitrary channel mapping. Must be a permutation of the three
    /// channels, otherwise no inverse exists.
    pub fn new(src: [usize; 3]) -> RemaskResult<Self> {
        let mut seen = [false; 3];
        for &c in &src {
            if c > 2 || seen[c] {
                return Err(RemaskError::validation(
                    "channel mapping must be a permutation of r, g, b",
                ));
            }
            seen[c] = true;
        }
        Ok(Self { src })
    }

    pub fn inverse(self) -> Self {
        let mut src = [0usize; 3];
        for (dst, &s) in self.src.iter().enumerate() {
            src[s] = dst;
        }
        Self { src }
    }

    pub fn apply(self, buf: &mut PixelBuffer, sel: Selection) -> RemaskResult<()> {
        sel.validate_for(buf.width, buf.height)?;
        for y in sel.y..sel.y + sel.h {
            for x in sel.x..sel.x + sel.w {
                let o = buf.offset(x, y);
                let rgb = [buf.data[o], buf.data[o + 1], buf.data[o + 2]];
                for c in 0..3 {
                    buf.data[o + c] = rgb[self.src[c]];
                }
            }
        }
        Ok(())
    }
}
