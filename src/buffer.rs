use crate::foundation::error::{RemaskError, RemaskResult};
use crate::foundation::geom::Selection;

/// Bytes per pixel: R, G, B, A.
pub const BYTES_PER_PIXEL: usize = 4;

/// Byte offset of pixel (x, y) in a row-major RGBA8 buffer of the given width.
pub fn offset(width: u32, x: u32, y: u32) -> usize {
    (y as usize * width as usize + x as usize) * BYTES_PER_PIXEL
}

/// A row-major RGBA8 pixel buffer (straight alpha, 4 bytes per pixel).
///
/// Buffers are owned by the caller; transforms mutate them in place and
/// never touch bytes outside the selection they were handed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a zeroed (transparent black) buffer.
    pub fn new(width: u32, height: u32) -> RemaskResult<Self> {
        let len = byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Wrap existing pixel data, checking that its length matches the
    /// dimensions exactly.
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> RemaskResult<Self> {
        let len = byte_len(width, height)?;
        if data.len() != len {
            return Err(RemaskError::validation(format!(
                "pixel data is {} bytes, {}x{} rgba8 needs {}",
                data.len(),
                width,
                height,
                len
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn offset(&self, x: u32, y: u32) -> usize {
        offset(self.width, x, y)
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let o = self.offset(x, y);
        [
            self.data[o],
            self.data[o + 1],
            self.data[o + 2],
            self.data[o + 3],
        ]
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, px: [u8; 4]) {
        let o = self.offset(x, y);
        self.data[o..o + BYTES_PER_PIXEL].copy_from_slice(&px);
    }

    /// Exchange the 4 bytes at two pixel offsets. All swap-based transforms
    /// are built from this primitive.
    pub fn swap_px(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let mut tmp = [0u8; BYTES_PER_PIXEL];
        tmp.copy_from_slice(&self.data[a..a + BYTES_PER_PIXEL]);
        self.data.copy_within(b..b + BYTES_PER_PIXEL, a);
        self.data[b..b + BYTES_PER_PIXEL].copy_from_slice(&tmp);
    }

    /// Copy a rectangular region out into a new buffer.
    ///
    /// Permutation transforms use this to take the frozen snapshot they
    /// read from while rewriting the selection (remapped reads and writes
    /// alias the same region otherwise).
    pub fn get_region(&self, sel: Selection) -> RemaskResult<Self> {
        sel.validate_for(self.width, self.height)?;
        let mut out = Self::new(sel.w, sel.h)?;
        let row = sel.w as usize * BYTES_PER_PIXEL;
        for y in 0..sel.h {
            let src = self.offset(sel.x, sel.y + y);
            let dst = out.offset(0, y);
            out.data[dst..dst + row].copy_from_slice(&self.data[src..src + row]);
        }
        Ok(out)
    }

    /// Blit a region buffer back at (x, y).
    pub fn put_region(&mut self, region: &Self, x: u32, y: u32) -> RemaskResult<()> {
        Selection::new(x, y, region.width, region.height).validate_for(self.width, self.height)?;
        let row = region.width as usize * BYTES_PER_PIXEL;
        for ry in 0..region.height {
            let src = region.offset(0, ry);
            let dst = self.offset(x, y + ry);
            self.data[dst..dst + row].copy_from_slice(&region.data[src..src + row]);
        }
        Ok(())
    }
}

fn byte_len(width: u32, height: u32) -> RemaskResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(BYTES_PER_PIXEL))
        .ok_or_else(|| RemaskError::validation("pixel buffer size overflow"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_row_major_times_four() {
        assert_eq!(offset(10, 0, 0), 0);
        assert_eq!(offset(10, 3, 0), 12);
        assert_eq!(offset(10, 0, 2), 80);
        assert_eq!(offset(10, 3, 2), 92);
    }

    #[test]
    fn from_data_rejects_length_mismatch() {
        assert!(PixelBuffer::from_data(2, 2, vec![0; 16]).is_ok());
        assert!(PixelBuffer::from_data(2, 2, vec![0; 15]).is_err());
        assert!(PixelBuffer::from_data(2, 2, vec![0; 17]).is_err());
    }

    #[test]
    fn swap_px_exchanges_whole_pixels() {
        let mut buf = PixelBuffer::from_data(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let (a, b) = (buf.offset(0, 0), buf.offset(1, 0));
        buf.swap_px(a, b);
        assert_eq!(buf.data, vec![5, 6, 7, 8, 1, 2, 3, 4]);
        buf.swap_px(a, a);
        assert_eq!(buf.pixel(0, 0), [5, 6, 7, 8]);
    }

    #[test]
    fn region_roundtrip_restores_pixels() {
        let mut buf = PixelBuffer::new(4, 4).unwrap();
        for (i, b) in buf.data.iter_mut().enumerate() {
            *b = i as u8;
        }
        let before = buf.clone();

        let sel = Selection::new(1, 1, 2, 3);
        let region = buf.get_region(sel).unwrap();
        assert_eq!(region.width, 2);
        assert_eq!(region.height, 3);
        assert_eq!(region.pixel(0, 0), buf.pixel(1, 1));

        buf.put_region(&region, sel.x, sel.y).unwrap();
        assert_eq!(buf, before);
    }

    #[test]
    fn put_region_rejects_overflow_placement() {
        let mut buf = PixelBuffer::new(4, 4).unwrap();
        let region = PixelBuffer::new(2, 2).unwrap();
        assert!(buf.put_region(&region, 3, 0).is_err());
        assert!(buf.put_region(&region, 2, 2).is_ok());
    }
}
