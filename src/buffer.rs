//! Rendering buffer: a borrowed view of caller-owned pixel bytes

use std::ops::{Index, IndexMut};

/// Borrowed byte buffer interpreted as rows of pixels
///
/// The stride (bytes per row) may exceed `width * bpp` for padded rows.
/// A negative stride means the rows are stored bottom-up: geometric row 0
/// is the last byte row of the buffer. The flip is applied on every
/// access, the bytes are never reordered.
#[derive(Debug)]
pub struct RenderingBuffer<'a> {
    /// Pixel data
    pub data: &'a mut [u8],
    /// Image width in pixels
    pub width: usize,
    /// Image height in pixels
    pub height: usize,
    /// Bytes per pixel
    pub bpp: usize,
    row_bytes: usize,
    flip_y: bool,
}

impl<'a> RenderingBuffer<'a> {
    /// Attach to a caller-owned buffer
    ///
    /// Preconditions (checked by Canvas construction): `|stride|` holds a
    /// full row of `width` pixels and `data` holds `height` rows
    pub fn from_buf(
        data: &'a mut [u8],
        width: usize,
        height: usize,
        bpp: usize,
        stride: i64,
    ) -> Self {
        let row_bytes = stride.unsigned_abs() as usize;
        debug_assert!(row_bytes >= width * bpp, "stride too small");
        debug_assert!(data.len() >= height * row_bytes, "buffer too small");
        RenderingBuffer {
            data,
            width,
            height,
            bpp,
            row_bytes,
            flip_y: stride < 0,
        }
    }
    /// Byte offset of the start of geometric row `y`
    fn row_offset(&self, y: usize) -> usize {
        let row = if self.flip_y { self.height - 1 - y } else { y };
        row * self.row_bytes
    }
    /// Fill the buffer with 255, including any row padding
    pub fn clear(&mut self) {
        for v in self.data.iter_mut() {
            *v = 255;
        }
    }
}

impl<'a> Index<(usize, usize)> for RenderingBuffer<'a> {
    type Output = [u8];
    fn index(&self, index: (usize, usize)) -> &[u8] {
        debug_assert!(index.0 < self.width, "request {} >= {} width", index.0, self.width);
        debug_assert!(index.1 < self.height, "request {} >= {} height", index.1, self.height);
        let i = self.row_offset(index.1) + index.0 * self.bpp;
        &self.data[i..]
    }
}
impl<'a> IndexMut<(usize, usize)> for RenderingBuffer<'a> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut [u8] {
        debug_assert!(index.0 < self.width, "request {} >= {} width", index.0, self.width);
        debug_assert!(index.1 < self.height, "request {} >= {} height", index.1, self.height);
        let i = self.row_offset(index.1) + index.0 * self.bpp;
        &mut self.data[i..]
    }
}
