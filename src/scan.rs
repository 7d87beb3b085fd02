//! Scanline container

/// Horizontal run of pixels with per-pixel coverage
#[derive(Debug, Default)]
pub struct Span {
    pub x: i64,
    pub len: i64,
    pub covers: Vec<u64>,
}

/// Unpacked scanline: spans of 8 bit coverage values for one row
///
/// Refilled by the rasterizer sweep, one row at a time. Adjacent cells
/// and spans merge into a single span.
#[derive(Debug, Default)]
pub struct ScanlineU8 {
    last_x: i64,
    min_x: i64,
    pub spans: Vec<Span>,
    pub y: i64,
}

const LAST_X: i64 = 0x7FFF_FFF0;

impl ScanlineU8 {
    pub fn new() -> Self {
        Self {
            last_x: LAST_X,
            min_x: 0,
            y: 0,
            spans: vec![],
        }
    }
    /// Clear the spans, keeping allocations
    pub fn reset_spans(&mut self) {
        self.last_x = LAST_X;
        self.spans.clear();
    }
    pub fn reset(&mut self, min_x: i64, _max_x: i64) {
        self.last_x = LAST_X;
        self.min_x = min_x;
        self.spans.clear();
    }
    /// Mark the scanline complete at row `y`
    pub fn finalize(&mut self, y: i64) {
        self.y = y;
    }
    pub fn num_spans(&self) -> usize {
        self.spans.len()
    }
    /// Add a run of `len` pixels at `x` with a uniform cover
    pub fn add_span(&mut self, x: i64, len: i64, cover: u64) {
        let x = x - self.min_x;
        if x == self.last_x + 1 {
            // contiguous with the previous span
            let cur = self.spans.last_mut().unwrap();
            cur.len += len;
            cur.covers.extend(std::iter::repeat(cover).take(len as usize));
        } else {
            self.spans.push(Span {
                x: x + self.min_x,
                len,
                covers: vec![cover; len as usize],
            });
        }
        self.last_x = x + len - 1;
    }
    /// Add a single pixel at `x`
    pub fn add_cell(&mut self, x: i64, cover: u64) {
        let x = x - self.min_x;
        if x == self.last_x + 1 {
            let cur = self.spans.last_mut().unwrap();
            cur.len += 1;
            cur.covers.push(cover);
        } else {
            self.spans.push(Span {
                x: x + self.min_x,
                len: 1,
                covers: vec![cover],
            });
        }
        self.last_x = x;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_cells_merge() {
        let mut sl = ScanlineU8::new();
        sl.reset(0, 100);
        sl.add_cell(3, 128);
        sl.add_cell(4, 255);
        sl.add_span(5, 2, 10);
        assert_eq!(sl.num_spans(), 1);
        assert_eq!(sl.spans[0].x, 3);
        assert_eq!(sl.spans[0].len, 4);
        assert_eq!(sl.spans[0].covers, vec![128, 255, 10, 10]);
    }

    #[test]
    fn gap_starts_new_span() {
        let mut sl = ScanlineU8::new();
        sl.reset(0, 100);
        sl.add_cell(3, 128);
        sl.add_cell(7, 255);
        assert_eq!(sl.num_spans(), 2);
        assert_eq!(sl.spans[1].x, 7);
    }
}
