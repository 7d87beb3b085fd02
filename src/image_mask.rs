//! Owned 8-bit mask image used as a stencil

/// Owned single-channel coverage image
///
/// One byte per pixel, row-major, no padding. Serves as a read-only
/// per-pixel mask; coordinates outside the image have zero coverage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Image {
    /// A fully transparent mask of the given extents
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }
    /// Wrap existing pixel data, `None` unless `data` holds exactly
    /// `width * height` bytes
    pub fn from_pixels(width: usize, height: usize, data: Vec<u8>) -> Option<Self> {
        if data.len() != width * height {
            return None;
        }
        Some(Self { width, height, data })
    }
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    /// Coverage at (`x`,`y`), 0 outside the image
    pub fn cover(&self, x: i64, y: i64) -> u8 {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return 0;
        }
        self.data[y as usize * self.width + x as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_cover_is_zero() {
        let img = Image::from_pixels(2, 2, vec![10, 20, 30, 40]).unwrap();
        assert_eq!((img.width(), img.height()), (2, 2));
        assert_eq!(img.cover(0, 0), 10);
        assert_eq!(img.cover(1, 1), 40);
        assert_eq!(img.cover(-1, 0), 0);
        assert_eq!(img.cover(2, 0), 0);
        assert_eq!(img.cover(0, 2), 0);
    }

    #[test]
    fn from_pixels_checks_length() {
        assert!(Image::from_pixels(2, 2, vec![0; 3]).is_none());
        assert!(Image::from_pixels(2, 2, vec![0; 4]).is_some());
    }
}
