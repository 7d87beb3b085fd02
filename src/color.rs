//! Color types

use crate::math::multiply_u8;
use crate::Color;
use crate::FromChannels;

fn color_u8_to_f64(x: u8) -> f64 {
    f64::from(x) / 255.0
}
/// Grayscale luminance of an RGB color, AGG weights
pub(crate) fn luminance8(r: u8, g: u8, b: u8) -> u8 {
    ((u32::from(r) * 77 + u32::from(g) * 150 + u32::from(b) * 29) >> 8) as u8
}

/// Gray scale color, 8 bit
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Gray8 {
    pub value: u8,
}

impl Gray8 {
    pub fn new(value: u8) -> Self {
        Gray8 { value }
    }
    /// Convert any color to its gray value through luminance
    pub fn from_trait<C: Color>(c: C) -> Self {
        Gray8::new(luminance8(c.red8(), c.green8(), c.blue8()))
    }
}

/// Color as Red, Green, Blue, 8 bit components
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }
    pub fn white() -> Self {
        Rgb8::new(255, 255, 255)
    }
    pub fn black() -> Self {
        Rgb8::new(0, 0, 0)
    }
    pub fn from_trait<C: Color>(c: C) -> Self {
        Rgb8::new(c.red8(), c.green8(), c.blue8())
    }
}

/// Color as Red, Green, Blue, Alpha, 8 bit components, straight alpha
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba8 { r, g, b, a }
    }
    pub fn white() -> Self {
        Rgba8::new(255, 255, 255, 255)
    }
    pub fn black() -> Self {
        Rgba8::new(0, 0, 0, 255)
    }
    pub fn clear() -> Self {
        Rgba8::new(0, 0, 0, 0)
    }
    pub fn from_trait<C: Color>(c: C) -> Self {
        Rgba8::new(c.red8(), c.green8(), c.blue8(), c.alpha8())
    }
    /// Return the color with each component premultiplied by alpha
    pub fn premultiply(self) -> Rgba8 {
        match self.a {
            255 => self,
            0 => Rgba8::new(0, 0, 0, 0),
            _ => Rgba8::new(
                multiply_u8(self.r, self.a),
                multiply_u8(self.g, self.a),
                multiply_u8(self.b, self.a),
                self.a,
            ),
        }
    }
}

impl Color for Gray8 {
    fn red(&self) -> f64 {
        color_u8_to_f64(self.value)
    }
    fn green(&self) -> f64 {
        color_u8_to_f64(self.value)
    }
    fn blue(&self) -> f64 {
        color_u8_to_f64(self.value)
    }
    fn alpha(&self) -> f64 {
        1.0
    }
    fn red8(&self) -> u8 {
        self.value
    }
    fn green8(&self) -> u8 {
        self.value
    }
    fn blue8(&self) -> u8 {
        self.value
    }
    fn alpha8(&self) -> u8 {
        255
    }
}

impl Color for Rgb8 {
    fn red(&self) -> f64 {
        color_u8_to_f64(self.r)
    }
    fn green(&self) -> f64 {
        color_u8_to_f64(self.g)
    }
    fn blue(&self) -> f64 {
        color_u8_to_f64(self.b)
    }
    fn alpha(&self) -> f64 {
        1.0
    }
    fn red8(&self) -> u8 {
        self.r
    }
    fn green8(&self) -> u8 {
        self.g
    }
    fn blue8(&self) -> u8 {
        self.b
    }
    fn alpha8(&self) -> u8 {
        255
    }
}

impl Color for Rgba8 {
    fn red(&self) -> f64 {
        color_u8_to_f64(self.r)
    }
    fn green(&self) -> f64 {
        color_u8_to_f64(self.g)
    }
    fn blue(&self) -> f64 {
        color_u8_to_f64(self.b)
    }
    fn alpha(&self) -> f64 {
        color_u8_to_f64(self.a)
    }
    fn red8(&self) -> u8 {
        self.r
    }
    fn green8(&self) -> u8 {
        self.g
    }
    fn blue8(&self) -> u8 {
        self.b
    }
    fn alpha8(&self) -> u8 {
        self.a
    }
}

impl FromChannels for Gray8 {
    const CHANNELS: usize = 1;
    fn from_channels(v: &[u8]) -> Option<Self> {
        match v {
            [value] => Some(Gray8::new(*value)),
            _ => None,
        }
    }
}
impl FromChannels for Rgb8 {
    const CHANNELS: usize = 3;
    fn from_channels(v: &[u8]) -> Option<Self> {
        match v {
            [r, g, b] => Some(Rgb8::new(*r, *g, *b)),
            _ => None,
        }
    }
}
impl FromChannels for Rgba8 {
    const CHANNELS: usize = 4;
    fn from_channels(v: &[u8]) -> Option<Self> {
        match v {
            [r, g, b, a] => Some(Rgba8::new(*r, *g, *b, *a)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn channel_conversion() {
        assert_eq!(Gray8::from_channels(&[10]), Some(Gray8::new(10)));
        assert_eq!(Gray8::from_channels(&[1, 2]), None);
        assert_eq!(Rgb8::from_channels(&[1, 2, 3]), Some(Rgb8::new(1, 2, 3)));
        assert_eq!(Rgb8::from_channels(&[1, 2, 3, 4]), None);
        assert_eq!(
            Rgba8::from_channels(&[1, 2, 3, 4]),
            Some(Rgba8::new(1, 2, 3, 4))
        );
        assert_eq!(Rgba8::from_channels(&[]), None);
    }
    #[test]
    fn luminance_weights() {
        assert_eq!(luminance8(255, 255, 255), 255);
        assert_eq!(luminance8(0, 0, 0), 0);
        // green dominates
        assert!(luminance8(0, 255, 0) > luminance8(255, 0, 0));
        assert!(luminance8(255, 0, 0) > luminance8(0, 0, 255));
    }
    #[test]
    fn premultiply() {
        assert_eq!(
            Rgba8::new(255, 255, 255, 128).premultiply(),
            Rgba8::new(128, 128, 128, 128)
        );
        assert_eq!(Rgba8::new(10, 20, 30, 0).premultiply(), Rgba8::clear());
    }
}
