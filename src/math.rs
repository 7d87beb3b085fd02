//! Fixed point component math shared by the pixel formats

/// Multiply two u8 values treated as fractions in [0,1]
///
/// Maps 255 * 255 back to 255 with correct rounding
pub fn multiply_u8(a: u8, b: u8) -> u8 {
    let base_shift = 8;
    let base_msb = 1 << (base_shift - 1);
    let (a, b) = (u32::from(a), u32::from(b));
    let t = a * b + base_msb;
    let tt = ((t >> base_shift) + t) >> base_shift;
    tt as u8
}

/// Interpolate from `p` to `q` by the fraction `a`
pub fn lerp_u8(p: u8, q: u8, a: u8) -> u8 {
    let base_shift = 8;
    let base_msb = 1 << (base_shift - 1);
    let v = if p > q { 1 } else { 0 };
    let (q, p, a) = (i32::from(q), i32::from(p), i32::from(a));
    let t0: i32 = (q - p) * a + base_msb - v;
    let t1: i32 = ((t0 >> base_shift) + t0) >> base_shift;
    (p + t1) as u8
}

/// Interpolate from premultiplied `p` to `q` by the fraction `a`
pub fn prelerp_u8(p: u8, q: u8, a: u8) -> u8 {
    p.wrapping_add(q).wrapping_sub(multiply_u8(p, a))
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn multiply() {
        assert_eq!(multiply_u8(255, 255), 255);
        assert_eq!(multiply_u8(255, 0), 0);
        assert_eq!(multiply_u8(0, 255), 0);
        assert_eq!(multiply_u8(255, 128), 128);
        assert_eq!(multiply_u8(128, 128), 64);
    }
    #[test]
    fn lerp() {
        assert_eq!(lerp_u8(0, 255, 255), 255);
        assert_eq!(lerp_u8(0, 255, 0), 0);
        assert_eq!(lerp_u8(255, 0, 255), 0);
        assert_eq!(lerp_u8(0, 255, 128), 128);
        assert_eq!(lerp_u8(100, 100, 37), 100);
    }
    #[test]
    fn prelerp() {
        assert_eq!(prelerp_u8(0, 0, 0), 0);
        assert_eq!(prelerp_u8(255, 255, 255), 255);
        assert_eq!(prelerp_u8(128, 0, 0), 128);
    }
}
