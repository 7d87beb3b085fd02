//! Compositing operators
//!
//! The math follows the SVG 1.2 compositing equations. Sources and
//! destinations cross the API as straight (non-premultiplied) colors;
//! internally each operator works on premultiplied f64 components and the
//! result is demultiplied before it is stored back.

use crate::color::Rgba8;

/// Pixel compositing operator
///
/// `Alpha` is the ordinary alpha-blend sentinel and composites
/// identically to `SrcOver`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BlendMode {
    Alpha,
    Clear,
    Src,
    Dst,
    SrcOver,
    DstOver,
    SrcIn,
    DstIn,
    SrcOut,
    DstOut,
    SrcAtop,
    DstAtop,
    Xor,
    Plus,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
}

impl Default for BlendMode {
    fn default() -> Self {
        BlendMode::Alpha
    }
}

/// Premultiplied color with f64 components in [0,1]
#[derive(Debug, Copy, Clone)]
struct Premul {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl Premul {
    /// Premultiply a straight color and scale it by `cover`/255
    fn from_cover(c: Rgba8, cover: u64) -> Self {
        let k = f64::from(c.a) / 255.0 * cover as f64 / 255.0;
        Premul {
            r: f64::from(c.r) / 255.0 * k,
            g: f64::from(c.g) / 255.0 * k,
            b: f64::from(c.b) / 255.0 * k,
            a: f64::from(c.a) / 255.0 * cover as f64 / 255.0,
        }
    }
    /// Clamp alpha to [0,1] and each component to [0,alpha]
    fn clip(&mut self) {
        self.a = self.a.max(0.0).min(1.0);
        self.r = self.r.max(0.0).min(self.a);
        self.g = self.g.max(0.0).min(self.a);
        self.b = self.b.max(0.0).min(self.a);
    }
    /// Demultiply back to a straight color
    fn to_straight(mut self) -> Rgba8 {
        self.clip();
        if self.a <= 0.0 {
            return Rgba8::clear();
        }
        let to8 = |v: f64| (v.max(0.0).min(1.0) * 255.0).round() as u8;
        Rgba8::new(
            to8(self.r / self.a),
            to8(self.g / self.a),
            to8(self.b / self.a),
            to8(self.a),
        )
    }
    fn add(self, o: Premul) -> Premul {
        Premul {
            r: self.r + o.r,
            g: self.g + o.g,
            b: self.b + o.b,
            a: self.a + o.a,
        }
    }
    fn scale(self, k: f64) -> Premul {
        Premul {
            r: self.r * k,
            g: self.g * k,
            b: self.b * k,
            a: self.a * k,
        }
    }
}

fn color_dodge_calc(dca: f64, sca: f64, sa: f64, sada: f64, d1a: f64, s1a: f64, da: f64) -> f64 {
    if sca < sa {
        sada * (1.0f64).min((dca / da) * sa / (sa - sca)) + sca * d1a + dca * s1a
    } else if dca > 0.0 {
        sada + sca * d1a + dca * s1a
    } else {
        sca * d1a
    }
}

fn color_burn_calc(dca: f64, sca: f64, sa: f64, sada: f64, d1a: f64, s1a: f64, da: f64) -> f64 {
    if sca > 0.0 {
        sada * (1.0 - (1.0f64).min((1.0 - dca / da) * sa / sca)) + sca * d1a + dca * s1a
    } else if dca > da {
        sada + dca * s1a
    } else {
        dca * s1a
    }
}

fn overlay_calc(dca: f64, sca: f64, sa: f64, sada: f64, d1a: f64, s1a: f64, da: f64) -> f64 {
    if 2.0 * dca <= da {
        2.0 * sca * dca + sca * d1a + dca * s1a
    } else {
        sada - 2.0 * (da - dca) * (sa - sca) + sca * d1a + dca * s1a
    }
}

fn hard_light_calc(dca: f64, sca: f64, sa: f64, sada: f64, d1a: f64, s1a: f64, da: f64) -> f64 {
    if 2.0 * sca < sa {
        2.0 * sca * dca + sca * d1a + dca * s1a
    } else {
        sada - 2.0 * (da - dca) * (sa - sca) + sca * d1a + dca * s1a
    }
}

fn soft_light_calc(dca: f64, sca: f64, sa: f64, sada: f64, d1a: f64, s1a: f64, da: f64) -> f64 {
    let dcasa = dca * sa;
    if 2.0 * sca <= sa {
        dcasa - (sada - 2.0 * sca * da) * dcasa * (sada - dcasa) + sca * d1a + dca * s1a
    } else if 4.0 * dca <= da {
        dcasa
            + (2.0 * sca * da - sada)
                * ((((16.0 * dcasa - 12.0) * dcasa + 4.0) * dca * da) - dca * da)
            + sca * d1a
            + dca * s1a
    } else {
        dcasa + (2.0 * sca * da - sada) * (dcasa.sqrt() - dcasa) + sca * d1a + dca * s1a
    }
}

/// Per-channel separable operator applied to premultiplied components
fn separable(
    d: Premul,
    s: Premul,
    calc: fn(f64, f64, f64, f64, f64, f64, f64) -> f64,
) -> Premul {
    let sada = s.a * d.a;
    let d1a = 1.0 - d.a;
    let s1a = 1.0 - s.a;
    Premul {
        r: calc(d.r, s.r, s.a, sada, d1a, s1a, d.a),
        g: calc(d.g, s.g, s.a, sada, d1a, s1a, d.a),
        b: calc(d.b, s.b, s.a, sada, d1a, s1a, d.a),
        a: d.a + s.a - sada,
    }
}

/// Composite `src` over `dst` with the operator `op` and coverage `cover`,
/// returning the straight-alpha result
pub fn blend_op(op: BlendMode, dst: Rgba8, src: Rgba8, cover: u64) -> Rgba8 {
    let cover = cover.min(255);
    let cov = cover as f64 / 255.0;
    let s = Premul::from_cover(src, cover);
    let d = Premul::from_cover(dst, 255);
    let sa_u = f64::from(src.a) / 255.0;
    let out = match op {
        BlendMode::Dst => return dst,
        BlendMode::Alpha | BlendMode::SrcOver => d.scale(1.0 - s.a).add(s),
        BlendMode::Clear => d.scale(1.0 - cov),
        BlendMode::Src => d.scale(1.0 - cov).add(s),
        BlendMode::DstOver => d.add(s.scale(1.0 - d.a)),
        BlendMode::SrcIn => {
            if d.a > 0.0 {
                d.scale(1.0 - cov).add(s.scale(d.a))
            } else {
                return dst;
            }
        }
        BlendMode::DstIn => d.scale(1.0 - cov).add(d.scale(cov * sa_u)),
        BlendMode::SrcOut => d.scale(1.0 - cov).add(s.scale(1.0 - d.a)),
        BlendMode::DstOut => d.scale(1.0 - cov).add(d.scale(cov * (1.0 - sa_u))),
        BlendMode::SrcAtop => Premul {
            r: s.r * d.a + d.r * (1.0 - s.a),
            g: s.g * d.a + d.g * (1.0 - s.a),
            b: s.b * d.a + d.b * (1.0 - s.a),
            a: d.a,
        },
        BlendMode::DstAtop => {
            let dk = d.scale(1.0 - cov);
            let dc = d.scale(cov);
            let d1a = 1.0 - d.a;
            Premul {
                r: dk.r + dc.r * sa_u + s.r * d1a,
                g: dk.g + dc.g * sa_u + s.g * d1a,
                b: dk.b + dc.b * sa_u + s.b * d1a,
                a: dk.a + s.a,
            }
        }
        BlendMode::Xor => Premul {
            r: s.r * (1.0 - d.a) + d.r * (1.0 - s.a),
            g: s.g * (1.0 - d.a) + d.g * (1.0 - s.a),
            b: s.b * (1.0 - d.a) + d.b * (1.0 - s.a),
            a: s.a + d.a - 2.0 * s.a * d.a,
        },
        BlendMode::Plus => {
            if s.a <= 0.0 {
                return dst;
            }
            let a = (d.a + s.a).min(1.0);
            Premul {
                r: (d.r + s.r).min(a),
                g: (d.g + s.g).min(a),
                b: (d.b + s.b).min(a),
                a,
            }
        }
        BlendMode::Multiply => {
            if s.a <= 0.0 {
                return dst;
            }
            let d1a = 1.0 - d.a;
            let s1a = 1.0 - s.a;
            Premul {
                r: s.r * d.r + s.r * d1a + d.r * s1a,
                g: s.g * d.g + s.g * d1a + d.g * s1a,
                b: s.b * d.b + s.b * d1a + d.b * s1a,
                a: d.a + s.a - s.a * d.a,
            }
        }
        BlendMode::Screen => {
            if s.a <= 0.0 {
                return dst;
            }
            Premul {
                r: d.r + s.r - s.r * d.r,
                g: d.g + s.g - s.g * d.g,
                b: d.b + s.b - s.b * d.b,
                a: d.a + s.a - s.a * d.a,
            }
        }
        BlendMode::Overlay => {
            if s.a <= 0.0 {
                return dst;
            }
            separable(d, s, overlay_calc)
        }
        BlendMode::Darken => {
            if s.a <= 0.0 {
                return dst;
            }
            let d1a = 1.0 - d.a;
            let s1a = 1.0 - s.a;
            Premul {
                r: (s.r * d.a).min(d.r * s.a) + s.r * d1a + d.r * s1a,
                g: (s.g * d.a).min(d.g * s.a) + s.g * d1a + d.g * s1a,
                b: (s.b * d.a).min(d.b * s.a) + s.b * d1a + d.b * s1a,
                a: d.a + s.a - s.a * d.a,
            }
        }
        BlendMode::Lighten => {
            if s.a <= 0.0 {
                return dst;
            }
            let d1a = 1.0 - d.a;
            let s1a = 1.0 - s.a;
            Premul {
                r: (s.r * d.a).max(d.r * s.a) + s.r * d1a + d.r * s1a,
                g: (s.g * d.a).max(d.g * s.a) + s.g * d1a + d.g * s1a,
                b: (s.b * d.a).max(d.b * s.a) + s.b * d1a + d.b * s1a,
                a: d.a + s.a - s.a * d.a,
            }
        }
        BlendMode::ColorDodge => {
            if s.a <= 0.0 {
                return dst;
            }
            if d.a <= 0.0 {
                s
            } else {
                separable(d, s, color_dodge_calc)
            }
        }
        BlendMode::ColorBurn => {
            if s.a <= 0.0 {
                return dst;
            }
            if d.a <= 0.0 {
                s
            } else {
                separable(d, s, color_burn_calc)
            }
        }
        BlendMode::HardLight => {
            if s.a <= 0.0 {
                return dst;
            }
            separable(d, s, hard_light_calc)
        }
        BlendMode::SoftLight => {
            if s.a <= 0.0 {
                return dst;
            }
            if d.a <= 0.0 {
                s
            } else {
                separable(d, s, soft_light_calc)
            }
        }
        BlendMode::Difference => {
            if s.a <= 0.0 {
                return dst;
            }
            Premul {
                r: d.r + s.r - 2.0 * (s.r * d.a).min(d.r * s.a),
                g: d.g + s.g - 2.0 * (s.g * d.a).min(d.g * s.a),
                b: d.b + s.b - 2.0 * (s.b * d.a).min(d.b * s.a),
                a: d.a + s.a - s.a * d.a,
            }
        }
        BlendMode::Exclusion => {
            if s.a <= 0.0 {
                return dst;
            }
            let d1a = 1.0 - d.a;
            let s1a = 1.0 - s.a;
            Premul {
                r: (s.r * d.a + d.r * s.a - 2.0 * s.r * d.r) + s.r * d1a + d.r * s1a,
                g: (s.g * d.a + d.g * s.a - 2.0 * s.g * d.g) + s.g * d1a + d.g * s1a,
                b: (s.b * d.a + d.b * s.a - 2.0 * s.b * d.b) + s.b * d1a + d.b * s1a,
                a: d.a + s.a - s.a * d.a,
            }
        }
    };
    out.to_straight()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba8 = Rgba8 { r: 255, g: 0, b: 0, a: 255 };
    const BLUE: Rgba8 = Rgba8 { r: 0, g: 0, b: 255, a: 255 };

    #[test]
    fn dst_is_noop() {
        assert_eq!(blend_op(BlendMode::Dst, BLUE, RED, 255), BLUE);
        assert_eq!(blend_op(BlendMode::Dst, BLUE, RED, 10), BLUE);
    }
    #[test]
    fn clear_zeroes() {
        assert_eq!(blend_op(BlendMode::Clear, BLUE, RED, 255), Rgba8::clear());
    }
    #[test]
    fn alpha_matches_src_over() {
        let src = Rgba8::new(10, 200, 50, 128);
        for &cover in &[255u64, 128, 17] {
            assert_eq!(
                blend_op(BlendMode::Alpha, BLUE, src, cover),
                blend_op(BlendMode::SrcOver, BLUE, src, cover)
            );
        }
    }
    #[test]
    fn src_over_opaque_replaces() {
        assert_eq!(blend_op(BlendMode::SrcOver, BLUE, RED, 255), RED);
    }
    #[test]
    fn src_over_half_cover() {
        let out = blend_op(BlendMode::SrcOver, Rgba8::black(), Rgba8::white(), 128);
        assert_eq!(out.a, 255);
        assert!((i32::from(out.r) - 128).abs() <= 1);
    }
    #[test]
    fn plus_saturates() {
        let out = blend_op(BlendMode::Plus, Rgba8::new(200, 0, 0, 255), RED, 255);
        assert_eq!(out, Rgba8::new(255, 0, 0, 255));
    }
    #[test]
    fn xor_opaque_pair_vanishes() {
        let out = blend_op(BlendMode::Xor, BLUE, RED, 255);
        assert_eq!(out.a, 0);
    }
    #[test]
    fn multiply_white_is_identity() {
        let out = blend_op(BlendMode::Multiply, BLUE, Rgba8::white(), 255);
        assert_eq!(out, BLUE);
    }
    #[test]
    fn screen_black_is_identity() {
        let out = blend_op(BlendMode::Screen, BLUE, Rgba8::black(), 255);
        assert_eq!(out, BLUE);
    }
    #[test]
    fn darken_lighten_opaque() {
        let d = Rgba8::new(100, 150, 200, 255);
        let s = Rgba8::new(150, 100, 250, 255);
        assert_eq!(
            blend_op(BlendMode::Darken, d, s, 255),
            Rgba8::new(100, 100, 200, 255)
        );
        assert_eq!(
            blend_op(BlendMode::Lighten, d, s, 255),
            Rgba8::new(150, 150, 250, 255)
        );
    }
    #[test]
    fn difference_opaque() {
        let d = Rgba8::new(100, 150, 200, 255);
        let s = Rgba8::new(150, 100, 250, 255);
        assert_eq!(
            blend_op(BlendMode::Difference, d, s, 255),
            Rgba8::new(50, 50, 50, 255)
        );
    }
}
