//! Compositing operators.
//!
//! Every operator mutates the current sample `a` in place, given an
//! incoming operand `b` of any [`SampleValue`] representation. Operators are
//! available as free functions for static use and through [`CompositeOp`]
//! when the operator is chosen at runtime.
//!
//! Numeric policy:
//!
//! - Integer samples saturate into `[0, MAX]`. Float samples are never
//!   clamped. Complex samples do native complex arithmetic for
//!   `Mov`/`Add`/`Sub`/`Mul`/`Div`/`Pow`; everything else works on the
//!   magnitude and stores a zero imaginary part.
//! - Bitwise operators quantize both operands to 8 bits (clamped), combine
//!   them, and convert the 8-bit result back.
//! - Blend modes evaluate in `T::Float`, so UInt8 and UInt16 blend in `f32`
//!   and UInt32 blends in `f64`. The divisor floor is that type's
//!   [`Real::EPSILON`].

use core::fmt;

use crate::lut::ConversionPath;
use crate::real::Real;
use crate::sample::{Sample, SampleValue};

// Resolves the operator once and evaluates `$body` with `$f` bound to the
// matching function, so loops in `$body` are monomorphized per operator.
macro_rules! dispatch {
    ($op:expr, $f:ident => $body:expr) => {
        match $op {
            CompositeOp::Mov => {
                let $f = mov;
                $body
            }
            CompositeOp::Add => {
                let $f = add;
                $body
            }
            CompositeOp::Sub => {
                let $f = sub;
                $body
            }
            CompositeOp::Mul => {
                let $f = mul;
                $body
            }
            CompositeOp::Div => {
                let $f = div;
                $body
            }
            CompositeOp::Pow => {
                let $f = pow;
                $body
            }
            CompositeOp::Dif => {
                let $f = dif;
                $body
            }
            CompositeOp::Min => {
                let $f = min;
                $body
            }
            CompositeOp::Max => {
                let $f = max;
                $body
            }
            CompositeOp::Or => {
                let $f = or;
                $body
            }
            CompositeOp::Nor => {
                let $f = nor;
                $body
            }
            CompositeOp::And => {
                let $f = and;
                $body
            }
            CompositeOp::Not => {
                let $f = not;
                $body
            }
            CompositeOp::Nand => {
                let $f = nand;
                $body
            }
            CompositeOp::Xor => {
                let $f = xor;
                $body
            }
            CompositeOp::Xnor => {
                let $f = xnor;
                $body
            }
            CompositeOp::ColorBurn => {
                let $f = color_burn;
                $body
            }
            CompositeOp::LinearBurn => {
                let $f = linear_burn;
                $body
            }
            CompositeOp::Screen => {
                let $f = screen;
                $body
            }
            CompositeOp::ColorDodge => {
                let $f = color_dodge;
                $body
            }
            CompositeOp::Overlay => {
                let $f = overlay;
                $body
            }
            CompositeOp::SoftLight => {
                let $f = soft_light;
                $body
            }
            CompositeOp::HardLight => {
                let $f = hard_light;
                $body
            }
            CompositeOp::VividLight => {
                let $f = vivid_light;
                $body
            }
            CompositeOp::LinearLight => {
                let $f = linear_light;
                $body
            }
            CompositeOp::PinLight => {
                let $f = pin_light;
                $body
            }
            CompositeOp::Exclusion => {
                let $f = exclusion;
                $body
            }
        }
    };
}

/// A compositing operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CompositeOp {
    Mov,
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    /// Absolute difference.
    Dif,
    Min,
    Max,
    Or,
    Nor,
    And,
    /// Complement of the operand. The current sample is ignored.
    Not,
    Nand,
    Xor,
    Xnor,
    ColorBurn,
    LinearBurn,
    Screen,
    ColorDodge,
    Overlay,
    SoftLight,
    HardLight,
    VividLight,
    LinearLight,
    PinLight,
    Exclusion,
}

impl CompositeOp {
    pub const ALL: [CompositeOp; 27] = [
        CompositeOp::Mov,
        CompositeOp::Add,
        CompositeOp::Sub,
        CompositeOp::Mul,
        CompositeOp::Div,
        CompositeOp::Pow,
        CompositeOp::Dif,
        CompositeOp::Min,
        CompositeOp::Max,
        CompositeOp::Or,
        CompositeOp::Nor,
        CompositeOp::And,
        CompositeOp::Not,
        CompositeOp::Nand,
        CompositeOp::Xor,
        CompositeOp::Xnor,
        CompositeOp::ColorBurn,
        CompositeOp::LinearBurn,
        CompositeOp::Screen,
        CompositeOp::ColorDodge,
        CompositeOp::Overlay,
        CompositeOp::SoftLight,
        CompositeOp::HardLight,
        CompositeOp::VividLight,
        CompositeOp::LinearLight,
        CompositeOp::PinLight,
        CompositeOp::Exclusion,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            CompositeOp::Mov => "Mov",
            CompositeOp::Add => "Add",
            CompositeOp::Sub => "Sub",
            CompositeOp::Mul => "Mul",
            CompositeOp::Div => "Div",
            CompositeOp::Pow => "Pow",
            CompositeOp::Dif => "Dif",
            CompositeOp::Min => "Min",
            CompositeOp::Max => "Max",
            CompositeOp::Or => "Or",
            CompositeOp::Nor => "Nor",
            CompositeOp::And => "And",
            CompositeOp::Not => "Not",
            CompositeOp::Nand => "Nand",
            CompositeOp::Xor => "Xor",
            CompositeOp::Xnor => "Xnor",
            CompositeOp::ColorBurn => "ColorBurn",
            CompositeOp::LinearBurn => "LinearBurn",
            CompositeOp::Screen => "Screen",
            CompositeOp::ColorDodge => "ColorDodge",
            CompositeOp::Overlay => "Overlay",
            CompositeOp::SoftLight => "SoftLight",
            CompositeOp::HardLight => "HardLight",
            CompositeOp::VividLight => "VividLight",
            CompositeOp::LinearLight => "LinearLight",
            CompositeOp::PinLight => "PinLight",
            CompositeOp::Exclusion => "Exclusion",
        }
    }

    /// Operators that work on 8-bit quantized operands.
    pub const fn is_bitwise(self) -> bool {
        matches!(
            self,
            CompositeOp::Or
                | CompositeOp::Nor
                | CompositeOp::And
                | CompositeOp::Not
                | CompositeOp::Nand
                | CompositeOp::Xor
                | CompositeOp::Xnor
        )
    }

    /// Photographic blend modes.
    pub const fn is_blend_mode(self) -> bool {
        matches!(
            self,
            CompositeOp::ColorBurn
                | CompositeOp::LinearBurn
                | CompositeOp::Screen
                | CompositeOp::ColorDodge
                | CompositeOp::Overlay
                | CompositeOp::SoftLight
                | CompositeOp::HardLight
                | CompositeOp::VividLight
                | CompositeOp::LinearLight
                | CompositeOp::PinLight
                | CompositeOp::Exclusion
        )
    }

    /// Apply this operator to a single sample.
    #[inline]
    pub fn apply<T: Sample, S: SampleValue, P: ConversionPath>(self, a: &mut T, b: S, path: P) {
        dispatch!(self, f => f(a, b, path))
    }
}

impl fmt::Display for CompositeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}


/// Apply `op` elementwise: `dst[i] = op(dst[i], src[i])`.
///
/// Slices must have equal lengths (checked in debug builds).
pub fn apply_slice<T: Sample, S: SampleValue, P: ConversionPath>(
    op: CompositeOp,
    dst: &mut [T],
    src: &[S],
    path: P,
) {
    debug_assert_eq!(dst.len(), src.len());
    dispatch!(op, f => {
        for (d, &s) in dst.iter_mut().zip(src) {
            f(d, s, path);
        }
    })
}

/// Apply `op` with the same operand to every element of `dst`.
pub fn apply_scalar<T: Sample, S: SampleValue, P: ConversionPath>(
    op: CompositeOp,
    dst: &mut [T],
    value: S,
    path: P,
) {
    dispatch!(op, f => {
        for d in dst.iter_mut() {
            f(d, value, path);
        }
    })
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

#[inline]
pub fn mov<T: Sample, S: SampleValue, P: ConversionPath>(a: &mut T, b: S, path: P) {
    *a = b.to_sample(path);
}

#[inline]
pub fn add<T: Sample, S: SampleValue, P: ConversionPath>(a: &mut T, b: S, path: P) {
    *a = a.add_sample(b.to_sample(path));
}

#[inline]
pub fn sub<T: Sample, S: SampleValue, P: ConversionPath>(a: &mut T, b: S, path: P) {
    *a = a.sub_sample(b.to_sample(path));
}

#[inline]
pub fn mul<T: Sample, S: SampleValue, P: ConversionPath>(a: &mut T, b: S, path: P) {
    *a = a.mul_sample(b.to_sample(path));
}

#[inline]
pub fn div<T: Sample, S: SampleValue, P: ConversionPath>(a: &mut T, b: S, path: P) {
    *a = a.div_sample(b.to_sample(path));
}

#[inline]
pub fn pow<T: Sample, S: SampleValue, P: ConversionPath>(a: &mut T, b: S, path: P) {
    *a = a.pow_sample(b.to_sample(path));
}

#[inline]
pub fn dif<T: Sample, S: SampleValue, P: ConversionPath>(a: &mut T, b: S, path: P) {
    *a = a.dif_sample(b.to_sample(path));
}

#[inline]
pub fn min<T: Sample, S: SampleValue, P: ConversionPath>(a: &mut T, b: S, path: P) {
    let v: T = b.to_sample(path);
    if v.precedes(*a) {
        *a = v;
    }
}

#[inline]
pub fn max<T: Sample, S: SampleValue, P: ConversionPath>(a: &mut T, b: S, path: P) {
    let v: T = b.to_sample(path);
    if a.precedes(v) {
        *a = v;
    }
}

// ---------------------------------------------------------------------------
// Bitwise
// ---------------------------------------------------------------------------

#[inline]
fn bitwise<T, S, P>(a: &mut T, b: S, path: P, f: impl FnOnce(u8, u8) -> u8)
where
    T: Sample,
    S: SampleValue,
    P: ConversionPath,
{
    let x: u8 = a.to_sample_constrained(path);
    let y: u8 = b.to_sample_constrained(path);
    *a = f(x, y).to_sample(path);
}

#[inline]
pub fn or<T: Sample, S: SampleValue, P: ConversionPath>(a: &mut T, b: S, path: P) {
    bitwise(a, b, path, |x, y| x | y);
}

#[inline]
pub fn nor<T: Sample, S: SampleValue, P: ConversionPath>(a: &mut T, b: S, path: P) {
    bitwise(a, b, path, |x, y| !(x | y));
}

#[inline]
pub fn and<T: Sample, S: SampleValue, P: ConversionPath>(a: &mut T, b: S, path: P) {
    bitwise(a, b, path, |x, y| x & y);
}

#[inline]
pub fn not<T: Sample, S: SampleValue, P: ConversionPath>(a: &mut T, b: S, path: P) {
    let y: u8 = b.to_sample_constrained(path);
    *a = (!y).to_sample(path);
}

#[inline]
pub fn nand<T: Sample, S: SampleValue, P: ConversionPath>(a: &mut T, b: S, path: P) {
    bitwise(a, b, path, |x, y| !(x & y));
}

#[inline]
pub fn xor<T: Sample, S: SampleValue, P: ConversionPath>(a: &mut T, b: S, path: P) {
    bitwise(a, b, path, |x, y| x ^ y);
}

#[inline]
pub fn xnor<T: Sample, S: SampleValue, P: ConversionPath>(a: &mut T, b: S, path: P) {
    bitwise(a, b, path, |x, y| !(x ^ y));
}

// ---------------------------------------------------------------------------
// Blend modes
// ---------------------------------------------------------------------------

#[inline]
fn blend<T, S, P>(a: &mut T, b: S, path: P, f: impl FnOnce(T::Float, T::Float) -> T::Float)
where
    T: Sample,
    S: SampleValue,
    P: ConversionPath,
{
    let x: T::Float = a.to_sample(path);
    let y: T::Float = b.to_sample(path);
    *a = T::from_float_saturated(f(x, y));
}

#[inline]
fn burn_of<R: Real>(a: R, b: R) -> R {
    R::ONE - ((R::ONE - a) / b.max(R::EPSILON)).min(R::ONE)
}

#[inline]
fn dodge_of<R: Real>(a: R, b: R) -> R {
    (a / (R::ONE - b).max(R::EPSILON)).min(R::ONE)
}

/// `1 - min((1-a)/max(ε, b), 1)`
#[inline]
pub fn color_burn<T: Sample, S: SampleValue, P: ConversionPath>(a: &mut T, b: S, path: P) {
    blend(a, b, path, burn_of);
}

/// `a + b - 1`
#[inline]
pub fn linear_burn<T: Sample, S: SampleValue, P: ConversionPath>(a: &mut T, b: S, path: P) {
    blend(a, b, path, |a, b| a + b - <T::Float as Real>::ONE);
}

/// `1 - (1-a)(1-b)`
#[inline]
pub fn screen<T: Sample, S: SampleValue, P: ConversionPath>(a: &mut T, b: S, path: P) {
    blend(a, b, path, |a, b| {
        let one = <T::Float as Real>::ONE;
        one - (one - a) * (one - b)
    });
}

/// `min(a/max(ε, 1-b), 1)`
#[inline]
pub fn color_dodge<T: Sample, S: SampleValue, P: ConversionPath>(a: &mut T, b: S, path: P) {
    blend(a, b, path, dodge_of);
}

#[inline]
pub fn overlay<T: Sample, S: SampleValue, P: ConversionPath>(a: &mut T, b: S, path: P) {
    fn f<R: Real>(a: R, b: R) -> R {
        if a > R::HALF {
            R::ONE - (R::ONE - R::TWO * (a - R::HALF)) * (R::ONE - b)
        } else {
            R::TWO * a * b
        }
    }
    blend(a, b, path, f);
}

#[inline]
pub fn soft_light<T: Sample, S: SampleValue, P: ConversionPath>(a: &mut T, b: S, path: P) {
    fn f<R: Real>(a: R, b: R) -> R {
        if b > R::HALF {
            R::ONE - (R::ONE - a) * (R::ONE - b - R::HALF)
        } else {
            a * (b + R::HALF)
        }
    }
    blend(a, b, path, f);
}

#[inline]
pub fn hard_light<T: Sample, S: SampleValue, P: ConversionPath>(a: &mut T, b: S, path: P) {
    fn f<R: Real>(a: R, b: R) -> R {
        if b > R::HALF {
            R::ONE - (R::ONE - a) * (R::ONE - R::TWO * (b - R::HALF))
        } else {
            R::TWO * a * b
        }
    }
    blend(a, b, path, f);
}

/// Color dodge with `2(b-0.5)` above the midpoint, color burn with `2b`
/// below it.
#[inline]
pub fn vivid_light<T: Sample, S: SampleValue, P: ConversionPath>(a: &mut T, b: S, path: P) {
    fn f<R: Real>(a: R, b: R) -> R {
        if b > R::HALF {
            dodge_of(a, R::TWO * (b - R::HALF))
        } else {
            burn_of(a, R::TWO * b)
        }
    }
    blend(a, b, path, f);
}

#[inline]
pub fn linear_light<T: Sample, S: SampleValue, P: ConversionPath>(a: &mut T, b: S, path: P) {
    fn f<R: Real>(a: R, b: R) -> R {
        if b > R::HALF {
            a + R::TWO * (b - R::HALF)
        } else {
            a + R::TWO * b - R::ONE
        }
    }
    blend(a, b, path, f);
}

#[inline]
pub fn pin_light<T: Sample, S: SampleValue, P: ConversionPath>(a: &mut T, b: S, path: P) {
    fn f<R: Real>(a: R, b: R) -> R {
        if b > R::HALF {
            a.max(R::TWO * (b - R::HALF))
        } else {
            a.min(R::TWO * b)
        }
    }
    blend(a, b, path, f);
}

/// `a + b - 2ab`
#[inline]
pub fn exclusion<T: Sample, S: SampleValue, P: ConversionPath>(a: &mut T, b: S, path: P) {
    blend(a, b, path, |a, b| a + b - <T::Float as Real>::TWO * a * b);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lut::{ConversionTables, Direct, LutConfig};
    use alloc::vec::Vec;
    use num_complex::{Complex32, Complex64};

    fn run<T: Sample, S: SampleValue>(op: CompositeOp, a: T, b: S) -> T {
        let mut a = a;
        op.apply(&mut a, b, Direct);
        a
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<&str> = CompositeOp::ALL.iter().map(|op| op.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CompositeOp::ALL.len());
        assert_eq!(alloc::format!("{}", CompositeOp::ColorDodge), "ColorDodge");
    }

    #[test]
    fn categories() {
        let bitwise = CompositeOp::ALL.iter().filter(|op| op.is_bitwise()).count();
        let blend = CompositeOp::ALL.iter().filter(|op| op.is_blend_mode()).count();
        assert_eq!(bitwise, 7);
        assert_eq!(blend, 11);
        assert!(!CompositeOp::Add.is_bitwise());
        assert!(!CompositeOp::Add.is_blend_mode());
    }

    #[test]
    fn integer_add_saturates() {
        assert_eq!(run(CompositeOp::Add, 250u8, 20u8), 255);
        assert_eq!(run(CompositeOp::Sub, 10u8, 20u8), 0);
        assert_eq!(run(CompositeOp::Add, u16::MAX - 1, 1.0f32), u16::MAX);
        assert_eq!(run(CompositeOp::Dif, 3u8, 10u8), 7);
    }

    #[test]
    fn float_arithmetic_is_unclamped() {
        assert_eq!(run(CompositeOp::Add, 0.75f32, 0.5f32), 1.25);
        assert_eq!(run(CompositeOp::Sub, 0.25f64, 0.5f64), -0.25);
        assert_eq!(run(CompositeOp::LinearBurn, 0.0f32, 0.0f32), -1.0);
        assert_eq!(run(CompositeOp::LinearBurn, 0u8, 0u8), 0);
    }

    #[test]
    fn mov_min_max() {
        assert_eq!(run(CompositeOp::Mov, 7u8, 1.0f64), 255);
        assert_eq!(run(CompositeOp::Min, 200u8, 0.5f32), 128);
        assert_eq!(run(CompositeOp::Max, 200u8, 0.5f32), 200);
        assert_eq!(run(CompositeOp::Max, 0.25f32, 255u8), 1.0);
    }

    #[test]
    fn mul_div_pow_in_normalized_space() {
        assert_eq!(run(CompositeOp::Mul, 255u8, 128u8), 128);
        assert_eq!(run(CompositeOp::Mul, 0.5f32, 0.5f32), 0.25);
        assert_eq!(run(CompositeOp::Div, 100u8, 0u8), 255);
        assert_eq!(run(CompositeOp::Div, 0u8, 0u8), 0);
        assert!((run(CompositeOp::Pow, 0.25f32, 0.5f32) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn screen_boundaries() {
        assert_eq!(run(CompositeOp::Screen, 0.0f32, 0.0f32), 0.0);
        assert_eq!(run(CompositeOp::Screen, 1.0f32, 1.0f32), 1.0);
        assert_eq!(run(CompositeOp::Screen, 0u8, 0u8), 0);
        assert_eq!(run(CompositeOp::Screen, 255u8, 255u8), 255);
        assert_eq!(run(CompositeOp::Screen, 0u32, u32::MAX), u32::MAX);
        assert_eq!(run(CompositeOp::Screen, 0.0f64, 0.0f64), 0.0);
    }

    #[test]
    fn overlay_is_continuous_at_midpoint() {
        for i in 0..=100 {
            let x = i as f32 / 100.0;
            assert_eq!(run(CompositeOp::Overlay, 0.5f32, x), x);
            let x = i as f64 / 100.0;
            assert_eq!(run(CompositeOp::Overlay, 0.5f64, x), x);
            let above = run(CompositeOp::Overlay, 0.5f64 + 1e-9, x);
            assert!((above - x).abs() < 1e-8);
        }
    }

    #[test]
    fn epsilon_depends_on_precision() {
        // a / max(eps, 1 - b) with b = 1: 1e-9 / 1e-8 stays below one in
        // single precision and saturates in double precision.
        let single = run(CompositeOp::ColorDodge, 1.0e-9f32, 1.0f32);
        let double = run(CompositeOp::ColorDodge, 1.0e-9f64, 1.0f64);
        assert!((single - 0.1).abs() < 1e-6);
        assert_eq!(double, 1.0);
        assert_eq!(run(CompositeOp::ColorBurn, 1.0f32, 0.0f32), 1.0);
        assert_eq!(run(CompositeOp::ColorBurn, 0.5f32, 0.0f32), 0.0);
    }

    #[test]
    fn light_modes() {
        assert_eq!(run(CompositeOp::HardLight, 0.5f32, 0.25f32), 0.25);
        assert_eq!(run(CompositeOp::HardLight, 0.5f32, 1.0f32), 1.0);
        assert_eq!(run(CompositeOp::SoftLight, 0.5f32, 0.5f32), 0.5);
        assert_eq!(run(CompositeOp::SoftLight, 1.0f64, 0.75f64), 1.0);
        assert_eq!(run(CompositeOp::LinearLight, 0.25f32, 0.75f32), 0.75);
        assert_eq!(run(CompositeOp::LinearLight, 0.25f32, 0.25f32), -0.25);
        assert_eq!(run(CompositeOp::PinLight, 0.25f32, 0.75f32), 0.5);
        assert_eq!(run(CompositeOp::PinLight, 0.75f32, 0.25f32), 0.5);
        assert_eq!(run(CompositeOp::VividLight, 0.25f64, 1.0f64), 1.0);
        assert_eq!(run(CompositeOp::VividLight, 0.5f64, 0.5f64), 0.5);
        assert_eq!(run(CompositeOp::Exclusion, 0.5f32, 0.5f32), 0.5);
        assert_eq!(run(CompositeOp::Exclusion, 1.0f32, 1.0f32), 0.0);
    }

    #[test]
    fn bitwise_on_integers() {
        assert_eq!(run(CompositeOp::Or, 0b1010_0000u8, 0b0000_0101u8), 0b1010_0101);
        assert_eq!(run(CompositeOp::And, 0b1010_0101u8, 0b0000_0111u8), 0b0000_0101);
        assert_eq!(run(CompositeOp::Xor, 0xffu8, 0x0fu8), 0xf0);
        assert_eq!(run(CompositeOp::Nor, 0u8, 0u8), 0xff);
        assert_eq!(run(CompositeOp::Nand, 0xffu8, 0xffu8), 0);
        assert_eq!(run(CompositeOp::Xnor, 0x0fu8, 0x0fu8), 0xff);
        assert_eq!(run(CompositeOp::Not, 123u8, 0u8), 255);
        // 16-bit operands are quantized to 8 bits.
        assert_eq!(run(CompositeOp::Or, 0u16, u16::MAX), u16::MAX);
        assert_eq!(run(CompositeOp::Or, 0u16, 1u16), 0);
    }

    #[test]
    fn bitwise_on_floats() {
        assert_eq!(run(CompositeOp::Or, 1.0f32, 0.0f32), 1.0);
        assert_eq!(run(CompositeOp::And, 0.5f32, 1.0f32), 128.0 / 255.0);
        assert_eq!(run(CompositeOp::Not, 0.0f64, 1.0f64), 0.0);
        // Out-of-range operands are clamped before quantizing.
        assert_eq!(run(CompositeOp::Or, 0.0f32, 7.0f32), 1.0);
    }

    #[test]
    fn complex_arithmetic_is_native() {
        let i = Complex32::new(0.0, 1.0);
        assert_eq!(run(CompositeOp::Mul, i, i), Complex32::new(-1.0, 0.0));
        assert_eq!(run(CompositeOp::Add, i, 1.0f32), Complex32::new(1.0, 1.0));
        assert_eq!(
            run(CompositeOp::Mov, Complex64::default(), Complex32::new(0.5, -0.5)),
            Complex64::new(0.5, -0.5)
        );
    }

    #[test]
    fn complex_blends_use_magnitude() {
        let a = Complex32::new(0.0, 0.5);
        let out = run(CompositeOp::Screen, a, Complex32::new(0.5, 0.0));
        assert_eq!(out, Complex32::new(0.75, 0.0));
        let out = run(CompositeOp::Dif, Complex64::new(0.3, 0.4), 0.25f64);
        assert!((out.re - 0.25).abs() < 1e-12);
        assert_eq!(out.im, 0.0);
        let out = run(CompositeOp::Max, Complex32::new(0.0, 0.5), 0.25f32);
        assert_eq!(out, Complex32::new(0.0, 0.5));
    }

    #[test]
    fn slice_and_scalar_match_apply() {
        let tables = ConversionTables::new(LutConfig::default());
        let src: Vec<f32> = (0..64).map(|i| i as f32 / 63.0).collect();
        let base: Vec<u16> = (0..64).map(|i| (i * 1000) as u16).collect();
        for op in CompositeOp::ALL {
            let mut bulk = base.clone();
            apply_slice(op, &mut bulk, &src, &tables);
            for ((&a, &b), &got) in base.iter().zip(&src).zip(&bulk) {
                let mut one = a;
                op.apply(&mut one, b, Direct);
                assert_eq!(got, one, "{op}");
            }

            let mut bulk = base.clone();
            apply_scalar(op, &mut bulk, 0.3f64, Direct);
            for (&a, &got) in base.iter().zip(&bulk) {
                assert_eq!(got, run(op, a, 0.3f64), "{op}");
            }
        }
    }
}
