//! Sample representation traits and scalar conversions.
//!
//! [`SampleValue`] covers every numeric type a sample can be converted from
//! or into, including the signed integers foreign code hands over.
//! [`Sample`] narrows that to the seven storage representations and carries
//! their metadata and arithmetic.
//!
//! Conversions are double-dispatched at compile time: the source picks the
//! `from_*` constructor of the target, so every pair is a direct call with no
//! runtime branching on representation.

use num_complex::{Complex32, Complex64};

use crate::format::SampleFormat;
use crate::lut::{ConversionPath, Direct};
use crate::real::Real;
use crate::scale::{self, U8_MAX, U16_MAX, U32_MAX};

/// A numeric value that can be converted to and from any [`Sample`].
///
/// Implemented for `u8`, `u16`, `u32`, `i8`, `i16`, `i32`, `f32`, `f64`,
/// [`Complex32`] and [`Complex64`].
pub trait SampleValue: Copy + Default + bytemuck::Pod + Send + Sync + 'static {
    /// Convert into the storage representation `D`.
    ///
    /// Float sources are not range checked: values outside `[0, 1]` wrap
    /// when the target is an integer. Use
    /// [`to_sample_constrained`](SampleValue::to_sample_constrained) when the
    /// input may be out of range.
    fn to_sample<D: Sample, P: ConversionPath>(self, path: P) -> D;

    /// Like [`to_sample`](SampleValue::to_sample), but float input (and
    /// complex magnitude) is clamped to `[0, 1]` before an integer target
    /// scales it. Identical to `to_sample` for integer sources.
    #[inline]
    fn to_sample_constrained<D: Sample, P: ConversionPath>(self, path: P) -> D {
        self.to_sample(path)
    }

    /// Convert a storage sample into this representation.
    fn from_sample<S: Sample, P: ConversionPath>(sample: S, path: P) -> Self;

    /// Strict ordering used by min/max accumulation. Complex values order by
    /// magnitude.
    fn precedes(self, other: Self) -> bool;
}

/// A storage representation for image samples.
pub trait Sample: SampleValue {
    /// Format tag of this representation.
    const FORMAT: SampleFormat;
    /// Smallest valid sample (always zero).
    const MIN: Self;
    /// Largest valid sample: `2^bits - 1` for integers, `1` for floats.
    const MAX: Self;

    const BITS_PER_SAMPLE: u32 = Self::FORMAT.bits_per_sample();
    const BYTES_PER_SAMPLE: usize = Self::FORMAT.bytes_per_sample();
    const IS_FLOAT: bool = Self::FORMAT.is_float();
    const IS_COMPLEX: bool = Self::FORMAT.is_complex();

    /// Real type in which this representation evaluates blend formulas.
    type Float: Real + Sample;

    /// Stable name of [`FORMAT`](Sample::FORMAT).
    #[inline]
    fn format_name() -> &'static str {
        Self::FORMAT.name()
    }

    fn from_u8<P: ConversionPath>(x: u8, path: P) -> Self;
    fn from_u16<P: ConversionPath>(x: u16, path: P) -> Self;
    fn from_u32(x: u32) -> Self;
    fn from_f32(x: f32) -> Self;
    fn from_f64(x: f64) -> Self;
    /// Float input clamped to `[0, 1]` first when `Self` is an integer.
    fn from_f32_constrained(x: f32) -> Self;
    /// Float input clamped to `[0, 1]` first when `Self` is an integer.
    fn from_f64_constrained(x: f64) -> Self;
    fn from_c32(x: Complex32) -> Self;
    fn from_c64(x: Complex64) -> Self;

    /// Normalized value as [`Self::Float`](Sample::Float); magnitude for complex.
    fn to_float(self) -> Self::Float;

    /// Store a blend result. Integers clamp and round; floats keep the value
    /// as is; complex gets a zero imaginary part.
    fn from_float_saturated(x: Self::Float) -> Self;

    /// Addition. Integers saturate at `MAX`.
    fn add_sample(self, rhs: Self) -> Self;
    /// Subtraction. Integers saturate at zero.
    fn sub_sample(self, rhs: Self) -> Self;
    /// Product of normalized values.
    #[inline]
    fn mul_sample(self, rhs: Self) -> Self {
        Self::from_float_saturated(self.to_float() * rhs.to_float())
    }
    /// Quotient of normalized values. Integers floor the divisor at epsilon.
    #[inline]
    fn div_sample(self, rhs: Self) -> Self {
        let divisor = rhs.to_float().max(<Self::Float as Real>::EPSILON);
        Self::from_float_saturated(self.to_float() / divisor)
    }
    /// `self` raised to `rhs`, using normalized values.
    #[inline]
    fn pow_sample(self, rhs: Self) -> Self {
        Self::from_float_saturated(self.to_float().powf(rhs.to_float()))
    }
    /// Absolute difference.
    fn dif_sample(self, rhs: Self) -> Self;
}

/// Convert `x` into `D` with direct arithmetic.
///
/// ```
/// use zensample::convert;
///
/// let v: f32 = convert(255u8);
/// assert_eq!(v, 1.0);
/// let q: u8 = convert(0.5f32);
/// assert_eq!(q, 128);
/// ```
#[inline]
pub fn convert<D: Sample, S: SampleValue>(x: S) -> D {
    x.to_sample(Direct)
}

/// Convert `x` into `D`, clamping float input to `[0, 1]` first.
///
/// ```
/// use zensample::convert_constrained;
///
/// let q: u8 = convert_constrained(1.5f32);
/// assert_eq!(q, 255);
/// ```
#[inline]
pub fn convert_constrained<D: Sample, S: SampleValue>(x: S) -> D {
    x.to_sample_constrained(Direct)
}

#[inline]
pub(crate) fn magnitude32(z: Complex32) -> f32 {
    libm::hypotf(z.re, z.im)
}

#[inline]
pub(crate) fn magnitude64(z: Complex64) -> f64 {
    libm::hypot(z.re, z.im)
}

// ---------------------------------------------------------------------------
// Unsigned integers
// ---------------------------------------------------------------------------

impl SampleValue for u8 {
    #[inline]
    fn to_sample<D: Sample, P: ConversionPath>(self, path: P) -> D {
        D::from_u8(self, path)
    }
    #[inline]
    fn from_sample<S: Sample, P: ConversionPath>(sample: S, path: P) -> Self {
        sample.to_sample(path)
    }
    #[inline]
    fn precedes(self, other: Self) -> bool {
        self < other
    }
}

impl Sample for u8 {
    const FORMAT: SampleFormat = SampleFormat::UInt8;
    const MIN: Self = 0;
    const MAX: Self = u8::MAX;
    type Float = f32;

    #[inline]
    fn from_u8<P: ConversionPath>(x: u8, _: P) -> Self {
        x
    }
    #[inline]
    fn from_u16<P: ConversionPath>(x: u16, path: P) -> Self {
        path.u16_to_u8(x)
    }
    #[inline]
    fn from_u32(x: u32) -> Self {
        scale::rescale(x, U32_MAX, U8_MAX) as u8
    }
    #[inline]
    fn from_f32(x: f32) -> Self {
        scale::f32_to_u8(x)
    }
    #[inline]
    fn from_f64(x: f64) -> Self {
        scale::f64_to_u8(x)
    }
    #[inline]
    fn from_f32_constrained(x: f32) -> Self {
        scale::f32_to_u8(scale::clamp_unit_f32(x))
    }
    #[inline]
    fn from_f64_constrained(x: f64) -> Self {
        scale::f64_to_u8(scale::clamp_unit_f64(x))
    }
    #[inline]
    fn from_c32(x: Complex32) -> Self {
        Self::from_f32(magnitude32(x))
    }
    #[inline]
    fn from_c64(x: Complex64) -> Self {
        Self::from_f64(magnitude64(x))
    }
    #[inline]
    fn to_float(self) -> f32 {
        scale::u8_to_f32(self)
    }
    #[inline]
    fn from_float_saturated(x: f32) -> Self {
        Self::from_f32_constrained(x)
    }
    #[inline]
    fn add_sample(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }
    #[inline]
    fn sub_sample(self, rhs: Self) -> Self {
        self.saturating_sub(rhs)
    }
    #[inline]
    fn dif_sample(self, rhs: Self) -> Self {
        self.abs_diff(rhs)
    }
}

impl SampleValue for u16 {
    #[inline]
    fn to_sample<D: Sample, P: ConversionPath>(self, path: P) -> D {
        D::from_u16(self, path)
    }
    #[inline]
    fn from_sample<S: Sample, P: ConversionPath>(sample: S, path: P) -> Self {
        sample.to_sample(path)
    }
    #[inline]
    fn precedes(self, other: Self) -> bool {
        self < other
    }
}

impl Sample for u16 {
    const FORMAT: SampleFormat = SampleFormat::UInt16;
    const MIN: Self = 0;
    const MAX: Self = u16::MAX;
    type Float = f32;

    #[inline]
    fn from_u8<P: ConversionPath>(x: u8, path: P) -> Self {
        path.u8_to_u16(x)
    }
    #[inline]
    fn from_u16<P: ConversionPath>(x: u16, _: P) -> Self {
        x
    }
    #[inline]
    fn from_u32(x: u32) -> Self {
        scale::rescale(x, U32_MAX, U16_MAX) as u16
    }
    #[inline]
    fn from_f32(x: f32) -> Self {
        scale::f32_to_u16(x)
    }
    #[inline]
    fn from_f64(x: f64) -> Self {
        scale::f64_to_u16(x)
    }
    #[inline]
    fn from_f32_constrained(x: f32) -> Self {
        scale::f32_to_u16(scale::clamp_unit_f32(x))
    }
    #[inline]
    fn from_f64_constrained(x: f64) -> Self {
        scale::f64_to_u16(scale::clamp_unit_f64(x))
    }
    #[inline]
    fn from_c32(x: Complex32) -> Self {
        Self::from_f32(magnitude32(x))
    }
    #[inline]
    fn from_c64(x: Complex64) -> Self {
        Self::from_f64(magnitude64(x))
    }
    #[inline]
    fn to_float(self) -> f32 {
        scale::u16_to_f32(self)
    }
    #[inline]
    fn from_float_saturated(x: f32) -> Self {
        Self::from_f32_constrained(x)
    }
    #[inline]
    fn add_sample(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }
    #[inline]
    fn sub_sample(self, rhs: Self) -> Self {
        self.saturating_sub(rhs)
    }
    #[inline]
    fn dif_sample(self, rhs: Self) -> Self {
        self.abs_diff(rhs)
    }
}

impl SampleValue for u32 {
    #[inline]
    fn to_sample<D: Sample, P: ConversionPath>(self, _: P) -> D {
        D::from_u32(self)
    }
    #[inline]
    fn from_sample<S: Sample, P: ConversionPath>(sample: S, path: P) -> Self {
        sample.to_sample(path)
    }
    #[inline]
    fn precedes(self, other: Self) -> bool {
        self < other
    }
}

impl Sample for u32 {
    const FORMAT: SampleFormat = SampleFormat::UInt32;
    const MIN: Self = 0;
    const MAX: Self = u32::MAX;
    type Float = f64;

    #[inline]
    fn from_u8<P: ConversionPath>(x: u8, path: P) -> Self {
        path.u8_to_u32(x)
    }
    #[inline]
    fn from_u16<P: ConversionPath>(x: u16, path: P) -> Self {
        path.u16_to_u32(x)
    }
    #[inline]
    fn from_u32(x: u32) -> Self {
        x
    }
    #[inline]
    fn from_f32(x: f32) -> Self {
        scale::f64_to_u32(x as f64)
    }
    #[inline]
    fn from_f64(x: f64) -> Self {
        scale::f64_to_u32(x)
    }
    #[inline]
    fn from_f32_constrained(x: f32) -> Self {
        scale::f64_to_u32(scale::clamp_unit_f64(x as f64))
    }
    #[inline]
    fn from_f64_constrained(x: f64) -> Self {
        scale::f64_to_u32(scale::clamp_unit_f64(x))
    }
    #[inline]
    fn from_c32(x: Complex32) -> Self {
        Self::from_f32(magnitude32(x))
    }
    #[inline]
    fn from_c64(x: Complex64) -> Self {
        Self::from_f64(magnitude64(x))
    }
    #[inline]
    fn to_float(self) -> f64 {
        scale::u32_to_f64(self)
    }
    #[inline]
    fn from_float_saturated(x: f64) -> Self {
        Self::from_f64_constrained(x)
    }
    #[inline]
    fn add_sample(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }
    #[inline]
    fn sub_sample(self, rhs: Self) -> Self {
        self.saturating_sub(rhs)
    }
    #[inline]
    fn dif_sample(self, rhs: Self) -> Self {
        self.abs_diff(rhs)
    }
}

// ---------------------------------------------------------------------------
// Real floating point
// ---------------------------------------------------------------------------

impl SampleValue for f32 {
    #[inline]
    fn to_sample<D: Sample, P: ConversionPath>(self, _: P) -> D {
        D::from_f32(self)
    }
    #[inline]
    fn to_sample_constrained<D: Sample, P: ConversionPath>(self, _: P) -> D {
        D::from_f32_constrained(self)
    }
    #[inline]
    fn from_sample<S: Sample, P: ConversionPath>(sample: S, path: P) -> Self {
        sample.to_sample(path)
    }
    #[inline]
    fn precedes(self, other: Self) -> bool {
        self < other
    }
}

impl Sample for f32 {
    const FORMAT: SampleFormat = SampleFormat::Float32;
    const MIN: Self = 0.0;
    const MAX: Self = 1.0;
    type Float = f32;

    #[inline]
    fn from_u8<P: ConversionPath>(x: u8, path: P) -> Self {
        path.u8_to_f32(x)
    }
    #[inline]
    fn from_u16<P: ConversionPath>(x: u16, path: P) -> Self {
        path.u16_to_f32(x)
    }
    #[inline]
    fn from_u32(x: u32) -> Self {
        scale::u32_to_f32(x)
    }
    #[inline]
    fn from_f32(x: f32) -> Self {
        x
    }
    #[inline]
    fn from_f64(x: f64) -> Self {
        x as f32
    }
    #[inline]
    fn from_f32_constrained(x: f32) -> Self {
        x
    }
    #[inline]
    fn from_f64_constrained(x: f64) -> Self {
        x as f32
    }
    #[inline]
    fn from_c32(x: Complex32) -> Self {
        magnitude32(x)
    }
    #[inline]
    fn from_c64(x: Complex64) -> Self {
        magnitude64(x) as f32
    }
    #[inline]
    fn to_float(self) -> f32 {
        self
    }
    #[inline]
    fn from_float_saturated(x: f32) -> Self {
        x
    }
    #[inline]
    fn add_sample(self, rhs: Self) -> Self {
        self + rhs
    }
    #[inline]
    fn sub_sample(self, rhs: Self) -> Self {
        self - rhs
    }
    #[inline]
    fn mul_sample(self, rhs: Self) -> Self {
        self * rhs
    }
    #[inline]
    fn div_sample(self, rhs: Self) -> Self {
        self / rhs
    }
    #[inline]
    fn pow_sample(self, rhs: Self) -> Self {
        libm::powf(self, rhs)
    }
    #[inline]
    fn dif_sample(self, rhs: Self) -> Self {
        libm::fabsf(self - rhs)
    }
}

impl SampleValue for f64 {
    #[inline]
    fn to_sample<D: Sample, P: ConversionPath>(self, _: P) -> D {
        D::from_f64(self)
    }
    #[inline]
    fn to_sample_constrained<D: Sample, P: ConversionPath>(self, _: P) -> D {
        D::from_f64_constrained(self)
    }
    #[inline]
    fn from_sample<S: Sample, P: ConversionPath>(sample: S, path: P) -> Self {
        sample.to_sample(path)
    }
    #[inline]
    fn precedes(self, other: Self) -> bool {
        self < other
    }
}

impl Sample for f64 {
    const FORMAT: SampleFormat = SampleFormat::Float64;
    const MIN: Self = 0.0;
    const MAX: Self = 1.0;
    type Float = f64;

    #[inline]
    fn from_u8<P: ConversionPath>(x: u8, path: P) -> Self {
        path.u8_to_f64(x)
    }
    #[inline]
    fn from_u16<P: ConversionPath>(x: u16, path: P) -> Self {
        path.u16_to_f64(x)
    }
    #[inline]
    fn from_u32(x: u32) -> Self {
        scale::u32_to_f64(x)
    }
    #[inline]
    fn from_f32(x: f32) -> Self {
        x as f64
    }
    #[inline]
    fn from_f64(x: f64) -> Self {
        x
    }
    #[inline]
    fn from_f32_constrained(x: f32) -> Self {
        x as f64
    }
    #[inline]
    fn from_f64_constrained(x: f64) -> Self {
        x
    }
    #[inline]
    fn from_c32(x: Complex32) -> Self {
        magnitude32(x) as f64
    }
    #[inline]
    fn from_c64(x: Complex64) -> Self {
        magnitude64(x)
    }
    #[inline]
    fn to_float(self) -> f64 {
        self
    }
    #[inline]
    fn from_float_saturated(x: f64) -> Self {
        x
    }
    #[inline]
    fn add_sample(self, rhs: Self) -> Self {
        self + rhs
    }
    #[inline]
    fn sub_sample(self, rhs: Self) -> Self {
        self - rhs
    }
    #[inline]
    fn mul_sample(self, rhs: Self) -> Self {
        self * rhs
    }
    #[inline]
    fn div_sample(self, rhs: Self) -> Self {
        self / rhs
    }
    #[inline]
    fn pow_sample(self, rhs: Self) -> Self {
        libm::pow(self, rhs)
    }
    #[inline]
    fn dif_sample(self, rhs: Self) -> Self {
        libm::fabs(self - rhs)
    }
}

// ---------------------------------------------------------------------------
// Complex floating point
// ---------------------------------------------------------------------------

impl SampleValue for Complex32 {
    #[inline]
    fn to_sample<D: Sample, P: ConversionPath>(self, _: P) -> D {
        D::from_c32(self)
    }
    #[inline]
    fn to_sample_constrained<D: Sample, P: ConversionPath>(self, _: P) -> D {
        if D::IS_COMPLEX {
            D::from_c32(self)
        } else {
            D::from_f32_constrained(magnitude32(self))
        }
    }
    #[inline]
    fn from_sample<S: Sample, P: ConversionPath>(sample: S, path: P) -> Self {
        sample.to_sample(path)
    }
    #[inline]
    fn precedes(self, other: Self) -> bool {
        self.norm_sqr() < other.norm_sqr()
    }
}

impl Sample for Complex32 {
    const FORMAT: SampleFormat = SampleFormat::Complex32;
    const MIN: Self = Complex32::new(0.0, 0.0);
    const MAX: Self = Complex32::new(1.0, 0.0);
    type Float = f32;

    #[inline]
    fn from_u8<P: ConversionPath>(x: u8, path: P) -> Self {
        Complex32::new(path.u8_to_f32(x), 0.0)
    }
    #[inline]
    fn from_u16<P: ConversionPath>(x: u16, path: P) -> Self {
        Complex32::new(path.u16_to_f32(x), 0.0)
    }
    #[inline]
    fn from_u32(x: u32) -> Self {
        Complex32::new(scale::u32_to_f32(x), 0.0)
    }
    #[inline]
    fn from_f32(x: f32) -> Self {
        Complex32::new(x, 0.0)
    }
    #[inline]
    fn from_f64(x: f64) -> Self {
        Complex32::new(x as f32, 0.0)
    }
    #[inline]
    fn from_f32_constrained(x: f32) -> Self {
        Self::from_f32(x)
    }
    #[inline]
    fn from_f64_constrained(x: f64) -> Self {
        Self::from_f64(x)
    }
    #[inline]
    fn from_c32(x: Complex32) -> Self {
        x
    }
    #[inline]
    fn from_c64(x: Complex64) -> Self {
        Complex32::new(x.re as f32, x.im as f32)
    }
    #[inline]
    fn to_float(self) -> f32 {
        magnitude32(self)
    }
    #[inline]
    fn from_float_saturated(x: f32) -> Self {
        Complex32::new(x, 0.0)
    }
    #[inline]
    fn add_sample(self, rhs: Self) -> Self {
        self + rhs
    }
    #[inline]
    fn sub_sample(self, rhs: Self) -> Self {
        self - rhs
    }
    #[inline]
    fn mul_sample(self, rhs: Self) -> Self {
        self * rhs
    }
    #[inline]
    fn div_sample(self, rhs: Self) -> Self {
        self / rhs
    }
    #[inline]
    fn pow_sample(self, rhs: Self) -> Self {
        self.powc(rhs)
    }
    #[inline]
    fn dif_sample(self, rhs: Self) -> Self {
        Complex32::new(libm::fabsf(magnitude32(self) - magnitude32(rhs)), 0.0)
    }
}

impl SampleValue for Complex64 {
    #[inline]
    fn to_sample<D: Sample, P: ConversionPath>(self, _: P) -> D {
        D::from_c64(self)
    }
    #[inline]
    fn to_sample_constrained<D: Sample, P: ConversionPath>(self, _: P) -> D {
        if D::IS_COMPLEX {
            D::from_c64(self)
        } else {
            D::from_f64_constrained(magnitude64(self))
        }
    }
    #[inline]
    fn from_sample<S: Sample, P: ConversionPath>(sample: S, path: P) -> Self {
        sample.to_sample(path)
    }
    #[inline]
    fn precedes(self, other: Self) -> bool {
        self.norm_sqr() < other.norm_sqr()
    }
}

impl Sample for Complex64 {
    const FORMAT: SampleFormat = SampleFormat::Complex64;
    const MIN: Self = Complex64::new(0.0, 0.0);
    const MAX: Self = Complex64::new(1.0, 0.0);
    type Float = f64;

    #[inline]
    fn from_u8<P: ConversionPath>(x: u8, path: P) -> Self {
        Complex64::new(path.u8_to_f64(x), 0.0)
    }
    #[inline]
    fn from_u16<P: ConversionPath>(x: u16, path: P) -> Self {
        Complex64::new(path.u16_to_f64(x), 0.0)
    }
    #[inline]
    fn from_u32(x: u32) -> Self {
        Complex64::new(scale::u32_to_f64(x), 0.0)
    }
    #[inline]
    fn from_f32(x: f32) -> Self {
        Complex64::new(x as f64, 0.0)
    }
    #[inline]
    fn from_f64(x: f64) -> Self {
        Complex64::new(x, 0.0)
    }
    #[inline]
    fn from_f32_constrained(x: f32) -> Self {
        Self::from_f32(x)
    }
    #[inline]
    fn from_f64_constrained(x: f64) -> Self {
        Self::from_f64(x)
    }
    #[inline]
    fn from_c32(x: Complex32) -> Self {
        Complex64::new(x.re as f64, x.im as f64)
    }
    #[inline]
    fn from_c64(x: Complex64) -> Self {
        x
    }
    #[inline]
    fn to_float(self) -> f64 {
        magnitude64(self)
    }
    #[inline]
    fn from_float_saturated(x: f64) -> Self {
        Complex64::new(x, 0.0)
    }
    #[inline]
    fn add_sample(self, rhs: Self) -> Self {
        self + rhs
    }
    #[inline]
    fn sub_sample(self, rhs: Self) -> Self {
        self - rhs
    }
    #[inline]
    fn mul_sample(self, rhs: Self) -> Self {
        self * rhs
    }
    #[inline]
    fn div_sample(self, rhs: Self) -> Self {
        self / rhs
    }
    #[inline]
    fn pow_sample(self, rhs: Self) -> Self {
        self.powc(rhs)
    }
    #[inline]
    fn dif_sample(self, rhs: Self) -> Self {
        Complex64::new(libm::fabs(magnitude64(self) - magnitude64(rhs)), 0.0)
    }
}

// ---------------------------------------------------------------------------
// Signed integers (foreign values only)
// ---------------------------------------------------------------------------

// Signed values are shifted by -MIN onto the unsigned domain of the same
// width, so MIN maps to zero and MAX to the unsigned maximum.
macro_rules! impl_signed_value {
    ($signed:ty, $unsigned:ty, $wide:ty) => {
        impl SampleValue for $signed {
            #[inline]
            fn to_sample<D: Sample, P: ConversionPath>(self, path: P) -> D {
                let shifted = (self as $wide - <$signed>::MIN as $wide) as $unsigned;
                shifted.to_sample(path)
            }
            #[inline]
            fn from_sample<S: Sample, P: ConversionPath>(sample: S, path: P) -> Self {
                let unsigned: $unsigned = sample.to_sample(path);
                (unsigned as $wide + <$signed>::MIN as $wide) as $signed
            }
            #[inline]
            fn precedes(self, other: Self) -> bool {
                self < other
            }
        }
    };
}

impl_signed_value!(i8, u8, i16);
impl_signed_value!(i16, u16, i32);
impl_signed_value!(i32, u32, i64);
