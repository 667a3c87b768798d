//! 20 and 24-bit intermediate integer domains.
//!
//! These are never image storage formats. They exist as fine-grained
//! integer indices: histogram bins, curve lookups, and the 20-bit lookup
//! tables in [`crate::lut`]. Values are always kept within their domain;
//! conversions into them clamp.

use crate::format::SampleFormat;
use crate::lut::ConversionPath;
use crate::sample::{Sample, SampleValue};
use crate::scale::{self, U8_MAX, U16_MAX, U20_MAX, U24_MAX, U32_MAX};

/// A 20-bit unsigned sample, `0..=1048575`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U20(u32);

/// A 24-bit unsigned sample, `0..=16777215`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U24(u32);

impl U20 {
    pub const BITS: u32 = 20;
    pub const MIN: Self = U20(0);
    pub const MAX: Self = U20(U20_MAX);

    /// Wrap `value`, clamping it into the domain.
    #[inline]
    pub const fn new(value: u32) -> Self {
        if value > U20_MAX {
            Self::MAX
        } else {
            U20(value)
        }
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Convert a storage sample into the 20-bit domain.
    ///
    /// 8 and 16-bit sources go through `path`; float input is clamped.
    #[inline]
    pub fn from_sample<S: Sample, P: ConversionPath>(sample: S, path: P) -> Self {
        let v = match S::FORMAT {
            SampleFormat::UInt8 => path.u8_to_u20(sample.to_sample(path)),
            SampleFormat::UInt16 => path.u16_to_u20(sample.to_sample(path)),
            SampleFormat::UInt32 => scale::rescale(sample.to_sample(path), U32_MAX, U20_MAX),
            _ => scale::f64_to_range_clamped(sample.to_sample_constrained(path), U20_MAX),
        };
        U20(v)
    }

    /// Convert into a storage representation.
    ///
    /// Uses the 20-bit tables of `path` when it has them.
    #[inline]
    pub fn to_sample<D: Sample, P: ConversionPath>(self, path: P) -> D {
        match D::FORMAT {
            SampleFormat::UInt8 => path.u20_to_u8(self.0).to_sample(path),
            SampleFormat::UInt16 => path.u20_to_u16(self.0).to_sample(path),
            SampleFormat::UInt32 => path.u20_to_u32(self.0).to_sample(path),
            SampleFormat::Float32 | SampleFormat::Complex32 => {
                path.u20_to_f32(self.0).to_sample(path)
            }
            _ => path.u20_to_f64(self.0).to_sample(path),
        }
    }
}

impl U24 {
    pub const BITS: u32 = 24;
    pub const MIN: Self = U24(0);
    pub const MAX: Self = U24(U24_MAX);

    /// Wrap `value`, clamping it into the domain.
    #[inline]
    pub const fn new(value: u32) -> Self {
        if value > U24_MAX {
            Self::MAX
        } else {
            U24(value)
        }
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Convert a storage sample into the 24-bit domain.
    #[inline]
    pub fn from_sample<S: Sample, P: ConversionPath>(sample: S, path: P) -> Self {
        let v = match S::FORMAT {
            SampleFormat::UInt8 => path.u8_to_u24(sample.to_sample(path)),
            SampleFormat::UInt16 => path.u16_to_u24(sample.to_sample(path)),
            SampleFormat::UInt32 => scale::rescale(sample.to_sample(path), U32_MAX, U24_MAX),
            _ => scale::f64_to_range_clamped(sample.to_sample_constrained(path), U24_MAX),
        };
        U24(v)
    }

    /// Convert into a storage representation. No tables cover this domain.
    #[inline]
    pub fn to_sample<D: Sample, P: ConversionPath>(self, path: P) -> D {
        match D::FORMAT {
            SampleFormat::UInt8 => (scale::rescale(self.0, U24_MAX, U8_MAX) as u8).to_sample(path),
            SampleFormat::UInt16 => {
                (scale::rescale(self.0, U24_MAX, U16_MAX) as u16).to_sample(path)
            }
            SampleFormat::UInt32 => scale::rescale(self.0, U24_MAX, U32_MAX).to_sample(path),
            _ => scale::u24_to_f64(self.0).to_sample(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lut::{ConversionTables, Direct, LutConfig};

    #[test]
    fn construction_clamps() {
        assert_eq!(U20::new(5).get(), 5);
        assert_eq!(U20::new(u32::MAX), U20::MAX);
        assert_eq!(U24::new(1 << 24), U24::MAX);
        assert_eq!(U24::MAX.get(), 16_777_215);
    }

    #[test]
    fn boundaries_against_storage() {
        assert_eq!(U20::from_sample(0u8, Direct), U20::MIN);
        assert_eq!(U20::from_sample(255u8, Direct), U20::MAX);
        assert_eq!(U20::from_sample(u16::MAX, Direct), U20::MAX);
        assert_eq!(U20::from_sample(u32::MAX, Direct), U20::MAX);
        assert_eq!(U20::from_sample(1.0f32, Direct), U20::MAX);
        assert_eq!(U24::from_sample(1.0f64, Direct), U24::MAX);
        assert_eq!(U24::from_sample(u16::MAX, Direct), U24::MAX);

        assert_eq!(U20::MAX.to_sample::<u8, _>(Direct), 255);
        assert_eq!(U20::MAX.to_sample::<f32, _>(Direct), 1.0);
        assert_eq!(U20::MIN.to_sample::<u32, _>(Direct), 0);
        assert_eq!(U24::MAX.to_sample::<u16, _>(Direct), u16::MAX);
        assert_eq!(U24::MAX.to_sample::<f64, _>(Direct), 1.0);
    }

    #[test]
    fn float_input_is_clamped() {
        assert_eq!(U20::from_sample(2.5f32, Direct), U20::MAX);
        assert_eq!(U20::from_sample(-1.0f64, Direct), U20::MIN);
        assert_eq!(
            U24::from_sample(num_complex::Complex32::new(3.0, 4.0), Direct),
            U24::MAX
        );
    }

    #[test]
    fn u16_round_trip_through_u24() {
        for x in (0..=u16::MAX).step_by(7) {
            let wide = U24::from_sample(x, Direct);
            assert_eq!(wide.to_sample::<u16, _>(Direct), x);
        }
    }

    #[test]
    fn tables_agree_with_direct() {
        let tables = ConversionTables::new(LutConfig::full());
        for x in (0..=U20_MAX).step_by(1021) {
            let v = U20::new(x);
            assert_eq!(v.to_sample::<f64, _>(&tables), v.to_sample::<f64, _>(Direct));
            assert_eq!(v.to_sample::<u16, _>(&tables), v.to_sample::<u16, _>(Direct));
        }
        for x in 0..=255u8 {
            assert_eq!(U20::from_sample(x, &tables), U20::from_sample(x, Direct));
            assert_eq!(U24::from_sample(x, &tables), U24::from_sample(x, Direct));
        }
    }
}
