//! Channel-wise conversion of typed pixels.
//!
//! Implemented for bare samples (single-channel grids) and the `rgb` crate
//! pixel types. Alpha is converted like any other channel.

use num_complex::{Complex32, Complex64};
use rgb::{Gray, Rgb, Rgba};

use crate::lut::ConversionPath;
use crate::sample::{Sample, SampleValue};

/// A pixel whose channels are all one [`SampleValue`] representation.
pub trait PixelSamples: Copy + Send + Sync + 'static {
    /// Representation of each channel.
    type Channel: SampleValue;
    /// The same pixel layout with channels of representation `D`.
    type Converted<D: Sample>: Copy;

    /// Number of channels.
    const CHANNELS: usize;

    /// Convert every channel to `D`.
    fn convert_pixel<D: Sample, P: ConversionPath>(self, path: P) -> Self::Converted<D>;

    /// Convert every channel to `D`, clamping float input to `[0, 1]`.
    fn convert_pixel_constrained<D: Sample, P: ConversionPath>(
        self,
        path: P,
    ) -> Self::Converted<D>;
}

macro_rules! impl_scalar_pixel {
    ($($t:ty),*) => {$(
        impl PixelSamples for $t {
            type Channel = $t;
            type Converted<D: Sample> = D;
            const CHANNELS: usize = 1;

            #[inline]
            fn convert_pixel<D: Sample, P: ConversionPath>(self, path: P) -> D {
                self.to_sample(path)
            }
            #[inline]
            fn convert_pixel_constrained<D: Sample, P: ConversionPath>(self, path: P) -> D {
                self.to_sample_constrained(path)
            }
        }
    )*};
}

impl_scalar_pixel!(u8, u16, u32, i8, i16, i32, f32, f64, Complex32, Complex64);

impl<T: SampleValue> PixelSamples for Gray<T> {
    type Channel = T;
    type Converted<D: Sample> = Gray<D>;
    const CHANNELS: usize = 1;

    #[inline]
    fn convert_pixel<D: Sample, P: ConversionPath>(self, path: P) -> Gray<D> {
        Gray::new(self.value().to_sample(path))
    }
    #[inline]
    fn convert_pixel_constrained<D: Sample, P: ConversionPath>(self, path: P) -> Gray<D> {
        Gray::new(self.value().to_sample_constrained(path))
    }
}

impl<T: SampleValue> PixelSamples for Rgb<T> {
    type Channel = T;
    type Converted<D: Sample> = Rgb<D>;
    const CHANNELS: usize = 3;

    #[inline]
    fn convert_pixel<D: Sample, P: ConversionPath>(self, path: P) -> Rgb<D> {
        Rgb {
            r: self.r.to_sample(path),
            g: self.g.to_sample(path),
            b: self.b.to_sample(path),
        }
    }
    #[inline]
    fn convert_pixel_constrained<D: Sample, P: ConversionPath>(self, path: P) -> Rgb<D> {
        Rgb {
            r: self.r.to_sample_constrained(path),
            g: self.g.to_sample_constrained(path),
            b: self.b.to_sample_constrained(path),
        }
    }
}

impl<T: SampleValue> PixelSamples for Rgba<T> {
    type Channel = T;
    type Converted<D: Sample> = Rgba<D>;
    const CHANNELS: usize = 4;

    #[inline]
    fn convert_pixel<D: Sample, P: ConversionPath>(self, path: P) -> Rgba<D> {
        Rgba {
            r: self.r.to_sample(path),
            g: self.g.to_sample(path),
            b: self.b.to_sample(path),
            a: self.a.to_sample(path),
        }
    }
    #[inline]
    fn convert_pixel_constrained<D: Sample, P: ConversionPath>(self, path: P) -> Rgba<D> {
        Rgba {
            r: self.r.to_sample_constrained(path),
            g: self.g.to_sample_constrained(path),
            b: self.b.to_sample_constrained(path),
            a: self.a.to_sample_constrained(path),
        }
    }
}
