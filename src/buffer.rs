//! Runtime-tagged sample buffers.
//!
//! [`SampleBuffer`] owns a contiguous run of samples in one of the storage
//! representations. The representation is chosen once per buffer; every
//! operation resolves it with a single `match` and then runs a
//! monomorphized loop from [`crate::transfer`] or [`crate::composite`].

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use num_complex::{Complex32, Complex64};

use crate::composite::{self, CompositeOp};
use crate::format::SampleFormat;
use crate::lut::ConversionPath;
use crate::sample::{Sample, SampleValue};
use crate::transfer;

// ---------------------------------------------------------------------------
// BufferError
// ---------------------------------------------------------------------------

/// Errors from sample buffer operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum BufferError {
    /// The two buffers of a binary operation differ in length.
    LengthMismatch {
        /// Length of the destination.
        expected: usize,
        /// Length of the source.
        actual: usize,
    },
    /// Raw byte length is not a multiple of the sample size.
    MisalignedLength {
        /// Byte length supplied.
        len: usize,
        /// Size of one sample of the requested format.
        bytes_per_sample: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(f, "buffer length {actual} does not match {expected}")
            }
            Self::MisalignedLength {
                len,
                bytes_per_sample,
            } => write!(
                f,
                "byte length {len} is not a multiple of {bytes_per_sample}"
            ),
        }
    }
}

impl core::error::Error for BufferError {}

// ---------------------------------------------------------------------------
// SampleBuffer
// ---------------------------------------------------------------------------

/// An owned buffer of samples in one storage representation.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum SampleBuffer {
    UInt8(Vec<u8>),
    UInt16(Vec<u16>),
    UInt32(Vec<u32>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
    Complex32(Vec<Complex32>),
    Complex64(Vec<Complex64>),
}

macro_rules! with_samples {
    ($buf:expr, $v:ident => $body:expr) => {
        match $buf {
            SampleBuffer::UInt8($v) => $body,
            SampleBuffer::UInt16($v) => $body,
            SampleBuffer::UInt32($v) => $body,
            SampleBuffer::Float32($v) => $body,
            SampleBuffer::Float64($v) => $body,
            SampleBuffer::Complex32($v) => $body,
            SampleBuffer::Complex64($v) => $body,
        }
    };
}

macro_rules! impl_from_vec {
    ($($t:ty => $variant:ident),* $(,)?) => {$(
        impl From<Vec<$t>> for SampleBuffer {
            fn from(v: Vec<$t>) -> Self {
                SampleBuffer::$variant(v)
            }
        }
    )*};
}

impl_from_vec!(
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    f32 => Float32,
    f64 => Float64,
    Complex32 => Complex32,
    Complex64 => Complex64,
);

impl SampleBuffer {
    /// A buffer of `len` zero samples.
    pub fn zeroed(format: SampleFormat, len: usize) -> Self {
        match format {
            SampleFormat::UInt8 => Self::UInt8(vec![0; len]),
            SampleFormat::UInt16 => Self::UInt16(vec![0; len]),
            SampleFormat::UInt32 => Self::UInt32(vec![0; len]),
            SampleFormat::Float32 => Self::Float32(vec![0.0; len]),
            SampleFormat::Float64 => Self::Float64(vec![0.0; len]),
            SampleFormat::Complex32 => Self::Complex32(vec![Complex32::default(); len]),
            SampleFormat::Complex64 => Self::Complex64(vec![Complex64::default(); len]),
        }
    }

    pub fn format(&self) -> SampleFormat {
        match self {
            Self::UInt8(_) => SampleFormat::UInt8,
            Self::UInt16(_) => SampleFormat::UInt16,
            Self::UInt32(_) => SampleFormat::UInt32,
            Self::Float32(_) => SampleFormat::Float32,
            Self::Float64(_) => SampleFormat::Float64,
            Self::Complex32(_) => SampleFormat::Complex32,
            Self::Complex64(_) => SampleFormat::Complex64,
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        with_samples!(self, v => v.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Typed view, if `T` is the stored representation.
    pub fn as_slice<T: Sample>(&self) -> Option<&[T]> {
        if T::FORMAT != self.format() {
            return None;
        }
        with_samples!(self, v => Some(bytemuck::cast_slice(v.as_slice())))
    }

    /// Typed mutable view, if `T` is the stored representation.
    pub fn as_mut_slice<T: Sample>(&mut self) -> Option<&mut [T]> {
        if T::FORMAT != self.format() {
            return None;
        }
        with_samples!(self, v => Some(bytemuck::cast_slice_mut(v.as_mut_slice())))
    }

    /// Set every sample to `value`.
    pub fn fill<S: SampleValue, P: ConversionPath>(&mut self, value: S, path: P) {
        with_samples!(self, v => transfer::fill(v, value, path))
    }

    /// A copy of this buffer converted to `format`.
    pub fn convert<P: ConversionPath>(&self, format: SampleFormat, path: P) -> SampleBuffer {
        let mut out = SampleBuffer::zeroed(format, self.len());
        with_samples!(&mut out, dst => with_samples!(self, src => transfer::copy(dst, src, path)));
        out
    }

    /// Like [`convert`](Self::convert), clamping float input to `[0, 1]`
    /// before integer scaling.
    pub fn convert_constrained<P: ConversionPath>(
        &self,
        format: SampleFormat,
        path: P,
    ) -> SampleBuffer {
        let mut out = SampleBuffer::zeroed(format, self.len());
        with_samples!(&mut out, dst => with_samples!(self, src => {
            transfer::copy_constrained(dst, src, path)
        }));
        out
    }

    /// Overwrite this buffer with `other` converted to this representation.
    pub fn copy_from<P: ConversionPath>(
        &mut self,
        other: &SampleBuffer,
        path: P,
    ) -> Result<(), BufferError> {
        self.check_len(other)?;
        with_samples!(self, dst => with_samples!(other, src => transfer::copy(dst, src, path)));
        Ok(())
    }

    /// Keep the elementwise minimum of this buffer and `other`.
    pub fn accumulate_min<P: ConversionPath>(
        &mut self,
        other: &SampleBuffer,
        path: P,
    ) -> Result<(), BufferError> {
        self.check_len(other)?;
        with_samples!(self, dst => with_samples!(other, src => transfer::copy_min(dst, src, path)));
        Ok(())
    }

    /// Keep the elementwise maximum of this buffer and `other`.
    pub fn accumulate_max<P: ConversionPath>(
        &mut self,
        other: &SampleBuffer,
        path: P,
    ) -> Result<(), BufferError> {
        self.check_len(other)?;
        with_samples!(self, dst => with_samples!(other, src => transfer::copy_max(dst, src, path)));
        Ok(())
    }

    /// Composite `other` into this buffer with `op`.
    pub fn composite<P: ConversionPath>(
        &mut self,
        op: CompositeOp,
        other: &SampleBuffer,
        path: P,
    ) -> Result<(), BufferError> {
        self.check_len(other)?;
        with_samples!(self, dst => with_samples!(other, src => {
            composite::apply_slice(op, dst, src, path)
        }));
        Ok(())
    }

    /// Composite the constant `value` into every sample with `op`.
    pub fn composite_scalar<S: SampleValue, P: ConversionPath>(
        &mut self,
        op: CompositeOp,
        value: S,
        path: P,
    ) {
        with_samples!(self, dst => composite::apply_scalar(op, dst, value, path))
    }

    /// Import native-endian raw sample bytes. `bytes` need not be aligned.
    pub fn from_ne_bytes(format: SampleFormat, bytes: &[u8]) -> Result<Self, BufferError> {
        let bytes_per_sample = format.bytes_per_sample();
        if bytes.len() % bytes_per_sample != 0 {
            return Err(BufferError::MisalignedLength {
                len: bytes.len(),
                bytes_per_sample,
            });
        }
        Ok(match format {
            SampleFormat::UInt8 => Self::UInt8(bytes.to_vec()),
            SampleFormat::UInt16 => Self::UInt16(bytemuck::pod_collect_to_vec(bytes)),
            SampleFormat::UInt32 => Self::UInt32(bytemuck::pod_collect_to_vec(bytes)),
            SampleFormat::Float32 => Self::Float32(bytemuck::pod_collect_to_vec(bytes)),
            SampleFormat::Float64 => Self::Float64(bytemuck::pod_collect_to_vec(bytes)),
            SampleFormat::Complex32 => Self::Complex32(bytemuck::pod_collect_to_vec(bytes)),
            SampleFormat::Complex64 => Self::Complex64(bytemuck::pod_collect_to_vec(bytes)),
        })
    }

    /// Export the samples as native-endian raw bytes.
    pub fn to_ne_bytes(&self) -> Vec<u8> {
        with_samples!(self, v => bytemuck::cast_slice::<_, u8>(v.as_slice()).to_vec())
    }

    fn check_len(&self, other: &SampleBuffer) -> Result<(), BufferError> {
        if self.len() != other.len() {
            return Err(BufferError::LengthMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lut::{ConversionTables, Direct};
    use alloc::format;

    #[test]
    fn zeroed_every_format() {
        for format in SampleFormat::ALL {
            let buf = SampleBuffer::zeroed(format, 7);
            assert_eq!(buf.format(), format);
            assert_eq!(buf.len(), 7);
            assert_eq!(buf.to_ne_bytes().len(), 7 * format.bytes_per_sample());
            assert!(buf.to_ne_bytes().iter().all(|&b| b == 0));
        }
        assert!(SampleBuffer::zeroed(SampleFormat::Float64, 0).is_empty());
    }

    #[test]
    fn convert_round_trips_native_points() {
        let src = SampleBuffer::from(vec![0u8, 128, 255]);
        let f = src.convert(SampleFormat::Float32, Direct);
        let values = f.as_slice::<f32>().unwrap();
        assert_eq!(values[0], 0.0);
        assert!((values[1] - 128.0 / 255.0).abs() < 1e-7);
        assert_eq!(values[2], 1.0);
        assert_eq!(f.convert(SampleFormat::UInt8, Direct), src);

        let tables = ConversionTables::global();
        for format in SampleFormat::ALL {
            let there = src.convert(format, tables);
            assert_eq!(there.convert(SampleFormat::UInt8, tables), src, "{format}");
        }
    }

    #[test]
    fn convert_constrained_clamps() {
        let src = SampleBuffer::from(vec![-1.0f64, 0.5, 3.0]);
        let q = src.convert_constrained(SampleFormat::UInt16, Direct);
        assert_eq!(q.as_slice::<u16>().unwrap(), &[0, 32768, u16::MAX]);
    }

    #[test]
    fn typed_views() {
        let mut buf = SampleBuffer::zeroed(SampleFormat::UInt16, 3);
        assert!(buf.as_slice::<u8>().is_none());
        buf.as_mut_slice::<u16>().unwrap()[1] = 9;
        assert_eq!(buf.as_slice::<u16>().unwrap(), &[0, 9, 0]);
        buf.fill(1.0f32, Direct);
        assert_eq!(buf.as_slice::<u16>().unwrap(), &[u16::MAX; 3]);
    }

    #[test]
    fn binary_ops_check_length() {
        let mut a = SampleBuffer::zeroed(SampleFormat::Float32, 3);
        let b = SampleBuffer::zeroed(SampleFormat::UInt8, 4);
        let err = a.copy_from(&b, Direct).unwrap_err();
        assert_eq!(
            err,
            BufferError::LengthMismatch {
                expected: 3,
                actual: 4
            }
        );
        assert!(a.accumulate_min(&b, Direct).is_err());
        assert!(a.composite(CompositeOp::Add, &b, Direct).is_err());
        assert!(format!("{err}").contains("does not match"));
    }

    #[test]
    fn accumulate_across_formats() {
        let mut acc = SampleBuffer::from(vec![0.5f32, 0.5, 0.5]);
        let other = SampleBuffer::from(vec![0u8, 255, 128]);
        let mut lo = acc.clone();
        lo.accumulate_min(&other, Direct).unwrap();
        assert_eq!(lo.as_slice::<f32>().unwrap(), &[0.0, 0.5, 0.5]);
        acc.accumulate_max(&other, Direct).unwrap();
        let hi = acc.as_slice::<f32>().unwrap();
        assert_eq!(hi[0], 0.5);
        assert_eq!(hi[1], 1.0);
        assert!((hi[2] - 128.0 / 255.0).abs() < 1e-7);
    }

    #[test]
    fn composite_buffers() {
        let mut a = SampleBuffer::from(vec![250u8, 0, 255]);
        let b = SampleBuffer::from(vec![20u8, 0, 255]);
        a.composite(CompositeOp::Add, &b, Direct).unwrap();
        assert_eq!(a.as_slice::<u8>().unwrap(), &[255, 0, 255]);

        let mut a = SampleBuffer::from(vec![0.0f64, 1.0]);
        a.composite_scalar(CompositeOp::Screen, 0.0f32, Direct);
        assert_eq!(a.as_slice::<f64>().unwrap(), &[0.0, 1.0]);
    }

    #[test]
    fn raw_bytes() {
        let buf = SampleBuffer::from(vec![1.0f32, 0.25]);
        let bytes = buf.to_ne_bytes();
        assert_eq!(bytes.len(), 8);
        assert_eq!(
            SampleBuffer::from_ne_bytes(SampleFormat::Float32, &bytes).unwrap(),
            buf
        );
        // Unaligned input is accepted.
        let mut shifted = vec![0u8];
        shifted.extend_from_slice(&bytes);
        assert_eq!(
            SampleBuffer::from_ne_bytes(SampleFormat::Float32, &shifted[1..]).unwrap(),
            buf
        );
        let err = SampleBuffer::from_ne_bytes(SampleFormat::Complex64, &[0; 20]).unwrap_err();
        assert_eq!(
            err,
            BufferError::MisalignedLength {
                len: 20,
                bytes_per_sample: 16
            }
        );
        assert!(format!("{err}").contains("16"));
    }
}
