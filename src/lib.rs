//! Sample representations and conversions for image processing.
//!
//! This crate defines the numeric layer image code is built on:
//!
//! - [`Sample`] / [`SampleValue`]: storage representations (UInt8, UInt16,
//!   UInt32, Float32, Float64, Complex32, Complex64) and every foreign value
//!   that converts into them, with compile-time double dispatch
//! - [`SampleFormat`]: runtime tag with stable, persisted names
//! - [`ConversionPath`]: [`Direct`] arithmetic or [`ConversionTables`]
//!   lookup tables, passed explicitly to every conversion
//! - [`transfer`]: fill, copy, get and min/max accumulation over slices
//! - [`CompositeOp`]: arithmetic, bitwise and photographic blend operators
//! - [`SampleBuffer`]: runtime-tagged owned buffers
//! - [`PixelSamples`] and [`image`]: channel-wise conversion of `rgb`
//!   pixels and `imgref` images
//!
//! Float samples are normalized to `[0, 1]`. Integer samples span
//! `[0, 2^bits - 1]`. Complex samples are treated as their magnitude
//! whenever a real intensity is needed.
//!
//! ```
//! use zensample::{convert, ConversionTables, SampleValue};
//!
//! let x: f32 = convert(128u8);
//! assert!((x - 0.50196).abs() < 1e-5);
//!
//! let tables = ConversionTables::global();
//! let y: f32 = 128u8.to_sample(tables);
//! assert_eq!(x, y);
//! ```

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

mod buffer;
pub mod composite;
mod format;
pub mod image;
mod intermediate;
mod lut;
mod pixel;
mod real;
mod sample;
mod scale;
pub mod transfer;

pub use buffer::{BufferError, SampleBuffer};
pub use composite::CompositeOp;
pub use format::{SampleFormat, UnknownSampleFormat};
pub use intermediate::{U20, U24};
pub use lut::{ConversionPath, ConversionTables, Direct, LutConfig};
pub use pixel::PixelSamples;
pub use real::Real;
pub use sample::{Sample, SampleValue, convert, convert_constrained};

// Re-exports for users.
pub use enough::{Stop, StopReason, Unstoppable};
pub use imgref::{Img, ImgRef, ImgRefMut, ImgVec};
pub use num_complex::{Complex32, Complex64};
pub use rgb;
pub use rgb::{Gray, Rgb, Rgba};
