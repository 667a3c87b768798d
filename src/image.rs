//! Whole-image conversion over `imgref` containers.
//!
//! Source images may be strided sub-views; results are tightly packed.
//! Works for single-channel sample grids and for any [`PixelSamples`] pixel.

use alloc::vec::Vec;

use enough::{Stop, StopReason};
use imgref::{ImgRef, ImgRefMut, ImgVec};

use crate::lut::ConversionPath;
use crate::pixel::PixelSamples;
use crate::sample::Sample;

/// Convert every pixel of `src` to channel representation `D`.
///
/// ```
/// use zensample::{Direct, ImgVec, Rgb};
///
/// let src = ImgVec::new(vec![Rgb { r: 0u8, g: 128, b: 255 }; 4], 2, 2);
/// let out = zensample::image::convert_image::<_, f32, _>(src.as_ref(), Direct);
/// assert_eq!(out.buf()[0].b, 1.0);
/// ```
pub fn convert_image<S, D, P>(src: ImgRef<'_, S>, path: P) -> ImgVec<S::Converted<D>>
where
    S: PixelSamples,
    D: Sample,
    P: ConversionPath,
{
    let mut out = Vec::with_capacity(src.width() * src.height());
    for row in src.rows() {
        out.extend(row.iter().map(|&px| px.convert_pixel::<D, P>(path)));
    }
    ImgVec::new(out, src.width(), src.height())
}

/// Like [`convert_image`], clamping float input to `[0, 1]` first.
pub fn convert_image_constrained<S, D, P>(src: ImgRef<'_, S>, path: P) -> ImgVec<S::Converted<D>>
where
    S: PixelSamples,
    D: Sample,
    P: ConversionPath,
{
    let mut out = Vec::with_capacity(src.width() * src.height());
    for row in src.rows() {
        out.extend(
            row.iter()
                .map(|&px| px.convert_pixel_constrained::<D, P>(path)),
        );
    }
    ImgVec::new(out, src.width(), src.height())
}

/// Convert `src` into the existing image `dst`.
///
/// Both images must have the same dimensions (checked in debug builds);
/// either may be strided.
pub fn convert_image_into<S, D, P>(
    src: ImgRef<'_, S>,
    mut dst: ImgRefMut<'_, S::Converted<D>>,
    path: P,
) where
    S: PixelSamples,
    D: Sample,
    P: ConversionPath,
{
    debug_assert_eq!(src.width(), dst.width());
    debug_assert_eq!(src.height(), dst.height());
    for (src_row, dst_row) in src.rows().zip(dst.rows_mut()) {
        for (d, &s) in dst_row.iter_mut().zip(src_row) {
            *d = s.convert_pixel::<D, P>(path);
        }
    }
}

/// Like [`convert_image`], checking `stop` before each row.
pub fn convert_image_stoppable<S, D, P>(
    src: ImgRef<'_, S>,
    path: P,
    stop: &dyn Stop,
) -> Result<ImgVec<S::Converted<D>>, StopReason>
where
    S: PixelSamples,
    D: Sample,
    P: ConversionPath,
{
    let mut out = Vec::with_capacity(src.width() * src.height());
    for row in src.rows() {
        stop.check()?;
        out.extend(row.iter().map(|&px| px.convert_pixel::<D, P>(path)));
    }
    Ok(ImgVec::new(out, src.width(), src.height()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lut::{ConversionTables, Direct};
    use alloc::vec;
    use core::sync::atomic::{AtomicUsize, Ordering};
    use imgref::Img;
    use rgb::{Gray, Rgba};

    struct StopAfter {
        rows: usize,
        seen: AtomicUsize,
    }

    impl Stop for StopAfter {
        fn check(&self) -> Result<(), StopReason> {
            if self.seen.fetch_add(1, Ordering::Relaxed) >= self.rows {
                Err(StopReason::Cancelled)
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn strided_source_is_packed() {
        // 3x2 view into rows of stride 4; the padding column holds 99.
        let buf = vec![0u8, 128, 255, 99, 255, 128, 0, 99];
        let src = Img::new_stride(buf.as_slice(), 3, 2, 4);
        let out = convert_image::<_, f32, _>(src, Direct);
        assert_eq!(out.width(), 3);
        assert_eq!(out.height(), 2);
        assert_eq!(out.buf().len(), 6);
        assert_eq!(out.buf()[0], 0.0);
        assert_eq!(out.buf()[2], 1.0);
        assert_eq!(out.buf()[3], 1.0);
        let back = convert_image::<_, u8, _>(out.as_ref(), Direct);
        assert_eq!(back.buf().as_slice(), &[0, 128, 255, 255, 128, 0]);
    }

    #[test]
    fn pixels_with_alpha() {
        let px = Rgba {
            r: 0u16,
            g: 0,
            b: u16::MAX,
            a: u16::MAX,
        };
        let src = ImgVec::new(vec![px; 6], 3, 2);
        let out = convert_image::<_, f64, _>(src.as_ref(), ConversionTables::global());
        assert!(out.pixels().all(|p| p.b == 1.0 && p.a == 1.0 && p.r == 0.0));
    }

    #[test]
    fn constrained_image_conversion() {
        let src = ImgVec::new(vec![Gray::new(1.5f32), Gray::new(-0.5)], 2, 1);
        let out = convert_image_constrained::<_, u8, _>(src.as_ref(), Direct);
        assert_eq!(out.buf()[0].value(), 255);
        assert_eq!(out.buf()[1].value(), 0);
    }

    #[test]
    fn into_existing_image() {
        let src = ImgVec::new(vec![1.0f64; 4], 2, 2);
        let mut storage = vec![7u16; 6];
        let dst = Img::new_stride(storage.as_mut_slice(), 2, 2, 3);
        convert_image_into::<_, u16, _>(src.as_ref(), dst, Direct);
        assert_eq!(storage, [u16::MAX, u16::MAX, 7, u16::MAX, u16::MAX, 7]);
    }

    #[test]
    fn stoppable_runs_to_completion() {
        let src = ImgVec::new(vec![128u8; 12], 4, 3);
        let out = convert_image_stoppable::<_, u16, _>(src.as_ref(), Direct, &enough::Unstoppable)
            .unwrap();
        assert!(out.pixels().all(|p| p == 128 * 257));
    }

    #[test]
    fn stoppable_cancels_between_rows() {
        let src = ImgVec::new(vec![0u8; 12], 4, 3);
        let stop = StopAfter {
            rows: 2,
            seen: AtomicUsize::new(0),
        };
        let result = convert_image_stoppable::<_, f32, _>(src.as_ref(), Direct, &stop);
        assert_eq!(result.unwrap_err(), StopReason::Cancelled);
        assert_eq!(stop.seen.load(Ordering::Relaxed), 3);
    }
}
