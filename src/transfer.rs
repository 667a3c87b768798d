//! Buffer transfer and reduction.
//!
//! Each function is one generic loop instantiated per pair of
//! representations. Same-representation transfers take a bulk copy; the
//! result is identical to the elementwise path, which is the identity there.
//!
//! Slices must have equal lengths. This is checked in debug builds only;
//! in release builds the shorter length wins.

use core::any::TypeId;

use crate::lut::ConversionPath;
use crate::sample::{Sample, SampleValue};

#[inline]
fn same_type<A: 'static, B: 'static>() -> bool {
    TypeId::of::<A>() == TypeId::of::<B>()
}

/// Set every element of `dst` to `value` converted to `D`.
pub fn fill<D: Sample, S: SampleValue, P: ConversionPath>(dst: &mut [D], value: S, path: P) {
    let v: D = value.to_sample(path);
    dst.fill(v);
}

/// Like [`fill`], clamping float `value` to `[0, 1]` first.
pub fn fill_constrained<D: Sample, S: SampleValue, P: ConversionPath>(
    dst: &mut [D],
    value: S,
    path: P,
) {
    let v: D = value.to_sample_constrained(path);
    dst.fill(v);
}

/// Convert `src` elementwise into the storage slice `dst`.
pub fn copy<D: Sample, S: SampleValue, P: ConversionPath>(dst: &mut [D], src: &[S], path: P) {
    debug_assert_eq!(dst.len(), src.len());
    if same_type::<D, S>() {
        let n = dst.len().min(src.len());
        dst[..n].copy_from_slice(bytemuck::cast_slice(&src[..n]));
        return;
    }
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = s.to_sample(path);
    }
}

/// Like [`copy`], clamping float input to `[0, 1]` before integer scaling.
pub fn copy_constrained<D: Sample, S: SampleValue, P: ConversionPath>(
    dst: &mut [D],
    src: &[S],
    path: P,
) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = s.to_sample_constrained(path);
    }
}

/// Convert the storage slice `src` elementwise into the foreign slice `dst`.
pub fn get<D: SampleValue, S: Sample, P: ConversionPath>(dst: &mut [D], src: &[S], path: P) {
    debug_assert_eq!(dst.len(), src.len());
    if same_type::<D, S>() {
        let n = dst.len().min(src.len());
        dst[..n].copy_from_slice(bytemuck::cast_slice(&src[..n]));
        return;
    }
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = D::from_sample(s, path);
    }
}

/// `dst[i] = min(dst[i], src[i])`, comparing in the representation of `dst`.
pub fn copy_min<D: Sample, S: SampleValue, P: ConversionPath>(dst: &mut [D], src: &[S], path: P) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, &s) in dst.iter_mut().zip(src) {
        let v: D = s.to_sample(path);
        if v.precedes(*d) {
            *d = v;
        }
    }
}

/// `dst[i] = max(dst[i], src[i])`, comparing in the representation of `dst`.
pub fn copy_max<D: Sample, S: SampleValue, P: ConversionPath>(dst: &mut [D], src: &[S], path: P) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, &s) in dst.iter_mut().zip(src) {
        let v: D = s.to_sample(path);
        if d.precedes(v) {
            *d = v;
        }
    }
}

/// Foreign-side minimum: `dst[i] = min(dst[i], src[i])` in the representation
/// of `dst`.
pub fn get_min<D: SampleValue, S: Sample, P: ConversionPath>(dst: &mut [D], src: &[S], path: P) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, &s) in dst.iter_mut().zip(src) {
        let v = D::from_sample(s, path);
        if v.precedes(*d) {
            *d = v;
        }
    }
}

/// Foreign-side maximum.
pub fn get_max<D: SampleValue, S: Sample, P: ConversionPath>(dst: &mut [D], src: &[S], path: P) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, &s) in dst.iter_mut().zip(src) {
        let v = D::from_sample(s, path);
        if d.precedes(v) {
            *d = v;
        }
    }
}
