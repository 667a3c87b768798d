//! Direct-arithmetic scalar conversions.
//!
//! These are the reference formulas. Lookup tables in [`crate::lut`] are
//! filled by calling exactly these functions, so a table hit and a direct
//! evaluation produce the same bits.

pub(crate) const U8_MAX: u32 = u8::MAX as u32;
pub(crate) const U16_MAX: u32 = u16::MAX as u32;
pub(crate) const U20_MAX: u32 = (1 << 20) - 1;
pub(crate) const U24_MAX: u32 = (1 << 24) - 1;
pub(crate) const U32_MAX: u32 = u32::MAX;

/// Rescale an unsigned integer between two ranges, rounding to nearest.
#[inline]
pub(crate) fn rescale(x: u32, from_max: u32, to_max: u32) -> u32 {
    if from_max == to_max {
        return x;
    }
    let v = x as f64 * to_max as f64 / from_max as f64;
    libm::round(v) as u32
}

#[inline]
pub(crate) fn u8_to_f32(x: u8) -> f32 {
    x as f32 / 255.0
}

#[inline]
pub(crate) fn u8_to_f64(x: u8) -> f64 {
    x as f64 / 255.0
}

#[inline]
pub(crate) fn u16_to_f32(x: u16) -> f32 {
    x as f32 / 65535.0
}

#[inline]
pub(crate) fn u16_to_f64(x: u16) -> f64 {
    x as f64 / 65535.0
}

#[inline]
pub(crate) fn u20_to_f32(x: u32) -> f32 {
    (x as f64 / U20_MAX as f64) as f32
}

#[inline]
pub(crate) fn u20_to_f64(x: u32) -> f64 {
    x as f64 / U20_MAX as f64
}

#[inline]
pub(crate) fn u24_to_f64(x: u32) -> f64 {
    x as f64 / U24_MAX as f64
}

#[inline]
pub(crate) fn u32_to_f32(x: u32) -> f32 {
    (x as f64 / U32_MAX as f64) as f32
}

#[inline]
pub(crate) fn u32_to_f64(x: u32) -> f64 {
    x as f64 / U32_MAX as f64
}

// Float -> unsigned integer. The plain variants do not clamp: out-of-range
// input goes through `i64` and is truncated to the target width, so it wraps
// instead of panicking. NaN maps to zero.

#[inline]
pub(crate) fn f32_to_u8(x: f32) -> u8 {
    libm::roundf(x * 255.0) as i64 as u8
}

#[inline]
pub(crate) fn f32_to_u16(x: f32) -> u16 {
    libm::roundf(x * 65535.0) as i64 as u16
}

#[inline]
pub(crate) fn f64_to_u8(x: f64) -> u8 {
    libm::round(x * 255.0) as i64 as u8
}

#[inline]
pub(crate) fn f64_to_u16(x: f64) -> u16 {
    libm::round(x * 65535.0) as i64 as u16
}

#[inline]
pub(crate) fn f64_to_u32(x: f64) -> u32 {
    libm::round(x * U32_MAX as f64) as i64 as u32
}

/// Float to an arbitrary unsigned range, always clamped. Used for intermediate
/// domains whose values index lookup tables.
#[inline]
pub(crate) fn f64_to_range_clamped(x: f64, max: u32) -> u32 {
    libm::round(clamp_unit_f64(x) * max as f64) as u32
}

#[inline]
pub(crate) fn clamp_unit_f32(x: f32) -> f32 {
    if x < 0.0 {
        0.0
    } else if x > 1.0 {
        1.0
    } else {
        x
    }
}

#[inline]
pub(crate) fn clamp_unit_f64(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else if x > 1.0 {
        1.0
    } else {
        x
    }
}
