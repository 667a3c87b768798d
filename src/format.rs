//! Sample format tags and their stable names.

use core::fmt;
use core::str::FromStr;

/// Storage representation of one channel value of one pixel.
///
/// The names returned by [`name()`](SampleFormat::name) are written verbatim
/// into image metadata by format writers. They never change.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SampleFormat {
    /// 8-bit unsigned integer, `0..=255`.
    UInt8,
    /// 16-bit unsigned integer, `0..=65535`.
    UInt16,
    /// 32-bit unsigned integer, `0..=4294967295`.
    UInt32,
    /// IEEE-754 binary32, nominal range `[0, 1]`.
    Float32,
    /// IEEE-754 binary64, nominal range `[0, 1]`.
    Float64,
    /// Complex with binary32 components; magnitude is the intensity.
    Complex32,
    /// Complex with binary64 components; magnitude is the intensity.
    Complex64,
}

impl SampleFormat {
    /// Every storage format, narrowest integer first.
    pub const ALL: [SampleFormat; 7] = [
        SampleFormat::UInt8,
        SampleFormat::UInt16,
        SampleFormat::UInt32,
        SampleFormat::Float32,
        SampleFormat::Float64,
        SampleFormat::Complex32,
        SampleFormat::Complex64,
    ];

    /// Stable identifier used by serializers.
    pub const fn name(self) -> &'static str {
        match self {
            SampleFormat::UInt8 => "UInt8",
            SampleFormat::UInt16 => "UInt16",
            SampleFormat::UInt32 => "UInt32",
            SampleFormat::Float32 => "Float32",
            SampleFormat::Float64 => "Float64",
            SampleFormat::Complex32 => "Complex32",
            SampleFormat::Complex64 => "Complex64",
        }
    }

    /// Look up a format by its stable identifier (case-sensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Size of one stored sample in bytes.
    ///
    /// Complex formats count both components.
    pub const fn bytes_per_sample(self) -> usize {
        match self {
            SampleFormat::UInt8 => 1,
            SampleFormat::UInt16 => 2,
            SampleFormat::UInt32 | SampleFormat::Float32 => 4,
            SampleFormat::Float64 | SampleFormat::Complex32 => 8,
            SampleFormat::Complex64 => 16,
        }
    }

    /// Size of one stored sample in bits.
    pub const fn bits_per_sample(self) -> u32 {
        self.bytes_per_sample() as u32 * 8
    }

    /// Whether samples are real or complex floating point.
    pub const fn is_float(self) -> bool {
        !self.is_integer()
    }

    /// Whether samples are complex.
    pub const fn is_complex(self) -> bool {
        matches!(self, SampleFormat::Complex32 | SampleFormat::Complex64)
    }

    /// Whether samples are unsigned integers.
    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            SampleFormat::UInt8 | SampleFormat::UInt16 | SampleFormat::UInt32
        )
    }

    /// Whether arithmetic on this format runs in 64-bit floating point.
    ///
    /// `UInt32` needs binary64 to hold its full range without loss.
    pub const fn is_double_precision(self) -> bool {
        matches!(
            self,
            SampleFormat::UInt32 | SampleFormat::Float64 | SampleFormat::Complex64
        )
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SampleFormat {
    type Err = UnknownSampleFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or(UnknownSampleFormat)
    }
}

/// A sample format name did not match any [`SampleFormat`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownSampleFormat;

impl fmt::Display for UnknownSampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sample format name")
    }
}

impl core::error::Error for UnknownSampleFormat {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn names_are_stable() {
        let names: [&str; 7] = SampleFormat::ALL.map(|f| f.name());
        assert_eq!(
            names,
            [
                "UInt8",
                "UInt16",
                "UInt32",
                "Float32",
                "Float64",
                "Complex32",
                "Complex64"
            ]
        );
    }

    #[test]
    fn parse_roundtrip() {
        for format in SampleFormat::ALL {
            assert_eq!(format.name().parse::<SampleFormat>(), Ok(format));
            assert_eq!(format.to_string(), format.name());
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!("uint8".parse::<SampleFormat>(), Err(UnknownSampleFormat));
        assert_eq!("UInt20".parse::<SampleFormat>(), Err(UnknownSampleFormat));
        assert_eq!(SampleFormat::from_name(""), None);
    }

    #[test]
    fn sizes() {
        assert_eq!(SampleFormat::UInt8.bits_per_sample(), 8);
        assert_eq!(SampleFormat::UInt16.bits_per_sample(), 16);
        assert_eq!(SampleFormat::UInt32.bits_per_sample(), 32);
        assert_eq!(SampleFormat::Float32.bits_per_sample(), 32);
        assert_eq!(SampleFormat::Float64.bits_per_sample(), 64);
        assert_eq!(SampleFormat::Complex32.bytes_per_sample(), 8);
        assert_eq!(SampleFormat::Complex64.bytes_per_sample(), 16);
    }

    #[test]
    fn flags() {
        assert!(SampleFormat::UInt16.is_integer());
        assert!(!SampleFormat::UInt16.is_float());
        assert!(SampleFormat::Float32.is_float());
        assert!(!SampleFormat::Float32.is_complex());
        assert!(SampleFormat::Complex64.is_float());
        assert!(SampleFormat::Complex64.is_complex());
        assert!(SampleFormat::UInt32.is_double_precision());
        assert!(!SampleFormat::UInt16.is_double_precision());
    }
}
