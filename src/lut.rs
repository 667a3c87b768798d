//! Lookup-table acceleration for narrow integer conversions.
//!
//! [`ConversionPath`] is the seam every conversion goes through. [`Direct`]
//! evaluates the reference formulas on each call; `&ConversionTables`
//! answers from precomputed tables built once from those same formulas.
//! Both paths produce identical results.
//!
//! Table sizes per domain:
//! - 8-bit: 256 entries into six targets (about 6 KB)
//! - 16-bit: 65536 entries into six targets (about 1.5 MB)
//! - 20-bit: 1048576 entries into five targets (about 19 MB)

use alloc::boxed::Box;
use alloc::vec::Vec;

use once_cell::race::OnceBox;

use crate::scale::{self, U8_MAX, U16_MAX, U20_MAX, U24_MAX, U32_MAX};

/// Conversions between narrow integer domains and everything else.
///
/// Every method defaults to direct arithmetic. Implementors only override
/// the pairs they can answer faster. Intermediate 20/24-bit values travel as
/// `u32` and must already be within their domain.
pub trait ConversionPath: Copy {
    #[inline]
    fn u8_to_f32(self, x: u8) -> f32 {
        scale::u8_to_f32(x)
    }
    #[inline]
    fn u8_to_f64(self, x: u8) -> f64 {
        scale::u8_to_f64(x)
    }
    #[inline]
    fn u8_to_u16(self, x: u8) -> u16 {
        scale::rescale(x as u32, U8_MAX, U16_MAX) as u16
    }
    #[inline]
    fn u8_to_u20(self, x: u8) -> u32 {
        scale::rescale(x as u32, U8_MAX, U20_MAX)
    }
    #[inline]
    fn u8_to_u24(self, x: u8) -> u32 {
        scale::rescale(x as u32, U8_MAX, U24_MAX)
    }
    #[inline]
    fn u8_to_u32(self, x: u8) -> u32 {
        scale::rescale(x as u32, U8_MAX, U32_MAX)
    }

    #[inline]
    fn u16_to_f32(self, x: u16) -> f32 {
        scale::u16_to_f32(x)
    }
    #[inline]
    fn u16_to_f64(self, x: u16) -> f64 {
        scale::u16_to_f64(x)
    }
    #[inline]
    fn u16_to_u8(self, x: u16) -> u8 {
        scale::rescale(x as u32, U16_MAX, U8_MAX) as u8
    }
    #[inline]
    fn u16_to_u20(self, x: u16) -> u32 {
        scale::rescale(x as u32, U16_MAX, U20_MAX)
    }
    #[inline]
    fn u16_to_u24(self, x: u16) -> u32 {
        scale::rescale(x as u32, U16_MAX, U24_MAX)
    }
    #[inline]
    fn u16_to_u32(self, x: u16) -> u32 {
        scale::rescale(x as u32, U16_MAX, U32_MAX)
    }

    #[inline]
    fn u20_to_f32(self, x: u32) -> f32 {
        scale::u20_to_f32(x)
    }
    #[inline]
    fn u20_to_f64(self, x: u32) -> f64 {
        scale::u20_to_f64(x)
    }
    #[inline]
    fn u20_to_u8(self, x: u32) -> u8 {
        scale::rescale(x, U20_MAX, U8_MAX) as u8
    }
    #[inline]
    fn u20_to_u16(self, x: u32) -> u16 {
        scale::rescale(x, U20_MAX, U16_MAX) as u16
    }
    #[inline]
    fn u20_to_u32(self, x: u32) -> u32 {
        scale::rescale(x, U20_MAX, U32_MAX)
    }
}

/// Direct arithmetic on every call. Zero-sized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Direct;

impl ConversionPath for Direct {}

// ---------------------------------------------------------------------------
// LutConfig
// ---------------------------------------------------------------------------

/// Which integer domains get precomputed tables.
///
/// The 8-bit domain is always built. Domains left out fall back to direct
/// arithmetic with the same results.
///
/// # Example
///
/// ```
/// use zensample::{ConversionTables, LutConfig};
///
/// let tables = ConversionTables::new(LutConfig::minimal().with_16bit(true));
/// assert!(tables.config().has_16bit());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct LutConfig {
    /// Build the 65536-entry tables for 16-bit sources.
    pub depth16: bool,
    /// Build the 1048576-entry tables for 20-bit sources.
    pub depth20: bool,
}

impl LutConfig {
    /// 8-bit tables only.
    pub const fn minimal() -> Self {
        Self {
            depth16: false,
            depth20: false,
        }
    }

    /// 8, 16 and 20-bit tables.
    pub const fn full() -> Self {
        Self {
            depth16: true,
            depth20: true,
        }
    }

    /// Enable or disable the 16-bit tables.
    pub const fn with_16bit(mut self, enabled: bool) -> Self {
        self.depth16 = enabled;
        self
    }

    /// Enable or disable the 20-bit tables.
    pub const fn with_20bit(mut self, enabled: bool) -> Self {
        self.depth20 = enabled;
        self
    }

    /// Whether 16-bit tables are requested.
    pub const fn has_16bit(&self) -> bool {
        self.depth16
    }

    /// Whether 20-bit tables are requested.
    pub const fn has_20bit(&self) -> bool {
        self.depth20
    }

    /// Heap bytes the tables for this configuration occupy once built.
    pub const fn estimated_bytes(&self) -> usize {
        let mut total = FromU8::ENTRY_BYTES * FromU8::LEN;
        if self.depth16 {
            total += FromU16::ENTRY_BYTES * FromU16::LEN;
        }
        if self.depth20 {
            total += FromU20::ENTRY_BYTES * FromU20::LEN;
        }
        total
    }
}

impl Default for LutConfig {
    /// 8 and 16-bit tables. The 20-bit domain is opt-in.
    fn default() -> Self {
        Self::minimal().with_16bit(true)
    }
}

// ---------------------------------------------------------------------------
// Table sets
// ---------------------------------------------------------------------------

fn build<T>(len: usize, f: impl Fn(u32) -> T) -> Box<[T]> {
    (0..len as u32).map(f).collect::<Vec<T>>().into_boxed_slice()
}

struct FromU8 {
    f32: Box<[f32]>,
    f64: Box<[f64]>,
    u16: Box<[u16]>,
    u20: Box<[u32]>,
    u24: Box<[u32]>,
    u32: Box<[u32]>,
}

impl FromU8 {
    const LEN: usize = 1 << 8;
    const ENTRY_BYTES: usize = 4 + 8 + 2 + 4 + 4 + 4;

    fn new() -> Self {
        let d = Direct;
        Self {
            f32: build(Self::LEN, |x| d.u8_to_f32(x as u8)),
            f64: build(Self::LEN, |x| d.u8_to_f64(x as u8)),
            u16: build(Self::LEN, |x| d.u8_to_u16(x as u8)),
            u20: build(Self::LEN, |x| d.u8_to_u20(x as u8)),
            u24: build(Self::LEN, |x| d.u8_to_u24(x as u8)),
            u32: build(Self::LEN, |x| d.u8_to_u32(x as u8)),
        }
    }
}

struct FromU16 {
    f32: Box<[f32]>,
    f64: Box<[f64]>,
    u8: Box<[u8]>,
    u20: Box<[u32]>,
    u24: Box<[u32]>,
    u32: Box<[u32]>,
}

impl FromU16 {
    const LEN: usize = 1 << 16;
    const ENTRY_BYTES: usize = 4 + 8 + 1 + 4 + 4 + 4;

    fn new() -> Self {
        let d = Direct;
        Self {
            f32: build(Self::LEN, |x| d.u16_to_f32(x as u16)),
            f64: build(Self::LEN, |x| d.u16_to_f64(x as u16)),
            u8: build(Self::LEN, |x| d.u16_to_u8(x as u16)),
            u20: build(Self::LEN, |x| d.u16_to_u20(x as u16)),
            u24: build(Self::LEN, |x| d.u16_to_u24(x as u16)),
            u32: build(Self::LEN, |x| d.u16_to_u32(x as u16)),
        }
    }
}

struct FromU20 {
    f32: Box<[f32]>,
    f64: Box<[f64]>,
    u8: Box<[u8]>,
    u16: Box<[u16]>,
    u32: Box<[u32]>,
}

impl FromU20 {
    const LEN: usize = 1 << 20;
    const ENTRY_BYTES: usize = 4 + 8 + 1 + 2 + 4;

    fn new() -> Self {
        let d = Direct;
        Self {
            f32: build(Self::LEN, |x| d.u20_to_f32(x)),
            f64: build(Self::LEN, |x| d.u20_to_f64(x)),
            u8: build(Self::LEN, |x| d.u20_to_u8(x)),
            u16: build(Self::LEN, |x| d.u20_to_u16(x)),
            u32: build(Self::LEN, |x| d.u20_to_u32(x)),
        }
    }
}

// ---------------------------------------------------------------------------
// ConversionTables
// ---------------------------------------------------------------------------

/// Immutable precomputed conversion tables.
///
/// Build once, then share by reference; `&ConversionTables` implements
/// [`ConversionPath`]. Readers never synchronize.
pub struct ConversionTables {
    config: LutConfig,
    from_u8: FromU8,
    from_u16: Option<Box<FromU16>>,
    from_u20: Option<Box<FromU20>>,
}

static GLOBAL: OnceBox<ConversionTables> = OnceBox::new();

impl ConversionTables {
    /// Build the tables selected by `config`.
    pub fn new(config: LutConfig) -> Self {
        let tables = Self {
            config,
            from_u8: FromU8::new(),
            from_u16: config.depth16.then(|| Box::new(FromU16::new())),
            from_u20: config.depth20.then(|| Box::new(FromU20::new())),
        };
        log::debug!(
            "built sample conversion tables (16-bit: {}, 20-bit: {}, {} bytes)",
            config.depth16,
            config.depth20,
            tables.memory_bytes()
        );
        tables
    }

    /// Process-wide tables, built with [`LutConfig::default()`] on first use.
    pub fn global() -> &'static ConversionTables {
        Self::init_global(LutConfig::default())
    }

    /// Build the process-wide tables with `config` unless they already exist.
    ///
    /// Returns the instance that is published. If another thread (or an
    /// earlier call) got there first, its tables are returned and `config`
    /// is ignored. Concurrent first calls may each build a candidate; only
    /// one is kept.
    pub fn init_global(config: LutConfig) -> &'static ConversionTables {
        GLOBAL.get_or_init(|| {
            log::trace!("initializing global sample conversion tables");
            Box::new(ConversionTables::new(config))
        })
    }

    /// The process-wide tables if they have been built.
    pub fn try_global() -> Option<&'static ConversionTables> {
        GLOBAL.get()
    }

    /// Configuration these tables were built with.
    pub fn config(&self) -> LutConfig {
        self.config
    }

    /// Heap bytes held by the tables.
    pub fn memory_bytes(&self) -> usize {
        self.config.estimated_bytes()
    }
}

impl core::fmt::Debug for ConversionTables {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConversionTables")
            .field("config", &self.config)
            .field("memory_bytes", &self.memory_bytes())
            .finish()
    }
}

impl ConversionPath for &ConversionTables {
    #[inline]
    fn u8_to_f32(self, x: u8) -> f32 {
        self.from_u8.f32[x as usize]
    }
    #[inline]
    fn u8_to_f64(self, x: u8) -> f64 {
        self.from_u8.f64[x as usize]
    }
    #[inline]
    fn u8_to_u16(self, x: u8) -> u16 {
        self.from_u8.u16[x as usize]
    }
    #[inline]
    fn u8_to_u20(self, x: u8) -> u32 {
        self.from_u8.u20[x as usize]
    }
    #[inline]
    fn u8_to_u24(self, x: u8) -> u32 {
        self.from_u8.u24[x as usize]
    }
    #[inline]
    fn u8_to_u32(self, x: u8) -> u32 {
        self.from_u8.u32[x as usize]
    }

    #[inline]
    fn u16_to_f32(self, x: u16) -> f32 {
        match &self.from_u16 {
            Some(t) => t.f32[x as usize],
            None => Direct.u16_to_f32(x),
        }
    }
    #[inline]
    fn u16_to_f64(self, x: u16) -> f64 {
        match &self.from_u16 {
            Some(t) => t.f64[x as usize],
            None => Direct.u16_to_f64(x),
        }
    }
    #[inline]
    fn u16_to_u8(self, x: u16) -> u8 {
        match &self.from_u16 {
            Some(t) => t.u8[x as usize],
            None => Direct.u16_to_u8(x),
        }
    }
    #[inline]
    fn u16_to_u20(self, x: u16) -> u32 {
        match &self.from_u16 {
            Some(t) => t.u20[x as usize],
            None => Direct.u16_to_u20(x),
        }
    }
    #[inline]
    fn u16_to_u24(self, x: u16) -> u32 {
        match &self.from_u16 {
            Some(t) => t.u24[x as usize],
            None => Direct.u16_to_u24(x),
        }
    }
    #[inline]
    fn u16_to_u32(self, x: u16) -> u32 {
        match &self.from_u16 {
            Some(t) => t.u32[x as usize],
            None => Direct.u16_to_u32(x),
        }
    }

    #[inline]
    fn u20_to_f32(self, x: u32) -> f32 {
        debug_assert!(x <= U20_MAX, "20-bit value {x} out of range");
        match self.from_u20.as_ref().and_then(|t| t.f32.get(x as usize)) {
            Some(&v) => v,
            None => Direct.u20_to_f32(x),
        }
    }
    #[inline]
    fn u20_to_f64(self, x: u32) -> f64 {
        debug_assert!(x <= U20_MAX, "20-bit value {x} out of range");
        match self.from_u20.as_ref().and_then(|t| t.f64.get(x as usize)) {
            Some(&v) => v,
            None => Direct.u20_to_f64(x),
        }
    }
    #[inline]
    fn u20_to_u8(self, x: u32) -> u8 {
        debug_assert!(x <= U20_MAX, "20-bit value {x} out of range");
        match self.from_u20.as_ref().and_then(|t| t.u8.get(x as usize)) {
            Some(&v) => v,
            None => Direct.u20_to_u8(x),
        }
    }
    #[inline]
    fn u20_to_u16(self, x: u32) -> u16 {
        debug_assert!(x <= U20_MAX, "20-bit value {x} out of range");
        match self.from_u20.as_ref().and_then(|t| t.u16.get(x as usize)) {
            Some(&v) => v,
            None => Direct.u20_to_u16(x),
        }
    }
    #[inline]
    fn u20_to_u32(self, x: u32) -> u32 {
        debug_assert!(x <= U20_MAX, "20-bit value {x} out of range");
        match self.from_u20.as_ref().and_then(|t| t.u32.get(x as usize)) {
            Some(&v) => v,
            None => Direct.u20_to_u32(x),
        }
    }
}
