// Build- and construction-time knobs for the response writer.
//
// MAX_CHUNK_SIZE is one protocol chunk (Contiki's REST default).
// FloatMode picks the float strategy; the `native-float` feature
// only changes the default, a writer can always override it.

/// Bytes in one response chunk.
pub const MAX_CHUNK_SIZE: usize = 64;

/// Backing storage for one chunk, owned by the caller.
pub type ChunkBuf = [u8; MAX_CHUNK_SIZE];

#[inline]
pub const fn new_chunk() -> ChunkBuf {
    [0u8; MAX_CHUNK_SIZE]
}

/// Largest magnitude the digit renderer converts; anything above
/// prints "ovf". Just under u32::MAX, the integer part it truncates to.
pub const OVF_THRESHOLD: f64 = 4_294_967_040.0;

pub const DEFAULT_FLOAT_DIGITS: u8 = 2;

/// How floats are turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatMode {
    /// `core::fmt` with `{:.N}` precision.
    Native,
    /// Integer-only digit-by-digit renderer, saturates at `OVF_THRESHOLD`.
    Digits,
}

impl FloatMode {
    pub const fn default_for_build() -> Self {
        if cfg!(feature = "native-float") {
            FloatMode::Native
        } else {
            FloatMode::Digits
        }
    }
}

impl Default for FloatMode {
    fn default() -> Self {
        Self::default_for_build()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterConfig {
    pub float_mode: FloatMode,
    /// Precision used by `print(f32)` / `print(f64)`.
    pub float_digits: u8,
}

impl WriterConfig {
    pub const fn new() -> Self {
        Self {
            float_mode: FloatMode::default_for_build(),
            float_digits: DEFAULT_FLOAT_DIGITS,
        }
    }

    pub const fn float_mode(mut self, mode: FloatMode) -> Self {
        self.float_mode = mode;
        self
    }

    pub const fn float_digits(mut self, digits: u8) -> Self {
        self.float_digits = digits;
        self
    }
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self::new()
    }
}
