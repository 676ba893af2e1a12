// No-alloc, clamped formatting into a byte slice.
// clamp_copy is the single copy primitive every write goes through.
// ClampFmt wraps the free tail of a chunk; it silently truncates
// on overflow and remembers that it did.

use core::fmt;

/// Copy as much of `src` into `dst[pos..]` as fits; returns bytes copied.
#[inline]
pub fn clamp_copy(dst: &mut [u8], pos: usize, src: &[u8]) -> usize {
    let Some(tail) = dst.get_mut(pos..) else {
        return 0;
    };
    let n = src.len().min(tail.len());
    tail[..n].copy_from_slice(&src[..n]);
    n
}

pub struct ClampFmt<'a> {
    buf: &'a mut [u8],
    pos: usize,
    truncated: bool,
}

impl<'a> ClampFmt<'a> {
    #[inline]
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            truncated: false,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos == 0
    }

    /// True once any output was dropped for lack of room.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.pos]
    }
}

impl fmt::Write for ClampFmt<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        let n = clamp_copy(self.buf, self.pos, bytes);
        self.pos += n;
        if n < bytes.len() {
            self.truncated = true;
        }
        Ok(())
    }
}

/// Result of rendering into a bounded region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatted {
    pub written: usize,
    pub truncated: bool,
}

// format into a borrowed slice; bytes past the end are dropped
pub fn format_into(buf: &mut [u8], args: fmt::Arguments<'_>) -> Formatted {
    let mut w = ClampFmt::new(buf);
    // a Display impl erroring out just ends the output early
    let _ = fmt::write(&mut w, args);
    Formatted {
        written: w.len(),
        truncated: w.is_truncated(),
    }
}

/// `printf`-style formatting into a [`ResponseWriter`](crate::ResponseWriter).
///
/// Expands to `writer.printf(format_args!(...))` and returns the number
/// of bytes that fit.
#[macro_export]
macro_rules! rest_printf {
    ($writer:expr, $($arg:tt)*) => {
        $writer.printf(::core::format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;

    #[test]
    fn clamp_copy_bounds() {
        let mut buf = [0u8; 4];
        assert_eq!(clamp_copy(&mut buf, 0, b"ab"), 2);
        assert_eq!(clamp_copy(&mut buf, 2, b"cdef"), 2);
        assert_eq!(&buf, b"abcd");
        assert_eq!(clamp_copy(&mut buf, 4, b"x"), 0);
        // pos past the end copies nothing instead of panicking
        assert_eq!(clamp_copy(&mut buf, 9, b"x"), 0);
        assert_eq!(clamp_copy(&mut buf, 5, b""), 0);
        assert_eq!(&buf, b"abcd");
    }

    #[test]
    fn clamp_fmt_truncates_silently() {
        let mut buf = [0u8; 6];
        let mut w = ClampFmt::new(&mut buf);
        assert!(write!(w, "{}-{}", 1234, 5678).is_ok());
        assert_eq!(w.as_bytes(), b"1234-5");
        assert!(w.is_truncated());
    }

    #[test]
    fn format_into_reports_fit() {
        let mut buf = [0u8; 16];
        let out = format_into(&mut buf, format_args!("t={:>4}", 21));
        assert_eq!(
            out,
            Formatted {
                written: 6,
                truncated: false
            }
        );
        assert_eq!(&buf[..6], b"t=  21");
    }

    #[test]
    fn format_into_empty_region() {
        let mut buf = [0u8; 0];
        let out = format_into(&mut buf, format_args!("{}", "x"));
        assert_eq!(out.written, 0);
        assert!(out.truncated);
    }
}
