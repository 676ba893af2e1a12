// Overloaded print: one generic entry point for the typed print_* calls.

use crate::sink::ResponseSink;
use crate::writer::ResponseWriter;

/// A value [`ResponseWriter::print`] knows how to render.
pub trait Printable {
    /// Render into `w`; returns the bytes that fit.
    fn print_to<S: ResponseSink>(self, w: &mut ResponseWriter<'_, S>) -> usize;
}

macro_rules! printable_via {
    ($method:ident as $wide:ty: $($t:ty),+) => {
        $(
            impl Printable for $t {
                #[inline]
                fn print_to<S: ResponseSink>(self, w: &mut ResponseWriter<'_, S>) -> usize {
                    w.$method(<$wide>::from(self))
                }
            }
        )+
    };
}

printable_via!(print_i32 as i32: i8, i16, i32);
printable_via!(print_u32 as u32: u8, u16, u32);
printable_via!(print_i64 as i64: i64);
printable_via!(print_u64 as u64: u64);

impl Printable for isize {
    #[inline]
    fn print_to<S: ResponseSink>(self, w: &mut ResponseWriter<'_, S>) -> usize {
        w.printf(format_args!("{}", self))
    }
}

impl Printable for usize {
    #[inline]
    fn print_to<S: ResponseSink>(self, w: &mut ResponseWriter<'_, S>) -> usize {
        w.printf(format_args!("{}", self))
    }
}

impl Printable for char {
    #[inline]
    fn print_to<S: ResponseSink>(self, w: &mut ResponseWriter<'_, S>) -> usize {
        w.print_char(self)
    }
}

impl Printable for &str {
    #[inline]
    fn print_to<S: ResponseSink>(self, w: &mut ResponseWriter<'_, S>) -> usize {
        w.print_str(self)
    }
}

impl Printable for bool {
    #[inline]
    fn print_to<S: ResponseSink>(self, w: &mut ResponseWriter<'_, S>) -> usize {
        w.print_str(if self { "true" } else { "false" })
    }
}

// floats use the writer's default precision
impl Printable for f64 {
    #[inline]
    fn print_to<S: ResponseSink>(self, w: &mut ResponseWriter<'_, S>) -> usize {
        let digits = w.config().float_digits;
        w.print_float(self, digits)
    }
}

impl Printable for f32 {
    #[inline]
    fn print_to<S: ResponseSink>(self, w: &mut ResponseWriter<'_, S>) -> usize {
        let digits = w.config().float_digits;
        w.print_f32(self, digits)
    }
}
