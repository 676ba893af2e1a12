// Float printing for the response writer.
//
// Two strategies behind print_float: core::fmt precision formatting,
// or a digit-by-digit renderer that only needs integer printing and
// f64 add/mul (for targets where float formatting is too big or
// untrusted). NaN, infinities and negative zero print the same in
// both modes.
//
// Digit renderer, single pass:
//   nan/inf/ovf guards -> sign -> add 0.5/10^digits -> u32 integer part
//   -> '.' -> `digits` times: *10, truncate, print, subtract

use crate::config::{FloatMode, OVF_THRESHOLD};
use crate::sink::ResponseSink;
use crate::writer::ResponseWriter;

impl<S: ResponseSink> ResponseWriter<'_, S> {
    /// Print `value` with `digits` places after the decimal point,
    /// using the writer's configured [`FloatMode`].
    pub fn print_float(&mut self, value: f64, digits: u8) -> usize {
        match self.config().float_mode {
            FloatMode::Native => self.print_float_native(value, digits),
            FloatMode::Digits => self.print_float_digits(value, digits),
        }
    }

    #[inline]
    pub fn print_f32(&mut self, value: f32, digits: u8) -> usize {
        self.print_float(f64::from(value), digits)
    }

    fn print_float_native(&mut self, value: f64, digits: u8) -> usize {
        // core::fmt spells these "NaN" / "-inf"
        if value.is_nan() {
            return self.print_str("nan");
        }
        if value.is_infinite() {
            return self.print_str("inf");
        }
        // -0.0 -> 0.0, the digit renderer never emits a sign for it
        let value = if value == 0.0 { 0.0 } else { value };
        self.printf(format_args!("{:.*}", usize::from(digits), value))
    }

    fn print_float_digits(&mut self, value: f64, digits: u8) -> usize {
        if value.is_nan() {
            return self.print_str("nan");
        }
        if value.is_infinite() {
            return self.print_str("inf");
        }
        // past this the integer part no longer fits a u32
        if !(-OVF_THRESHOLD..=OVF_THRESHOLD).contains(&value) {
            return self.print_str("ovf");
        }

        let mut n = 0;
        let mut number = value;

        if number < 0.0 {
            n += self.print_char('-');
            number = -number;
        }

        // print_float(1.999, 2) -> "2.00"
        let mut rounding = 0.5;
        for _ in 0..digits {
            rounding /= 10.0;
        }
        number += rounding;

        let int_part = number as u32;
        let mut remainder = number - f64::from(int_part);
        n += self.print_u32(int_part);

        if digits > 0 {
            n += self.print_char('.');
        }

        for _ in 0..digits {
            remainder *= 10.0;
            let digit = remainder as i32;
            n += self.print_i32(digit);
            remainder -= f64::from(digit);
        }

        n
    }
}
