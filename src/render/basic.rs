use core::cmp::Ordering;

use super::Backend;
use crate::export;

/// Enough 32-bit limbs for the 1074 fractional bits of the smallest subnormal `f64`
const LIMBS: usize = 34;

/// Renders with a few digit loops and no `core::fmt`, for builds where every byte of flash counts
pub(crate) struct Basic;

impl Basic {
    fn digits64(mut v: u64, radix: u64) {
        // u64::MAX has 20 decimal digits; 16 hex digits
        let mut buf = [0u8; 20];
        let mut i = buf.len();
        loop {
            i -= 1;
            buf[i] = digit((v % radix) as u8);
            v /= radix;
            if v == 0 {
                break;
            }
        }
        export::write(&buf[i..]);
    }

    fn digits128(mut v: u128) {
        if let Ok(small) = u64::try_from(v) {
            return Self::digits64(small, 10);
        }

        // u128::MAX has 39 decimal digits
        let mut buf = [0u8; 39];
        let mut i = buf.len();
        while v != 0 {
            i -= 1;
            buf[i] = digit((v % 10) as u8);
            v /= 10;
        }
        export::write(&buf[i..]);
    }
}

fn digit(d: u8) -> u8 {
    if d < 10 {
        b'0' + d
    } else {
        b'a' + (d - 10)
    }
}

impl Backend for Basic {
    #[inline]
    fn str(s: &str) {
        export::write(s.as_bytes());
    }

    fn u64(v: u64) {
        Self::digits64(v, 10);
    }

    fn i64(v: i64) {
        if v < 0 {
            export::write(b"-");
        }
        Self::digits64(v.unsigned_abs(), 10);
    }

    fn u128(v: u128) {
        Self::digits128(v);
    }

    fn i128(v: i128) {
        if v < 0 {
            export::write(b"-");
        }
        Self::digits128(v.unsigned_abs());
    }

    fn f64(v: f64, digits: u8) {
        // spelled like `core::fmt` spells them
        if v.is_nan() {
            return export::write(b"NaN");
        }
        if v.is_sign_negative() {
            export::write(b"-");
        }
        if v.is_infinite() {
            return export::write(b"inf");
        }

        // |v| == mantissa * 2^exponent, exactly
        let bits = v.to_bits();
        let biased = ((bits >> 52) & 0x7ff) as i32;
        let field = bits & ((1 << 52) - 1);
        let (mantissa, exponent) = if biased == 0 {
            (field, -1074)
        } else {
            (field | 1 << 52, biased - 1075)
        };

        let digits = usize::from(digits);
        let mut buf = [0u8; u8::MAX as usize];
        let mut integer;
        let mut round_up = false;

        if exponent >= 0 {
            // a normal mantissa has 53 significant bits
            if exponent > 128 - 53 {
                return export::write(b"ovf");
            }
            integer = u128::from(mantissa) << exponent;
        } else {
            let shift = exponent.unsigned_abs();
            integer = if shift < 64 {
                u128::from(mantissa >> shift)
            } else {
                0
            };

            let mut fraction = Fraction::new(mantissa, shift);
            for d in &mut buf[..digits] {
                *d = fraction.next_digit();
            }

            // round half to even, like `core::fmt`
            let last_is_odd = match digits.checked_sub(1) {
                Some(last) => buf[last] % 2 == 1,
                None => integer % 2 == 1,
            };
            round_up = match fraction.cmp_half() {
                Ordering::Greater => true,
                Ordering::Equal => last_is_odd,
                Ordering::Less => false,
            };
        }

        if round_up {
            let mut carry = true;
            for d in buf[..digits].iter_mut().rev() {
                if *d == 9 {
                    *d = 0;
                } else {
                    *d += 1;
                    carry = false;
                    break;
                }
            }
            if carry {
                integer += 1;
            }
        }

        Self::digits128(integer);
        if digits == 0 {
            return;
        }
        export::write(b".");
        for d in &mut buf[..digits] {
            *d = digit(*d);
        }
        export::write(&buf[..digits]);
    }

    fn address(addr: usize) {
        export::write(b"0x");
        Self::digits64(addr as u64, 16);
    }
}

/// Fractional part of `mantissa * 2^-shift` as a fixed-point number in base 2^32
///
/// Little-endian limbs; the binary point sits above `limbs[len - 1]`.
struct Fraction {
    limbs: [u32; LIMBS],
    len: usize,
}

impl Fraction {
    fn new(mantissa: u64, shift: u32) -> Self {
        let len = (shift as usize).div_ceil(32);
        let align = len as u32 * 32 - shift;
        let mask = if shift >= 64 {
            u64::MAX
        } else {
            (1 << shift) - 1
        };

        let mut value = u128::from(mantissa & mask) << align;
        let mut limbs = [0; LIMBS];
        for limb in limbs.iter_mut().take(len) {
            *limb = value as u32;
            value >>= 32;
        }
        Self { limbs, len }
    }

    /// Multiplies by ten and returns the digit that moved past the binary point
    fn next_digit(&mut self) -> u8 {
        let mut carry = 0u64;
        for limb in &mut self.limbs[..self.len] {
            let product = u64::from(*limb) * 10 + carry;
            *limb = product as u32;
            carry = product >> 32;
        }
        carry as u8
    }

    fn cmp_half(&self) -> Ordering {
        let Some((top, rest)) = self.limbs[..self.len].split_last() else {
            return Ordering::Less;
        };
        match top.cmp(&0x8000_0000) {
            Ordering::Equal if rest.iter().any(|limb| *limb != 0) => Ordering::Greater,
            ordering => ordering,
        }
    }
}
