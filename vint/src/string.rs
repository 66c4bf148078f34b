//! Text and byte conversions.

use crate::{Error, LIMB_BITS, Limb, Result, Vint, limb};
use alloc::{string::String, vec, vec::Vec};
use core::{fmt, str::FromStr};

/// Largest power of `radix` that fits in a limb, with its exponent.
fn chunk_base(radix: u32) -> (Limb, usize) {
    let radix = radix as Limb;
    let mut base = radix;
    let mut digits = 1;
    while let Some(next) = base.checked_mul(radix) {
        base = next;
        digits += 1;
    }
    (base, digits)
}

impl Vint {
    /// Parses digits of the given radix with an optional leading `-`.
    ///
    /// No prefix is accepted; see [`FromStr`] for prefix detection.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Vint> {
        if !(2..=36).contains(&radix) {
            return Err(Error::UnsupportedRadix);
        }
        let (neg, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if digits.is_empty() {
            return Err(Error::EmptyString);
        }

        let (_, per_chunk) = chunk_base(radix);
        let bytes = digits.as_bytes();
        let mut mag: Vec<Limb> = vec![0];
        let head = bytes.len() % per_chunk;
        let mut pos = 0;
        let mut take = if head == 0 { per_chunk } else { head };
        while pos < bytes.len() {
            let chunk = &bytes[pos..pos + take];
            let mut value: Limb = 0;
            for &c in chunk {
                let d = (c as char).to_digit(radix).ok_or(Error::InvalidDigit)?;
                value = value * radix as Limb + d as Limb;
            }
            let scale = (radix as Limb).pow(take as u32);
            mul_add_limb(&mut mag, scale, value);
            pos += take;
            take = per_chunk;
        }
        Ok(Vint::from_parts(mag, neg))
    }

    /// Formats the value in the given radix, lowercase, without prefix.
    pub fn to_str_radix(&self, radix: u32) -> Result<String> {
        if !(2..=36).contains(&radix) {
            return Err(Error::UnsupportedRadix);
        }
        let mut s = String::new();
        if self.is_negative() {
            s.push('-');
        }
        s.push_str(&magnitude_digits(self.limbs(), radix));
        Ok(s)
    }

    /// Non-negative value from big-endian bytes.
    pub fn from_be_bytes(bytes: &[u8]) -> Vint {
        let mag = bytes
            .rchunks(LIMB_BITS / 8)
            .map(|chunk| chunk.iter().fold(0, |acc, &b| (acc << 8) | b as Limb))
            .collect();
        Vint::from_parts(mag, false)
    }

    /// Big-endian bytes of the magnitude, without leading zero bytes
    /// (zero encodes as a single zero byte).
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut out: Vec<u8> = self
            .limbs()
            .iter()
            .rev()
            .flat_map(|l| l.to_be_bytes())
            .skip_while(|&b| b == 0)
            .collect();
        if out.is_empty() {
            out.push(0);
        }
        out
    }
}

/// `mag = mag * m + a`.
fn mul_add_limb(mag: &mut Vec<Limb>, m: Limb, a: Limb) {
    let src = mag.clone();
    let hi = limb::mul_1(mag, &src, m);
    let src = mag.clone();
    let carry = limb::add_1(mag, &src, a);
    let (top, overflow) = limb::adc(hi, carry, 0);
    debug_assert_eq!(overflow, 0);
    if top != 0 {
        mag.push(top);
    }
}

fn magnitude_digits(mag: &[Limb], radix: u32) -> String {
    let (base, per_chunk) = chunk_base(radix);
    let mut cur = mag.to_vec();
    let mut chunks = Vec::new();
    loop {
        let src = cur.clone();
        let rem = limb::div_1(&mut cur, &src, base);
        while cur.len() > 1 && cur[cur.len() - 1] == 0 {
            cur.pop();
        }
        let done = limb::is_zero_n(&cur);
        chunks.push(rem);
        if done {
            break;
        }
    }

    let mut s = String::new();
    for (i, &chunk) in chunks.iter().rev().enumerate() {
        let mut buf = [b'0'; 64];
        let mut v = chunk;
        let mut n = 0;
        while v > 0 {
            buf[n] = digit_char(v % radix as Limb);
            v /= radix as Limb;
            n += 1;
        }
        // the leading chunk is unpadded, the rest keep their zeros
        let width = if i == 0 { n.max(1) } else { per_chunk };
        for k in (0..width).rev() {
            s.push(buf[k] as char);
        }
    }
    s
}

fn digit_char(d: Limb) -> u8 {
    match d {
        0..=9 => b'0' + d as u8,
        _ => b'a' + (d - 10) as u8,
    }
}

impl FromStr for Vint {
    type Err = Error;

    /// Parses decimal, `0x` hexadecimal or `0b` binary with an optional `-`.
    fn from_str(s: &str) -> Result<Vint> {
        let (neg, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (radix, digits) = if let Some(hex) = body
            .strip_prefix("0x")
            .or_else(|| body.strip_prefix("0X"))
        {
            (16, hex)
        } else if let Some(bin) = body
            .strip_prefix("0b")
            .or_else(|| body.strip_prefix("0B"))
        {
            (2, bin)
        } else {
            (10, body)
        };
        if digits.starts_with('-') {
            return Err(Error::InvalidDigit);
        }
        let v = Vint::from_str_radix(digits, radix)?;
        Ok(if neg { -v } else { v })
    }
}

impl fmt::Display for Vint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &magnitude_digits(self.limbs(), 10))
    }
}

impl fmt::LowerHex for Vint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0x", &magnitude_digits(self.limbs(), 16))
    }
}

impl fmt::UpperHex for Vint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = magnitude_digits(self.limbs(), 16).to_ascii_uppercase();
        f.pad_integral(!self.is_negative(), "0x", &digits)
    }
}

impl fmt::Binary for Vint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0b", &magnitude_digits(self.limbs(), 2))
    }
}
