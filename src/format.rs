use std::fmt;

use num_bigint::BigUint;

/// Longest hex field written to a vector file.
pub const MAX_HEX_DIGITS: usize = 128;

// One extra byte covers a leading zero nibble.
const MAX_HEX_BYTES: usize = MAX_HEX_DIGITS / 2 + 1;

/// Lowercase hex rendering of a vector field.
///
/// No `0x` prefix and no zero padding. Values wider than
/// [`MAX_HEX_DIGITS`] digits keep only their most significant digits.
#[derive(Debug, Clone, Copy)]
pub struct Hex<'a>(pub &'a BigUint);

impl fmt::Display for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        format_hex(self.0, f)
    }
}

impl fmt::LowerHex for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        format_hex(self.0, f)
    }
}

/// Whether `n` would lose digits when written as a vector field.
pub fn is_truncated(n: &BigUint) -> bool {
    n.bits() > 4 * MAX_HEX_DIGITS as u64
}

fn format_hex(src: &BigUint, f: &mut fmt::Formatter) -> fmt::Result {
    let bytes = src.to_bytes_be();
    let bytes = &bytes[..bytes.len().min(MAX_HEX_BYTES)];

    let mut buf = [0; MAX_HEX_BYTES * 2];
    let buf = hex_simd::encode(
        bytes,
        hex_simd::OutBuf::new(&mut buf),
        hex_simd::AsciiCase::Lower,
    )
    .map_err(|_| fmt::Error)?;

    let zero_digits = usize::from(buf.len() > 1 && buf[0] == b'0');
    let end = buf.len().min(zero_digits + MAX_HEX_DIGITS);

    let encoded = std::str::from_utf8(&buf[zero_digits..end]).map_err(|_| fmt::Error)?;

    f.write_str(encoded)
}
