//! Conversion of the RESULT register format into lux.
//!
//! The OPT3001 packs its reading as `E[3:0] R[11:0]`:
//! lux = 0.01 * 2^E * R, covering 0.01 lx to 83865.6 lx.

const MANTISSA_MSK: u16 = 0x0FFF;
const EXPONENT_POS: u16 = 12;

/// Split a raw result into `(exponent, mantissa)`.
#[inline]
fn split_raw(raw: u16) -> (u8, u16) {
    (((raw >> EXPONENT_POS) & 0xF) as u8, raw & MANTISSA_MSK)
}

/// Decode a RESULT register value into lux.
pub fn raw_to_lux(raw: u16) -> f32 {
    let (exponent, mantissa) = split_raw(raw);
    // mantissa << exponent is exact in f32, so the division rounds once
    ((mantissa as u32) << exponent) as f32 / 100.0
}
