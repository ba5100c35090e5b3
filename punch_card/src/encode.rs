// encode.rs - Character to column bit pattern

/// Rows occupied by one encoded character.
pub const ENCODED_BITS: usize = 8;

/// Low byte of the character's code point. Wider code points keep only
/// their low 8 bits.
pub fn byte_of(ch: char) -> u8 {
    (u32::from(ch) & 0xFF) as u8
}

/// Bits of `ch` top to bottom: index 0 holds the most significant bit.
pub fn column_bits(ch: char) -> [u8; ENCODED_BITS] {
    let byte = byte_of(ch);
    std::array::from_fn(|row| (byte >> (ENCODED_BITS - 1 - row)) & 1)
}
