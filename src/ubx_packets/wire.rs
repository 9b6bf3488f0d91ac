//! Little-endian field reads shared by the packet views.
//!
//! No bounds checking happens here: every view validates its payload
//! length before construction, so the indexing below cannot go out of
//! range for a view obtained through `match_packet`.

#[inline]
pub(crate) fn read_u16(data: &[u8], off: usize) -> u16 {
    u16::from_le_bytes([data[off], data[off + 1]])
}

#[inline]
pub(crate) fn read_i16(data: &[u8], off: usize) -> i16 {
    i16::from_le_bytes([data[off], data[off + 1]])
}

#[inline]
pub(crate) fn read_u32(data: &[u8], off: usize) -> u32 {
    u32::from_le_bytes([data[off], data[off + 1], data[off + 2], data[off + 3]])
}

#[inline]
pub(crate) fn read_i32(data: &[u8], off: usize) -> i32 {
    i32::from_le_bytes([data[off], data[off + 1], data[off + 2], data[off + 3]])
}

/// Tests bit `n` of `byte`, bit 0 being the least significant.
#[inline]
pub(crate) fn bit(byte: u8, n: u8) -> bool {
    (byte >> n) & 0x1 != 0
}

/// Extracts `width` bits of `byte` starting at `lsb`.
#[inline]
pub(crate) fn bits(byte: u8, lsb: u8, width: u8) -> u8 {
    (byte >> lsb) & ((1 << width) - 1)
}
