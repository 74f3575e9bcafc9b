use v850dis::decode::decode;
use v850dis::instruction::DecodedInstruction;

/// Decodes `bytes` at `addr` and asserts the resulting mnemonic, operand
/// text and byte size all match.
pub fn assert_decodes(bytes: &[u8], addr: u32, mnemonic: &str, operands: &str, byte_size: u8) -> DecodedInstruction {
    let inst = decode(bytes, addr).unwrap_or_else(|e| panic!("expected a match for {bytes:02x?}, got {e}"));
    assert_eq!(inst.mnemonic_text, mnemonic, "mnemonic mismatch for {bytes:02x?}");
    assert_eq!(inst.operand_text, operands, "operand mismatch for {bytes:02x?}");
    assert_eq!(inst.byte_size, byte_size, "byte_size mismatch for {bytes:02x?}");
    inst
}

/// Builds the raw bytes for a 2-byte instruction word (little-endian).
pub fn half(w: u16) -> Vec<u8> {
    w.to_le_bytes().to_vec()
}

/// Builds the raw bytes for a 4-byte instruction (two little-endian
/// halfwords).
pub fn word4(w1: u16, w2: u16) -> Vec<u8> {
    let mut bytes = half(w1);
    bytes.extend(half(w2));
    bytes
}
