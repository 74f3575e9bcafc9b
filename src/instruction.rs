//! The decoded instruction record and the decoder's error type.
use core::fmt;

use crate::format::Format;
use crate::mnemonic::Mnemonic;

/// A fully classified instruction: bit pattern, address, mnemonic identity,
/// operand values, and the rendered text a disassembly listing would print.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecodedInstruction {
    /// Up to 48 bits of instruction word, little-endian halfwords packed
    /// low-first; bits beyond `byte_size` are unspecified.
    pub raw: u64,
    /// The load address this instruction was decoded at.
    pub addr: u32,
    /// Which mnemonic this is.
    pub id: Mnemonic,
    /// Which bit-layout family recognized this instruction.
    pub format: Format,
    /// Signed displacement, sign-extended from its encoded width. Zero when
    /// the format has no displacement operand.
    pub disp: i32,
    /// Signed or zero-extended immediate, per the mnemonic's convention.
    /// Zero when the format has no immediate operand.
    pub imm: i32,
    /// Instruction length in bytes: 2, 4, or 6.
    pub byte_size: u8,
    /// The printed mnemonic, e.g. `"mov"`, `"bge"`, `"ld.bu"`.
    pub mnemonic_text: String,
    /// The printed operand list, e.g. `"r1, r2"`, `"0x001000"`.
    pub operand_text: String,
}

/// Why [`crate::decode::decode`] could not classify an instruction.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeError {
    /// Fewer bytes were supplied than the shortest format requires, or a
    /// format matched but needed more bytes than were available to finish
    /// reading its trailing halfwords.
    InsufficientBytes,
    /// No format decoder recognized the bit pattern.
    Unrecognized,
}

impl fmt::Debug for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DecodeError::InsufficientBytes => "InsufficientBytes",
            DecodeError::Unrecognized => "Unrecognized",
        };
        f.write_str(s)
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DecodeError::InsufficientBytes => "not enough bytes to complete the instruction",
            DecodeError::Unrecognized => "no format recognizes this bit pattern",
        };
        f.write_str(s)
    }
}

impl std::error::Error for DecodeError {}
