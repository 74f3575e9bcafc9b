//! The cascading dispatch engine: tries progressively longer formats as more
//! bytes become available, stopping at the first match.
mod arith;
mod bitops;
mod loadstore;
mod small;
mod stack;
mod system;

use crate::bits::push_word;
use crate::format::Format;
use crate::instruction::{DecodeError, DecodedInstruction};
use crate::mnemonic::Mnemonic;

/// Outcome of a single format decoder's attempt against the bytes it was
/// given.
pub(crate) enum Attempt {
    /// Recognized; here is the record.
    Matched(DecodedInstruction),
    /// Definitively not this format; try the next one.
    NoMatch,
    /// This format's bit pattern matched but a trailing halfword it needs
    /// was not supplied.
    NeedMoreBytes,
}

/// Builds a [`DecodedInstruction`], materializing `mnemonic_text` from `id`'s
/// `Display` impl once up front.
pub(crate) fn record(
    raw: u64,
    addr: u32,
    id: Mnemonic,
    format: Format,
    disp: i32,
    imm: i32,
    byte_size: u8,
    operand_text: String,
) -> DecodedInstruction {
    DecodedInstruction {
        raw,
        addr,
        mnemonic_text: id.to_string(),
        id,
        format,
        disp,
        imm,
        byte_size,
        operand_text,
    }
}

fn read_halfword(bytes: &[u8], offset: usize) -> Option<u16> {
    let lo = *bytes.get(offset)? as u16;
    let hi = *bytes.get(offset + 1)? as u16;
    Some(lo | (hi << 8))
}

/// Decodes the instruction at the front of `bytes`, loaded at `addr`.
///
/// Reads 2, 4 or 6 bytes depending on which format recognizes the pattern,
/// trying formats in order of growing instruction length; within a length
/// class, narrower formats are tried before broader ones that would
/// otherwise shadow them.
pub fn decode(bytes: &[u8], addr: u32) -> Result<DecodedInstruction, DecodeError> {
    let w1 = read_halfword(bytes, 0).ok_or(DecodeError::InsufficientBytes)?;
    let raw2 = push_word(0, 1, w1);

    if let Some(inst) = small::try_decode(raw2, addr) {
        return Ok(inst);
    }

    let w2 = match read_halfword(bytes, 2) {
        Some(w2) => w2,
        None => return Err(DecodeError::InsufficientBytes),
    };
    let raw4 = push_word(raw2, 2, w2);
    let extra = read_halfword(bytes, 4);

    match arith::try_decode_v(raw4, addr) {
        Some(inst) => return Ok(inst),
        None => {}
    }
    match arith::try_decode_vi(raw4, addr, extra) {
        Attempt::Matched(inst) => return Ok(inst),
        Attempt::NeedMoreBytes => return Err(DecodeError::InsufficientBytes),
        Attempt::NoMatch => {}
    }
    if let Some(inst) = loadstore::try_decode_vii(raw4, addr) {
        return Ok(inst);
    }
    if let Some(inst) = bitops::try_decode_viii(raw4, addr) {
        return Ok(inst);
    }
    if let Some(inst) = bitops::try_decode_ix(raw4, addr) {
        return Ok(inst);
    }
    if let Some(inst) = system::try_decode_x(raw4, addr) {
        return Ok(inst);
    }
    if let Some(inst) = arith::try_decode_xi(raw4, addr) {
        return Ok(inst);
    }
    if let Some(inst) = arith::try_decode_xii(raw4, addr) {
        return Ok(inst);
    }
    match stack::try_decode_xiii(raw4, addr, extra) {
        Attempt::Matched(inst) => return Ok(inst),
        Attempt::NeedMoreBytes => return Err(DecodeError::InsufficientBytes),
        Attempt::NoMatch => {}
    }

    let w3 = match extra {
        Some(w3) => w3,
        None => return Err(DecodeError::InsufficientBytes),
    };
    let raw6 = push_word(raw4, 3, w3);
    if let Some(inst) = loadstore::try_decode_xiv(raw6, addr) {
        return Ok(inst);
    }

    Err(DecodeError::Unrecognized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nop_decodes() {
        let inst = decode(&[0x00, 0x00], 0x1000).unwrap();
        assert_eq!(inst.mnemonic_text, "nop");
        assert_eq!(inst.operand_text, "");
        assert_eq!(inst.byte_size, 2);
    }

    #[test]
    fn insufficient_bytes() {
        assert_eq!(decode(&[], 0), Err(DecodeError::InsufficientBytes));
    }

    #[test]
    fn unrecognized_pattern_fails() {
        // opcode 10 (bits 5-10), reg1 = reg2 = 0: claimed by no format.
        let err = decode(&[0x40, 0x01, 0x00, 0x00, 0x00, 0x00], 0).unwrap_err();
        assert_eq!(err, DecodeError::Unrecognized);
    }
}
