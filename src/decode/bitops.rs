//! Format VIII (single-bit memory manipulation) and format IX (extended
//! group 1: system-register access, bit search, register-form shifts and
//! bit insertion).
use crate::bits::{extract, sext, word1, word2};
use crate::condition::Condition;
use crate::decode::record;
use crate::format::Format;
use crate::instruction::DecodedInstruction;
use crate::mnemonic::Mnemonic;
use crate::operand::disp_reg;
use crate::registers::{GeneralRegister, SystemRegister};

pub(crate) fn try_decode_viii(raw: u64, addr: u32) -> Option<DecodedInstruction> {
    let w1 = word1(raw);
    let w2 = word2(raw);
    let opcode = extract(w1, 5, 6);
    // clr1 at 0x38 is permanently shadowed by format VII's unconditional
    // ld.b at the same opcode, which is tried first in dispatch order; this
    // is how the real decoder behaves, not a defect.
    let id = match (opcode, extract(w1, 14, 2)) {
        (0x38, 2) => Mnemonic::Clr1,
        (0x3E, 1) => Mnemonic::Not1,
        (0x3E, 0) => Mnemonic::Set1,
        (0x3E, 3) => Mnemonic::Tst1,
        _ => return None,
    };
    let reg1 = GeneralRegister::new(extract(w1, 0, 5));
    let bit_index = extract(w1, 11, 3);
    let disp = sext(w2, 16);

    Some(record(raw, addr, id, Format::Viii, disp, bit_index as i32, 4, format!("{bit_index}, {}", disp_reg(disp, reg1))))
}

pub(crate) fn try_decode_ix(raw: u64, addr: u32) -> Option<DecodedInstruction> {
    let w1 = word1(raw);
    let w2 = word2(raw);
    if extract(w2, 0, 1) != 0 {
        return None;
    }
    let opcode = extract(w1, 5, 6);
    let reg1field = extract(w1, 0, 5);
    let reg1 = GeneralRegister::new(reg1field);
    let reg2 = GeneralRegister::new(extract(w1, 11, 5));
    let reg3 = GeneralRegister::new(extract(w2, 11, 5));

    if opcode == 0x3E {
        let cond = Condition::from_bits(reg1field);
        return match w2 {
            0x200 => Some(record(raw, addr, Mnemonic::Sasf, Format::Ix, 0, 0, 4, format!("{cond}, {reg2}"))),
            0 => Some(record(raw, addr, Mnemonic::Setf, Format::Ix, 0, 0, 4, format!("{cond}, {reg2}"))),
            _ => None,
        };
    }

    if opcode != 0x3F {
        return None;
    }

    if reg1field == 0 {
        let id = match w2 {
            0x364 => Mnemonic::Sch0l,
            0x360 => Mnemonic::Sch0r,
            0x366 => Mnemonic::Sch1l,
            0x362 => Mnemonic::Sch1r,
            _ => return None,
        };
        return Some(record(raw, addr, id, Format::Ix, 0, 0, 4, format!("{reg2}, {reg3}")));
    }

    // Register-addressed bit-op/shift sub-case: reg1 != 0 selects a
    // full-word2 literal rather than the field decomposition format VIII
    // uses. Only shl gets operand text in the reference decoder; the rest
    // print bare (a quirk of the original, preserved here).
    match w2 {
        0b0000000011100100 => return Some(record(raw, addr, Mnemonic::Clr1, Format::Ix, 0, 0, 4, String::new())),
        0b0000000011100010 => return Some(record(raw, addr, Mnemonic::Not1, Format::Ix, 0, 0, 4, String::new())),
        0b0000000011100110 => return Some(record(raw, addr, Mnemonic::Tst1, Format::Ix, 0, 0, 4, String::new())),
        0b0000000011100000 => return Some(record(raw, addr, Mnemonic::Set1, Format::Ix, 0, 0, 4, String::new())),
        0b0000000010100000 => return Some(record(raw, addr, Mnemonic::Sar, Format::Ix, 0, 0, 4, String::new())),
        0b0000000011000000 => return Some(record(raw, addr, Mnemonic::Shl, Format::Ix, 0, 0, 4, format!("{reg1}, {reg2}"))),
        0b0000000010000000 => return Some(record(raw, addr, Mnemonic::Shr, Format::Ix, 0, 0, 4, String::new())),
        _ => {}
    }

    if extract(w2, 0, 11) == 0x020 {
        let sel = extract(w2, 0, 2);
        let sr = SystemRegister::new(extract(w1, 11, 5), sel);
        return Some(record(raw, addr, Mnemonic::Ldsr, Format::Ix, 0, 0, 4, format!("{reg1}, {sr}, {reg3}")));
    }
    if extract(w2, 0, 11) == 0x040 {
        let sel = extract(w2, 0, 2);
        let sr = SystemRegister::new(reg1field, sel);
        return Some(record(raw, addr, Mnemonic::Stsr, Format::Ix, 0, 0, 4, format!("{sr}, {reg2}, {reg3}")));
    }
    let field7 = extract(w2, 4, 7);
    if matches!(field7, 0x09 | 0x0B | 0x0D) {
        let pos = extract(w2, 0, 5);
        let width = extract(w2, 11, 5);
        return Some(record(
            raw,
            addr,
            Mnemonic::Bins,
            Format::Ix,
            0,
            0,
            4,
            format!("{reg1}, {pos}, {width}, {reg2}"),
        ));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::push_word;

    fn raw2(w1: u16, w2: u16) -> u64 {
        push_word(push_word(0, 1, w1), 2, w2)
    }

    #[test]
    fn clr1() {
        let w1 = (0x38u16 << 5) | (2 << 14) | (3 << 11); // sub2=2 (clr1), bit=3, reg1=0
        let inst = try_decode_viii(raw2(w1, 8), 0).unwrap();
        assert_eq!(inst.mnemonic_text, "clr1");
        assert_eq!(inst.operand_text, "3, 8[r0]");
    }

    #[test]
    fn not1() {
        let w1 = (0x3Eu16 << 5) | (1 << 14) | (2 << 11); // sub2=1 (not1), bit=2
        let inst = try_decode_viii(raw2(w1, 0), 0).unwrap();
        assert_eq!(inst.mnemonic_text, "not1");
    }

    #[test]
    fn ldsr_form() {
        let w1 = (0x3Fu16 << 5) | (5 << 11) | 2; // reg1=2, reg2(sel source)=5
        let w2 = 0x020u16;
        let inst = try_decode_ix(raw2(w1, w2), 0).unwrap();
        assert_eq!(inst.mnemonic_text, "ldsr");
    }

    #[test]
    fn register_form_shl() {
        let w1 = (0x3Fu16 << 5) | (5 << 11) | 2; // reg1=2, reg2=5
        let w2 = 0b0000000011000000u16;
        let inst = try_decode_ix(raw2(w1, w2), 0).unwrap();
        assert_eq!(inst.mnemonic_text, "shl");
    }

    #[test]
    fn sch0l_form() {
        let w1 = (0x3Fu16 << 5) | (3 << 11); // reg1=0, reg2=3
        let inst = try_decode_ix(raw2(w1, 0x364), 0).unwrap();
        assert_eq!(inst.mnemonic_text, "sch0l");
    }
}
