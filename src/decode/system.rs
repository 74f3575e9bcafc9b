//! Format X — extended group 2, the system/control instructions. Nearly
//! all of these are recognized by an exact 32-bit literal match rather than
//! a field decomposition.
use crate::bits::{extract, word1, word2};
use crate::decode::record;
use crate::format::Format;
use crate::instruction::DecodedInstruction;
use crate::mnemonic::Mnemonic;
use crate::registers::GeneralRegister;

const LITERALS: [(u32, Mnemonic); 7] = [
    (0x0144_07e0, Mnemonic::Ctret),
    (0x0160_07e0, Mnemonic::Di),
    (0x0160_87e0, Mnemonic::Ei),
    (0x0148_07e0, Mnemonic::Eiret),
    (0x014a_07e0, Mnemonic::Feret),
    (0x0120_07e0, Mnemonic::Halt),
    (0x0120_0fe0, Mnemonic::Snooze),
];

pub(crate) fn try_decode_x(raw: u64, addr: u32) -> Option<DecodedInstruction> {
    let w1 = word1(raw);
    let w2 = word2(raw);
    let full = (w1 as u32) | ((w2 as u32) << 16);

    if full == 0xF160_FFFF {
        return Some(record(raw, addr, Mnemonic::Cll, Format::X, 0, 0, 4, String::new()));
    }
    for &(literal, id) in LITERALS.iter() {
        if full == literal {
            return Some(record(raw, addr, id, Format::X, 0, 0, 4, String::new()));
        }
    }

    if w2 == 0 && extract(w1, 4, 7) == 0x7F {
        let imm1 = extract(w1, 0, 4);
        let imm2 = extract(w1, 11, 5);
        return Some(record(raw, addr, Mnemonic::Rie, Format::X, 0, 0, 4, format!("{imm2} {imm1}")));
    }

    // syscall: word2 & 0xc7ff == 0x0160, word1 >> 5 == 0b11010111111. The
    // mask leaves word1 bits 0-4 and word2 bits 11-13 free; together they
    // form the 8-bit vector (reg1-shaped field low, the freed word2 bits
    // high).
    if (w2 & 0xC7FF) == 0x0160 && (w1 >> 5) == 0b11010111111 {
        let reg1field = extract(w1, 0, 5);
        let vector = reg1field | (extract(w2, 11, 3) << 5);
        return Some(record(raw, addr, Mnemonic::Syscall, Format::X, 0, vector as i32, 4, format!("0x{vector:02x}")));
    }

    // trap: word2 == 0x0100, word1 >> 5 == 0b00000111111; the vector is
    // word1's low 5 bits.
    if w2 == 0x0100 && (w1 >> 5) == 0b00000111111 {
        let vector = w1 & 0x1F;
        return Some(record(raw, addr, Mnemonic::Trap, Format::X, 0, vector as i32, 4, vector.to_string()));
    }

    // cache: extract(word2, 0, 11) == 0x160, (extract(word1,5,6) |
    // extract(word1,13,3)<<6) == 0x1ff.
    if extract(w2, 0, 11) == 0x160 && (extract(w1, 5, 6) | (extract(w1, 13, 3) << 6)) == 0x1FF {
        let reg1 = GeneralRegister::new(extract(w1, 0, 5));
        let cacheop = extract(w2, 11, 5) | (extract(w1, 11, 2) << 5);
        return Some(record(raw, addr, Mnemonic::Cache, Format::X, 0, cacheop as i32, 4, format!("0x{cacheop:02x} [{reg1}]")));
    }

    // pref: extract(word2, 0, 11) == 0x160, extract(word1, 5, 11) == 0x6ff.
    if extract(w2, 0, 11) == 0x160 && extract(w1, 5, 11) == 0x6FF {
        let reg1 = GeneralRegister::new(extract(w1, 0, 5));
        let prefop = extract(w2, 11, 5);
        return Some(record(raw, addr, Mnemonic::Pref, Format::X, 0, prefop as i32, 4, format!("0x{prefop:02x} [{reg1}]")));
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
    fn cll_literal() {
        let inst = try_decode_x(raw2(0xFFFF, 0xF160), 0).unwrap();
        assert_eq!(inst.mnemonic_text, "cll");
    }

    #[test]
    fn halt_literal() {
        let inst = try_decode_x(raw2(0x07e0, 0x0120), 0).unwrap();
        assert_eq!(inst.mnemonic_text, "halt");
    }

    #[test]
    fn rie_pattern() {
        let w1 = (0x7Fu16 << 4) | 0xA;
        let inst = try_decode_x(raw2(w1, 0), 0).unwrap();
        assert_eq!(inst.mnemonic_text, "rie");
    }

    #[test]
    fn trap_form() {
        let w1 = (0b00000111111u16 << 5) | 7; // vector 7
        let inst = try_decode_x(raw2(w1, 0x0100), 0).unwrap();
        assert_eq!(inst.mnemonic_text, "trap");
        assert_eq!(inst.operand_text, "7");
    }

    #[test]
    fn syscall_form() {
        let w1 = (0b11010111111u16 << 5) | 3; // vector low bits = 3
        let w2 = 0x0160u16;
        let inst = try_decode_x(raw2(w1, w2), 0).unwrap();
        assert_eq!(inst.mnemonic_text, "syscall");
    }
}
