//! Format VII (32-bit load/store and neighbors) and format XIV (48-bit
//! load/store).
use crate::bits::{extract, sext, word1, word2, word3};
use crate::condition::Condition;
use crate::decode::record;
use crate::format::Format;
use crate::instruction::DecodedInstruction;
use crate::mnemonic::Mnemonic;
use crate::operand::{disp_reg, hex_addr, indirect};
use crate::registers::GeneralRegister;

pub(crate) fn try_decode_vii(raw: u64, addr: u32) -> Option<DecodedInstruction> {
    let w1 = word1(raw);
    let w2 = word2(raw);
    let opcode = extract(w1, 5, 6);
    let reg1 = extract(w1, 0, 5);
    let reg2 = extract(w1, 11, 5);
    let r1 = GeneralRegister::new(reg1);
    let r2 = GeneralRegister::new(reg2);
    let sub1 = extract(w2, 0, 1);
    let sub2 = extract(w2, 0, 11);
    let reg3 = GeneralRegister::new(extract(w2, 11, 5));

    let load = |id: Mnemonic, disp: i32| {
        Some(record(raw, addr, id, Format::Vii, disp, 0, 4, format!("{}, {r2}", disp_reg(disp, r1))))
    };
    let store = |id: Mnemonic, disp: i32| {
        Some(record(raw, addr, id, Format::Vii, disp, 0, 4, format!("{r2}, {}", disp_reg(disp, r1))))
    };

    match opcode {
        0x38 => load(Mnemonic::Ldb, sext(w2, 16)),
        0x3A => store(Mnemonic::Stb, sext(w2, 16)),
        0x3B => {
            let disp = sext(w2, 16) & !1;
            if sub1 == 0 { store(Mnemonic::Sth, disp) } else { store(Mnemonic::Stw, disp) }
        }
        0x39 => {
            let disp = sext(w2, 16) & !1;
            if sub1 == 0 { load(Mnemonic::Ldh, disp) } else { load(Mnemonic::Ldw, disp) }
        }
        0x3D if sub1 == 1 && reg2 != 0 => load(Mnemonic::Ldbu, sext(w2, 16)),
        0x3E if sub1 == 1 => load(Mnemonic::Ldbu, sext(w2, 16)),
        0x37 if reg2 == 0 && sub1 == 1 => {
            let disp = sext(w2, 16) & !1;
            Some(record(raw, addr, Mnemonic::Loop, Format::Vii, disp, 0, 4, format!("{r1}, {disp}")))
        }
        0x3F => {
            if reg2 == 0 && sub1 == 1 {
                let combined = (w2 >> 1) | (((w1 >> 4) & 1) << 15);
                let disp = sext(combined, 16) << 1;
                let cond = Condition::from_bits(extract(w1, 0, 4));
                let target = (addr as i64 + disp as i64) as u32;
                Some(record(
                    raw,
                    addr,
                    Mnemonic::Bcond(cond),
                    Format::Vii,
                    disp,
                    0,
                    4,
                    hex_addr(target),
                ))
            } else if sub1 == 1 {
                load(Mnemonic::Ldhu, sext(w2, 16) & !1)
            } else if reg2 == 0 && sub2 == 0x378 {
                Some(record(raw, addr, Mnemonic::Ldlw, Format::Vii, 0, 0, 4, format!("{}, {reg3}", indirect(r1))))
            } else if reg2 == 0 && sub2 == 0x37A {
                Some(record(raw, addr, Mnemonic::Stcw, Format::Vii, 0, 0, 4, format!("{reg3}, {}", indirect(r1))))
            } else if reg2 != 0 && sub2 == 0xC4 {
                let imm = reg1 as i32;
                Some(record(raw, addr, Mnemonic::Rotl, Format::Vii, 0, imm, 4, format!("{imm}, {r2}, {reg3}")))
            } else if reg2 != 0 && sub2 == 0xC6 {
                Some(record(raw, addr, Mnemonic::Rotl, Format::Vii, 0, 0, 4, format!("{r1}, {r2}, {reg3}")))
            } else {
                None
            }
        }
        _ => None,
    }
}

pub(crate) fn try_decode_xiv(raw: u64, addr: u32) -> Option<DecodedInstruction> {
    let w1 = word1(raw);
    let w2 = word2(raw);
    let w3 = word3(raw);
    let opcode = extract(w1, 5, 6);
    let reg1 = GeneralRegister::new(extract(w1, 0, 5));
    let reg3 = GeneralRegister::new(extract(w1, 11, 5));

    // The reg3 field (word1 bits 11-15) doubles as high bits of the
    // sub-opcode, combined with word2's low bits.
    let reg3field = extract(w1, 11, 5);
    let sub_opcode = extract(w2, 0, 4) | (reg3field << 4);
    let sub_opcode2 = extract(w2, 0, 5) | (reg3field << 5);

    let id = match (opcode, sub_opcode) {
        (0x3C, 0b0101) => Mnemonic::Ldb,
        (0x3D, 0b0101) => Mnemonic::Ldbu,
        (0x3C, 0b1101) => Mnemonic::Stb,
        _ => match (opcode, sub_opcode2) {
            (0x3D, 0b01001) => Mnemonic::Lddw,
            (0x3C, 0b00111) => Mnemonic::Ldh,
            (0x3D, 0b00111) => Mnemonic::Ldhu,
            (0x3C, 0b01001) => Mnemonic::Ldw,
            (0x3D, 0b01111) => Mnemonic::Stdw,
            (0x3D, 0b01101) => Mnemonic::Sth,
            (0x3C, 0b01111) => Mnemonic::Stw,
            _ => return None,
        },
    };

    let disp = sext(extract(w2, 4, 7) | (w3 << 7), 23);
    // Load and store share the same `disp[reg1], reg3` rendering here,
    // unlike format VII which swaps the operand order for stores.
    let operand = format!("{}, {reg3}", disp_reg(disp, reg1));
    Some(record(raw, addr, id, Format::Xiv, disp, 0, 6, operand))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::push_word;

    fn raw2(w1: u16, w2: u16) -> u64 {
        push_word(push_word(0, 1, w1), 2, w2)
    }

    #[test]
    fn ldb_form() {
        let w1 = (0x38u16 << 5) | 3; // reg1=3
        let w2 = 8u16;
        let inst = try_decode_vii(raw2(w1, w2), 0).unwrap();
        assert_eq!(inst.mnemonic_text, "ld.b");
        assert_eq!(inst.operand_text, "8[r3], r0");
    }

    #[test]
    fn stb_form() {
        let w1 = (0x3Au16 << 5) | (2u16 << 11) | 3;
        let w2 = 4u16;
        let inst = try_decode_vii(raw2(w1, w2), 0).unwrap();
        assert_eq!(inst.mnemonic_text, "st.b");
        assert_eq!(inst.operand_text, "r2, 4[r3]");
    }

    #[test]
    fn long_bcond() {
        let w1 = (0x3Fu16 << 5) | 5; // cond=5 (r)
        let w2 = 1u16; // sub1 = 1
        let inst = try_decode_vii(raw2(w1, w2), 0x100).unwrap();
        assert_eq!(inst.mnemonic_text, "br");
    }
}
