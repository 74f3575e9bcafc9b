//! Format V (long jump), VI (16-bit immediate 3-operand), XI (extended
//! group 3: multiply/divide/mac) and XII (extended group 4: byte/halfword
//! swap, conditional move).
use crate::bits::{extract, push_word, sext, word1, word2, word3};
use crate::condition::Condition;
use crate::decode::{record, Attempt};
use crate::format::Format;
use crate::instruction::DecodedInstruction;
use crate::mnemonic::Mnemonic;
use crate::operand::{hex_addr, hex_imm, indirect};
use crate::registers::GeneralRegister;

pub(crate) fn try_decode_v(raw: u64, addr: u32) -> Option<DecodedInstruction> {
    let w1 = word1(raw);
    let w2 = word2(raw);
    if extract(w1, 6, 5) != 0x1E || extract(w2, 0, 1) != 0 {
        return None;
    }
    let reg2 = extract(w1, 11, 5);
    let combined = extract(w1, 0, 6) | (extract(w2, 1, 15) << 6);
    let disp = sext(combined, 21) << 1;
    let target = (addr as i64 + disp as i64) as u32;

    if reg2 == 0 {
        Some(record(raw, addr, Mnemonic::Jr, Format::V, disp, 0, 4, hex_addr(target)))
    } else {
        let r2 = GeneralRegister::new(reg2);
        Some(record(raw, addr, Mnemonic::Jarl, Format::V, disp, 0, 4, format!("{}, {r2}", hex_addr(target))))
    }
}

// Opcode assignments for the reg2≠0 group. These can't be a contiguous
// range: formats III and IV_1 claim fixed bit patterns over the same word1
// field regardless of register contents, which rules out most of 0..48 (see
// DESIGN.md for the full safe-opcode derivation). 1 and 2 fall back inside
// format I's general register-register range, so `xori` and the bit-op
// group below are only reachable when reg1 == 0.
const VI_SIGNED: [(u32, Mnemonic); 3] = [(15, Mnemonic::Addi), (48, Mnemonic::Movea), (50, Mnemonic::Satsubi)];
const VI_UNSIGNED: [(u32, Mnemonic); 5] = [
    (51, Mnemonic::Andi),
    (52, Mnemonic::Mulhi),
    (53, Mnemonic::Movhi),
    (54, Mnemonic::Ori),
    (1, Mnemonic::Xori),
];

pub(crate) fn try_decode_vi(raw: u64, addr: u32, extra: Option<u16>) -> Attempt {
    let w1 = word1(raw);
    let w2 = word2(raw);
    let opcode = extract(w1, 5, 6);
    let reg1 = extract(w1, 0, 5);
    let reg2 = extract(w1, 11, 5);
    let r1 = GeneralRegister::new(reg1);

    if reg2 == 0 && extract(w2, 0, 1) == 0 && matches!(opcode, 0x17 | 0x37 | 0x31) {
        let w3 = match extra {
            Some(w3) => w3 as u32,
            None => return Attempt::NeedMoreBytes,
        };
        let raw6 = push_word(raw, 3, w3 as u16);
        let imm = (w2 as u32) | (w3 << 16);
        let (id, operand) = match opcode {
            0x31 => (Mnemonic::Mov, format!("{}, {r1}", hex_imm(imm))),
            0x37 => (Mnemonic::Jmp, hex_imm(imm)),
            _ if reg1 == 0 => (Mnemonic::Jr, hex_addr(imm)),
            _ => (Mnemonic::Jarl, format!("{}, {r1}", hex_addr(imm))),
        };
        return Attempt::Matched(record(raw6, addr, id, Format::Vi, 0, imm as i32, 6, operand));
    }

    if reg2 != 0 {
        let r2 = GeneralRegister::new(reg2);
        if let Some(&(_, id)) = VI_SIGNED.iter().find(|&&(op, _)| op == opcode) {
            let imm = sext(w2, 16);
            return Attempt::Matched(record(raw, addr, id, Format::Vi, 0, imm, 4, format!("{imm}, {r1}, {r2}")));
        }
        if let Some(&(_, id)) = VI_UNSIGNED.iter().find(|&&(op, _)| op == opcode) {
            return Attempt::Matched(record(
                raw,
                addr,
                id,
                Format::Vi,
                0,
                w2 as i32,
                4,
                format!("{}, {r1}, {r2}", hex_imm(w2)),
            ));
        }
    }

    Attempt::NoMatch
}

pub(crate) fn try_decode_xi(raw: u64, addr: u32) -> Option<DecodedInstruction> {
    let w1 = word1(raw);
    let w2 = word2(raw);
    if extract(w1, 5, 6) != 0x3F || extract(w2, 0, 1) != 0 {
        return None;
    }
    let reg1 = GeneralRegister::new(extract(w1, 0, 5));
    let reg2field = extract(w1, 11, 5);
    let reg2 = GeneralRegister::new(reg2field);
    let reg3 = GeneralRegister::new(extract(w2, 11, 5));
    let sub = extract(w2, 1, 10);

    if sub == 0b0010110000 {
        return match reg2field {
            0x18 => Some(record(raw, addr, Mnemonic::Jarl, Format::Xi, 0, 0, 4, format!("{}, {reg3}", indirect(reg1)))),
            0x0C => Some(record(raw, addr, Mnemonic::Popsp, Format::Xi, 0, 0, 4, format!("{}-{}", reg1.index(), reg3.index()))),
            0x08 => Some(record(raw, addr, Mnemonic::Pushsp, Format::Xi, 0, 0, 4, format!("{}-{}", reg1.index(), reg3.index()))),
            _ => None,
        };
    }

    const FIXED: [(u32, Mnemonic); 9] = [
        (0b0001110111, Mnemonic::Caxi),
        (0b0101100000, Mnemonic::Div),
        (0b0101000000, Mnemonic::Divh),
        (0b0101000001, Mnemonic::Divhu),
        (0b0101111110, Mnemonic::Divq),
        (0b0101111111, Mnemonic::Divqu),
        (0b0101100001, Mnemonic::Divu),
        (0b0100010000, Mnemonic::Mul),
        (0b0100010001, Mnemonic::Mulu),
    ];
    const FIXED2: [(u32, Mnemonic); 5] = [
        (0b0001010001, Mnemonic::Sar),
        (0b0111011101, Mnemonic::Satadd),
        (0b0111001101, Mnemonic::Satsub),
        (0b0001100001, Mnemonic::Shl),
        (0b0001000001, Mnemonic::Shr),
    ];
    for &(pattern, id) in FIXED.iter().chain(FIXED2.iter()) {
        if sub == pattern {
            return Some(record(raw, addr, id, Format::Xi, 0, 0, 4, format!("{}, {reg2}, {reg3}", indirect(reg1))));
        }
    }

    let cond = Condition::from_bits(sub & 0xF);
    match sub >> 4 {
        0b011101 => return Some(record(raw, addr, Mnemonic::Adf, Format::Xi, 0, 0, 4, format!("{cond}, {reg1}, {reg2}, {reg3}"))),
        0b011100 => return Some(record(raw, addr, Mnemonic::Sbf, Format::Xi, 0, 0, 4, format!("{cond}, {reg1}, {reg2}, {reg3}"))),
        0b011001 => return Some(record(raw, addr, Mnemonic::Cmov, Format::Xi, 0, 0, 4, format!("{cond}, {reg1}, {reg2}, {reg3}"))),
        _ => {}
    }

    let reg4 = GeneralRegister::new(extract(w2, 0, 5));
    match extract(w2, 5, 7) {
        0b0011110 => Some(record(raw, addr, Mnemonic::Mac, Format::Xi, 0, 0, 4, format!("{}, {reg2}, {reg3}, {reg4}", indirect(reg1)))),
        0b0011111 => Some(record(raw, addr, Mnemonic::Macu, Format::Xi, 0, 0, 4, format!("{}, {reg2}, {reg3}, {reg4}", indirect(reg1)))),
        _ => None,
    }
}

pub(crate) fn try_decode_xii(raw: u64, addr: u32) -> Option<DecodedInstruction> {
    let w1 = word1(raw);
    let w2 = word2(raw);
    if extract(w1, 5, 6) != 0x3F {
        return None;
    }
    let reg1 = extract(w1, 0, 5);
    let reg2 = GeneralRegister::new(extract(w1, 11, 5));
    let reg3 = GeneralRegister::new(extract(w2, 11, 5));
    let sub = extract(w2, 1, 10) | (reg1 << 10);

    match sub {
        0b0110100001 => Some(record(raw, addr, Mnemonic::Bsh, Format::Xii, 0, 0, 4, format!("{reg2}, {reg3}"))),
        0b0110100000 => Some(record(raw, addr, Mnemonic::Bsw, Format::Xii, 0, 0, 4, format!("{reg2}, {reg3}"))),
        0b0110100011 => Some(record(raw, addr, Mnemonic::Hsh, Format::Xii, 0, 0, 4, format!("{reg2}, {reg3}"))),
        0b0110100010 => Some(record(raw, addr, Mnemonic::Hsw, Format::Xii, 0, 0, 4, format!("{reg2}, {reg3}"))),
        _ if (sub >> 4) & 0x3F == 0b011000 => {
            let cond = Condition::from_bits(extract(w2, 1, 4));
            let imm5 = reg1;
            Some(record(raw, addr, Mnemonic::Cmov, Format::Xii, 0, imm5 as i32, 4, format!("{cond}, {imm5}, {reg2}, {reg3}")))
        }
        _ if (sub & 0x3E1) == 0b0100100000 => Some(record(raw, addr, Mnemonic::Mul, Format::Xii, 0, 0, 4, format!("{reg2}, {reg3}"))),
        _ if (sub & 0x3E1) == 0b0100100001 => Some(record(raw, addr, Mnemonic::Mulu, Format::Xii, 0, 0, 4, format!("{reg2}, {reg3}"))),
        _ => None,
    }
}
