//! Formats I, II, III, IV_1 and IV_2 — the five 2-byte encodings.
use crate::bits::{extract, sext, word1};
use crate::condition::Condition;
use crate::decode::record;
use crate::format::Format;
use crate::mnemonic::Mnemonic;
use crate::operand::{disp_ep, hex_addr, indirect};
use crate::registers::GeneralRegister;

const GENERAL_REG_REG: [Mnemonic; 15] = [
    Mnemonic::Add,
    Mnemonic::And,
    Mnemonic::Cmp,
    Mnemonic::Divh,
    Mnemonic::Mov,
    Mnemonic::Mulh,
    Mnemonic::Not,
    Mnemonic::Or,
    Mnemonic::Satadd,
    Mnemonic::Satsub,
    Mnemonic::Satsubr,
    Mnemonic::Sub,
    Mnemonic::Subr,
    Mnemonic::Tst,
    Mnemonic::Xor,
];

const REG2_ZERO_GROUP: [Mnemonic; 6] = [
    Mnemonic::Jmp,
    Mnemonic::Switch,
    Mnemonic::Sxb,
    Mnemonic::Sxh,
    Mnemonic::Zxb,
    Mnemonic::Zxh,
];

fn format_i(w1: u32, raw: u64, addr: u32) -> Option<crate::instruction::DecodedInstruction> {
    if w1 == 0 {
        return Some(record(raw, addr, Mnemonic::Nop, Format::I, 0, 0, 2, String::new()));
    }

    let reg1 = extract(w1, 0, 5);
    let opcode = extract(w1, 5, 6);
    let reg2 = extract(w1, 11, 5);

    if reg1 != 0 && reg2 != 0 {
        let id = *GENERAL_REG_REG.get(opcode as usize)?;
        let r1 = GeneralRegister::new(reg1);
        let r2 = GeneralRegister::new(reg2);
        return Some(record(raw, addr, id, Format::I, 0, 0, 2, format!("{r1}, {r2}")));
    }

    // rie's exact match is checked before the fetrap masked-pattern
    // fallback, so word1==0x0040 resolves to rie, not fetrap.
    let id = match w1 {
        0x0040 => Some(Mnemonic::Rie),
        0x001D => Some(Mnemonic::Synce),
        0x001C => Some(Mnemonic::Synci),
        0x001E => Some(Mnemonic::Syncm),
        0x001F => Some(Mnemonic::Syncp),
        _ => None,
    };
    if let Some(id) = id {
        return Some(record(raw, addr, id, Format::I, 0, 0, 2, String::new()));
    }

    if (w1 & !(0xF << 11)) == 0x40 {
        let vec4 = extract(w1, 11, 4);
        return Some(record(raw, addr, Mnemonic::Fetrap, Format::I, 0, vec4 as i32, 2, format!("0x{vec4:x}")));
    }

    if reg2 == 0 {
        let id = *REG2_ZERO_GROUP.get(opcode as usize)?;
        let r1 = GeneralRegister::new(reg1);
        let operand = match id {
            Mnemonic::Jmp => indirect(r1),
            _ => r1.to_string(),
        };
        return Some(record(raw, addr, id, Format::I, 0, 0, 2, operand));
    }

    None
}

fn format_ii(w1: u32, raw: u64, addr: u32) -> Option<crate::instruction::DecodedInstruction> {
    let opcode = extract(w1, 5, 6);
    let reg2 = extract(w1, 11, 5);
    let imm_field = extract(w1, 0, 5);

    if reg2 != 0 && (0x10..=0x17).contains(&opcode) {
        const GROUP: [Mnemonic; 8] = [
            Mnemonic::Mov,
            Mnemonic::Satadd,
            Mnemonic::Add,
            Mnemonic::Cmp,
            Mnemonic::Shr,
            Mnemonic::Sar,
            Mnemonic::Shl,
            Mnemonic::Mulh,
        ];
        let id = GROUP[(opcode - 0x10) as usize];
        let r2 = GeneralRegister::new(reg2);
        let imm = match id {
            Mnemonic::Shr | Mnemonic::Sar | Mnemonic::Shl => imm_field as i32,
            _ => sext(imm_field, 5),
        };
        return Some(record(raw, addr, id, Format::Ii, 0, imm, 2, format!("{imm}, {r2}")));
    }

    if reg2 == 0 && (w1 >> 6) == 0x8 {
        let imm = ((w1 & 0x3F) << 1) as i32;
        return Some(record(raw, addr, Mnemonic::Callt, Format::Ii, 0, imm, 2, imm.to_string()));
    }

    None
}

fn format_iii(w1: u32, raw: u64, addr: u32) -> Option<crate::instruction::DecodedInstruction> {
    if extract(w1, 7, 4) != 0xB {
        return None;
    }
    let cond = Condition::from_bits(extract(w1, 0, 4));
    let disp_bits = (extract(w1, 11, 5) << 4) | (extract(w1, 4, 3) << 1);
    let disp = sext(disp_bits, 9);
    let target = (addr as i64 + disp as i64) as u32;
    Some(record(
        raw,
        addr,
        Mnemonic::Bcond(cond),
        Format::Iii,
        disp,
        0,
        2,
        hex_addr(target),
    ))
}

fn format_iv1(w1: u32, raw: u64, addr: u32) -> Option<crate::instruction::DecodedInstruction> {
    let opcode = extract(w1, 7, 4);
    let reg2 = extract(w1, 11, 5);
    let r2 = GeneralRegister::new(reg2);

    let (id, disp) = match opcode {
        6 => (Mnemonic::Sldb, extract(w1, 0, 7) as i32),
        7 => (Mnemonic::Sstb, extract(w1, 0, 7) as i32),
        8 => (Mnemonic::Sldh, (extract(w1, 0, 7) as i32) << 1),
        9 => (Mnemonic::Ssth, (extract(w1, 0, 7) as i32) << 1),
        0xA => {
            let is_store = extract(w1, 0, 1) == 1;
            let raw_disp = (extract(w1, 1, 6) as i32) << 1;
            (if is_store { Mnemonic::Sstw } else { Mnemonic::Sldw }, raw_disp)
        }
        _ => return None,
    };
    Some(record(raw, addr, id, Format::Iv1, disp, 0, 2, format!("{}, {r2}", disp_ep(disp))))
}

fn format_iv2(w1: u32, raw: u64, addr: u32) -> Option<crate::instruction::DecodedInstruction> {
    let opcode = extract(w1, 4, 7);
    let reg2 = extract(w1, 11, 5);
    let r2 = GeneralRegister::new(reg2);

    let (id, disp) = match opcode {
        6 => (Mnemonic::Sldbu, extract(w1, 0, 4) as i32),
        7 => (Mnemonic::Sldhu, (extract(w1, 0, 4) as i32) << 1),
        _ => return None,
    };
    Some(record(raw, addr, id, Format::Iv2, disp, 0, 2, format!("{}, {r2}", disp_ep(disp))))
}

pub(crate) fn try_decode(raw: u64, addr: u32) -> Option<crate::instruction::DecodedInstruction> {
    let w1 = word1(raw);
    format_i(w1, raw, addr)
        .or_else(|| format_ii(w1, raw, addr))
        .or_else(|| format_iii(w1, raw, addr))
        .or_else(|| format_iv1(w1, raw, addr))
        .or_else(|| format_iv2(w1, raw, addr))
}
