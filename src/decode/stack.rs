//! Format XIII — stack-frame setup (`prepare`) and teardown (`dispose`).
use crate::bits::{extract, push_word, sext, word1, word2};
use crate::decode::{record, Attempt};
use crate::format::Format;
use crate::mnemonic::Mnemonic;
use crate::registers::{format_register_list, GeneralRegister};

/// `dispose`'s opcode, as a 10-bit value over word1 bits 6..15.
const DISPOSE_OPCODE: u32 = 0b11001;

/// `prepare`'s opcode, as a 10-bit value over word1 bits 6..15. This is
/// numerically the same as format V's 5-bit `0x1E` long-jump opcode, but
/// format XIII's opcode field is twice as wide (bits 6..15 vs. format V's
/// bits 6..10), so the two don't collide in practice: format V also
/// requires reg2 != 0 (`6..10==0x1E` with reg2==0 is JR, not JARL), and
/// the two families are tried in dispatch order, not merged.
const PREPARE_OPCODE: u32 = 0b11110;

fn decode_list(w1: u32, w2: u32) -> u32 {
    let list_hi = extract(w1, 11, 5);
    let list_lo = extract(w2, 5, 6);
    let list_extra = extract(w2, 0, 1);
    list_hi | (list_lo << 5) | (list_extra << 11)
}

pub(crate) fn try_decode_xiii(raw: u64, addr: u32, extra: Option<u16>) -> Attempt {
    let w1 = word1(raw);
    let w2 = word2(raw);
    let opcode = extract(w1, 6, 10);
    let imm5 = extract(w1, 0, 5);
    let list = decode_list(w1, w2);
    let list_text = format_register_list(list);

    if opcode == DISPOSE_OPCODE {
        let sub_r1 = extract(w2, 11, 5);
        let operand = if sub_r1 == 0 {
            format!("{imm5}, {list_text}")
        } else {
            format!("{imm5}, {list_text}, {}", GeneralRegister::new(sub_r1))
        };
        return Attempt::Matched(record(raw, addr, Mnemonic::Dispose, Format::Xiii, 0, imm5 as i32, 4, operand));
    }

    if opcode != PREPARE_OPCODE {
        return Attempt::NoMatch;
    }

    let ff = extract(w2, 1, 2);
    if ff == 0 {
        let operand = format!("{list_text}, {imm5}, sp");
        return Attempt::Matched(record(raw, addr, Mnemonic::Prepare, Format::Xiii, 0, imm5 as i32, 4, operand));
    }

    let extra = match extra {
        Some(extra) => extra,
        None => return Attempt::NeedMoreBytes,
    };
    let raw6 = push_word(raw, 3, extra);
    let imm: i32 = match ff {
        1 => sext(extra as u32, 16),
        2 => (extra as i32) << 16,
        3 => extra as i32,
        _ => unreachable!(),
    };
    let operand = format!("{list_text}, {imm5}, {imm}");
    Attempt::Matched(record(raw6, addr, Mnemonic::Prepare, Format::Xiii, 0, imm, 6, operand))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::push_word as pw;

    fn raw2(w1: u16, w2: u16) -> u64 {
        pw(pw(0, 1, w1), 2, w2)
    }

    #[test]
    fn dispose_no_reg() {
        let w1 = (DISPOSE_OPCODE as u16) << 6 | 5; // imm5=5
        let w2 = 0b11u16 << 5; // list_lo bits -> some list entries
        match try_decode_xiii(raw2(w1, w2), 0, None) {
            Attempt::Matched(inst) => {
                assert_eq!(inst.mnemonic_text, "dispose");
                assert!(inst.operand_text.starts_with("5, {"));
            }
            _ => panic!("expected match"),
        }
    }

    #[test]
    fn prepare_ff0() {
        let w1 = (PREPARE_OPCODE as u16) << 6 | 3;
        match try_decode_xiii(raw2(w1, 0), 0, None) {
            Attempt::Matched(inst) => {
                assert_eq!(inst.mnemonic_text, "prepare");
                assert_eq!(inst.byte_size, 4);
                assert!(inst.operand_text.ends_with(", 3, sp"));
            }
            _ => panic!("expected match"),
        }
    }

    #[test]
    fn prepare_ff1_needs_more_bytes() {
        let w1 = (PREPARE_OPCODE as u16) << 6;
        let w2 = 2u16; // ff=1
        match try_decode_xiii(raw2(w1, w2), 0, None) {
            Attempt::NeedMoreBytes => {}
            _ => panic!("expected NeedMoreBytes"),
        }
    }

    #[test]
    fn prepare_ff1_with_extra() {
        let w1 = (PREPARE_OPCODE as u16) << 6;
        let w2 = 2u16; // ff=1
        match try_decode_xiii(raw2(w1, w2), 0, Some(0xFFF0)) {
            Attempt::Matched(inst) => {
                assert_eq!(inst.byte_size, 6);
                assert_eq!(inst.imm, -16);
            }
            _ => panic!("expected match"),
        }
    }
}
