mod util;

use util::{assert_decodes, half, word4};
use v850dis::decode::decode;
use v850dis::instruction::DecodeError;

#[test]
fn nop() {
    assert_decodes(&half(0x0000), 0x1000, "nop", "", 2);
}

#[test]
fn mov_register_to_register() {
    // opcode 4 (mov), reg1=1, reg2=2
    let w1 = (4u16 << 5) | (2u16 << 11) | 1u16;
    assert_decodes(&half(w1), 0, "mov", "r1, r2", 2);
}

#[test]
fn jmp_indirect() {
    let w1 = 3u16; // opcode 0 (jmp), reg1=3, reg2=0
    assert_decodes(&half(w1), 0, "jmp", "[r3]", 2);
}

#[test]
fn conditional_branch_targets_absolute_address() {
    // matches the illustrative encoding from the original architecture
    // notes: cond `r`, zero displacement, at address 0x100.
    assert_decodes(&[0x85, 0x05], 0x100, "br", "0x000100", 2);
}

#[test]
fn short_load_byte_via_element_pointer() {
    let w1 = (6u16 << 7) | (3u16 << 11) | 5; // opcode 6 (sld.b), reg2=3, disp=5
    assert_decodes(&half(w1), 0, "sld.b", "5[ep], r3", 2);
}

#[test]
fn immediate_add_register_form() {
    let w1 = (15u16 << 5) | (2u16 << 11) | 1; // addi, reg1=1, reg2=2
    let w2 = 10u16;
    assert_decodes(&word4(w1, w2), 0, "addi", "10, r1, r2", 4);
}

#[test]
fn long_jump_register_link() {
    let w1 = (0x1Eu16 << 6) | (3u16 << 11); // format V, reg2=3
    assert_decodes(&word4(w1, 0), 0x2000, "jarl", "0x002000, r3", 4);
}

#[test]
fn load_byte_format_vii() {
    let w1 = (0x38u16 << 5) | 3; // ld.b, reg1=3, reg2=0
    let w2 = 8u16;
    assert_decodes(&word4(w1, w2), 0, "ld.b", "8[r3], r0", 4);
}

#[test]
fn unrecognized_pattern_errors() {
    // opcode 10 (bits 5-10), reg1 = reg2 = 0: claimed by no format.
    let err = decode(&[0x40, 0x01, 0x00, 0x00, 0x00, 0x00], 0).unwrap_err();
    assert_eq!(err, DecodeError::Unrecognized);
}

#[test]
fn empty_input_is_insufficient_bytes() {
    assert_eq!(decode(&[], 0), Err(DecodeError::InsufficientBytes));
    assert_eq!(decode(&[0x00], 0), Err(DecodeError::InsufficientBytes));
}

#[test]
fn byte_size_is_always_one_of_two_four_six() {
    let addi = word4((15u16 << 5) | (2u16 << 11) | 1, 1);
    let ldb = word4((0x38u16 << 5) | 1, 0);
    let vectors: [(&[u8], u32); 4] =
        [(&[0x00, 0x00], 0), (&[0x85, 0x05], 0x100), (&addi, 0), (&ldb, 0)];
    for (bytes, addr) in vectors {
        let inst = decode(bytes, addr).unwrap();
        assert!(matches!(inst.byte_size, 2 | 4 | 6));
    }
}
