//! Shared operand-text formatting helpers used by the format decoders.
use crate::registers::GeneralRegister;

/// Renders an absolute branch/jump target as a zero-padded 6-hex-digit
/// address, e.g. `"0x001000"`.
pub fn hex_addr(addr: u32) -> String {
    format!("0x{addr:06x}")
}

/// Renders an unsigned immediate as `0x...` with no padding.
pub fn hex_imm(imm: u32) -> String {
    format!("0x{imm:x}")
}

/// Renders `<disp>[reg]`, the base+displacement addressing mode used by
/// every load/store format.
pub fn disp_reg(disp: i32, reg: GeneralRegister) -> String {
    format!("{disp}[{reg}]")
}

/// Renders `<disp>[ep]`, the implicit element-pointer addressing mode used
/// by the short format-IV loads/stores.
pub fn disp_ep(disp: i32) -> String {
    format!("{disp}[ep]")
}

/// Renders `[reg]`, plain register-indirect addressing.
pub fn indirect(reg: GeneralRegister) -> String {
    format!("[{reg}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_addr_is_zero_padded() {
        assert_eq!(hex_addr(0x100), "0x000100");
    }

    #[test]
    fn disp_reg_format() {
        assert_eq!(disp_reg(-4, GeneralRegister::new(3)), "-4[r3]");
    }

    #[test]
    fn indirect_format() {
        assert_eq!(indirect(GeneralRegister::new(5)), "[r5]");
    }
}
