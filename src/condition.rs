//! Condition codes used by conditional branches and the `Bcond`-shaped
//! instructions in formats III, VII, XI and XII.
use core::fmt;

/// One of the 16 four-bit condition codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Overflow (`v`).
    V,
    /// Carry/borrow, less-than unsigned (`l`).
    L,
    /// Equal/zero (`e`).
    E,
    /// Not-higher, less-or-equal unsigned (`nh`).
    Nh,
    /// Sign negative (`n`).
    N,
    /// Always (`r`).
    R,
    /// Less-than signed (`lt`).
    Lt,
    /// Less-or-equal signed (`le`).
    Le,
    /// No overflow (`nv`).
    Nv,
    /// No carry, greater-or-equal unsigned (`nl`).
    Nl,
    /// Not equal (`ne`).
    Ne,
    /// Higher unsigned (`h`).
    H,
    /// Positive, non-negative (`p`).
    P,
    /// Saturated (`sa`).
    Sa,
    /// Greater-or-equal signed (`ge`).
    Ge,
    /// Greater-than signed (`gt`).
    Gt,
}

const SUFFIXES: [&str; 16] = [
    "v", "l", "e", "nh", "n", "r", "lt", "le", "nv", "nl", "ne", "h", "p", "sa", "ge", "gt",
];

const VARIANTS: [Condition; 16] = [
    Condition::V,
    Condition::L,
    Condition::E,
    Condition::Nh,
    Condition::N,
    Condition::R,
    Condition::Lt,
    Condition::Le,
    Condition::Nv,
    Condition::Nl,
    Condition::Ne,
    Condition::H,
    Condition::P,
    Condition::Sa,
    Condition::Ge,
    Condition::Gt,
];

impl Condition {
    /// Decodes a 4-bit condition field. The field is total over `0..16`, so
    /// this never fails.
    pub const fn from_bits(bits: u32) -> Self {
        VARIANTS[(bits & 0xF) as usize]
    }

    /// The two-letter (occasionally one-letter) suffix appended to `b` to
    /// form a conditional-branch mnemonic.
    pub const fn suffix(self) -> &'static str {
        SUFFIXES[self as usize]
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_all_16_codes() {
        for bits in 0u32..16 {
            let cond = Condition::from_bits(bits);
            assert_eq!(cond.suffix(), SUFFIXES[bits as usize]);
        }
    }

    #[test]
    fn masks_high_bits() {
        assert_eq!(Condition::from_bits(0x15).suffix(), Condition::from_bits(5).suffix());
    }

    #[test]
    fn branch_mnemonic_prefix() {
        assert_eq!(format!("b{}", Condition::from_bits(5)), "br");
        assert_eq!(format!("b{}", Condition::from_bits(2)), "be");
    }
}
