//! The closed mnemonic enumeration and its printable spellings.
use core::fmt;

use crate::condition::Condition;

/// Identifies which instruction was decoded. Conditional branches carry
/// their [`Condition`] directly rather than going through the static text
/// table, since their mnemonic is synthesized as `b` + suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    /// Conditional branch; prints as `b` followed by the condition suffix.
    Bcond(Condition),
    /// [`mov`](crate::format::Format::I)
    Mov,
    /// [`not`](crate::format::Format::I)
    Not,
    /// [`divh`](crate::format::Format::I)
    Divh,
    /// [`jmp`](crate::format::Format::I)
    Jmp,
    /// [`satsubr`](crate::format::Format::I)
    Satsubr,
    /// [`satsub`](crate::format::Format::I)
    Satsub,
    /// [`satadd`](crate::format::Format::I)
    Satadd,
    /// [`mulh`](crate::format::Format::I)
    Mulh,
    /// [`or`](crate::format::Format::I)
    Or,
    /// [`xor`](crate::format::Format::I)
    Xor,
    /// [`and`](crate::format::Format::I)
    And,
    /// [`tst`](crate::format::Format::I)
    Tst,
    /// [`subr`](crate::format::Format::I)
    Subr,
    /// [`sub`](crate::format::Format::I)
    Sub,
    /// [`add`](crate::format::Format::I)
    Add,
    /// [`cmp`](crate::format::Format::I)
    Cmp,
    /// [`sld.b`](crate::format::Format::IV1)
    Sldb,
    /// [`sst.b`](crate::format::Format::IV1)
    Sstb,
    /// [`sld.h`](crate::format::Format::IV1)
    Sldh,
    /// [`sst.h`](crate::format::Format::IV1)
    Ssth,
    /// [`sld.w`](crate::format::Format::IV1)
    Sldw,
    /// [`sst.w`](crate::format::Format::IV1)
    Sstw,
    /// [`addi`](crate::format::Format::VI)
    Addi,
    /// [`movea`](crate::format::Format::VI)
    Movea,
    /// [`movhi`](crate::format::Format::VI)
    Movhi,
    /// [`satsubi`](crate::format::Format::VI)
    Satsubi,
    /// [`ori`](crate::format::Format::VI)
    Ori,
    /// [`xori`](crate::format::Format::VI)
    Xori,
    /// [`andi`](crate::format::Format::VI)
    Andi,
    /// [`mulhi`](crate::format::Format::VI)
    Mulhi,
    /// [`ld.b`](crate::format::Format::VII)
    Ldb,
    /// [`ld.h`](crate::format::Format::VII)
    Ldh,
    /// [`ld.w`](crate::format::Format::VII)
    Ldw,
    /// [`st.b`](crate::format::Format::VII)
    Stb,
    /// [`st.h`](crate::format::Format::VII)
    Sth,
    /// [`st.w`](crate::format::Format::VII)
    Stw,
    /// [`ld.bu`](crate::format::Format::VII)
    Ldbu,
    /// [`ld.hu`](crate::format::Format::VII)
    Ldhu,
    /// [`ld.dw`](crate::format::Format::XIV)
    Lddw,
    /// [`sld.bu`](crate::format::Format::IV2)
    Sldbu,
    /// [`sld.hu`](crate::format::Format::IV2)
    Sldhu,
    /// [`st.dw`](crate::format::Format::XIV)
    Stdw,
    /// [`mulu`](crate::format::Format::XI)
    Mulu,
    /// [`mac`](crate::format::Format::XI)
    Mac,
    /// [`macu`](crate::format::Format::XI)
    Macu,
    /// [`adf`](crate::format::Format::XI)
    Adf,
    /// [`sbf`](crate::format::Format::XI)
    Sbf,
    /// [`bins`](crate::format::Format::IX)
    Bins,
    /// [`bsh`](crate::format::Format::XII)
    Bsh,
    /// [`bsw`](crate::format::Format::XII)
    Bsw,
    /// [`cmov`](crate::format::Format::XI)
    Cmov,
    /// [`hsh`](crate::format::Format::XII)
    Hsh,
    /// [`hsw`](crate::format::Format::XII)
    Hsw,
    /// [`rotl`](crate::format::Format::VII)
    Rotl,
    /// [`sar`](crate::format::Format::IX)
    Sar,
    /// [`sasf`](crate::format::Format::IX)
    Sasf,
    /// [`setf`](crate::format::Format::IX)
    Setf,
    /// [`shl`](crate::format::Format::IX)
    Shl,
    /// [`shr`](crate::format::Format::IX)
    Shr,
    /// [`sxb`](crate::format::Format::I)
    Sxb,
    /// [`sxh`](crate::format::Format::I)
    Sxh,
    /// [`zxb`](crate::format::Format::I)
    Zxb,
    /// [`zxh`](crate::format::Format::I)
    Zxh,
    /// [`sch0l`](crate::format::Format::IX)
    Sch0l,
    /// [`sch0r`](crate::format::Format::IX)
    Sch0r,
    /// [`sch1l`](crate::format::Format::IX)
    Sch1l,
    /// [`sch1r`](crate::format::Format::IX)
    Sch1r,
    /// [`divhu`](crate::format::Format::XI)
    Divhu,
    /// [`divu`](crate::format::Format::XI)
    Divu,
    /// [`divq`](crate::format::Format::XI)
    Divq,
    /// [`divqu`](crate::format::Format::XI)
    Divqu,
    /// [`div`](crate::format::Format::XI)
    Div,
    /// [`mul`](crate::format::Format::XI)
    Mul,
    /// [`loop`](crate::format::Format::VII)
    Loop,
    /// [`set1`](crate::format::Format::VIII)
    Set1,
    /// [`not1`](crate::format::Format::VIII)
    Not1,
    /// [`clr1`](crate::format::Format::VIII)
    Clr1,
    /// [`tst1`](crate::format::Format::VIII)
    Tst1,
    /// [`jarl`](crate::format::Format::V)
    Jarl,
    /// [`jr`](crate::format::Format::V)
    Jr,
    /// [`callt`](crate::format::Format::II)
    Callt,
    /// [`caxi`](crate::format::Format::XI)
    Caxi,
    /// [`cll`](crate::format::Format::X)
    Cll,
    /// [`ctret`](crate::format::Format::X)
    Ctret,
    /// [`di`](crate::format::Format::X)
    Di,
    /// [`dispose`](crate::format::Format::XIII)
    Dispose,
    /// [`ei`](crate::format::Format::X)
    Ei,
    /// [`eiret`](crate::format::Format::X)
    Eiret,
    /// [`feret`](crate::format::Format::X)
    Feret,
    /// [`fetrap`](crate::format::Format::I)
    Fetrap,
    /// [`halt`](crate::format::Format::X)
    Halt,
    /// [`ldsr`](crate::format::Format::IX)
    Ldsr,
    /// [`ldl.w`](crate::format::Format::VII)
    Ldlw,
    /// [`nop`](crate::format::Format::I)
    Nop,
    /// [`popsp`](crate::format::Format::XI)
    Popsp,
    /// [`prepare`](crate::format::Format::XIII)
    Prepare,
    /// [`pushsp`](crate::format::Format::XI)
    Pushsp,
    /// [`rie`](crate::format::Format::I)
    Rie,
    /// [`snooze`](crate::format::Format::X)
    Snooze,
    /// [`stsr`](crate::format::Format::IX)
    Stsr,
    /// [`stc.w`](crate::format::Format::VII)
    Stcw,
    /// [`switch`](crate::format::Format::I)
    Switch,
    /// [`synce`](crate::format::Format::I)
    Synce,
    /// [`synci`](crate::format::Format::I)
    Synci,
    /// [`syncm`](crate::format::Format::I)
    Syncm,
    /// [`syncp`](crate::format::Format::I)
    Syncp,
    /// [`syscall`](crate::format::Format::X)
    Syscall,
    /// [`trap`](crate::format::Format::X)
    Trap,
    /// [`cache`](crate::format::Format::X)
    Cache,
    /// [`pref`](crate::format::Format::X)
    Pref,
}

impl Mnemonic {
    /// The exact text printed for this mnemonic, as a static spelling for
    /// every variant except [`Mnemonic::Bcond`], which is synthesized.
    fn static_text(self) -> Option<&'static str> {
        use Mnemonic::*;
        let s: &'static str = match self {
            Bcond(_) => return None,
            Mov => "mov",
            Not => "not",
            Divh => "divh",
            Jmp => "jmp",
            Satsubr => "satsubr",
            Satsub => "satsub",
            Satadd => "satadd",
            Mulh => "mulh",
            Or => "or",
            Xor => "xor",
            And => "and",
            Tst => "tst",
            Subr => "subr",
            Sub => "sub",
            Add => "add",
            Cmp => "cmp",
            Sldb => "sld.b",
            Sstb => "sst.b",
            Sldh => "sld.h",
            Ssth => "sst.h",
            Sldw => "sld.w",
            Sstw => "sst.w",
            Addi => "addi",
            Movea => "movea",
            Movhi => "movhi",
            Satsubi => "satsubi",
            Ori => "ori",
            Xori => "xori",
            Andi => "andi",
            Mulhi => "mulhi",
            Ldb => "ld.b",
            Ldh => "ld.h",
            Ldw => "ld.w",
            Stb => "st.b",
            Sth => "st.h",
            Stw => "st.w",
            Ldbu => "ld.bu",
            Ldhu => "ld.hu",
            Lddw => "ld.dw",
            Sldbu => "sld.bu",
            Sldhu => "sld.hu",
            Stdw => "st.dw",
            Mulu => "mulu",
            Mac => "mac",
            Macu => "macu",
            Adf => "adf",
            Sbf => "sbf",
            Bins => "bins",
            Bsh => "bsh",
            Bsw => "bsw",
            Cmov => "cmov",
            Hsh => "hsh",
            Hsw => "hsw",
            Rotl => "rotl",
            Sar => "sar",
            Sasf => "sasf",
            Setf => "setf",
            Shl => "shl",
            Shr => "shr",
            Sxb => "sxb",
            Sxh => "sxh",
            Zxb => "zxb",
            Zxh => "zxh",
            Sch0l => "sch0l",
            Sch0r => "sch0r",
            Sch1l => "sch1l",
            Sch1r => "sch1r",
            Divhu => "divhu",
            Divu => "divu",
            Divq => "divq",
            Divqu => "divqu",
            Div => "div",
            Mul => "mul",
            Loop => "loop",
            Set1 => "set1",
            Not1 => "not1",
            Clr1 => "clr1",
            Tst1 => "tst1",
            Jarl => "jarl",
            Jr => "jr",
            Callt => "callt",
            Caxi => "caxi",
            Cll => "cll",
            Ctret => "ctret",
            Di => "di",
            Dispose => "dispose",
            Ei => "ei",
            Eiret => "eiret",
            Feret => "feret",
            Fetrap => "fetrap",
            Halt => "halt",
            Ldsr => "ldsr",
            Ldlw => "ldl.w",
            Nop => "nop",
            Popsp => "popsp",
            Prepare => "prepare",
            Pushsp => "pushsp",
            Rie => "rie",
            Snooze => "snooze",
            Stsr => "stsr",
            Stcw => "stc.w",
            Switch => "switch",
            Synce => "synce",
            Synci => "synci",
            Syncm => "syncm",
            Syncp => "syncp",
            Syscall => "syscall",
            Trap => "trap",
            Cache => "cache",
            Pref => "pref",
        };
        Some(s)
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.static_text() {
            Some(s) => write!(f, "{s}"),
            None => match self {
                Mnemonic::Bcond(cond) => write!(f, "b{cond}"),
                _ => unreachable!(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_mnemonics() {
        assert_eq!(Mnemonic::Ldb.to_string(), "ld.b");
        assert_eq!(Mnemonic::Stdw.to_string(), "st.dw");
        assert_eq!(Mnemonic::Sldhu.to_string(), "sld.hu");
        assert_eq!(Mnemonic::Ldlw.to_string(), "ldl.w");
        assert_eq!(Mnemonic::Stcw.to_string(), "stc.w");
    }

    #[test]
    fn plain_mnemonics() {
        assert_eq!(Mnemonic::Mov.to_string(), "mov");
        assert_eq!(Mnemonic::Addi.to_string(), "addi");
    }

    #[test]
    fn conditional_branch_mnemonic() {
        assert_eq!(Mnemonic::Bcond(Condition::from_bits(5)).to_string(), "br");
        assert_eq!(Mnemonic::Bcond(Condition::from_bits(2)).to_string(), "be");
    }
}
