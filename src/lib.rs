//! Core decoding engine for the V850 instruction set.
//!
//! Given a little-endian byte stream and a load address, [`decode::decode`]
//! classifies the instruction at the front of the stream, extracts its
//! operands, and renders a printable mnemonic/operand pair. The encoding is
//! variable length (2, 4 or 6 bytes) and is carved into fourteen cooperating
//! "formats"; see [`format::Format`] for the full list.
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod bits;
pub mod condition;
pub mod decode;
pub mod format;
pub mod instruction;
pub mod mnemonic;
pub mod operand;
pub mod registers;
