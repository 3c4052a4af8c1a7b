//! Core classfile operations.

pub mod disassembly;

pub use disassembly::{disassemble_class, DisassemblyError};
