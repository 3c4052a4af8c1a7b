//! Writing of per-version dump files.

pub mod dumps;

pub use dumps::{
    disassembly_dump_name, method_dump_name, write_disassembly_dump, write_method_dump,
};
