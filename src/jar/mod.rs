//! JAR analysis for CommandAPI NMS bytecode comparison
//!
//! Reads a release jar in place (no extraction to disk) and turns each
//! class of the NMS package into a bytecode summary that can be compared
//! across Minecraft versions. Organized into sub-modules:
//!
//! - `analysis`: archive scanning, constant-pool introspection, extraction
//! - `core`: classfile disassembly
//! - `io`: dump files written next to each version's jar
//! - `types`: summaries and mapped-reference types

pub mod analysis;
pub mod core;
pub mod io;
pub mod types;

// Re-export the most commonly used functionality for convenience
pub use analysis::{
    extract_class_summary, extract_version_bytecode, list_package_classes, MAPPING_PREFIX,
    NMS_PACKAGE,
};
pub use core::{disassemble_class, DisassemblyError};
pub use io::{write_disassembly_dump, write_method_dump};
pub use types::{ClassSummary, MappingRef, MappingRefKind, VersionBytecode};
