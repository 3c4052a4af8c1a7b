//! Type definitions for the extracted bytecode summaries.

pub mod metadata;
pub mod methods;

// Re-export commonly used types for convenience
pub use metadata::{ClassSummary, VersionBytecode};
pub use methods::{MappingRef, MappingRefKind};
