//! Jar scanning and bytecode summary extraction.

pub mod extractor;
pub mod introspection;
pub mod scanner;

// Re-export commonly used analysis functionality
pub use extractor::{extract_class_summary, extract_version_bytecode};
pub use introspection::{find_class_name, find_class_ref, find_member_ref, instr_mapping_ref};
pub use scanner::{class_entry_simple_name, list_package_classes, MAPPING_PREFIX, NMS_PACKAGE};
