//! Detects Minecraft-mapping breakages in the CommandAPI NMS layer.
//!
//! A working directory holds one folder per Minecraft version (`X.Y.Z`),
//! each containing a dated CommandAPI release jar. Every jar's
//! `dev/jorel/commandapi/nms` classes are summarized (declared methods
//! plus the `net/minecraft/` symbols their bytecode references) and the
//! summaries are compared across versions. A method whose mapped
//! references differ is one that needs a version-specific implementation.

pub mod diff;
pub mod jar;
pub mod report;
pub mod types;
pub mod workspace;

pub use diff::{compare_versions, DiffReport, Divergence};
pub use jar::{
    extract_class_summary, extract_version_bytecode, list_package_classes, ClassSummary,
    MappingRef, MappingRefKind, VersionBytecode, MAPPING_PREFIX, NMS_PACKAGE,
};
pub use workspace::{clean_dump_files, collect_version_dirs, find_release_jar, Version};
