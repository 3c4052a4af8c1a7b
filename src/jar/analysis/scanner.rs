use std::io::{Read, Seek};

use krakatau2::zip::ZipArchive;

/// Package whose classes get compared across versions. Every version of
/// this package is compiled from the same sources, so the emitted class
/// set should match between versions.
pub const NMS_PACKAGE: &str = "dev/jorel/commandapi/nms";

/// Prefix of remapped symbols. A method whose bytecode references these is
/// the one that breaks when Minecraft mappings shift between versions.
pub const MAPPING_PREFIX: &str = "net/minecraft/";

/// Simple class name for an archive entry directly inside `package`.
/// Entries in subpackages don't count; only the package directory itself
/// holds the compared classes.
pub fn class_entry_simple_name<'a>(entry: &'a str, package: &str) -> Option<&'a str> {
    let package = package.trim_end_matches('/');
    let rest = entry.strip_prefix(package)?.strip_prefix('/')?;
    let name = rest.strip_suffix(".class")?;
    if name.is_empty() || name.contains('/') {
        return None;
    }
    Some(name)
}

/// All class entries of `package` in the archive, as
/// `(entry name, simple name)` pairs, sorted by entry name.
pub fn list_package_classes<R: Read + Seek>(
    zip: &mut ZipArchive<R>,
    package: &str,
) -> Vec<(String, String)> {
    let mut classes: Vec<(String, String)> = zip
        .file_names()
        .filter_map(|entry| {
            class_entry_simple_name(entry, package)
                .map(|simple| (entry.to_string(), simple.to_string()))
        })
        .collect();
    classes.sort();
    classes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_classes_directly_inside_the_package() {
        assert_eq!(
            class_entry_simple_name("dev/jorel/commandapi/nms/NMS_1_20_R4.class", NMS_PACKAGE),
            Some("NMS_1_20_R4")
        );
        // Trailing slash on the package must not matter.
        assert_eq!(
            class_entry_simple_name("dev/jorel/commandapi/nms/NMS.class", "dev/jorel/commandapi/nms/"),
            Some("NMS")
        );
    }

    #[test]
    fn rejects_subpackages_and_foreign_entries() {
        assert_eq!(
            class_entry_simple_name("dev/jorel/commandapi/nms/inner/Helper.class", NMS_PACKAGE),
            None
        );
        assert_eq!(
            class_entry_simple_name("dev/jorel/commandapi/CommandAPI.class", NMS_PACKAGE),
            None
        );
        assert_eq!(
            class_entry_simple_name("dev/jorel/commandapi/nms/readme.txt", NMS_PACKAGE),
            None
        );
        assert_eq!(
            class_entry_simple_name("dev/jorel/commandapi/nms/.class", NMS_PACKAGE),
            None
        );
        assert_eq!(class_entry_simple_name("META-INF/MANIFEST.MF", NMS_PACKAGE), None);
    }
}
