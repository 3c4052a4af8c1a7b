use std::{fmt::Write as _, fs, io, path::Path};

use crate::{jar::types::metadata::ClassSummary, workspace::Version};

pub fn disassembly_dump_name(version: Version, class: &str) -> String {
    format!("bytecode_{}_{}.txt", version, class)
}

pub fn method_dump_name(version: Version, class: &str) -> String {
    format!("bytecode_{}_{}_methods.txt", version, class)
}

/// Full disassembly of one class, next to the jar it came from.
pub fn write_disassembly_dump(
    dir: &Path,
    version: Version,
    class: &str,
    text: &str,
) -> io::Result<()> {
    fs::write(dir.join(disassembly_dump_name(version, class)), text)
}

/// The method summary dump: one line per signature, mapped refs indented
/// below it.
pub fn write_method_dump(dir: &Path, version: Version, summary: &ClassSummary) -> io::Result<()> {
    fs::write(
        dir.join(method_dump_name(version, summary.simple_name())),
        method_dump_text(summary),
    )
}

fn method_dump_text(summary: &ClassSummary) -> String {
    let mut out = String::new();
    for (signature, refs) in &summary.methods {
        let _ = writeln!(out, "{}", signature);
        for mapping_ref in refs {
            let _ = writeln!(out, "\t{}", mapping_ref);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::jar::types::methods::{MappingRef, MappingRefKind};

    fn sample_summary() -> ClassSummary {
        let mut methods = BTreeMap::new();
        methods.insert(
            "getSimpleCommandMap()Lorg/bukkit/command/SimpleCommandMap;".to_string(),
            vec![MappingRef::new(
                MappingRefKind::Method,
                "net/minecraft/server/MinecraftServer.getCommands:()Lnet/minecraft/commands/Commands;",
            )],
        );
        methods.insert(
            "hook(Ljava/lang/Object;)V".to_string(),
            Vec::new(),
        );
        ClassSummary {
            class_name: "dev/jorel/commandapi/nms/NMS_1_20_R4".into(),
            methods,
        }
    }

    #[test]
    fn dump_names_embed_version_and_class() {
        let version: Version = "1.20.6".parse().unwrap();
        assert_eq!(
            disassembly_dump_name(version, "NMS_1_20_R4"),
            "bytecode_1.20.6_NMS_1_20_R4.txt"
        );
        assert_eq!(
            method_dump_name(version, "NMS_1_20_R4"),
            "bytecode_1.20.6_NMS_1_20_R4_methods.txt"
        );
    }

    #[test]
    fn writes_signatures_with_indented_refs() {
        let dir = tempfile::tempdir().unwrap();
        let version: Version = "1.20.6".parse().unwrap();
        write_method_dump(dir.path(), version, &sample_summary()).unwrap();

        let text = fs::read_to_string(
            dir.path().join("bytecode_1.20.6_NMS_1_20_R4_methods.txt"),
        )
        .unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "getSimpleCommandMap()Lorg/bukkit/command/SimpleCommandMap;",
                "\tMethod net/minecraft/server/MinecraftServer.getCommands:()Lnet/minecraft/commands/Commands;",
                "hook(Ljava/lang/Object;)V",
            ]
        );
    }
}
