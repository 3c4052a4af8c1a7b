use std::{
    collections::BTreeMap,
    io::{Read, Seek},
};

use anyhow::Context;
use krakatau2::{
    lib::{
        classfile::{
            self,
            attrs::{AttrBody, Attribute},
            cpool::ConstPool,
            parse::Class,
        },
        disassemble::refprinter::RefPrinter,
        parse_utf8, ParserOptions,
    },
    zip::ZipArchive,
};
use tracing::warn;

use crate::{
    jar::{
        analysis::{introspection::instr_mapping_ref, scanner::list_package_classes},
        types::metadata::{ClassSummary, VersionBytecode},
    },
    types::{AnalysisEvent, Stage, StageProgress},
    workspace::Version,
};

const PARSER_OPTIONS: ParserOptions = ParserOptions {
    no_short_code_attr: true,
};

/// Walk every class of `package` in the jar and build its bytecode summary.
///
/// `report_progress` feeds whatever progress display the caller runs;
/// `on_class` sees each parsed class once, which is where the CLI hooks in
/// its disassembly dumps without this function knowing about files.
pub fn extract_version_bytecode<R: Read + Seek>(
    zip: &mut ZipArchive<R>,
    version: Version,
    jar_name: &str,
    package: &str,
    mapping_prefix: &str,
    mut report_progress: impl FnMut(AnalysisEvent),
    mut on_class: impl FnMut(&str, &Class<'_>),
) -> anyhow::Result<VersionBytecode> {
    report_progress(Stage::ListingClasses.into());
    let entries = list_package_classes(zip, package);

    report_progress(AnalysisEvent {
        stage: Stage::ExtractingBytecode,
        progress: StageProgress::Percentage(0.0),
    });

    let mut classes = BTreeMap::new();
    let mut data = Vec::new();

    for (idx, (entry_name, simple_name)) in entries.iter().enumerate() {
        let mut file = zip
            .by_name(entry_name)
            .with_context(|| format!("missing archive entry: {}", entry_name))?;
        data.clear();
        file.read_to_end(&mut data)?;
        drop(file);

        let Ok(class) = classfile::parse(&data, PARSER_OPTIONS) else {
            warn!("{}: failed to parse class file, skipping", entry_name);
            continue;
        };

        on_class(simple_name, &class);

        let Some(summary) = extract_class_summary(&class, mapping_prefix) else {
            warn!("{}: class name missing from constant pool, skipping", entry_name);
            continue;
        };
        classes.insert(simple_name.clone(), summary);

        let progress = (idx + 1) as f32 / entries.len() as f32;
        report_progress(AnalysisEvent {
            stage: Stage::ExtractingBytecode,
            progress: StageProgress::Percentage(progress),
        });
    }

    report_progress(AnalysisEvent {
        stage: Stage::ExtractingBytecode,
        progress: StageProgress::Done,
    });

    Ok(VersionBytecode {
        version,
        jar_name: jar_name.to_string(),
        classes,
    })
}

/// Summarize one class: declared methods and, per method, the mapped
/// symbols its bytecode references. Constructors and static initializers
/// are skipped; only the NMS hook surface matters for the comparison.
pub fn extract_class_summary(class: &Class<'_>, mapping_prefix: &str) -> Option<ClassSummary> {
    let rp = class_refprinter(&class.cp, &class.attrs);
    let class_name = class.cp.clsutf(class.this).and_then(parse_utf8)?;

    let mut methods = BTreeMap::new();
    for method in &class.methods {
        let Some(name) = class.cp.utf8(method.name).and_then(parse_utf8) else {
            continue;
        };
        let Some(desc) = class.cp.utf8(method.desc).and_then(parse_utf8) else {
            continue;
        };
        if name == "<init>" || name == "<clinit>" {
            continue;
        }
        let signature = format!("{}{}", name, desc);

        // Abstract hooks have no code attribute; they still belong to the
        // class surface, with nothing to reference.
        let code = method.attrs.iter().find_map(|attr| match &attr.body {
            AttrBody::Code((code, _)) => Some(code),
            _ => None,
        });

        let mut refs = Vec::new();
        if let Some(code) = code {
            for (_pos, ix) in &code.bytecode.0 {
                let Some(mapping_ref) = instr_mapping_ref(&rp, ix) else {
                    continue;
                };
                if mapping_ref.symbol.contains(mapping_prefix) {
                    refs.push(mapping_ref);
                }
            }
        }
        methods.insert(signature, refs);
    }

    Some(ClassSummary {
        class_name,
        methods,
    })
}

// The RefPrinter needs the BootstrapMethods and InnerClasses attrs to
// resolve some constants.
fn class_refprinter<'a>(cp: &ConstPool<'a>, attrs: &'a [Attribute<'a>]) -> RefPrinter<'a> {
    let bstable = attrs.iter().find_map(|attr| match &attr.body {
        AttrBody::BootstrapMethods(v) => Some(v.as_ref()),
        _ => None,
    });
    let inner_classes = attrs.iter().find_map(|attr| match &attr.body {
        AttrBody::InnerClasses(v) => Some(v.as_ref()),
        _ => None,
    });
    RefPrinter::new(true, cp, bstable, inner_classes)
}

#[cfg(test)]
mod tests {
    use krakatau2::lib::{assemble, AssemblerOptions};

    use super::*;
    use crate::jar::types::methods::{MappingRef, MappingRefKind};

    // A minimal NMS-shaped class: a constructor, an abstract hook, and a
    // method whose bytecode mixes mapped and unmapped references.
    const FIXTURE: &str = r#"
.version 52 0
.class public super abstract dev/jorel/commandapi/nms/NMS
.super java/lang/Object

.method public <init> : ()V
    .code stack 1 locals 1
        aload_0
        invokespecial Method java/lang/Object <init> ()V
        return
    .end code
.end method

.method public abstract hook : ()V
.end method

.method public getCommands : ()V
    .code stack 1 locals 1
        getstatic Field java/lang/System out Ljava/io/PrintStream;
        pop
        invokestatic Method net/minecraft/server/MinecraftServer getServer ()V
        ldc Class net/minecraft/nbt/CompoundTag
        pop
        ldc 'net/minecraft/inside/a/string/literal'
        pop
        return
    .end code
.end method
.end class
"#;

    fn fixture_summary() -> ClassSummary {
        let mut assembled = assemble(FIXTURE, AssemblerOptions {}).expect("fixture assembles");
        let (_name, data) = assembled.pop().expect("fixture yields one class");
        let class = classfile::parse(&data, PARSER_OPTIONS).expect("fixture parses");
        extract_class_summary(&class, "net/minecraft/").expect("fixture has a class name")
    }

    #[test]
    fn skips_constructors() {
        let summary = fixture_summary();
        assert_eq!(summary.class_name, "dev/jorel/commandapi/nms/NMS");
        assert!(!summary.methods.keys().any(|sig| sig.starts_with("<init>")));
    }

    #[test]
    fn abstract_hooks_appear_with_an_empty_ref_list() {
        let summary = fixture_summary();
        assert!(summary.methods["hook()V"].is_empty());
    }

    #[test]
    fn keeps_only_mapped_refs_including_class_literals() {
        let summary = fixture_summary();
        // The System.out field and the string literal must not show up;
        // the ldc of a Class constant must.
        assert_eq!(
            summary.methods["getCommands()V"],
            [
                MappingRef::new(
                    MappingRefKind::Method,
                    "net/minecraft/server/MinecraftServer.getServer:()V",
                ),
                MappingRef::new(MappingRefKind::Class, "net/minecraft/nbt/CompoundTag"),
            ]
        );
    }
}
