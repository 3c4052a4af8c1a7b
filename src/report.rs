//! Human-readable and JSON rendering of a comparison report.

use std::{fs::File, io::BufWriter, path::Path};

use colored::Colorize;

use crate::{
    diff::{DiffReport, Divergence},
    workspace::Version,
};

/// Print the comparison outcome, with color on the parts a human scans
/// for.
pub fn print_report(report: &DiffReport) {
    if report.is_clean() {
        println!(
            "{}",
            "All bytecodes are identical! No mapping issues will arise!".green()
        );
        return;
    }

    for divergence in &report.divergences {
        match divergence {
            Divergence::ClassMissing { class, missing } => {
                println!(
                    "{} is missing from version(s) {}",
                    class.red().bold(),
                    versions_list(missing)
                );
            }
            Divergence::MethodSetMismatch {
                class,
                version,
                missing,
                unexpected,
            } => {
                println!(
                    "{}: declared methods changed in {}",
                    class.red().bold(),
                    version.to_string().cyan()
                );
                for method in missing {
                    println!("\t{} {}", "-".red(), method);
                }
                for method in unexpected {
                    println!("\t{} {}", "+".green(), method);
                }
                println!();
            }
            Divergence::MappingMismatch {
                class,
                method,
                refs,
            } => {
                println!("There is a mappings issue with {}", method.red().bold());
                for (version, refs) in refs {
                    println!("Bytecode {} ({}):", version.to_string().cyan(), class);
                    for mapping_ref in refs {
                        println!("\t{}", mapping_ref);
                    }
                    println!();
                }
            }
            Divergence::Unclassified { class } => {
                println!(
                    "Bytecodes differ somewhere in {}! The built-in checks did not catch where. A mappings issue will arise.",
                    class.red().bold()
                );
            }
        }
    }
}

/// Write the report as pretty-printed JSON.
pub fn write_json_report(report: &DiffReport, path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

fn versions_list(versions: &[Version]) -> String {
    versions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jar::types::methods::{MappingRef, MappingRefKind};

    #[test]
    fn report_serializes_with_versions_and_divergences() {
        let report = DiffReport {
            versions: vec!["1.19.4".parse().unwrap(), "1.20.6".parse().unwrap()],
            divergences: vec![Divergence::MappingMismatch {
                class: "NMS".into(),
                method: "hook()V".into(),
                refs: vec![(
                    "1.20.6".parse().unwrap(),
                    vec![MappingRef::new(
                        MappingRefKind::Method,
                        "net/minecraft/server/MinecraftServer.b:()V",
                    )],
                )],
            }],
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["versions"][0], "1.19.4");
        let mismatch = &value["divergences"][0]["MappingMismatch"];
        assert_eq!(mismatch["class"], "NMS");
        assert_eq!(mismatch["method"], "hook()V");
        assert_eq!(mismatch["refs"][0][0], "1.20.6");
        assert_eq!(
            mismatch["refs"][0][1][0]["symbol"],
            "net/minecraft/server/MinecraftServer.b:()V"
        );
    }

    #[test]
    fn clean_report_serializes_empty_divergences() {
        let report = DiffReport {
            versions: vec!["1.19.4".parse().unwrap()],
            divergences: Vec::new(),
        };
        let value = serde_json::to_value(&report).unwrap();
        assert!(value["divergences"].as_array().unwrap().is_empty());
    }
}
