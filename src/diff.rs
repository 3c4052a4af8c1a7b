//! Cross-version comparison of the extracted bytecode summaries.
//!
//! The first version with a jar acts as the baseline. Differences are
//! collected rather than aborting on the first one, and fall into three
//! outcomes: a change in the declared method set, a method whose mapped
//! references moved, and a catch-all for anything the per-method walk
//! somehow missed.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::{
    jar::types::{metadata::VersionBytecode, methods::MappingRef},
    workspace::Version,
};

/// One observed difference between versions.
#[derive(Debug, Clone, Serialize)]
pub enum Divergence {
    /// A class is absent from some versions' jars.
    ClassMissing { class: String, missing: Vec<Version> },
    /// The declared method set differs from the baseline version.
    MethodSetMismatch {
        class: String,
        version: Version,
        missing: Vec<String>,
        unexpected: Vec<String>,
    },
    /// A method body references different mapped symbols across versions.
    /// This is the method that needs a version-specific implementation.
    MappingMismatch {
        class: String,
        method: String,
        refs: Vec<(Version, Vec<MappingRef>)>,
    },
    /// Summaries differ although the per-method walk saw nothing.
    Unclassified { class: String },
}

#[derive(Debug, Default, Serialize)]
pub struct DiffReport {
    pub versions: Vec<Version>,
    pub divergences: Vec<Divergence>,
}

impl DiffReport {
    pub fn is_clean(&self) -> bool {
        self.divergences.is_empty()
    }
}

/// Compare every version against the earliest one, class by class and
/// method by method.
pub fn compare_versions(versions: &[VersionBytecode]) -> DiffReport {
    let mut report = DiffReport {
        versions: versions.iter().map(|vb| vb.version).collect(),
        divergences: Vec::new(),
    };

    let class_names: BTreeSet<&String> = versions.iter().flat_map(|vb| vb.classes.keys()).collect();

    for class in class_names {
        let present: Vec<&VersionBytecode> = versions
            .iter()
            .filter(|vb| vb.classes.contains_key(class))
            .collect();
        let missing: Vec<Version> = versions
            .iter()
            .filter(|vb| !vb.classes.contains_key(class))
            .map(|vb| vb.version)
            .collect();
        if !missing.is_empty() {
            report.divergences.push(Divergence::ClassMissing {
                class: class.clone(),
                missing,
            });
        }

        let Some((base, rest)) = present.split_first() else {
            continue;
        };
        let Some(base_summary) = base.classes.get(class) else {
            continue;
        };

        let mut diverged_methods = BTreeSet::new();

        for vb in rest {
            let Some(summary) = vb.classes.get(class) else {
                continue;
            };

            let missing: Vec<String> = base_summary
                .methods
                .keys()
                .filter(|m| !summary.methods.contains_key(*m))
                .cloned()
                .collect();
            let unexpected: Vec<String> = summary
                .methods
                .keys()
                .filter(|m| !base_summary.methods.contains_key(*m))
                .cloned()
                .collect();
            if !missing.is_empty() || !unexpected.is_empty() {
                report.divergences.push(Divergence::MethodSetMismatch {
                    class: class.clone(),
                    version: vb.version,
                    missing,
                    unexpected,
                });
                continue;
            }

            for (method, refs) in &summary.methods {
                if base_summary.methods.get(method) != Some(refs) {
                    diverged_methods.insert(method.clone());
                }
            }
        }

        for method in diverged_methods {
            let refs = present
                .iter()
                .filter_map(|vb| {
                    let summary = vb.classes.get(class)?;
                    Some((
                        vb.version,
                        summary.methods.get(&method).cloned().unwrap_or_default(),
                    ))
                })
                .collect();
            report.divergences.push(Divergence::MappingMismatch {
                class: class.clone(),
                method,
                refs,
            });
        }
    }

    // Whole-summary equality pass in case the per-method walk missed
    // something.
    if report.is_clean() {
        if let Some((base, rest)) = versions.split_first() {
            let mut unclassified = BTreeSet::new();
            for vb in rest {
                for (class, summary) in &vb.classes {
                    if base.classes.get(class).is_some_and(|b| b != summary) {
                        unclassified.insert(class.clone());
                    }
                }
            }
            for class in unclassified {
                report.divergences.push(Divergence::Unclassified { class });
            }
        }
    }

    report
}
