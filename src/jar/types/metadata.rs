use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{jar::types::methods::MappingRef, workspace::Version};

/// Everything the analyser keeps from one class file: the declared methods
/// (keyed by `name + descriptor`, kept sorted so comparison and dumps are
/// deterministic) and, per method, the mapped symbols its code references
/// in bytecode order. Abstract hooks carry an empty ref list.
///
/// Equality deliberately ignores which version a summary came from; two
/// versions agree exactly when their summaries are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSummary {
    pub class_name: String,
    pub methods: BTreeMap<String, Vec<MappingRef>>,
}

impl ClassSummary {
    /// Class name without its package, e.g. `NMS_1_20_R4`.
    pub fn simple_name(&self) -> &str {
        self.class_name
            .rsplit('/')
            .next()
            .unwrap_or(&self.class_name)
    }
}

/// The summaries of every package class found in one version's release jar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionBytecode {
    pub version: Version,
    pub jar_name: String,
    /// Keyed by simple class name.
    pub classes: BTreeMap<String, ClassSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_name_strips_package() {
        let summary = ClassSummary {
            class_name: "dev/jorel/commandapi/nms/NMS_1_20_R4".into(),
            methods: BTreeMap::new(),
        };
        assert_eq!(summary.simple_name(), "NMS_1_20_R4");

        let unpackaged = ClassSummary {
            class_name: "NMS".into(),
            methods: BTreeMap::new(),
        };
        assert_eq!(unpackaged.simple_name(), "NMS");
    }
}
