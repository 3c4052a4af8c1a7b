use std::fmt;

use serde::{Deserialize, Serialize};

/// What kind of constant-pool entry a mapped reference came from. Mirrors
/// the comment kinds javap prints next to instructions (`// Method`,
/// `// InterfaceMethod`, `// Field`, `// class`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MappingRefKind {
    Method,
    InterfaceMethod,
    Field,
    Class,
}

impl MappingRefKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MappingRefKind::Method => "Method",
            MappingRefKind::InterfaceMethod => "InterfaceMethod",
            MappingRefKind::Field => "Field",
            MappingRefKind::Class => "class",
        }
    }
}

/// A single reference from method bytecode into mapped Minecraft code.
/// For members the symbol reads `owner.name:descriptor`, for classes just
/// the internal class name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MappingRef {
    pub kind: MappingRefKind,
    pub symbol: String,
}

impl MappingRef {
    pub fn new(kind: MappingRefKind, symbol: impl Into<String>) -> Self {
        MappingRef {
            kind,
            symbol: symbol.into(),
        }
    }
}

impl fmt::Display for MappingRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.as_str(), self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_like_javap_comments() {
        let method = MappingRef::new(
            MappingRefKind::Method,
            "net/minecraft/commands/CommandSourceStack.getLevel:()Lnet/minecraft/server/level/ServerLevel;",
        );
        assert_eq!(
            method.to_string(),
            "Method net/minecraft/commands/CommandSourceStack.getLevel:()Lnet/minecraft/server/level/ServerLevel;"
        );

        let class = MappingRef::new(MappingRefKind::Class, "net/minecraft/nbt/CompoundTag");
        assert_eq!(class.to_string(), "class net/minecraft/nbt/CompoundTag");
    }
}
