use krakatau2::lib::{classfile::parse::Class, DisassemblerOptions};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DisassemblyError {
    #[error("Disassemble error: {0}")]
    Disassemble(std::io::Error),
    #[error("Disassembler emitted invalid utf8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Render a parsed class as assembler source for the dump files, filling
/// the role `javap -c` output played.
pub fn disassemble_class(class: &Class<'_>) -> Result<String, DisassemblyError> {
    let mut out = Vec::new();
    krakatau2::lib::disassemble::disassemble(
        &mut out,
        class,
        DisassemblerOptions { roundtrip: false },
    )
    .map_err(DisassemblyError::Disassemble)?;
    Ok(String::from_utf8(out)?)
}
