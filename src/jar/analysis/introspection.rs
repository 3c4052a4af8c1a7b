use krakatau2::lib::{
    classfile::code::Instr,
    disassemble::refprinter::{ConstData, FmimTag, RefPrinter, SingleTag},
};

use crate::jar::types::methods::{MappingRef, MappingRefKind};

fn find_utf(rp: &RefPrinter<'_>, id: u16) -> Option<String> {
    let const_line = rp.cpool.get(id as usize)?;
    let ConstData::Utf8(utf_data) = &const_line.data else {
        return None;
    };
    Some(utf_data.s.to_string())
}

/// Resolve a Class constant to its internal (slash-separated) name.
pub fn find_class_name(rp: &RefPrinter<'_>, id: u16) -> Option<String> {
    let const_line = rp.cpool.get(id as usize)?;
    let ConstData::Single(SingleTag::Class, utf_id) = const_line.data else {
        return None;
    };
    find_utf(rp, utf_id)
}

/// Resolve a Field/Method/InterfaceMethod constant to a mapping ref of the
/// form `owner.name:descriptor`.
pub fn find_member_ref(rp: &RefPrinter<'_>, id: u16) -> Option<MappingRef> {
    let const_line = rp.cpool.get(id as usize)?;
    let ConstData::Fmim(tag, class_id, nat_id) = &const_line.data else {
        return None;
    };

    let owner = find_class_name(rp, *class_id)?;

    let const_line = rp.cpool.get(*nat_id as usize)?;
    let ConstData::Nat(name_id, desc_id) = const_line.data else {
        return None;
    };
    let name = find_utf(rp, name_id)?;
    let desc = find_utf(rp, desc_id)?;

    let kind = match tag {
        FmimTag::Method => MappingRefKind::Method,
        FmimTag::InterfaceMethod => MappingRefKind::InterfaceMethod,
        FmimTag::Field => MappingRefKind::Field,
    };
    Some(MappingRef::new(kind, format!("{}.{}:{}", owner, name, desc)))
}

/// Resolve a Class constant to a mapping ref. Returns `None` when the
/// constant is anything else, so `ldc` of a string or number never counts.
pub fn find_class_ref(rp: &RefPrinter<'_>, id: u16) -> Option<MappingRef> {
    Some(MappingRef::new(MappingRefKind::Class, find_class_name(rp, id)?))
}

/// The mapped symbol an instruction touches, if it goes through the
/// constant pool at all.
pub fn instr_mapping_ref(rp: &RefPrinter<'_>, ix: &Instr) -> Option<MappingRef> {
    match ix {
        Instr::Invokevirtual(id)
        | Instr::Invokespecial(id)
        | Instr::Invokestatic(id)
        | Instr::Getstatic(id)
        | Instr::Putstatic(id)
        | Instr::Getfield(id)
        | Instr::Putfield(id) => find_member_ref(rp, *id),
        Instr::Invokeinterface(id, _) => find_member_ref(rp, *id),
        Instr::New(id) | Instr::Checkcast(id) | Instr::Instanceof(id) | Instr::Anewarray(id) => {
            find_class_ref(rp, *id)
        }
        // Class literals load through ldc; string and numeric ldc resolves
        // to None.
        Instr::Ldc(id) => find_class_ref(rp, *id as u16),
        Instr::LdcW(id) => find_class_ref(rp, *id),
        Instr::Multianewarray(id, _) => find_class_ref(rp, *id),
        _ => None,
    }
}
