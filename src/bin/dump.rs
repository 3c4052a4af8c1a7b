use std::{
    collections::BTreeMap,
    env,
    fs::{self, File},
    io::{BufWriter, Read},
};

use anyhow::bail;
use bytecode_analyser::{
    extract_class_summary, list_package_classes, ClassSummary, MAPPING_PREFIX, NMS_PACKAGE,
};
use krakatau2::{
    lib::{classfile, ParserOptions},
    zip,
};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        bail!("usage: dump <input.jar> <output.json> [package]");
    }
    let input_jar = &args[1];
    let output_json = &args[2];
    let package = args.get(3).map(String::as_str).unwrap_or(NMS_PACKAGE);

    let file = fs::File::open(input_jar)?;
    let mut zip = zip::ZipArchive::new(file)?;

    let entries = list_package_classes(&mut zip, package);

    let mut classes: BTreeMap<String, ClassSummary> = BTreeMap::new();
    let mut data = Vec::new();
    for (entry_name, simple_name) in entries {
        let mut file = zip.by_name(&entry_name)?;
        data.clear();
        file.read_to_end(&mut data)?;
        drop(file);

        let Ok(class) = classfile::parse(
            &data,
            ParserOptions {
                no_short_code_attr: true,
            },
        ) else {
            eprintln!("{}: failed to parse class file, skipping", entry_name);
            continue;
        };
        let Some(summary) = extract_class_summary(&class, MAPPING_PREFIX) else {
            continue;
        };
        classes.insert(simple_name, summary);
    }

    let file = File::create(output_json)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &classes)?;

    Ok(())
}
