use std::{fs, path::PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use indicatif::ProgressBar;
use tracing::{debug, info, warn};

use bytecode_analyser::{
    clean_dump_files, collect_version_dirs, compare_versions, extract_version_bytecode,
    find_release_jar,
    jar::{disassemble_class, write_disassembly_dump, write_method_dump},
    report::{print_report, write_json_report},
    types::StageProgress,
    MAPPING_PREFIX, NMS_PACKAGE,
};
use krakatau2::zip;

/// Compares CommandAPI NMS bytecode across Minecraft version folders and
/// reports the methods whose Minecraft mappings diverge.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory containing the X.Y.Z version folders
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Java package (slash-separated) whose classes are compared
    #[arg(long, default_value = NMS_PACKAGE)]
    package: String,

    /// Symbol prefix that marks a reference as mapping-sensitive
    #[arg(long, default_value = MAPPING_PREFIX)]
    mapping_prefix: String,

    /// Skip writing bytecode dump files into the version folders
    #[arg(long)]
    no_dumps: bool,

    /// Also write the comparison report as pretty JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let versions = collect_version_dirs(&args.root)
        .with_context(|| format!("failed to read {}", args.root.display()))?;
    if versions.is_empty() {
        bail!(
            "no version folders (X.Y.Z) found in {}",
            args.root.display()
        );
    }
    info!(
        "found versions: {:?}",
        versions.iter().map(ToString::to_string).collect::<Vec<_>>()
    );

    let mut analysed = Vec::new();
    for version in versions {
        let dir = args.root.join(version.to_string());
        clean_dump_files(&dir)?;

        let Some(jar_name) = find_release_jar(&dir)? else {
            warn!("{}: no CommandAPI release jar, skipping", version);
            continue;
        };
        info!("analysing {}/{}", version, jar_name);

        let file = fs::File::open(dir.join(&jar_name))?;
        let mut zip = zip::ZipArchive::new(file)?;

        let progress_bar = ProgressBar::new(100);
        let version_bytecode = extract_version_bytecode(
            &mut zip,
            version,
            &jar_name,
            &args.package,
            &args.mapping_prefix,
            |event| match event.progress {
                StageProgress::Percentage(progress) => {
                    progress_bar.set_position((progress * 100.0) as u64)
                }
                StageProgress::Done => progress_bar.finish_and_clear(),
                StageProgress::Unknown => debug!("{}...", event.stage.as_str()),
            },
            |simple_name, class| {
                if args.no_dumps {
                    return;
                }
                match disassemble_class(class) {
                    Ok(text) => {
                        if let Err(err) = write_disassembly_dump(&dir, version, simple_name, &text)
                        {
                            warn!("{}: failed to write disassembly dump: {}", simple_name, err);
                        }
                    }
                    Err(err) => warn!("{}: disassembly failed: {}", simple_name, err),
                }
            },
        )?;

        if version_bytecode.classes.is_empty() {
            warn!("{}: no classes found under {}", version, args.package);
        }

        if !args.no_dumps {
            for summary in version_bytecode.classes.values() {
                write_method_dump(&dir, version, summary)?;
            }
        }

        analysed.push(version_bytecode);
    }

    if analysed.is_empty() {
        bail!("no version folder contained a CommandAPI release jar");
    }

    info!("comparing bytecode of {} version(s)...", analysed.len());
    let report = compare_versions(&analysed);
    print_report(&report);

    if let Some(path) = &args.json {
        write_json_report(&report, path)?;
        info!("report written to {}", path.display());
    }

    if !report.is_clean() {
        bail!("{} mapping divergence(s) found", report.divergences.len());
    }
    Ok(())
}
