use anyhow::Context;
use kotgen_codegen::kotlin_file_for_class;
use kotgen_java::{JavaParser, SourceUnit};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use walkdir::WalkDir;

/// Runs generation over every Java source under `source`, writing one
/// Kotlin file per binding class into `out`, mirroring the package
/// structure. Fail-fast: the first convention or structural error
/// stops the run before any further file is written.
pub fn run(source: &Path, out: &Path, dump_model: bool) -> anyhow::Result<()> {
    let parser = JavaParser::new()?;
    let files = discover_java_files(source)?;
    if files.is_empty() {
        info!("No Java sources found under {}", source.display());
        return Ok(());
    }

    for path in files {
        let unit = parse_file(&parser, &path)?;
        if dump_model {
            println!("{}", serde_json::to_string_pretty(&unit)?);
            continue;
        }

        // Validation is a precondition of generation: conventions are
        // checked for the whole file before anything is emitted.
        kotgen_validate::validate_unit(&unit)
            .with_context(|| format!("validating {}", path.display()))?;

        for class in unit.classes.iter().filter(|c| !c.methods.is_empty()) {
            let file = kotlin_file_for_class(class, unit.package.as_deref(), &unit.imports)
                .with_context(|| format!("generating bindings for {}", class.name))?;

            let dest = output_path(out, unit.package.as_deref(), &class.name);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            fs::write(&dest, file.render())
                .with_context(|| format!("writing {}", dest.display()))?;
            info!("Generated {}", dest.display());
        }
    }
    Ok(())
}

pub(crate) fn parse_file(parser: &JavaParser, path: &Path) -> anyhow::Result<SourceUnit> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let unit = parser
        .parse_source(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(unit)
}

/// Java sources under the root, in sorted order so runs are
/// reproducible regardless of directory iteration order.
pub(crate) fn discover_java_files(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.with_context(|| format!("walking {}", root.display()))?;
        if entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext == "java")
        {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

fn output_path(out: &Path, package: Option<&str>, class_name: &str) -> PathBuf {
    let mut dest = out.to_path_buf();
    if let Some(package) = package {
        for segment in package.split('.') {
            dest.push(segment);
        }
    }
    dest.push(format!("{}.kt", class_name));
    dest
}
