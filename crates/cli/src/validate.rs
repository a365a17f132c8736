use anyhow::Context;
use kotgen_java::JavaParser;
use std::path::Path;
use tracing::info;

/// Validates every Java source under `source` without emitting
/// anything. The first violation fails the run.
pub fn run(source: &Path) -> anyhow::Result<()> {
    let parser = JavaParser::new()?;
    let files = crate::generate::discover_java_files(source)?;

    for path in &files {
        let unit = crate::generate::parse_file(&parser, path)?;
        kotgen_validate::validate_unit(&unit)
            .with_context(|| format!("validating {}", path.display()))?;
    }
    info!("Validated {} file(s)", files.len());
    Ok(())
}
