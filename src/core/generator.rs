// ─── Generator Pipeline ───
// Library scan → classpath → launchers.

use std::io::Write;
use std::path::PathBuf;

use tracing::info;

use crate::core::config::GeneratorConfig;
use crate::core::error::{GeneratorError, GeneratorResult};
use crate::core::launch::{collect_archives, suite_classpath, write_launcher, LauncherTemplate};
use crate::core::layout::SuiteLayout;

/// Line printed before anything is generated.
pub const ANNOUNCEMENT: &str = "Creating viper-gt.bat & viper-pe.bat";

/// Generate both launchers under `config.root`, announcing on stdout.
pub fn generate(config: &GeneratorConfig) -> GeneratorResult<Vec<PathBuf>> {
    generate_with_output(config, &mut std::io::stdout().lock())
}

/// Generate both launchers, writing the announcement to `out`.
///
/// The library folder is scanned before any file is touched, so a missing
/// folder leaves existing launchers as they were. A failure writing the
/// first launcher aborts before the second one is written.
pub fn generate_with_output(
    config: &GeneratorConfig,
    out: &mut impl Write,
) -> GeneratorResult<Vec<PathBuf>> {
    writeln!(out, "{}", ANNOUNCEMENT).map_err(|source| GeneratorError::io("<stdout>", source))?;

    let layout = SuiteLayout::new(config.root());
    let scanned = collect_archives(&layout.library_dir())?;
    info!("Found {} archives in {:?}", scanned.len(), layout.library_dir());

    let classpath = suite_classpath(config, scanned);

    let mut written = Vec::new();
    for template in LauncherTemplate::all(&layout) {
        written.push(write_launcher(layout.root(), &template, &classpath)?);
    }

    Ok(written)
}
