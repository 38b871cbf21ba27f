// ─── Launcher Writer ───
// Renders and writes the `.bat` files that start the suite's tools.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::error::{GeneratorError, GeneratorResult};
use crate::core::layout::{path_str, SuiteLayout};

pub const GT_MAIN_CLASS: &str = "edu.umd.cfar.lamp.viper.gui.core.RunGT";
pub const PE_MAIN_CLASS: &str = "viper.comparison.ViperPE";

/// `%*` forwards every argument given to the batch file.
const FORWARD_ARGS: &str = "%*";

/// One generated launcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherTemplate {
    /// Target file, relative to the suite root.
    pub relative_path: PathBuf,
    /// Text after `rem  Usage: ` on the first line.
    pub usage: String,
    /// Extra JVM argument placed between the classpath and the main class.
    pub system_property: Option<String>,
    pub main_class: String,
    /// Appended after `%*`; the PE launcher has always carried a trailing space.
    pub trailer: &'static str,
}

impl LauncherTemplate {
    /// Ground-truth editor; points `lal.prefs` at the GT preferences file.
    pub fn gt(layout: &SuiteLayout) -> Self {
        Self {
            relative_path: Path::new("gt").join("bin").join("viper-gt.bat"),
            usage: "viper-gt.bat <config.gtf> <series>".into(),
            system_property: Some(format!(
                "\"-Dlal.prefs={}\"",
                path_str(&layout.gt_preferences())
            )),
            main_class: GT_MAIN_CLASS.into(),
            trailer: "",
        }
    }

    /// Performance evaluator.
    pub fn pe() -> Self {
        Self {
            relative_path: Path::new("pe").join("bin").join("viper-pe.bat"),
            usage: "viper-pe.bat [options]".into(),
            system_property: None,
            main_class: PE_MAIN_CLASS.into(),
            trailer: " ",
        }
    }

    /// Both launchers in the order they are written.
    pub fn all(layout: &SuiteLayout) -> Vec<Self> {
        vec![Self::gt(layout), Self::pe()]
    }

    /// The two lines of the launcher, each terminated by `\n`.
    pub fn render(&self, classpath: &str) -> String {
        let mut command = format!("java -cp {}", classpath);
        if let Some(property) = &self.system_property {
            command.push(' ');
            command.push_str(property);
        }
        command.push(' ');
        command.push_str(&self.main_class);
        command.push(' ');
        command.push_str(FORWARD_ARGS);
        command.push_str(self.trailer);

        format!("rem  Usage: {}\n{}\n", self.usage, command)
    }
}

/// Truncate-and-write one launcher under `root`.
///
/// The parent directory must already exist.
pub fn write_launcher(
    root: &Path,
    template: &LauncherTemplate,
    classpath: &str,
) -> GeneratorResult<PathBuf> {
    let target = root.join(&template.relative_path);
    let contents = template.render(classpath);

    let mut file =
        std::fs::File::create(&target).map_err(|source| GeneratorError::io(&target, source))?;
    file.write_all(contents.as_bytes())
        .map_err(|source| GeneratorError::io(&target, source))?;
    file.flush()
        .map_err(|source| GeneratorError::io(&target, source))?;

    info!("Wrote {:?} ({} bytes)", target, contents.len());
    Ok(target)
}
