// ─── Suite Layout ───
// Fixed locations inside a ViPER checkout. Nothing here touches the disk.

use std::path::{Path, PathBuf};

/// Sub-modules whose archives are always appended to the classpath,
/// in classpath order.
pub const SUITE_MODULES: [&str; 6] = ["api", "apploader", "chronicle", "jmpeg", "pe", "gt"];

#[derive(Debug, Clone)]
pub struct SuiteLayout {
    root: PathBuf,
}

impl SuiteLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/common/lib`, scanned for third-party archives.
    pub fn library_dir(&self) -> PathBuf {
        self.root.join("common").join("lib")
    }

    /// `<root>/<module>/bin/viper-<module>.jar`
    pub fn module_jar(&self, module: &str) -> PathBuf {
        self.root
            .join(module)
            .join("bin")
            .join(format!("viper-{}.jar", module))
    }

    /// Archives of every suite module, in `SUITE_MODULES` order.
    pub fn module_jars(&self) -> Vec<PathBuf> {
        SUITE_MODULES
            .iter()
            .map(|module| self.module_jar(module))
            .collect()
    }

    /// Preferences file handed to the GT launcher via `-Dlal.prefs`.
    pub fn gt_preferences(&self) -> PathBuf {
        self.root.join("gt").join("CONFIG").join("gt-config.n3")
    }
}

/// Convert a path to the string written into a launcher.
///
/// Windows extended-length prefixes (`\\?\`) are stripped; `java -cp`
/// does not understand them.
pub fn path_str(path: &Path) -> String {
    let text = path.to_string_lossy().to_string();

    #[cfg(target_os = "windows")]
    {
        if let Some(stripped) = text.strip_prefix(r"\\?\") {
            return stripped.to_string();
        }
    }

    text
}
