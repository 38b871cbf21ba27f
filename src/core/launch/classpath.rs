// ─── Classpath Composer ───
// Builds the `-cp` value written into the generated launchers.

use std::path::Path;

use tracing::debug;

use crate::core::config::GeneratorConfig;
use crate::core::layout::{path_str, SuiteLayout};

use super::archives::ArchiveRef;

/// The launchers are Windows batch files, so the separator is fixed
/// regardless of the host the generator runs on.
pub const CLASSPATH_SEPARATOR: &str = ";";

/// Trailing entry: the directory `java` is started from.
pub const CURRENT_DIR_ENTRY: &str = ".";

/// Compose the classpath string.
///
/// Layout: `[<system>;]"<archive>";"<archive>";...;.`
/// Archives keep their order and are not deduplicated.
pub fn compose_classpath(archives: &[ArchiveRef], system_classpath: Option<&str>) -> String {
    let mut classpath = String::new();

    if let Some(system) = system_classpath.filter(|value| !value.is_empty()) {
        classpath.push_str(system);
        classpath.push_str(CLASSPATH_SEPARATOR);
    }

    for archive in archives {
        classpath.push_str(&quoted(&archive.path));
        classpath.push_str(CLASSPATH_SEPARATOR);
    }

    classpath.push_str(CURRENT_DIR_ENTRY);
    classpath
}

/// Append the suite's own module archives to the scanned ones and compose.
///
/// The module archives are not checked for existence; a missing one only
/// shows up when the launcher is run.
pub fn suite_classpath(config: &GeneratorConfig, scanned: Vec<ArchiveRef>) -> String {
    let layout = SuiteLayout::new(config.root());
    let mut archives = scanned;
    archives.extend(layout.module_jars().into_iter().map(ArchiveRef::new));

    debug!("Classpath has {} archives", archives.len());
    compose_classpath(&archives, config.system_classpath.as_deref())
}

/// Quoted classpath form of a path, as it appears between separators.
pub fn quoted(path: &Path) -> String {
    format!("\"{}\"", path_str(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn refs(paths: &[&str]) -> Vec<ArchiveRef> {
        paths.iter().map(|p| ArchiveRef::new(*p)).collect()
    }

    #[test]
    fn system_classpath_is_prefixed_with_separator() {
        let classpath = compose_classpath(&refs(&["/lib/a.jar"]), Some("X"));
        assert!(classpath.starts_with("X;"));
        assert_eq!(classpath, "X;\"/lib/a.jar\";.");
    }

    #[test]
    fn unset_or_empty_system_classpath_adds_nothing() {
        let expected = "\"/lib/a.jar\";.";
        assert_eq!(compose_classpath(&refs(&["/lib/a.jar"]), None), expected);
        assert_eq!(compose_classpath(&refs(&["/lib/a.jar"]), Some("")), expected);
    }

    #[test]
    fn classpath_always_ends_with_current_dir() {
        assert_eq!(compose_classpath(&[], None), ".");
        assert_eq!(compose_classpath(&[], Some("X")), "X;.");
        assert!(compose_classpath(&refs(&["/a.jar", "/b.zip"]), None).ends_with(";."));
    }

    #[test]
    fn duplicates_are_kept_in_order() {
        let classpath = compose_classpath(&refs(&["/a.jar", "/b.jar", "/a.jar"]), None);
        assert_eq!(classpath, "\"/a.jar\";\"/b.jar\";\"/a.jar\";.");
    }

    #[test]
    fn suite_classpath_appends_module_jars_after_scanned() {
        let config = GeneratorConfig::new("/suite", None);
        let classpath = suite_classpath(&config, refs(&["/suite/common/lib/a.jar"]));

        let layout = SuiteLayout::new("/suite");
        let mut expected = vec![quoted(&PathBuf::from("/suite/common/lib/a.jar"))];
        expected.extend(layout.module_jars().iter().map(|jar| quoted(jar)));
        expected.push(".".into());

        assert_eq!(classpath, expected.join(";"));
    }

    #[test]
    fn suite_classpath_with_nothing_scanned_is_just_the_modules() {
        let config = GeneratorConfig::new("/suite", None);
        let classpath = suite_classpath(&config, Vec::new());

        let layout = SuiteLayout::new("/suite");
        let modules: Vec<String> = layout.module_jars().iter().map(|jar| quoted(jar)).collect();

        assert_eq!(classpath, format!("{};.", modules.join(";")));
    }
}
