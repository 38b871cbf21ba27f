use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::error::{GeneratorError, GeneratorResult};

/// Environment variable holding the pre-existing system classpath.
pub const CLASSPATH_ENV: &str = "CLASSPATH";

/// Inputs for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Suite root; the launchers and archives are resolved against it.
    pub root: PathBuf,
    /// Value of `CLASSPATH`, `None` when unset or empty.
    pub system_classpath: Option<String>,
}

impl GeneratorConfig {
    pub fn new(root: impl Into<PathBuf>, system_classpath: Option<String>) -> Self {
        Self {
            root: root.into(),
            system_classpath: system_classpath.filter(|value| !value.is_empty()),
        }
    }

    /// Build the configuration from the working directory and `CLASSPATH`.
    pub fn from_env() -> GeneratorResult<Self> {
        let root = std::env::current_dir().map_err(|source| GeneratorError::io(".", source))?;
        let system_classpath = std::env::var_os(CLASSPATH_ENV)
            .map(|value| value.to_string_lossy().into_owned());

        debug!(
            "Generator root={:?} {}={:?}",
            root, CLASSPATH_ENV, system_classpath
        );
        Ok(Self::new(root, system_classpath))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_system_classpath_is_treated_as_unset() {
        let config = GeneratorConfig::new("/suite", Some(String::new()));
        assert_eq!(config.system_classpath, None);
    }

    #[test]
    fn non_empty_system_classpath_is_kept_verbatim() {
        let config = GeneratorConfig::new("/suite", Some("C:\\java\\lib".into()));
        assert_eq!(config.system_classpath.as_deref(), Some("C:\\java\\lib"));
        assert_eq!(config.root(), Path::new("/suite"));
    }

    // The only test in this binary that touches CLASSPATH; the cases run
    // in sequence so they cannot race each other.
    #[test]
    fn from_env_reads_classpath_and_working_directory() {
        let saved = std::env::var_os(CLASSPATH_ENV);

        std::env::set_var(CLASSPATH_ENV, "");
        let config = GeneratorConfig::from_env().unwrap();
        assert_eq!(config.system_classpath, None);
        assert_eq!(config.root(), std::env::current_dir().unwrap());

        std::env::set_var(CLASSPATH_ENV, "X");
        let config = GeneratorConfig::from_env().unwrap();
        assert_eq!(config.system_classpath.as_deref(), Some("X"));

        std::env::remove_var(CLASSPATH_ENV);
        let config = GeneratorConfig::from_env().unwrap();
        assert_eq!(config.system_classpath, None);

        match saved {
            Some(value) => std::env::set_var(CLASSPATH_ENV, value),
            None => std::env::remove_var(CLASSPATH_ENV),
        }
    }
}
