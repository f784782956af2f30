use crate::error::{PresenterErrorExt, Result};
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

const DEFAULT_CONFIG_FILE: &str = "vitrine";
const ENV_PREFIX: &str = "VITRINE";

/// Loads configuration from a file layered with environment overrides.
///
/// 1. **Base File**: `path`, or `vitrine` (any supported extension) in the working directory.
/// 2. **Environment Overrides**: variables prefixed with `VITRINE`, nested with double
///    underscores (`VITRINE__PAGINATION__PAGE_NAME` maps to `pagination.page_name`).
///
/// # Errors
/// Returns [`crate::PresenterError::Config`] if the file is missing or its content (with the
/// overrides applied) does not deserialize into `T`.
///
/// # Example
/// ```rust,no_run
/// use vitrine_kernel::config::load_config;
/// use vitrine_kernel::domain::config::PresenterConfig;
///
/// let cfg: PresenterConfig = load_config(Some("config/presenters.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T>
where
    T: DeserializeOwned,
{
    load_layered(path, None)
}

/// `env_vars` replaces the process environment when given.
fn load_layered<T>(
    path: Option<impl AsRef<Path>>,
    env_vars: Option<config::Map<String, String>>,
) -> Result<T>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake)
                .source(env_vars),
        );

    info!("Loading presenter config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;
    use vitrine_domain::config::PresenterConfig;

    fn env(pairs: &[(&str, &str)]) -> config::Map<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
    }

    #[test]
    fn environment_overrides_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vitrine.toml");
        fs::write(&path, "[pagination]\npage_name = \"p\"\n").unwrap();

        let vars = env(&[("VITRINE__PAGINATION__PAGE_NAME", "cursor")]);
        let cfg: PresenterConfig = load_layered(Some(&path), Some(vars)).unwrap();

        assert_eq!(cfg.pagination.page_name, "cursor");
    }

    #[test]
    fn unrelated_variables_are_ignored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vitrine.toml");
        fs::write(&path, "[pagination]\npage_name = \"p\"\n").unwrap();

        let vars = env(&[("OTHER__PAGINATION__PAGE_NAME", "cursor")]);
        let cfg: PresenterConfig = load_layered(Some(&path), Some(vars)).unwrap();

        assert_eq!(cfg.pagination.page_name, "p");
    }
}
