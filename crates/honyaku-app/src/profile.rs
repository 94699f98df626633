use std::path::Path;

use anyhow::Context;
use honyaku_config::Config;

/// Profile picked up from the working directory when no path is given
const DEFAULT_PROFILE: &str = "config.json";

/// Load the configuration profile.
///
/// An explicit path must exist. Otherwise `config.json` is used when
/// present, then built-in defaults. Environment overrides apply in all cases.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None if Path::new(DEFAULT_PROFILE).exists() => Config::load_from_file(Path::new(DEFAULT_PROFILE))
            .with_context(|| format!("failed to load config {DEFAULT_PROFILE}"))?,
        None => {
            tracing::debug!("No config file, using defaults");
            let config = Config::new();
            config.validate().context("invalid configuration from environment")?;
            config
        }
    };

    tracing::debug!(
        "Store {}, embedding backend {:?}",
        config.store.path.display(),
        config.embedding.backend
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_profile_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        std::fs::write(&path, r#"{ "quiz": { "min_sentence_chars": 10 } }"#).unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.quiz.min_sentence_chars, 10);
        assert_eq!(config.quiz.max_sentence_chars, 200);
    }

    #[test]
    fn missing_explicit_profile_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("absent.json"))).is_err());
    }

    #[test]
    fn invalid_weights_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(
            &path,
            r#"{ "scoring": { "weights": { "vector": 0.5, "word": 0.5, "string": 0.5 } } }"#,
        )
        .unwrap();
        assert!(load_config(Some(&path)).is_err());
    }
}
