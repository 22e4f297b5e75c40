use std::fs;
use std::path::Path;

use anyhow::Context;
use verba_config::Config;

/// Load config from a JSON file, or from the environment when no file is given
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::debug!("No config file given, using environment");
        return Ok(Config::new());
    };

    tracing::info!("Loading config from {}", path.display());
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = Config::from_json_str(&data)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_missing_file_is_an_error() {
        let path = PathBuf::from("/nonexistent/verba/config.json");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_reads_json_file() {
        let path = std::env::temp_dir().join(format!("verba-config-{}.json", std::process::id()));
        fs::write(&path, r#"{"translator": {"target_lang": "Spanish"}}"#).unwrap();

        let config = load_config(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.translator.target_lang, "Spanish");
        assert_eq!(config.timeout_seconds, 30);
    }
}
