//! Optional TOML configuration.
//!
//! Everything in the file is optional; CLI flags win over file values, file
//! values win over the built-in defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ClientError;

/// Fixed endpoint the evo server listens on unless overridden.
pub const DEFAULT_URL: &str = "ws://localhost:8000/ws";

/// File probed in the working directory when no `--config` path is given.
pub const DEFAULT_CONFIG_FILE: &str = "evobench.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub form: FormSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerSection {
    pub url: Option<String>,
}

/// Initial values for the submit form fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormSection {
    pub count: Option<i64>,
    pub neff: Option<bool>,
    pub parallelize: Option<bool>,
}

impl Config {
    /// Load the configuration.
    ///
    /// An explicit path must exist and parse — errors surface to the caller.
    /// Without one, `evobench.toml` in the working directory is probed and
    /// its absence is fine.
    pub fn load(explicit: Option<&str>) -> Result<Config, ClientError> {
        let path: PathBuf = match explicit {
            Some(p) => Path::new(p).to_path_buf(),
            None => {
                let p = Path::new(DEFAULT_CONFIG_FILE);
                if !p.exists() {
                    return Ok(Config::default());
                }
                p.to_path_buf()
            }
        };

        let raw = std::fs::read_to_string(&path).map_err(|e| ClientError::Config {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ClientError::Config {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_full_file_parses() {
        let file = write_config(
            "[server]\nurl = \"ws://10.0.0.5:8000/ws\"\n\n\
             [form]\ncount = 250\nneff = true\nparallelize = true\n",
        );
        let cfg = Config::load(file.path().to_str()).unwrap();
        assert_eq!(cfg.server.url.as_deref(), Some("ws://10.0.0.5:8000/ws"));
        assert_eq!(cfg.form.count, Some(250));
        assert_eq!(cfg.form.neff, Some(true));
        assert_eq!(cfg.form.parallelize, Some(true));
    }

    #[test]
    fn test_partial_file_leaves_rest_unset() {
        let file = write_config("[server]\nurl = \"ws://example:9/ws\"\n");
        let cfg = Config::load(file.path().to_str()).unwrap();
        assert_eq!(cfg.server.url.as_deref(), Some("ws://example:9/ws"));
        assert!(cfg.form.count.is_none());
        assert!(cfg.form.neff.is_none());
    }

    #[test]
    fn test_empty_file_is_all_defaults() {
        let file = write_config("");
        let cfg = Config::load(file.path().to_str()).unwrap();
        assert!(cfg.server.url.is_none());
        assert!(cfg.form.parallelize.is_none());
    }

    #[test]
    fn test_explicit_missing_path_errors() {
        assert!(Config::load(Some("/nonexistent/evobench.toml")).is_err());
    }

    #[test]
    fn test_invalid_toml_errors() {
        let file = write_config("[server\nurl =");
        assert!(Config::load(file.path().to_str()).is_err());
    }
}
