use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub policy: PolicyConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `compact` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
    /// Fallback filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { format: default_log_format(), filter: default_log_filter() }
    }
}

/// Integrity and permission checks the classroom service applies on top of
/// plain existence checks.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PolicyConfig {
    #[serde(default = "default_true")]
    pub verify_course_teacher: bool,
    #[serde(default)]
    pub verify_grader: bool,
    #[serde(default)]
    pub require_enrollment_for_submission: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self { verify_course_teacher: true, verify_grader: false, require_enrollment_for_submission: false }
    }
}

fn default_log_format() -> String { "compact".into() }
fn default_log_filter() -> String { "info".into() }
fn default_true() -> bool { true }

pub fn load_default() -> Result<AppConfig> {
    let _ = dotenvy::dotenv();
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("cannot read config {path}: {e}"))?;
    from_toml_str(&content)
}

pub fn from_toml_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Like [`AppConfig::load_and_validate`] but falls back to defaults when
    /// the config file cannot be read. Parse and validation errors still fail.
    pub fn load_or_default() -> Result<Self> {
        let _ = dotenvy::dotenv();
        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        let mut cfg = match std::fs::read_to_string(&path) {
            Ok(content) => from_toml_str(&content)?,
            Err(_) => AppConfig::default(),
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.logging.normalize()?;
        Ok(())
    }
}

impl LoggingConfig {
    fn normalize(&mut self) -> Result<()> {
        self.format = self.format.trim().to_lowercase();
        if self.format.is_empty() {
            self.format = default_log_format();
        }
        if self.format != "compact" && self.format != "json" {
            return Err(anyhow!("logging.format must be \"compact\" or \"json\", got {:?}", self.format));
        }
        self.filter = self.filter.trim().to_string();
        if self.filter.is_empty() {
            self.filter = default_log_filter();
        }
        Ok(())
    }

    pub fn is_json(&self) -> bool { self.format == "json" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let cfg = from_toml_str("").unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert!(cfg.policy.verify_course_teacher);
        assert!(!cfg.policy.verify_grader);
        assert!(!cfg.policy.require_enrollment_for_submission);
        assert_eq!(cfg.logging.format, "compact");
    }

    #[test]
    fn partial_policy_section_keeps_other_defaults() {
        let cfg = from_toml_str("[policy]\nrequire_enrollment_for_submission = true\n").unwrap();
        assert!(cfg.policy.require_enrollment_for_submission);
        assert!(cfg.policy.verify_course_teacher);
        assert!(!cfg.policy.verify_grader);
    }

    #[test]
    fn normalize_lowercases_and_fills_blanks() {
        let mut cfg = from_toml_str("[logging]\nformat = \" JSON \"\nfilter = \"  \"\n").unwrap();
        cfg.normalize_and_validate().unwrap();
        assert!(cfg.logging.is_json());
        assert_eq!(cfg.logging.filter, "info");
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let mut cfg = from_toml_str("[logging]\nformat = \"xml\"\n").unwrap();
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn loads_from_file() {
        let path = std::env::temp_dir().join(format!("classroom_cfg_{}.toml", std::process::id()));
        std::fs::write(&path, "[policy]\nverify_grader = true\n").unwrap();
        let cfg = load_from_file(path.to_str().unwrap()).unwrap();
        assert!(cfg.policy.verify_grader);
        let _ = std::fs::remove_file(&path);
    }

    // Only test in this crate that touches CONFIG_PATH.
    #[test]
    fn config_path_env_selects_file_or_defaults() {
        let path = std::env::temp_dir().join(format!("classroom_env_cfg_{}.toml", std::process::id()));
        std::fs::write(&path, "[logging]\nformat = \"JSON\"\n[policy]\nverify_grader = true\n").unwrap();

        std::env::set_var("CONFIG_PATH", &path);
        let cfg = AppConfig::load_and_validate().unwrap();
        assert!(cfg.logging.is_json());
        assert!(cfg.policy.verify_grader);
        assert_eq!(AppConfig::load_or_default().unwrap(), cfg);

        std::env::set_var("CONFIG_PATH", "/nonexistent/classroom.toml");
        assert!(AppConfig::load_and_validate().is_err());
        assert_eq!(AppConfig::load_or_default().unwrap(), AppConfig::default());

        std::env::remove_var("CONFIG_PATH");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_from_file("/nonexistent/classroom.toml").is_err());
    }
}
