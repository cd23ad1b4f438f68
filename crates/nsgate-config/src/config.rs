// crates/nsgate-config/src/config.rs
// ============================================================================
// Module: nsgate Configuration
// Description: Configuration loading and validation for nsgate.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: nsgate-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Missing or invalid configuration fails closed: there is no default admin
//! group, so a deployment cannot silently run with an empty one.
//! Security posture: config inputs are untrusted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use nsgate_core::AuthzAuditSink;
use nsgate_core::EngineConfig;
use nsgate_core::FileAuditSink;
use nsgate_core::NoopAuditSink;
use nsgate_core::StderrAuditSink;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "nsgate.toml";
/// Environment variable used to override the config path.
const CONFIG_ENV_VAR: &str = "NSGATE_CONFIG";
/// Maximum configuration file size in bytes.
const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum length of the admin group name.
const MAX_ADMIN_GROUP_LENGTH: usize = 256;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// nsgate configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NsgateConfig {
    /// Security rule configuration.
    pub security: SecurityConfig,
    /// Audit sink configuration.
    #[serde(default)]
    pub audit: AuditConfig,
}

impl NsgateConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml(content)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.security.validate()?;
        self.audit.validate()?;
        Ok(())
    }

    /// Returns the configured admin group.
    #[must_use]
    pub fn admin_group(&self) -> &str {
        &self.security.admin_group
    }

    /// Returns the engine configuration derived from the security section.
    #[must_use]
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            admin_group: self.security.admin_group.clone(),
            enforce_verbs: self.security.enforce_verbs,
        }
    }
}

/// Security rule configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SecurityConfig {
    /// Group whose members bypass per-resource grant checks.
    pub admin_group: String,
    /// Require request verbs to be granted by the matching role bindings.
    #[serde(default)]
    pub enforce_verbs: bool,
}

impl SecurityConfig {
    /// Validates the security section.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.admin_group.is_empty() {
            return Err(ConfigError::Invalid("security.admin_group must be set".to_string()));
        }
        if self.admin_group.len() > MAX_ADMIN_GROUP_LENGTH {
            return Err(ConfigError::Invalid("security.admin_group too long".to_string()));
        }
        if self.admin_group.chars().any(|ch| ch.is_whitespace() || ch.is_control()) {
            return Err(ConfigError::Invalid(
                "security.admin_group must not contain whitespace or control characters"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

/// Audit sink selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditSinkKind {
    /// Discard audit events.
    #[default]
    None,
    /// JSON lines on stderr.
    Stderr,
    /// JSON lines appended to `audit.path`.
    File,
}

/// Audit sink configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditConfig {
    /// Selected sink.
    #[serde(default)]
    pub sink: AuditSinkKind,
    /// Log file path for the file sink.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl AuditConfig {
    /// Validates the audit section.
    fn validate(&self) -> Result<(), ConfigError> {
        match (self.sink, &self.path) {
            (AuditSinkKind::File, None) => {
                Err(ConfigError::Invalid("audit.path is required for the file sink".to_string()))
            }
            (AuditSinkKind::File, Some(path)) => check_path_limits(path, "audit.path"),
            (AuditSinkKind::None | AuditSinkKind::Stderr, Some(_)) => Err(ConfigError::Invalid(
                "audit.path is only valid for the file sink".to_string(),
            )),
            (AuditSinkKind::None | AuditSinkKind::Stderr, None) => Ok(()),
        }
    }

    /// Builds the configured audit sink.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the audit file cannot be opened.
    pub fn build_sink(&self) -> io::Result<Arc<dyn AuthzAuditSink>> {
        match (self.sink, &self.path) {
            (AuditSinkKind::File, Some(path)) => Ok(Arc::new(FileAuditSink::new(path)?)),
            (AuditSinkKind::File, None) => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "audit.path is required for the file sink",
            )),
            (AuditSinkKind::Stderr, _) => Ok(Arc::new(StderrAuditSink)),
            (AuditSinkKind::None, _) => Ok(Arc::new(NoopAuditSink)),
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Picks the config file: explicit argument, then `NSGATE_CONFIG`, then
/// `nsgate.toml` in the working directory.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let resolved = match (path, env::var_os(CONFIG_ENV_VAR)) {
        (Some(path), _) => path.to_path_buf(),
        (None, Some(from_env)) => PathBuf::from(from_env),
        (None, None) => PathBuf::from(DEFAULT_CONFIG_NAME),
    };
    check_path_limits(&resolved, "nsgate config path")?;
    Ok(resolved)
}

/// Rejects paths over the total or per-component byte limits; `label` names
/// the offending setting in the error.
fn check_path_limits(path: &Path, label: &str) -> Result<(), ConfigError> {
    if path.as_os_str().len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!(
            "{label} longer than {MAX_TOTAL_PATH_LENGTH} bytes"
        )));
    }
    let oversized = path
        .components()
        .any(|component| component.as_os_str().len() > MAX_PATH_COMPONENT_LENGTH);
    if oversized {
        return Err(ConfigError::Invalid(format!(
            "{label} has a component longer than {MAX_PATH_COMPONENT_LENGTH} bytes"
        )));
    }
    Ok(())
}
