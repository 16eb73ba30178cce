use super::app::{AppConfig, FlowConfig, ProviderConfig, ServerConfig};
use super::error::ConfigError;
use crate::constants::{CONFIG_PATH, ENV_PATH, MAX_TEMPERATURE};
use dotenvy::from_filename;
use serde::Deserialize;
use std::fs;
use std::io;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Once;
use tracing::debug;

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
struct RawConfig {
    model: Option<String>,
    #[serde(default)]
    provider: RawProvider,
    #[serde(default)]
    analysis: RawFlow,
    #[serde(default)]
    coaching: RawFlow,
    #[serde(default)]
    server: RawServer,
}

#[derive(Debug, Deserialize, Default)]
struct RawProvider {
    endpoint: Option<String>,
    api_path: Option<String>,
    api_key: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Default)]
struct RawFlow {
    temperature: Option<f32>,
    max_tool_rounds: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
struct RawServer {
    addr: Option<String>,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Load and validate configuration. Without an explicit path a missing
/// default file means built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    ensure_env_loaded();
    match path {
        Some(path) => read_config(path),
        None => match read_config(Path::new(CONFIG_PATH)) {
            Err(ConfigError::NotFound { path }) => {
                debug!(path = %path.display(), "No configuration file; using defaults");
                Ok(AppConfig::default())
            }
            other => other,
        },
    }
}

/// Parse configuration from TOML text.
pub fn parse_config(content: &str, path: &Path) -> Result<AppConfig, ConfigError> {
    let parsed: RawConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    validate_and_build(parsed)
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    debug!(path = %path.display(), "Reading nutricoach configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    parse_config(&content, path)
}

fn validate_and_build(parsed: RawConfig) -> Result<AppConfig, ConfigError> {
    let defaults = AppConfig::default();

    let model = parsed.model.unwrap_or(defaults.model);
    if model.trim().is_empty() {
        return Err(ConfigError::EmptyModel);
    }

    let provider = ProviderConfig {
        endpoint: parsed.provider.endpoint.unwrap_or(defaults.provider.endpoint),
        api_path: parsed.provider.api_path.unwrap_or(defaults.provider.api_path),
        api_key: parsed.provider.api_key.unwrap_or(defaults.provider.api_key),
        timeout_secs: parsed.provider.timeout_secs,
    };

    let analysis = build_flow("analysis", parsed.analysis, defaults.analysis)?;
    let coaching = build_flow("coaching", parsed.coaching, defaults.coaching)?;

    let addr = parsed.server.addr.unwrap_or(defaults.server.addr);
    if addr.parse::<SocketAddr>().is_err() {
        return Err(ConfigError::InvalidAddress { addr });
    }

    Ok(AppConfig {
        model,
        provider,
        analysis,
        coaching,
        server: ServerConfig { addr },
    })
}

fn build_flow(
    section: &'static str,
    raw: RawFlow,
    defaults: FlowConfig,
) -> Result<FlowConfig, ConfigError> {
    let temperature = raw.temperature.unwrap_or(defaults.temperature);
    if !(0.0..=MAX_TEMPERATURE).contains(&temperature) {
        return Err(ConfigError::InvalidTemperature {
            section,
            value: temperature,
        });
    }
    Ok(FlowConfig {
        temperature,
        max_tool_rounds: raw.max_tool_rounds.unwrap_or(defaults.max_tool_rounds),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn empty_file_yields_defaults() {
        let file = write_config("");
        let config = load_config(Some(file.path())).expect("config loads");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.analysis.max_tool_rounds, 3);
        assert_eq!(config.coaching.max_tool_rounds, 1);
    }

    #[test]
    fn sections_override_defaults() {
        let file = write_config(
            r#"
model = "gemini-2.0-flash"

[provider]
api_key = "MY_GEMINI_KEY"
timeout_secs = 30

[coaching]
temperature = 1.2
max_tool_rounds = 2

[server]
addr = "0.0.0.0:9000"
"#,
        );
        let config = load_config(Some(file.path())).expect("config loads");
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.provider.api_key, "MY_GEMINI_KEY");
        assert_eq!(config.provider.timeout_secs, Some(30));
        assert_eq!(config.provider.api_path, "v1beta/models");
        assert_eq!(config.coaching.temperature, 1.2);
        assert_eq!(config.coaching.max_tool_rounds, 2);
        assert_eq!(config.analysis, FlowConfig::analysis());
        assert_eq!(config.server.addr, "0.0.0.0:9000");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            load_config(Some(&missing)),
            Err(ConfigError::NotFound { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_temperature() {
        let file = write_config("[analysis]\ntemperature = 2.5\n");
        assert!(matches!(
            load_config(Some(file.path())),
            Err(ConfigError::InvalidTemperature {
                section: "analysis",
                ..
            })
        ));
    }

    #[test]
    fn rejects_bad_toml_and_blank_model() {
        let file = write_config("model = [");
        assert!(matches!(
            load_config(Some(file.path())),
            Err(ConfigError::Parse { .. })
        ));

        let file = write_config("model = \"  \"");
        assert!(matches!(
            load_config(Some(file.path())),
            Err(ConfigError::EmptyModel)
        ));
    }

    #[test]
    fn rejects_unparseable_server_address() {
        let file = write_config("[server]\naddr = \"localhost\"\n");
        assert!(matches!(
            load_config(Some(file.path())),
            Err(ConfigError::InvalidAddress { .. })
        ));
    }
}
