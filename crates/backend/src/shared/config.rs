use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Переменная окружения, перекрывающая `gemini.api_key`
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub gemini: GeminiConfig,
    pub upload: UploadConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Каталог собранного фронтенда; без него раздаётся только API
    pub static_dir: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeminiConfig {
    pub api_base: String,
    pub model: String,
    #[serde(default)]
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UploadConfig {
    pub max_bytes: usize,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[gemini]
api_base = "https://generativelanguage.googleapis.com/v1beta"
model = "gemini-2.0-flash"
api_key = ""

[upload]
max_bytes = 20971520
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
///
/// The API key from `GEMINI_API_KEY` wins over the file value.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = match find_config_file() {
        Some(config_path) => {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            parse_config(&contents)?
        }
        None => {
            tracing::info!("Using default embedded configuration");
            parse_config(DEFAULT_CONFIG)?
        }
    };

    if let Ok(key) = std::env::var(API_KEY_ENV) {
        apply_api_key_override(&mut config, &key);
    }

    if config.gemini.api_key.trim().is_empty() {
        tracing::warn!(
            "Gemini API key is not set ({} or gemini.api_key); completions will fail",
            API_KEY_ENV
        );
    }

    Ok(config)
}

fn find_config_file() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    let config_path = exe_path.parent()?.join("config.toml");
    if config_path.exists() {
        Some(config_path)
    } else {
        tracing::warn!("config.toml not found at: {}", config_path.display());
        None
    }
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

fn apply_api_key_override(config: &mut Config, key: &str) {
    if !key.trim().is_empty() {
        config.gemini.api_key = key.trim().to_string();
    }
}

/// Resolve the static directory relative to the executable directory
pub fn get_static_dir(config: &Config) -> Option<PathBuf> {
    let dir_str = config.server.static_dir.as_deref()?;
    let dir = Path::new(dir_str);

    if dir.is_absolute() {
        return Some(dir.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Some(exe_dir.join(dir));
        }
    }

    Some(PathBuf::from(dir_str))
}
