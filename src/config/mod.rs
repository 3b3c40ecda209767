use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::{Encoding, OutputFormat};
use crate::loader::DEFAULT_INPUT_PATH;

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_path: Option<String>,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputConfig {
    pub path: PathBuf,
    pub encoding: Encoding,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            config_path: None,
            input: InputConfig {
                path: PathBuf::from(DEFAULT_INPUT_PATH),
                encoding: Encoding::Utf16,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    input: Option<RawInputConfig>,
    output: Option<RawOutputConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawInputConfig {
    path: Option<PathBuf>,
    encoding: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOutputConfig {
    format: Option<String>,
}

pub fn default_config_path(home_dir: &Path) -> PathBuf {
    home_dir.join(".config/lintsum/config.toml")
}

/// Builds the effective config: defaults, then the config file (if it exists),
/// then `LINTSUM_*` environment overrides. Command-line flags are applied by
/// the caller on top of the result.
pub fn load(config_path: Option<&Path>, home_dir: Option<&Path>) -> Result<EffectiveConfig> {
    let mut cfg = EffectiveConfig::default();

    let path = config_path
        .map(ToOwned::to_owned)
        .or_else(|| home_dir.map(default_config_path));

    if let Some(path) = path.filter(|p| p.exists()) {
        let s = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        apply_toml(&mut cfg, &s)
            .with_context(|| format!("invalid config file: {}", path.display()))?;
        cfg.config_path = Some(path.display().to_string());
        tracing::debug!(path = %path.display(), "loaded config file");
    }

    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok())?;

    tracing::debug!(
        input = %cfg.input.path.display(),
        encoding = %cfg.input.encoding,
        format = %cfg.output.format,
        "effective config"
    );
    Ok(cfg)
}

fn apply_toml(cfg: &mut EffectiveConfig, s: &str) -> Result<()> {
    let raw: RawConfig = toml::from_str(s).context("failed to parse TOML")?;

    if let Some(input) = raw.input {
        if let Some(path) = input.path {
            cfg.input.path = path;
        }
        if let Some(encoding) = input.encoding {
            cfg.input.encoding = encoding
                .parse::<Encoding>()
                .map_err(anyhow::Error::msg)
                .context("input.encoding")?;
        }
    }

    if let Some(output) = raw.output {
        if let Some(format) = output.format {
            cfg.output.format = format
                .parse::<OutputFormat>()
                .map_err(anyhow::Error::msg)
                .context("output.format")?;
        }
    }

    Ok(())
}

fn apply_env_overrides(
    cfg: &mut EffectiveConfig,
    var: impl Fn(&str) -> Option<String>,
) -> Result<()> {
    if let Some(v) = non_blank(var("LINTSUM_INPUT_PATH")) {
        cfg.input.path = PathBuf::from(v);
    }
    if let Some(v) = non_blank(var("LINTSUM_INPUT_ENCODING")) {
        cfg.input.encoding = v
            .parse::<Encoding>()
            .map_err(anyhow::Error::msg)
            .context("LINTSUM_INPUT_ENCODING")?;
    }
    if let Some(v) = non_blank(var("LINTSUM_OUTPUT_FORMAT")) {
        cfg.output.format = v
            .parse::<OutputFormat>()
            .map_err(anyhow::Error::msg)
            .context("LINTSUM_OUTPUT_FORMAT")?;
    }
    Ok(())
}

fn non_blank(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}
