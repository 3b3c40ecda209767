use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::EffectiveConfig;
use crate::core::{Encoding, OutputFormat};
use crate::exit::ExitCode;
use crate::extract::{extract_errors, format_lines};
use crate::loader::LoadRequest;

#[derive(Debug, Parser)]
#[command(
    name = "lintsum",
    version,
    about = "Print the error-severity findings of an ESLint-style JSON report"
)]
pub struct Cli {
    /// Report to read [default: lint_report.json]
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Text encoding of the report (utf-16|utf-8) [default: utf-16]
    #[arg(long)]
    pub encoding: Option<Encoding>,
    /// Print the findings as a JSON array
    #[arg(long)]
    pub json: bool,
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Print the effective configuration and exit
    #[arg(long)]
    pub show_config: bool,
    /// Log filter for stderr diagnostics
    #[arg(
        long,
        env = "LINTSUM_LOG",
        default_value = crate::logging::DEFAULT_FILTER,
        hide_env = true
    )]
    pub log_level: String,
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    crate::logging::init(&cli.log_level);

    let home_dir = std::env::var_os("HOME").map(PathBuf::from);
    let env_config_path = std::env::var_os("LINTSUM_CONFIG").map(PathBuf::from);
    let mut cfg = crate::config::load(
        cli.config.as_deref().or(env_config_path.as_deref()),
        home_dir.as_deref(),
    )
    .map_err(crate::exit::invalid_args_err)?;
    apply_cli_overrides(&mut cfg, &cli);

    if cli.show_config {
        match cfg.output.format {
            OutputFormat::Json => crate::ui::write_json(&cfg)?,
            OutputFormat::Text => crate::ui::write_toml(&cfg)?,
        }
        return Ok(ExitCode::Success);
    }

    let req = LoadRequest {
        path: cfg.input.path.clone(),
        encoding: cfg.input.encoding,
    };
    let report = match crate::loader::load(&req) {
        Ok(report) => report,
        Err(err) => {
            tracing::debug!(error = %format!("{err:#}"), "report load failed");
            crate::ui::print_load_error(&err)?;
            return Ok(ExitCode::LoadFailed);
        }
    };

    let errors = extract_errors(&report);
    match cfg.output.format {
        OutputFormat::Text => crate::ui::print_errors(&format_lines(&errors))?,
        OutputFormat::Json => crate::ui::write_json(&errors)?,
    }

    Ok(ExitCode::Success)
}

fn apply_cli_overrides(cfg: &mut EffectiveConfig, cli: &Cli) {
    if let Some(path) = &cli.input {
        cfg.input.path = path.clone();
    }
    if let Some(encoding) = cli.encoding {
        cfg.input.encoding = encoding;
    }
    if cli.json {
        cfg.output.format = OutputFormat::Json;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_keeps_defaults() {
        let cli = Cli::try_parse_from(["lintsum"]).expect("parse");
        let mut cfg = EffectiveConfig::default();
        apply_cli_overrides(&mut cfg, &cli);
        assert_eq!(cfg.input.path, PathBuf::from("lint_report.json"));
        assert_eq!(cfg.input.encoding, Encoding::Utf16);
        assert_eq!(cfg.output.format, OutputFormat::Text);
        assert!(!cli.show_config);
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "lintsum",
            "--input",
            "out/eslint.json",
            "--encoding",
            "utf-8",
            "--json",
        ])
        .expect("parse");
        let mut cfg = EffectiveConfig::default();
        apply_cli_overrides(&mut cfg, &cli);
        assert_eq!(cfg.input.path, PathBuf::from("out/eslint.json"));
        assert_eq!(cfg.input.encoding, Encoding::Utf8);
        assert_eq!(cfg.output.format, OutputFormat::Json);
    }

    #[test]
    fn rejects_unknown_encoding() {
        let err = Cli::try_parse_from(["lintsum", "--encoding", "latin1"]).expect_err("latin1");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
