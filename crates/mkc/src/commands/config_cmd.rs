//! Config subcommand handlers.

use clap::ValueEnum;

use mkc_config::Config;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

/// Apply `key = value` to the config, validating the value first.
fn apply(cfg: &mut Config, key: &str, value: &str) -> Result<(), CliError> {
    match key {
        "base_url" => {
            cfg.base_url = value.trim().to_owned();
            cfg.base_url()?;
        }
        "timeout_secs" => {
            cfg.timeout_secs = value
                .trim()
                .parse()
                .map_err(|e| CliError::invalid("timeout_secs", format!("'{value}' ({e})")))?;
        }
        "user_agent" => {
            let value = value.trim();
            cfg.user_agent = (!value.is_empty()).then(|| value.to_owned());
        }
        "allow_http" => {
            cfg.allow_http = value
                .trim()
                .parse()
                .map_err(|e| CliError::invalid("allow_http", format!("'{value}' ({e})")))?;
        }
        "output" => {
            let format = OutputFormat::from_str(value.trim(), true)
                .map_err(|e| CliError::invalid("output", e))?;
            if let Some(name) = format.to_possible_value() {
                cfg.defaults.output = name.get_name().to_owned();
            }
        }
        other => {
            return Err(CliError::invalid(
                "key",
                format!(
                    "unknown key '{other}' (expected base_url, timeout_secs, user_agent, allow_http or output)"
                ),
            ));
        }
    }
    Ok(())
}

pub fn handle(args: ConfigArgs, global: &mut GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            output::print_output(&mkc_config::config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = mkc_config::load_config()?;
            global.default_output(&cfg.defaults.output);
            let out = output::render_single(
                &global.format(),
                &cfg,
                |c| toml::to_string_pretty(c).unwrap_or_else(|e| format!("# unrenderable: {e}")),
                |c| c.base_url.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // Environment overrides must not be written back to the file.
        ConfigCommand::Set { key, value } => {
            let mut cfg = mkc_config::load_file_config()?;
            apply(&mut cfg, &key, &value)?;
            let path = mkc_config::save_config(&cfg)?;
            if !global.quiet {
                eprintln!("Set {key} in {}", path.display());
            }
            Ok(())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn set_known_keys() {
        let mut cfg = Config::default();
        apply(&mut cfg, "timeout_secs", "45").unwrap();
        apply(&mut cfg, "allow_http", "true").unwrap();
        apply(&mut cfg, "output", "JSON-compact").unwrap();
        apply(&mut cfg, "user_agent", "bot/1.0").unwrap();
        assert_eq!(cfg.timeout_secs, 45);
        assert!(cfg.allow_http);
        assert_eq!(cfg.defaults.output, "json-compact");
        assert_eq!(cfg.user_agent.as_deref(), Some("bot/1.0"));

        apply(&mut cfg, "user_agent", " ").unwrap();
        assert!(cfg.user_agent.is_none());
    }

    #[test]
    fn rejects_bad_values() {
        let mut cfg = Config::default();
        assert!(matches!(
            apply(&mut cfg, "timeout_secs", "soon"),
            Err(CliError::Validation { .. })
        ));
        assert!(apply(&mut cfg, "output", "xml").is_err());
        assert!(apply(&mut cfg, "colour", "red").is_err());
        assert!(apply(&mut cfg, "base_url", "not a url").is_err());
    }
}
