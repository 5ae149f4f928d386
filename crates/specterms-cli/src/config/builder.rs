use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{AppConfig, OutputFormat};
use crate::error::{CliError, Result};
use specterms::core::models::configuration::ElectronConfiguration;
use specterms::engine::config as core_config;
use std::path::Path;

/// Merges CLI flags, `--set` values, the configuration file and defaults, in that order.
pub fn build_config(
    config_path: Option<&Path>,
    set_values: &[String],
    cli_format: Option<OutputFormat>,
) -> Result<AppConfig> {
    let file_config = FileConfig::load(config_path)?;
    let file_config = apply_set_values(file_config, set_values)?;
    Ok(merge(file_config, cli_format))
}

fn merge(file_config: FileConfig, cli_format: Option<OutputFormat>) -> AppConfig {
    let defaults = DefaultsConfig::default();
    let analysis = file_config.analysis.unwrap_or_default();
    let output = file_config.output.unwrap_or_default();

    AppConfig {
        max_rows: analysis.max_rows.unwrap_or(defaults.max_rows),
        format: cli_format.or(output.format).unwrap_or(defaults.format),
        page_size: output.page_size.unwrap_or(defaults.page_size),
    }
}

/// Builds the engine configuration for one electron configuration.
pub fn analysis_config(
    app: &AppConfig,
    configuration: ElectronConfiguration,
) -> Result<core_config::AnalysisConfig> {
    core_config::AnalysisConfigBuilder::new()
        .configuration(configuration)
        .max_rows(app.max_rows)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key {
            "analysis.max-rows" => {
                config
                    .analysis
                    .get_or_insert_with(Default::default)
                    .max_rows = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid integer value for {}: {}", key, value_str))
                })?);
            }
            "output.page-size" => {
                config
                    .output
                    .get_or_insert_with(Default::default)
                    .page_size = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid integer value for {}: {}", key, value_str))
                })?);
            }
            "output.format" => {
                let format = match value_str {
                    "text" => OutputFormat::Text,
                    "json" => OutputFormat::Json,
                    _ => {
                        return Err(CliError::Config(format!(
                            "Invalid value for {}: '{}'. Expected 'text' or 'json'.",
                            key, value_str
                        )));
                    }
                };
                config.output.get_or_insert_with(Default::default).format = Some(format);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let app = merge(FileConfig::default(), None);
        let defaults = DefaultsConfig::default();
        assert_eq!(app.max_rows, defaults.max_rows);
        assert_eq!(app.format, OutputFormat::Text);
        assert_eq!(app.page_size, defaults.page_size);
    }

    #[test]
    fn file_values_override_defaults() {
        let (_dir, path) = write_config(
            r#"
            [analysis]
            max-rows = 500
            [output]
            page-size = 7
            "#,
        );
        let app = build_config(Some(&path), &[], None).unwrap();
        assert_eq!(app.max_rows, 500);
        assert_eq!(app.page_size, 7);
        assert_eq!(app.format, OutputFormat::Text);
    }

    #[test]
    fn set_values_override_file_values() {
        let (_dir, path) = write_config("[analysis]\nmax-rows = 500\n");
        let set_values = vec![
            "analysis.max-rows=900".to_string(),
            "output.format=json".to_string(),
            "output.page-size=3".to_string(),
        ];
        let app = build_config(Some(&path), &set_values, None).unwrap();
        assert_eq!(app.max_rows, 900);
        assert_eq!(app.format, OutputFormat::Json);
        assert_eq!(app.page_size, 3);
    }

    #[test]
    fn cli_format_overrides_everything() {
        let (_dir, path) = write_config("[output]\nformat = \"json\"\n");
        let set_values = vec!["output.format=json".to_string()];
        let app = build_config(Some(&path), &set_values, Some(OutputFormat::Text)).unwrap();
        assert_eq!(app.format, OutputFormat::Text);
    }

    #[test]
    fn malformed_set_values_are_rejected() {
        for bad in ["analysis.max-rows", "analysis.max-rows=lots", "output.format=xml", "foo.bar=1"] {
            let result = apply_set_values(FileConfig::default(), &[bad.to_string()]);
            assert!(matches!(result, Err(CliError::Config(_))), "{bad}");
        }
    }

    #[test]
    fn analysis_config_carries_row_limit() {
        let app = merge(FileConfig::default(), None);
        let config = analysis_config(&app, "d2".parse().unwrap()).unwrap();
        assert_eq!(config.max_rows, app.max_rows);
    }

    #[test]
    fn zero_row_limit_is_a_config_error() {
        let mut app = merge(FileConfig::default(), None);
        app.max_rows = 0;
        assert!(matches!(
            analysis_config(&app, ElectronConfiguration::default()),
            Err(CliError::Config(_))
        ));
    }
}
