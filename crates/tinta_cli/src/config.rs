//! Tinta configuration file handling

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tinta_theme::{ColorScheme, PartialHueSpec, PartialPaletteSpec};

pub const CONFIG_FILE: &str = "tinta.toml";

/// Top-level Tinta configuration (tinta.toml)
#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TintaConfig {
    #[serde(default)]
    pub output: OutputConfig,
    /// Hue overrides, keyed by tone
    #[serde(default)]
    pub palette: PartialPaletteSpec,
}

/// Output configuration
#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub scheme: SchemeSelection,
    /// Output file; stdout when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Nested token tree
    #[default]
    Json,
    /// Custom properties
    Css,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SchemeSelection {
    Light,
    Dark,
    #[default]
    Both,
}

impl SchemeSelection {
    pub fn schemes(self) -> &'static [ColorScheme] {
        match self {
            SchemeSelection::Light => &[ColorScheme::Light],
            SchemeSelection::Dark => &[ColorScheme::Dark],
            SchemeSelection::Both => &[ColorScheme::Light, ColorScheme::Dark],
        }
    }
}

impl TintaConfig {
    /// Load configuration from a directory (looks for tinta.toml) or a file
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = if path.is_file() {
            path.to_path_buf()
        } else {
            path.join(CONFIG_FILE)
        };

        if !config_path.exists() {
            anyhow::bail!(
                "No {CONFIG_FILE} found in {}. Run `tinta init` to create one.",
                path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    /// Load `path` when given, else `tinta.toml` in `dir` when present, else
    /// the defaults
    pub fn load(path: Option<&Path>, dir: &Path) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_dir(path),
            None if dir.join(CONFIG_FILE).is_file() => Self::load_from_dir(dir),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Starter configuration written by `tinta init`
    pub fn starter() -> Self {
        let mut palette = PartialPaletteSpec::default();
        palette.primary = Some(PartialHueSpec {
            lightest: Some("#ffffff".to_string()),
            darkest: Some("#101112".to_string()),
            mid: Some("#2276fc".to_string()),
            mid_point: Some(500),
        });

        Self {
            output: OutputConfig::default(),
            palette,
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_is_all_defaults() {
        let config = TintaConfig::from_toml("").unwrap();
        assert_eq!(config, TintaConfig::default());
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.scheme.schemes(), [ColorScheme::Light, ColorScheme::Dark]);
    }

    #[test]
    fn parses_output_and_palette() {
        let config = TintaConfig::from_toml(
            r##"
            [output]
            format = "css"
            scheme = "dark"
            path = "theme.css"

            [palette.primary]
            mid = "#d946ef"
            lightest = "#fdf4ff"

            [palette.positive]
            mid = "#43d675"
            mid_point = 400
            "##,
        )
        .unwrap();

        assert_eq!(config.output.format, OutputFormat::Css);
        assert_eq!(config.output.scheme, SchemeSelection::Dark);
        assert_eq!(config.output.path, Some(PathBuf::from("theme.css")));

        let primary = config.palette.primary.unwrap();
        assert_eq!(primary.mid.as_deref(), Some("#d946ef"));
        assert_eq!(primary.darkest, None);
        assert_eq!(config.palette.positive.and_then(|hue| hue.mid_point), Some(400));
        assert!(config.palette.caution.is_none());
    }

    #[test]
    fn rejects_unknown_sections() {
        assert!(TintaConfig::from_toml("[palette.brand]\nmid = \"red\"").is_err());
        assert!(TintaConfig::from_toml("[outptu]\nformat = \"css\"").is_err());
    }

    #[test]
    fn starter_config_round_trips() {
        let config = TintaConfig::starter();
        let text = config.to_toml().unwrap();
        assert!(text.contains("mid = \"#2276fc\""));
        assert_eq!(TintaConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn load_from_dir_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = TintaConfig::load_from_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains("Run `tinta init`"));

        assert_eq!(TintaConfig::load(None, dir.path()).unwrap(), TintaConfig::default());
    }

    #[test]
    fn load_finds_config_in_dir_and_by_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[palette.critical]\nmid = \"#f43f5e\"\n").unwrap();

        let from_dir = TintaConfig::load(None, dir.path()).unwrap();
        let from_path = TintaConfig::load(Some(&path), Path::new("/nonexistent")).unwrap();
        assert_eq!(from_dir, from_path);
        assert_eq!(
            from_dir.palette.critical.and_then(|hue| hue.mid),
            Some("#f43f5e".to_string())
        );
    }

    #[test]
    fn parse_errors_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[output]\nformat = \"yaml\"\n").unwrap();
        let err = TintaConfig::load_from_dir(dir.path()).unwrap_err();
        assert!(format!("{err}").starts_with("Failed to parse"));
    }
}
