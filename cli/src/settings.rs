use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use sweeper_core::{CellCount, ConfigError, Coord, GameConfig, Preset};

/// Game settings, read from a TOML file and overridden by command-line flags.
///
/// Explicit `rows`, `cols` and `mines` win over the preset they start from.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub preset: Option<Preset>,
    pub rows: Option<Coord>,
    pub cols: Option<Coord>,
    pub mines: Option<CellCount>,
    pub seed: Option<u64>,
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read settings from {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid settings in {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Values set in `overrides` replace ours.
    pub fn merge(self, overrides: Settings) -> Self {
        Self {
            preset: overrides.preset.or(self.preset),
            rows: overrides.rows.or(self.rows),
            cols: overrides.cols.or(self.cols),
            mines: overrides.mines.or(self.mines),
            seed: overrides.seed.or(self.seed),
        }
    }

    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        let base = self.preset.map(Preset::config).unwrap_or_default();
        GameConfig::new(
            self.rows.unwrap_or(base.rows),
            self.cols.unwrap_or(base.cols),
            self.mines.unwrap_or(base.mines),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_settings_default_to_beginner() {
        let settings = Settings::parse("").unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.game_config(), Ok(Preset::Beginner.config()));
    }

    #[test]
    fn explicit_sizes_override_preset() {
        let settings = Settings::parse(
            r#"
            preset = "expert"
            mines = 50
            seed = 7
            "#,
        )
        .unwrap();

        assert_eq!(settings.game_config(), GameConfig::new(16, 30, 50));
        assert_eq!(settings.seed, Some(7));
    }

    #[test]
    fn flags_override_file() {
        let file = Settings::parse("preset = \"intermediate\"\nseed = 1").unwrap();
        let flags = Settings {
            seed: Some(2),
            rows: Some(10),
            ..Default::default()
        };

        let merged = file.merge(flags);

        assert_eq!(merged.preset, Some(Preset::Intermediate));
        assert_eq!(merged.seed, Some(2));
        assert_eq!(merged.game_config(), GameConfig::new(10, 16, 40));
    }

    #[test]
    fn unknown_keys_and_bad_boards_are_rejected() {
        assert!(Settings::parse("difficulty = \"hard\"").is_err());
        assert!(Settings::parse("preset = \"nightmare\"").is_err());

        let settings = Settings {
            rows: Some(2),
            cols: Some(2),
            mines: Some(1),
            ..Default::default()
        };
        assert!(settings.game_config().is_err());
    }
}
