use std::fmt;

use serde::{Deserialize, Serialize};

use crate::display::BoardGeometry;
use crate::force::Force;


// Colors and proportions used by the board renderer. Radii are fractions of the cell size.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardStyle {
    pub dark_square: String,
    pub light_square: String,
    pub white_piece_fill: String,
    pub white_piece_label: String,
    pub black_piece_fill: String,
    pub black_piece_label: String,
    pub piece_radius_fraction: f64,
    pub movable_marker_color: String,
    pub movable_marker_radius_fraction: f64,
    pub killable_marker_color: String,
    pub killable_marker_radius_fraction: f64,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub cell_size_px: f64,
    pub style: BoardStyle,
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    Invalid(String),
}


impl BoardStyle {
    pub fn piece_fill(&self, force: Force) -> &str {
        match force {
            Force::White => &self.white_piece_fill,
            Force::Black => &self.black_piece_fill,
        }
    }
    pub fn piece_label(&self, force: Force) -> &str {
        match force {
            Force::White => &self.white_piece_label,
            Force::Black => &self.black_piece_label,
        }
    }
}

impl Default for BoardStyle {
    fn default() -> Self {
        BoardStyle {
            dark_square: "black".to_owned(),
            light_square: "white".to_owned(),
            white_piece_fill: "#f0d9b5".to_owned(),
            white_piece_label: "black".to_owned(),
            black_piece_fill: "#b58863".to_owned(),
            black_piece_label: "white".to_owned(),
            piece_radius_fraction: 0.4,
            movable_marker_color: "limegreen".to_owned(),
            movable_marker_radius_fraction: 0.15,
            killable_marker_color: "crimson".to_owned(),
            killable_marker_radius_fraction: 0.2,
        }
    }
}

impl Default for BoardConfig {
    // 320px board.
    fn default() -> Self {
        BoardConfig {
            cell_size_px: 40.0,
            style: BoardStyle::default(),
        }
    }
}

impl BoardConfig {
    // Missing fields take their default values.
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let config: BoardConfig = serde_json::from_str(s).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.cell_size_px.is_finite() && self.cell_size_px > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "cell size must be a positive number, got {}",
                self.cell_size_px
            )));
        }
        let style = &self.style;
        for (name, fraction) in [
            ("piece_radius_fraction", style.piece_radius_fraction),
            ("movable_marker_radius_fraction", style.movable_marker_radius_fraction),
            ("killable_marker_radius_fraction", style.killable_marker_radius_fraction),
        ] {
            if !(fraction > 0.0 && fraction <= 0.5) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be in (0, 0.5], got {fraction}"
                )));
            }
        }
        Ok(())
    }

    pub fn geometry(&self) -> BoardGeometry { BoardGeometry::new(self.cell_size_px) }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(err) => write!(f, "cannot parse board config: {err}"),
            ConfigError::Invalid(message) => write!(f, "invalid board config: {message}"),
        }
    }
}

impl std::error::Error for ConfigError {}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_uses_defaults() {
        let config =
            BoardConfig::from_json(r#"{"cell_size_px": 60, "style": {"dark_square": "brown"}}"#)
                .unwrap();
        assert_eq!(config.cell_size_px, 60.0);
        assert_eq!(config.style.dark_square, "brown");
        assert_eq!(config.style.light_square, BoardStyle::default().light_square);
        assert_eq!(config.geometry().board_width_px(), 480.0);
    }

    #[test]
    fn empty_config_is_default() {
        assert_eq!(BoardConfig::from_json("{}").unwrap(), BoardConfig::default());
    }

    #[test]
    fn reject_bad_values() {
        assert!(matches!(
            BoardConfig::from_json(r#"{"cell_size_px": 0}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            BoardConfig::from_json(r#"{"style": {"piece_radius_fraction": 0.7}}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(BoardConfig::from_json("[1, 2]"), Err(ConfigError::Parse(_))));
    }
}
