use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::app::infrastructure::error::AppError;
use crate::app::infrastructure::platform::config_directory;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FontChoice {
    Times,
    Helvetica,
    Courier,
}

/// Paper sheet simulated by the page surface, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaperSize {
    #[default]
    Letter,
    A4,
}

impl PaperSize {
    pub fn inches(&self) -> (f64, f64) {
        match self {
            Self::Letter => (8.5, 11.0),
            Self::A4 => (8.27, 11.69),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_font")]
    pub font: FontChoice,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    #[serde(default)]
    pub paper_size: PaperSize,

    /// Logical display resolution used to size pages
    #[serde(default = "default_dpi")]
    pub dpi: u32,

    #[serde(default = "default_min_font_size")]
    pub min_font_size: u32,

    #[serde(default = "default_max_font_size")]
    pub max_font_size: u32,

    #[serde(default = "default_show_splash")]
    pub show_splash: bool,

    /// Last directory used in a file open/save dialog.
    #[serde(default)]
    pub last_open_directory: Option<String>,
}

fn default_font() -> FontChoice {
    FontChoice::Times
}

fn default_font_size() -> u32 {
    12
}

fn default_dpi() -> u32 {
    96
}

fn default_min_font_size() -> u32 {
    6
}

fn default_max_font_size() -> u32 {
    72
}

fn default_show_splash() -> bool {
    true
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            font: default_font(),
            font_size: default_font_size(),
            paper_size: PaperSize::default(),
            dpi: default_dpi(),
            min_font_size: default_min_font_size(),
            max_font_size: default_max_font_size(),
            show_splash: default_show_splash(),
            last_open_directory: None,
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        let config_path = Self::get_config_path();

        match fs::read_to_string(&config_path) {
            Ok(contents) => match serde_json::from_str::<AppSettings>(&contents) {
                Ok(settings) => settings.normalized(),
                Err(e) => {
                    tracing::warn!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => {
                let default = Self::default();
                if let Err(e) = default.save() {
                    tracing::debug!("Could not write default settings: {}", e);
                }
                default
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), AppError> {
        let config_path = Self::get_config_path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, json)?;

        Ok(())
    }

    pub fn get_config_path() -> PathBuf {
        config_directory().join("settings.json")
    }

    /// Repair values a hand-edited file may carry: zero sizes, a zero DPI,
    /// or an inverted zoom range.
    pub fn normalized(mut self) -> Self {
        if self.dpi == 0 {
            self.dpi = default_dpi();
        }
        if self.min_font_size == 0 {
            self.min_font_size = 1;
        }
        if self.max_font_size < self.min_font_size {
            std::mem::swap(&mut self.min_font_size, &mut self.max_font_size);
        }
        self.font_size = self.font_size.clamp(self.min_font_size, self.max_font_size);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.font, FontChoice::Times);
        assert_eq!(settings.font_size, 12);
        assert_eq!(settings.paper_size, PaperSize::Letter);
        assert_eq!(settings.dpi, 96);
        assert_eq!(settings.min_font_size, 6);
        assert_eq!(settings.max_font_size, 72);
        assert!(settings.show_splash);
        assert!(settings.last_open_directory.is_none());
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = AppSettings {
            paper_size: PaperSize::A4,
            last_open_directory: Some("/home/user/docs".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{"font_size": 14, "paper_size": "A4"}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.font_size, 14);
        assert_eq!(settings.paper_size, PaperSize::A4);
        assert_eq!(settings.dpi, 96);
        assert!(settings.show_splash);
    }

    #[test]
    fn test_font_choice_serialization() {
        let settings = AppSettings {
            font: FontChoice::Courier,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"Courier\""));
    }

    #[test]
    fn test_normalized_repairs_bad_values() {
        let settings = AppSettings {
            dpi: 0,
            min_font_size: 40,
            max_font_size: 8,
            font_size: 100,
            ..Default::default()
        }
        .normalized();
        assert_eq!(settings.dpi, 96);
        assert_eq!(settings.min_font_size, 8);
        assert_eq!(settings.max_font_size, 40);
        assert_eq!(settings.font_size, 40);
    }

    #[test]
    fn test_paper_dimensions() {
        assert_eq!(PaperSize::Letter.inches(), (8.5, 11.0));
        assert_eq!(PaperSize::A4.inches(), (8.27, 11.69));
    }
}
