use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::color::{ColorParseError, Rgb};
use crate::gradient::{GradientStop, ScrollGradient};
use crate::sections::{Section, SectionNav};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("gradient stop `{stop}`: {source}")]
    Color {
        stop: &'static str,
        #[source]
        source: ColorParseError,
    },
    #[error("{0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: String::from("Brand guidelines"),
            width: 1080.0,
            height: 720.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    pub document_height: f64,
    /// Pixels scrolled per wheel click.
    pub wheel_step: f64,
    /// How far above its top a section becomes the active tab.
    pub nav_offset: f64,
}

impl Default for PageSettings {
    fn default() -> Self {
        PageSettings {
            document_height: 5400.0,
            wheel_step: 120.0,
            nav_offset: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopConfig {
    pub from: String,
    pub to: String,
}

impl StopConfig {
    fn new(from: &str, to: &str) -> StopConfig {
        StopConfig { from: from.to_string(), to: to.to_string() }
    }

    fn parse(&self, stop: &'static str) -> Result<GradientStop, ConfigError> {
        let color = |value: &str| {
            Rgb::from_hex(value).map_err(|source| ConfigError::Color { stop, source })
        };
        Ok(GradientStop::new(color(&self.from)?, color(&self.to)?))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientConfig {
    pub angle: f32,
    pub start: StopConfig,
    pub middle: StopConfig,
    pub end: StopConfig,
}

impl Default for GradientConfig {
    fn default() -> Self {
        GradientConfig {
            angle: 135.0,
            start: StopConfig::new("#0f172a", "#312e81"),
            middle: StopConfig::new("#1e3a8a", "#7c3aed"),
            end: StopConfig::new("#0ea5e9", "#f472b6"),
        }
    }
}

impl GradientConfig {
    pub fn build(&self) -> Result<ScrollGradient, ConfigError> {
        Ok(ScrollGradient {
            angle_deg: self.angle,
            start: self.start.parse("start")?,
            middle: self.middle.parse("middle")?,
            end: self.end.parse("end")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub window: WindowConfig,
    pub page: PageSettings,
    pub gradient: GradientConfig,
    pub sections: Vec<Section>,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            window: WindowConfig::default(),
            page: PageSettings::default(),
            gradient: GradientConfig::default(),
            sections: vec![
                Section::new("logo", "Logo", 0.0),
                Section::new("colors", "Colors", 1080.0),
                Section::new("typography", "Typography", 2160.0),
                Section::new("motion", "Motion", 3240.0),
                Section::new("voice", "Voice & Tone", 4320.0),
            ],
        }
    }
}

impl PageConfig {
    pub fn load(path: &Path) -> Result<PageConfig, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = PageConfig::parse(&text)?;
        log::info!("loaded page config from {}", path.display());
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<PageConfig, ConfigError> {
        let config: PageConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.page.document_height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "document_height must be positive, got {}",
                self.page.document_height
            )));
        }
        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            return Err(ConfigError::Invalid(String::from("window dimensions must be positive")));
        }
        if let Some(section) = self
            .sections
            .iter()
            .find(|s| !(s.top >= 0.0 && s.top < self.page.document_height))
        {
            return Err(ConfigError::Invalid(format!(
                "section `{}` starts at {} outside the document",
                section.id, section.top
            )));
        }
        self.gradient.build().map(|_| ())
    }

    pub fn nav(&self) -> SectionNav {
        SectionNav::new(self.sections.clone(), self.page.nav_offset)
    }
}
