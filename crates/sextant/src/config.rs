//! Configuration types for Sextant checks.
//!
//! This module provides configuration structures that control how diagrams
//! are extracted and how conservatively they are measured. All types implement
//! [`serde::Deserialize`] for loading from external sources; every field has
//! a default, so an empty document is a valid configuration.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining all sections.
//! - [`ExtractConfig`] - Field tag and delimiter that introduce a diagram.
//! - [`GanttConfig`] - Grid width and per-character widths for timeline bars.
//! - [`QuadrantConfig`] - Preview length for offending quadrant lines.
//!
//! The timeline constants are calibrated against one renderer version's
//! default configuration. They are estimates, not renderer facts.
//!
//! # Example
//!
//! ```
//! # use sextant::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.gantt().grid_width(), 700.0);
//! assert!(config.validate().is_ok());
//! ```

use serde::Deserialize;

use sextant_parser::ExtractOptions;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Extraction section.
    #[serde(default)]
    extract: ExtractConfig,

    /// Timeline checker section.
    #[serde(default)]
    gantt: GanttConfig,

    /// Quadrant checker section.
    #[serde(default)]
    quadrant: QuadrantConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    ///
    /// # Arguments
    ///
    /// * `extract` - Field tag and delimiter settings.
    /// * `gantt` - Timeline measurement constants.
    /// * `quadrant` - Quadrant reporting settings.
    pub fn new(extract: ExtractConfig, gantt: GanttConfig, quadrant: QuadrantConfig) -> Self {
        Self {
            extract,
            gantt,
            quadrant,
        }
    }

    /// Returns the extraction configuration.
    pub fn extract(&self) -> &ExtractConfig {
        &self.extract
    }

    /// Returns the timeline checker configuration.
    pub fn gantt(&self) -> &GanttConfig {
        &self.gantt
    }

    /// Returns the quadrant checker configuration.
    pub fn quadrant(&self) -> &QuadrantConfig {
        &self.quadrant
    }

    /// Check that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid value.
    pub fn validate(&self) -> Result<(), String> {
        self.extract.validate()?;
        self.gantt.validate()?;
        self.quadrant.validate()
    }
}

/// How diagram literals are recognized in the content source.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Field tag preceding the literal.
    field: String,

    /// Character that opens and closes the literal.
    delimiter: char,
}

impl ExtractConfig {
    /// Creates a new [`ExtractConfig`].
    pub fn new(field: impl Into<String>, delimiter: char) -> Self {
        Self {
            field: field.into(),
            delimiter,
        }
    }

    /// Returns the field tag.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the literal delimiter.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Options for [`sextant_parser::extract`].
    pub fn options(&self) -> ExtractOptions {
        ExtractOptions::new(self.field.clone(), self.delimiter)
    }

    fn validate(&self) -> Result<(), String> {
        if self.field.trim().is_empty() {
            return Err("extract.field must not be empty".to_string());
        }
        if self.delimiter.is_whitespace() {
            return Err("extract.delimiter must not be whitespace".to_string());
        }
        Ok(())
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        let options = ExtractOptions::default();
        Self::new(options.field(), options.delimiter())
    }
}

/// Measurement constants for timeline bars and labels.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GanttConfig {
    /// Horizontal pixels available to bars, label column excluded.
    grid_width: f64,

    /// Estimated pixels per character with a code point of 127 or below.
    ascii_char_width: f64,

    /// Estimated pixels per character with a code point above 127.
    wide_char_width: f64,
}

impl GanttConfig {
    /// Default grid width in pixels.
    pub const DEFAULT_GRID_WIDTH: f64 = 700.0;
    /// Default ASCII character width in pixels.
    pub const DEFAULT_ASCII_CHAR_WIDTH: f64 = 8.0;
    /// Default non-ASCII character width in pixels.
    pub const DEFAULT_WIDE_CHAR_WIDTH: f64 = 14.0;

    /// Creates a new [`GanttConfig`].
    ///
    /// # Arguments
    ///
    /// * `grid_width` - Pixels shared by all bars of a chart.
    /// * `ascii_char_width` - Pixels per ASCII character.
    /// * `wide_char_width` - Pixels per non-ASCII character.
    pub fn new(grid_width: f64, ascii_char_width: f64, wide_char_width: f64) -> Self {
        Self {
            grid_width,
            ascii_char_width,
            wide_char_width,
        }
    }

    /// Returns the grid width in pixels.
    pub fn grid_width(&self) -> f64 {
        self.grid_width
    }

    /// Returns the ASCII character width in pixels.
    pub fn ascii_char_width(&self) -> f64 {
        self.ascii_char_width
    }

    /// Returns the non-ASCII character width in pixels.
    pub fn wide_char_width(&self) -> f64 {
        self.wide_char_width
    }

    fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("gantt.grid_width", self.grid_width),
            ("gantt.ascii_char_width", self.ascii_char_width),
            ("gantt.wide_char_width", self.wide_char_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{name} must be a positive number, got {value}"));
            }
        }
        Ok(())
    }
}

impl Default for GanttConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_GRID_WIDTH,
            Self::DEFAULT_ASCII_CHAR_WIDTH,
            Self::DEFAULT_WIDE_CHAR_WIDTH,
        )
    }
}

/// Reporting settings for quadrant charts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QuadrantConfig {
    /// Maximum number of characters of an offending line echoed in a finding.
    preview_len: usize,
}

impl QuadrantConfig {
    /// Default preview length in characters.
    pub const DEFAULT_PREVIEW_LEN: usize = 60;

    /// Creates a new [`QuadrantConfig`].
    pub fn new(preview_len: usize) -> Self {
        Self { preview_len }
    }

    /// Returns the preview length in characters.
    pub fn preview_len(&self) -> usize {
        self.preview_len
    }

    fn validate(&self) -> Result<(), String> {
        if self.preview_len == 0 {
            return Err("quadrant.preview_len must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for QuadrantConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PREVIEW_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.extract().field(), "diagram");
        assert_eq!(config.extract().delimiter(), '`');
        assert_eq!(config.gantt().grid_width(), 700.0);
        assert_eq!(config.gantt().ascii_char_width(), 8.0);
        assert_eq!(config.gantt().wide_char_width(), 14.0);
        assert_eq!(config.quadrant().preview_len(), 60);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_extract_options_follow_config() {
        let options = ExtractConfig::new("chart", '|').options();

        assert_eq!(options.field(), "chart");
        assert_eq!(options.delimiter(), '|');
    }

    #[test]
    fn test_validate_rejects_non_positive_widths() {
        let config = AppConfig::new(
            ExtractConfig::default(),
            GanttConfig::new(0.0, 8.0, 14.0),
            QuadrantConfig::default(),
        );
        let err = config.validate().unwrap_err();
        assert!(err.contains("gantt.grid_width"));

        let config = AppConfig::new(
            ExtractConfig::default(),
            GanttConfig::new(700.0, 8.0, f64::NAN),
            QuadrantConfig::default(),
        );
        assert!(config.validate().unwrap_err().contains("wide_char_width"));
    }

    #[test]
    fn test_validate_rejects_bad_extract_and_preview() {
        let config = AppConfig::new(
            ExtractConfig::new(" ", '`'),
            GanttConfig::default(),
            QuadrantConfig::default(),
        );
        assert!(config.validate().unwrap_err().contains("extract.field"));

        let config = AppConfig::new(
            ExtractConfig::new("diagram", ' '),
            GanttConfig::default(),
            QuadrantConfig::default(),
        );
        assert!(config.validate().unwrap_err().contains("extract.delimiter"));

        let config = AppConfig::new(
            ExtractConfig::default(),
            GanttConfig::default(),
            QuadrantConfig::new(0),
        );
        assert!(config.validate().unwrap_err().contains("preview_len"));
    }
}
