use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::assets::color::parse_color;
use crate::foundation::core::Rgba8;
use crate::foundation::error::{PhotoplateError, PhotoplateResult};

/// A template file: an ordered list of templates.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Templates {
    /// Templates in file order.
    pub templates: Vec<Template>,
}

/// One editable photo template.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Template {
    /// Display name.
    pub name: String,
    /// Asset identifier of the background image.
    pub background: String,
    /// Text layers created when the template is opened, bottom to top.
    pub texts: Vec<TextSpec>,
}

/// Style of a text layer as authored in a template.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TextSpec {
    /// Requested font family; unknown families fall back to the default font.
    pub font: String,
    /// Point size.
    pub size: i64,
    /// Named color or `#RRGGBB[AA]`.
    pub color: String,
}

impl Templates {
    /// Parse a template file from a JSON reader and validate every template.
    pub fn from_reader<R: std::io::Read>(r: R) -> PhotoplateResult<Self> {
        let parsed: Self = serde_json::from_reader(r)
            .map_err(|e| PhotoplateError::malformed_template(format!("parse templates JSON: {e}")))?;
        parsed.validate()?;
        Ok(parsed)
    }

    /// Parse a template file from a JSON string.
    pub fn from_json_str(s: &str) -> PhotoplateResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse a template file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> PhotoplateResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PhotoplateError::malformed_template(format!(
                "open templates JSON '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validate every template.
    pub fn validate(&self) -> PhotoplateResult<()> {
        self.templates.iter().try_for_each(Template::validate)
    }

    /// First template named `name`.
    pub fn find(&self, name: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.name == name)
    }
}

impl Template {
    /// Parse a single template object from JSON.
    pub fn from_json_str(s: &str) -> PhotoplateResult<Self> {
        let parsed: Self = serde_json::from_str(s)
            .map_err(|e| PhotoplateError::malformed_template(format!("parse template JSON: {e}")))?;
        parsed.validate()?;
        Ok(parsed)
    }

    /// Check fields serde cannot: a background id and well-formed text specs.
    pub fn validate(&self) -> PhotoplateResult<()> {
        if self.background.trim().is_empty() {
            return Err(PhotoplateError::malformed_template(format!(
                "template \"{}\" has an empty background",
                self.name
            )));
        }
        for (i, text) in self.texts.iter().enumerate() {
            text.validate().map_err(|e| {
                PhotoplateError::malformed_template(format!(
                    "template \"{}\" texts[{i}]: {e}",
                    self.name
                ))
            })?;
        }
        Ok(())
    }
}

impl TextSpec {
    /// Convenience constructor.
    pub fn new(font: impl Into<String>, size: i64, color: impl Into<String>) -> Self {
        Self {
            font: font.into(),
            size,
            color: color.into(),
        }
    }

    /// Reject non-positive sizes and unparseable colors.
    pub fn validate(&self) -> PhotoplateResult<()> {
        if self.size <= 0 {
            return Err(PhotoplateError::malformed_template(format!(
                "text size must be > 0, got {}",
                self.size
            )));
        }
        self.parsed_color().map(|_| ())
    }

    /// Point size as a float.
    pub fn point_size(&self) -> f64 {
        self.size as f64
    }

    /// Parsed text color.
    pub fn parsed_color(&self) -> PhotoplateResult<Rgba8> {
        parse_color(&self.color)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/template/model.rs"]
mod tests;
