//! The flat parameter set a host hands to a render call
//!
//! Every field has a default, so a host (or a JSON file) only needs to name
//! what it changes. [`OverlayParams::validate`] enforces the documented
//! ranges; colors are parsed when the params are turned into block specs and
//! style.

use std::fmt;

use serde::{Deserialize, Serialize};

use overlay_core::{
    error::{OverlayError, Result},
    BlockRole, Color, HorizontalAlign, ShadowStyle, StyleConfig, TextBlockSpec, VerticalAnchor,
};

/// Everything a render call can be told, in one flat struct
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverlayParams {
    pub heading: String,
    pub heading_font: String,
    pub heading_size: u32,
    pub heading_color: String,

    pub description: String,
    pub description_font: String,
    pub description_size: u32,
    pub description_color: String,

    pub author: String,
    pub author_font: String,
    pub author_size: u32,
    pub author_color: String,

    pub horizontal_align: HorizontalAlign,
    pub vertical_position: VerticalAnchor,
    pub margin_percent: f32,
    pub line_spacing: u32,
    pub width_percent: f32,

    pub heading_padding: u32,
    pub description_padding: u32,
    pub author_padding: u32,
    pub boundary_padding: u32,

    pub shadow_enabled: bool,
    pub shadow_offset: u32,
    pub shadow_color: String,
    pub shadow_opacity: u8,
    pub shadow_blur: u32,
}

impl Default for OverlayParams {
    fn default() -> Self {
        Self {
            heading: "Main Heading".to_string(),
            heading_font: "DejaVuSans-Bold.ttf".to_string(),
            heading_size: 60,
            heading_color: "#000000".to_string(),

            description: "This is a description of the image that can span multiple lines if needed."
                .to_string(),
            description_font: "DejaVuSans.ttf".to_string(),
            description_size: 30,
            description_color: "#333333".to_string(),

            author: "Author Name".to_string(),
            author_font: "DejaVuSans.ttf".to_string(),
            author_size: 24,
            author_color: "#666666".to_string(),

            horizontal_align: HorizontalAlign::Left,
            vertical_position: VerticalAnchor::Top,
            margin_percent: 5.0,
            line_spacing: 20,
            width_percent: 80.0,

            heading_padding: 20,
            description_padding: 20,
            author_padding: 20,
            boundary_padding: 0,

            shadow_enabled: false,
            shadow_offset: 2,
            shadow_color: "#000000".to_string(),
            shadow_opacity: 128,
            shadow_blur: 2,
        }
    }
}

impl OverlayParams {
    /// Params with every text field empty and everything else defaulted
    pub fn blank() -> Self {
        Self {
            heading: String::new(),
            description: String::new(),
            author: String::new(),
            ..Self::default()
        }
    }

    /// Checks every numeric field against its allowed range
    pub fn validate(&self) -> Result<()> {
        check_range("heading_size", self.heading_size, 10, 200)?;
        check_range("description_size", self.description_size, 10, 200)?;
        check_range("author_size", self.author_size, 10, 200)?;
        check_range("margin_percent", self.margin_percent, 0.0, 20.0)?;
        check_range("line_spacing", self.line_spacing, 0, 200)?;
        check_range("width_percent", self.width_percent, 10.0, 100.0)?;
        check_range("heading_padding", self.heading_padding, 0, 200)?;
        check_range("description_padding", self.description_padding, 0, 200)?;
        check_range("author_padding", self.author_padding, 0, 200)?;
        check_range("boundary_padding", self.boundary_padding, 0, 200)?;
        check_range("shadow_offset", self.shadow_offset, 1, 10)?;
        check_range("shadow_blur", self.shadow_blur, 0, 10)?;
        Ok(())
    }

    /// The three blocks in stacking order, colors parsed
    ///
    /// Blank blocks are still returned; layout drops them.
    pub fn block_specs(&self) -> Result<[TextBlockSpec; 3]> {
        Ok([
            TextBlockSpec::new(
                BlockRole::Heading,
                self.heading.as_str(),
                self.heading_font.as_str(),
                self.heading_size,
                Color::from_hex(&self.heading_color)?,
                self.heading_padding,
            ),
            TextBlockSpec::new(
                BlockRole::Description,
                self.description.as_str(),
                self.description_font.as_str(),
                self.description_size,
                Color::from_hex(&self.description_color)?,
                self.description_padding,
            ),
            TextBlockSpec::new(
                BlockRole::Author,
                self.author.as_str(),
                self.author_font.as_str(),
                self.author_size,
                Color::from_hex(&self.author_color)?,
                self.author_padding,
            ),
        ])
    }

    /// Global style for the call, shadow color parsed
    pub fn style(&self) -> Result<StyleConfig> {
        Ok(StyleConfig {
            margin_percent: self.margin_percent,
            width_percent: self.width_percent,
            line_spacing: self.line_spacing,
            horizontal_align: self.horizontal_align,
            vertical_anchor: self.vertical_position,
            boundary_padding: self.boundary_padding,
            shadow: ShadowStyle {
                enabled: self.shadow_enabled,
                offset: self.shadow_offset as i32,
                color: Color::from_hex(&self.shadow_color)?,
                opacity: self.shadow_opacity,
                blur_radius: self.shadow_blur,
            },
        })
    }

    /// Parses a JSON object; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| OverlayError::Config(format!("invalid parameters: {}", e)))
    }
}

fn check_range<T>(name: &str, value: T, min: T, max: T) -> Result<()>
where
    T: Copy + PartialOrd + fmt::Display,
{
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(OverlayError::Config(format!(
            "{} must be within {}..={}, got {}",
            name, min, max, value
        )))
    }
}
