use std::{fmt, str::FromStr};

use image::ImageFormat;

/// Image format of exported layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayerFormat {
    #[default]
    Tga,
    Png,
}

pub const FORMAT_NAMES: &[&str] = &["tga", "png"];

impl LayerFormat {
    /// File extension, lowercase, without dot
    pub fn extension(self) -> &'static str {
        match self {
            LayerFormat::Tga => "tga",
            LayerFormat::Png => "png",
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            LayerFormat::Tga => ImageFormat::Tga,
            LayerFormat::Png => ImageFormat::Png,
        }
    }
}

impl FromStr for LayerFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tga" => Ok(LayerFormat::Tga),
            "png" => Ok(LayerFormat::Png),
            _ => Err(format!("Unknown layer format '{s}'")),
        }
    }
}

impl fmt::Display for LayerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
