//! Layers at the I/O boundary: loading input images and naming output files

use std::{
    fmt,
    io::Cursor,
    path::{Path, PathBuf},
};

use image::{DynamicImage, GrayImage, ImageError, ImageFormat};

use crate::{
    error::{Df3Error, Result},
    format::LayerFormat,
    luma::to_luma,
};

/// One input layer of the encoder
pub enum LayerSource {
    /// Image file, format guessed from extension or content
    Path(PathBuf),
    /// Encoded image in memory, `name` is used in error messages.
    /// Without `format` the extension of `name` decides, then the content.
    Bytes {
        name: String,
        data: Vec<u8>,
        format: Option<LayerFormat>,
    },
    /// Already decoded image
    Raster(DynamicImage),
}

impl LayerSource {
    pub fn name(&self) -> String {
        match self {
            LayerSource::Path(p) => p.display().to_string(),
            LayerSource::Bytes { name, .. } => name.clone(),
            LayerSource::Raster(_) => "<raster>".into(),
        }
    }

    /// Decode the source and convert it to 8bit luminance
    pub fn load(&self) -> Result<GrayImage> {
        let image = match self {
            LayerSource::Path(path) => {
                let data = std::fs::read(path)?;
                decode_image(&data, ImageFormat::from_path(path).ok())
            }
            LayerSource::Bytes { name, data, format } => {
                let format = match format {
                    Some(f) => Some(f.image_format()),
                    None => ImageFormat::from_path(name).ok(),
                };
                decode_image(data, format)
            }
            LayerSource::Raster(image) => Ok(image.clone()),
        };

        let image = image.map_err(|source| Df3Error::Decode {
            name: self.name(),
            source,
        })?;

        Ok(to_luma(image))
    }
}

impl fmt::Debug for LayerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LayerSource({})", self.name())
    }
}

impl From<PathBuf> for LayerSource {
    fn from(path: PathBuf) -> Self {
        LayerSource::Path(path)
    }
}

impl From<&Path> for LayerSource {
    fn from(path: &Path) -> Self {
        LayerSource::Path(path.to_path_buf())
    }
}

impl From<GrayImage> for LayerSource {
    fn from(image: GrayImage) -> Self {
        LayerSource::Raster(DynamicImage::ImageLuma8(image))
    }
}

// TGA has no magic number, so the extension decides when it is known
fn decode_image(
    data: &[u8],
    format: Option<ImageFormat>,
) -> std::result::Result<DynamicImage, ImageError> {
    match format {
        Some(format) => image::load_from_memory_with_format(data, format),
        None => image::load_from_memory(data),
    }
}

/// Output layer file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerFile {
    pub path: PathBuf,
    pub index: usize,
    pub format: LayerFormat,
}

/// Number of digits needed for layer indexes of a volume, at least 1
pub fn index_width(depth: usize) -> usize {
    let mut last = depth.saturating_sub(1);
    let mut digits = 1;
    while last >= 10 {
        last /= 10;
        digits += 1;
    }
    digits
}

/// `{prefix}{zero padded index}.{ext}`
pub fn layer_name(prefix: &str, index: usize, depth: usize, format: LayerFormat) -> String {
    let width = index_width(depth);
    format!("{prefix}{index:0width$}.{}", format.extension())
}

impl LayerFile {
    pub fn new(prefix: &str, index: usize, depth: usize, format: LayerFormat) -> LayerFile {
        LayerFile {
            path: PathBuf::from(layer_name(prefix, index, depth, format)),
            index,
            format,
        }
    }

    /// Encode `image` and write it to `self.path`
    pub fn save(&self, image: &GrayImage) -> Result<()> {
        image
            .save_with_format(&self.path, self.format.image_format())
            .map_err(|e| image_write_error(&self.path, e))
    }
}

fn image_write_error(path: &Path, err: ImageError) -> Df3Error {
    match err {
        ImageError::IoError(e) => Df3Error::Io(e),
        source => Df3Error::Encode {
            path: path.to_path_buf(),
            source,
        },
    }
}

/// Encode gray image into an in-memory file of given format
pub fn encode_layer(image: &GrayImage, format: LayerFormat) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, format.image_format())
        .map_err(|e| image_write_error(Path::new("<memory>"), e))?;
    Ok(buffer.into_inner())
}
