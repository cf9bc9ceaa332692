//! Volume -> layers

use std::path::Path;

use log::{debug, info};

use crate::{
    error::Result,
    format::LayerFormat,
    layer::{encode_layer, LayerFile},
    progress::Progress,
    volume::Volume,
};

/// Naming and format of exported layers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOptions {
    /// Prepended to the layer index, may contain directories
    pub prefix: String,
    pub format: LayerFormat,
}

impl Default for SplitOptions {
    fn default() -> Self {
        SplitOptions {
            prefix: "layer".into(),
            format: LayerFormat::Tga,
        }
    }
}

/// Parse and validate volume held in memory
pub fn decode(bytes: Vec<u8>) -> Result<Volume> {
    Volume::from_vec(bytes)
}

/// Write every layer of `volume` as an image file.
/// Returns written files in depth order.
pub fn split_volume<P>(
    volume: &Volume,
    options: &SplitOptions,
    progress: &mut P,
) -> Result<Vec<LayerFile>>
where
    P: Progress + ?Sized,
{
    let depth = volume.depth();
    let mut files = Vec::with_capacity(depth);

    for (index, layer) in volume.layers().enumerate() {
        let file = LayerFile::new(&options.prefix, index, depth, options.format);
        file.save(&layer)?;
        debug!("Layer {index} written to {}", file.path.display());

        files.push(file);
        progress.update(index + 1, depth);
    }

    Ok(files)
}

/// Read volume file at `input` and write its layers as image files
pub fn split<Q, P>(input: Q, options: &SplitOptions, progress: &mut P) -> Result<Vec<LayerFile>>
where
    Q: AsRef<Path>,
    P: Progress + ?Sized,
{
    let volume = Volume::from_file(input.as_ref())?;
    let files = split_volume(&volume, options, progress)?;

    info!(
        "{} layers of {} written",
        files.len(),
        input.as_ref().display()
    );
    Ok(files)
}

/// Encode every layer into an in-memory image file
pub fn encode_layers<P>(
    volume: &Volume,
    format: LayerFormat,
    progress: &mut P,
) -> Result<Vec<Vec<u8>>>
where
    P: Progress + ?Sized,
{
    let depth = volume.depth();
    let mut buffers = Vec::with_capacity(depth);

    for (index, layer) in volume.layers().enumerate() {
        buffers.push(encode_layer(&layer, format)?);
        progress.update(index + 1, depth);
    }

    Ok(buffers)
}
