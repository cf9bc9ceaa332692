//! Conversion between POV-Ray density files (DF3) and stacks of grayscale images.
//!
//! A DF3 volume is a 6 byte big-endian header (width, height, depth)
//! followed by `depth` planes of `width * height` samples.
//! Every plane maps to one grayscale layer image.

pub mod data_source;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod format;
pub mod header;
pub mod layer;
pub mod luma;
pub mod progress;
pub mod sample;
pub mod test_helpers;
pub mod volume;

pub use decoder::{decode, encode_layers, split, split_volume, SplitOptions};
pub use encoder::{combine, encode, encode_images, write_volume};
pub use error::{Df3Error, Result};
pub use format::LayerFormat;
pub use header::{decode_header, encode_header, VolumeHeader, HEADER_LEN};
pub use layer::{encode_layer, layer_name, LayerFile, LayerSource};
pub use progress::{NoProgress, Progress};
pub use sample::ByteWidth;
pub use volume::Volume;
