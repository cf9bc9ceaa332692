//! Command line front-end of `df3_lib`: `df3split` and `df3combine`

pub mod args;
pub mod config;
pub mod discovery;
pub mod progress;

use df3_lib::{combine, split_volume, LayerSource, Volume};
use log::debug;

use crate::{
    config::{CombineConfig, SplitConfig},
    discovery::find_layers,
    progress::{bar_observer, layer_bar},
};

/// Combine layers found by prefix into one volume
pub fn run_combine(cfg: &CombineConfig) -> df3_lib::Result<()> {
    let files = find_layers(&cfg.prefix, Some(&cfg.output))?;
    debug!("Found {} layers with prefix '{}'", files.len(), cfg.prefix);

    if !cfg.silent {
        // Size of first layer, the encoder checks all of them
        if let Ok((width, height)) = image::image_dimensions(&files[0]) {
            println!("Size: {}x{}, {} layers", width, height, files.len());
        }
    }

    let sources: Vec<_> = files.into_iter().map(LayerSource::Path).collect();
    let bar = layer_bar(sources.len(), cfg.silent);
    combine(&cfg.output, &sources, &mut bar_observer(&bar))?;
    bar.finish();

    if !cfg.silent {
        println!("Done.");
    }
    Ok(())
}

/// Split volume into layer images
pub fn run_split(cfg: &SplitConfig) -> df3_lib::Result<()> {
    let volume = Volume::from_file(&cfg.input)?;

    if !cfg.silent {
        let header = volume.header();
        let bytes = volume.byte_width().bytes();
        println!(
            "Size: {}x{}, {} layers",
            header.width, header.height, header.depth
        );
        println!(
            "Voxel resolution: {} byte{}",
            bytes,
            if bytes > 1 { "s" } else { "" }
        );
    }

    let bar = layer_bar(volume.depth(), cfg.silent);
    split_volume(&volume, &cfg.options, &mut bar_observer(&bar))?;
    bar.finish();

    if !cfg.silent {
        println!("Done.");
    }
    Ok(())
}
