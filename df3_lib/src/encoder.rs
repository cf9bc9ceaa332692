//! Layers -> volume

use std::path::Path;

use image::GrayImage;
use log::{debug, info};
use tempfile::NamedTempFile;

use crate::{
    error::{Df3Error, Result},
    header::VolumeHeader,
    layer::LayerSource,
    progress::Progress,
    volume::Volume,
};

/// Stack layers into one volume.
/// Size of the volume is taken from the first layer, all other layers must match it.
fn assemble<I, P>(layers: I, total: usize, progress: &mut P) -> Result<Volume>
where
    I: Iterator<Item = Result<GrayImage>>,
    P: Progress + ?Sized,
{
    let mut layers = layers.enumerate();

    let first = match layers.next() {
        Some((_, layer)) => layer?,
        None => return Err(Df3Error::NoInput("no layers given".into())),
    };

    let (width, height) = first.dimensions();
    let depth = u32::try_from(total).unwrap_or(u32::MAX);
    let header = VolumeHeader::new(width, height, depth)?;

    debug!("Encoding volume {width}x{height}, {total} layers");

    let mut payload = Vec::with_capacity(header.voxel_count());
    payload.extend_from_slice(first.as_raw());
    progress.update(1, total);

    for (index, layer) in layers {
        let layer = layer?;
        if layer.dimensions() != (width, height) {
            return Err(Df3Error::DimensionMismatch {
                index,
                width,
                height,
                found_width: layer.width(),
                found_height: layer.height(),
            });
        }
        payload.extend_from_slice(layer.as_raw());
        progress.update(index + 1, total);
    }

    Ok(Volume::from_parts(header, payload))
}

/// Decode all sources, convert them to luminance and stack them into a volume
pub fn encode<P>(sources: &[LayerSource], progress: &mut P) -> Result<Volume>
where
    P: Progress + ?Sized,
{
    assemble(sources.iter().map(LayerSource::load), sources.len(), progress)
}

/// Stack already decoded gray layers into a volume
pub fn encode_images<P>(images: Vec<GrayImage>, progress: &mut P) -> Result<Volume>
where
    P: Progress + ?Sized,
{
    let total = images.len();
    assemble(images.into_iter().map(Ok), total, progress)
}

/// Encode sources and write the volume to `output`.
///
/// The volume is written to a temporary file next to `output` and renamed
/// only when complete, so a failed run leaves `output` untouched.
pub fn combine<Q, P>(
    output: Q,
    sources: &[LayerSource],
    progress: &mut P,
) -> Result<VolumeHeader>
where
    Q: AsRef<Path>,
    P: Progress + ?Sized,
{
    let output = output.as_ref();
    let volume = encode(sources, progress)?;
    write_volume(output, &volume)?;

    info!("Volume written to {}", output.display());
    Ok(volume.header())
}

/// Atomically replace `path` with the contents of `volume`
pub fn write_volume(path: &Path, volume: &Volume) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut file = temp_file_in(dir)?;
    volume.write_to(&mut file)?;
    file.as_file().sync_all()?;

    // Overwritten file keeps its mode
    if let Ok(existing) = std::fs::metadata(path) {
        file.as_file().set_permissions(existing.permissions())?;
    }

    file.persist(path)?;
    Ok(())
}

/// Temporary file created with the mode a plain create would give, 0666 minus umask
#[cfg(unix)]
fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    use std::{fs::Permissions, os::unix::fs::PermissionsExt};

    tempfile::Builder::new()
        .permissions(Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}

#[cfg(test)]
mod test {

    use super::*;
    use crate::{progress::NoProgress, test_helpers::gradient_layer};

    #[test]
    fn no_input() {
        assert!(matches!(
            encode(&[], &mut NoProgress),
            Err(Df3Error::NoInput(_))
        ));
        assert!(matches!(
            encode_images(vec![], &mut NoProgress),
            Err(Df3Error::NoInput(_))
        ));
    }

    #[test]
    fn dimension_mismatch() {
        let layers = vec![GrayImage::new(4, 4), GrayImage::new(4, 5)];
        match encode_images(layers, &mut NoProgress) {
            Err(Df3Error::DimensionMismatch {
                index,
                width,
                height,
                found_width,
                found_height,
            }) => {
                assert_eq!(index, 1);
                assert_eq!((width, height), (4, 4));
                assert_eq!((found_width, found_height), (4, 5));
            }
            other => panic!("expected dimension mismatch, got {other:?}"),
        }
    }

    #[test]
    fn mismatch_later_layer() {
        let layers = vec![
            GrayImage::new(3, 2),
            GrayImage::new(3, 2),
            GrayImage::new(2, 3),
        ];
        assert!(matches!(
            encode_images(layers, &mut NoProgress),
            Err(Df3Error::DimensionMismatch { index: 2, .. })
        ));
    }

    #[test]
    fn layers_concatenated() {
        let a = GrayImage::from_raw(2, 1, vec![1, 2]).unwrap();
        let b = GrayImage::from_raw(2, 1, vec![3, 4]).unwrap();
        let sources = [LayerSource::from(a), LayerSource::from(b)];
        let volume = encode(&sources, &mut NoProgress).unwrap();
        assert_eq!(volume.as_bytes(), &[0, 2, 0, 1, 0, 2, 1, 2, 3, 4]);
    }

    #[test]
    fn progress_after_each_layer() {
        let layers: Vec<_> = (0..5).map(|i| gradient_layer(3, 3, i)).collect();
        let mut calls = vec![];
        let mut record = |done: usize, total: usize| calls.push((done, total));
        encode_images(layers, &mut record).unwrap();
        assert_eq!(calls, vec![(1, 5), (2, 5), (3, 5), (4, 5), (5, 5)]);
    }

    #[cfg(unix)]
    #[test]
    fn output_mode_follows_create_or_existing() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let volume = encode_images(vec![gradient_layer(2, 2, 0)], &mut NoProgress).unwrap();
        let mode = |p: &Path| std::fs::metadata(p).unwrap().permissions().mode() & 0o777;

        // New file: owner read/write, nothing beyond 0666
        let fresh = dir.path().join("fresh.df3");
        write_volume(&fresh, &volume).unwrap();
        assert_eq!(mode(&fresh) & !0o666, 0);
        assert_eq!(mode(&fresh) & 0o600, 0o600);

        let kept = dir.path().join("kept.df3");
        std::fs::write(&kept, b"old").unwrap();
        std::fs::set_permissions(&kept, std::fs::Permissions::from_mode(0o640)).unwrap();
        write_volume(&kept, &volume).unwrap();
        assert_eq!(mode(&kept), 0o640);
        assert_eq!(std::fs::read(&kept).unwrap(), volume.as_bytes());
    }

    #[test]
    fn too_wide_layer() {
        let layers = vec![GrayImage::new(65536, 1)];
        assert!(matches!(
            encode_images(layers, &mut NoProgress),
            Err(Df3Error::DimensionOutOfRange { field: "width", .. })
        ));
    }
}
