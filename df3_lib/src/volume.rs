use std::{io::Write, path::Path};

use image::GrayImage;
use log::debug;
use nalgebra::Vector3;

use crate::{
    data_source::DataSource,
    error::{Df3Error, Result},
    header::{VolumeHeader, HEADER_LEN},
    sample::ByteWidth,
};

/// Parsed and validated DF3 volume.
/// Holds the whole file, header included.
#[derive(Debug)]
pub struct Volume {
    header: VolumeHeader,
    byte_width: ByteWidth,
    data: DataSource,
}

impl Volume {
    /// Validate raw file contents.
    ///
    /// Fails if header is shorter than 6 bytes, volume has no voxels,
    /// or the payload does not hold a whole number of 1-4 byte samples per voxel.
    pub fn from_data_source(data: DataSource) -> Result<Volume> {
        let (payload, header) = VolumeHeader::parse(data.get_slice())?;

        let voxels = header.voxel_count();
        if voxels == 0 {
            return Err(Df3Error::EmptyVolume {
                width: header.width,
                height: header.height,
                depth: header.depth,
            });
        }

        let byte_width = ByteWidth::infer(payload.len(), voxels)?;

        debug!(
            "Parsed DF3 volume {}x{}x{}, {} byte(s) per voxel",
            header.width,
            header.height,
            header.depth,
            byte_width.bytes()
        );

        Ok(Volume {
            header,
            byte_width,
            data,
        })
    }

    pub fn from_vec(bytes: Vec<u8>) -> Result<Volume> {
        Volume::from_data_source(DataSource::from_vec(bytes))
    }

    pub fn from_file<P>(path: P) -> Result<Volume>
    where
        P: AsRef<Path>,
    {
        let ds = DataSource::from_file(path)?;
        Volume::from_data_source(ds)
    }

    /// Build 8bit volume from layer planes, already validated by caller
    pub(crate) fn from_parts(header: VolumeHeader, payload: Vec<u8>) -> Volume {
        debug_assert_eq!(payload.len(), header.voxel_count());

        let mut data = Vec::with_capacity(HEADER_LEN + payload.len());
        data.extend_from_slice(&header.to_bytes());
        data.extend_from_slice(&payload);

        Volume {
            header,
            byte_width: ByteWidth::One,
            data: DataSource::Vec(data),
        }
    }

    pub fn header(&self) -> VolumeHeader {
        self.header
    }

    pub fn get_size(&self) -> Vector3<usize> {
        self.header.size()
    }

    pub fn depth(&self) -> usize {
        self.header.depth as usize
    }

    pub fn byte_width(&self) -> ByteWidth {
        self.byte_width
    }

    /// Whole file, header and samples
    pub fn as_bytes(&self) -> &[u8] {
        self.data.get_slice()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Samples without header
    pub fn payload(&self) -> &[u8] {
        &self.as_bytes()[HEADER_LEN..]
    }

    pub fn plane_len(&self) -> usize {
        self.header.layer_voxels() * self.byte_width.bytes()
    }

    /// Raw samples of layer `index`, `None` if out of range
    pub fn plane(&self, index: usize) -> Option<&[u8]> {
        if index >= self.depth() {
            return None;
        }
        let len = self.plane_len();
        let start = index * len;
        self.payload().get(start..start + len)
    }

    /// Layer `index` as 8bit gray image.
    /// Samples wider than 1 byte are reduced to their most significant byte.
    pub fn layer(&self, index: usize) -> Option<GrayImage> {
        self.plane(index).map(|plane| self.plane_image(plane))
    }

    /// All layers, in depth order.
    /// Validated payload is exactly `depth` planes, so every layer is yielded.
    pub fn layers(&self) -> impl Iterator<Item = GrayImage> + '_ {
        self.payload()
            .chunks_exact(self.plane_len())
            .map(move |plane| self.plane_image(plane))
    }

    // `plane` is `plane_len` bytes, reduced it fills width * height pixels
    fn plane_image(&self, plane: &[u8]) -> GrayImage {
        let mut image = GrayImage::new(self.header.width as u32, self.header.height as u32);
        image.copy_from_slice(&self.byte_width.reduce_plane(plane));
        image
    }

    pub fn write_to<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writer.write_all(self.as_bytes())?;
        Ok(())
    }
}
