//! DF3 header
//!
//! Big-endian, total length 6B
//! 1. width  -- 16bit unsigned
//! 2. height -- 16bit unsigned
//! 3. depth  -- 16bit unsigned, number of layers
//!
//! Samples follow right after the header.

use byteorder::{BigEndian, ByteOrder};
use nalgebra::{vector, Vector3};
use nom::{number::complete::be_u16, sequence::tuple, IResult};

use crate::error::{Df3Error, Result};

pub const HEADER_LEN: usize = 3 * 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeHeader {
    pub width: u16,
    pub height: u16,
    pub depth: u16,
}

fn to_u16(field: &'static str, value: u32) -> Result<u16> {
    match u16::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(Df3Error::DimensionOutOfRange {
            field,
            value: value as u64,
        }),
    }
}

impl VolumeHeader {
    /// Checked constructor, all dimensions have to be in range <1;65535>
    pub fn new(width: u32, height: u32, depth: u32) -> Result<VolumeHeader> {
        Ok(VolumeHeader {
            width: to_u16("width", width)?,
            height: to_u16("height", height)?,
            depth: to_u16("depth", depth)?,
        })
    }

    /// Dimensions as (x, y, z) = (width, height, depth)
    pub fn size(&self) -> Vector3<usize> {
        vector![
            self.width as usize,
            self.height as usize,
            self.depth as usize
        ]
    }

    pub fn layer_voxels(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn voxel_count(&self) -> usize {
        self.layer_voxels() * self.depth as usize
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut buf = [0; HEADER_LEN];
        BigEndian::write_u16(&mut buf[0..2], self.width);
        BigEndian::write_u16(&mut buf[2..4], self.height);
        BigEndian::write_u16(&mut buf[4..6], self.depth);
        buf
    }

    /// Parse header from the start of `slice`.
    /// Returns the rest of input (the payload) and the header.
    pub fn parse(slice: &[u8]) -> Result<(&[u8], VolumeHeader)> {
        match header_inner(slice) {
            Ok(r) => Ok(r),
            Err(_) => Err(Df3Error::TruncatedHeader(slice.len())),
        }
    }
}

fn header_inner(s: &[u8]) -> IResult<&[u8], VolumeHeader> {
    let mut df3_header = tuple((be_u16, be_u16, be_u16));

    let (s, (width, height, depth)) = df3_header(s)?;

    Ok((
        s,
        VolumeHeader {
            width,
            height,
            depth,
        },
    ))
}

/// Encode header, fails if any dimension is 0 or does not fit 16 bits
pub fn encode_header(width: u32, height: u32, depth: u32) -> Result<[u8; HEADER_LEN]> {
    VolumeHeader::new(width, height, depth).map(|h| h.to_bytes())
}

/// Decode header from the first 6 bytes, trailing bytes are ignored
pub fn decode_header(bytes: &[u8]) -> Result<VolumeHeader> {
    VolumeHeader::parse(bytes).map(|(_, header)| header)
}
