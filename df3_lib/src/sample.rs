//! Voxel resolution
//!
//! DF3 does not store the sample width, it has to be inferred
//! from payload length and number of voxels.

use byteorder::{BigEndian, ByteOrder};

use crate::error::{Df3Error, Result};

/// Number of bytes per voxel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteWidth {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
}

impl ByteWidth {
    pub fn from_bytes(n: usize) -> Option<ByteWidth> {
        match n {
            1 => Some(ByteWidth::One),
            2 => Some(ByteWidth::Two),
            3 => Some(ByteWidth::Three),
            4 => Some(ByteWidth::Four),
            _ => None,
        }
    }

    pub fn bytes(self) -> usize {
        self as usize
    }

    /// Infer width of one sample.
    /// Payload has to be an exact multiple of `voxels`, remainder bytes are an error.
    pub fn infer(payload_len: usize, voxels: usize) -> Result<ByteWidth> {
        debug_assert_ne!(voxels, 0);

        let rem = payload_len % voxels;
        if rem != 0 {
            let lower = payload_len - rem;
            return Err(Df3Error::MalformedPayload {
                voxels,
                actual: payload_len,
                lower,
                upper: lower + voxels,
            });
        }

        let width = payload_len / voxels;
        ByteWidth::from_bytes(width).ok_or(Df3Error::UnsupportedByteWidth(width))
    }

    /// Reduce one big-endian sample to 8 bits.
    /// Keeps the most significant byte: `value >> (8 * (width - 1))`.
    /// `sample` has to be exactly `self.bytes()` long.
    pub fn reduce(self, sample: &[u8]) -> u8 {
        match self {
            ByteWidth::One => sample[0],
            _ => {
                let n = self.bytes();
                let value = BigEndian::read_uint(sample, n);
                (value >> (8 * (n - 1))) as u8
            }
        }
    }

    /// Reduce a whole plane of samples to 8bit values
    pub fn reduce_plane(self, plane: &[u8]) -> Vec<u8> {
        match self {
            ByteWidth::One => plane.to_vec(),
            _ => plane
                .chunks_exact(self.bytes())
                .map(|s| self.reduce(s))
                .collect(),
        }
    }
}
