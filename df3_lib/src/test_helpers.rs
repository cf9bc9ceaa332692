//! Module with helper functions
//! Saves repetition in unit tests

use byteorder::{BigEndian, ByteOrder};
use image::GrayImage;

/// 2x2x1 volume, samples 10, 20, 30, 40
pub const SMALL_DF3: [u8; 10] = [0x00, 0x02, 0x00, 0x02, 0x00, 0x01, 0x0A, 0x14, 0x1E, 0x28];

/// Raw DF3 file with arbitrary header and payload, no validation
pub fn df3_bytes(width: u16, height: u16, depth: u16, payload: &[u8]) -> Vec<u8> {
    let mut data = vec![0; 6];
    BigEndian::write_u16(&mut data[0..2], width);
    BigEndian::write_u16(&mut data[2..4], height);
    BigEndian::write_u16(&mut data[4..6], depth);
    data.extend_from_slice(payload);
    data
}

/// Deterministic layer, different for every `seed`
pub fn gradient_layer(width: u32, height: u32, seed: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| {
        let v = x.wrapping_mul(31) ^ y.wrapping_mul(17) ^ seed.wrapping_mul(101);
        image::Luma([v as u8])
    })
}

/// Stack of `depth` distinct layers
pub fn gradient_stack(width: u32, height: u32, depth: u32) -> Vec<GrayImage> {
    (0..depth)
        .map(|z| gradient_layer(width, height, z))
        .collect()
}
