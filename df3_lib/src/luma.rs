//! Conversion of arbitrary input images to 8bit luminance

use image::{DynamicImage, GrayImage, Luma};

/// ITU-R BT.601 luminance, `round(0.299 R + 0.587 G + 0.114 B)`
/// Integer arithmetic, rounds half up
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let sum = 299 * r as u32 + 587 * g as u32 + 114 * b as u32;
    ((sum + 500) / 1000) as u8
}

/// Convert any decoded image to one 8bit gray channel.
/// Gray input passes through untouched, alpha is dropped.
pub fn to_luma(image: DynamicImage) -> GrayImage {
    match image {
        DynamicImage::ImageLuma8(gray) => gray,
        DynamicImage::ImageLumaA8(gray_alpha) => {
            GrayImage::from_fn(gray_alpha.width(), gray_alpha.height(), |x, y| {
                Luma([gray_alpha.get_pixel(x, y).0[0]])
            })
        }
        gray16 @ (DynamicImage::ImageLuma16(_) | DynamicImage::ImageLumaA16(_)) => {
            gray16.to_luma8()
        }
        other => {
            let rgb = other.to_rgb8();
            GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
                let [r, g, b] = rgb.get_pixel(x, y).0;
                Luma([luminance(r, g, b)])
            })
        }
    }
}

#[cfg(test)]
mod test {
    use image::{GrayAlphaImage, LumaA, Rgb, RgbImage, Rgba, RgbaImage};

    use super::*;

    #[test]
    fn bt601_primaries() {
        assert_eq!(luminance(0, 0, 0), 0);
        assert_eq!(luminance(255, 255, 255), 255);
        assert_eq!(luminance(255, 0, 0), 76); // 76.245
        assert_eq!(luminance(0, 255, 0), 150); // 149.685
        assert_eq!(luminance(0, 0, 255), 29); // 29.07
        assert_eq!(luminance(100, 100, 100), 100);
    }

    #[test]
    fn gray_passes_through() {
        let gray = GrayImage::from_raw(2, 2, vec![10, 20, 30, 40]).unwrap();
        let out = to_luma(DynamicImage::ImageLuma8(gray.clone()));
        assert_eq!(out, gray);
    }

    #[test]
    fn alpha_dropped() {
        let mut img = GrayAlphaImage::new(1, 2);
        img.put_pixel(0, 0, LumaA([17, 0]));
        img.put_pixel(0, 1, LumaA([200, 255]));
        let out = to_luma(DynamicImage::ImageLumaA8(img));
        assert_eq!(out.into_raw(), vec![17, 200]);
    }

    #[test]
    fn color_converted() {
        let mut rgb = RgbImage::new(2, 1);
        rgb.put_pixel(0, 0, Rgb([255, 0, 0]));
        rgb.put_pixel(1, 0, Rgb([12, 34, 56]));
        let out = to_luma(DynamicImage::ImageRgb8(rgb));
        assert_eq!(out.dimensions(), (2, 1));
        assert_eq!(out.into_raw(), vec![76, luminance(12, 34, 56)]);

        let mut rgba = RgbaImage::new(1, 1);
        rgba.put_pixel(0, 0, Rgba([0, 255, 0, 3]));
        let out = to_luma(DynamicImage::ImageRgba8(rgba));
        assert_eq!(out.into_raw(), vec![150]);
    }
}
