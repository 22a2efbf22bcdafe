//! Pixel-level steps of the quantizer: grayscale, blur, threshold.

use image::{GrayImage, Luma, RgbImage};

/// Seuil global de binarisation : `> 80` devient blanc.
pub const THRESHOLD: u8 = 80;

/// Noyau binomial 5 taps, somme 16 : ce que donne un flou gaussien 5×5 à σ dérivé du noyau.
const KERNEL_5: [u32; 5] = [1, 4, 6, 4, 1];

/// Luma BT.601 en virgule fixe (coefficients sur 14 bits, somme 16384).
///
/// Formula: Y = 0.299 R + 0.587 G + 0.114 B, rounded.
///
/// # Example
/// ```
/// use ic_ascii::filters::to_gray;
/// use image::{Rgb, RgbImage};
/// let gray = to_gray(&RgbImage::from_pixel(2, 2, Rgb([255, 255, 255])));
/// assert_eq!(gray.get_pixel(0, 0)[0], 255);
/// ```
#[must_use]
pub fn to_gray(img: &RgbImage) -> GrayImage {
    let (width, height) = img.dimensions();
    let mut output = GrayImage::new(width, height);
    for (src, dst) in img.pixels().zip(output.pixels_mut()) {
        let [r, g, b] = src.0;
        let y = (u32::from(r) * 4899 + u32::from(g) * 9617 + u32::from(b) * 1868 + (1 << 13)) >> 14;
        *dst = Luma([y as u8]);
    }
    output
}

/// Reflect-101 border handling: `dcb|abcd|cba`.
#[inline]
fn reflect_101(i: i64, len: i64) -> usize {
    if len == 1 {
        return 0;
    }
    let mut i = i;
    loop {
        if i < 0 {
            i = -i;
        } else if i >= len {
            i = 2 * len - 2 - i;
        } else {
            return i as usize;
        }
    }
}

/// Flou gaussien 5×5 séparable (noyau [1 4 6 4 1]/16 sur chaque axe).
///
/// The horizontal pass keeps the un-normalised sums (x16) so rounding
/// happens once, after the vertical pass.
///
/// # Example
/// ```
/// use ic_ascii::filters::gaussian_blur_5x5;
/// use image::{GrayImage, Luma};
/// let flat = GrayImage::from_pixel(8, 8, Luma([200]));
/// assert_eq!(gaussian_blur_5x5(&flat), flat);
/// ```
#[must_use]
pub fn gaussian_blur_5x5(img: &GrayImage) -> GrayImage {
    let (width, height) = img.dimensions();
    let (w, h) = (i64::from(width), i64::from(height));
    let src = img.as_raw();

    // Horizontal pass, values scaled by 16.
    let mut horizontal = vec![0u32; src.len()];
    for y in 0..height as usize {
        let row = &src[y * width as usize..(y + 1) * width as usize];
        for x in 0..width as usize {
            let mut sum = 0u32;
            for (k, weight) in KERNEL_5.iter().enumerate() {
                let sx = reflect_101(x as i64 + k as i64 - 2, w);
                sum += u32::from(row[sx]) * weight;
            }
            horizontal[y * width as usize + x] = sum;
        }
    }

    // Vertical pass, values scaled by 256, then rounded.
    let mut output = GrayImage::new(width, height);
    for y in 0..height as usize {
        for x in 0..width as usize {
            let mut sum = 0u32;
            for (k, weight) in KERNEL_5.iter().enumerate() {
                let sy = reflect_101(y as i64 + k as i64 - 2, h);
                sum += horizontal[sy * width as usize + x] * weight;
            }
            output.put_pixel(x as u32, y as u32, Luma([((sum + 128) >> 8) as u8]));
        }
    }
    output
}

/// Binarisation globale : `v > threshold` → 255, sinon 0.
///
/// # Example
/// ```
/// use ic_ascii::filters::binarize;
/// use image::{GrayImage, Luma};
/// let img = GrayImage::from_fn(2, 1, |x, _| Luma([if x == 0 { 80 } else { 81 }]));
/// let bin = binarize(&img, 80);
/// assert_eq!(bin.get_pixel(0, 0)[0], 0);
/// assert_eq!(bin.get_pixel(1, 0)[0], 255);
/// ```
#[must_use]
pub fn binarize(img: &GrayImage, threshold: u8) -> GrayImage {
    let mut output = img.clone();
    for p in output.pixels_mut() {
        p[0] = if p[0] > threshold { 255 } else { 0 };
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn gray_uses_bt601_weights() {
        let red = to_gray(&RgbImage::from_pixel(1, 1, Rgb([255, 0, 0])));
        let green = to_gray(&RgbImage::from_pixel(1, 1, Rgb([0, 255, 0])));
        let blue = to_gray(&RgbImage::from_pixel(1, 1, Rgb([0, 0, 255])));
        assert_eq!(red.get_pixel(0, 0)[0], 76);
        assert_eq!(green.get_pixel(0, 0)[0], 150);
        assert_eq!(blue.get_pixel(0, 0)[0], 29);
    }

    #[test]
    fn gray_extremes() {
        let black = to_gray(&RgbImage::from_pixel(3, 3, Rgb([0, 0, 0])));
        let white = to_gray(&RgbImage::from_pixel(3, 3, Rgb([255, 255, 255])));
        assert!(black.pixels().all(|p| p[0] == 0));
        assert!(white.pixels().all(|p| p[0] == 255));
    }

    #[test]
    fn reflect_101_mirrors_without_repeating_the_edge() {
        assert_eq!(reflect_101(-1, 5), 1);
        assert_eq!(reflect_101(-2, 5), 2);
        assert_eq!(reflect_101(5, 5), 3);
        assert_eq!(reflect_101(6, 5), 2);
        assert_eq!(reflect_101(3, 1), 0);
        assert_eq!(reflect_101(-2, 2), 0);
        assert_eq!(reflect_101(3, 2), 1);
    }

    #[test]
    fn blur_preserves_flat_images_and_dimensions() {
        for v in [0u8, 1, 80, 81, 254, 255] {
            let flat = GrayImage::from_pixel(7, 5, Luma([v]));
            assert_eq!(gaussian_blur_5x5(&flat), flat, "valeur {v}");
        }
        let tiny = GrayImage::from_pixel(1, 1, Luma([9]));
        assert_eq!(gaussian_blur_5x5(&tiny), tiny);
    }

    #[test]
    fn blur_spreads_a_single_impulse() {
        let mut img = GrayImage::new(9, 9);
        img.put_pixel(4, 4, Luma([255]));
        let blurred = gaussian_blur_5x5(&img);
        // centre weight 36/256
        assert_eq!(blurred.get_pixel(4, 4)[0], 36);
        // symmetric
        assert_eq!(blurred.get_pixel(3, 4), blurred.get_pixel(5, 4));
        assert_eq!(blurred.get_pixel(4, 3), blurred.get_pixel(4, 5));
        // outside the 5×5 support
        assert_eq!(blurred.get_pixel(1, 4)[0], 0);
    }

    #[test]
    fn binarize_is_strictly_greater_than() {
        let img = GrayImage::from_fn(256, 1, |x, _| Luma([x as u8]));
        let bin = binarize(&img, THRESHOLD);
        for (x, p) in bin.pixels().enumerate() {
            let expected = if x > 80 { 255 } else { 0 };
            assert_eq!(p[0], expected, "x={x}");
        }
    }
}
