//! Fixed 3x3 convolution filters.
//!
//! Each kernel carries integer weights plus a divisor and bias:
//! `out = clamp(round(sum / divisor + bias))` per channel. The one-pixel
//! border is copied from the input unchanged, and images smaller than
//! the kernel are returned as-is. `imageproc::filter::filter3x3` is not
//! used here because it replicates the border and has no divisor/bias,
//! which would change the filter definitions below.

use image::RgbImage;

/// A 3x3 convolution kernel with post-scale divisor and bias.
#[derive(Debug, Clone, Copy)]
pub struct Kernel3 {
    /// Row-major weights.
    pub weights: [i32; 9],
    /// Divisor applied to the weighted sum. Non-zero.
    pub divisor: i32,
    /// Offset added after division.
    pub bias: i32,
}

/// Sharpen: strong center against a uniform negative surround.
pub const SHARPEN: Kernel3 = Kernel3 {
    weights: [-2, -2, -2, -2, 32, -2, -2, -2, -2],
    divisor: 16,
    bias: 0,
};

/// Edge enhance: a milder center-surround with half the damping.
pub const EDGE_ENHANCE: Kernel3 = Kernel3 {
    weights: [-1, -1, -1, -1, 10, -1, -1, -1, -1],
    divisor: 2,
    bias: 0,
};

/// Emboss: diagonal gradient biased to mid-gray.
pub const EMBOSS: Kernel3 = Kernel3 {
    weights: [-1, 0, 0, 0, 1, 0, 0, 0, 0],
    divisor: 1,
    bias: 128,
};

/// Convolve the image interior with `kernel`, per channel.
#[must_use = "returns the filtered image"]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn convolve3(image: &RgbImage, kernel: Kernel3) -> RgbImage {
    let (w, h) = image.dimensions();
    let mut out = image.clone();
    if w < 3 || h < 3 {
        return out;
    }

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let mut acc = [0i32; 3];
            for (i, &weight) in kernel.weights.iter().enumerate() {
                let dx = (i % 3) as u32;
                let dy = (i / 3) as u32;
                let sample = image.get_pixel(x + dx - 1, y + dy - 1);
                for (channel, value) in acc.iter_mut().zip(sample.0) {
                    *channel += weight * i32::from(value);
                }
            }
            let pixel = out.get_pixel_mut(x, y);
            for (channel, sum) in pixel.0.iter_mut().zip(acc) {
                let value =
                    (f64::from(sum) / f64::from(kernel.divisor) + f64::from(kernel.bias)).round();
                *channel = value.clamp(0.0, 255.0) as u8;
            }
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::cast_possible_truncation)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn sharpen_leaves_uniform_image_unchanged() {
        // Weights sum to 16 and the divisor is 16, so flat regions are
        // fixed points.
        let img = RgbImage::from_pixel(5, 5, Rgb([120, 80, 40]));
        assert_eq!(convolve3(&img, SHARPEN), img);
    }

    #[test]
    fn edge_enhance_leaves_uniform_image_unchanged() {
        let img = RgbImage::from_pixel(5, 5, Rgb([33, 99, 200]));
        assert_eq!(convolve3(&img, EDGE_ENHANCE), img);
    }

    #[test]
    fn emboss_maps_uniform_interior_to_mid_gray() {
        let img = RgbImage::from_pixel(5, 5, Rgb([70, 70, 70]));
        let embossed = convolve3(&img, EMBOSS);
        // Zero gradient plus the 128 bias.
        assert_eq!(embossed.get_pixel(2, 2).0, [128, 128, 128]);
        // Border pixels are copied from the input.
        assert_eq!(embossed.get_pixel(0, 0).0, [70, 70, 70]);
    }

    #[test]
    fn sharpen_amplifies_a_bright_spot() {
        let mut img = RgbImage::from_pixel(5, 5, Rgb([100, 100, 100]));
        img.put_pixel(2, 2, Rgb([140, 140, 140]));
        let sharpened = convolve3(&img, SHARPEN);
        assert!(
            sharpened.get_pixel(2, 2).0[0] > 140,
            "expected center to overshoot 140, got {}",
            sharpened.get_pixel(2, 2).0[0],
        );
    }

    #[test]
    fn border_row_and_column_are_copied() {
        let img = RgbImage::from_fn(6, 6, |x, y| {
            Rgb([(x * 40) as u8, (y * 40) as u8, 17])
        });
        let filtered = convolve3(&img, SHARPEN);
        for x in 0..6 {
            assert_eq!(filtered.get_pixel(x, 0), img.get_pixel(x, 0));
            assert_eq!(filtered.get_pixel(x, 5), img.get_pixel(x, 5));
        }
        for y in 0..6 {
            assert_eq!(filtered.get_pixel(0, y), img.get_pixel(0, y));
            assert_eq!(filtered.get_pixel(5, y), img.get_pixel(5, y));
        }
    }

    #[test]
    fn images_smaller_than_kernel_pass_through() {
        let img = RgbImage::from_pixel(2, 2, Rgb([9, 9, 9]));
        assert_eq!(convolve3(&img, EMBOSS), img);
    }

    #[test]
    fn result_clamps_to_channel_range() {
        let mut img = RgbImage::from_pixel(3, 3, Rgb([0, 0, 0]));
        img.put_pixel(1, 1, Rgb([255, 255, 255]));
        let sharpened = convolve3(&img, SHARPEN);
        // 255 * 32 / 16 = 510, clamped.
        assert_eq!(sharpened.get_pixel(1, 1).0, [255, 255, 255]);
    }
}
