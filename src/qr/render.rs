//! QR rendering of the menu URL.

use crate::error::Result;
use image::{DynamicImage, ImageFormat, Luma};
use qrcode::{render::svg, EcLevel, QrCode};
use std::io::Cursor;

/// Smallest edge, in pixels, of a rendered code
pub const MIN_DIMENSION: u32 = 256;

/// File name offered when the PNG is downloaded
pub const DOWNLOAD_FILE_NAME: &str = "edens-restaurant-menu-qr.png";

const DARK: &str = "#000000";
const LIGHT: &str = "#ffffff";

/// Encodes `url` at error correction level H (about 30% recoverable).
pub fn encode(url: &str) -> Result<QrCode> {
    Ok(QrCode::with_error_correction_level(url.as_bytes(), EcLevel::H)?)
}

/// Renders `url` as an SVG document for display.
pub fn render_svg(url: &str) -> Result<String> {
    let code = encode(url)?;
    Ok(code
        .render::<svg::Color>()
        .min_dimensions(MIN_DIMENSION, MIN_DIMENSION)
        .dark_color(svg::Color(DARK))
        .light_color(svg::Color(LIGHT))
        .build())
}

/// Renders `url` as PNG bytes for download.
pub fn render_png(url: &str) -> Result<Vec<u8>> {
    let code = encode(url)?;
    let raster = code
        .render::<Luma<u8>>()
        .min_dimensions(MIN_DIMENSION, MIN_DIMENSION)
        .build();

    let mut bytes = Vec::new();
    DynamicImage::ImageLuma8(raster).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "http://localhost:3000/menu";

    #[test]
    fn test_uses_high_error_correction() {
        let code = encode(URL).unwrap();
        assert_eq!(code.error_correction_level(), EcLevel::H);
    }

    #[test]
    fn test_svg_document() {
        let svg = render_svg(URL).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains(DARK));
    }

    #[test]
    fn test_png_signature_and_size() {
        let png = render_png(URL).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory_with_format(&png, ImageFormat::Png).unwrap();
        assert!(decoded.width() >= MIN_DIMENSION);
        assert_eq!(decoded.width(), decoded.height());
    }
}
