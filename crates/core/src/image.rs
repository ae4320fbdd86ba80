//! Image format sniffing for uploads.
//!
//! Only the leading magic bytes are inspected; nothing is decoded.

use image::ImageFormat;

/// Formats accepted for cover, avatar and page images.
pub const SUPPORTED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Avif,
    ImageFormat::Bmp,
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::WebP,
];

/// Detect the format of `bytes`, returning it only when it is supported.
pub fn detect_supported_format(bytes: &[u8]) -> Option<ImageFormat> {
    image::guess_format(bytes)
        .ok()
        .filter(|format| SUPPORTED_FORMATS.contains(format))
}

/// Whether `bytes` start with the signature of a supported image format.
pub fn is_supported_image(bytes: &[u8]) -> bool {
    detect_supported_format(bytes).is_some()
}

/// MIME type to serve a supported image with.
pub fn mime_type(bytes: &[u8]) -> Option<&'static str> {
    detect_supported_format(bytes).map(|format| format.to_mime_type())
}

#[cfg(test)]
pub(crate) mod fixtures {
    /// PNG signature followed by the start of an IHDR chunk.
    pub const PNG_HEADER: &[u8] = &[
        0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, b'I', b'H', b'D',
        b'R',
    ];

    /// JPEG SOI marker followed by a JFIF APP0 marker.
    pub const JPEG_HEADER: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];

    /// GIF89a is recognised but not accepted.
    pub const GIF_HEADER: &[u8] = b"GIF89a\x01\x00\x01\x00";
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn accepts_png_and_jpeg() {
        assert!(is_supported_image(PNG_HEADER));
        assert!(is_supported_image(JPEG_HEADER));
        assert_eq!(mime_type(PNG_HEADER), Some("image/png"));
        assert_eq!(mime_type(JPEG_HEADER), Some("image/jpeg"));
    }

    #[test]
    fn rejects_unsupported_and_unknown() {
        assert!(!is_supported_image(GIF_HEADER));
        assert!(!is_supported_image(b"%PDF-1.7"));
        assert!(!is_supported_image(&[]));
    }
}
