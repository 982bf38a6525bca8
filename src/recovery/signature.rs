//! File signature checks
//!
//! The only decision that affects output is [`classify`]: an exact match on the
//! 8-byte PNG signature. [`detect_image_format`] recognises a few other common
//! magic numbers so the console can say what a rejected buffer looks like.

use serde::Serialize;
use std::fmt;

/// PNG file signature: 89 50 4E 47 0D 0A 1A 0A (‰PNG\r\n\x1a\n)
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Outcome of the signature check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// First 8 bytes are the PNG signature
    Png,
    /// Anything else, including buffers shorter than the signature
    Unknown,
}

impl Classification {
    pub fn is_png(&self) -> bool {
        matches!(self, Classification::Png)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Png => write!(f, "PNG"),
            Classification::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Classify a decoded buffer by exact prefix match against the PNG signature
pub fn classify(data: &[u8]) -> Classification {
    if data.starts_with(&PNG_SIGNATURE) {
        Classification::Png
    } else {
        Classification::Unknown
    }
}

/// Image formats recognised for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ImageFormat {
    /// PNG image (magic: 89 50 4E 47 0D 0A 1A 0A)
    Png,
    /// JPEG image (magic: FF D8 FF)
    Jpeg,
    /// GIF image (magic: GIF87a or GIF89a)
    Gif,
    /// WebP image (magic: RIFF....WEBP)
    WebP,
    /// BMP image (magic: BM)
    Bmp,
}

impl ImageFormat {
    /// Get the file extension for this image format
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Gif => "gif",
            ImageFormat::WebP => "webp",
            ImageFormat::Bmp => "bmp",
        }
    }

    /// Get the MIME type for this image format
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Gif => "image/gif",
            ImageFormat::WebP => "image/webp",
            ImageFormat::Bmp => "image/bmp",
        }
    }
}

/// Sniff common image magic numbers
///
/// Informational only: a JPEG hit here still classifies as
/// [`Classification::Unknown`] and is written as raw bytes.
pub fn detect_image_format(data: &[u8]) -> Option<ImageFormat> {
    if data.is_empty() {
        return None;
    }

    if data.starts_with(&PNG_SIGNATURE) {
        return Some(ImageFormat::Png);
    }

    // JPEG: FF D8 FF
    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some(ImageFormat::Jpeg);
    }

    if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        return Some(ImageFormat::Gif);
    }

    // WebP: "RIFF" + 4 bytes + "WEBP"
    if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
        return Some(ImageFormat::WebP);
    }

    // BMP: "BM" followed by a little-endian file size, require a full header
    if data.len() >= 14 && data.starts_with(b"BM") {
        return Some(ImageFormat::Bmp);
    }

    None
}
