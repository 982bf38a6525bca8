//! Base64 image recovery
//!
//! One pass per input file: normalise the pasted text, decode it, check the PNG
//! signature, and write the bytes to `<stem>.png` or `<stem>_raw.bin`.
//! A decode failure writes nothing.

pub mod normalize;
pub mod output;
pub mod preview;
pub mod signature;

use crate::errors::{AppError, AppResult};
use base64::{
    alphabet,
    engine::{general_purpose::GeneralPurpose, GeneralPurposeConfig},
    Engine,
};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub use normalize::{normalize, DATA_URI_PREFIX};
pub use output::OutputManager;
pub use signature::{classify, detect_image_format, Classification, ImageFormat, PNG_SIGNATURE};

/// Standard alphabet decoder that tolerates non-zero trailing bits
///
/// A paste cut off mid-quantum leaves stray low bits in its last symbol;
/// those bits are dropped instead of failing the whole decode.
pub const BASE64_TRUNCATION_TOLERANT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Decode a canonical (already padded) base64 string
///
/// Stray characters such as `!`, or a length that padding could not repair
/// (`len % 4 == 1`), are errors.
pub fn decode(canonical: &str) -> AppResult<Vec<u8>> {
    Ok(BASE64_TRUNCATION_TOLERANT.decode(canonical)?)
}

/// Read the input file as text
pub fn read_input(path: &Path) -> AppResult<String> {
    let raw = fs::read(path)?;
    String::from_utf8(raw).map_err(|e| {
        AppError::InvalidInput(format!(
            "{} is not UTF-8 text (invalid byte at offset {})",
            path.display(),
            e.utf8_error().valid_up_to()
        ))
    })
}

/// A decoded and classified buffer, not yet written anywhere
#[derive(Debug, Clone)]
pub struct DecodedPayload {
    pub bytes: Vec<u8>,
    pub classification: Classification,
    /// Copies of the data-URI prefix removed during normalisation
    pub prefixes_stripped: usize,
}

/// Normalise, decode and classify pasted base64 text
pub fn decode_text(text: &str) -> AppResult<DecodedPayload> {
    let prefixes_stripped = normalize::count_prefixes(text);
    let canonical = normalize(text);
    debug!(
        "Normalised input: {} chars, {} prefix copies stripped",
        canonical.len(),
        prefixes_stripped
    );

    let bytes = decode(&canonical)?;
    if bytes.is_empty() {
        warn!("Input decoded to an empty buffer");
    }

    let classification = classify(&bytes);
    Ok(DecodedPayload {
        bytes,
        classification,
        prefixes_stripped,
    })
}

/// Settings for a single recovery run
#[derive(Debug, Clone)]
pub struct RecoveryOptions {
    pub output_dir: PathBuf,
    pub output_stem: String,
    /// Write `<stem>.png` even when the PNG signature does not match
    pub skip_signature_check: bool,
}

/// Summary of one run, printed as text or JSON
#[derive(Debug, Clone, Serialize)]
pub struct RecoveryReport {
    pub input: PathBuf,
    pub classification: Classification,
    pub detected_format: Option<ImageFormat>,
    pub decoded_bytes: usize,
    pub prefixes_stripped: usize,
    /// First bytes as an escaped byte string
    pub preview: String,
    pub preview_hex: String,
    pub sha256: String,
    /// None when nothing was written (inspect mode)
    pub output: Option<PathBuf>,
    pub timestamp: String,
}

impl RecoveryReport {
    pub fn new(input: &Path, payload: &DecodedPayload, output: Option<PathBuf>) -> Self {
        Self {
            input: input.to_path_buf(),
            classification: payload.classification,
            detected_format: detect_image_format(&payload.bytes),
            decoded_bytes: payload.bytes.len(),
            prefixes_stripped: payload.prefixes_stripped,
            preview: preview::debug_bytes(&payload.bytes, preview::PREVIEW_LEN),
            preview_hex: preview::hex_bytes(&payload.bytes, preview::PREVIEW_LEN),
            sha256: hex::encode(Sha256::digest(&payload.bytes)),
            output,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Decode and classify an input file without writing anything
pub fn inspect_file(input: &Path) -> AppResult<(RecoveryReport, DecodedPayload)> {
    info!("Inspecting {}", input.display());
    let text = read_input(input)?;
    let payload = decode_text(&text)?;
    let report = RecoveryReport::new(input, &payload, None);
    Ok((report, payload))
}

/// Full pipeline: read, normalise, decode, classify, persist
pub fn recover_file(input: &Path, options: &RecoveryOptions) -> AppResult<RecoveryReport> {
    info!("Recovering image from {}", input.display());

    let text = read_input(input)?;
    let payload = decode_text(&text)?;
    info!(
        "Decoded {} bytes, classified as {}",
        payload.bytes.len(),
        payload.classification
    );

    let write_as = if options.skip_signature_check {
        if !payload.classification.is_png() {
            warn!("PNG signature missing, writing .png anyway (signature check skipped)");
        }
        Classification::Png
    } else {
        payload.classification
    };

    let manager = OutputManager::new(options.output_dir.clone(), options.output_stem.as_str())?;
    let path = manager.persist(&payload.bytes, write_as)?;
    info!("Output written to {}", path.display());

    Ok(RecoveryReport::new(input, &payload, Some(path)))
}
