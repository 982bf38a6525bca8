use super::resolve_input;
use crate::errors::AppResult;
use crate::recovery::{self, preview};
use clap::Args;
use std::path::PathBuf;

/// Bytes shown in the inspect hex dump
const DUMP_LEN: usize = 64;

/// Decode and classify a base64 text file without writing any output
#[derive(Args)]
pub struct InspectCommand {
    /// Text file holding the base64 payload (overrides config.toml)
    pub input: Option<PathBuf>,

    /// Output format: text, json
    #[arg(long, default_value = "text")]
    pub format: String,
}

impl InspectCommand {
    pub fn run(&self) -> AppResult<()> {
        let (_, input) = resolve_input(&self.input)?;
        let (report, payload) = recovery::inspect_file(&input)?;

        if self.format == "json" {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        println!("\n=== Base64 Inspection ===");
        println!("Input: {}", report.input.display());
        println!("Data-URI prefixes stripped: {}", report.prefixes_stripped);
        println!("Decoded bytes: {}", report.decoded_bytes);
        println!("Classification: {}", report.classification);
        if let Some(format) = report.detected_format {
            println!("Detected format: {}", format.mime_type());
        }
        println!("SHA-256: {}", report.sha256);
        println!();

        let dump_len = payload.bytes.len().min(DUMP_LEN);
        println!("Hex (first {} bytes):", dump_len);
        for line in preview::hex_dump(&payload.bytes[..dump_len], 2) {
            println!("{}", line);
        }
        println!();

        println!("ASCII:");
        println!("  {}", preview::to_ascii_preview(&payload.bytes, 80));

        Ok(())
    }
}
