use super::resolve_input;
use crate::errors::AppResult;
use crate::recovery::{self, Classification, RecoveryOptions, RecoveryReport};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Decode a base64 text file and write the result as PNG or raw bytes
#[derive(Args)]
pub struct RecoverCommand {
    /// Text file holding the base64 payload (overrides config.toml)
    pub input: Option<PathBuf>,

    /// Directory for the recovered file (overrides config.toml)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Output file name without extension (overrides config.toml)
    #[arg(long)]
    pub output_stem: Option<String>,

    /// Always write <stem>.png, even if the PNG signature is missing
    #[arg(long)]
    pub skip_signature_check: bool,

    /// Output format: text, json
    #[arg(long, default_value = "text")]
    pub format: String,
}

impl RecoverCommand {
    pub fn run(&self) -> AppResult<()> {
        // Errors are reported once, by main
        let report = self.execute()?;

        match self.format.as_str() {
            "json" => print_report_json(&report)?,
            _ => print_report_text(&report),
        }

        Ok(())
    }

    /// Run the pipeline and return the report without printing it
    pub fn execute(&self) -> AppResult<RecoveryReport> {
        let (config, input) = resolve_input(&self.input)?;

        let options = RecoveryOptions {
            output_dir: self
                .output_dir
                .clone()
                .unwrap_or_else(|| config.output.dir.clone()),
            output_stem: self
                .output_stem
                .clone()
                .unwrap_or_else(|| config.output.stem.clone()),
            skip_signature_check: self.skip_signature_check,
        };

        info!("Input file: {}", input.display());
        info!("Output directory: {}", options.output_dir.display());

        recovery::recover_file(&input, &options)
    }
}

/// Print the human-readable status lines
fn print_report_text(report: &RecoveryReport) {
    println!("Base64 decoded successfully: {} bytes", report.decoded_bytes);

    match report.classification {
        Classification::Png => {
            println!("Decoded data starts with the PNG signature.");
        }
        Classification::Unknown => {
            println!("Decoded data does NOT start with the PNG signature.");
            println!(
                "First 10 bytes: {} ({})",
                report.preview, report.preview_hex
            );
            if let Some(format) = report.detected_format {
                println!("Data looks like {} ({})", format.mime_type(), format.extension());
            }
        }
    }

    if let Some(ref path) = report.output {
        match (report.classification, path.extension().and_then(|e| e.to_str())) {
            (Classification::Unknown, Some("png")) => {
                println!("Image saved as {} (signature check skipped)", path.display());
            }
            (Classification::Png, _) => println!("Image saved as {}", path.display()),
            _ => println!("Raw data saved as {} for inspection.", path.display()),
        }
    }
}

fn print_report_json(report: &RecoveryReport) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
