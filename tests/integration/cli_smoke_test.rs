//! CLI smoke tests
//!
//! Drives the `recover` and `inspect` commands through their clap definitions.
//! These read RECOVERY_* environment variables, so they run serially.

use crate::common::{prefixed_unpadded_png, TestWorkspace, HELLO_B64};
use base64_image_recovery::cli::commands::inspect::InspectCommand;
use base64_image_recovery::cli::commands::recover::RecoverCommand;
use base64_image_recovery::cli::{Cli, Commands};
use base64_image_recovery::recovery::Classification;
use clap::Parser;
use serial_test::serial;
use std::env;

fn clear_env() {
    env::remove_var("RECOVERY_INPUT_PATH");
    env::remove_var("RECOVERY_OUTPUT_DIR");
    env::remove_var("RECOVERY_OUTPUT_STEM");
}

fn parse_recover(args: &[&str]) -> RecoverCommand {
    let mut argv = vec!["base64-image-recovery", "recover"];
    argv.extend_from_slice(args);
    match Cli::try_parse_from(argv).expect("valid arguments").command {
        Commands::Recover(cmd) => cmd,
        _ => panic!("expected recover command"),
    }
}

#[test]
#[serial]
fn test_recover_with_explicit_arguments() -> anyhow::Result<()> {
    clear_env();
    let workspace = TestWorkspace::new();
    let input = workspace.write_input("qrcode_base64.txt", prefixed_unpadded_png());
    let output_dir = workspace.output_dir();

    let cmd = parse_recover(&[
        input.to_str().expect("utf-8 path"),
        "--output-dir",
        output_dir.to_str().expect("utf-8 path"),
        "--output-stem",
        "qrcode_test_2",
    ]);
    let report = cmd.execute()?;

    assert_eq!(report.classification, Classification::Png);
    assert_eq!(workspace.output_files(), vec!["qrcode_test_2.png"]);

    // run() prints the text report and succeeds on the same input
    cmd.run()?;
    Ok(())
}

#[test]
#[serial]
fn test_recover_uses_environment_configuration() -> anyhow::Result<()> {
    clear_env();
    let workspace = TestWorkspace::new();
    let input = workspace.write_input("pasted_content.txt", HELLO_B64);

    env::set_var("RECOVERY_INPUT_PATH", &input);
    env::set_var("RECOVERY_OUTPUT_DIR", workspace.output_dir());
    env::set_var("RECOVERY_OUTPUT_STEM", "qrcode_from_user");

    let result = parse_recover(&["--format", "json"]).run();
    clear_env();

    result?;
    assert_eq!(workspace.output_files(), vec!["qrcode_from_user_raw.bin"]);
    Ok(())
}

#[test]
#[serial]
fn test_cli_flags_override_environment() -> anyhow::Result<()> {
    clear_env();
    let workspace = TestWorkspace::new();
    let input = workspace.write_input("hello.txt", HELLO_B64);
    let output_dir = workspace.output_dir();

    env::set_var("RECOVERY_OUTPUT_STEM", "from_env");
    let result = parse_recover(&[
        input.to_str().expect("utf-8 path"),
        "--output-dir",
        output_dir.to_str().expect("utf-8 path"),
        "--output-stem",
        "from_flag",
    ])
    .execute();
    clear_env();

    result?;
    assert_eq!(workspace.output_files(), vec!["from_flag_raw.bin"]);
    Ok(())
}

#[test]
#[serial]
fn test_blank_output_stem_is_rejected() {
    clear_env();
    let workspace = TestWorkspace::new();
    let input = workspace.write_input("hello.txt", HELLO_B64);
    let output_dir = workspace.output_dir();

    let result = parse_recover(&[
        input.to_str().expect("utf-8 path"),
        "--output-dir",
        output_dir.to_str().expect("utf-8 path"),
        "--output-stem",
        " ",
    ])
    .execute();

    assert!(result.is_err());
    assert!(workspace.output_files().is_empty());
}

#[test]
#[serial]
fn test_recover_decode_failure_returns_error() {
    clear_env();
    let workspace = TestWorkspace::new();
    let input = workspace.write_input("broken.txt", "not!base64");
    let output_dir = workspace.output_dir();

    let err = parse_recover(&[
        input.to_str().expect("utf-8 path"),
        "--output-dir",
        output_dir.to_str().expect("utf-8 path"),
    ])
    .run()
    .unwrap_err();

    assert!(err.is_decode_failure());
    assert!(workspace.output_files().is_empty());
}

#[test]
#[serial]
fn test_inspect_command_runs_without_writing() -> anyhow::Result<()> {
    clear_env();
    let workspace = TestWorkspace::new();
    let input = workspace.write_input("qrcode_base64.txt", prefixed_unpadded_png());

    let cmd = InspectCommand {
        input: Some(input),
        format: "text".to_string(),
    };
    cmd.run()?;

    let json_cmd = InspectCommand {
        format: "json".to_string(),
        ..cmd
    };
    json_cmd.run()?;

    assert!(!workspace.output_dir().exists());
    Ok(())
}
