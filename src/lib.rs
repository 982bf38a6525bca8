//! Base64 Image Recovery
//!

pub mod cli;
pub mod config;
pub mod errors;
pub mod recovery;
