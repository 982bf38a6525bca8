fn main() {
    if let Err(e) = base64_image_recovery::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
