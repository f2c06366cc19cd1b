fn main() {
    if let Err(e) = reflscope_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
