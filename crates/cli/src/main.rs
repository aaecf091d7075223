fn main() {
    if let Err(e) = vendorscope_cli::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
