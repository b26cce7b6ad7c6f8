fn main() {
    if let Err(e) = obol::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
