fn main() {
    if let Err(err) = kotgen_cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
