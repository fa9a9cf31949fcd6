fn main() {
    if let Err(err) = rann_saka_cli::run() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
