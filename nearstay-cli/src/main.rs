//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = nearstay_cli::run() {
        eprintln!("nearstay: {err}");
        std::process::exit(1);
    }
}
