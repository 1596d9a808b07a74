//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    pretty_env_logger::init_custom_env("RUST_LOG");
    if let Err(err) = eventseek_cli::run() {
        eprintln!("eventseek: {err}");
        std::process::exit(1);
    }
}
