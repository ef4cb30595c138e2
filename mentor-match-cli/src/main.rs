//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    env_logger::init();
    if let Err(err) = mentor_match_cli::run() {
        eprintln!("mentor-match: {err}");
        std::process::exit(1);
    }
}
