mod app;
mod cli;

use std::env;
use std::io;
use std::process;

// Usage: echo <input_text> | tinygrep -E <pattern>
fn main() {
    let outcome =
        cli::parse_args(env::args().collect()).and_then(|cfg| app::run(&cfg, io::stdin().lock()));

    if let Err(err) = &outcome {
        eprintln!("error: {err:#}");
    }
    process::exit(app::exit_code(&outcome));
}
