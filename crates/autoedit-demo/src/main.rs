#![forbid(unsafe_code)]

//! autoedit demo binary entry point.

use std::io;

use autoedit_demo::{app, cli, logging};

fn main() {
    let opts = cli::Opts::parse();
    logging::init(opts.log_filter.as_deref());

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = app::run(&opts, stdin.lock(), stdout.lock()) {
        eprintln!("autoedit-demo: {e}");
        std::process::exit(1);
    }
}
