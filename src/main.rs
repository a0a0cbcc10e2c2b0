#![warn(rust_2018_idioms, missing_debug_implementations, clippy::pedantic)]

use agbcc_opts::{Agbcc, CompilerConfig, OptionStrategy};
use clap::Parser;
use std::process::ExitCode;

pub(crate) mod args;

fn main() -> ExitCode {
    env_logger::init();
    let args = args::Arguments::parse();

    let config = match &args.config {
        Some(path) => match CompilerConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => CompilerConfig::default(),
    };
    log::debug!(
        "resolving options for `{}`",
        config.name.as_deref().unwrap_or("unnamed toolchain")
    );

    let options = Agbcc.options_for_filter(&args.filters(), &args.output, &config);

    if args.json {
        match serde_json::to_string(&options) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        for option in &options {
            println!("{option}");
        }
    }
    ExitCode::SUCCESS
}
