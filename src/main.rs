// SPDX-License-Identifier: MPL-2.0
use iced_banner::app::{self, Flags};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: iced_banner [OPTIONS]

Options:
  --config <DIR>   Directory holding settings.toml
  -v, --verbose    Log lifecycle transitions (debug level)
  -h, --help       Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        return Ok(());
    }

    let verbose = args.contains(["-v", "--verbose"]);
    let config_dir: Option<PathBuf> = match args.opt_value_from_str("--config") {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    // RUST_LOG wins over --verbose.
    let default_level = if verbose { "iced_banner=debug" } else { "iced_banner=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let unused = args.finish();
    if !unused.is_empty() {
        tracing::warn!(?unused, "ignoring unknown arguments");
    }

    app::run(Flags { config_dir })
}
