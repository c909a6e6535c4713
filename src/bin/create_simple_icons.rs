// SPDX-License-Identifier: MPL-2.0
//! Draws the camera icon set into the current directory.

use extension_icons::config;
use extension_icons::drawer;
use extension_icons::error::Result;
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
create-simple-icons: draw the camera icon as icon16/32/48/128.png

USAGE:
  create-simple-icons [OPTIONS]

OPTIONS:
  --config <FILE>   TOML file overriding sizes and output_dir
  --out-dir <DIR>   Where the PNGs are written (default: current directory)
  -h, --help        Print this help
";

struct Flags {
    config: Option<PathBuf>,
    out_dir: Option<PathBuf>,
}

fn parse_flags() -> std::result::Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let flags = Flags {
        config: args.opt_value_from_str("--config")?,
        out_dir: args.opt_value_from_str("--out-dir")?,
    };
    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("[WARN] Ignoring unexpected arguments: {rest:?}");
    }
    Ok(Some(flags))
}

fn run(flags: Flags) -> Result<()> {
    let config = config::load_or_default(flags.config.as_deref())?;
    let sizes = config.icon_sizes()?;
    let out_dir = flags
        .out_dir
        .or(config.output_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    drawer::create_icons(&out_dir, &sizes);
    Ok(())
}

fn main() -> ExitCode {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    match run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
