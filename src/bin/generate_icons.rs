// SPDX-License-Identifier: MPL-2.0
//! Rasterizes `icon.svg` (next to this executable) into the extension's PNG
//! icon set.

use extension_icons::config;
use extension_icons::error::{Error, Result};
use extension_icons::generator::{self, Generator};
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
generate-icons: rasterize icon.svg into icon16/32/48/128.png

USAGE:
  generate-icons [OPTIONS]

OPTIONS:
  --config <FILE>  TOML file overriding sizes, svg_file, source_dir, output_dir
  --dir <DIR>      Directory holding the SVG and receiving the PNGs
                   (default: the executable's directory)
  -h, --help       Print this help
";

struct Flags {
    config: Option<PathBuf>,
    dir: Option<PathBuf>,
}

fn parse_flags() -> std::result::Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let flags = Flags {
        config: args.opt_value_from_str("--config")?,
        dir: args.opt_value_from_str("--dir")?,
    };
    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("[WARN] Ignoring unexpected arguments: {rest:?}");
    }
    Ok(Some(flags))
}

fn run(flags: Flags) -> Result<()> {
    let mut config = config::load_or_default(flags.config.as_deref())?;
    if let Some(dir) = flags.dir {
        config.source_dir = Some(dir);
    }

    let default_dir = match &config.source_dir {
        Some(dir) => dir.clone(),
        None => generator::executable_dir()?,
    };

    Generator::from_config(&config, &default_dir)?.run()?;
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
        Err(Error::SourceNotFound(path)) => {
            println!("SVG file not found: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
