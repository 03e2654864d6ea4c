// Copyright (C) 2026 Michael Wilson <mike@mdwn.dev>
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, version 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//
mod error;
mod mapfile;
mod preset;
mod scanner;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{crate_version, ArgGroup, Parser};

use crate::error::Error;
use crate::preset::SampleSet;

#[derive(Parser)]
#[clap(
    author = "Michael Wilson",
    version = crate_version!(),
    about = "Generates a drumkv1 sampler preset from a directory of wav samples or a map file."
)]
#[clap(group(ArgGroup::new("input").required(true).multiple(false)))]
struct Cli {
    /// The directory to read sample files from (*.wav, *.WAV). Samples are
    /// mapped onto keys 0..N-1 in sorted filename order.
    #[arg(short, long, group = "input")]
    dir: Option<PathBuf>,

    /// The map file to read explicit key/file pairs from. One "<key> <file>"
    /// pair per line; blank lines and lines starting with '#' are skipped.
    #[arg(short, long, group = "input")]
    mapfile: Option<PathBuf>,

    /// The preset file to create.
    #[arg(short, long)]
    output: PathBuf,

    /// Overwrite the output file if it already exists.
    #[arg(short, long)]
    force: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(count) => {
            println!(
                "Created '{}' with {} entries.",
                cli.output.display(),
                count
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

/// Builds the sample set from the selected input mode and writes the preset,
/// returning the number of entries written.
fn run(cli: &Cli) -> Result<usize, Error> {
    let samples: SampleSet = match (&cli.dir, &cli.mapfile) {
        (Some(dir), None) => scanner::scan_directory(dir)?,
        (None, Some(mapfile)) => mapfile::parse_mapfile(mapfile)?,
        // clap's input group guarantees exactly one mode was selected.
        _ => unreachable!("exactly one input mode"),
    };

    preset::write_preset(&cli.output, cli.force, &samples)
}
