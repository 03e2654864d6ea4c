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
use std::path::PathBuf;

/// Typed error covering every way a generation run can fail. All of these are
/// terminal: the run stops, a diagnostic goes to stderr, and the process exits
/// with the variant's code.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unable to read '{}': {source}", path.display())]
    InputNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No samples (*.wav, *.WAV) found in '{}' - nothing was written", .0.display())]
    NoSamplesFound(PathBuf),

    #[error("Directory contains {found} samples, more than the current maximum of {max} - no output was created")]
    TooManySamples { found: usize, max: usize },

    #[error("Malformed input in map file, line {line}")]
    MalformedLine { line: usize },

    #[error("File '{}' already exists, and you did not specify --force - aborting", .0.display())]
    OutputExists(PathBuf),

    #[error("Unable to write output file '{}': {}", .0.display(), .1)]
    OutputUnwritable(PathBuf, std::io::Error),
}

impl Error {
    /// The process exit code for this failure. Exit code 2 is left to clap's
    /// usage errors (missing or conflicting arguments).
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::NoSamplesFound(_) => 1,
            Error::InputNotFound { .. } => 3,
            Error::TooManySamples { .. } => 4,
            Error::MalformedLine { .. } => 5,
            Error::OutputExists(_) => 6,
            Error::OutputUnwritable(_, _) => 7,
        }
    }
}
