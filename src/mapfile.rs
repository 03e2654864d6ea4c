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

//! Parser for map files: a line-oriented format pairing MIDI keys with
//! sample file names.
//!
//! ```text
//! # a comment
//! 36 kick.wav
//! 38 Snare Hard Left.wav
//! ```
//!
//! Keys are taken as written: no range check and no duplicate detection. The
//! consuming sampler decides what overlapping keys mean.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::info;

use crate::error::Error;
use crate::preset::{SampleEntry, SampleSet};

/// Parses a map file into a sample set, preserving file order.
///
/// Blank lines and lines starting with `#` are skipped. Every other line is
/// an integer key followed by a file name; everything after the first run of
/// whitespace is the file name, verbatim, so names may contain spaces.
pub fn parse_mapfile(path: &Path) -> Result<SampleSet, Error> {
    let file = File::open(path).map_err(|e| Error::InputNotFound {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut samples = SampleSet::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| Error::InputNotFound {
            path: path.to_path_buf(),
            source: e,
        })?;
        let number = index + 1;

        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        samples.push(parse_line(&line, number)?);
    }

    info!("Parsed {} entries from {path:?}", samples.len());
    Ok(samples)
}

fn parse_line(line: &str, number: usize) -> Result<SampleEntry, Error> {
    // Leading whitespace before the key is tolerated; an indented comment is
    // not a comment and fails the key parse below.
    let (token, rest) = line
        .trim_start()
        .split_once(|c: char| c.is_whitespace())
        .ok_or(Error::MalformedLine { line: number })?;
    let key: i32 = token
        .parse()
        .map_err(|_| Error::MalformedLine { line: number })?;

    let path = rest.trim_start();
    if path.is_empty() {
        return Err(Error::MalformedLine { line: number });
    }

    Ok(SampleEntry {
        key,
        path: path.to_string(),
    })
}
