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

//! Streaming writer for the drumkv1 preset document.
//!
//! The document is written line by line straight to the destination; there is
//! no in-memory tree. Sample paths are inserted byte for byte, without XML
//! escaping: drumkv1 reads the file back the same way.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::Error;

mod template;

/// One sample mapping: a MIDI key and the file played at that key.
///
/// The key is `i32` on purpose: the map-file pipeline passes keys through
/// without range validation, so the type admits whatever the map file said.
/// The directory pipeline only ever produces 0..=127.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleEntry {
    pub key: i32,
    pub path: String,
}

/// The ordered mappings of one run, built by a scanner or parser and consumed
/// once by the writer.
pub type SampleSet = Vec<SampleEntry>;

/// Writes a complete preset document for the given samples to `out_path`,
/// returning the number of element blocks written.
///
/// Refuses to touch an existing destination unless `force` is set; the
/// existence check happens before the file is opened, so a pre-existing
/// output is never truncated by a refused run.
pub fn write_preset(out_path: &Path, force: bool, samples: &[SampleEntry]) -> Result<usize, Error> {
    if !force && out_path.exists() {
        return Err(Error::OutputExists(out_path.to_path_buf()));
    }

    let file = File::create(out_path)
        .map_err(|e| Error::OutputUnwritable(out_path.to_path_buf(), e))?;
    let mut writer = BufWriter::new(file);

    write_document(&mut writer, &out_path.display().to_string(), samples)
        .and_then(|_| writer.flush())
        .map_err(|e| Error::OutputUnwritable(out_path.to_path_buf(), e))?;

    debug!("Wrote {} elements to {out_path:?}", samples.len());
    Ok(samples.len())
}

fn write_document(w: &mut impl Write, name: &str, samples: &[SampleEntry]) -> io::Result<()> {
    write_header(w, name)?;
    for entry in samples {
        write_element(w, entry)?;
    }
    write_footer(w)
}

fn write_header(w: &mut impl Write, name: &str) -> io::Result<()> {
    writeln!(w, "<!DOCTYPE drumkv1>")?;
    writeln!(
        w,
        "<preset version=\"{}\" name=\"{}\">",
        template::PRESET_VERSION,
        name
    )?;
    writeln!(w, " <elements>")
}

fn write_element(w: &mut impl Write, entry: &SampleEntry) -> io::Result<()> {
    let key = entry.key.to_string();
    let grouped = if template::CHOKE_GROUP_KEYS.contains(&entry.key) {
        "1"
    } else {
        "0"
    };

    writeln!(w, "  <element index=\"{}\">", entry.key)?;
    writeln!(
        w,
        "   <sample offset-start=\"0\" index=\"0\" name=\"GEN1_SAMPLE\">{}</sample>",
        entry.path
    )?;
    writeln!(w, "   <params>")?;
    for param in &template::ELEMENT_PARAMS {
        let value = match param.index {
            template::SAMPLE_PARAM_INDEX => key.as_str(),
            template::GROUP_PARAM_INDEX => grouped,
            _ => param.value,
        };
        writeln!(
            w,
            "    <param index=\"{}\" name=\"{}\">{}</param>",
            param.index, param.name, value
        )?;
    }
    writeln!(w, "   </params>")?;
    writeln!(w, "  </element>")
}

fn write_footer(w: &mut impl Write) -> io::Result<()> {
    writeln!(w, " </elements>")?;
    writeln!(w, " <params>")?;
    for param in &template::GLOBAL_PARAMS {
        writeln!(
            w,
            "  <param index=\"{}\" name=\"{}\">{}</param>",
            param.index, param.name, param.value
        )?;
    }
    writeln!(w, " </params>")?;
    writeln!(w, "</preset>")
}
