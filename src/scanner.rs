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
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::Error;
use crate::preset::{SampleEntry, SampleSet};

/// Maximum number of samples mapped from a directory: the instrument's
/// addressable key range (MIDI notes 0..=127).
pub const MAX_SAMPLES: usize = 128;

/// Scans a directory for wav samples and maps them onto keys 0..N-1 in
/// byte-lexicographic filename order.
///
/// Only regular files and symlinks with a case-insensitive `.wav` suffix are
/// considered. The entry paths are the directory joined with the filename, so
/// they are relative if the directory argument was.
pub fn scan_directory(dir: &Path) -> Result<SampleSet, Error> {
    debug!("Scanning directory {dir:?} for samples");

    let entries = fs::read_dir(dir).map_err(|e| Error::InputNotFound {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut names: Vec<String> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::InputNotFound {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let file_type = entry.file_type().map_err(|e| Error::InputNotFound {
            path: dir.to_path_buf(),
            source: e,
        })?;
        if !file_type.is_file() && !file_type.is_symlink() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if !has_wav_suffix(&name) {
            continue;
        }
        names.push(name);
    }

    if names.is_empty() {
        return Err(Error::NoSamplesFound(dir.to_path_buf()));
    }
    if names.len() > MAX_SAMPLES {
        return Err(Error::TooManySamples {
            found: names.len(),
            max: MAX_SAMPLES,
        });
    }

    names.sort();
    info!("Found {} samples in {dir:?}", names.len());

    Ok(names
        .into_iter()
        .enumerate()
        .map(|(key, name)| SampleEntry {
            key: key as i32,
            path: dir.join(&name).display().to_string(),
        })
        .collect())
}

/// Case-insensitive `.wav` suffix match on the last four bytes. Names shorter
/// than the suffix never match.
fn has_wav_suffix(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() >= 4 && bytes[bytes.len() - 4..].eq_ignore_ascii_case(b".wav")
}

#[cfg(test)]
mod test {
    use std::error::Error;
    use std::fs;

    use super::*;

    #[test]
    fn test_suffix_match() {
        assert!(has_wav_suffix("kick.wav"));
        assert!(has_wav_suffix("SNARE.WAV"));
        assert!(has_wav_suffix("tom.WaV"));
        assert!(has_wav_suffix(".wav"));
        assert!(!has_wav_suffix("wav"));
        assert!(!has_wav_suffix(""));
        assert!(!has_wav_suffix("kick.wave"));
        assert!(!has_wav_suffix("kick.aiff"));
    }

    #[test]
    fn test_scan_sorts_and_assigns_keys() -> Result<(), Box<dyn Error>> {
        let tempdir = tempfile::tempdir()?;
        let dir = tempdir.path();
        for name in ["kick.wav", "Snare.WAV", "hihat.wav"] {
            fs::write(dir.join(name), "")?;
        }

        let samples = scan_directory(dir)?;
        assert_eq!(3, samples.len());
        // Uppercase sorts before lowercase in byte order.
        assert_eq!(0, samples[0].key);
        assert_eq!(dir.join("Snare.WAV").display().to_string(), samples[0].path);
        assert_eq!(1, samples[1].key);
        assert_eq!(dir.join("hihat.wav").display().to_string(), samples[1].path);
        assert_eq!(2, samples[2].key);
        assert_eq!(dir.join("kick.wav").display().to_string(), samples[2].path);
        Ok(())
    }

    #[test]
    fn test_scan_filters_non_samples() -> Result<(), Box<dyn Error>> {
        let tempdir = tempfile::tempdir()?;
        let dir = tempdir.path();
        fs::write(dir.join("kick.wav"), "")?;
        fs::write(dir.join("readme.txt"), "")?;
        fs::write(dir.join("wav"), "")?;
        // A directory with a matching name is still not a sample.
        fs::create_dir(dir.join("loops.wav"))?;

        let samples = scan_directory(dir)?;
        assert_eq!(1, samples.len());
        assert_eq!(dir.join("kick.wav").display().to_string(), samples[0].path);
        Ok(())
    }

    #[test]
    fn test_scan_empty_directory() -> Result<(), Box<dyn Error>> {
        let tempdir = tempfile::tempdir()?;
        fs::write(tempdir.path().join("notes.txt"), "")?;

        let result = scan_directory(tempdir.path());
        assert!(matches!(result, Err(super::Error::NoSamplesFound(_))));
        Ok(())
    }

    #[test]
    fn test_scan_too_many_samples() -> Result<(), Box<dyn Error>> {
        let tempdir = tempfile::tempdir()?;
        for i in 0..=MAX_SAMPLES {
            fs::write(tempdir.path().join(format!("sample{i:03}.wav")), "")?;
        }

        let result = scan_directory(tempdir.path());
        match result {
            Err(super::Error::TooManySamples { found, max }) => {
                assert_eq!(MAX_SAMPLES + 1, found);
                assert_eq!(MAX_SAMPLES, max);
            }
            other => panic!("expected TooManySamples, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_scan_full_key_range() -> Result<(), Box<dyn Error>> {
        let tempdir = tempfile::tempdir()?;
        for i in 0..MAX_SAMPLES {
            fs::write(tempdir.path().join(format!("sample{i:03}.wav")), "")?;
        }

        let samples = scan_directory(tempdir.path())?;
        assert_eq!(MAX_SAMPLES, samples.len());
        assert_eq!(0, samples[0].key);
        assert_eq!(127, samples[MAX_SAMPLES - 1].key);
        Ok(())
    }

    #[test]
    fn test_scan_missing_directory() {
        let result = scan_directory(Path::new("/nonexistent/samples"));
        assert!(matches!(result, Err(super::Error::InputNotFound { .. })));
    }
}
