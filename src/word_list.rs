// Wordsquares – Search for word squares
// Copyright (C) 2026  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use super::alphabet;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::fs::File;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{}: {}", .path.display(), .source)]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}:{}: {}", .path.display(), .line_num, .source)]
    Read {
        path: PathBuf,
        line_num: usize,
        #[source]
        source: io::Error,
    },
}

/// Whether a line of the word list can be used in a square of the
/// given size.
pub fn is_acceptable(line: &[u8], size: usize) -> bool {
    line.len() == size && alphabet::is_word(line)
}

/// Reads the words of length `size` from a list with one word per
/// line. Lines that aren’t made of lowercase letters are skipped. On
/// error, returns the line number where it happened along with the
/// error.
pub fn read<R: BufRead>(
    reader: R,
    size: usize,
) -> Result<Vec<String>, (usize, io::Error)> {
    let mut words = Vec::new();

    for (line_num, line) in reader.split(b'\n').enumerate() {
        let line = line.map_err(|e| (line_num + 1, e))?;
        let line = line.strip_suffix(b"\r").unwrap_or(&line);

        if is_acceptable(line, size) {
            words.push(line.iter().map(|&letter| letter as char).collect());
        }
    }

    Ok(words)
}

pub fn load<P: AsRef<Path>>(
    path: P,
    size: usize,
) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_owned(),
        source,
    })?;

    read(io::BufReader::new(file), size).map_err(|(line_num, source)| {
        LoadError::Read {
            path: path.to_owned(),
            line_num,
            source,
        }
    })
}
