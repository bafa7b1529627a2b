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

use clap::Parser;
use clap::builder::RangedU64ValueParser;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use wordsquares::trie::{Trie, WordIterator};
use wordsquares::word_list;

/// Print the words of a dictionary that can be used in a word square
#[derive(Parser)]
#[command(name = "dump-words", version, about)]
struct Cli {
    /// Length of the words
    #[arg(
        short,
        long,
        default_value_t = 2,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..),
    )]
    size: usize,

    /// List of words with one word per line
    #[arg(short, long, default_value = "/usr/share/dict/words")]
    dictionary: PathBuf,
}

fn dump_words(trie: &Trie, output: &mut impl Write) -> io::Result<()> {
    let mut iterator = WordIterator::new(trie);

    while let Some(word) = iterator.next() {
        writeln!(output, "{}", word)?;
    }

    output.flush()
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let words = match word_list::load(&cli.dictionary, cli.size) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        },
    };

    let trie = words.iter().map(String::as_str).collect::<Trie>();

    match dump_words(&trie, &mut BufWriter::new(io::stdout().lock())) {
        Err(e) if e.kind() != io::ErrorKind::BrokenPipe => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        },
        _ => ExitCode::SUCCESS,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sorted_unique_words() {
        let words = word_list::read(
            "zoo\nant\nAnt\nbee\nant\nwasp\n".as_bytes(),
            3,
        ).unwrap();
        let trie = words.iter().map(String::as_str).collect::<Trie>();
        let mut output = Vec::<u8>::new();

        dump_words(&trie, &mut output).unwrap();

        assert_eq!(output, b"ant\nbee\nzoo\n");
    }
}
