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
use std::collections::HashSet;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info, Level};
use wordsquares::{alphabet, word_list};
use wordsquares::square::{Square, SquareSolver, Variant};
use wordsquares::trie::Trie;

/// Search a dictionary for word squares
#[derive(Parser)]
#[command(name = "wordsquares", version, about)]
struct Cli {
    /// Length of each side of the square. Ignored if a starting word
    /// is given.
    #[arg(
        short,
        long,
        default_value_t = 2,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..),
    )]
    size: usize,

    /// Only search for squares starting with this word
    #[arg(short, long)]
    word: Option<String>,

    /// List of words with one word per line
    #[arg(short, long, default_value = "/usr/share/dict/words")]
    dictionary: PathBuf,

    /// Allow the columns to be different words from the rows
    #[arg(long)]
    double: bool,

    /// Only print the number of squares found
    #[arg(short, long)]
    count: bool,

    /// Don’t report each starting word as it is tried
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Also report statistics about the search
    #[arg(short, long)]
    verbose: bool,
}

struct SquareWriter<W: Write> {
    output: W,
    count_only: bool,
    n_squares: u64,
}

impl<W: Write> SquareWriter<W> {
    fn new(output: W, count_only: bool) -> SquareWriter<W> {
        SquareWriter {
            output,
            count_only,
            n_squares: 0,
        }
    }

    fn write_square(&mut self, square: &Square) -> io::Result<()> {
        self.n_squares += 1;

        if self.count_only {
            Ok(())
        } else {
            write!(self.output, "---\n{}", square)
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }

    fn finish(mut self) -> io::Result<()> {
        if self.count_only {
            writeln!(self.output, "{}", self.n_squares)?;
        }

        debug!(n_squares = self.n_squares, "search finished");

        self.output.flush()
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        Level::WARN
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .init();
}

fn search<W: Write>(
    trie: &Trie,
    seed: &str,
    variant: Variant,
    writer: &mut SquareWriter<W>,
) -> io::Result<()> {
    let start = Square::new(vec![seed.to_string()]);

    for square in SquareSolver::new(trie, start, variant) {
        writer.write_square(&square)?;
    }

    Ok(())
}

fn search_all<W: Write>(
    trie: &Trie,
    words: &[String],
    variant: Variant,
    writer: &mut SquareWriter<W>,
) -> io::Result<()> {
    let mut tried = HashSet::<&str>::new();

    for seed in words.iter() {
        // The word list can contain the same word more than once
        if !tried.insert(seed) {
            continue;
        }

        info!(%seed, "trying");

        search(trie, seed, variant, writer)?;

        writer.flush()?;
    }

    debug!(n_seeds = tried.len(), "tried every word");

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(&cli);

    let seed = cli.word.filter(|word| !word.is_empty());

    if let Some(seed) = seed.as_ref() {
        if !alphabet::is_word(seed) {
            eprintln!("{}: the word can only contain the letters a-z", seed);
            return ExitCode::FAILURE;
        }
    }

    let size = seed.as_ref().map(String::len).unwrap_or(cli.size);
    let variant = if cli.double {
        Variant::Double
    } else {
        Variant::Plain
    };

    let words = match word_list::load(&cli.dictionary, size) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        },
    };

    let mut trie = words.iter().map(String::as_str).collect::<Trie>();

    debug!(n_words = trie.len(), size, ?variant, "loaded dictionary");

    let mut writer = SquareWriter::new(
        BufWriter::new(io::stdout().lock()),
        cli.count,
    );

    let result = match seed {
        Some(seed) => {
            trie.add_word(&seed);
            search(&trie, &seed, variant, &mut writer)
        },
        None => search_all(&trie, &words, variant, &mut writer),
    }.and_then(|()| writer.finish());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        // Stop quietly if the output was closed, eg when piped to head
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        },
    }
}
