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

use super::trie::{Trie, WordIterator};
use super::alphabet;
use std::fmt;

/// A square of words, possibly with fewer rows than letters in each
/// row while it is being built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Square {
    rows: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    // Each row is also the corresponding column
    Plain,
    // The rows and columns can be different words
    Double,
}

impl Square {
    pub fn new(rows: Vec<String>) -> Square {
        if let Some(first) = rows.first() {
            assert!(
                rows.iter().all(|row| row.len() == first.len()),
                "all of the rows of a square must have the same length",
            );
            assert!(
                rows.len() <= first.len(),
                "a square can’t have more rows than columns",
            );
        }

        Square { rows }
    }

    /// Length of each side of the finished square.
    pub fn size(&self) -> usize {
        self.rows.first().map(String::len).unwrap_or(0)
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<String> {
        self.rows
    }

    pub fn is_complete(&self) -> bool {
        self.rows.len() == self.size()
    }

    /// The letters of column `x` in the rows filled so far.
    pub fn column(&self, x: usize) -> impl Iterator<Item = u8> + '_ {
        self.rows.iter().map(move |row| row.as_bytes()[x])
    }

    pub fn columns(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.size()).map(|x| {
            self.column(x).map(|letter| letter as char).collect()
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows.iter() {
            writeln!(f, "{}", row)?;
        }

        Ok(())
    }
}

fn column_prefix(rows: &[String], x: usize, buf: &mut Vec<u8>) {
    buf.clear();
    buf.extend(rows.iter().map(|row| row.as_bytes()[x]));
}

/// For each column, the letters that can come next in the column so
/// that it can still be completed to a word as long as the rows.
/// Returns `None` if any of the columns can’t be continued.
pub fn column_alphabets(trie: &Trie, rows: &[String]) -> Option<Vec<Vec<u8>>> {
    let size = rows.first()?.len();
    let n_rows = rows.len();

    if n_rows >= size {
        return None;
    }

    let mut prefix = Vec::with_capacity(n_rows);
    let mut alphabets = Vec::with_capacity(size);

    for x in 0..size {
        column_prefix(rows, x, &mut prefix);

        let mut seen = [false; alphabet::N_LETTERS];
        let mut letters = Vec::new();
        let mut words = WordIterator::with_prefix(trie, &prefix);

        while let Some(word) = words.next() {
            if word.len() != size {
                continue;
            }

            let letter = word.as_bytes()[n_rows];
            let index = alphabet::index(letter);

            if !seen[index] {
                seen[index] = true;
                letters.push(letter);
            }
        }

        if letters.is_empty() {
            return None;
        }

        alphabets.push(letters);
    }

    Some(alphabets)
}

enum Step {
    Solved,
    DeadEnd,
    Branch(Vec<String>),
}

struct StackEntry {
    n_rows: usize,
    candidates: Vec<String>,
    next_candidate: usize,
}

/// Finds every way to fill in the remaining rows of a square so that
/// all of the rows and columns are words in the trie. The squares are
/// returned one at a time so that they can be printed as soon as they
/// are found.
pub struct SquareSolver<'a> {
    trie: &'a Trie,
    variant: Variant,
    size: usize,
    rows: Vec<String>,
    stack: Vec<StackEntry>,
    // The starting rows were already a finished square
    pending: Option<Square>,
    prefix_buf: Vec<u8>,
}

impl<'a> SquareSolver<'a> {
    pub fn new(
        trie: &'a Trie,
        start: Square,
        variant: Variant,
    ) -> SquareSolver<'a> {
        let size = start.size();

        let mut solver = SquareSolver {
            trie,
            variant,
            size,
            rows: start.into_rows(),
            stack: Vec::new(),
            pending: None,
            prefix_buf: Vec::with_capacity(size),
        };

        // An empty square has nothing to build on
        if !solver.rows.is_empty() {
            match solver.step() {
                Step::Solved => {
                    solver.pending = Some(Square::new(solver.rows.clone()));
                },
                Step::DeadEnd => (),
                Step::Branch(candidates) => solver.push_candidates(candidates),
            }
        }

        solver
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    fn push_candidates(&mut self, candidates: Vec<String>) {
        self.stack.push(StackEntry {
            n_rows: self.rows.len(),
            candidates,
            next_candidate: 0,
        });
    }

    fn columns_are_words(&mut self) -> bool {
        for x in 0..self.size {
            column_prefix(&self.rows, x, &mut self.prefix_buf);

            if !self.trie.contains(&self.prefix_buf) {
                return false;
            }
        }

        true
    }

    fn step(&mut self) -> Step {
        match self.variant {
            Variant::Plain => self.plain_step(),
            Variant::Double => self.double_step(),
        }
    }

    fn plain_step(&mut self) -> Step {
        let n_rows = self.rows.len();

        // Give up if any of the columns can’t become a word
        for x in 0..self.size {
            column_prefix(&self.rows, x, &mut self.prefix_buf);

            if !self.trie.has_prefix(&self.prefix_buf) {
                return Step::DeadEnd;
            }
        }

        if n_rows >= self.size {
            return if self.columns_are_words() {
                Step::Solved
            } else {
                Step::DeadEnd
            };
        }

        // The next row has to start with the letters already in the
        // column of the same number
        column_prefix(&self.rows, n_rows, &mut self.prefix_buf);

        let size = self.size;
        let mut candidates = self.trie.with_prefix(&self.prefix_buf);

        candidates.retain(|word| word.len() == size);

        Step::Branch(candidates)
    }

    fn double_step(&mut self) -> Step {
        if self.rows.len() >= self.size {
            return if self.columns_are_words() {
                Step::Solved
            } else {
                Step::DeadEnd
            };
        }

        match column_alphabets(self.trie, &self.rows) {
            Some(alphabets) => Step::Branch(self.trie.matches(&alphabets)),
            None => Step::DeadEnd,
        }
    }
}

impl<'a> Iterator for SquareSolver<'a> {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if let Some(square) = self.pending.take() {
            return Some(square);
        }

        while let Some(entry) = self.stack.last_mut() {
            let Some(candidate) = entry.candidates.get(entry.next_candidate)
            else {
                self.stack.pop();
                continue;
            };

            entry.next_candidate += 1;

            self.rows.truncate(entry.n_rows);
            self.rows.push(candidate.clone());

            match self.step() {
                Step::Solved => return Some(Square::new(self.rows.clone())),
                Step::DeadEnd => (),
                Step::Branch(candidates) => self.push_candidates(candidates),
            }
        }

        None
    }
}

/// Collects every completion of the starting rows.
pub fn build(trie: &Trie, rows: &[&str], variant: Variant) -> Vec<Square> {
    let start = Square::new(rows.iter().map(|row| row.to_string()).collect());

    SquareSolver::new(trie, start, variant).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn rows(square: &Square) -> Vec<&str> {
        square.rows().iter().map(String::as_str).collect()
    }

    #[test]
    fn square_columns() {
        let square = Square::new(vec![
            "cat".to_string(),
            "ago".to_string(),
        ]);

        assert_eq!(square.size(), 3);
        assert!(!square.is_complete());
        assert_eq!(square.column(1).collect::<Vec<u8>>(), b"ag");
        assert_eq!(
            square.columns().collect::<Vec<String>>(),
            &["ca", "ag", "to"],
        );
        assert_eq!(square.to_string(), "cat\nago\n");
    }

    #[test]
    #[should_panic]
    fn uneven_rows() {
        Square::new(vec!["cat".to_string(), "at".to_string()]);
    }

    #[test]
    fn plain_two_letters() {
        let trie = ["on", "no", "nn", "oo"].into_iter().collect::<Trie>();

        let squares = build(&trie, &["on"], Variant::Plain);

        assert_eq!(
            squares.iter().map(rows).collect::<Vec<_>>(),
            &[vec!["on", "nn"], vec!["on", "no"]],
        );

        let trie = ["on", "no"].into_iter().collect::<Trie>();

        let squares = build(&trie, &["on"], Variant::Plain);

        assert_eq!(squares.len(), 1);
        assert_eq!(rows(&squares[0]), &["on", "no"]);
    }

    #[test]
    fn plain_rejects_missing_column() {
        // The second column would need to be “no” or “nn”
        let trie = ["on", "nn"].into_iter().collect::<Trie>();

        let squares = build(&trie, &["on"], Variant::Plain);

        assert_eq!(squares.len(), 1);
        assert_eq!(rows(&squares[0]), &["on", "nn"]);

        let trie = ["ab"].into_iter().collect::<Trie>();

        assert!(build(&trie, &["ab"], Variant::Plain).is_empty());
    }

    #[test]
    fn plain_three_letters() {
        let trie = ["bit", "ice", "ten", "bat", "ace", "ten", "tan"]
            .into_iter()
            .collect::<Trie>();

        let squares = build(&trie, &["bit"], Variant::Plain);

        assert_eq!(squares.len(), 1);
        assert_eq!(rows(&squares[0]), &["bit", "ice", "ten"]);
        assert!(squares[0].is_complete());
    }

    #[test]
    fn plain_ignores_other_lengths() {
        let trie = ["on", "no", "n", "nod", "o"].into_iter().collect::<Trie>();

        let squares = build(&trie, &["on"], Variant::Plain);

        assert_eq!(squares.len(), 1);
        assert_eq!(rows(&squares[0]), &["on", "no"]);
    }

    #[test]
    fn double_needs_no_symmetry() {
        // ab
        // cd
        // Rows “ab”, “cd” and columns “ac”, “bd”
        let trie = ["ab", "cd", "ac", "bd"].into_iter().collect::<Trie>();

        let squares = build(&trie, &["ab"], Variant::Double);

        assert_eq!(
            squares.iter().map(rows).collect::<Vec<_>>(),
            &[vec!["ab", "bd"], vec!["ab", "cd"]],
        );
        assert_eq!(
            squares[1].columns().collect::<Vec<String>>(),
            &["ac", "bd"],
        );

        // The plain variant only finds the symmetric square
        let squares = build(&trie, &["ab"], Variant::Plain);

        assert_eq!(squares.len(), 1);
        assert_eq!(rows(&squares[0]), &["ab", "bd"]);
    }

    #[test]
    fn double_no_solutions() {
        let trie = ["ab"].into_iter().collect::<Trie>();

        assert!(build(&trie, &["ab"], Variant::Double).is_empty());
    }

    #[test]
    fn alphabets_for_columns() {
        let trie = ["ab", "cd", "ac", "bd", "ae", "bx"]
            .into_iter()
            .collect::<Trie>();

        let alphabets = column_alphabets(&trie, &["ab".to_string()]).unwrap();

        assert_eq!(alphabets, &[b"bce".to_vec(), b"dx".to_vec()]);

        assert!(column_alphabets(&trie, &["cd".to_string()]).is_none());
        assert!(column_alphabets(&trie, &[]).is_none());
    }

    #[test]
    fn complete_start() {
        let trie = ["on", "no"].into_iter().collect::<Trie>();

        let squares = build(&trie, &["on", "no"], Variant::Double);
        assert_eq!(squares.len(), 1);

        let squares = build(&trie, &["on", "no"], Variant::Plain);
        assert_eq!(squares.len(), 1);

        assert!(build(&trie, &["no", "no"], Variant::Double).is_empty());
    }

    #[test]
    fn empty_start() {
        let trie = ["on", "no"].into_iter().collect::<Trie>();

        assert!(build(&trie, &[], Variant::Plain).is_empty());
        assert!(build(&trie, &[], Variant::Double).is_empty());
    }

    #[test]
    fn single_letter() {
        let trie = ["a", "b"].into_iter().collect::<Trie>();

        let squares = build(&trie, &["a"], Variant::Plain);
        assert_eq!(squares.len(), 1);
        assert_eq!(rows(&squares[0]), &["a"]);

        let squares = build(&trie, &["b"], Variant::Double);
        assert_eq!(squares.len(), 1);
        assert_eq!(rows(&squares[0]), &["b"]);
    }
}
