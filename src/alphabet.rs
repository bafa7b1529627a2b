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

// Words are made of the 26 lowercase ASCII letters. Everything else in
// a word list is skipped before it reaches the trie.

pub const N_LETTERS: usize = 26;

pub fn is_letter(letter: u8) -> bool {
    letter.is_ascii_lowercase()
}

pub fn is_word<W: AsRef<[u8]>>(word: W) -> bool {
    word.as_ref().iter().all(|&letter| is_letter(letter))
}

/// Position of the letter in the alphabet, eg 0 for ‘a’.
pub fn index(letter: u8) -> usize {
    debug_assert!(is_letter(letter));
    (letter - b'a') as usize
}
