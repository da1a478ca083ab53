// Vortserĉo – A word search puzzle generator
// Copyright (C) 2025  Neil Roberts
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

use log::{debug, info, warn};
use serde::Serialize;
use super::grid::{Coordinate, Grid};
use super::language::Language;
use super::overlap;
use super::placement::{self, Placement};
use super::randomizer::RandomSource;

/// Average number of random placements tried per word before giving
/// up on the whole puzzle.
pub const ATTEMPTS_PER_WORD: usize = 50;

/// Largest number of squares that a grid is allowed to have.
pub const MAX_SQUARES: usize = 1 << 20;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error(
        "maximum number of attempts ({attempts}) exceeded while placing \
         “{word}”: either there are too many words or the grid is too small"
    )]
    PlacementExhausted {
        word: String,
        attempts: usize,
    },
    #[error("a {height}×{width} grid has too many squares")]
    GridTooLarge {
        height: usize,
        width: usize,
    },
}

/// A finished puzzle. Every word has been placed and every square
/// has a letter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Puzzle {
    language: Language,
    words: Vec<String>,
    placements: Vec<Placement>,
    grid: Grid,
    hint_grid: Grid,
}

impl Puzzle {
    pub fn language(&self) -> Language {
        self.language
    }

    /// The words in the order they were given.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Same as the grid except that the letters of the words are in
    /// lowercase.
    pub fn hint_grid(&self) -> &Grid {
        &self.hint_grid
    }
}

/// Size of one dimension of the grid. If the longest word doesn’t
/// leave a spare square then the grid is made one bigger than it.
pub fn approved_size(size: usize, longest_word: usize) -> usize {
    if longest_word >= size {
        longest_word + 1
    } else {
        size
    }
}

/// Length of the longest word as it was typed, spaces included. If
/// uppercasing makes a word longer, eg “ß” becoming “SS”, then the
/// longer length is used.
pub fn longest_word_length<S: AsRef<str>>(
    words: &[S],
    language: Language,
) -> usize {
    words.iter()
        .map(|word| {
            let word = word.as_ref();

            word.chars()
                .count()
                .max(placement::normalize_word(word, language).chars().count())
        })
        .max()
        .unwrap_or(0)
}

fn place_words<S: AsRef<str>, R: RandomSource>(
    words: &[S],
    height: usize,
    width: usize,
    language: Language,
    rng: &mut R,
) -> Result<Vec<Placement>, GenerateError> {
    let max_attempts = words.len() * ATTEMPTS_PER_WORD;
    // Shared between all of the words
    let mut attempts = 0;
    let mut placements = Vec::<Placement>::with_capacity(words.len());

    for word in words.iter().map(|word| word.as_ref()) {
        let first_attempt = attempts;

        // There is no backtracking so once a word is accepted it
        // stays where it is even if it blocks a later word
        let placement = loop {
            if attempts >= max_attempts {
                return Err(GenerateError::PlacementExhausted {
                    word: word.to_string(),
                    attempts,
                });
            }

            attempts += 1;

            let candidate = Placement::new(
                word,
                height,
                width,
                language,
                None,
                rng,
            );

            if placements.iter().all(|p| overlap::compatible(&candidate, p)) {
                break candidate;
            }
        };

        debug!(
            "placed “{}” {:?} from {:?} after {} attempts",
            placement.word(),
            placement.orientation(),
            placement.origin(),
            attempts - first_attempt,
        );

        placements.push(placement);
    }

    info!(
        "placed {} words using {} of {} attempts",
        placements.len(),
        attempts,
        max_attempts,
    );

    Ok(placements)
}

/// Generates a word search containing all of `words`. The grid is
/// enlarged if it is too small for the longest word.
pub fn generate<S: AsRef<str>, R: RandomSource>(
    words: &[S],
    height: usize,
    width: usize,
    language: Language,
    rng: &mut R,
) -> Result<Puzzle, GenerateError> {
    let longest_word = longest_word_length(words, language);
    let approved_height = approved_size(height, longest_word);
    let approved_width = approved_size(width, longest_word);

    if approved_height != height || approved_width != width {
        warn!(
            "grid enlarged from {}×{} to {}×{} to fit a word of {} letters",
            height,
            width,
            approved_height,
            approved_width,
            longest_word,
        );
    }

    let (height, width) = (approved_height, approved_width);

    let n_squares = height
        .checked_mul(width)
        .filter(|&n_squares| n_squares <= MAX_SQUARES)
        .ok_or(GenerateError::GridTooLarge { height, width })?;

    let placements = place_words(words, height, width, language, rng)?;

    let mut word_letters = vec![None; n_squares];

    for cell in placements.iter().flat_map(Placement::cells) {
        let Coordinate { row, col } = cell.coordinate;
        word_letters[row * width + col] = Some(cell.letter);
    }

    let mut letters = Vec::with_capacity(n_squares);
    let mut hint_letters = Vec::with_capacity(n_squares);

    for letter in word_letters {
        match letter {
            Some(letter) => {
                letters.push(letter);
                hint_letters.push(language.to_lowercase_letter(letter));
            },
            None => {
                let letter = *rng.element(language.alphabet());
                letters.push(letter);
                hint_letters.push(letter);
            },
        }
    }

    Ok(Puzzle {
        language,
        words: words.iter().map(|word| word.as_ref().to_string()).collect(),
        placements,
        grid: Grid::new(height, width, letters),
        hint_grid: Grid::new(height, width, hint_letters),
    })
}
