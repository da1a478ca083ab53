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

use serde::Serialize;
use super::grid::Coordinate;
use super::language::Language;
use super::orientation::{Orientation, N_ORIENTATIONS};
use super::randomizer::RandomSource;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub coordinate: Coordinate,
    pub letter: char,
}

/// A word laid out on the grid. The cells are stored in the order of
/// the letters in the word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Placement {
    word: String,
    orientation: Orientation,
    origin: Coordinate,
    cells: Vec<Cell>,
}

/// Uppercases the word for the language and removes the spaces so
/// that only the letters end up in the grid.
pub fn normalize_word(word: &str, language: Language) -> String {
    language
        .to_uppercase(word)
        .chars()
        .filter(|&ch| ch != ' ')
        .collect()
}

fn lay_out(
    word: &str,
    orientation: Orientation,
    origin: Coordinate,
) -> Option<Vec<Cell>> {
    let delta = orientation.delta();

    word.chars()
        .enumerate()
        .map(|(i, letter)| {
            origin.offset(delta, i).map(|coordinate| Cell { coordinate, letter })
        })
        .collect()
}

impl Placement {
    /// Puts the word at a random position in a `height`×`width` grid.
    /// If `orientation` is None then a random one is picked too. The
    /// word must fit in the grid in every orientation.
    pub fn new<R: RandomSource>(
        word: &str,
        height: usize,
        width: usize,
        language: Language,
        orientation: Option<Orientation>,
        rng: &mut R,
    ) -> Placement {
        let word = normalize_word(word, language);
        let length = word.chars().count();

        assert!(length > 0, "can’t place a word with no letters");

        let orientation = orientation.unwrap_or_else(|| {
            Orientation::from_index(rng.number(0..N_ORIENTATIONS))
        });

        let (rows, cols) = orientation.origin_ranges(length, height, width);

        assert!(
            !rows.is_empty() && !cols.is_empty(),
            "“{}” doesn’t fit in a {}×{} grid",
            word,
            height,
            width,
        );

        let origin = Coordinate::new(rng.number(rows), rng.number(cols));

        let cells = lay_out(&word, orientation, origin)
            .expect("origin ranges keep the word inside the grid");

        Placement {
            word,
            orientation,
            origin,
            cells,
        }
    }

    /// Places the word with a chosen origin and orientation. Returns
    /// None if the word would run off the top or left of the grid.
    pub fn at(
        word: &str,
        language: Language,
        orientation: Orientation,
        origin: Coordinate,
    ) -> Option<Placement> {
        let word = normalize_word(word, language);
        let cells = lay_out(&word, orientation, origin)?;

        Some(Placement {
            word,
            orientation,
            origin,
            cells,
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn letter_at(&self, coordinate: Coordinate) -> Option<char> {
        self.cells
            .iter()
            .find(|cell| cell.coordinate == coordinate)
            .map(|cell| cell.letter)
    }
}
