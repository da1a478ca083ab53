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

use std::fmt;
use std::ops::Index;
use serde::{Serialize, Serializer};

/// Position of a square in the grid. Rows count downwards from the
/// top and columns count rightwards from the left.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Coordinate {
        Coordinate { row, col }
    }

    /// Moves `n` steps of `delta` away from this coordinate, or
    /// returns None if that would go above or left of the grid.
    pub fn offset(self, delta: (isize, isize), n: usize) -> Option<Coordinate> {
        let n = isize::try_from(n).ok()?;

        Some(Coordinate {
            row: self.row.checked_add_signed(delta.0.checked_mul(n)?)?,
            col: self.col.checked_add_signed(delta.1.checked_mul(n)?)?,
        })
    }
}

/// A completely filled rectangle of letters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    letters: Box<[char]>,
}

impl Grid {
    /// Makes a grid from letters listed row by row.
    pub fn new(height: usize, width: usize, letters: Vec<char>) -> Grid {
        assert_eq!(letters.len(), height * width);

        Grid {
            height,
            width,
            letters: letters.into_boxed_slice(),
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn rows(&self) -> std::slice::Chunks<'_, char> {
        self.letters.chunks(self.width)
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let width = self.width;

        (0..self.height * width).map(move |pos| {
            Coordinate::new(pos / width, pos % width)
        })
    }
}

impl Index<Coordinate> for Grid {
    type Output = char;

    fn index(&self, coordinate: Coordinate) -> &char {
        assert!(coordinate.row < self.height && coordinate.col < self.width);
        &self.letters[coordinate.row * self.width + coordinate.col]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (row_num, row) in self.rows().enumerate() {
            if row_num > 0 {
                writeln!(f)?;
            }

            for (col, letter) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }

                write!(f, "{}", letter)?;
            }
        }

        Ok(())
    }
}

// Each row is serialized as a string so the JSON output is readable
impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(
            self.rows().map(|row| row.iter().collect::<String>())
        )
    }
}
