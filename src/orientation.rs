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

use std::ops::Range;
use serde::Serialize;

pub const N_ORIENTATIONS: usize = 8;

/// The direction that a word is read in. The order follows the polar
/// angle, starting to the right and going anticlockwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    East,
    NorthEast,
    North,
    NorthWest,
    West,
    SouthWest,
    South,
    SouthEast,
}

impl Orientation {
    pub const ALL: [Orientation; N_ORIENTATIONS] = [
        Orientation::East,
        Orientation::NorthEast,
        Orientation::North,
        Orientation::NorthWest,
        Orientation::West,
        Orientation::SouthWest,
        Orientation::South,
        Orientation::SouthEast,
    ];

    /// Converts a number in 0..8 to an orientation. Any other number
    /// is a bug in the caller so it panics.
    pub fn from_index(index: usize) -> Orientation {
        match Orientation::ALL.get(index) {
            Some(&orientation) => orientation,
            None => panic!("orientation index {} is out of range", index),
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// The (row, column) step taken between consecutive letters.
    /// Rows count downwards.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Orientation::East => (0, 1),
            Orientation::NorthEast => (-1, 1),
            Orientation::North => (-1, 0),
            Orientation::NorthWest => (-1, -1),
            Orientation::West => (0, -1),
            Orientation::SouthWest => (1, -1),
            Orientation::South => (1, 0),
            Orientation::SouthEast => (1, 1),
        }
    }

    /// Returns the ranges of rows and columns where the first letter
    /// of a word with `length` letters can go so that the rest of the
    /// word stays inside a `height`×`width` grid. A range is empty if
    /// the word can’t fit along that axis.
    pub fn origin_ranges(
        self,
        length: usize,
        height: usize,
        width: usize,
    ) -> (Range<usize>, Range<usize>) {
        let (row_step, col_step) = self.delta();

        (
            axis_range(row_step, length, height),
            axis_range(col_step, length, width),
        )
    }
}

fn axis_range(step: isize, length: usize, size: usize) -> Range<usize> {
    match step {
        0 => 0..size,
        // Moving forwards, the word must end before the edge
        1 => 0..(size + 1).saturating_sub(length),
        // Moving backwards, the word needs room before the origin
        _ => length.saturating_sub(1)..size,
    }
}
