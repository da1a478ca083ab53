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

use super::placement::Placement;

/// Checks that two placements can both be in the grid, ie, every
/// square that they share has the same letter in both.
pub fn compatible(a: &Placement, b: &Placement) -> bool {
    a.cells().iter().all(|cell| {
        b.cells()
            .iter()
            .filter(|other| other.coordinate == cell.coordinate)
            .all(|other| other.letter == cell.letter)
    })
}
