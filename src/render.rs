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
use super::generator::Puzzle;

const HINT_SEPARATOR: &str = "------------------------------";

/// Text version of a puzzle: the grid, then the list of words to find
/// and optionally the solution.
pub struct Rendering<'a> {
    puzzle: &'a Puzzle,
    show_hint: bool,
}

impl<'a> Rendering<'a> {
    pub fn new(puzzle: &'a Puzzle, show_hint: bool) -> Rendering<'a> {
        Rendering { puzzle, show_hint }
    }
}

impl<'a> fmt::Display for Rendering<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\n\n", self.puzzle.grid())?;

        let language = self.puzzle.language();

        for (i, word) in self.puzzle.words().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            write!(f, "{}", language.to_uppercase(word))?;
        }

        if self.show_hint {
            write!(
                f,
                "\n\n{}\n\nThe solutions (in lowercase):\n\n{}",
                HINT_SEPARATOR,
                self.puzzle.hint_grid(),
            )?;
        }

        Ok(())
    }
}

pub fn render(puzzle: &Puzzle, show_hint: bool) -> String {
    Rendering::new(puzzle, show_hint).to_string()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::generator;
    use crate::language::Language;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn make_puzzle(words: &[&str], language: Language) -> Puzzle {
        let mut rng = StdRng::seed_from_u64(17);
        generator::generate(words, 5, 5, language, &mut rng).unwrap()
    }

    #[test]
    fn without_hint() {
        let puzzle = make_puzzle(&["CAT", "DOG"], Language::English);
        let text = render(&puzzle, false);

        assert_eq!(text, format!("{}\n\nCAT\nDOG", puzzle.grid()));
        assert!(!text.contains(HINT_SEPARATOR));

        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 8);
        assert!(lines[..5].iter().all(|line| line.chars().count() == 9));
        assert_eq!(lines[5], "");
    }

    #[test]
    fn with_hint() {
        let puzzle = make_puzzle(&["cat", "dog"], Language::English);
        let text = render(&puzzle, true);

        assert_eq!(
            text,
            format!(
                "{}\n\n\
                 CAT\n\
                 DOG\n\
                 \n\
                 ------------------------------\n\
                 \n\
                 The solutions (in lowercase):\n\
                 \n\
                 {}",
                puzzle.grid(),
                puzzle.hint_grid(),
            ),
        );
    }

    #[test]
    fn words_keep_spaces_and_order() {
        let puzzle = make_puzzle(&["şu an", "ılık", "iç"], Language::Turkish);
        let text = render(&puzzle, false);

        assert!(text.ends_with("\n\nŞU AN\nILIK\nİÇ"));
    }
}
