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

use std::io;
use std::path::Path;
use std::str::FromStr;
use serde::Deserialize;
use super::generator::MAX_SQUARES;
use super::language::{Language, UnknownLanguage};
use super::placement;

/// Everything needed to generate a puzzle.
///
/// The text format is the size as `HEIGHTxWIDTH`, the language code,
/// `Yes` or `No` to show the solution and then one word per line, eg:
///
/// ```text
/// 10x12
/// EN
/// No
/// apple
/// ice cream
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PuzzleConfig {
    pub height: usize,
    pub width: usize,
    pub language: Language,
    pub show_hint: bool,
    pub words: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "not enough lines (expected the size, the language, whether to \
         show hints and at least one word)"
    )]
    NotEnoughLines,
    #[error("invalid size “{0}” (expected HEIGHTxWIDTH, eg 20x20)")]
    InvalidSize(String),
    #[error("the height and width must be greater than zero")]
    ZeroDimension,
    #[error("a {0}×{1} grid is too big (the limit is {} squares)", MAX_SQUARES)]
    GridTooLarge(usize, usize),
    #[error(transparent)]
    UnsupportedLanguage(#[from] UnknownLanguage),
    #[error("invalid value “{0}” for showing hints (expected Yes or No)")]
    InvalidHintFlag(String),
    #[error("there are no words to place")]
    NoWords,
    #[error("word {0} has no letters")]
    EmptyWord(usize),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn parse_size(s: &str) -> Result<(usize, usize), ConfigError> {
    let invalid = || ConfigError::InvalidSize(s.to_string());

    let (height, width) = s.split_once('x').ok_or_else(invalid)?;

    Ok((
        height.trim().parse().map_err(|_| invalid())?,
        width.trim().parse().map_err(|_| invalid())?,
    ))
}

fn parse_hint_flag(s: &str) -> Result<bool, ConfigError> {
    match s {
        "Yes" => Ok(true),
        "No" => Ok(false),
        _ => Err(ConfigError::InvalidHintFlag(s.to_string())),
    }
}

impl PuzzleConfig {
    /// Checks the parts of the config that the parsers can’t.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height == 0 || self.width == 0 {
            return Err(ConfigError::ZeroDimension);
        }

        if self.height
            .checked_mul(self.width)
            .map(|n_squares| n_squares > MAX_SQUARES)
            .unwrap_or(true)
        {
            return Err(ConfigError::GridTooLarge(self.height, self.width));
        }

        if self.words.is_empty() {
            return Err(ConfigError::NoWords);
        }

        for (word_num, word) in self.words.iter().enumerate() {
            if placement::normalize_word(word, self.language).is_empty() {
                return Err(ConfigError::EmptyWord(word_num + 1));
            }
        }

        Ok(())
    }

    pub fn from_json(s: &str) -> Result<PuzzleConfig, ConfigError> {
        let config = serde_json::from_str::<PuzzleConfig>(s)?;

        config.validate()?;

        Ok(config)
    }

    /// Loads a config file. Files ending with “.json” are read as
    /// JSON and anything else is read as the text format.
    pub fn load(filename: &Path) -> Result<PuzzleConfig, ConfigError> {
        let source = std::fs::read_to_string(filename)?;

        let is_json = filename
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            PuzzleConfig::from_json(&source)
        } else {
            source.parse()
        }
    }
}

impl FromStr for PuzzleConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<PuzzleConfig, ConfigError> {
        let mut lines = s.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty());

        let (Some(size), Some(language), Some(show_hint)) =
            (lines.next(), lines.next(), lines.next())
        else {
            return Err(ConfigError::NotEnoughLines);
        };

        let (height, width) = parse_size(size)?;
        let language = language.parse::<Language>()?;
        let show_hint = parse_hint_flag(show_hint)?;
        let words = lines.map(str::to_string).collect::<Vec<_>>();

        if words.is_empty() {
            return Err(ConfigError::NotEnoughLines);
        }

        let config = PuzzleConfig {
            height,
            width,
            language,
            show_hint,
            words,
        };

        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse_error(s: &str) -> String {
        s.parse::<PuzzleConfig>().unwrap_err().to_string()
    }

    #[test]
    fn parse() {
        let config = "20x15\n\
                      TR\n\
                      Yes\n\
                      elma\n\
                      \n  \
                      dut ağacı  \n"
            .parse::<PuzzleConfig>()
            .unwrap();

        assert_eq!(
            config,
            PuzzleConfig {
                height: 20,
                width: 15,
                language: Language::Turkish,
                show_hint: true,
                words: vec!["elma".to_string(), "dut ağacı".to_string()],
            },
        );
    }

    #[test]
    fn not_enough_lines() {
        assert!(matches!(
            "5x5\nEN\nNo".parse::<PuzzleConfig>(),
            Err(ConfigError::NotEnoughLines),
        ));
        assert!(matches!(
            "".parse::<PuzzleConfig>(),
            Err(ConfigError::NotEnoughLines),
        ));
    }

    #[test]
    fn bad_size() {
        assert_eq!(
            parse_error("5*5\nEN\nNo\ncat"),
            "invalid size “5*5” (expected HEIGHTxWIDTH, eg 20x20)",
        );
        assert!(matches!(
            "5x\nEN\nNo\ncat".parse::<PuzzleConfig>(),
            Err(ConfigError::InvalidSize(_)),
        ));
        assert!(matches!(
            "-3x5\nEN\nNo\ncat".parse::<PuzzleConfig>(),
            Err(ConfigError::InvalidSize(_)),
        ));
        assert!(matches!(
            "0x5\nEN\nNo\ncat".parse::<PuzzleConfig>(),
            Err(ConfigError::ZeroDimension),
        ));
        assert_eq!(parse_size("7 x 9").unwrap(), (7, 9));
    }

    #[test]
    fn oversized_grid() {
        assert!(matches!(
            "18446744073709551615x2\nEN\nNo\nCAT".parse::<PuzzleConfig>(),
            Err(ConfigError::GridTooLarge(usize::MAX, 2)),
        ));
        assert_eq!(
            parse_error("2000x1000\nEN\nNo\nCAT"),
            "a 2000×1000 grid is too big (the limit is 1048576 squares)",
        );
        assert!("1024x1024\nEN\nNo\nCAT".parse::<PuzzleConfig>().is_ok());
    }

    #[test]
    fn bad_language() {
        assert_eq!(
            parse_error("5x5\nEO\nNo\ncat"),
            "unsupported language “EO”",
        );
    }

    #[test]
    fn bad_hint_flag() {
        assert_eq!(
            parse_error("5x5\nEN\nyes\ncat"),
            "invalid value “yes” for showing hints (expected Yes or No)",
        );
    }

    #[test]
    fn json() {
        let config = PuzzleConfig::from_json(
            r#"{
                "height": 5,
                "width": 6,
                "language": "EN",
                "show_hint": false,
                "words": ["CAT", "DOG"]
            }"#
        ).unwrap();

        assert_eq!(config.height, 5);
        assert_eq!(config.width, 6);
        assert_eq!(config.language, Language::English);
        assert!(!config.show_hint);
        assert_eq!(config.words, &["CAT", "DOG"]);

        assert!(matches!(
            PuzzleConfig::from_json(
                r#"{"height": 5, "width": 6, "language": "XX",
                    "show_hint": false, "words": ["CAT"]}"#
            ),
            Err(ConfigError::Json(_)),
        ));
        assert!(matches!(
            PuzzleConfig::from_json(
                r#"{"height": 5, "width": 6, "language": "EN",
                    "show_hint": true, "words": []}"#
            ),
            Err(ConfigError::NoWords),
        ));
    }

    #[test]
    fn word_without_letters() {
        let config = PuzzleConfig {
            height: 4,
            width: 4,
            language: Language::English,
            show_hint: false,
            words: vec!["ok".to_string(), "   ".to_string()],
        };

        assert_eq!(config.validate().unwrap_err().to_string(), "word 2 has no letters");
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            PuzzleConfig::load(Path::new("/nonexistent/puzzle.txt")),
            Err(ConfigError::Io(_)),
        ));
    }
}
