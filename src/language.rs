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
use std::str::FromStr;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "EN")]
    English,
    #[serde(rename = "TR")]
    Turkish,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language “{0}”")]
pub struct UnknownLanguage(pub String);

static ENGLISH_ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

static TURKISH_ALPHABET: [char; 29] = [
    'A', 'B', 'C', 'Ç', 'D', 'E', 'F', 'G', 'Ğ', 'H', 'I', 'İ', 'J', 'K',
    'L', 'M', 'N', 'O', 'Ö', 'P', 'R', 'S', 'Ş', 'T', 'U', 'Ü', 'V', 'Y',
    'Z',
];

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Turkish];

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::Turkish => "TR",
        }
    }

    /// The uppercase letters used to fill the spaces that no word
    /// covers.
    pub fn alphabet(self) -> &'static [char] {
        match self {
            Language::English => &ENGLISH_ALPHABET,
            Language::Turkish => &TURKISH_ALPHABET,
        }
    }

    fn push_uppercase(self, ch: char, buf: &mut String) {
        match (self, ch) {
            // Turkish keeps the dot when changing the case of I
            (Language::Turkish, 'i') => buf.push('İ'),
            (Language::Turkish, 'ı') => buf.push('I'),
            _ => buf.extend(ch.to_uppercase()),
        }
    }

    /// Uppercases the text using the casing rules of the language.
    /// The result can have more characters than the source, eg “ß”
    /// becomes “SS”.
    pub fn to_uppercase(self, text: &str) -> String {
        let mut buf = String::with_capacity(text.len());

        for ch in text.chars() {
            self.push_uppercase(ch, &mut buf);
        }

        buf
    }

    pub fn to_lowercase_letter(self, ch: char) -> char {
        match (self, ch) {
            (Language::Turkish, 'I') => 'ı',
            (Language::Turkish, 'İ') => 'i',
            // Only keep the first character if the lowercase version
            // has a combining character
            _ => ch.to_lowercase().next().unwrap_or(ch),
        }
    }

    /// Whether the letter is in the alphabet, in either case.
    pub fn contains_letter(self, ch: char) -> bool {
        let mut upper = String::new();
        self.push_uppercase(ch, &mut upper);

        let mut chars = upper.chars();

        match (chars.next(), chars.next()) {
            (Some(upper), None) => self.alphabet().contains(&upper),
            _ => false,
        }
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Language, UnknownLanguage> {
        Language::ALL
            .into_iter()
            .find(|language| language.code() == s)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
