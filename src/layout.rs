// This file is part of Fraza.
//
// Copyright (c) 2025  The Fraza authors
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
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! ЙЦУКЕН to QWERTY substitution: the characters you get when Russian text
//! is typed with the keyboard switched to the US layout.

use std::collections::HashMap;
use std::sync::OnceLock;

/// The 33 Russian letters in both cases and the US-layout key each one sits on.
pub const LAYOUT_TABLE: [(char, char); 66] = [
    ('а', 'f'),
    ('б', ','),
    ('в', 'd'),
    ('г', 'u'),
    ('д', 'l'),
    ('е', 't'),
    ('ё', '`'),
    ('ж', ';'),
    ('з', 'p'),
    ('и', 'b'),
    ('й', 'q'),
    ('к', 'r'),
    ('л', 'k'),
    ('м', 'v'),
    ('н', 'y'),
    ('о', 'j'),
    ('п', 'g'),
    ('р', 'h'),
    ('с', 'c'),
    ('т', 'n'),
    ('у', 'e'),
    ('ф', 'a'),
    ('х', '['),
    ('ц', 'w'),
    ('ч', 'x'),
    ('ш', 'i'),
    ('щ', 'o'),
    ('ъ', ']'),
    ('ы', 's'),
    ('ь', 'm'),
    ('э', '\''),
    ('ю', '.'),
    ('я', 'z'),
    ('А', 'F'),
    ('Б', '<'),
    ('В', 'D'),
    ('Г', 'U'),
    ('Д', 'L'),
    ('Е', 'T'),
    ('Ё', '~'),
    ('Ж', ':'),
    ('З', 'P'),
    ('И', 'B'),
    ('Й', 'Q'),
    ('К', 'R'),
    ('Л', 'K'),
    ('М', 'V'),
    ('Н', 'Y'),
    ('О', 'J'),
    ('П', 'G'),
    ('Р', 'H'),
    ('С', 'C'),
    ('Т', 'N'),
    ('У', 'E'),
    ('Ф', 'A'),
    ('Х', '{'),
    ('Ц', 'W'),
    ('Ч', 'X'),
    ('Ш', 'I'),
    ('Щ', 'O'),
    ('Ъ', '}'),
    ('Ы', 'S'),
    ('Ь', 'M'),
    ('Э', '"'),
    ('Ю', '>'),
    ('Я', 'Z'),
];

static LAYOUT: OnceLock<HashMap<char, char>> = OnceLock::new();

fn layout() -> &'static HashMap<char, char> {
    LAYOUT.get_or_init(|| LAYOUT_TABLE.iter().copied().collect())
}

/// Maps a single character; anything outside the table comes back as is.
pub fn transform_char(ch: char) -> char {
    layout().get(&ch).copied().unwrap_or(ch)
}

pub fn transform(text: &str) -> String {
    text.chars().map(transform_char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_size() {
        assert_eq!(layout().len(), 66, "Layout table contains duplicate keys");

        let targets: HashSet<_> = LAYOUT_TABLE.iter().map(|(_, to)| to).collect();
        assert_eq!(targets.len(), 66, "Layout table maps two letters to one key");
    }

    #[test]
    fn test_table_covers_alphabet() {
        let lower = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";
        assert_eq!(lower.chars().count(), 33);

        for ch in lower.chars() {
            assert_ne!(transform_char(ch), ch, "Letter {} is not mapped", ch);
            for upper in ch.to_uppercase() {
                assert_ne!(transform_char(upper), upper, "Letter {} is not mapped", upper);
            }
        }
    }

    #[test]
    fn test_transform_full_alphabet() {
        assert_eq!(
            transform("абвгдеёжзийклмнопрстуфхцчшщъыьэюя"),
            "f,dult`;pbqrkvyjghcnea[wxio]sm'.z"
        );
        assert_eq!(
            transform("АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ"),
            "F<DULT~:PBQRKVYJGHCNEA{WXIO}SM\">Z"
        );
    }

    #[test]
    fn test_transform_privet() {
        assert_eq!(transform("привет"), "ghbdtn");
        assert_eq!(transform("ПРИВЕТ"), "GHBDTN");
    }

    #[test]
    fn test_transform_punctuation_keys() {
        assert_eq!(transform("бюджет"), ",.l;tn");
        assert_eq!(transform("хэъё"), "[']`");
        assert_eq!(transform("Ёж"), "~;");
        assert_eq!(transform("ЭХЪБЮЖ"), "\"{}<>:");
    }

    #[test]
    fn test_unmapped_passthrough() {
        assert_eq!(transform("42 abc-XYZ!"), "42 abc-XYZ!");
        assert_eq!(transform(""), "");
        assert_eq!(transform("17мир"), "17vbh");
    }

    #[test]
    fn test_not_an_involution() {
        let once = transform("дом");
        assert_eq!(once, "ljv");
        assert_eq!(transform(&once), once);
    }
}
