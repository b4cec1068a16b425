//! Approximate Latin rendering of Cyrillic output.
//!
//! Swaps only the Cyrillic letters that have a well-known Latin look-alike
//! and leaves everything else alone. Used on translations into Turkish,
//! which the service sometimes returns in Cyrillic script. Not a phonetic
//! or standards-based transliteration scheme.

pub fn to_latin_approx(text: &str) -> String {
    text.chars().map(latin_lookalike).collect()
}

fn latin_lookalike(c: char) -> char {
    match c {
        'А' => 'A',
        'В' => 'B',
        'Е' => 'E',
        'К' => 'K',
        'М' => 'M',
        'Н' => 'N',
        'О' => 'O',
        'Р' => 'R',
        'С' => 'S',
        'Т' => 'T',
        'У' => 'U',
        'а' => 'a',
        'в' => 'v',
        'е' => 'e',
        'к' => 'k',
        'м' => 'm',
        'н' => 'n',
        'о' => 'o',
        'р' => 'r',
        'с' => 's',
        'т' => 't',
        'у' => 'u',
        other => other,
    }
}
