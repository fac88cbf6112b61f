use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// A single word of a command line: a letter head followed by its raw value.
/// The value may be empty ("X" on its own) and is not converted here.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Word<'a> {
    letter: char,
    value: &'a str,
}

/// The words of one command line, comment stripped, still borrowing from the
/// input. Nothing is converted until a typed lookup asks for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine<'a>(Vec<Word<'a>>);

/// A word was present but its value did not read as the requested numeric
/// type. Absent words never produce this; lookups fall back instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadWordValue {
    pub letter: char,
    pub value: String,
}

impl Display for BadWordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "word {} has non-numeric value {:?}",
            self.letter, self.value
        )
    }
}
impl std::error::Error for BadWordValue {}

/// Splits one raw line into words: everything from the first ';' onward is a
/// comment, the rest is whitespace-separated tokens whose first character is
/// the word's letter. Scanning itself never fails.
pub fn parse_line(input: &str) -> ParsedLine<'_> {
    let body = input.split(';').next().unwrap_or("");
    ParsedLine(
        body.split_whitespace()
            .map(|token| {
                let mut chars = token.chars();
                Word {
                    letter: chars.next().unwrap(),
                    value: chars.as_str(),
                }
            })
            .collect(),
    )
}

impl<'a> ParsedLine<'a> {
    /// Raw lookup. When a malformed line repeats a letter, the later
    /// occurrence wins.
    pub fn get(&self, letter: char) -> Option<&'a str> {
        self.0
            .iter()
            .rev()
            .find(|word| word.letter == letter)
            .map(|word| word.value)
    }

    /// Numeric lookup: absent letters and empty values read as `None`; a
    /// present non-empty value that fails to parse is an error, not `None`.
    pub fn get_f64(&self, letter: char) -> Result<Option<f64>, BadWordValue> {
        self.typed(letter)
    }

    pub fn get_i64(&self, letter: char) -> Result<Option<i64>, BadWordValue> {
        self.typed(letter)
    }

    /// Numeric lookup with a fallback. The fallback covers absence only;
    /// malformed presence still errors.
    pub fn get_f64_or(&self, letter: char, fallback: f64) -> Result<f64, BadWordValue> {
        Ok(self.get_f64(letter)?.unwrap_or(fallback))
    }

    fn typed<T: FromStr>(&self, letter: char) -> Result<Option<T>, BadWordValue> {
        match self.get(letter) {
            None | Some("") => Ok(None),
            Some(value) => value.parse().map(Some).map_err(|_| BadWordValue {
                letter,
                value: value.to_string(),
            }),
        }
    }
}
