pub mod parser;
pub mod sum;
pub mod report;

pub use self::sum::{sum_adjacent, sum_half_offset};
pub use self::report::{run, Example, ADJACENT_EXAMPLES, HALF_OFFSET_EXAMPLES};

use std::{error, fmt, io};

#[derive(Debug)]
pub enum Error {
    Parse(parser::Error),
    EmptySequence,
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Parse(ref e) => write!(f, "{}", e),
            Error::EmptySequence => write!(f, "empty input: no digits to sum"),
            Error::Io(ref e) => write!(f, "{}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Io(ref e) => Some(e),
            _ => None,
        }
    }
}

pub fn solve_adjacent(s: &str) -> Result<i64, Error> {
    let digits = parser::parse(s).map_err(Error::Parse)?;
    sum_adjacent(&digits)
}

pub fn solve_half_offset(s: &str) -> Result<i64, Error> {
    let digits = parser::parse(s).map_err(Error::Parse)?;
    sum_half_offset(&digits)
}

/// A circular run of digits, as read from the input.
///
/// Values are not range-checked: a character outside `'0'..='9'` keeps its
/// offset from `'0'`, so rendering the sequence back gives the original text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digits(Vec<i64>);

impl Digits {
    pub fn new(values: Vec<i64>) -> Digits {
        Digits(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    /// Number of values that did not come from a decimal digit.
    pub fn out_of_range(&self) -> usize {
        self.0.iter().filter(|d| !(0..=9).contains(*d)).count()
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for d in &self.0 {
            let c = u32::try_from(d + '0' as i64)
                .ok()
                .and_then(char::from_u32)
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// The two ways of summing a circular digit sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Adjacent,
    HalfOffset,
}

impl Method {
    pub fn apply(self, digits: &Digits) -> Result<i64, Error> {
        match self {
            Method::Adjacent => sum_adjacent(digits),
            Method::HalfOffset => sum_half_offset(digits),
        }
    }

    pub fn solve(self, s: &str) -> Result<i64, Error> {
        match self {
            Method::Adjacent => solve_adjacent(s),
            Method::HalfOffset => solve_half_offset(s),
        }
    }
}
