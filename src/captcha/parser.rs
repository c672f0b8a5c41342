use super::*;
use nom::character::complete::anychar;
use nom::combinator::map;
use nom::error::ErrorKind;
use nom::multi::many0;
use nom::{IResult, Needed};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    RemainingInput(String, Digits),
    Nom(ErrorKind),
    NomIncomplete(Needed),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::RemainingInput(ref rest, _) => write!(f, "unparsed input {:?}", rest),
            Error::Nom(kind) => write!(f, "parser failed: {:?}", kind),
            Error::NomIncomplete(needed) => write!(f, "incomplete input: {:?}", needed),
        }
    }
}

/// Any character is accepted; its value is its offset from `'0'`.
pub fn digit(i: &str) -> IResult<&str, i64> {
    map(anychar, |c| c as i64 - '0' as i64)(i)
}

pub fn digits(i: &str) -> IResult<&str, Vec<i64>> {
    many0(digit)(i)
}

/// Fails only if nom stops short of the end, which `many0(anychar)` never does
/// on a `&str`.
pub fn parse(s: &str) -> Result<Digits, Error> {
    match digits(s) {
        Ok(("", values)) => Ok(Digits::new(values)),
        Ok((rest, values)) => Err(Error::RemainingInput(rest.to_string(), Digits::new(values))),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(Error::Nom(e.code)),
        Err(nom::Err::Incomplete(n)) => Err(Error::NomIncomplete(n)),
    }
}
