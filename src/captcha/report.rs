use super::*;
use std::io::{Read, Write};
use tracing::{debug, warn};

pub const ADJACENT_EXAMPLES: &[&str] = &["1122", "1111", "1234", "91212129"];

pub const HALF_OFFSET_EXAMPLES: &[&str] = &["1212", "1122", "123425", "123123", "12131415"];

/// A fixed input together with the sum it is reported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Example {
    pub method: Method,
    pub input: &'static str,
}

impl Example {
    pub fn new(method: Method, input: &'static str) -> Example {
        Example { method, input }
    }
}

/// Every fixed example in print order: adjacent sums first, then half-offset.
pub fn examples() -> Vec<Example> {
    ADJACENT_EXAMPLES
        .iter()
        .map(|&input| Example::new(Method::Adjacent, input))
        .chain(
            HALF_OFFSET_EXAMPLES
                .iter()
                .map(|&input| Example::new(Method::HalfOffset, input)),
        )
        .collect()
}

/// Writes one bare result line per example.
pub fn report<W: Write>(out: &mut W, examples: &[Example]) -> Result<(), Error> {
    for example in examples {
        let total = example.method.solve(example.input)?;
        debug!(method = ?example.method, input = example.input, total, "example");
        writeln!(out, "{}", total).map_err(Error::Io)?;
    }
    Ok(())
}

fn label(method: Method) -> &'static str {
    match method {
        Method::Adjacent => "a",
        Method::HalfOffset => "b",
    }
}

/// Prints the fixed examples, then both sums of whatever `input` holds once
/// surrounding whitespace is trimmed. Bytes that are not UTF-8 are read as
/// U+FFFD and summed like any other character.
pub fn run<R: Read, W: Write>(mut input: R, mut out: W) -> Result<(), Error> {
    report(&mut out, &examples())?;

    let mut buf = Vec::new();
    input.read_to_end(&mut buf).map_err(Error::Io)?;
    let text = String::from_utf8_lossy(&buf);
    let digits = parser::parse(text.trim()).map_err(Error::Parse)?;
    debug!(len = digits.len(), "read digits");
    let stray = digits.out_of_range();
    if stray > 0 {
        warn!(count = stray, "input contains non-digit characters; summing them anyway");
    }

    for &method in &[Method::Adjacent, Method::HalfOffset] {
        let total = method.apply(&digits)?;
        writeln!(out, "{}: {}", label(method), total).map_err(Error::Io)?;
    }
    out.flush().map_err(Error::Io)
}
