//! Plain text instances: a header line `rows cols cars rides bonus steps`
//! followed by one `a b x y start end` line per ride.

use std::path::Path;

use anyhow::Context;
use thiserror::Error;

use crate::{
    parsers::parser::DatasetParser,
    problem::{
        city::City,
        position::Position,
        ride_assignment_problem::{
            ProblemError, RideAssignmentProblem, RideAssignmentProblemBuilder,
        },
    },
};

const FIELDS_PER_LINE: usize = 6;

/// Largest coordinate, time or count accepted in an instance. Keeps every
/// clock computed while assigning far away from `u64` overflow.
pub const MAX_VALUE: u64 = u32::MAX as u64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Instance is empty")]
    Empty,

    #[error("Line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: invalid integer {token:?}")]
    InvalidInteger { line: usize, token: String },

    #[error("Line {line}: {token} is larger than {max}", max = MAX_VALUE)]
    ValueTooLarge { line: usize, token: String },

    #[error("Expected {expected} rides, found {found}")]
    MissingRides { expected: usize, found: usize },

    #[error("Line {line}: unexpected content after the last ride")]
    TrailingLine { line: usize },

    #[error(transparent)]
    Problem(#[from] ProblemError),
}

pub struct HashCodeParser;

impl DatasetParser for HashCodeParser {
    fn parse<P: AsRef<Path>>(&self, file: P) -> Result<RideAssignmentProblem, anyhow::Error> {
        let file = file.as_ref();
        let content = std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?;

        parse(&content).with_context(|| format!("Failed to parse {}", file.display()))
    }
}

/// Splits a line into exactly six non-negative integers. `line` is 1-based
/// and only used for error reporting.
pub fn parse_line(text: &str, line: usize) -> Result<[u64; FIELDS_PER_LINE], ParseError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();

    if tokens.len() != FIELDS_PER_LINE {
        return Err(ParseError::FieldCount {
            line,
            expected: FIELDS_PER_LINE,
            found: tokens.len(),
        });
    }

    let mut fields = [0; FIELDS_PER_LINE];
    for (field, token) in fields.iter_mut().zip(tokens) {
        *field = parse_integer(token, line)?;
    }

    Ok(fields)
}

fn parse_integer(token: &str, line: usize) -> Result<u64, ParseError> {
    let value: u64 = token.parse().map_err(|_| ParseError::InvalidInteger {
        line,
        token: token.to_owned(),
    })?;

    if value > MAX_VALUE {
        return Err(ParseError::ValueTooLarge {
            line,
            token: token.to_owned(),
        });
    }

    Ok(value)
}

fn to_count(value: u64, line: usize) -> Result<usize, ParseError> {
    usize::try_from(value).map_err(|_| ParseError::InvalidInteger {
        line,
        token: value.to_string(),
    })
}

pub fn parse(text: &str) -> Result<RideAssignmentProblem, ParseError> {
    let mut lines = text
        .trim_end()
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l))
        .skip_while(|(_, l)| l.trim().is_empty());

    let (header_line, header) = lines.next().ok_or(ParseError::Empty)?;

    let [rows, cols, cars, rides, bonus, steps] = parse_line(header, header_line)?;
    let city = City {
        rows,
        cols,
        cars: to_count(cars, header_line)?,
        rides: to_count(rides, header_line)?,
        bonus,
        steps,
    };

    let mut builder = RideAssignmentProblemBuilder::default();
    builder.set_city(city);

    for found in 0..city.rides {
        let Some((line, text)) = lines.next() else {
            return Err(ParseError::MissingRides {
                expected: city.rides,
                found,
            });
        };

        let [a, b, x, y, start, end] = parse_line(text, line)?;
        builder.add_ride(Position::new(a, b), Position::new(x, y), start, end);
    }

    if let Some((line, _)) = lines.next() {
        return Err(ParseError::TrailingLine { line });
    }

    Ok(builder.build()?)
}
