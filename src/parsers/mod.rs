mod board;
mod cell;
mod test_helpers;
mod utilities;

#[cfg(test)]
pub(crate) use test_helpers::Match;
pub use test_helpers::UnwrapValue;

pub trait Parser {
    type Item;

    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item>;

    fn parse_span(input: Span) -> ParseResult<Self::Item> {
        Self::parse(input)
    }

    /// Parse a string slice into the desired type. Discards any remaining
    /// input.
    fn from_str(input: &str) -> Result<Self::Item, nom::Err<ParseError>> {
        let (_, value) = Self::parse(input)?;
        Ok(value)
    }
}

pub type Span<'a> = nom_locate::LocatedSpan<&'a str>;

pub type ParseError<'a> = nom_greedyerror::GreedyError<Span<'a>, nom::error::ErrorKind>;

pub type ParseResult<'a, T, E = ParseError<'a>> = nom::IResult<Span<'a>, T, E>;

/// Line and column of the furthest point the parser reached before failing.
pub fn error_location(error: &nom::Err<ParseError>) -> Option<(u32, usize)> {
    match error {
        nom::Err::Error(e) | nom::Err::Failure(e) => e
            .errors
            .iter()
            .map(|(span, _)| span)
            .max_by_key(|span| span.location_offset())
            .map(|span| (span.location_line(), span.get_utf8_column())),
        nom::Err::Incomplete(_) => None,
    }
}

/// Re-exports commonly used types.
pub mod preamble {
    pub use crate::parsers::test_helpers::UnwrapValue;
    pub use crate::parsers::Parser;
    pub use crate::parsers::{ParseError, ParseResult, Span};
}

// Parsers
pub use board::{parse_board, parse_board_complete, parse_dimensions, parse_row};
pub use cell::parse_cell;
pub use utilities::{leading_whitespace, space_separated_list1};
