//! Provides parsers for board files.
//!
//! A board file starts with a free text header line, followed by a line with
//! the number of columns and rows, followed by one line per row with one
//! whitespace separated cell token per column:
//!
//! ```text
//! BLOX 1
//! 5 3
//! X X X O O
//! S X G X O
//! W W W W X
//! ```

use crate::{
    parsed_types::{BoardDescription, Cell},
    parsers::{leading_whitespace, parse_cell, space_separated_list1, ParseResult, Span},
};
use nom::{
    bytes::complete::is_not,
    character::complete::{digit1, multispace0, space1},
    combinator::{all_consuming, map, map_opt},
    multi::many1,
    sequence::{separated_pair, terminated, tuple},
};

fn parse_header(input: Span) -> ParseResult<String> {
    map(is_not("\r\n"), |header: Span| header.fragment().trim().to_string())(input)
}

fn parse_size(input: Span) -> ParseResult<usize> {
    map_opt(digit1, |digits: Span| digits.fragment().parse::<usize>().ok())(input)
}

/// Parses the `cols rows` line of a board file.
///
/// ## Example
/// ```
/// # use bloxorz_search::parsers::{parse_dimensions, preamble::*};
/// assert_eq!(parse_dimensions("5 3").unwrap_value(), (5, 3));
/// ```
pub fn parse_dimensions<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, (usize, usize)> {
    separated_pair(parse_size, space1, parse_size)(input.into())
}

/// Parses one row of cell tokens.
pub fn parse_row<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Vec<Cell>> {
    space_separated_list1(parse_cell)(input.into())
}

/// Parses a board file. Anything after the last row is left unparsed.
///
/// ## Example
/// ```
/// # use bloxorz_search::parsed_types::*;
/// # use bloxorz_search::parsers::{parse_board, preamble::*};
/// let input = "BLOX 1\n2 1\nS G\n";
/// let board = parse_board(input).unwrap_value();
/// assert_eq!(board.header(), "BLOX 1");
/// assert_eq!((board.width(), board.height()), (2, 1));
/// assert_eq!(board.rows(), &[vec![Cell::Start, Cell::Goal]]);
/// ```
pub fn parse_board<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, BoardDescription> {
    map(
        tuple((
            leading_whitespace(parse_header),
            leading_whitespace(parse_dimensions),
            many1(leading_whitespace(parse_row)),
        )),
        |(header, (width, height), rows)| BoardDescription::new(header, width, height, rows),
    )(input.into())
}

/// Parses a board file that must contain nothing but whitespace after the
/// last row.
pub fn parse_board_complete<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, BoardDescription> {
    all_consuming(terminated(parse_board, multispace0))(input.into())
}

impl crate::parsers::Parser for BoardDescription {
    type Item = BoardDescription;

    /// Parses a board file.
    ///
    /// ## See also
    /// See [`parse_board`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_board(input)
    }
}
