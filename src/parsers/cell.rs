use crate::{
    parsed_types::Cell,
    parsers::{ParseResult, Span},
};
use nom::{character::complete::anychar, combinator::map_opt};

/// Parses a single cell token.
///
/// ## Example
/// ```
/// # use bloxorz_search::parsed_types::Cell;
/// # use bloxorz_search::parsers::{parse_cell, preamble::*};
/// assert_eq!(parse_cell("W").unwrap_value(), Cell::Fragile);
/// assert!(parse_cell("Q").is_err());
/// ```
pub fn parse_cell<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Cell> {
    map_opt(anychar, Cell::from_char)(input.into())
}

impl crate::parsers::Parser for Cell {
    type Item = Cell;

    /// Parses a cell.
    ///
    /// ## See also
    /// See [`parse_cell`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_cell(input)
    }
}
