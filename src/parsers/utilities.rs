//! Utility parsers.

use crate::parsers::{ParseResult, Span};
use nom::{
    character::complete::{multispace0, space1},
    multi::separated_list1,
    sequence::preceded,
};

/// A combinator that takes a parser `inner` and produces a parser that also
/// consumes leading whitespace, line breaks included, returning the output of
/// `inner`.
pub fn leading_whitespace<'a, F, O>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, O>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    preceded(multispace0, inner)
}

/// A combinator that takes a parser `inner` and produces a parser that
/// consumes a non-empty list separated by spaces or tabs on a single line,
/// returning the outputs of `inner`.
pub fn space_separated_list1<'a, F, O>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, Vec<O>>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    separated_list1(space1, inner)
}
