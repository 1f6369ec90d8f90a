use crate::parsers::ParseResult;

/// Extracts the parsed value of a successful parse.
pub trait UnwrapValue<T> {
    fn unwrap_value(self) -> T;
}

impl<'a, T> UnwrapValue<T> for ParseResult<'a, T> {
    fn unwrap_value(self) -> T {
        match self {
            Ok((_, value)) => value,
            Err(e) => panic!("parse failed: {:?}", e),
        }
    }
}

#[cfg(test)]
pub(crate) trait Match<T> {
    /// The parse succeeded with `value`, remaining input is ignored.
    fn is_value(&self, value: T) -> bool;

    /// The parse succeeded with `value` and consumed all input.
    fn is_exactly(&self, value: T) -> bool;
}

#[cfg(test)]
impl<'a, T: PartialEq> Match<T> for ParseResult<'a, T> {
    fn is_value(&self, value: T) -> bool {
        matches!(self, Ok((_, parsed)) if *parsed == value)
    }

    fn is_exactly(&self, value: T) -> bool {
        matches!(self, Ok((remainder, parsed)) if remainder.fragment().is_empty() && *parsed == value)
    }
}
