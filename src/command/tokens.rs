//! Argument tokenizer
//!
//! The token stream is consumed strictly left to right. Option tokens are
//! only recognized at the front of the stream; once a positional token has
//! been taken, every remaining token is positional.

/// Prefix marking an option token
pub const OPTION_PREFIX: &str = "--";

/// A single `--name[=value]` token with the prefix removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedOption<'a> {
    pub name: &'a str,
    pub value: Option<&'a str>,
}

impl<'a> ParsedOption<'a> {
    /// Splits `name` or `name=value` on the first `=`
    pub fn parse(raw: &'a str) -> Self {
        match raw.split_once('=') {
            Some((name, value)) => Self {
                name,
                value: Some(value),
            },
            None => Self {
                name: raw,
                value: None,
            },
        }
    }
}

/// Remaining arguments at one point of resolution
#[derive(Debug, Clone, Copy)]
pub struct TokenStream<'a> {
    tokens: &'a [String],
}

impl<'a> TokenStream<'a> {
    pub fn new(tokens: &'a [String]) -> Self {
        Self { tokens }
    }

    /// Takes the front token if it is an option
    pub fn next_option(&mut self) -> Option<ParsedOption<'a>> {
        let (first, rest) = self.tokens.split_first()?;
        let raw = first.strip_prefix(OPTION_PREFIX)?;
        self.tokens = rest;
        Some(ParsedOption::parse(raw))
    }

    /// Takes the front token as a positional
    pub fn next_positional(&mut self) -> Option<&'a str> {
        let (first, rest) = self.tokens.split_first()?;
        self.tokens = rest;
        Some(first.as_str())
    }

    pub fn remaining(&self) -> &'a [String] {
        self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
