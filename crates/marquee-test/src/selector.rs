//! Selector parsing for widget queries.
//!
//! Supports:
//! - `"DataTable"` - by brick name
//! - `"[data-testid='users']"` - by test ID
//! - `"[aria-label='Email']"` - by accessible name
//! - `"[role='table']"` - by accessible role

use marquee_core::{AccessibleRole, Widget};
use thiserror::Error;

/// Parsed selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Match by brick name
    Type(String),
    /// Match by test ID
    TestId(String),
    /// Match by accessible name
    Label(String),
    /// Match by accessible role
    Role(String),
}

impl Selector {
    /// Parse a selector string.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        SelectorParser::new(input).parse()
    }

    /// Check if this selector matches a widget.
    #[must_use]
    pub fn matches(&self, widget: &dyn Widget) -> bool {
        match self {
            Self::Type(name) => widget.brick_name() == name,
            Self::TestId(id) => Widget::test_id(widget) == Some(id.as_str()),
            Self::Label(label) => widget.accessible_name() == Some(label.as_str()),
            Self::Role(role) => role_name(widget.accessible_role()) == role,
        }
    }
}

/// ARIA role name of an accessible role.
#[must_use]
pub const fn role_name(role: AccessibleRole) -> &'static str {
    match role {
        AccessibleRole::Generic => "generic",
        AccessibleRole::Button => "button",
        AccessibleRole::Checkbox => "checkbox",
        AccessibleRole::TextInput => "textbox",
        AccessibleRole::Table => "table",
        AccessibleRole::Status => "status",
    }
}

/// Selector parser.
#[derive(Debug)]
pub struct SelectorParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> SelectorParser<'a> {
    /// Create a new parser.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Parse the selector.
    pub fn parse(&mut self) -> Result<Selector, SelectorError> {
        self.skip_whitespace();
        match self.peek_char() {
            None => Err(SelectorError::Empty),
            Some('[') => self.parse_attribute(),
            Some(c) if c.is_alphabetic() => self.parse_type(),
            Some(c) => Err(SelectorError::UnexpectedChar(c)),
        }
    }

    fn parse_type(&mut self) -> Result<Selector, SelectorError> {
        let start = self.pos;
        while self
            .peek_char()
            .is_some_and(|c| c.is_alphanumeric() || c == '_')
        {
            self.advance();
        }
        Ok(Selector::Type(self.input[start..self.pos].to_string()))
    }

    fn parse_attribute(&mut self) -> Result<Selector, SelectorError> {
        self.advance(); // '['
        let name = self.read_until(&['=']);
        if name.is_empty() || self.peek_char() != Some('=') {
            return Err(SelectorError::InvalidAttribute);
        }
        self.advance(); // '='

        let quote = self.peek_char().filter(|c| *c == '\'' || *c == '"');
        if quote.is_some() {
            self.advance();
        }
        let value = self.read_until(&['\'', '"', ']']);
        if let Some(q) = quote {
            if self.peek_char() != Some(q) {
                return Err(SelectorError::UnclosedAttribute);
            }
            self.advance();
        }
        if self.peek_char() != Some(']') {
            return Err(SelectorError::UnclosedAttribute);
        }
        self.advance();

        match name.as_str() {
            "data-testid" => Ok(Selector::TestId(value)),
            "aria-label" => Ok(Selector::Label(value)),
            "role" => Ok(Selector::Role(value)),
            _ => Err(SelectorError::UnknownAttribute(name)),
        }
    }

    fn read_until(&mut self, stops: &[char]) -> String {
        let start = self.pos;
        while self.peek_char().is_some_and(|c| !stops.contains(&c)) {
            self.advance();
        }
        self.input[start..self.pos].to_string()
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }
}

/// Selector parsing error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// Empty selector
    #[error("empty selector")]
    Empty,
    /// Unexpected character
    #[error("unexpected character: '{0}'")]
    UnexpectedChar(char),
    /// Invalid attribute syntax
    #[error("invalid attribute syntax")]
    InvalidAttribute,
    /// Unclosed attribute bracket or quote
    #[error("unclosed attribute bracket")]
    UnclosedAttribute,
    /// Attribute the harness cannot match on
    #[error("unsupported attribute: {0}")]
    UnknownAttribute(String),
}
