//! Binding expression parser.
//!
//! Grammar:
//!
//! ```text
//! expression := criterion? (';' 'else' ident)?
//! criterion  := string | '[' (string (',' string)* ','?)? ']'
//! ```
//!
//! Strings are single- or double-quoted.

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;
use std::vec;

use crate::security::predicate::Criterion;

/// Error type for binding expression parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Unexpected end of input
    UnexpectedEof,
    /// Unexpected character
    UnexpectedChar(char),
    /// Unexpected token
    UnexpectedToken(String),
    /// Unclosed list bracket
    UnclosedBracket,
    /// Unclosed string literal
    UnclosedString,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedEof => write!(f, "unexpected end of expression"),
            ParseError::UnexpectedChar(c) => write!(f, "unexpected character: '{}'", c),
            ParseError::UnexpectedToken(t) => write!(f, "unexpected token: '{}'", t),
            ParseError::UnclosedBracket => write!(f, "unclosed list bracket"),
            ParseError::UnclosedString => write!(f, "unclosed string literal"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Token types for the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    /// String literal
    Str(String),
    /// Identifier (the `else` keyword, fragment references)
    Ident(String),
    /// Left bracket
    LBracket,
    /// Right bracket
    RBracket,
    /// Comma
    Comma,
    /// Semicolon
    Semi,
}

fn describe(token: &Token) -> String {
    match token {
        Token::Str(s) => format!("'{}'", s),
        Token::Ident(s) => s.clone(),
        Token::LBracket => "[".to_string(),
        Token::RBracket => "]".to_string(),
        Token::Comma => ",".to_string(),
        Token::Semi => ";".to_string(),
    }
}

/// A parsed binding expression: the criterion plus an optional fallback
/// fragment reference.
///
/// # Example
/// ```
/// use secview_core::security::binding::BindingExpression;
/// use secview_core::security::predicate::Criterion;
///
/// let expr = BindingExpression::parse("['ADMIN', 'AUDIT']; else denied").unwrap();
/// assert_eq!(expr.criterion(), &Criterion::many(vec!["ADMIN", "AUDIT"]));
/// assert_eq!(expr.else_ref(), Some("denied"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingExpression {
    criterion: Criterion,
    else_ref: Option<String>,
}

impl BindingExpression {
    /// Parses a binding expression string.
    ///
    /// Empty (or all-whitespace) input is valid and yields no criterion and
    /// no fallback reference.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut tokens = tokenize(input)?.into_iter().peekable();

        let criterion = parse_criterion(&mut tokens)?;
        let else_ref = parse_else(&mut tokens)?;

        if let Some(token) = tokens.next() {
            return Err(ParseError::UnexpectedToken(describe(&token)));
        }

        Ok(BindingExpression {
            criterion,
            else_ref,
        })
    }

    /// The parsed criterion.
    pub fn criterion(&self) -> &Criterion {
        &self.criterion
    }

    /// The fallback fragment reference, if one was given.
    pub fn else_ref(&self) -> Option<&str> {
        self.else_ref.as_deref()
    }

    /// Consumes the expression into its parts.
    pub fn into_parts(self) -> (Criterion, Option<String>) {
        (self.criterion, self.else_ref)
    }
}

type Tokens = Peekable<vec::IntoIter<Token>>;

fn parse_criterion(tokens: &mut Tokens) -> Result<Criterion, ParseError> {
    match tokens.peek().cloned() {
        Some(Token::Str(value)) => {
            tokens.next();
            Ok(Criterion::One(value))
        }
        Some(Token::LBracket) => {
            tokens.next();
            parse_list(tokens)
        }
        _ => Ok(Criterion::None),
    }
}

fn parse_list(tokens: &mut Tokens) -> Result<Criterion, ParseError> {
    let mut values = Vec::new();
    loop {
        match tokens.next() {
            Some(Token::RBracket) => return Ok(Criterion::Many(values)),
            Some(Token::Str(value)) => {
                values.push(value);
                match tokens.next() {
                    Some(Token::Comma) => continue,
                    Some(Token::RBracket) => return Ok(Criterion::Many(values)),
                    Some(token) => return Err(ParseError::UnexpectedToken(describe(&token))),
                    None => return Err(ParseError::UnclosedBracket),
                }
            }
            Some(token) => return Err(ParseError::UnexpectedToken(describe(&token))),
            None => return Err(ParseError::UnclosedBracket),
        }
    }
}

fn parse_else(tokens: &mut Tokens) -> Result<Option<String>, ParseError> {
    match tokens.peek() {
        Some(Token::Semi) => {
            tokens.next();
        }
        _ => return Ok(None),
    }

    match tokens.next() {
        Some(Token::Ident(keyword)) if keyword == "else" => {}
        Some(token) => return Err(ParseError::UnexpectedToken(describe(&token))),
        None => return Err(ParseError::UnexpectedEof),
    }

    match tokens.next() {
        Some(Token::Ident(name)) => Ok(Some(name)),
        Some(token) => Err(ParseError::UnexpectedToken(describe(&token))),
        None => Err(ParseError::UnexpectedEof),
    }
}

// =============================================================================
// Lexer
// =============================================================================

fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut chars = input.chars().peekable();
    let mut tokens = Vec::new();

    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '\'' | '"' => tokens.push(Token::Str(lex_string(&mut chars, c)?)),
            '[' => {
                chars.next();
                tokens.push(Token::LBracket);
            }
            ']' => {
                chars.next();
                tokens.push(Token::RBracket);
            }
            ',' => {
                chars.next();
                tokens.push(Token::Comma);
            }
            ';' => {
                chars.next();
                tokens.push(Token::Semi);
            }
            c if c.is_alphanumeric() || c == '_' => {
                tokens.push(Token::Ident(lex_ident(&mut chars)));
            }
            c => return Err(ParseError::UnexpectedChar(c)),
        }
    }

    Ok(tokens)
}

fn lex_string(chars: &mut Peekable<Chars<'_>>, quote: char) -> Result<String, ParseError> {
    chars.next(); // opening quote
    let mut value = String::new();
    loop {
        match chars.next() {
            Some(c) if c == quote => return Ok(value),
            Some(c) => value.push(c),
            None => return Err(ParseError::UnclosedString),
        }
    }
}

fn lex_ident(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut ident = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_alphanumeric() || c == '_' {
            ident.push(c);
            chars.next();
        } else {
            break;
        }
    }
    ident
}
