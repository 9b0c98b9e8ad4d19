//! SPDX-style license expressions (`MIT OR Apache-2.0`,
//! `GPL-2.0-or-later WITH Classpath-exception-2.0`, ...).

use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;

use super::table::resolve_or_verbatim;

static TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[()]|[^\s()]+").expect("token pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Open,
    Close,
    And,
    Or,
    With,
    Id(&'a str),
}

fn tokenize(expression: &str) -> Vec<Token<'_>> {
    TOKEN
        .find_iter(expression)
        .map(|m| match m.as_str() {
            "(" => Token::Open,
            ")" => Token::Close,
            word if word.eq_ignore_ascii_case("and") => Token::And,
            word if word.eq_ignore_ascii_case("or") => Token::Or,
            word if word.eq_ignore_ascii_case("with") => Token::With,
            word => Token::Id(word),
        })
        .collect()
}

fn is_identifier(word: &str) -> bool {
    !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '+' | ':'))
}

/// Recursive-descent parser over
/// `or := and (OR and)*`, `and := term (AND term)*`,
/// `term := '(' or ')' | id [WITH id]`.
struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
    licenses: Vec<&'a str>,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<Token<'a>> {
        let token = self.peek();
        self.pos += 1;
        token
    }

    fn parse_or(&mut self) -> Option<()> {
        self.parse_and()?;
        while self.peek() == Some(Token::Or) {
            self.pos += 1;
            self.parse_and()?;
        }
        Some(())
    }

    fn parse_and(&mut self) -> Option<()> {
        self.parse_term()?;
        while self.peek() == Some(Token::And) {
            self.pos += 1;
            self.parse_term()?;
        }
        Some(())
    }

    fn parse_term(&mut self) -> Option<()> {
        match self.next()? {
            Token::Open => {
                self.parse_or()?;
                match self.next()? {
                    Token::Close => Some(()),
                    _ => None,
                }
            }
            Token::Id(id) if is_identifier(id) => {
                self.licenses.push(id);
                if self.peek() == Some(Token::With) {
                    self.pos += 1;
                    // The exception id modifies the license, it is not one.
                    match self.next()? {
                        Token::Id(exception) if is_identifier(exception) => Some(()),
                        _ => None,
                    }
                } else {
                    Some(())
                }
            }
            _ => None,
        }
    }
}

/// License identifiers of a well-formed expression, in order of appearance.
///
/// Returns `None` when the expression does not follow the SPDX grammar.
pub fn parse_identifiers(expression: &str) -> Option<Vec<&str>> {
    let mut parser = Parser {
        tokens: tokenize(expression),
        pos: 0,
        licenses: Vec::new(),
    };
    if parser.tokens.is_empty() {
        return None;
    }
    parser.parse_or()?;
    if parser.pos != parser.tokens.len() {
        return None;
    }
    Some(parser.licenses)
}

/// Operands of a loosely written expression, split at `AND`, `OR`,
/// `WITH` and parentheses. Words between two operators form one operand
/// (`BSD License OR MIT` -> `BSD License`, `MIT`); the exception following
/// `WITH` is dropped.
///
/// Returns `None` when the text holds no operator at all.
pub fn split_operands(expression: &str) -> Option<Vec<String>> {
    let mut operands = Vec::new();
    let mut words: Vec<&str> = Vec::new();
    let mut has_operator = false;
    let mut in_exception = false;

    for token in tokenize(expression) {
        match token {
            Token::Id(word) => {
                if !in_exception {
                    words.push(word);
                }
            }
            operator => {
                if matches!(operator, Token::And | Token::Or | Token::With) {
                    has_operator = true;
                }
                if !words.is_empty() {
                    operands.push(words.join(" "));
                    words.clear();
                }
                in_exception = operator == Token::With;
            }
        }
    }
    if !words.is_empty() {
        operands.push(words.join(" "));
    }

    has_operator.then_some(operands)
}

/// Canonical license names named by an expression, first-seen order.
///
/// Identifiers unknown to the classification table are kept verbatim. An
/// expression that does not parse is split at its operators and each
/// operand resolved on its own; text without any operator is treated as a
/// single opaque token.
pub fn expression_licenses(expression: &str) -> IndexSet<String> {
    let expression = expression.trim();
    if expression.is_empty() {
        return IndexSet::new();
    }

    if let Some(ids) = parse_identifiers(expression) {
        return ids.into_iter().map(resolve_or_verbatim).collect();
    }

    match split_operands(expression) {
        Some(operands) => {
            tracing::debug!(expression, "license expression does not parse, resolving operands one by one");
            operands.iter().map(|operand| resolve_or_verbatim(operand)).collect()
        }
        None => {
            tracing::debug!(expression, "license expression has no operator, keeping it verbatim");
            IndexSet::from([resolve_or_verbatim(expression)])
        }
    }
}
