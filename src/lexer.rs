use crate::list::TokenList;
use crate::token::{Op, Token};
use crate::util::{parse_number, FUNCTIONS, UNITS};
use std::iter::Peekable;
use std::str::Chars;
use tracing::trace;

#[must_use]
/// Check if `ident` is a valid variable name: an identifier that is neither a
/// function nor a unit
///
/// # Examples
///
/// ```
/// # use tally::is_variable;
///
/// assert_eq!(is_variable("__abc3"), true);
/// assert_eq!(is_variable("34zb"), false);
/// assert_eq!(is_variable("sqrt"), false);
/// ```
pub fn is_variable(ident: &str) -> bool {
    let mut chars = ident.chars();
    // Check first char
    if !chars.next().map_or(false, is_variable_start) {
        return false;
    }
    // Check all others
    if !chars.all(is_variable_part) {
        return false;
    }
    return !FUNCTIONS.contains_key(ident) && !UNITS.contains_key(ident);
}

/// An helper struct for lexing the input.
///
/// Lexing never fails: text that cannot be classified becomes a
/// [`Token::Unknown`](enum.Token.html), which the warning pass reports.
pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
    /// Last token produced, to tell a sign from a binary operator
    previous: Option<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over `string`
    #[must_use]
    pub fn new(string: &'a str) -> Lexer<'a> {
        Lexer {
            input: string.chars().peekable(),
            previous: None,
        }
    }

    /// Split the input into classified tokens, in source order
    pub fn tokenize(&mut self) -> TokenList<Token> {
        let mut tokens = TokenList::new();
        while let Some(token) = self.next_token() {
            trace!(token = %token, "lexed");
            self.previous = Some(token.clone());
            tokens.push(token);
        }
        tokens
    }

    fn next_token(&mut self) -> Option<Token> {
        loop {
            let c = self.input.next()?;
            let token = match c {
                ' ' | '\t' | '\n' | '\r' => continue,
                '+' | '-' if self.at_prefix_position() => {
                    if self.input.peek().map_or(false, |&c| is_number_part(c)) {
                        // Special case to handle numbers starting with + or -
                        let sign = if c == '-' { "-" } else { "" };
                        self.number(sign.to_string())
                    } else if c == '-' {
                        Token::Op(Op::Negate)
                    } else {
                        continue;
                    }
                }
                c if is_number_part(c) => self.number(c.to_string()),
                c if is_variable_start(c) => {
                    let mut ident = c.to_string();
                    while let Some(&c) = self.input.peek() {
                        if !is_variable_part(c) {
                            break;
                        }
                        self.input.next();
                        ident.push(c);
                    }
                    classify(ident)
                }
                '(' => Token::LParen,
                ')' => Token::RParen,
                c => Op::from_char(c).map_or_else(|| Token::Unknown(c.to_string()), Token::Op),
            };
            return Some(token);
        }
    }

    /// Read the rest of a numeric literal starting with `literal`
    fn number(&mut self, mut literal: String) -> Token {
        while let Some(&c) = self.input.peek() {
            if !is_number_part(c) {
                break;
            }
            self.input.next();
            literal.push(c);
        }
        match parse_number(&literal) {
            Some(value) => Token::Number(value),
            None => Token::Unknown(literal),
        }
    }

    /// A `+` or `-` here is a sign rather than a binary operator
    fn at_prefix_position(&self) -> bool {
        match self.previous {
            None | Some(Token::LParen) | Some(Token::Function(_)) => true,
            Some(Token::Op(op)) => op != Op::Factorial,
            Some(_) => false,
        }
    }
}

fn classify(ident: String) -> Token {
    if let Some(&function) = FUNCTIONS.get(ident.as_str()) {
        Token::Function(function)
    } else if let Some(&unit) = UNITS.get(ident.as_str()) {
        Token::Unit(unit)
    } else {
        Token::Name(ident)
    }
}

/// Check if `c` can appear inside a numeric literal
fn is_number_part(c: char) -> bool {
    c == '.' || c.is_ascii_digit()
}

/// Check if `c` can appear at the first character of a variable
fn is_variable_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

/// Check if `c` can appear inside a variable
fn is_variable_part(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}
