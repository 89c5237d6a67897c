// Copyright (c) 2019-2026 The Lumen Authors.
// Licensed under the MIT License. See LICENSE.md for details.

use std::iter::Peekable;
use std::str::CharIndices;

use lumen_span::Span;

use crate::tokenizer::{SpannedToken, Token};

/// Eats a run of `[A-Za-z_]+` — no digits, unlike most C-family lexers, so
/// `foo2` lexes as `foo` followed by the illegal-token `2`... except digits
/// never reach here since the caller only dispatches into this path on an
/// alphabetic/underscore lead character, and this loop keeps consuming only
/// alphabetic/underscore characters.
fn eat_identifier(input: &mut Peekable<CharIndices>) -> String {
    let mut ident = String::new();
    while let Some(&(_, c)) = input.peek() {
        if c.is_ascii_alphabetic() || c == '_' {
            ident.push(c);
            input.next();
        } else {
            break;
        }
    }
    ident
}

fn eat_digits(input: &mut Peekable<CharIndices>) -> String {
    let mut digits = String::new();
    while let Some(&(_, c)) = input.peek() {
        if c.is_ascii_digit() {
            digits.push(c);
            input.next();
        } else {
            break;
        }
    }
    digits
}

/// Scans `source` into a token stream terminated by `Token::Eof`.
///
/// The lexer has no diagnostics of its own: an unrecognised byte becomes
/// `Token::Illegal(c)`, and the parser is the layer that turns that into a
/// reportable error.
pub struct Lexer<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, chars: source.char_indices().peekable() }
    }

    fn skip_whitespace(&mut self) {
        while let Some(&(_, c)) = self.chars.peek() {
            if c == ' ' || c == '\t' || c == '\n' || c == '\r' {
                self.chars.next();
            } else {
                break;
            }
        }
    }

    /// Scans and returns every token up front, the shape [`crate::ParserContext`]
    /// wants to build its two-token lookahead window over.
    pub fn tokenize(mut self) -> Vec<SpannedToken> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = matches!(token.token, Token::Eof);
            tokens.push(token);
            if done {
                break;
            }
        }
        tokens
    }

    fn next_token(&mut self) -> SpannedToken {
        self.skip_whitespace();

        let (start, c) = match self.chars.peek().copied() {
            Some(pair) => pair,
            None => return SpannedToken { token: Token::Eof, span: Span::new(self.source.len() as u32, self.source.len() as u32) },
        };

        macro_rules! single {
            ($tok:expr) => {{
                self.chars.next();
                (start + c.len_utf8(), $tok)
            }};
        }

        let (end, token) = match c {
            '"' => {
                self.chars.next();
                let string_start = self.chars.peek().map(|&(i, _)| i).unwrap_or(self.source.len());
                let mut string_end = self.source.len();
                loop {
                    match self.chars.peek().copied() {
                        Some((i, '"')) => {
                            string_end = i;
                            self.chars.next();
                            break;
                        }
                        Some(_) => {
                            self.chars.next();
                        }
                        None => break,
                    }
                }
                (
                    self.chars.peek().map(|&(i, _)| i).unwrap_or(self.source.len()),
                    Token::Str(self.source[string_start..string_end].to_string()),
                )
            }
            c if c.is_ascii_digit() => {
                let digits = eat_digits(&mut self.chars);
                let end = start + digits.len();
                (end, Token::Int(digits))
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let ident = eat_identifier(&mut self.chars);
                let end = start + ident.len();
                (end, Token::lookup_ident(&ident))
            }
            '=' => {
                self.chars.next();
                if self.chars.next_if(|&(_, c)| c == '=').is_some() {
                    (start + 2, Token::Eq)
                } else {
                    (start + 1, Token::Assign)
                }
            }
            '!' => {
                self.chars.next();
                if self.chars.next_if(|&(_, c)| c == '=').is_some() {
                    (start + 2, Token::NotEq)
                } else {
                    (start + 1, Token::Bang)
                }
            }
            '+' => single!(Token::Plus),
            '-' => single!(Token::Minus),
            '*' => single!(Token::Asterisk),
            '/' => single!(Token::Slash),
            '<' => single!(Token::Lt),
            '>' => single!(Token::Gt),
            ',' => single!(Token::Comma),
            ';' => single!(Token::Semicolon),
            ':' => single!(Token::Colon),
            '(' => single!(Token::LeftParen),
            ')' => single!(Token::RightParen),
            '{' => single!(Token::LeftBrace),
            '}' => single!(Token::RightBrace),
            '[' => single!(Token::LeftBracket),
            ']' => single!(Token::RightBracket),
            other => single!(Token::Illegal(other)),
        };

        SpannedToken { token, span: Span::new(start as u32, end as u32) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        Lexer::new(source).tokenize().into_iter().map(|t| t.token).collect()
    }

    #[test]
    fn scans_the_full_token_alphabet() {
        let source = r#"let five = 5;
let add = fn(x, y) {
  x + y;
};
!-/*5;
5 < 10 > 5;
if (5 < 10) {
    return true;
} else {
    return false;
}
10 == 10;
10 != 9;
"foobar"
"foo bar"
[1, 2];
{"foo": "bar"}
"#;
        let tokens = kinds(source);
        assert_eq!(tokens.first(), Some(&Token::Let));
        assert!(tokens.contains(&Token::Str("foobar".to_string())));
        assert!(tokens.contains(&Token::Str("foo bar".to_string())));
        assert!(tokens.contains(&Token::Eq));
        assert!(tokens.contains(&Token::NotEq));
        assert_eq!(tokens.last(), Some(&Token::Eof));
    }

    #[test]
    fn identifiers_are_letters_and_underscores_only() {
        assert_eq!(kinds("foo_bar"), vec![Token::Ident("foo_bar".to_string()), Token::Eof]);
    }

    #[test]
    fn unrecognised_byte_is_illegal() {
        assert_eq!(kinds("@"), vec![Token::Illegal('@'), Token::Eof]);
    }

    #[test]
    fn unterminated_string_runs_to_end_of_input() {
        assert_eq!(kinds(r#""abc"#), vec![Token::Str("abc".to_string()), Token::Eof]);
    }
}
