//! Tokenizer for duration expressions
//!
//! Scans a lowercased expression left to right and pairs each number with the
//! alphabetic run that follows it.
//!
//! # Rules
//!
//! - Whitespace between a number and its keyword is ignored: `25   min`
//! - Digits separated only by whitespace belong to the same number: `1   8s` is 18s
//! - A number may carry one decimal point: `1.5h`, `.5h`, `5.h`
//! - A `+` or `-` right before a number (spaces allowed) signs that token only
//! - Two alphabetic runs never merge: `1 d ay` is one day followed by a stray `ay`
//! - Numbers without a keyword, keywords without a number and any other
//!   character are skipped
//!
//! Scanning never fails on its own; the caller decides what an empty token
//! list means.

use log::trace;

/// A number paired with the keyword that followed it
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub value: f64,
    pub keyword: String,
}

struct Scanner<'a> {
    chars: Vec<char>,
    pos: usize,
    source: &'a str,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str) -> Self {
        Scanner { chars: source.chars().collect(), pos: 0, source }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    /// Position of the next non-whitespace character, without consuming
    fn next_significant(&self) -> usize {
        let mut i = self.pos;
        while self.chars.get(i).is_some_and(|c| c.is_whitespace()) {
            i += 1;
        }
        i
    }

    fn at_number_start(&self) -> bool {
        match self.peek() {
            Some(c) if c.is_ascii_digit() => true,
            Some('.') => self.peek_at(1).is_some_and(|c| c.is_ascii_digit()),
            _ => false,
        }
    }

    /// Read digits with at most one decimal point, letting whitespace sit
    /// between digits
    fn scan_number(&mut self) -> String {
        let mut literal = String::new();
        let mut seen_point = false;

        loop {
            match self.peek() {
                Some(c) if c.is_ascii_digit() => {
                    literal.push(c);
                    self.pos += 1;
                }
                Some('.') if !seen_point => {
                    seen_point = true;
                    literal.push('.');
                    self.pos += 1;
                }
                Some(c) if c.is_whitespace() => {
                    let next = self.next_significant();
                    if self.chars.get(next).is_some_and(|c| c.is_ascii_digit()) {
                        self.pos = next;
                    } else {
                        break;
                    }
                }
                _ => break,
            }
        }

        literal
    }

    fn scan_word(&mut self) -> String {
        let start = self.pos;
        while self.peek().is_some_and(char::is_alphabetic) {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }
}

/// Split an expression into (number, keyword) tokens
///
/// The input is expected to be lowercased already.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut scanner = Scanner::new(input);
    let mut tokens = Vec::new();

    loop {
        scanner.skip_whitespace();
        let Some(c) = scanner.peek() else {
            break;
        };

        let negative = match c {
            '+' | '-' => {
                scanner.pos += 1;
                scanner.skip_whitespace();
                if !scanner.at_number_start() {
                    trace!("Skipping stray sign '{}' in '{}'", c, scanner.source);
                    continue;
                }
                c == '-'
            }
            _ => false,
        };

        if scanner.at_number_start() {
            let literal = scanner.scan_number();
            scanner.skip_whitespace();

            if !scanner.peek().is_some_and(char::is_alphabetic) {
                trace!("Skipping number '{}' without a unit", literal);
                continue;
            }
            let keyword = scanner.scan_word();

            // Digits with at most one point and at least one digit
            let Ok(magnitude) = literal.parse::<f64>() else {
                trace!("Skipping unreadable number '{}'", literal);
                continue;
            };
            let value = if negative { -magnitude } else { magnitude };

            trace!("Token: {} {}", value, keyword);
            tokens.push(Token { value, keyword });
        } else if c.is_alphabetic() {
            let word = scanner.scan_word();
            trace!("Skipping unit '{}' without a number", word);
        } else {
            scanner.pos += 1;
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(value: f64, keyword: &str) -> Token {
        Token { value, keyword: keyword.to_string() }
    }

    #[test]
    fn test_compact_expression() {
        assert_eq!(
            tokenize("1d3h25m18s"),
            vec![tok(1.0, "d"), tok(3.0, "h"), tok(25.0, "m"), tok(18.0, "s")]
        );
    }

    #[test]
    fn test_whitespace_between_number_and_keyword() {
        assert_eq!(tokenize("25   min"), vec![tok(25.0, "min")]);
        assert_eq!(tokenize("  1 h 15 m  "), vec![tok(1.0, "h"), tok(15.0, "m")]);
    }

    #[test]
    fn test_whitespace_inside_number() {
        assert_eq!(tokenize("1   8s"), vec![tok(18.0, "s")]);
    }

    #[test]
    fn test_alphabetic_runs_do_not_merge() {
        assert_eq!(tokenize("1 d ay"), vec![tok(1.0, "d")]);
    }

    #[test]
    fn test_decimals() {
        assert_eq!(tokenize("1.5h"), vec![tok(1.5, "h")]);
        assert_eq!(tokenize(".5h"), vec![tok(0.5, "h")]);
        assert_eq!(tokenize("5.h"), vec![tok(5.0, "h")]);
        // A second point ends the first number, which then has no unit
        assert_eq!(tokenize("1.2.3h"), vec![tok(0.3, "h")]);
    }

    #[test]
    fn test_signs() {
        assert_eq!(tokenize("-1h"), vec![tok(-1.0, "h")]);
        assert_eq!(tokenize("+30m"), vec![tok(30.0, "m")]);
        assert_eq!(tokenize("1h - 30m"), vec![tok(1.0, "h"), tok(-30.0, "m")]);
        assert_eq!(tokenize("- h 2s"), vec![tok(2.0, "s")]);
    }

    #[test]
    fn test_stray_fragments_are_skipped() {
        assert_eq!(tokenize("about 2h, maybe 3"), vec![tok(2.0, "h")]);
        assert_eq!(tokenize("1h:30m"), vec![tok(1.0, "h"), tok(30.0, "m")]);
        assert!(tokenize("aaabbbccc").is_empty());
        assert!(tokenize("42").is_empty());
        assert!(tokenize("...").is_empty());
    }

    #[test]
    fn test_unicode_keywords() {
        assert_eq!(tokenize("3 stunden"), vec![tok(3.0, "stunden")]);
        assert_eq!(tokenize("2 días"), vec![tok(2.0, "días")]);
    }
}
