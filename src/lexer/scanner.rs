use super::token::{Token, TokenKind};
use crate::error::{Error, Result};

/// Lazy scanner turning calclang source text into tokens
///
/// The scanner is an iterator: each call to `next` scans exactly one token.
/// It ends with a single `Eof` token, or stops right after the first error.
pub struct Scanner {
    /// Source code as character vector
    source: Vec<char>,
    /// Start position of current token
    start: usize,
    /// Current position in source
    current: usize,
    /// Current line number (1-indexed)
    line: usize,
    /// Current column number (1-indexed)
    column: usize,
    /// Line where the current token starts
    start_line: usize,
    /// Column where the current token starts
    start_column: usize,
    /// Set once `Eof` or an error has been produced
    finished: bool,
}

impl Scanner {
    /// Creates a new scanner from source code
    pub fn new(source: &str) -> Self {
        Scanner {
            source: source.chars().collect(),
            start: 0,
            current: 0,
            line: 1,
            column: 1,
            start_line: 1,
            start_column: 1,
            finished: false,
        }
    }

    /// Scans all remaining tokens and returns them as a vector
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>> {
        self.by_ref().collect()
    }

    fn scan_token(&mut self) -> Result<Token> {
        self.skip_blanks();

        self.start = self.current;
        self.start_line = self.line;
        self.start_column = self.column;

        if self.is_at_end() {
            return Ok(self.make_token(TokenKind::Eof));
        }

        let c = self.advance();

        let kind = match c {
            '\n' => {
                let token = self.make_token(TokenKind::Newline);
                self.line += 1;
                self.column = 1;
                return Ok(token);
            }

            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '=' => TokenKind::Assign,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,

            c if c.is_ascii_digit() => self.scan_number()?,
            c if c.is_alphabetic() => self.scan_identifier(),

            _ => {
                return Err(Error::LexicalError {
                    character: c,
                    line: self.start_line,
                    column: self.start_column,
                });
            }
        };

        Ok(self.make_token(kind))
    }

    /// Skips spaces, tabs, carriage returns and `#` comments, stopping at a newline
    fn skip_blanks(&mut self) {
        loop {
            match self.peek() {
                ' ' | '\t' | '\r' => {
                    self.advance();
                }
                '#' => {
                    while !self.is_at_end() && self.peek() != '\n' {
                        self.advance();
                    }
                }
                _ => return,
            }
        }
    }

    fn scan_number(&mut self) -> Result<TokenKind> {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance(); // consume .
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let text = self.lexeme();
        let value: f64 = text.parse().map_err(|_| Error::LexicalError {
            character: self.source[self.start],
            line: self.start_line,
            column: self.start_column,
        })?;

        Ok(TokenKind::Number(value))
    }

    fn scan_identifier(&mut self) -> TokenKind {
        while self.peek().is_alphanumeric() {
            self.advance();
        }
        TokenKind::Identifier(self.lexeme())
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        self.column += 1;
        c
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    fn peek_next(&self) -> char {
        if self.current + 1 >= self.source.len() {
            '\0'
        } else {
            self.source[self.current + 1]
        }
    }

    fn lexeme(&self) -> String {
        self.source[self.start..self.current].iter().collect()
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.lexeme(), self.start_line, self.start_column)
    }
}

impl Iterator for Scanner {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.scan_token();
        match &result {
            Ok(token) => {
                tracing::trace!(kind = ?token.kind, line = token.line, column = token.column, "token");
                if token.kind == TokenKind::Eof {
                    self.finished = true;
                }
            }
            Err(_) => self.finished = true,
        }
        Some(result)
    }
}

impl std::iter::FusedIterator for Scanner {}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Scanner::new(source)
            .scan_tokens()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_simple_expression() {
        assert_eq!(
            kinds("3 + 4"),
            vec![
                TokenKind::Number(3.0),
                TokenKind::Plus,
                TokenKind::Number(4.0),
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_all_operators_and_parens() {
        assert_eq!(
            kinds("x = -(a*b)/2"),
            vec![
                TokenKind::Identifier("x".to_string()),
                TokenKind::Assign,
                TokenKind::Minus,
                TokenKind::LeftParen,
                TokenKind::Identifier("a".to_string()),
                TokenKind::Star,
                TokenKind::Identifier("b".to_string()),
                TokenKind::RightParen,
                TokenKind::Slash,
                TokenKind::Number(2.0),
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_decimal_numbers() {
        assert_eq!(
            kinds("3.25 10"),
            vec![
                TokenKind::Number(3.25),
                TokenKind::Number(10.0),
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_trailing_dot_is_illegal() {
        let err = Scanner::new("1.").scan_tokens().unwrap_err();
        assert_eq!(
            err,
            Error::LexicalError {
                character: '.',
                line: 1,
                column: 2
            }
        );
    }

    #[test]
    fn test_identifiers_with_digits_are_case_sensitive() {
        assert_eq!(
            kinds("abc1 ABC1"),
            vec![
                TokenKind::Identifier("abc1".to_string()),
                TokenKind::Identifier("ABC1".to_string()),
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_newlines_and_positions() {
        let tokens = Scanner::new("a = 1\n  b").scan_tokens().unwrap();
        assert_eq!(tokens[3].kind, TokenKind::Newline);
        assert_eq!((tokens[3].line, tokens[3].column), (1, 6));

        let b = &tokens[4];
        assert_eq!(b.kind, TokenKind::Identifier("b".to_string()));
        assert_eq!((b.line, b.column), (2, 3));
        assert_eq!(b.lexeme, "b");
    }

    #[test]
    fn test_comment_keeps_newline() {
        assert_eq!(
            kinds("# header\n7 # seven\n"),
            vec![
                TokenKind::Newline,
                TokenKind::Number(7.0),
                TokenKind::Newline,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(
            kinds("1\r\n2"),
            vec![
                TokenKind::Number(1.0),
                TokenKind::Newline,
                TokenKind::Number(2.0),
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_illegal_character_position() {
        let err = Scanner::new("x = 1\ny $ 2").scan_tokens().unwrap_err();
        assert_eq!(
            err,
            Error::LexicalError {
                character: '$',
                line: 2,
                column: 3
            }
        );
    }

    #[test]
    fn test_eof_emitted_once() {
        let mut scanner = Scanner::new("");
        assert_eq!(scanner.next().unwrap().unwrap().kind, TokenKind::Eof);
        assert!(scanner.next().is_none());
        assert!(scanner.next().is_none());
    }

    #[test]
    fn test_stops_after_error() {
        let mut scanner = Scanner::new("1 ? 2");
        assert!(scanner.next().unwrap().is_ok());
        assert!(scanner.next().unwrap().is_err());
        assert!(scanner.next().is_none());
    }

    #[test]
    fn test_lazy_scanning() {
        // Tokens before an illegal character are produced before the error is seen
        let mut scanner = Scanner::new("1 + 2 @");
        let first = scanner.next().unwrap().unwrap();
        assert_eq!(first.kind, TokenKind::Number(1.0));
    }
}
