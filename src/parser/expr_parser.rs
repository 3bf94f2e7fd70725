use std::collections::VecDeque;

use super::ast::{BinaryOp, Expression, Program, Statement};
use crate::error::{Error, Result};
use crate::lexer::{Token, TokenKind};

/// Deepest expression tree the parser accepts
///
/// Counts open parentheses and unary minuses while parsing, and the height of
/// the finished tree (a chain of `n` binary operators is `n` levels). Deeper
/// input is a `SyntaxError`.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Token source backed by an already scanned vector
pub type TokenVec = std::iter::Map<std::vec::IntoIter<Token>, fn(Token) -> Result<Token>>;

/// Recursive-descent parser for calclang
///
/// Pulls tokens lazily from any iterator of `Result<Token>`, so a [`Scanner`]
/// can be handed over directly and lexical errors surface in source order.
/// At most two tokens are buffered: the current one and the one after it,
/// which is all the grammar needs to tell `x = ...` from `x + ...`.
///
/// [`Scanner`]: crate::lexer::Scanner
pub struct Parser<I>
where
    I: Iterator<Item = Result<Token>>,
{
    tokens: I,
    lookahead: VecDeque<Token>,
    /// Position just past the last pulled token, used for a synthesized `Eof`
    end_line: usize,
    end_column: usize,
    /// Open parentheses and unary minuses around the current token
    nesting: usize,
}

impl Parser<TokenVec> {
    /// Creates a parser over a token vector produced by `Scanner::scan_tokens`
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Parser::new(tokens.into_iter().map(Ok as fn(Token) -> Result<Token>))
    }
}

impl<I> Parser<I>
where
    I: Iterator<Item = Result<Token>>,
{
    /// Creates a new parser
    pub fn new(tokens: I) -> Self {
        Parser {
            tokens,
            lookahead: VecDeque::with_capacity(2),
            end_line: 1,
            end_column: 1,
            nesting: 0,
        }
    }

    /// Parses the whole token sequence into a program
    pub fn parse(&mut self) -> Result<Program> {
        let mut statements = Vec::new();

        loop {
            if self.check(&TokenKind::Eof)? {
                break;
            }
            if self.check(&TokenKind::Newline)? {
                // Blank line
                self.advance()?;
                continue;
            }

            let statement = self.parse_statement()?;
            tracing::debug!(index = statements.len(), %statement, "parsed statement");
            statements.push(statement);
            self.end_statement()?;
        }

        tracing::debug!(statements = statements.len(), "parsed program");
        Ok(Program { statements })
    }

    /// statement := IDENTIFIER ASSIGN expression | expression
    fn parse_statement(&mut self) -> Result<Statement> {
        if let TokenKind::Identifier(name) = self.peek()?.kind.clone() {
            if self.peek_nth(1)?.kind == TokenKind::Assign {
                self.advance()?; // identifier
                self.advance()?; // =
                let (value, _) = self.parse_expression()?;
                return Ok(Statement::Assignment { name, value });
            }
        }

        let (expr, _) = self.parse_expression()?;
        Ok(Statement::Expression(expr))
    }

    /// A statement must be followed by a newline or the end of input
    fn end_statement(&mut self) -> Result<()> {
        if !self.peek()?.kind.is_terminator() {
            return Err(self.expected_error("operator or end of line")?);
        }
        // Eof stays in the lookahead for the program loop
        if self.check(&TokenKind::Newline)? {
            self.advance()?;
        }
        Ok(())
    }

    // The expression parsers return the tree together with its height

    /// expression := term ((PLUS | MINUS) term)*
    fn parse_expression(&mut self) -> Result<(Expression, usize)> {
        let (mut left, mut height) = self.parse_term()?;

        loop {
            let op = match self.peek()?.kind {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => break,
            };
            let op_token = self.advance()?;
            let (right, right_height) = self.parse_term()?;
            height = check_depth(height.max(right_height) + 1, &op_token)?;
            left = Expression::binary(op, left, right);
        }

        Ok((left, height))
    }

    /// term := factor ((STAR | SLASH) factor)*
    fn parse_term(&mut self) -> Result<(Expression, usize)> {
        let (mut left, mut height) = self.parse_factor()?;

        loop {
            let op = match self.peek()?.kind {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                _ => break,
            };
            let op_token = self.advance()?;
            let (right, right_height) = self.parse_factor()?;
            height = check_depth(height.max(right_height) + 1, &op_token)?;
            left = Expression::binary(op, left, right);
        }

        Ok((left, height))
    }

    /// factor := MINUS factor | NUMBER | IDENTIFIER | LPAREN expression RPAREN
    fn parse_factor(&mut self) -> Result<(Expression, usize)> {
        let token = self.advance()?;

        match token.kind {
            TokenKind::Minus => {
                let (operand, height) = self.nested(&token, Self::parse_factor)?;
                let height = check_depth(height + 1, &token)?;
                Ok((Expression::negate(operand), height))
            }
            TokenKind::Number(n) => Ok((Expression::NumberLiteral(n), 0)),
            TokenKind::Identifier(name) => Ok((Expression::Variable(name), 0)),
            TokenKind::LeftParen => {
                let inner = self.nested(&token, Self::parse_expression)?;
                self.consume(TokenKind::RightParen)?;
                Ok(inner)
            }
            other => Err(Error::syntax(
                "number, identifier, `-` or `(`",
                other.to_string(),
                token.line,
                token.column,
            )),
        }
    }

    // Helper methods

    /// Runs `parse` one nesting level deeper than `opener`
    fn nested<T>(&mut self, opener: &Token, parse: fn(&mut Self) -> Result<T>) -> Result<T> {
        self.nesting = check_depth(self.nesting + 1, opener)?;
        let result = parse(self);
        self.nesting -= 1;
        result
    }

    /// Pulls the next token from the source, synthesizing `Eof` once it runs dry
    fn pull(&mut self) -> Result<Token> {
        match self.tokens.next() {
            Some(token) => {
                let token = token?;
                if token.kind == TokenKind::Newline {
                    self.end_line = token.line + 1;
                    self.end_column = 1;
                } else {
                    self.end_line = token.line;
                    self.end_column = token.column + token.lexeme.chars().count();
                }
                Ok(token)
            }
            None => Ok(Token::new(
                TokenKind::Eof,
                String::new(),
                self.end_line,
                self.end_column,
            )),
        }
    }

    fn peek(&mut self) -> Result<&Token> {
        self.peek_nth(0)
    }

    fn peek_nth(&mut self, n: usize) -> Result<&Token> {
        while self.lookahead.len() <= n {
            let token = self.pull()?;
            self.lookahead.push_back(token);
        }
        Ok(&self.lookahead[n])
    }

    fn advance(&mut self) -> Result<Token> {
        match self.lookahead.pop_front() {
            Some(token) => Ok(token),
            None => self.pull(),
        }
    }

    fn check(&mut self, kind: &TokenKind) -> Result<bool> {
        Ok(std::mem::discriminant(&self.peek()?.kind) == std::mem::discriminant(kind))
    }

    fn consume(&mut self, kind: TokenKind) -> Result<Token> {
        if self.check(&kind)? {
            self.advance()
        } else {
            Err(self.expected_error(&kind.to_string())?)
        }
    }

    /// Helper to create a syntax error at the current token
    fn expected_error(&mut self, expected: &str) -> Result<Error> {
        let token = self.peek()?;
        Ok(Error::syntax(
            expected,
            token.kind.to_string(),
            token.line,
            token.column,
        ))
    }
}

fn check_depth(depth: usize, token: &Token) -> Result<usize> {
    if depth > MAX_NESTING_DEPTH {
        return Err(Error::syntax(
            format!("at most {} levels of nesting", MAX_NESTING_DEPTH),
            token.kind.to_string(),
            token.line,
            token.column,
        ));
    }
    Ok(depth)
}
