use crate::error::ParseError;
use crate::lexer::{Lexer, Token, TokenWithPos};
use crate::mapping::ReaderObject;
use crate::value::Value;

/// A parsed file: every top-level value in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub items: Vec<Value>,
}

impl Document {
    /// Returns the first top-level `(name ...)` list as a named object.
    ///
    /// Data files hold exactly one such root, e.g. `(surface ...)`.
    pub fn root(&self) -> Option<ReaderObject<'_>> {
        self.items.iter().find_map(ReaderObject::from_value)
    }
}

// ── Parser ────────────────────────────────────────────────────────────────

/// Deepest list nesting accepted before parsing fails.
pub const MAX_DEPTH: usize = 256;

pub struct Parser {
    tokens: Vec<TokenWithPos>,
    pos: usize,
    /// Lists currently open.
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<TokenWithPos>) -> Self {
        Self { tokens, pos: 0, depth: 0 }
    }

    fn current_pos(&self) -> (usize, usize) {
        self.tokens
            .get(self.pos)
            .map(|t| (t.line, t.col))
            .or_else(|| self.tokens.last().map(|t| (t.line, t.col)))
            .unwrap_or((1, 1))
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens.get(self.pos)
            .map(|t| t.token.clone())
            .unwrap_or(Token::Eof);
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        let (line, col) = self.current_pos();
        ParseError::new(msg, line, col)
    }

    // ── Document ──────────────────────────────────────────────────────────

    pub fn parse_document(&mut self) -> Result<Document, ParseError> {
        let mut items = Vec::new();
        while self.peek() != &Token::Eof {
            items.push(self.parse_value()?);
        }
        Ok(Document { items })
    }

    // ── Value ─────────────────────────────────────────────────────────────

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        if self.peek() == &Token::LParen {
            return self.parse_list();
        }
        if self.peek() == &Token::RParen {
            return Err(self.err("unexpected ')'"));
        }
        match self.advance() {
            Token::Symbol(s)  => Ok(Value::Symbol(s)),
            Token::Str(s)     => Ok(Value::String(s)),
            Token::Integer(i) => Ok(Value::Integer(i)),
            Token::Real(r)    => Ok(Value::Real(r)),
            Token::Boolean(b) => Ok(Value::Boolean(b)),
            tok => Err(self.err(format!("expected a value, got {:?}", tok))),
        }
    }

    // ── List ──────────────────────────────────────────────────────────────

    fn parse_list(&mut self) -> Result<Value, ParseError> {
        let (line, col) = self.current_pos();
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::new(
                format!("nesting too deep (more than {} lists)", MAX_DEPTH),
                line,
                col,
            ));
        }
        self.advance(); // consume `(`
        self.depth += 1;
        let items = self.parse_list_items(line, col);
        self.depth -= 1;
        items.map(Value::List)
    }

    fn parse_list_items(&mut self, line: usize, col: usize) -> Result<Vec<Value>, ParseError> {
        let mut items = Vec::new();
        loop {
            match self.peek() {
                Token::RParen => { self.advance(); return Ok(items); }
                Token::Eof => {
                    return Err(ParseError::new("unclosed '(' list", line, col));
                }
                _ => items.push(self.parse_value()?),
            }
        }
    }
}

// ── Public parse entry point ──────────────────────────────────────────────

/// Parse an S-expression source string into a [`Document`].
pub fn parse_str(src: &str) -> Result<Document, ParseError> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser::new(tokens).parse_document()
}
