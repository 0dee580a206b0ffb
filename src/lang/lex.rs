use super::{token::*, Error, LineNumber};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// Line comment prefix; the rest of the line is ignored.
pub const LINE_COMMENT: &str = "hero>";
/// Block comment markers. Every line strictly inside the region is
/// skipped, including the partial start and end lines.
pub const BLOCK_OPEN: &str = "heroes*";
pub const BLOCK_CLOSE: &str = "*heroes";

const INDENT_WIDTH: usize = 4;

fn is_hero_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '#'
}

/// Convert source text into the full token sequence, or fail with the
/// first lexical error. Lines are independent; a line yields zero or
/// more tokens and the first token of each line records its indent depth.
pub fn lex(source: &str) -> Result<Vec<Token>> {
    let mut tokens: Vec<Token> = vec![];
    let mut block_comment = false;
    for (index, line) in source.lines().enumerate() {
        let line_number = index + 1;
        if line.trim().is_empty() {
            continue;
        }
        if block_comment {
            if line.contains(BLOCK_CLOSE) {
                block_comment = false;
            }
            continue;
        }
        if line.contains(BLOCK_OPEN) && !line.contains(BLOCK_CLOSE) {
            block_comment = true;
            continue;
        }
        let trimmed = line.trim_start();
        if trimmed.starts_with(LINE_COMMENT) {
            continue;
        }
        let indent = (line.len() - trimmed.len()) / INDENT_WIDTH;
        let mut kinds = LineLexer::lex(trimmed, line_number)?;
        let mut first = true;
        for kind in kinds.drain(..) {
            let mut token = Token::new(kind, line_number);
            if first {
                token.indent = Some(indent);
                first = false;
            }
            tokens.push(token);
        }
    }
    Ok(tokens)
}

struct LineLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: LineNumber,
}

impl<'a> LineLexer<'a> {
    fn lex(s: &'a str, line: LineNumber) -> Result<Vec<TokenKind>> {
        let mut this = LineLexer {
            chars: s.chars().peekable(),
            line,
        };
        let mut kinds: Vec<TokenKind> = vec![];
        while let Some(pk) = this.chars.peek().copied() {
            if is_hero_whitespace(pk) {
                this.chars.next();
                continue;
            }
            if pk == '"' {
                kinds.push(this.string()?);
                continue;
            }
            if pk.is_ascii_digit() {
                kinds.push(this.number());
                continue;
            }
            if pk.is_ascii_alphabetic() || pk == '_' || pk == '#' {
                kinds.push(this.word()?);
                continue;
            }
            if matches!(pk, '<' | '>' | '=' | '!') {
                kinds.push(this.operator()?);
                continue;
            }
            if pk == ':' {
                // trailing-colon label syntax
                this.chars.next();
                kinds.push(TokenKind::Ident(":".to_string()));
                continue;
            }
            // everything else is decorative and discarded
            this.chars.next();
        }
        Ok(kinds)
    }

    /// String literal value is the raw text between the quotes; a
    /// backslash plus any character is kept verbatim and never closes
    /// the literal.
    fn string(&mut self) -> Result<TokenKind> {
        self.chars.next();
        let mut s = String::new();
        loop {
            match self.chars.next() {
                Some('"') => return Ok(TokenKind::Literal(Literal::String(s))),
                Some('\\') => {
                    s.push('\\');
                    match self.chars.next() {
                        Some(ch) => s.push(ch),
                        None => return Err(error!(UnterminatedString, self.line)),
                    }
                }
                Some(ch) => s.push(ch),
                None => return Err(error!(UnterminatedString, self.line)),
            }
        }
    }

    fn number(&mut self) -> TokenKind {
        let mut s = String::new();
        while let Some(pk) = self.chars.peek() {
            if pk.is_ascii_digit() {
                s.push(*pk);
                self.chars.next();
            } else {
                break;
            }
        }
        // leading zeros are decimal; absurdly large literals saturate
        TokenKind::Literal(Literal::Integer(s.parse().unwrap_or(u32::MAX)))
    }

    fn word(&mut self) -> Result<TokenKind> {
        let mut s = String::new();
        while let Some(pk) = self.chars.peek() {
            if is_ident_char(*pk) {
                s.push(*pk);
                self.chars.next();
            } else {
                break;
            }
        }
        if let Some(rest) = s.strip_prefix('#') {
            return match rest.parse::<usize>() {
                Ok(n) => Ok(TokenKind::CellRef(n)),
                Err(_) => Err(error!(InvalidCellRef, self.line; format!("'{}'", s))),
            };
        }
        Ok(match Word::from_string(&s) {
            Some(word) => TokenKind::Word(word),
            None => TokenKind::Ident(s),
        })
    }

    fn operator(&mut self) -> Result<TokenKind> {
        let mut s = String::new();
        let first = match self.chars.next() {
            Some(ch) => ch,
            None => return Err(error!(InvalidOperator, self.line)),
        };
        s.push(first);
        if let Some(pk) = self.chars.peek().copied() {
            // `<>` is consumed whole so it is diagnosed as one bad spelling
            if pk == '=' || (first == '<' && pk == '>') {
                s.push(pk);
                self.chars.next();
            }
        }
        match Operator::from_string(&s) {
            Some(op) => Ok(TokenKind::Operator(op)),
            None => Err(error!(InvalidOperator, self.line; format!("'{}'", s))),
        }
    }
}
