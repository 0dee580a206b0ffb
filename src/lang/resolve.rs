use super::token::*;
use std::collections::{BTreeMap, HashMap, HashSet};

/// The first parser pass. One forward scan over the whole token sequence
/// collects every label name, loop-definition body, and array
/// declaration before the instruction builder starts, so loop extents
/// and array sizes are known ahead of any forward reference.
///
/// Populated exactly once; read-only context afterwards.
#[derive(Debug, Default)]
pub struct Tables {
    labels: HashSet<String>,
    loops: HashMap<String, Vec<Token>>,
    arrays: BTreeMap<String, Option<u32>>,
}

impl Tables {
    pub fn is_label(&self, name: &str) -> bool {
        self.labels.contains(name)
    }

    pub fn is_loop(&self, name: &str) -> bool {
        self.loops.contains_key(name)
    }

    /// The captured token span of a loop definition. Collected but never
    /// inlined by the generator.
    pub fn loop_body(&self, name: &str) -> Option<&[Token]> {
        self.loops.get(name).map(|body| body.as_slice())
    }

    pub fn is_array(&self, name: &str) -> bool {
        self.arrays.contains_key(name)
    }

    pub fn array_size(&self, name: &str) -> Option<u32> {
        self.arrays.get(name).copied().flatten()
    }

    /// Declared arrays in name order, each with its optional size.
    pub fn arrays(&self) -> impl Iterator<Item = (&str, Option<u32>)> {
        self.arrays.iter().map(|(name, size)| (name.as_str(), *size))
    }
}

fn strip_colon(name: &str) -> &str {
    name.strip_suffix(':').unwrap_or(name)
}

fn kind_at(tokens: &[Token], index: usize) -> Option<&TokenKind> {
    tokens.get(index).map(|token| &token.kind)
}

/// A `falcon` or `flash` keyword at indent 0 ends the current loop body.
fn is_boundary(token: &Token) -> bool {
    matches!(
        token.kind,
        TokenKind::Word(Word::Falcon) | TokenKind::Word(Word::Flash)
    ) && token.is_top_level()
}

pub fn resolve(tokens: &[Token]) -> Tables {
    let mut tables = Tables::default();
    let mut i = 0;
    while i < tokens.len() {
        match &tokens[i].kind {
            TokenKind::Word(Word::Falcon) => {
                if let Some(TokenKind::Ident(name)) = kind_at(tokens, i + 1) {
                    // later declarations of the same name win
                    tables.labels.insert(strip_colon(name).to_string());
                }
                // keyword and name, even when malformed
                i += 2;
            }
            TokenKind::Word(Word::Flash) => {
                if let Some(TokenKind::Ident(name)) = kind_at(tokens, i + 1) {
                    let name = strip_colon(name).to_string();
                    i += 2;
                    let start = i;
                    while i < tokens.len() && !is_boundary(&tokens[i]) {
                        i += 1;
                    }
                    // the boundary token starts the next entity
                    tables.loops.insert(name, tokens[start..i].to_vec());
                } else {
                    i += 1;
                }
            }
            TokenKind::Word(Word::Doctorstrange) => {
                let (size, name) = match kind_at(tokens, i + 1) {
                    Some(TokenKind::Literal(Literal::Integer(n))) => {
                        match kind_at(tokens, i + 2) {
                            Some(TokenKind::Ident(name)) => (Some(*n), Some(name.clone())),
                            _ => (Some(*n), None),
                        }
                    }
                    Some(TokenKind::Ident(name)) => (None, Some(name.clone())),
                    _ => (None, None),
                };
                if let Some(name) = name {
                    tables.arrays.insert(name, size);
                }
                // missing name is not an error here; the operand tokens
                // are re-scanned, which is harmless
                i += 1;
            }
            _ => i += 1,
        }
    }
    tables
}
