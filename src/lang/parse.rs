use super::{ast::*, resolve::Tables, token::*, Error};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// The second parser pass. An independent forward scan over the same
/// token sequence, dispatching on the current token and consuming each
/// opcode's operand tokens only when present and well-typed. Optional
/// operands left absent are not errors; unrecognized tokens produce no
/// instruction and the scan moves on.
pub fn parse(tokens: &[Token], tables: &Tables) -> Result<Vec<Instruction>> {
    Parser {
        tokens,
        pos: 0,
        tables,
    }
    .run()
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    tables: &'a Tables,
}

impl<'a> Parser<'a> {
    fn run(mut self) -> Result<Vec<Instruction>> {
        let mut r: Vec<Instruction> = vec![];
        while self.pos < self.tokens.len() {
            if let Some(instruction) = self.statement()? {
                r.push(instruction);
            }
        }
        Ok(r)
    }

    fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    fn peek_kind(&self) -> Option<&'a TokenKind> {
        self.tokens.get(self.pos).map(|token| &token.kind)
    }

    fn take_word(&mut self, word: Word) -> bool {
        if self.peek_kind() == Some(&TokenKind::Word(word)) {
            self.pos += 1;
            return true;
        }
        false
    }

    fn take_number(&mut self) -> Option<u32> {
        if let Some(TokenKind::Literal(Literal::Integer(n))) = self.peek_kind() {
            let n = *n;
            self.pos += 1;
            return Some(n);
        }
        None
    }

    fn take_string(&mut self) -> Option<String> {
        if let Some(TokenKind::Literal(Literal::String(s))) = self.peek_kind() {
            let s = s.clone();
            self.pos += 1;
            return Some(s);
        }
        None
    }

    fn take_ident(&mut self) -> Option<String> {
        if let Some(TokenKind::Ident(s)) = self.peek_kind() {
            let s = s.clone();
            self.pos += 1;
            return Some(s);
        }
        None
    }

    fn take_cell_ref(&mut self) -> Option<usize> {
        if let Some(TokenKind::CellRef(n)) = self.peek_kind() {
            let n = *n;
            self.pos += 1;
            return Some(n);
        }
        None
    }

    fn take_operator(&mut self) -> Option<Operator> {
        if let Some(TokenKind::Operator(op)) = self.peek_kind() {
            let op = *op;
            self.pos += 1;
            return Some(op);
        }
        None
    }

    fn statement(&mut self) -> Result<Option<Instruction>> {
        let token = match self.next() {
            Some(token) => token,
            None => return Ok(None),
        };
        let line = token.line;
        use Word::*;
        let instruction = match &token.kind {
            TokenKind::Word(word) => match word {
                Ironman => Some(Instruction::Inc),
                Batman => Some(Instruction::Dec),
                Superman => Some(Instruction::MoveRight),
                Wonderwoman => Some(Instruction::MoveLeft),
                Thor => Some(Instruction::PrintChar),
                Thornum => Some(Instruction::PrintNum),
                Hulk => Some(self.read()),
                Blackpanther => Some(self.store()),
                Captainamerica => Some(Instruction::PrintBuf(self.take_ident())),
                Starlord => Some(self.print_text(line)?),
                Deadpool => Some(Instruction::Rewind),
                Loki => Some(Instruction::Wipe),
                Doctorstrange => Some(self.dim(line)?),
                Falcon => Some(Instruction::Label(
                    self.take_ident().map(|name| strip_colon(&name)),
                )),
                Hawkeye => Some(Instruction::Jump(self.take_ident())),
                Spiderman => Some(self.branch()),
                Add => Some(self.arithmetic(true)),
                Sub => Some(self.arithmetic(false)),
                Thanos => Some(Instruction::Halt),
                // `flash` builds nothing; its name and body tokens are
                // re-parsed as ordinary statements right here
                Flash | Vision | Into | Empty => None,
            },
            TokenKind::Ident(name) => {
                if self.tables.is_loop(name) {
                    Some(Instruction::Call(name.clone()))
                } else {
                    None
                }
            }
            TokenKind::Operator(_) | TokenKind::Literal(_) | TokenKind::CellRef(_) => None,
        };
        Ok(instruction)
    }

    fn read(&mut self) -> Instruction {
        if let Some(n) = self.take_number() {
            Instruction::Read(Some(Input::Number(n)))
        } else if let Some(s) = self.take_string() {
            Instruction::Read(Some(Input::Text(s)))
        } else {
            Instruction::Read(None)
        }
    }

    fn store(&mut self) -> Instruction {
        let mut target = None;
        if self.take_word(Word::Into) {
            if let Some(name) = self.take_ident() {
                target = Some(Target::Name(name));
            } else if let Some(n) = self.take_number() {
                target = Some(Target::Offset(n));
            }
        }
        let content = self.take_string();
        Instruction::Store { target, content }
    }

    fn print_text(&mut self, line: usize) -> Result<Instruction> {
        match self.take_string() {
            Some(s) => Ok(Instruction::PrintText(s)),
            None => Err(error!(ExpectedString, line; "AFTER starlord")),
        }
    }

    fn dim(&mut self, line: usize) -> Result<Instruction> {
        let size = self.take_number();
        match self.take_ident() {
            Some(name) => Ok(Instruction::Dim { size, name }),
            None => Err(error!(ExpectedArrayName, line; "AFTER doctorstrange")),
        }
    }

    fn branch(&mut self) -> Instruction {
        let target = self.take_ident();
        let left = if self.take_word(Word::Vision) {
            Some(Value::Cell)
        } else {
            self.take_number().map(Value::Number)
        };
        let op = self.take_operator();
        let right = if self.take_word(Word::Empty) {
            Some(Value::Empty)
        } else if let Some(n) = self.take_number() {
            Some(Value::Number(n))
        } else if self.take_word(Word::Vision) {
            Some(Value::Cell)
        } else {
            None
        };
        Instruction::BranchIf {
            target,
            left,
            op,
            right,
        }
    }

    fn arithmetic(&mut self, is_add: bool) -> Instruction {
        let left = self.value();
        let right = self.value();
        if is_add {
            Instruction::Add(left, right)
        } else {
            Instruction::Sub(left, right)
        }
    }

    fn value(&mut self) -> Option<Value> {
        if self.take_word(Word::Vision) {
            Some(Value::Cell)
        } else if let Some(n) = self.take_number() {
            Some(Value::Number(n))
        } else {
            self.take_cell_ref().map(Value::CellRef)
        }
    }
}

fn strip_colon(name: &str) -> String {
    name.strip_suffix(':').unwrap_or(name).to_string()
}
