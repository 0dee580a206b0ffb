use super::runtime;
use crate::lang::ast::{Input, Instruction, Target, Value};
use crate::lang::Tables;

/// Lower the instruction sequence into complete C source text. Lowering
/// is 1:1 and purely syntactic; generation never fails. Incomplete
/// statements (a conditional jump missing an operand, a jump with no
/// target) lower to a diagnostic comment instead of code.
pub fn generate(instructions: &[Instruction], tables: &Tables) -> String {
    let mut gen = Generator {
        code: runtime::prologue(tables),
        tables,
    };
    for instruction in instructions {
        gen.statement(instruction);
    }
    gen.code.push_str(runtime::EPILOGUE);
    gen.code
}

struct Generator<'a> {
    code: String,
    tables: &'a Tables,
}

impl<'a> Generator<'a> {
    fn push(&mut self, stmt: &str) {
        self.code.push_str("    ");
        self.code.push_str(stmt);
        self.code.push('\n');
    }

    fn statement(&mut self, instruction: &Instruction) {
        use Instruction::*;
        match instruction {
            Inc => self.push("tape[ptr]++;"),
            Dec => self.push("tape[ptr]--;"),
            MoveRight => self.push("ptr++;"),
            MoveLeft => self.push("ptr--;"),
            PrintChar => self.push("thor();"),
            PrintNum => self.push("thornum();"),
            Read(input) => self.read(input),
            Store { target, content } => self.store(target, content),
            PrintBuf(target) => self.print_buf(target),
            PrintText(text) => {
                // text is embedded verbatim, quotes and all
                self.push(&format!("printf(\"{}\\n\");", text));
            }
            Rewind => self.push("ptr = 0;"),
            Wipe => {
                self.push("tape[ptr] = 0;");
                self.push("printf(\"Loki cleared cell %d\\n\", ptr);");
            }
            Dim { .. } => {} // buffer already declared in the prologue
            Label(name) => match name {
                Some(name) => {
                    self.code.push_str(name);
                    self.code.push_str(":\n");
                }
                None => self.push("/* falcon: missing label name */"),
            },
            Jump(target) => match target {
                Some(target) => {
                    self.check_target(target);
                    self.push(&format!("goto {};", target));
                }
                None => self.push("/* hawkeye: missing jump target */"),
            },
            BranchIf {
                target,
                left,
                op,
                right,
            } => self.branch(target, left, op, right),
            Add(left, right) => self.arithmetic("+=", left, right),
            Sub(left, right) => self.arithmetic("-=", left, right),
            Halt => {
                self.push("printf(\"Thanos snapped his fingers...\\n\");");
                self.push("return 0;");
            }
            Call(name) => self.push(&format!("// Flash loop: {}", name)),
        }
    }

    fn read(&mut self, input: &Option<Input>) {
        match input {
            Some(Input::Number(n)) => self.push(&format!("hulk({}, 0);", n)),
            Some(Input::Text(s)) => match s.chars().next() {
                Some(ch) => self.push(&format!("hulk(-1, '{}');", ch)),
                None => self.push("hulk(-1, 0);"),
            },
            None => self.push("hulk(-1, 0);"),
        }
    }

    fn store(&mut self, target: &Option<Target>, content: &Option<String>) {
        let target_expr = match target {
            None => "tape + ptr".to_string(),
            Some(Target::Name(name)) if self.tables.is_array(name) => {
                format!("doctorstrange_{}", name)
            }
            // anything else addresses the tape directly
            Some(Target::Name(name)) => format!("tape + {}", name),
            Some(Target::Offset(n)) => format!("tape + {}", n),
        };
        let content_expr = match content {
            Some(text) => format!("\"{}\"", text),
            None => "NULL".to_string(),
        };
        self.push(&format!("blackpanther({}, {});", target_expr, content_expr));
    }

    fn print_buf(&mut self, target: &Option<String>) {
        let source_expr = match target {
            Some(name) if self.tables.is_array(name) => format!("doctorstrange_{}", name),
            // unknown names fall back to the cell at the cursor
            _ => "tape + ptr".to_string(),
        };
        self.push(&format!("captainamerica({});", source_expr));
    }

    fn branch(
        &mut self,
        target: &Option<String>,
        left: &Option<Value>,
        op: &Option<crate::lang::Operator>,
        right: &Option<Value>,
    ) {
        let (target, left, op, right) = match (target, left, op, right) {
            (Some(target), Some(left), Some(op), Some(right)) => (target, left, op, right),
            _ => {
                self.push("/* spiderman: incomplete comparison */");
                return;
            }
        };
        self.check_target(target);
        self.push(&format!(
            "if ({} {} {}) {{",
            amount(left),
            op,
            amount(right)
        ));
        self.push(&format!("    goto {};", target));
        self.push("}");
    }

    /// The goto is emitted either way; the C compiler reports undefined
    /// labels with the exact name.
    fn check_target(&self, target: &str) {
        if !self.tables.is_label(target) {
            log::warn!("jump to undeclared label '{}'", target);
        }
    }

    fn arithmetic(&mut self, op: &str, left: &Option<Value>, right: &Option<Value>) {
        let (left, right) = match (left, right) {
            (Some(left), Some(right)) => (left, right),
            _ => {
                self.push(&format!("/* {}: missing operand */", op));
                return;
            }
        };
        self.push(&format!("{} {} {};", place(left), op, amount(right)));
    }
}

/// Render an operand as an assignable tape location. A bare integer on
/// the left of `add`/`sub` addresses the tape at that offset.
fn place(value: &Value) -> String {
    use Value::*;
    match value {
        Cell => "tape[ptr]".to_string(),
        Number(n) => format!("tape[{}]", n),
        CellRef(n) => format!("tape[{}]", n),
        Empty => "tape[0]".to_string(),
    }
}

/// Render an operand as an rvalue.
fn amount(value: &Value) -> String {
    use Value::*;
    match value {
        Cell => "tape[ptr]".to_string(),
        Number(n) => format!("{}", n),
        CellRef(n) => format!("tape[{}]", n),
        Empty => "0".to_string(),
    }
}
