use super::Operator;

/// One instruction per recognized statement. The sequence is flat; all
/// control flow is encoded by label/jump pairs resolved in the generated
/// C source, never by nesting here.
#[derive(Debug, PartialEq, Clone)]
pub enum Instruction {
    /// `ironman`: increment the current cell.
    Inc,
    /// `batman`: decrement the current cell.
    Dec,
    /// `superman`: move the cursor right.
    MoveRight,
    /// `wonderwoman`: move the cursor left.
    MoveLeft,
    /// `thor`: print the current cell as a character.
    PrintChar,
    /// `thornum`: print the current cell as a number.
    PrintNum,
    /// `hulk`: read one byte into the current cell; `None` reads
    /// interactively.
    Read(Option<Input>),
    /// `blackpanther`: store bytes into a target (or the current cell);
    /// absent content means interactive input.
    Store {
        target: Option<Target>,
        content: Option<String>,
    },
    /// `captainamerica`: print zero-terminated bytes from a named array
    /// or the tape at the cursor.
    PrintBuf(Option<String>),
    /// `starlord`: print a literal string.
    PrintText(String),
    /// `deadpool`: reset the cursor to origin.
    Rewind,
    /// `loki`: zero the current cell and announce it.
    Wipe,
    /// `doctorstrange`: array declaration; a no-op at generation time
    /// since the resolver already populated the array table.
    Dim { size: Option<u32>, name: String },
    /// `falcon`: define a label (trailing colon stripped).
    Label(Option<String>),
    /// `hawkeye`: unconditional jump.
    Jump(Option<String>),
    /// `spiderman`: conditional jump. All parts are optional at build
    /// time; generation refuses incomplete comparisons.
    BranchIf {
        target: Option<String>,
        left: Option<Value>,
        op: Option<Operator>,
        right: Option<Value>,
    },
    /// `add`: add the right operand into the left location.
    Add(Option<Value>, Option<Value>),
    /// `sub`: subtract the right operand from the left location.
    Sub(Option<Value>, Option<Value>),
    /// `thanos`: print the announcement and return from the entry point.
    Halt,
    /// A bare identifier naming a known loop. Emits only a marker
    /// comment; the captured body is never inlined.
    Call(String),
}

/// Operand of a comparison or arithmetic statement.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Value {
    /// `vision`: the cell at the cursor.
    Cell,
    /// An integer literal.
    Number(u32),
    /// `#n`: the tape byte at a fixed offset.
    CellRef(usize),
    /// `empty`: the zero marker.
    Empty,
}

/// Explicit store target introduced by `into`.
#[derive(Debug, PartialEq, Clone)]
pub enum Target {
    Name(String),
    Offset(u32),
}

/// Literal operand of `hulk`.
#[derive(Debug, PartialEq, Clone)]
pub enum Input {
    Number(u32),
    Text(String),
}
