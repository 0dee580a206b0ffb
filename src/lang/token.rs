use super::LineNumber;

/// A single lexical token. The `indent` depth is recorded only on the
/// first token of a physical line; everywhere else it is `None`, which
/// counts as depth 0 when testing for top-levelness.
#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub line: LineNumber,
    pub indent: Option<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, line: LineNumber) -> Token {
        Token {
            kind,
            line,
            indent: None,
        }
    }

    pub fn is_top_level(&self) -> bool {
        self.indent.unwrap_or(0) == 0
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Token({}, line {})", self.kind, self.line)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum TokenKind {
    Word(Word),
    Operator(Operator),
    Literal(Literal),
    Ident(String),
    CellRef(usize),
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use TokenKind::*;
        match self {
            Word(w) => write!(f, "{}", w),
            Operator(op) => write!(f, "{}", op),
            Literal(lit) => write!(f, "{}", lit),
            Ident(s) => write!(f, "{}", s),
            CellRef(n) => write!(f, "#{}", n),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Integer(u32),
    String(String),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Literal::*;
        match self {
            Integer(n) => write!(f, "{}", n),
            String(s) => write!(f, "\"{}\"", s),
        }
    }
}

/// The fixed keyword lexicon. One keyword per opcode role, plus the
/// reserved markers `vision` (current cell), `empty` (zero), and `into`
/// (explicit store target).
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Word {
    Ironman,
    Batman,
    Superman,
    Wonderwoman,
    Flash,
    Spiderman,
    Thor,
    Thornum,
    Hulk,
    Doctorstrange,
    Blackpanther,
    Captainamerica,
    Vision,
    Starlord,
    Deadpool,
    Loki,
    Falcon,
    Hawkeye,
    Thanos,
    Add,
    Sub,
    Into,
    Empty,
}

impl Word {
    pub fn from_string(s: &str) -> Option<Word> {
        use Word::*;
        match s {
            "ironman" => Some(Ironman),
            "batman" => Some(Batman),
            "superman" => Some(Superman),
            "wonderwoman" => Some(Wonderwoman),
            "flash" => Some(Flash),
            "spiderman" => Some(Spiderman),
            "thor" => Some(Thor),
            "thornum" => Some(Thornum),
            "hulk" => Some(Hulk),
            "doctorstrange" => Some(Doctorstrange),
            "blackpanther" => Some(Blackpanther),
            "captainamerica" => Some(Captainamerica),
            "vision" => Some(Vision),
            "starlord" => Some(Starlord),
            "deadpool" => Some(Deadpool),
            "loki" => Some(Loki),
            "falcon" => Some(Falcon),
            "hawkeye" => Some(Hawkeye),
            "thanos" => Some(Thanos),
            "add" => Some(Add),
            "sub" => Some(Sub),
            "into" => Some(Into),
            "empty" => Some(Empty),
            _ => None,
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Ironman => write!(f, "ironman"),
            Batman => write!(f, "batman"),
            Superman => write!(f, "superman"),
            Wonderwoman => write!(f, "wonderwoman"),
            Flash => write!(f, "flash"),
            Spiderman => write!(f, "spiderman"),
            Thor => write!(f, "thor"),
            Thornum => write!(f, "thornum"),
            Hulk => write!(f, "hulk"),
            Doctorstrange => write!(f, "doctorstrange"),
            Blackpanther => write!(f, "blackpanther"),
            Captainamerica => write!(f, "captainamerica"),
            Vision => write!(f, "vision"),
            Starlord => write!(f, "starlord"),
            Deadpool => write!(f, "deadpool"),
            Loki => write!(f, "loki"),
            Falcon => write!(f, "falcon"),
            Hawkeye => write!(f, "hawkeye"),
            Thanos => write!(f, "thanos"),
            Add => write!(f, "add"),
            Sub => write!(f, "sub"),
            Into => write!(f, "into"),
            Empty => write!(f, "empty"),
        }
    }
}

/// Relational operators. A bare `=` in source normalizes to `Equal`;
/// `Display` gives the C spelling used by the code generator.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Equal,
    NotEqual,
}

impl Operator {
    pub fn from_string(s: &str) -> Option<Operator> {
        use Operator::*;
        match s {
            "<" => Some(Less),
            "<=" => Some(LessEqual),
            ">" => Some(Greater),
            ">=" => Some(GreaterEqual),
            "=" | "==" => Some(Equal),
            "!=" => Some(NotEqual),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
            Equal => write!(f, "=="),
            NotEqual => write!(f, "!="),
        }
    }
}
