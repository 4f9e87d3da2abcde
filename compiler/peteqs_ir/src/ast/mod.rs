//! AST node types.
//!
//! Statements are a flat enum per construct; block constructs own their
//! bodies as plain `Vec<Stmt>` since a PETEQS program is built once per run
//! and never mutated afterwards.

mod operators;

pub use operators::{BinaryOp, UnaryOp};

/// Name of the implicit variable a function assigns its result to.
pub const RESULT_BINDING: &str = "resultado";

/// Expression node.
#[derive(Clone, PartialEq, Debug)]
pub enum Expr {
    /// `42`, `3.14`
    Number(f64),
    /// `'texto'`, already unescaped
    Str(String),
    /// `VERDADEIRO` / `FALSO`
    Bool(bool),
    /// Variable reference
    Var(String),
    /// `vetor[indice]`
    Index { name: String, index: Box<Expr> },
    /// Binary operation: `left op right`
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Unary operation: `op operand`
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// Function call: `nome(args)`
    Call { name: String, args: Vec<Expr> },
}

impl Expr {
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }
}

/// Left-hand side of an assignment or a `LEIA` target.
#[derive(Clone, PartialEq, Debug)]
pub enum AssignTarget {
    /// `nome`
    Var(String),
    /// `nome[indice]`
    Element { name: String, index: Expr },
}

impl AssignTarget {
    /// Root variable name written by this target.
    pub fn name(&self) -> &str {
        match self {
            Self::Var(name) | Self::Element { name, .. } => name,
        }
    }
}

/// Whether a callable produces a value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CallableKind {
    /// `FUNÇÃO`: value taken from the reserved result binding.
    Function,
    /// `PROCEDIMENTO`: side effects only.
    Procedure,
}

impl CallableKind {
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Function => "FUNÇÃO",
            Self::Procedure => "PROCEDIMENTO",
        }
    }
}

/// A named, parameterized body of statements.
#[derive(Clone, PartialEq, Debug)]
pub struct Callable {
    pub name: String,
    pub params: Vec<String>,
    pub body: Vec<Stmt>,
    pub kind: CallableKind,
    /// Line of the `FUNÇÃO` / `PROCEDIMENTO` header.
    pub line: u32,
}

/// Statement with its source line.
#[derive(Clone, PartialEq, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub line: u32,
}

impl Stmt {
    pub fn new(kind: StmtKind, line: u32) -> Self {
        Stmt { kind, line }
    }
}

/// Statement kinds.
#[derive(Clone, PartialEq, Debug)]
pub enum StmtKind {
    /// `IMPRIMA a, b`
    Print(Vec<Expr>),
    /// `IMPRIMALN a, b`
    PrintLine(Vec<Expr>),
    /// `LEIA x, v[i]`
    Read(Vec<AssignTarget>),
    /// `x <- expr`
    Assign { name: String, value: Expr },
    /// `v[i] <- expr`
    ArrayAssign {
        name: String,
        index: Expr,
        value: Expr,
    },
    /// `SE cond ENTÃO ... [SENÃO ...] FIM SE`
    If {
        cond: Expr,
        then_body: Vec<Stmt>,
        else_body: Option<Vec<Stmt>>,
    },
    /// `PARA v <- a ATÉ b FAÇA ... FIM PARA`
    ForCount {
        var: String,
        start: Expr,
        end: Expr,
        body: Vec<Stmt>,
    },
    /// `ENQUANTO cond FAÇA ... FIM ENQUANTO`
    WhileCond { cond: Expr, body: Vec<Stmt> },
    /// `REPITA n VEZES ... FIM REPITA`
    RepeatN { count: Expr, body: Vec<Stmt> },
    /// `nome(args)` on its own line
    Call { name: String, args: Vec<Expr> },
    /// `RETORNE [expr]`
    Return(Option<Expr>),
    /// `PROCEDIMENTO ... FIM PROCEDIMENTO`
    ProcedureDef(Callable),
    /// `FUNÇÃO ... FIM FUNÇÃO`
    FunctionDef(Callable),
}

impl StmtKind {
    /// Statement name for trace output.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Print(_) => "Print",
            Self::PrintLine(_) => "PrintLine",
            Self::Read(_) => "Read",
            Self::Assign { .. } => "Assign",
            Self::ArrayAssign { .. } => "ArrayAssign",
            Self::If { .. } => "If",
            Self::ForCount { .. } => "ForCount",
            Self::WhileCond { .. } => "WhileCond",
            Self::RepeatN { .. } => "RepeatN",
            Self::Call { .. } => "CallStatement",
            Self::Return(_) => "Return",
            Self::ProcedureDef(_) => "ProcedureDef",
            Self::FunctionDef(_) => "FunctionDef",
        }
    }
}
