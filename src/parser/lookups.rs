use std::collections::HashMap;

use crate::{
    ast::{
        ast::{Node, Value},
        statements::Statements,
    },
    errors::errors::Error,
};

use super::{
    expr::*,
    parser::{Parser, SymbolToken},
    stmt::*,
};

/// How tightly a symbol binds to the expression on its left. Higher binds
/// tighter.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Default, Hash)]
pub struct BindingPower(pub u8);

impl BindingPower {
    pub const DEFAULT: BindingPower = BindingPower(0);
    pub const ASSIGNMENT: BindingPower = BindingPower(10);
    pub const TERNARY: BindingPower = BindingPower(20);
    pub const LOGICAL: BindingPower = BindingPower(40);
    pub const RELATIONAL: BindingPower = BindingPower(50);
    pub const ADDITIVE: BindingPower = BindingPower(60);
    pub const MULTIPLICATIVE: BindingPower = BindingPower(70);
    pub const UNARY: BindingPower = BindingPower(80);
    pub const MEMBER: BindingPower = BindingPower(90);
    pub const CALL: BindingPower = BindingPower(90);

    /// The threshold a right-associative operator parses its right operand
    /// at, so that an equal-precedence operator nests on the right.
    pub fn weaker(self) -> BindingPower {
        BindingPower(self.0.saturating_sub(1))
    }
}

pub type StmtHandler = fn(&mut Parser, SymbolToken) -> Result<Statements, Error>;
pub type NUDHandler = fn(&mut Parser, SymbolToken) -> Result<Node, Error>;
pub type LEDHandler = fn(&mut Parser, SymbolToken, Node, BindingPower) -> Result<Node, Error>;

/// Everything the parser knows about one symbol id.
#[derive(Debug, Clone)]
pub struct Symbol {
    pub id: String,
    pub lbp: BindingPower,
    pub nud: Option<NUDHandler>,
    pub led: Option<LEDHandler>,
    /// The binding power the infix production was attached with. Raising
    /// `lbp` later does not change it.
    pub led_bp: BindingPower,
    pub std: Option<StmtHandler>,
    /// The value of a named constant such as `true` or `pi`.
    pub constant: Option<Value>,
}

impl Symbol {
    fn new(id: &str) -> Self {
        Symbol {
            id: id.to_string(),
            lbp: BindingPower::DEFAULT,
            nud: None,
            led: None,
            led_bp: BindingPower::DEFAULT,
            std: None,
            constant: None,
        }
    }
}

/// The symbol registry: operator and keyword text mapped to its productions.
///
/// Built once before parsing and read-only afterwards, so one table can be
/// shared by any number of parsers.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable::default()
    }

    /// A table holding the full grammar.
    pub fn grammar() -> Self {
        let mut table = SymbolTable::new();
        create_token_lookups(&mut table);
        table
    }

    pub fn lookup(&self, id: &str) -> Option<&Symbol> {
        self.symbols.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.symbols.contains_key(id)
    }

    pub fn binding_power(&self, id: &str) -> BindingPower {
        self.lookup(id).map(|symbol| symbol.lbp).unwrap_or_default()
    }

    /// Returns the symbol for `id`, creating it if needed. A second
    /// registration can raise the binding power but never lowers it.
    pub fn register(&mut self, id: &str, binding_power: BindingPower) -> &mut Symbol {
        let symbol = self
            .symbols
            .entry(id.to_string())
            .or_insert_with(|| Symbol::new(id));
        if binding_power > symbol.lbp {
            symbol.lbp = binding_power;
        }
        symbol
    }

    /// Registers a prefix production.
    pub fn nud(&mut self, id: &str, nud_fn: NUDHandler) -> &mut Symbol {
        let symbol = self.register(id, BindingPower::DEFAULT);
        symbol.nud = Some(nud_fn);
        symbol
    }

    /// Registers an infix or postfix production.
    pub fn led(&mut self, id: &str, binding_power: BindingPower, led_fn: LEDHandler) -> &mut Symbol {
        let symbol = self.register(id, binding_power);
        symbol.led = Some(led_fn);
        symbol.led_bp = binding_power;
        symbol
    }

    /// Registers a statement production.
    pub fn stmt(&mut self, id: &str, stmt_fn: StmtHandler) -> &mut Symbol {
        let symbol = self.register(id, BindingPower::DEFAULT);
        symbol.std = Some(stmt_fn);
        symbol
    }

    /// A left-associative binary operator.
    pub fn infix(&mut self, id: &str, binding_power: BindingPower) -> &mut Symbol {
        self.led(id, binding_power, parse_binary_expr)
    }

    /// A right-associative binary operator.
    pub fn infix_right(&mut self, id: &str, binding_power: BindingPower) -> &mut Symbol {
        self.led(id, binding_power, parse_binary_right_expr)
    }

    /// A unary prefix operator whose operand binds at [`BindingPower::UNARY`].
    pub fn prefix(&mut self, id: &str) -> &mut Symbol {
        self.nud(id, parse_prefix_expr)
    }

    pub fn assignment(&mut self, id: &str) -> &mut Symbol {
        self.led(id, BindingPower::ASSIGNMENT, parse_assignment_expr)
    }

    pub fn constant(&mut self, id: &str, value: Value) -> &mut Symbol {
        let symbol = self.nud(id, parse_constant_expr);
        symbol.constant = Some(value);
        symbol
    }
}

pub fn create_token_lookups(table: &mut SymbolTable) {
    // Structural symbols
    for id in [":", ";", ",", ")", "]", "}", "else", "(end)"] {
        table.register(id, BindingPower::DEFAULT);
    }

    table.nud("(name)", parse_name_expr);
    table.nud("(literal)", parse_literal_expr);
    table.nud("this", parse_this_expr);

    // Additive and multiplicative
    table.infix("+", BindingPower::ADDITIVE);
    table.infix("-", BindingPower::ADDITIVE);
    table.infix("*", BindingPower::MULTIPLICATIVE);
    table.infix("/", BindingPower::MULTIPLICATIVE);

    // Relational
    table.infix("===", BindingPower::RELATIONAL);
    table.infix("!==", BindingPower::RELATIONAL);
    table.infix("<", BindingPower::RELATIONAL);
    table.infix("<=", BindingPower::RELATIONAL);
    table.infix(">", BindingPower::RELATIONAL);
    table.infix(">=", BindingPower::RELATIONAL);

    table.led("?", BindingPower::TERNARY, parse_ternary_expr);

    // Member
    table.led(".", BindingPower::MEMBER, parse_member_expr);
    table.led("[", BindingPower::MEMBER, parse_index_expr);

    // Logical
    table.infix_right("&&", BindingPower::LOGICAL);
    table.infix_right("||", BindingPower::LOGICAL);

    // Prefix
    table.prefix("-");
    table.prefix("!");
    table.prefix("typeof");
    table.nud("(", parse_grouping_expr);

    table.assignment("=");
    table.assignment("+=");
    table.assignment("-=");

    table.constant("true", Value::Bool(true));
    table.constant("false", Value::Bool(false));
    table.constant("null", Value::Null);
    table.constant("pi", Value::Number(std::f64::consts::PI));

    // Statements
    table.stmt("{", parse_block_stmt);
    table.stmt("var", parse_var_decl_stmt);
    table.stmt("while", parse_while_stmt);
    table.stmt("if", parse_if_stmt);
    table.stmt("break", parse_break_stmt);
    table.stmt("return", parse_return_stmt);

    table.nud("function", parse_function_expr);

    table.led("(", BindingPower::CALL, parse_call_expr);
    table.nud("[", parse_array_expr);
    table.nud("{", parse_object_expr);
}
