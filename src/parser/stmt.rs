use crate::{
    ast::{
        ast::{Node, NodeKind},
        statements::Statements,
    },
    errors::errors::{Error, ErrorImpl},
};

use super::{
    expr::parse_expr,
    lookups::BindingPower,
    parser::{Parser, SymbolToken},
};

pub fn parse_stmt(parser: &mut Parser) -> Result<Statements, Error> {
    let std = parser
        .symbols()
        .lookup(parser.current_id())
        .and_then(|symbol| symbol.std);
    if let Some(std) = std {
        let token = parser.advance()?;
        parser.reserve(&token)?;
        return std(parser, token);
    }

    let expr = parse_expr(parser, BindingPower::DEFAULT)?;
    if !expr.is_assignment() && !expr.is_call() {
        return Err(Error::new(ErrorImpl::BadExpressionStatement, expr.position));
    }
    parser.expect(";")?;

    Ok(expr.into())
}

/// Statements up to the next `}` or the end of input. A `var` statement can
/// produce several nodes; they are spliced into the list.
pub fn parse_stmts(parser: &mut Parser) -> Result<Statements, Error> {
    let mut statements = vec![];

    while !matches!(parser.current_id(), "}" | "(end)") {
        statements.extend(parse_stmt(parser)?.into_vec());
    }

    Ok(Statements::from_vec(statements))
}

/// `{ statements }` in its own scope, for the bodies of `if` and `while`.
pub fn parse_block(parser: &mut Parser) -> Result<Statements, Error> {
    parser.expect("{")?;
    parse_block_body(parser)
}

fn parse_block_body(parser: &mut Parser) -> Result<Statements, Error> {
    parser.scopes_mut().push();
    let body = parse_stmts(parser)?;
    parser.expect_scope_end("}")?;

    Ok(body)
}

/// Break and return must close their block.
fn expect_block_end(parser: &Parser) -> Result<(), Error> {
    if parser.current_id() != "}" {
        return Err(Error::new(
            ErrorImpl::UnreachableStatement,
            parser.current_token().position(),
        ));
    }
    Ok(())
}

pub fn parse_block_stmt(parser: &mut Parser, token: SymbolToken) -> Result<Statements, Error> {
    let body = parse_block_body(parser)?;
    if body.is_empty() {
        return Ok(Statements::Empty);
    }

    Ok(Node::new(token.id, NodeKind::Block(body), token.token.position).into())
}

pub fn parse_var_decl_stmt(parser: &mut Parser, _token: SymbolToken) -> Result<Statements, Error> {
    let mut declarations = vec![];

    loop {
        let name_token = parser.current_token().clone();
        if !name_token.is_name() {
            return Err(Error::new(
                ErrorImpl::ExpectedNewVariableName {
                    found: name_token.value().to_string(),
                },
                name_token.position(),
            ));
        }
        let name = parser.scopes_mut().define(name_token.as_name())?;
        parser.advance()?;

        if parser.current_id() == "=" {
            let assign = parser.advance()?;
            let value = parse_expr(parser, BindingPower::DEFAULT)?;
            declarations.push(Node::new(
                assign.id,
                NodeKind::Declaration(Box::new(name), Box::new(value)),
                assign.token.position,
            ));
        }

        if parser.current_id() != "," {
            break;
        }
        parser.expect(",")?;
    }
    parser.expect(";")?;

    Ok(Statements::from_vec(declarations))
}

pub fn parse_while_stmt(parser: &mut Parser, token: SymbolToken) -> Result<Statements, Error> {
    parser.expect("(")?;
    let condition = parse_expr(parser, BindingPower::DEFAULT)?;
    parser.expect(")")?;
    let body = parse_block(parser)?;

    Ok(Node::new(
        token.id,
        NodeKind::While(Box::new(condition), body),
        token.token.position,
    )
    .into())
}

pub fn parse_if_stmt(parser: &mut Parser, token: SymbolToken) -> Result<Statements, Error> {
    parser.expect("(")?;
    let condition = parse_expr(parser, BindingPower::DEFAULT)?;
    parser.expect(")")?;
    let then = parse_block(parser)?;

    let mut otherwise = Statements::Empty;
    if parser.current_id() == "else" {
        let else_token = parser.current_token().clone();
        parser.reserve(&else_token)?;
        parser.expect("else")?;
        otherwise = if parser.current_id() == "if" {
            parse_stmt(parser)?
        } else {
            parse_block(parser)?
        };
    }

    Ok(Node::new(
        token.id,
        NodeKind::If(Box::new(condition), then, otherwise),
        token.token.position,
    )
    .into())
}

pub fn parse_break_stmt(parser: &mut Parser, token: SymbolToken) -> Result<Statements, Error> {
    parser.expect(";")?;
    expect_block_end(parser)?;

    Ok(Node::new(token.id, NodeKind::Break, token.token.position).into())
}

pub fn parse_return_stmt(parser: &mut Parser, token: SymbolToken) -> Result<Statements, Error> {
    let mut value = None;
    if parser.current_id() != ";" {
        value = Some(Box::new(parse_expr(parser, BindingPower::DEFAULT)?));
    }
    parser.expect(";")?;
    expect_block_end(parser)?;

    Ok(Node::new(token.id, NodeKind::Return(value), token.token.position).into())
}
