use crate::{
    ast::ast::{Node, NodeKind, Value},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::BindingPower,
    parser::{Parser, SymbolToken},
    stmt::parse_stmts,
};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Node, Error> {
    // First parse NUD
    let token = parser.advance()?;
    let Some(nud) = parser.symbols().lookup(&token.id).and_then(|symbol| symbol.nud) else {
        return Err(Error::new(
            ErrorImpl::UndefinedPrefix {
                token: token.value().to_string(),
            },
            token.position(),
        ));
    };

    let mut left = nud(parser, token)?;

    // While the lookahead binds tighter than bp, it takes the current lhs as its left operand
    while parser.current_binding_power() > bp {
        let token = parser.advance()?;
        let Some((led, binding_power)) = parser
            .symbols()
            .lookup(&token.id)
            .and_then(|symbol| symbol.led.map(|led| (led, symbol.led_bp)))
        else {
            return Err(Error::new(
                ErrorImpl::MissingOperator {
                    token: token.value().to_string(),
                },
                token.position(),
            ));
        };

        left = led(parser, token, left, binding_power)?;
    }

    Ok(left)
}

pub fn parse_name_expr(_parser: &mut Parser, token: SymbolToken) -> Result<Node, Error> {
    Ok(token.as_name())
}

pub fn parse_literal_expr(_parser: &mut Parser, token: SymbolToken) -> Result<Node, Error> {
    let value = match token.kind() {
        TokenKind::Number => match token.value().parse() {
            Ok(number) => Value::Number(number),
            Err(_) => {
                return Err(Error::new(
                    ErrorImpl::BadNumber {
                        token: token.value().to_string(),
                    },
                    token.position(),
                ))
            }
        },
        _ => Value::String(token.value().to_string()),
    };

    Ok(Node::literal(value, token.position()))
}

pub fn parse_this_expr(parser: &mut Parser, token: SymbolToken) -> Result<Node, Error> {
    parser.reserve(&token)?;
    Ok(Node::new(token.id, NodeKind::This, token.token.position))
}

pub fn parse_constant_expr(parser: &mut Parser, token: SymbolToken) -> Result<Node, Error> {
    parser.reserve(&token)?;
    let value = parser
        .symbols()
        .lookup(&token.id)
        .and_then(|symbol| symbol.constant.clone())
        .unwrap_or(Value::Null);

    Ok(Node::new(
        token.id,
        NodeKind::Literal(value),
        token.token.position,
    ))
}

pub fn parse_prefix_expr(parser: &mut Parser, token: SymbolToken) -> Result<Node, Error> {
    parser.reserve(&token)?;
    let operand = parse_expr(parser, BindingPower::UNARY)?;

    Ok(Node::new(
        token.id,
        NodeKind::Prefix(Box::new(operand)),
        token.token.position,
    ))
}

pub fn parse_grouping_expr(parser: &mut Parser, _token: SymbolToken) -> Result<Node, Error> {
    let expr = parse_expr(parser, BindingPower::DEFAULT)?;
    parser.expect(")")?;

    Ok(expr)
}

pub fn parse_array_expr(parser: &mut Parser, token: SymbolToken) -> Result<Node, Error> {
    let mut items = vec![];

    if parser.current_id() != "]" {
        loop {
            items.push(parse_expr(parser, BindingPower::DEFAULT)?);
            if parser.current_id() != "," {
                break;
            }
            parser.expect(",")?;
        }
    }
    parser.expect("]")?;

    Ok(Node::new(
        token.id,
        NodeKind::Array(items),
        token.token.position,
    ))
}

pub fn parse_object_expr(parser: &mut Parser, token: SymbolToken) -> Result<Node, Error> {
    let mut entries = vec![];

    if parser.current_id() != "}" {
        loop {
            let key = parser.current_token().clone();
            if !key.is_name() && !key.token.is_literal() {
                return Err(Error::new(
                    ErrorImpl::BadKey {
                        found: key.value().to_string(),
                    },
                    key.position(),
                ));
            }
            parser.advance()?;
            parser.expect(":")?;

            let mut value = parse_expr(parser, BindingPower::DEFAULT)?;
            value.key = Some(key.token.value);
            entries.push(value);

            if parser.current_id() != "," {
                break;
            }
            parser.expect(",")?;
        }
    }
    parser.expect("}")?;

    Ok(Node::new(
        token.id,
        NodeKind::Object(entries),
        token.token.position,
    ))
}

/// `function name(parameters) { body }`. The name and the parameters are
/// declared in the function's own scope.
pub fn parse_function_expr(parser: &mut Parser, token: SymbolToken) -> Result<Node, Error> {
    parser.scopes_mut().push();

    let mut name = None;
    if parser.current_token().is_name() {
        let name_token = parser.current_token().clone();
        parser.scopes_mut().define(name_token.as_name())?;
        name = Some(name_token.token.value);
        parser.advance()?;
    }

    parser.expect("(")?;
    let mut parameters = vec![];
    if parser.current_id() != ")" {
        loop {
            let parameter = parser.current_token().clone();
            if !parameter.is_name() {
                return Err(Error::new(
                    ErrorImpl::ExpectedParameterName {
                        found: parameter.value().to_string(),
                    },
                    parameter.position(),
                ));
            }
            parameters.push(parser.scopes_mut().define(parameter.as_name())?);
            parser.advance()?;

            if parser.current_id() != "," {
                break;
            }
            parser.expect(",")?;
        }
    }
    parser.expect(")")?;

    parser.expect("{")?;
    let body = parse_stmts(parser)?;
    parser.expect_scope_end("}")?;

    Ok(Node::new(
        token.id,
        NodeKind::Function {
            name,
            parameters,
            body,
        },
        token.token.position,
    ))
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    token: SymbolToken,
    left: Node,
    bp: BindingPower,
) -> Result<Node, Error> {
    let right = parse_expr(parser, bp)?;

    Ok(Node::new(
        token.id,
        NodeKind::Binary(Box::new(left), Box::new(right)),
        token.token.position,
    ))
}

pub fn parse_binary_right_expr(
    parser: &mut Parser,
    token: SymbolToken,
    left: Node,
    bp: BindingPower,
) -> Result<Node, Error> {
    let right = parse_expr(parser, bp.weaker())?;

    Ok(Node::new(
        token.id,
        NodeKind::Binary(Box::new(left), Box::new(right)),
        token.token.position,
    ))
}

pub fn parse_assignment_expr(
    parser: &mut Parser,
    token: SymbolToken,
    left: Node,
    bp: BindingPower,
) -> Result<Node, Error> {
    if !left.is_lvalue() {
        return Err(Error::new(ErrorImpl::BadLvalue, left.position));
    }
    let value = parse_expr(parser, bp.weaker())?;

    Ok(Node::new(
        token.id,
        NodeKind::Assignment(Box::new(left), Box::new(value)),
        token.token.position,
    ))
}

pub fn parse_ternary_expr(
    parser: &mut Parser,
    token: SymbolToken,
    condition: Node,
    _bp: BindingPower,
) -> Result<Node, Error> {
    let consequent = parse_expr(parser, BindingPower::DEFAULT)?;
    parser.expect(":")?;
    let alternative = parse_expr(parser, BindingPower::DEFAULT)?;

    Ok(Node::new(
        token.id,
        NodeKind::Ternary(
            Box::new(condition),
            Box::new(consequent),
            Box::new(alternative),
        ),
        token.token.position,
    ))
}

pub fn parse_member_expr(
    parser: &mut Parser,
    token: SymbolToken,
    object: Node,
    _bp: BindingPower,
) -> Result<Node, Error> {
    let property = parser.current_token().clone();
    if !property.is_name() {
        return Err(Error::new(
            ErrorImpl::ExpectedPropertyName {
                found: property.value().to_string(),
            },
            property.position(),
        ));
    }
    parser.advance()?;

    Ok(Node::new(
        token.id,
        NodeKind::Member(
            Box::new(object),
            Box::new(Node::literal(
                Value::String(property.token.value),
                property.token.position,
            )),
        ),
        token.token.position,
    ))
}

pub fn parse_index_expr(
    parser: &mut Parser,
    token: SymbolToken,
    object: Node,
    _bp: BindingPower,
) -> Result<Node, Error> {
    let index = parse_expr(parser, BindingPower::DEFAULT)?;
    parser.expect("]")?;

    Ok(Node::new(
        token.id,
        NodeKind::Index(Box::new(object), Box::new(index)),
        token.token.position,
    ))
}

pub fn parse_call_expr(
    parser: &mut Parser,
    token: SymbolToken,
    callee: Node,
    _bp: BindingPower,
) -> Result<Node, Error> {
    if !callee.is_callable() {
        return Err(Error::new(ErrorImpl::ExpectedVariableName, callee.position));
    }

    let mut arguments = vec![];
    if parser.current_id() != ")" {
        loop {
            arguments.push(parse_expr(parser, BindingPower::DEFAULT)?);
            if parser.current_id() != "," {
                break;
            }
            parser.expect(",")?;
        }
    }
    parser.expect(")")?;

    Ok(Node::new(
        token.id,
        NodeKind::Call(Box::new(callee), arguments),
        token.token.position,
    ))
}
