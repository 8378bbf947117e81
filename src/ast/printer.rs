//! Tree printers.
//!
//! - [`dump`] renders an indented outline, one node per line, for people.
//! - [`to_source`] renders canonical, fully parenthesised source text that
//!   parses back to a structurally identical tree.

use super::{
    ast::{Node, NodeKind, Value},
    statements::Statements,
};

const INDENT: &str = "  ";

pub fn dump(statements: &Statements) -> String {
    if statements.is_empty() {
        return String::from("<empty program>\n");
    }

    let mut out = String::new();
    for node in statements {
        dump_node(&mut out, node, 0);
    }
    out
}

fn dump_node(out: &mut String, node: &Node, depth: usize) {
    out.push_str(&INDENT.repeat(depth));
    out.push_str(&format!("{} {}", node.arity(), node.id));

    match &node.kind {
        NodeKind::Literal(value) if node.id == "(literal)" => out.push_str(&format!(" {}", value)),
        NodeKind::Name(name) => out.push_str(&format!(" {}", name)),
        NodeKind::Function { name: Some(name), .. } => out.push_str(&format!(" {}", name)),
        _ => {}
    }
    if let Some(key) = &node.key {
        out.push_str(&format!(" key={:?}", key));
    }
    out.push_str(&format!(" @{}\n", node.position));

    let child = depth + 1;
    match &node.kind {
        NodeKind::Call(callee, arguments) => {
            dump_node(out, callee, child);
            dump_group(out, "arguments", arguments.iter(), child);
        }
        NodeKind::Array(items) => dump_group(out, "elements", items.iter(), child),
        NodeKind::Object(entries) => dump_group(out, "entries", entries.iter(), child),
        NodeKind::Block(body) => dump_group(out, "body", body.iter(), child),
        NodeKind::While(condition, body) => {
            dump_node(out, condition, child);
            dump_group(out, "body", body.iter(), child);
        }
        NodeKind::If(condition, then, otherwise) => {
            dump_node(out, condition, child);
            dump_group(out, "then", then.iter(), child);
            if !otherwise.is_empty() {
                dump_group(out, "else", otherwise.iter(), child);
            }
        }
        NodeKind::Function {
            parameters, body, ..
        } => {
            dump_group(out, "parameters", parameters.iter(), child);
            dump_group(out, "body", body.iter(), child);
        }
        _ => {
            for node in node.children() {
                dump_node(out, node, child);
            }
        }
    }
}

fn dump_group<'a>(
    out: &mut String,
    label: &str,
    nodes: impl ExactSizeIterator<Item = &'a Node>,
    depth: usize,
) {
    out.push_str(&INDENT.repeat(depth));
    if nodes.len() == 0 {
        out.push_str(&format!("[{}: none]\n", label));
        return;
    }

    out.push_str(&format!("[{}]\n", label));
    for node in nodes {
        dump_node(out, node, depth + 1);
    }
}

pub fn to_source(statements: &Statements) -> String {
    let mut out = String::new();
    for node in statements {
        out.push_str(&statement_source(node, 0));
        out.push('\n');
    }
    out
}

fn statement_source(node: &Node, depth: usize) -> String {
    let indent = INDENT.repeat(depth);

    match &node.kind {
        NodeKind::Declaration(name, value) => {
            format!("{}var {} = {};", indent, expression_source(name), expression_source(value))
        }
        NodeKind::Block(body) => format!("{}{}", indent, block_source(body, depth)),
        NodeKind::While(condition, body) => format!(
            "{}while ({}) {}",
            indent,
            expression_source(condition),
            block_source(body, depth)
        ),
        NodeKind::If(..) => format!("{}{}", indent, if_source(node, depth)),
        NodeKind::Break => format!("{}break;", indent),
        NodeKind::Return(None) => format!("{}return;", indent),
        NodeKind::Return(Some(value)) => format!("{}return {};", indent, expression_source(value)),
        _ => format!("{}{};", indent, expression_source(node)),
    }
}

fn if_source(node: &Node, depth: usize) -> String {
    let NodeKind::If(condition, then, otherwise) = &node.kind else {
        return expression_source(node);
    };

    let mut out = format!(
        "if ({}) {}",
        expression_source(condition),
        block_source(then, depth)
    );

    match otherwise.single() {
        Some(chained) if matches!(chained.kind, NodeKind::If(..)) => {
            out.push_str(" else ");
            out.push_str(&if_source(chained, depth));
        }
        _ if !otherwise.is_empty() => {
            out.push_str(" else ");
            out.push_str(&block_source(otherwise, depth));
        }
        _ => {}
    }
    out
}

fn block_source(body: &Statements, depth: usize) -> String {
    if body.is_empty() {
        return String::from("{}");
    }

    let mut out = String::from("{\n");
    for node in body {
        out.push_str(&statement_source(node, depth + 1));
        out.push('\n');
    }
    out.push_str(&INDENT.repeat(depth));
    out.push('}');
    out
}

fn expression_source(node: &Node) -> String {
    match &node.kind {
        // Named constants print as their name so they parse back to the same symbol.
        NodeKind::Literal(_) if node.id != "(literal)" => node.id.clone(),
        NodeKind::Literal(value) => value_source(value),
        NodeKind::Name(name) => name.clone(),
        NodeKind::This => String::from("this"),
        NodeKind::Prefix(operand) => format!("({} {})", node.id, expression_source(operand)),
        NodeKind::Array(items) => format!("[{}]", list_source(items)),
        NodeKind::Object(entries) => {
            let entries = entries
                .iter()
                .map(|entry| {
                    let key = entry.key.clone().unwrap_or_default();
                    format!("{}: {}", value_source(&Value::String(key)), expression_source(entry))
                })
                .collect::<Vec<_>>();
            format!("{{{}}}", entries.join(", "))
        }
        NodeKind::Binary(first, second)
        | NodeKind::Assignment(first, second)
        | NodeKind::Declaration(first, second) => format!(
            "({} {} {})",
            expression_source(first),
            node.id,
            expression_source(second)
        ),
        NodeKind::Member(object, property) => {
            let property = match &property.kind {
                NodeKind::Literal(Value::String(name)) => name.clone(),
                _ => expression_source(property),
            };
            format!("({}.{})", expression_source(object), property)
        }
        NodeKind::Index(object, index) => {
            format!("({}[{}])", expression_source(object), expression_source(index))
        }
        NodeKind::Call(callee, arguments) => {
            format!("({}({}))", expression_source(callee), list_source(arguments))
        }
        NodeKind::Ternary(condition, consequent, alternative) => format!(
            "({} ? {} : {})",
            expression_source(condition),
            expression_source(consequent),
            expression_source(alternative)
        ),
        NodeKind::Function {
            name,
            parameters,
            body,
        } => format!(
            "(function {}({}) {})",
            name.as_deref().unwrap_or_default(),
            list_source(parameters),
            block_source(body, 0)
        ),
        NodeKind::Block(_)
        | NodeKind::While(..)
        | NodeKind::If(..)
        | NodeKind::Break
        | NodeKind::Return(_) => statement_source(node, 0),
    }
}

fn list_source(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(expression_source)
        .collect::<Vec<_>>()
        .join(", ")
}

fn value_source(value: &Value) -> String {
    match value {
        Value::String(string) => {
            let mut out = String::from("\"");
            for c in string.chars() {
                match c {
                    '"' => out.push_str("\\\""),
                    '\\' => out.push_str("\\\\"),
                    '\n' => out.push_str("\\n"),
                    '\r' => out.push_str("\\r"),
                    '\t' => out.push_str("\\t"),
                    '\0' => out.push_str("\\0"),
                    c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
                    c => out.push(c),
                }
            }
            out.push('"');
            out
        }
        other => other.to_string(),
    }
}
