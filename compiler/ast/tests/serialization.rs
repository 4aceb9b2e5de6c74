// Copyright (C) 2021-2026 The Sable Team.
// This file is part of the Sable library.

// The Sable library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The Sable library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the Sable library. If not, see <https://www.gnu.org/licenses/>.

use sable_ast::*;
use sable_span::{Span, Symbol, create_session_if_not_set_then};

use smallvec::smallvec;

fn sample_block() -> Block {
    let ids = NodeBuilder::default();
    // function f(a) -> r { r := add(a, 1) }
    // let z := f(2)
    let body = Block {
        statements: vec![Statement::Assign(Box::new(AssignStatement {
            places: smallvec![Identifier::new(Symbol::intern("r"), ids.next_id())],
            value: Expression::Intrinsic(IntrinsicExpression {
                opcode: Opcode::Add,
                arguments: vec![
                    Expression::Identifier(Identifier::new(Symbol::intern("a"), ids.next_id())),
                    Expression::Literal(Literal::number(Symbol::intern("1"), ids.next_id())),
                ],
                span: Span::default(),
                id: ids.next_id(),
            }),
            span: Span::default(),
            id: ids.next_id(),
        }))],
        span: Span::default(),
        id: ids.next_id(),
    };
    Block {
        statements: vec![
            Statement::Function(Box::new(FunctionDefinition {
                identifier: Identifier::new(Symbol::intern("f"), ids.next_id()),
                arguments: vec![TypedName::new(Symbol::intern("a"), ids.next_id())],
                returns: vec![TypedName::new(Symbol::intern("r"), ids.next_id())],
                body,
                span: Span::default(),
                id: ids.next_id(),
            })),
            Statement::Definition(DefinitionStatement {
                variables: smallvec![TypedName::new(Symbol::intern("z"), ids.next_id())],
                value: Some(Expression::Call(CallExpression {
                    function: Identifier::new(Symbol::intern("f"), ids.next_id()),
                    arguments: vec![Expression::Literal(Literal::number(Symbol::intern("2"), ids.next_id()))],
                    span: Span::default(),
                    id: ids.next_id(),
                })),
                span: Span::default(),
                id: ids.next_id(),
            }),
        ],
        span: Span::default(),
        id: ids.next_id(),
    }
}

#[test]
fn json_round_trip_preserves_the_tree() {
    create_session_if_not_set_then(|_| {
        let ast = Ast::new(sample_block());
        let json = ast.to_json_string().unwrap();
        let back: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(ast.into_repr(), back);
    });
}

#[test]
fn json_value_conversion_succeeds() {
    create_session_if_not_set_then(|_| {
        let ast = Ast::new(sample_block());
        let value = ast.to_json_value().unwrap();
        assert!(value.is_object());
    });
}

#[test]
fn rendering_reads_like_the_surface_notation() {
    create_session_if_not_set_then(|_| {
        let ast = Ast::new(sample_block());
        let rendered = ast.to_string();
        assert!(rendered.contains("function f(a) -> r"));
        assert!(rendered.contains("r := add(a, 1)"));
        assert!(rendered.contains("let z := f(2)"));
    });
}
