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

mod common;

use common::{TreeBuilder, disambiguate, state_of};

use sable_ast::{Block, Opcode, Statement};
use sable_span::{Symbol, create_session_if_not_set_then};

use expect_test::expect;

/// Every declared name in the tree, in traversal order.
fn declared_names(block: &Block, names: &mut Vec<Symbol>) {
    for statement in &block.statements {
        match statement {
            Statement::Definition(definition) => {
                names.extend(definition.variables.iter().map(|variable| variable.name));
            }
            Statement::Function(function) => {
                names.push(function.name());
                names.extend(function.arguments.iter().chain(&function.returns).map(|typed_name| typed_name.name));
                declared_names(&function.body, names);
            }
            Statement::Block(nested) => declared_names(nested, names),
            Statement::Conditional(conditional) => declared_names(&conditional.body, names),
            Statement::Switch(switch) => {
                for case in &switch.cases {
                    declared_names(&case.body, names);
                }
            }
            Statement::ForLoop(for_loop) => {
                declared_names(&for_loop.pre, names);
                declared_names(&for_loop.post, names);
                declared_names(&for_loop.body, names);
            }
            _ => {}
        }
    }
}

fn assert_names_unique(block: &Block) {
    let mut names = Vec::new();
    declared_names(block, &mut names);
    let mut seen = std::collections::HashSet::new();
    for name in names {
        assert!(seen.insert(name), "`{name}` is declared twice");
    }
}

#[test]
fn shadowed_declarations_are_renamed() {
    create_session_if_not_set_then(|_| {
        let b = TreeBuilder::new();
        // { let x := 1 let y := 0 { let x := 2 y := x } y := x }
        let root = b.block(vec![
            b.define("x", b.num("1")),
            b.define("y", b.num("0")),
            b.nested(vec![b.define("x", b.num("2")), b.assign("y", b.var("x"))]),
            b.assign("y", b.var("x")),
        ]);
        let mut state = state_of(b, root);
        disambiguate(&mut state);

        expect![[r#"
            {
                let x := 1
                let y := 0
                {
                    let x_1 := 2
                    y := x_1
                }
                y := x
            }"#]]
        .assert_eq(&state.ast.to_string());
        assert_names_unique(&state.ast.ast);
    });
}

#[test]
fn function_parameters_shadow_consistently() {
    create_session_if_not_set_then(|_| {
        let b = TreeBuilder::new();
        // function f(a) -> r { r := a }
        // let a := 1
        // let b := f(a)
        let root = b.block(vec![
            b.function("f", &["a"], &["r"], vec![b.assign("r", b.var("a"))]),
            b.define("a", b.num("1")),
            b.define("b", b.call("f", vec![b.var("a")])),
        ]);
        let mut state = state_of(b, root);
        disambiguate(&mut state);

        expect![[r#"
            {
                function f(a) -> r {
                    r := a
                }
                let a_1 := 1
                let b := f(a_1)
            }"#]]
        .assert_eq(&state.ast.to_string());
        assert_names_unique(&state.ast.ast);
    });
}

#[test]
fn for_loop_pre_declarations_govern_the_loop() {
    create_session_if_not_set_then(|_| {
        let b = TreeBuilder::new();
        // let i := 100
        // for { let i := 0 } lt(i, 3) { i := add(i, 1) } { let j := i }
        // i := 5
        let root = b.block(vec![
            b.define("i", b.num("100")),
            b.for_loop(
                vec![b.define("i", b.num("0"))],
                b.intrinsic(Opcode::Lt, vec![b.var("i"), b.num("3")]),
                vec![b.assign("i", b.intrinsic(Opcode::Add, vec![b.var("i"), b.num("1")]))],
                vec![b.define("j", b.var("i"))],
            ),
            b.assign("i", b.num("5")),
        ]);
        let mut state = state_of(b, root);
        disambiguate(&mut state);

        expect![[r#"
            {
                let i := 100
                for {
                    let i_1 := 0
                } lt(i_1, 3) {
                    i_1 := add(i_1, 1)
                } {
                    let j := i_1
                }
                i := 5
            }"#]]
        .assert_eq(&state.ast.to_string());
        assert_names_unique(&state.ast.ast);
    });
}

#[test]
fn switch_cases_are_translated() {
    create_session_if_not_set_then(|_| {
        let b = TreeBuilder::new();
        // let x := 1
        // switch x case 0 { let y := x } default { let y := 2 }
        let root = b.block(vec![
            b.define("x", b.num("1")),
            b.switch(
                b.var("x"),
                vec![
                    (Some("0"), vec![b.define("y", b.var("x"))]),
                    (None, vec![b.define("y", b.num("2"))]),
                ],
            ),
        ]);
        let mut state = state_of(b, root);
        disambiguate(&mut state);

        expect![[r#"
            {
                let x := 1
                switch x case 0 {
                    let y := x
                } default {
                    let y_1 := 2
                }
            }"#]]
        .assert_eq(&state.ast.to_string());
        assert_names_unique(&state.ast.ast);
    });
}

#[test]
fn output_is_deterministic() {
    create_session_if_not_set_then(|_| {
        let build = || {
            let b = TreeBuilder::new();
            let root = b.block(vec![
                b.function("f", &["a"], &["r"], vec![b.assign("r", b.var("a"))]),
                b.define("a", b.num("1")),
                b.nested(vec![b.define("a", b.call("f", vec![b.num("2")]))]),
            ]);
            state_of(b, root)
        };

        let mut first = build();
        disambiguate(&mut first);
        let mut second = build();
        disambiguate(&mut second);
        assert_eq!(first.ast, second.ast);
    });
}

#[test]
fn suffixes_skip_names_the_source_already_uses() {
    create_session_if_not_set_then(|_| {
        let b = TreeBuilder::new();
        // The source already declares x_1, so the shadowing x becomes x_2.
        // { let x_1 := 0 let x := 1 { let x := 2 x := x } }
        let root = b.block(vec![
            b.define("x_1", b.num("0")),
            b.define("x", b.num("1")),
            b.nested(vec![b.define("x", b.num("2")), b.assign("x", b.var("x"))]),
        ]);
        let mut state = state_of(b, root);
        disambiguate(&mut state);

        expect![[r#"
            {
                let x_1 := 0
                let x := 1
                {
                    let x_2 := 2
                    x_2 := x_2
                }
            }"#]]
        .assert_eq(&state.ast.to_string());
        assert_names_unique(&state.ast.ast);
    });
}

#[test]
#[should_panic(expected = "LabelStatement")]
fn labels_are_rejected() {
    create_session_if_not_set_then(|_| {
        let b = TreeBuilder::new();
        let root = b.block(vec![b.label("loop_top")]);
        let mut state = state_of(b, root);
        disambiguate(&mut state);
    });
}

#[test]
#[should_panic(expected = "StackAssignStatement")]
fn stack_assignments_are_rejected() {
    create_session_if_not_set_then(|_| {
        let b = TreeBuilder::new();
        let root = b.block(vec![b.stack_assign("x")]);
        let mut state = state_of(b, root);
        disambiguate(&mut state);
    });
}
