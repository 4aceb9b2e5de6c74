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

use common::{TreeBuilder, state_of};

use sable_ast::Opcode;
use sable_passes::{FunctionInlining, Pass};
use sable_span::create_session_if_not_set_then;

use expect_test::expect;

#[test]
fn argument_effects_keep_their_order() {
    create_session_if_not_set_then(|_| {
        let b = TreeBuilder::new();
        // function f(a, b) -> r { r := add(a, b) }
        // let z := f(sload(0), sload(1))
        let root = b.block(vec![
            b.function(
                "f",
                &["a", "b"],
                &["r"],
                vec![b.assign("r", b.intrinsic(Opcode::Add, vec![b.var("a"), b.var("b")]))],
            ),
            b.define(
                "z",
                b.call(
                    "f",
                    vec![b.intrinsic(Opcode::SLoad, vec![b.num("0")]), b.intrinsic(Opcode::SLoad, vec![b.num("1")])],
                ),
            ),
        ]);
        let mut state = state_of(b, root);
        FunctionInlining::do_pass((), &mut state).unwrap();

        expect![[r#"
            {
                function f(a, b) -> r {
                    r := add(a, b)
                }
                let b_1 := sload(1)
                let a_1 := sload(0)
                let r_1
                {
                    r_1 := add(a_1, b_1)
                }
                let z := r_1
            }"#]]
        .assert_eq(&state.ast.to_string());
    });
}

#[test]
fn existing_declarations_are_not_shadowed() {
    create_session_if_not_set_then(|_| {
        let b = TreeBuilder::new();
        // function f(a) -> r { r := a }
        // let a := 1
        // let z := f(a)
        let root = b.block(vec![
            b.function("f", &["a"], &["r"], vec![b.assign("r", b.var("a"))]),
            b.define("a", b.num("1")),
            b.define("z", b.call("f", vec![b.var("a")])),
        ]);
        let mut state = state_of(b, root);
        FunctionInlining::do_pass((), &mut state).unwrap();

        expect![[r#"
            {
                function f(a) -> r {
                    r := a
                }
                let a := 1
                let a_1 := a
                let r_1
                {
                    r_1 := a_1
                }
                let z := r_1
            }"#]]
        .assert_eq(&state.ast.to_string());
    });
}

#[test]
fn conditions_are_not_descended_into() {
    create_session_if_not_set_then(|_| {
        let b = TreeBuilder::new();
        // function f(a) -> r { r := add(a, 1) }
        // if f(1) { z := f(2) }
        let root = b.block(vec![
            b.function("f", &["a"], &["r"], vec![b.assign("r", b.intrinsic(Opcode::Add, vec![b.var("a"), b.num("1")]))]),
            b.conditional(b.call("f", vec![b.num("1")]), vec![b.assign("z", b.call("f", vec![b.num("2")]))]),
        ]);
        let mut state = state_of(b, root);
        FunctionInlining::do_pass((), &mut state).unwrap();

        expect![[r#"
            {
                function f(a) -> r {
                    r := add(a, 1)
                }
                if f(1) {
                    let a_1 := 2
                    let r_1
                    {
                        r_1 := add(a_1, 1)
                    }
                    z := r_1
                }
            }"#]]
        .assert_eq(&state.ast.to_string());
    });
}

#[test]
fn recursive_bodies_are_not_expanded() {
    create_session_if_not_set_then(|_| {
        let b = TreeBuilder::new();
        // function f(a) -> r { r := f(a) }
        // let z := f(1)
        let root = b.block(vec![
            b.function("f", &["a"], &["r"], vec![b.assign("r", b.call("f", vec![b.var("a")]))]),
            b.define("z", b.call("f", vec![b.num("1")])),
        ]);
        let mut state = state_of(b, root);
        FunctionInlining::do_pass((), &mut state).unwrap();

        // The definition's own body keeps its call; the call site is
        // expanded once, and the copied body keeps the inner call too.
        expect![[r#"
            {
                function f(a) -> r {
                    r := f(a)
                }
                let a_1 := 1
                let r_1
                {
                    r_1 := f(a_1)
                }
                let z := r_1
            }"#]]
        .assert_eq(&state.ast.to_string());
    });
}

#[test]
fn inlined_arguments_stack_their_prefixes_in_evaluation_order() {
    create_session_if_not_set_then(|_| {
        let b = TreeBuilder::new();
        // function f(a) -> r { r := add(a, 1) }
        // function g(x, y) -> s { s := mul(x, y) }
        // let z := g(f(2), sload(3))
        let root = b.block(vec![
            b.function("f", &["a"], &["r"], vec![b.assign("r", b.intrinsic(Opcode::Add, vec![b.var("a"), b.num("1")]))]),
            b.function(
                "g",
                &["x", "y"],
                &["s"],
                vec![b.assign("s", b.intrinsic(Opcode::Mul, vec![b.var("x"), b.var("y")]))],
            ),
            b.define("z", b.call("g", vec![b.call("f", vec![b.num("2")]), b.intrinsic(Opcode::SLoad, vec![b.num("3")])])),
        ]);
        let mut state = state_of(b, root);
        FunctionInlining::do_pass((), &mut state).unwrap();

        expect![[r#"
            {
                function f(a) -> r {
                    r := add(a, 1)
                }
                function g(x, y) -> s {
                    s := mul(x, y)
                }
                let y_1 := sload(3)
                let a_1 := 2
                let r_1
                {
                    r_1 := add(a_1, 1)
                }
                let x_1 := r_1
                let s_1
                {
                    s_1 := mul(x_1, y_1)
                }
                let z := s_1
            }"#]]
        .assert_eq(&state.ast.to_string());
    });
}

#[test]
fn locals_of_the_copied_body_are_renamed() {
    create_session_if_not_set_then(|_| {
        let b = TreeBuilder::new();
        // function f(a) -> r { let t := add(a, 1) r := t }
        // let t := 9
        // let z := f(t)
        let root = b.block(vec![
            b.function(
                "f",
                &["a"],
                &["r"],
                vec![
                    b.define("t", b.intrinsic(Opcode::Add, vec![b.var("a"), b.num("1")])),
                    b.assign("r", b.var("t")),
                ],
            ),
            b.define("t", b.num("9")),
            b.define("z", b.call("f", vec![b.var("t")])),
        ]);
        let mut state = state_of(b, root);
        FunctionInlining::do_pass((), &mut state).unwrap();

        expect![[r#"
            {
                function f(a) -> r {
                    let t := add(a, 1)
                    r := t
                }
                let t := 9
                let a_1 := t
                let r_1
                {
                    let t_1 := add(a_1, 1)
                    r_1 := t_1
                }
                let z := r_1
            }"#]]
        .assert_eq(&state.ast.to_string());
    });
}

#[test]
#[should_panic(expected = "not implemented")]
fn multi_return_callees_are_unimplemented() {
    create_session_if_not_set_then(|_| {
        let b = TreeBuilder::new();
        // function p() -> r, s { r := 1 }
        // let z := p()
        let root = b.block(vec![
            b.function("p", &[], &["r", "s"], vec![b.assign("r", b.num("1"))]),
            b.define("z", b.call("p", vec![])),
        ]);
        let mut state = state_of(b, root);
        FunctionInlining::do_pass((), &mut state).unwrap();
    });
}

#[test]
#[should_panic(expected = "not implemented")]
fn multi_target_assignments_are_unimplemented() {
    create_session_if_not_set_then(|_| {
        let b = TreeBuilder::new();
        let root = b.block(vec![b.multi_assign(&["a", "b"], b.num("1"))]);
        let mut state = state_of(b, root);
        FunctionInlining::do_pass((), &mut state).unwrap();
    });
}

#[test]
#[should_panic(expected = "hoisting")]
fn nested_definitions_in_a_copied_body_are_rejected() {
    create_session_if_not_set_then(|_| {
        let b = TreeBuilder::new();
        // function outer(a) -> r { function inner(q) -> s { s := q } r := a }
        // let z := outer(1)
        let root = b.block(vec![
            b.function(
                "outer",
                &["a"],
                &["r"],
                vec![
                    b.function("inner", &["q"], &["s"], vec![b.assign("s", b.var("q"))]),
                    b.assign("r", b.var("a")),
                ],
            ),
            b.define("z", b.call("outer", vec![b.num("1")])),
        ]);
        let mut state = state_of(b, root);
        FunctionInlining::do_pass((), &mut state).unwrap();
    });
}

#[test]
#[should_panic(expected = "InstructionStatement")]
fn stack_form_instructions_are_rejected() {
    create_session_if_not_set_then(|_| {
        let b = TreeBuilder::new();
        let root = b.block(vec![sable_ast::Statement::Instruction(sable_ast::InstructionStatement {
            opcode: Opcode::Stop,
            span: Default::default(),
            id: b.ids.next_id(),
        })]);
        let mut state = state_of(b, root);
        FunctionInlining::do_pass((), &mut state).unwrap();
    });
}
