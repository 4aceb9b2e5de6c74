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

use crate::create_messages;

use std::fmt::Display;

create_messages!(
    /// AstError enum that represents all the errors for the `sable-ast` crate.
    AstError,
    code_mask: 2000i32,
    code_prefix: "AST",

    @backtraced
    failed_to_convert_ast_to_json_string {
        args: (error: impl Display),
        msg: format!("Failed to convert the AST to a JSON string: {error}"),
        help: None,
    }

    @backtraced
    failed_to_convert_ast_to_json_value {
        args: (error: impl Display),
        msg: format!("Failed to convert the AST to a JSON value: {error}"),
        help: None,
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MessageCode;

    #[test]
    fn exit_codes_are_stable() {
        assert_eq!(AstError::num_exit_codes(), 2);
        let error = AstError::failed_to_convert_ast_to_json_string("boom");
        assert_eq!(error.exit_code(), 2000);
        assert_eq!(error.error_code(), "EAST0002000");
        let error = AstError::failed_to_convert_ast_to_json_value("bang");
        assert_eq!(error.exit_code(), 2001);
    }

    #[test]
    fn messages_render_their_arguments() {
        let error = AstError::failed_to_convert_ast_to_json_string("unexpected end of input");
        assert!(error.to_string().contains("unexpected end of input"));
    }
}
