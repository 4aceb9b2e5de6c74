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

/// Generates an error type from a table of messages.
///
/// Each `@formatted` message takes a trailing `span` argument and renders
/// with a source location; each `@backtraced` message renders with an
/// optional backtrace instead. Exit codes are `code_mask` plus the
/// message's position in the table, so codes are stable as long as
/// messages are only appended.
#[macro_export]
macro_rules! create_messages {
    (
        $(#[$error_type_docs:meta])*
        $type_:ident,
        code_mask: $code_mask:expr,
        code_prefix: $code_prefix:expr,
        $($body:tt)*
    ) => {
        $(#[$error_type_docs])*
        #[derive(Clone, Debug, ::thiserror::Error)]
        pub enum $type_ {
            #[error(transparent)]
            Formatted(#[from] $crate::Formatted),
            #[error(transparent)]
            Backtraced(#[from] $crate::Backtraced),
        }

        impl $crate::MessageCode for $type_ {
            fn exit_code(&self) -> i32 {
                match self {
                    Self::Formatted(formatted) => formatted.backtrace.exit_code,
                    Self::Backtraced(backtraced) => backtraced.exit_code,
                }
            }

            fn error_code(&self) -> String {
                match self {
                    Self::Formatted(formatted) => formatted.error_code(),
                    Self::Backtraced(backtraced) => backtraced.error_code(),
                }
            }
        }

        impl $type_ {
            $crate::create_messages!(@step 0i32, $code_mask, $code_prefix, $($body)*);
        }
    };

    (@step $code:expr, $code_mask:expr, $code_prefix:expr,) => {
        /// Returns the number of messages defined on this error type.
        #[inline(always)]
        pub fn num_exit_codes() -> i32 {
            $code
        }
    };

    (@step $code:expr, $code_mask:expr, $code_prefix:expr,
        $(#[$docs:meta])*
        @formatted $name:ident {
            args: ($($arg_names:ident: $arg_types:ty),* $(,)?),
            msg: $message:expr,
            help: $help:expr,
        }
        $($rest:tt)*
    ) => {
        $(#[$docs])*
        pub fn $name($($arg_names: $arg_types,)* span: ::sable_span::Span) -> Self {
            Self::Formatted($crate::Formatted::new_from_span(
                $message,
                $help,
                $code + $code_mask,
                $code_prefix,
                span,
            ))
        }

        $crate::create_messages!(@step $code + 1i32, $code_mask, $code_prefix, $($rest)*);
    };

    (@step $code:expr, $code_mask:expr, $code_prefix:expr,
        $(#[$docs:meta])*
        @backtraced $name:ident {
            args: ($($arg_names:ident: $arg_types:ty),* $(,)?),
            msg: $message:expr,
            help: $help:expr,
        }
        $($rest:tt)*
    ) => {
        $(#[$docs])*
        pub fn $name($($arg_names: $arg_types),*) -> Self {
            Self::Backtraced($crate::Backtraced::new_from_backtrace(
                $message,
                $help,
                $code + $code_mask,
                $code_prefix,
            ))
        }

        $crate::create_messages!(@step $code + 1i32, $code_mask, $code_prefix, $($rest)*);
    };
}
