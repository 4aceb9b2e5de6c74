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

/// A message body carrying a backtrace.
pub mod backtraced;
pub use backtraced::*;

/// A message body carrying a source span.
pub mod formatted;
pub use formatted::*;

/// The `create_messages!` macro error types are generated from.
pub mod macros;

/// The trait every generated error type implements.
pub mod traits;
pub use traits::*;
