//! # json2lua-core
//!
//! Recursive JSON-to-Lua-table serializer: parses a JSON document and emits
//! an equivalent Lua table-literal chunk, preserving JSON's array/object
//! duality as Lua's unified ordered/associative table construct.
//!
//! ## Quick start
//!
//! ```rust
//! use json2lua_core::{convert, convert_compact};
//!
//! let json = r#"{"name":"Alice","scores":[95,87,92]}"#;
//! let lua = convert(json, true).unwrap();
//! assert_eq!(
//!     lua,
//!     "return {\n\tname = \"Alice\",\n\tscores = {\n\t\t95,\n\t\t87,\n\t\t92\n\t}\n}"
//! );
//!
//! let compact = convert_compact(json).unwrap();
//! assert_eq!(compact, r#"return {name="Alice",scores={ 95, 87, 92 }}"#);
//! ```
//!
//! ## Behavior notes
//!
//! - Object key order is preserved (source order); duplicate keys after the
//!   first are silently dropped.
//! - JSON `null` becomes the `nil` literal in both array and object
//!   positions.
//! - String values are quoted but **not escaped** — embedded quotes or
//!   control characters pass through verbatim. Known limitation, kept from
//!   the analyzed behavior.
//! - Keys that parse fully as integers render bracketed (`[10] = ...`);
//!   `$` in keys is rewritten to `_` at insertion.
//!
//! ## Modules
//!
//! - [`convert`](mod@convert) — the façade: JSON string → Lua chunk
//! - [`table`] — `LuaTable` builder and renderer
//! - [`value`] — `LuaValue` tagged union
//! - [`error`] — error types for parse failures

pub mod convert;
pub mod error;
pub mod table;
pub mod value;

pub use convert::{convert, convert_compact};
pub use error::Json2LuaError;
pub use table::LuaTable;
pub use value::{LuaValue, LuaValueKind};
