//! Error types for JSON-to-Lua conversion.

use thiserror::Error;

/// Errors that can occur while building or converting a Lua table.
#[derive(Error, Debug)]
pub enum Json2LuaError {
    /// The input string was not valid JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed, but its root is a bare scalar or string.
    /// A Lua chunk needs a table literal as its single root.
    #[error("JSON root must be an object or array")]
    RootNotTable,

    /// Surfaced by [`convert`](crate::convert()): any parse-time failure,
    /// with the underlying diagnostic preserved. Façade callers only ever
    /// see this variant.
    #[error("invalid JSON input: {0}")]
    InvalidInput(String),
}

/// Convenience alias used throughout json2lua-core.
pub type Result<T> = std::result::Result<T, Json2LuaError>;
