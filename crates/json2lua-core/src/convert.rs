//! Conversion façade — the single entry point external callers use.
//!
//! Wraps [`LuaTable::build`] and rendering into one call that returns a
//! complete Lua chunk (`return { ... }`) or a single error kind.

use crate::error::{Json2LuaError, Result};
use crate::table::LuaTable;

/// Convert a JSON string into a Lua chunk.
///
/// Empty input short-circuits to `"return {}"` with no parse attempt.
/// Otherwise the document is parsed, walked into a [`LuaTable`], rendered
/// (tab-indented when `indented` is true, single-line otherwise), and
/// prefixed with `return `.
///
/// Every parse-time failure — malformed JSON or a root that is neither an
/// array nor an object — is re-signaled as
/// [`Json2LuaError::InvalidInput`] with the underlying message preserved,
/// so callers observe exactly one error kind. There is never partial
/// output: a complete chunk or an error.
///
/// ```
/// use json2lua_core::convert;
/// let lua = convert(r#"{"a":1,"b":"x"}"#, true).unwrap();
/// assert_eq!(lua, "return {\n\ta = 1,\n\tb = \"x\"\n}");
/// ```
pub fn convert(json: &str, indented: bool) -> Result<String> {
    if json.is_empty() {
        return Ok("return {}".to_string());
    }
    let table =
        LuaTable::build(json).map_err(|e| Json2LuaError::InvalidInput(e.to_string()))?;
    Ok(format!("return {}", table.render(indented)))
}

/// Convert a JSON string into a compact, single-line Lua chunk.
/// Equivalent to `convert(json, false)`.
pub fn convert_compact(json: &str) -> Result<String> {
    convert(json, false)
}
