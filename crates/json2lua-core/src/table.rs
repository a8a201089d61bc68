//! Lua table builder and renderer — converts a parsed JSON tree into a
//! table literal and emits it as source text.
//!
//! A [`LuaTable`] holds both halves of Lua's unified table construct: an
//! ordered part (array-like, positional entries) and a named part
//! (object-like, string-keyed entries). Construction is a single recursive
//! walk over a `serde_json::Value` tree; rendering is a second recursive
//! walk over the finished table. Depth is threaded explicitly through both
//! walks and only ever drives indentation width.
//!
//! # Example
//! ```
//! use json2lua_core::LuaTable;
//! let table = LuaTable::build(r#"{"name":"Alice","scores":[95,87]}"#).unwrap();
//! let lua = table.render(true);
//! assert!(lua.starts_with("{\n\tname = \"Alice\""));
//! ```

use crate::error::{Json2LuaError, Result};
use crate::value::LuaValue;
use serde_json::Value;

/// One table-literal scope: positional entries, keyed entries, and the
/// nesting level used for indentation (root = 0).
///
/// Both parts may be non-empty on the same instance; positional entries
/// always render before keyed ones. Keyed insertion is first-wins — a
/// duplicate key is a silent no-op, so repeated JSON object keys after the
/// first are dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LuaTable {
    ordered: Vec<LuaValue>,
    /// Key-value pairs in insertion order. A plain pair list (rather than a
    /// map container) keeps source order without pulling in `IndexMap`;
    /// duplicate detection is a linear scan, fine at JSON-object sizes.
    named: Vec<(String, LuaValue)>,
    depth: usize,
}

impl LuaTable {
    /// Create an empty table at the given nesting level (root = 0).
    pub fn new(depth: usize) -> Self {
        LuaTable {
            ordered: Vec::new(),
            named: Vec::new(),
            depth,
        }
    }

    /// Nesting level of this table relative to the document root.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Total entry count across the ordered and named parts.
    pub fn len(&self) -> usize {
        self.ordered.len() + self.named.len()
    }

    /// True when the table has no entries in either part.
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty() && self.named.is_empty()
    }

    /// Append a positional entry. Duplicates are allowed and an explicit
    /// `Nil` occupies a position.
    pub fn push(&mut self, value: impl Into<LuaValue>) {
        self.ordered.push(value.into());
    }

    /// Insert a keyed entry, first-wins. The key is sanitized at insertion:
    /// every `$` becomes `_` (only `$` is special-cased; other
    /// identifier-illegal characters pass through unchanged — a known gap,
    /// kept as-is). Duplicate detection runs on the sanitized key, so
    /// `"$a"` and `"_a"` collide.
    pub fn insert(&mut self, key: &str, value: impl Into<LuaValue>) {
        let key = sanitize_key(key);
        if !self.named.iter().any(|(existing, _)| *existing == key) {
            self.named.push((key, value.into()));
        }
    }

    /// Build a table from JSON text. The root must be an array or an
    /// object — a Lua chunk needs a table literal as its single root, so a
    /// bare scalar or string is rejected with
    /// [`Json2LuaError::RootNotTable`]. Malformed JSON surfaces the parser
    /// diagnostic as [`Json2LuaError::Parse`].
    pub fn build(json: &str) -> Result<LuaTable> {
        let root: Value = serde_json::from_str(json)?;
        match &root {
            Value::Array(values) => Ok(Self::from_array(values, 0)),
            Value::Object(map) => Ok(Self::from_object(map, 0)),
            _ => Err(Json2LuaError::RootNotTable),
        }
    }

    /// Build a table from a JSON object node. Keys are visited in source
    /// order (relies on `serde_json`'s `preserve_order` feature — IndexMap,
    /// not BTreeMap) and inserted first-wins.
    fn from_object(map: &serde_json::Map<String, Value>, depth: usize) -> LuaTable {
        let mut table = LuaTable::new(depth);
        for (key, node) in map {
            let value = Self::convert_node(node, depth);
            table.insert(key, value);
        }
        table
    }

    /// Build a table from a JSON array node, appending every element
    /// positionally in array order.
    fn from_array(values: &[Value], depth: usize) -> LuaTable {
        let mut table = LuaTable::new(depth);
        for node in values {
            table.push(Self::convert_node(node, depth));
        }
        table
    }

    /// Convert one JSON node at `depth` into the Lua value destined for the
    /// parent table. Closed match over the JSON kinds — nested containers
    /// recurse one level deeper. Integer and float numbers both unify to
    /// `f64`; date-like and duration-like inputs arrive from the parser
    /// already collapsed into strings and numbers respectively.
    fn convert_node(node: &Value, depth: usize) -> LuaValue {
        match node {
            Value::Null => LuaValue::Nil,
            Value::Bool(b) => LuaValue::Boolean(*b),
            Value::Number(n) => LuaValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => LuaValue::String(s.clone()),
            Value::Array(values) => LuaValue::Table(Self::from_array(values, depth + 1)),
            Value::Object(map) => LuaValue::Table(Self::from_object(map, depth + 1)),
        }
    }

    /// Render this table as a Lua table literal.
    ///
    /// Always begins with `{`. An empty table renders `{}` in both modes.
    /// Indented mode puts every entry on its own line, indented with
    /// `depth + 1` tabs, with the closing brace at `depth` tabs. Compact
    /// mode stays on a single line and never emits `\n` or `\t` at any
    /// nesting level.
    ///
    /// Comma suppression spans both parts: exactly the final entry across
    /// ordered-then-named omits the trailing comma.
    pub fn render(&self, indented: bool) -> String {
        let mut out = String::new();
        self.render_into(&mut out, indented);
        out
    }

    pub(crate) fn render_into(&self, out: &mut String, indented: bool) {
        out.push('{');
        let total = self.len();
        if total == 0 {
            out.push('}');
            return;
        }
        if indented {
            self.render_entries_indented(out, total);
        } else {
            self.render_entries_compact(out, total);
        }
    }

    /// One entry per line: `depth + 1` tabs, entry text, comma unless the
    /// entry is last overall, newline. Keyed entries render `key = value`.
    fn render_entries_indented(&self, out: &mut String, total: usize) {
        out.push('\n');
        let entry_indent = make_indent(self.depth + 1);
        let mut emitted = 0;
        for value in &self.ordered {
            emitted += 1;
            out.push_str(&entry_indent);
            value.render_into(out, true);
            if emitted < total {
                out.push(',');
            }
            out.push('\n');
        }
        for (key, value) in &self.named {
            emitted += 1;
            out.push_str(&entry_indent);
            out.push_str(&format_key(key));
            out.push_str(" = ");
            value.render_into(out, true);
            if emitted < total {
                out.push(',');
            }
            out.push('\n');
        }
        out.push_str(&make_indent(self.depth));
        out.push('}');
    }

    /// Single line: a leading space with the first positional entry, a
    /// space after every positional entry, keyed entries as unspaced
    /// `key=value` pairs.
    fn render_entries_compact(&self, out: &mut String, total: usize) {
        let mut emitted = 0;
        for (i, value) in self.ordered.iter().enumerate() {
            emitted += 1;
            if i == 0 {
                out.push(' ');
            }
            value.render_into(out, false);
            if emitted < total {
                out.push(',');
            }
            out.push(' ');
        }
        for (key, value) in &self.named {
            emitted += 1;
            out.push_str(&format_key(key));
            out.push('=');
            value.render_into(out, false);
            if emitted < total {
                out.push(',');
            }
        }
        out.push('}');
    }
}

/// Rewrite Lua-reserved `$` characters in a key to `_`.
fn sanitize_key(key: &str) -> String {
    key.replace('$', "_")
}

/// Format a keyed entry's key: a key that parses fully as an integer
/// renders bracketed (`[10]`), anything else renders bare.
fn format_key(key: &str) -> String {
    if key.parse::<i64>().is_ok() {
        format!("[{}]", key)
    } else {
        key.to_string()
    }
}

/// Generate a tab-per-level indentation string.
fn make_indent(depth: usize) -> String {
    "\t".repeat(depth)
}
