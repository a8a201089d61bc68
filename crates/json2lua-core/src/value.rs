//! Lua value model — the tagged union a table's entries are made of.
//!
//! Mirrors the five Lua kinds a JSON document can produce: nested table,
//! string, number, boolean, and nil. Integers and floats unify into a single
//! `f64` number; no distinction survives construction.

use crate::table::LuaTable;

/// One Lua value. Each `Table` variant exclusively owns its child table, so
/// a document forms a plain acyclic ownership tree.
#[derive(Debug, Clone, PartialEq)]
pub enum LuaValue {
    /// Nested table literal.
    Table(LuaTable),
    /// String literal. Rendered verbatim between double quotes — embedded
    /// quotes and control characters are NOT escaped (known limitation,
    /// kept from the analyzed behavior rather than silently fixed).
    String(String),
    /// Number literal, created from either integer or float JSON forms.
    Number(f64),
    /// `true` / `false`.
    Boolean(bool),
    /// Explicit `nil`. Occupies a position in the ordered part of a table,
    /// distinct from "key not present" in the named part.
    Nil,
}

/// Discriminant of a [`LuaValue`], for callers that dispatch on kind
/// without touching the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LuaValueKind {
    Table,
    String,
    Number,
    Boolean,
    Nil,
}

impl LuaValue {
    /// Which of the five Lua kinds this value is.
    pub fn kind(&self) -> LuaValueKind {
        match self {
            LuaValue::Table(_) => LuaValueKind::Table,
            LuaValue::String(_) => LuaValueKind::String,
            LuaValue::Number(_) => LuaValueKind::Number,
            LuaValue::Boolean(_) => LuaValueKind::Boolean,
            LuaValue::Nil => LuaValueKind::Nil,
        }
    }

    /// Render this value as Lua source text. Total — no failure paths.
    ///
    /// `indented` only matters for the `Table` variant, which threads it
    /// down to the child table's renderer; scalars look the same either way.
    pub fn render(&self, indented: bool) -> String {
        let mut out = String::new();
        self.render_into(&mut out, indented);
        out
    }

    pub(crate) fn render_into(&self, out: &mut String, indented: bool) {
        match self {
            LuaValue::Table(table) => table.render_into(out, indented),
            LuaValue::String(s) => {
                out.push('"');
                out.push_str(s);
                out.push('"');
            }
            LuaValue::Number(n) => out.push_str(&format_number(*n)),
            LuaValue::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
            LuaValue::Nil => out.push_str("nil"),
        }
    }
}

impl From<&str> for LuaValue {
    fn from(s: &str) -> Self {
        LuaValue::String(s.to_string())
    }
}

impl From<String> for LuaValue {
    fn from(s: String) -> Self {
        LuaValue::String(s)
    }
}

impl From<f64> for LuaValue {
    fn from(n: f64) -> Self {
        LuaValue::Number(n)
    }
}

impl From<i64> for LuaValue {
    fn from(n: i64) -> Self {
        LuaValue::Number(n as f64)
    }
}

impl From<bool> for LuaValue {
    fn from(b: bool) -> Self {
        LuaValue::Boolean(b)
    }
}

impl From<LuaTable> for LuaValue {
    fn from(table: LuaTable) -> Self {
        LuaValue::Table(table)
    }
}

/// Format a number per the pinned convention:
/// - Whole values within `i64` range render in integer form (25.0 → 25)
/// - Everything else uses `f64` display with trailing fractional zeros
///   trimmed (1.50 → 1.5)
/// - Negative zero normalizes to 0
/// - Non-finite values render as `nil` (unreachable from JSON input, but
///   the constructor accepts any `f64`)
fn format_number(n: f64) -> String {
    if n.is_nan() || n.is_infinite() {
        return "nil".to_string();
    }
    let n = if n == 0.0 { 0.0 } else { n };
    if n.fract() == 0.0 && n.abs() < (i64::MAX as f64) {
        return (n as i64).to_string();
    }
    let s = format!("{}", n);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0');
        trimmed.trim_end_matches('.').to_string()
    } else {
        s
    }
}
