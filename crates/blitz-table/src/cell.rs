//! Cell values and their text form.
//!
//! Cells are [`serde_json::Value`]s so rows can mix numbers, strings and
//! booleans the way loosely typed data sources produce them.

use std::borrow::Cow;
use std::cmp::Ordering;

use serde_json::{Number, Value};

/// A single table cell.
pub type Cell = Value;

/// An ordered sequence of cells.
pub type Row = Vec<Cell>;

/// Magnitudes in this range print in positional notation; anything outside
/// uses an exponent.
const POSITIONAL_RANGE: std::ops::Range<f64> = 1e-6..1e21;

/// Returns the text interpolated into markup for a cell.
///
/// - strings are used verbatim
/// - integers print as written; floats use the shortest digits that round-trip,
///   without a fractional part when whole (`2.0` becomes `2`, `1e20` becomes
///   `100000000000000000000`) and in exponent form from `1e21` up or below
///   `1e-6` (`1e+21`, `1.5e-7`)
/// - booleans print as `true` / `false`, null as `null`
/// - arrays join their elements' text with `,`; null elements are empty
/// - objects print as compact JSON
///
/// ```rust
/// use blitz_table::cell_text;
/// use serde_json::json;
///
/// assert_eq!(cell_text(&json!("a")), "a");
/// assert_eq!(cell_text(&json!(2.0)), "2");
/// assert_eq!(cell_text(&json!(1e20)), "100000000000000000000");
/// assert_eq!(cell_text(&json!([1, "b", null])), "1,b,");
/// ```
pub fn cell_text(cell: &Cell) -> Cow<'_, str> {
	match cell {
		Value::String(s) => Cow::Borrowed(s.as_str()),
		Value::Number(n) => Cow::Owned(number_text(n)),
		Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
		Value::Null => Cow::Borrowed("null"),
		Value::Array(items) => Cow::Owned(
			items
				.iter()
				.map(element_text)
				.collect::<Vec<_>>()
				.join(","),
		),
		Value::Object(_) => Cow::Owned(cell.to_string()),
	}
}

fn element_text(cell: &Cell) -> Cow<'_, str> {
	match cell {
		Value::Null => Cow::Borrowed(""),
		other => cell_text(other),
	}
}

fn number_text(n: &Number) -> String {
	match n.as_f64() {
		Some(f) if n.is_f64() => float_text(f),
		_ => n.to_string(),
	}
}

fn float_text(f: f64) -> String {
	if f == 0.0 {
		return "0".to_string();
	}
	if POSITIONAL_RANGE.contains(&f.abs()) {
		return f.to_string();
	}
	let text = format!("{f:e}");
	match text.split_once('e') {
		Some((mantissa, exponent)) if !exponent.starts_with('-') => {
			format!("{mantissa}e+{exponent}")
		}
		_ => text,
	}
}

fn type_rank(cell: &Cell) -> u8 {
	match cell {
		Value::Null => 0,
		Value::Bool(_) => 1,
		Value::Number(_) => 2,
		Value::String(_) => 3,
		Value::Array(_) => 4,
		Value::Object(_) => 5,
	}
}

/// Total order over cells used by column sorting.
///
/// Values of different kinds order as null < bool < number < string < array
/// < object. Numbers compare numerically, strings lexicographically, arrays
/// element by element and objects by their JSON text.
pub fn compare_cells(a: &Cell, b: &Cell) -> Ordering {
	match (a, b) {
		(Value::Bool(x), Value::Bool(y)) => x.cmp(y),
		(Value::Number(x), Value::Number(y)) => compare_numbers(x, y),
		(Value::String(x), Value::String(y)) => x.cmp(y),
		(Value::Array(x), Value::Array(y)) => x
			.iter()
			.zip(y)
			.map(|(l, r)| compare_cells(l, r))
			.find(|o| o.is_ne())
			.unwrap_or_else(|| x.len().cmp(&y.len())),
		(Value::Object(_), Value::Object(_)) => a.to_string().cmp(&b.to_string()),
		_ => type_rank(a).cmp(&type_rank(b)),
	}
}

fn compare_numbers(x: &Number, y: &Number) -> Ordering {
	if let (Some(l), Some(r)) = (x.as_i64(), y.as_i64()) {
		return l.cmp(&r);
	}
	if let (Some(l), Some(r)) = (x.as_u64(), y.as_u64()) {
		return l.cmp(&r);
	}
	let l = x.as_f64().unwrap_or(f64::NAN);
	let r = y.as_f64().unwrap_or(f64::NAN);
	l.total_cmp(&r)
}
