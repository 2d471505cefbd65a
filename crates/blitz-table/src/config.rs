//! Table configuration record.
//!
//! Every field is optional. Keys follow the camelCase names used by the
//! JSON and TOML forms:
//!
//! ```json
//! { "type": "dark", "striped": true, "bordercolor": "info", "customClasses": "w-50" }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

/// Styling flags and strings consumed by [`Options`](crate::Options).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableConfig {
	/// Semantic color name, rendered as `table-{type}`.
	#[serde(rename = "type")]
	pub kind: Option<String>,
	/// Applies `table-striped`.
	pub striped: bool,
	/// Applies `table-bordered`.
	pub bordered: bool,
	/// Border color name, rendered as `border-{bordercolor}`.
	#[serde(rename = "bordercolor")]
	pub border_color: Option<String>,
	/// Applies `table-responsive`.
	pub responsive: bool,
	/// Appended verbatim to the computed class list.
	pub custom_classes: Option<String>,
	/// Escape header, body and footer values instead of treating them as
	/// trusted markup.
	pub escape_cells: bool,
}

impl TableConfig {
	/// Creates a configuration with every option unset.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the semantic color name.
	pub fn kind(mut self, kind: impl Into<String>) -> Self {
		self.kind = Some(kind.into());
		self
	}

	/// Sets the striped flag.
	pub fn striped(mut self, striped: bool) -> Self {
		self.striped = striped;
		self
	}

	/// Sets the bordered flag.
	pub fn bordered(mut self, bordered: bool) -> Self {
		self.bordered = bordered;
		self
	}

	/// Sets the border color name.
	pub fn border_color(mut self, color: impl Into<String>) -> Self {
		self.border_color = Some(color.into());
		self
	}

	/// Sets the responsive flag.
	pub fn responsive(mut self, responsive: bool) -> Self {
		self.responsive = responsive;
		self
	}

	/// Sets classes appended verbatim to the class list.
	pub fn custom_classes(mut self, classes: impl Into<String>) -> Self {
		self.custom_classes = Some(classes.into());
		self
	}

	/// Sets whether cell values are escaped.
	pub fn escape_cells(mut self, escape: bool) -> Self {
		self.escape_cells = escape;
		self
	}

	/// Parses a JSON configuration object.
	pub fn from_json_str(input: &str) -> Result<Self> {
		Ok(serde_json::from_str(input)?)
	}

	/// Parses a TOML configuration table.
	pub fn from_toml_str(input: &str) -> Result<Self> {
		Ok(toml::from_str(input)?)
	}

	/// Loads a configuration file, choosing the format by extension.
	///
	/// # Errors
	///
	/// Returns [`TableError::UnsupportedConfigFormat`] for anything other than
	/// `.json` or `.toml`, and the I/O or parse error otherwise.
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let extension = path
			.extension()
			.and_then(|ext| ext.to_str())
			.map(str::to_ascii_lowercase);
		match extension.as_deref() {
			Some("json") => Self::from_json_str(&std::fs::read_to_string(path)?),
			Some("toml") => Self::from_toml_str(&std::fs::read_to_string(path)?),
			_ => Err(TableError::UnsupportedConfigFormat(path.to_path_buf())),
		}
	}

	/// Returns the semantic color name, treating an empty string as unset.
	pub(crate) fn kind_name(&self) -> Option<&str> {
		non_empty(&self.kind)
	}

	/// Returns the border color name, treating an empty string as unset.
	pub(crate) fn border_color_name(&self) -> Option<&str> {
		non_empty(&self.border_color)
	}

	/// Returns the custom classes, treating an empty string as unset.
	pub(crate) fn custom_class_list(&self) -> Option<&str> {
		non_empty(&self.custom_classes)
	}
}

fn non_empty(value: &Option<String>) -> Option<&str> {
	value.as_deref().filter(|s| !s.is_empty())
}
