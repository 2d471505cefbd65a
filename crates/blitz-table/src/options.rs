//! Styling options derived from a [`TableConfig`].

use blitz_dom::Element;

use crate::config::TableConfig;

/// Type class used when the configuration names no semantic color.
pub const DEFAULT_TYPE_CLASS: &str = "table-primary";

/// Class-name state derived from a [`TableConfig`] and written to the
/// container.
///
/// The derived fields are public: to restyle a table, assign the fields and
/// call [`Options::update_options`]. The original configuration is never
/// re-read.
///
/// ```rust
/// use blitz_dom::Element;
/// use blitz_table::{Options, TableConfig};
///
/// let container = Element::new("table");
/// let mut options = Options::new(TableConfig::new().striped(true), Some(container.clone()));
/// assert_eq!(container.class_name(), "table table-primary table-striped    ");
///
/// options.striped = String::new();
/// options.bordered = "table-bordered".to_string();
/// options.update_options();
/// assert_eq!(container.class_name(), "table table-primary  table-bordered   ");
/// ```
#[derive(Debug, Clone)]
pub struct Options {
	config: TableConfig,
	parent: Option<Element>,
	class_name: String,
	/// `table-{type}`, or [`DEFAULT_TYPE_CLASS`].
	pub type_class: String,
	/// `table-striped` or empty.
	pub striped: String,
	/// `table-bordered` or empty.
	pub bordered: String,
	/// `border-{bordercolor}` or empty.
	pub border_color: String,
	/// `table-responsive` or empty.
	pub responsive: String,
	/// Custom classes, appended verbatim.
	pub custom_classes: String,
}

impl Options {
	/// Derives the class segments and immediately writes the composed class
	/// string to `parent`.
	///
	/// Without a parent the class string is computed but applied nowhere.
	pub fn new(config: TableConfig, parent: Option<Element>) -> Self {
		let flag = |enabled: bool, class: &str| {
			if enabled {
				class.to_string()
			} else {
				String::new()
			}
		};
		let mut options = Self {
			type_class: config
				.kind_name()
				.map_or_else(|| DEFAULT_TYPE_CLASS.to_string(), |kind| format!("table-{kind}")),
			striped: flag(config.striped, "table-striped"),
			bordered: flag(config.bordered, "table-bordered"),
			border_color: config
				.border_color_name()
				.map(|color| format!("border-{color}"))
				.unwrap_or_default(),
			responsive: flag(config.responsive, "table-responsive"),
			custom_classes: config.custom_class_list().unwrap_or_default().to_string(),
			class_name: String::new(),
			config,
			parent,
		};
		options.update_options();
		options
	}

	/// Recomposes the class string from the current field values and writes
	/// it to the container.
	pub fn update_options(&mut self) {
		self.class_name = format!(
			"table {} {} {} {} {} {}",
			self.type_class,
			self.striped,
			self.bordered,
			self.border_color,
			self.responsive,
			self.custom_classes
		);
		match &self.parent {
			Some(parent) => {
				parent.set_class_name(&self.class_name);
				tracing::trace!(class = %self.class_name, "applied table classes");
			}
			None => tracing::debug!("no container to apply table classes to"),
		}
	}

	/// Returns the composed class string.
	pub fn class_name(&self) -> &str {
		&self.class_name
	}

	/// Returns the configuration the options were derived from.
	pub fn config(&self) -> &TableConfig {
		&self.config
	}

	/// Returns the container the class string is written to.
	pub fn parent(&self) -> Option<&Element> {
		self.parent.as_ref()
	}
}
