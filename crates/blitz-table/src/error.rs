//! Error types for table operations.

use std::path::PathBuf;

use blitz_dom::DomError;
use thiserror::Error;

/// Errors that can occur while building or updating a table.
#[derive(Debug, Error)]
pub enum TableError {
	/// No element matched the container selector.
	#[error("Table {selector} not found")]
	ContainerNotFound {
		/// The selector used to look up the container.
		selector: String,
	},

	/// The table was constructed without a container and cannot mount fragments.
	#[error("table has no container; it was not found at construction")]
	NoContainer,

	/// A body operation was requested before any data was rendered.
	#[error("table body has not been rendered; call set_data first")]
	BodyNotRendered,

	/// Markup tree operation failed.
	#[error(transparent)]
	Dom(#[from] DomError),

	/// Reading a configuration file failed.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// JSON configuration could not be deserialized.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	/// TOML configuration could not be deserialized.
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Configuration file extension is neither `.json` nor `.toml`.
	#[error("Unsupported configuration format: {}", .0.display())]
	UnsupportedConfigFormat(PathBuf),
}

/// Result type alias for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
