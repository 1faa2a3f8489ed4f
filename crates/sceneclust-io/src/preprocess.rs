//! Cell-level preprocessing: categorical mapping and address stripping.

use std::borrow::Cow;
use std::collections::HashMap;

use regex::Regex;

use crate::IoError;

/// Preprocessing applied to each raw CSV cell before it is parsed as a float.
///
/// Construct via [`PreprocessConfig::new`] (or [`Default`]), then chain
/// `with_*` methods.
///
/// # Defaults
///
/// | Parameter        | Default                                           |
/// |------------------|---------------------------------------------------|
/// | categories       | `A→1 B→2 C→3 D→4 E→5 STA→1 AP→2`                  |
/// | `address_column` | `Some("address")`                                 |
/// | `address_prefix` | `192\.168\.\d+\.`                                 |
///
/// Categorical mapping matches whole cells in any column. The address prefix
/// is removed from cells of the address column only, leaving the host octet.
#[derive(Debug, Clone)]
pub struct PreprocessConfig {
    categories: HashMap<String, f64>,
    address_column: Option<String>,
    address_prefix: Regex,
}

const DEFAULT_ADDRESS_PREFIX: &str = r"192\.168\.\d+\.";

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PreprocessConfig {
    /// Create a configuration with the default categories and address handling.
    #[must_use]
    pub fn new() -> Self {
        let categories = [
            ("A", 1.0),
            ("B", 2.0),
            ("C", 3.0),
            ("D", 4.0),
            ("E", 5.0),
            ("STA", 1.0),
            ("AP", 2.0),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
        Self {
            categories,
            address_column: Some("address".to_string()),
            address_prefix: Regex::new(DEFAULT_ADDRESS_PREFIX)
                .expect("compile default address prefix"),
        }
    }

    /// Add or replace a categorical mapping `raw → value`.
    #[must_use]
    pub fn with_category(mut self, raw: &str, value: f64) -> Self {
        self.categories.insert(raw.to_string(), value);
        self
    }

    /// Remove every categorical mapping.
    #[must_use]
    pub fn without_categories(mut self) -> Self {
        self.categories.clear();
        self
    }

    /// Set the column whose cells have the address prefix removed
    /// (`None` disables address stripping).
    #[must_use]
    pub fn with_address_column(mut self, column: Option<String>) -> Self {
        self.address_column = column;
        self
    }

    /// Set the address prefix pattern.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidPattern`] if `pattern` is not a valid regex.
    pub fn with_address_prefix(mut self, pattern: &str) -> Result<Self, IoError> {
        self.address_prefix = Regex::new(pattern).map_err(|e| IoError::InvalidPattern {
            pattern: pattern.to_string(),
            source: e,
        })?;
        Ok(self)
    }

    /// Return the configured address column.
    #[must_use]
    pub fn address_column(&self) -> Option<&str> {
        self.address_column.as_deref()
    }

    /// Return the number of categorical mappings.
    #[must_use]
    pub fn n_categories(&self) -> usize {
        self.categories.len()
    }

    /// Look up the categorical value for a trimmed raw cell.
    pub(crate) fn category(&self, raw: &str) -> Option<f64> {
        self.categories.get(raw.trim()).copied()
    }

    /// Return the cell text to parse, with the address prefix removed when
    /// `column` is the address column.
    pub(crate) fn strip<'a>(&self, column: &str, raw: &'a str) -> Cow<'a, str> {
        match &self.address_column {
            Some(addr) if addr == column => self.address_prefix.replace_all(raw.trim(), ""),
            _ => Cow::Borrowed(raw.trim()),
        }
    }
}
