//! Rendering options
//!
//! The defaults reproduce the stored-memory report exactly. They exist for
//! embedding and tests; the CLI never changes them.

use serde::{Deserialize, Serialize};

/// Options controlling how a report is rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Line printed once before any metadata block
    #[serde(default = "default_confirmation")]
    pub confirmation: String,

    /// Number of spaces per JSON indentation level
    #[serde(default = "default_indent")]
    pub indent: usize,
}

fn default_confirmation() -> String {
    "Memory stored successfully!".to_string()
}

fn default_indent() -> usize {
    2
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            confirmation: default_confirmation(),
            indent: default_indent(),
        }
    }
}

impl RenderOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the confirmation line
    pub fn with_confirmation(mut self, line: impl Into<String>) -> Self {
        self.confirmation = line.into();
        self
    }

    /// Builder method: set the indentation width
    pub fn with_indent(mut self, spaces: usize) -> Self {
        self.indent = spaces;
        self
    }

    /// Indentation unit handed to the JSON pretty printer
    pub(crate) fn indent_unit(&self) -> Vec<u8> {
        vec![b' '; self.indent]
    }
}
