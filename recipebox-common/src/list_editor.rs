//! Dynamic list editor for ingredient and step rows
//!
//! The list always exposes one trailing blank row for the next item. Typing
//! into that row appends a fresh blank one; clearing any other row removes
//! it. Blank means empty after trimming.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DynamicList {
    entries: Vec<String>,
}

impl Default for DynamicList {
    fn default() -> Self {
        Self::new()
    }
}

impl DynamicList {
    /// A list holding only the blank placeholder row
    pub fn new() -> Self {
        Self {
            entries: vec![String::new()],
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true: the placeholder row is always present
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply a single row edit
    ///
    /// Replaces row `index`, grows the list when the last row receives
    /// non-blank text, then drops every blank row except the last one.
    pub fn edit(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        if index >= self.entries.len() {
            return Err(Error::InvalidInput(format!(
                "row {} out of range (list has {} rows)",
                index,
                self.entries.len()
            )));
        }

        let value = value.into();
        let grows = index == self.entries.len() - 1 && !is_blank(&value);
        self.entries[index] = value;
        if grows {
            self.entries.push(String::new());
        }

        let last = self.entries.len() - 1;
        let mut position = 0;
        self.entries.retain(|entry| {
            let keep = position == last || !is_blank(entry);
            position += 1;
            keep
        });

        Ok(())
    }

    /// Non-blank rows, in order, as typed
    pub fn sanitized(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| !is_blank(entry))
            .cloned()
            .collect()
    }

    /// Back to the single placeholder row
    pub fn reset(&mut self) {
        self.entries = vec![String::new()];
    }
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
