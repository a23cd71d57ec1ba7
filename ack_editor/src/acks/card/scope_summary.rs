// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use crate::{InlineString, inline_string, ui_str};

/// One line summary of a scope dimension, eg: `All`, `main`, or `main (+2)`. Never
/// reorders the values: "first" means first as stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScopeSummary<'a> {
    pub maybe_first: Option<&'a str>,
    pub remaining_count: usize,
}

impl<'a> ScopeSummary<'a> {
    #[must_use]
    pub fn new(values: &'a [String]) -> Self {
        Self {
            maybe_first: values.first().map(String::as_str),
            remaining_count: values.len().saturating_sub(1),
        }
    }

    /// The part shown in front of the count indicator.
    #[must_use]
    pub fn lead_text(&self) -> &'a str { self.maybe_first.unwrap_or(ui_str::ALL_SUMMARY) }

    /// The count indicator, eg: ` (+2)`. [None] when there is at most one value.
    #[must_use]
    pub fn count_text(&self) -> Option<InlineString> {
        (self.remaining_count > 0).then(|| inline_string!(" (+{})", self.remaining_count))
    }
}

impl Display for ScopeSummary<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lead_text())?;
        if let Some(count) = self.count_text() {
            write!(f, "{count}")?;
        }
        Ok(())
    }
}
