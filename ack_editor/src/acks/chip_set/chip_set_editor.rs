// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use test_ack_schema::ScopeDimension;

use crate::{ChipInput, ChipInputEvent, ChipInputOutcome, InlineString, InlineVec,
            NodeKind, RenderStrategy, ViewNode, ui_str};

/// Edits one scope dimension as a set of chips. An empty set means "all", and the
/// "all" indicator is shown exactly when the set is empty.
///
/// Values keep insertion order for display only. What gets submitted is sorted, see
/// [`ChipSetEditor::to_sorted_values`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChipSetEditor {
    dimension: ScopeDimension,
    values: InlineVec<InlineString>,
    pub input: ChipInput,
}

mod chip_set_editor_impl {
    use super::{ChipInput, ChipInputEvent, ChipInputOutcome, ChipSetEditor, InlineVec,
                ScopeDimension};

    impl ChipSetEditor {
        #[must_use]
        pub fn new(dimension: ScopeDimension) -> Self {
            Self {
                dimension,
                values: InlineVec::new(),
                input: ChipInput::default(),
            }
        }

        /// Seeds from stored data. Stored values are taken as they are (no trimming),
        /// only repeats are collapsed.
        #[must_use]
        pub fn seeded(dimension: ScopeDimension, values: &[String]) -> Self {
            let mut it = Self::new(dimension);
            for value in values {
                if !it.contains(value) {
                    it.values.push(value.as_str().into());
                }
            }
            it
        }

        #[must_use]
        pub fn dimension(&self) -> ScopeDimension { self.dimension }

        /// Adds `text` after trimming it. Returns `false` and changes nothing when the
        /// trimmed text is empty or already present.
        pub fn add(&mut self, text: &str) -> bool {
            let trimmed = text.trim();
            if trimmed.is_empty() || self.contains(trimmed) {
                return false;
            }
            self.values.push(trimmed.into());
            true
        }

        /// Returns `false` if `text` wasn't there.
        pub fn remove(&mut self, text: &str) -> bool {
            let Some(index) = self.values.iter().position(|it| it.as_str() == text)
            else {
                return false;
            };
            self.values.remove(index);
            true
        }

        #[must_use]
        pub fn contains(&self, text: &str) -> bool {
            self.values.iter().any(|it| it.as_str() == text)
        }

        #[must_use]
        pub fn len(&self) -> usize { self.values.len() }

        #[must_use]
        pub fn is_empty(&self) -> bool { self.values.is_empty() }

        #[must_use]
        pub fn is_all_indicator_visible(&self) -> bool { self.is_empty() }

        pub fn values(&self) -> impl Iterator<Item = &str> {
            self.values.iter().map(|it| it.as_str())
        }

        /// Values in lexicographic order, ready to submit.
        #[must_use]
        pub fn to_sorted_values(&self) -> Vec<String> {
            let mut acc = self.values().map(String::from).collect::<Vec<_>>();
            acc.sort();
            acc
        }

        /// Routes `event` to the text box and adds whatever it commits. Returns `true`
        /// if a chip was added.
        pub fn apply_input_event(&mut self, event: ChipInputEvent) -> bool {
            match self.input.apply_event(event) {
                ChipInputOutcome::Noop => false,
                ChipInputOutcome::Commit(text) => self.add(&text),
            }
        }
    }
}

impl ChipSetEditor {
    #[must_use]
    pub fn render(&self, strategy: &dyn RenderStrategy) -> ViewNode {
        let header = ViewNode::new(NodeKind::Heading)
            .class("chip-set-header")
            .text(ui_str::dimension_label(self.dimension))
            .child(
                ViewNode::new(NodeKind::AllIndicator)
                    .class("all-indicator")
                    .text(ui_str::ALL_INDICATOR_INLINE)
                    .hidden(!self.is_all_indicator_visible()),
            );

        let chips = ViewNode::new(NodeKind::Container)
            .class("chips")
            .children(self.values().map(|value| {
                ViewNode::new(NodeKind::Chip)
                    .class("chip")
                    .text(value)
                    .maybe_child(strategy.chip_remove_control(self.dimension, value))
            }));

        ViewNode::new(NodeKind::Container)
            .class("chip-set")
            .child(header)
            .child(chips)
            .maybe_child(strategy.chip_input_row(self.dimension, &self.input))
    }
}
