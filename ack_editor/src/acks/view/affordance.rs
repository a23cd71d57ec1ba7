// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use strum_macros::AsRefStr;
use test_ack_schema::ScopeDimension;

use crate::{AckEvent, ChipInputEvent, EntryId, InlineString};

/// Glyph names from the Material icon font, which is what the dashboard renders them
/// with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr)]
pub enum Icon {
    #[strum(to_string = "clear")]
    Clear,

    #[strum(to_string = "add")]
    Add,

    #[strum(to_string = "info_outline")]
    InfoOutline,
}

/// How long the slide transitions of list entries take.
pub const ENTRY_TRANSITION_DURATION: Duration = Duration::from_millis(150);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    SlideDown(Duration),
    SlideUp(Duration),
}

impl Transition {
    #[must_use]
    pub fn slide_down() -> Self { Self::SlideDown(ENTRY_TRANSITION_DURATION) }

    #[must_use]
    pub fn slide_up() -> Self { Self::SlideUp(ENTRY_TRANSITION_DURATION) }
}

/// Something a [`crate::ViewNode`] lets the user do. The host turns an interaction
/// with the node into the [`AckEvent`] returned by [`Affordance::to_event`] (text
/// carrying affordances take the current text of the field).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Affordance {
    SearchField,
    PickSuggestion(String),
    AddFromSearch,
    OpenEntry(EntryId),
    DeleteEntry(EntryId),
    ChipField(ScopeDimension),
    AddChip(ScopeDimension),
    RemoveChip(ScopeDimension, InlineString),
    NoteField,
    Save,
    Close,
    DismissNotices,
}

impl Affordance {
    /// `true` for anything that changes acknowledgment data (or leads to a request that
    /// does). None of these may appear in a read-only tree.
    #[must_use]
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Affordance::SearchField
                | Affordance::PickSuggestion(_)
                | Affordance::AddFromSearch
                | Affordance::DeleteEntry(_)
                | Affordance::ChipField(_)
                | Affordance::AddChip(_)
                | Affordance::RemoveChip(..)
                | Affordance::NoteField
                | Affordance::Save
        )
    }

    /// The event this affordance produces when activated. `text` is the current content
    /// of the field for text entry affordances and is ignored otherwise.
    #[must_use]
    pub fn to_event(&self, text: &str) -> AckEvent {
        match self {
            Affordance::SearchField => AckEvent::SearchTextChanged(text.into()),
            Affordance::PickSuggestion(test_name) => {
                AckEvent::SuggestionPicked(test_name.clone())
            }
            Affordance::AddFromSearch => AckEvent::AddFromSearchClicked,
            Affordance::OpenEntry(entry) => AckEvent::CardClicked(*entry),
            Affordance::DeleteEntry(entry) => AckEvent::DeleteClicked(*entry),
            Affordance::ChipField(dimension) => AckEvent::ChipInput {
                dimension: *dimension,
                event: ChipInputEvent::TextChanged(text.into()),
            },
            Affordance::AddChip(dimension) => AckEvent::ChipInput {
                dimension: *dimension,
                event: ChipInputEvent::AddClicked,
            },
            Affordance::RemoveChip(dimension, value) => AckEvent::ChipRemoveClicked {
                dimension: *dimension,
                value: value.to_string(),
            },
            Affordance::NoteField => AckEvent::NoteChanged(text.into()),
            Affordance::Save => AckEvent::SaveClicked,
            Affordance::Close => AckEvent::CloseClicked,
            Affordance::DismissNotices => AckEvent::NoticesDismissed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn icon_glyph_names() {
        assert_eq2!(Icon::Clear.as_ref(), "clear");
        assert_eq2!(Icon::Add.as_ref(), "add");
        assert_eq2!(Icon::InfoOutline.as_ref(), "info_outline");
    }

    #[test]
    fn viewing_and_closing_are_not_mutations() {
        assert!(!Affordance::OpenEntry(EntryId(1)).is_mutation());
        assert!(!Affordance::Close.is_mutation());
        assert!(!Affordance::DismissNotices.is_mutation());
        assert!(Affordance::DeleteEntry(EntryId(1)).is_mutation());
        assert!(Affordance::Save.is_mutation());
    }

    #[test]
    fn text_field_affordance_carries_text() {
        assert_eq2!(
            Affordance::ChipField(ScopeDimension::Devices).to_event("walleye"),
            AckEvent::ChipInput {
                dimension: ScopeDimension::Devices,
                event: ChipInputEvent::TextChanged("walleye".into()),
            }
        );
        assert_eq2!(Affordance::Save.to_event("ignored"), AckEvent::SaveClicked);
    }
}
