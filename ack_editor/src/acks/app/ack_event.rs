// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use test_ack_schema::ScopeDimension;

use crate::{ChipInputEvent, EntryId};

/// Everything the user can do. The host produces these from the
/// [`crate::Affordance`]s in the rendered tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AckEvent {
    SearchTextChanged(String),
    SuggestionPicked(String),
    AddFromSearchClicked,
    CardClicked(EntryId),
    DeleteClicked(EntryId),
    ChipInput {
        dimension: ScopeDimension,
        event: ChipInputEvent,
    },
    ChipRemoveClicked {
        dimension: ScopeDimension,
        value: String,
    },
    NoteChanged(String),
    SaveClicked,
    CloseClicked,
    NoticesDismissed,
}

impl AckEvent {
    /// Short description used in logs and in [`crate::AckError::ReadOnly`].
    #[must_use]
    pub fn describe(&self) -> &'static str {
        match self {
            AckEvent::SearchTextChanged(_) | AckEvent::SuggestionPicked(_) => {
                "search for tests"
            }
            AckEvent::AddFromSearchClicked => "add an acknowledgment",
            AckEvent::CardClicked(_) => "open an acknowledgment",
            AckEvent::DeleteClicked(_) => "delete an acknowledgment",
            AckEvent::ChipInput { .. } => "edit a scope",
            AckEvent::ChipRemoveClicked { .. } => "remove a scope value",
            AckEvent::NoteChanged(_) => "edit the note",
            AckEvent::SaveClicked => "save an acknowledgment",
            AckEvent::CloseClicked => "close the editor",
            AckEvent::NoticesDismissed => "dismiss notices",
        }
    }
}
