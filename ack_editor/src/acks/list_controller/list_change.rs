// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use test_ack_schema::AckKey;

use crate::{EntryId, Transition};

/// How the list was reconciled after a network call settled. The host uses it to run
/// the transition, and to tell the user about failures if it wants to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListChange {
    /// A draft was saved for the first time and is now shown as `entry`.
    Inserted {
        entry: EntryId,
        key: AckKey,
        transition: Transition,
    },
    /// An existing card was saved and replaced by a card built from the saved data.
    Replaced {
        old: EntryId,
        new: EntryId,
        key: AckKey,
    },
    Removed {
        entry: EntryId,
        key: AckKey,
        transition: Transition,
    },
    /// A save or delete failed and the entry is back to what it showed before.
    Reverted { entry: EntryId, reason: String },
    /// A draft's first save failed, the draft is gone.
    Discarded { entry: EntryId, reason: String },
    /// The entry the call was made for no longer exists.
    Ignored { entry: EntryId },
}

impl ListChange {
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            ListChange::Reverted { .. } | ListChange::Discarded { .. }
        )
    }
}
