// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use crate::AckCard;

/// Handle to one slot in the list. It is local to this mount and unrelated to the
/// backend key: drafts have an id but no key, and a saved card gets a fresh id when it
/// replaces the old one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub u64);

impl Display for EntryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "#{}", self.0) }
}

/// Where an entry is in the save / delete protocol.
///
/// ```text
/// Clean --save--> Saving --ok--> (replaced by a new Clean entry)
///                 Saving --err--> Clean (old data stays)
/// Clean --delete--> PendingDelete --ok--> (removed)
///                   PendingDelete --err--> Clean
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EntryState {
    #[default]
    Clean,
    Saving,
    PendingDelete,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AckEntry {
    pub id: EntryId,
    pub card: AckCard,
    pub state: EntryState,
    /// Drafts stay hidden until their first save succeeds.
    pub is_visible: bool,
}

impl AckEntry {
    #[must_use]
    pub fn is_hidden_draft(&self) -> bool { self.card.is_draft() && !self.is_visible }
}
