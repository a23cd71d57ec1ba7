// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{EntryId, EntryState};

/// Errors from [`crate::AckListController::handle_event`]. None of these are fatal: the
/// list stays intact and the event is simply not applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum AckError {
    /// A mutation was attempted on a read-only mount. The render strategy never offers
    /// an affordance for this, so seeing it means the host sent the event on its own.
    #[error("Acknowledgments are read-only, can't {attempted}")]
    #[diagnostic(
        code(test_ack_editor::read_only),
        help("Contact a dashboard administrator to add, edit, or remove acknowledgments.")
    )]
    ReadOnly { attempted: &'static str },

    #[error("No acknowledgment entry with id {0}")]
    #[diagnostic(code(test_ack_editor::unknown_entry))]
    UnknownEntry(EntryId),

    /// The entry already has a save or delete in flight. Its request is not repeated.
    #[error("Acknowledgment entry {entry} is busy ({state:?})")]
    #[diagnostic(code(test_ack_editor::entry_busy))]
    EntryBusy { entry: EntryId, state: EntryState },

    #[error("The detail editor is not open")]
    #[diagnostic(code(test_ack_editor::no_open_editor))]
    NoOpenEditor,

    #[error("Can't add an acknowledgment without a test name")]
    #[diagnostic(
        code(test_ack_editor::empty_test_name),
        help("Type or pick a test name in the search field first.")
    )]
    EmptyTestName,
}
