// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use test_ack_schema::AcknowledgmentRecord;

use crate::{DEBUG_ACKS_MOD, DetailEditor, EntryId, ModalSession, NodeKind, RenderStrategy,
            ViewNode};

/// The single modal region. Opening it replaces whatever it showed before, without
/// asking, and unsaved changes in the old editor are gone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalRegion {
    maybe_editor: Option<DetailEditor>,
    last_session: u64,
}

impl ModalRegion {
    pub fn open(&mut self, entry: EntryId, record: &AcknowledgmentRecord) -> ModalSession {
        self.last_session += 1;
        let session = ModalSession(self.last_session);

        if let Some(discarded) = self
            .maybe_editor
            .replace(DetailEditor::new(entry, session, record))
        {
            // % is Display, ? is Debug.
            DEBUG_ACKS_MOD.then(|| {
                tracing::debug!(
                    message = "modal -> replaced open editor",
                    discarded_entry = %discarded.entry,
                    discarded_session = ?discarded.session,
                    entry = %entry,
                );
            });
        }

        session
    }

    pub fn close(&mut self) -> Option<DetailEditor> { self.maybe_editor.take() }

    /// Closes the modal only if it still shows `session`. Returns whether it did.
    pub fn close_if_showing(&mut self, session: ModalSession) -> bool {
        if self.is_showing(session) {
            self.maybe_editor = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool { self.maybe_editor.is_some() }

    #[must_use]
    pub fn is_showing(&self, session: ModalSession) -> bool {
        self.maybe_editor
            .as_ref()
            .is_some_and(|editor| editor.session == session)
    }

    #[must_use]
    pub fn editor(&self) -> Option<&DetailEditor> { self.maybe_editor.as_ref() }

    pub fn editor_mut(&mut self) -> Option<&mut DetailEditor> { self.maybe_editor.as_mut() }

    #[must_use]
    pub fn render(&self, strategy: &dyn RenderStrategy) -> ViewNode {
        ViewNode::new(NodeKind::Modal)
            .class("modal")
            .hidden(self.maybe_editor.is_none())
            .maybe_child(self.maybe_editor.as_ref().map(|it| it.render(strategy)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Capabilities, assert_eq2};

    #[test]
    fn reopening_starts_a_new_session() {
        let mut modal = ModalRegion::default();
        assert!(!modal.is_open());
        assert!(modal.render(Capabilities::writable().render_strategy()).is_hidden);

        let first = modal.open(EntryId(1), &AcknowledgmentRecord::new_draft("A"));
        modal
            .editor_mut()
            .unwrap()
            .note
            .push_str("unsaved");

        let second = modal.open(EntryId(1), &AcknowledgmentRecord::new_draft("A"));
        assert!(first != second);
        assert!(!modal.is_showing(first));
        assert_eq2!(modal.editor().unwrap().note, "");
    }

    #[test]
    fn close_if_showing_leaves_newer_editor_alone() {
        let mut modal = ModalRegion::default();
        let first = modal.open(EntryId(1), &AcknowledgmentRecord::new_draft("A"));
        let second = modal.open(EntryId(2), &AcknowledgmentRecord::new_draft("B"));

        assert!(!modal.close_if_showing(first));
        assert!(modal.is_open());
        assert!(modal.close_if_showing(second));
        assert!(!modal.is_open());
        assert!(modal.close().is_none());
    }
}
