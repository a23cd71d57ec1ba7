// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use test_ack_schema::{AckKey, AcknowledgmentRecord, ScopeDimension};

use crate::{ChipSetEditor, EntryId, NodeKind, RenderStrategy, ViewNode, ui_str};

/// Identifies one opening of the modal. Reopening the modal, even for the same entry,
/// starts a new session, which is how a settling save knows whether the modal still
/// shows the editor that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModalSession(pub u64);

/// Contents of the modal: three chip sets and a note, seeded from one card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailEditor {
    pub entry: EntryId,
    pub session: ModalSession,
    maybe_key: Option<AckKey>,
    test_name: String,
    chip_sets: [ChipSetEditor; 3],
    pub note: String,
    pub is_saving: bool,
}

fn slot(dimension: ScopeDimension) -> usize {
    match dimension {
        ScopeDimension::Branches => 0,
        ScopeDimension::Devices => 1,
        ScopeDimension::TestCases => 2,
    }
}

mod detail_editor_impl {
    use super::{AckKey, AcknowledgmentRecord, ChipSetEditor, DetailEditor, EntryId,
                ModalSession, ScopeDimension, slot};

    impl DetailEditor {
        #[must_use]
        pub fn new(
            entry: EntryId,
            session: ModalSession,
            record: &AcknowledgmentRecord,
        ) -> Self {
            Self {
                entry,
                session,
                maybe_key: record.key.clone(),
                test_name: record.test_name.clone(),
                chip_sets: ScopeDimension::ALL.map(|dimension| {
                    ChipSetEditor::seeded(dimension, record.values(dimension))
                }),
                note: record.note_or_empty().to_string(),
                is_saving: false,
            }
        }

        #[must_use]
        pub fn test_name(&self) -> &str { &self.test_name }

        #[must_use]
        pub fn maybe_key(&self) -> Option<&AckKey> { self.maybe_key.as_ref() }

        /// The card this editor was opened for was saved (by another session) and
        /// replaced. Point at the replacement so that saving again updates it instead
        /// of creating another record.
        pub fn retarget(&mut self, entry: EntryId, key: AckKey) {
            self.entry = entry;
            self.maybe_key = Some(key);
        }

        #[must_use]
        pub fn chip_set(&self, dimension: ScopeDimension) -> &ChipSetEditor {
            &self.chip_sets[slot(dimension)]
        }

        pub fn chip_set_mut(&mut self, dimension: ScopeDimension) -> &mut ChipSetEditor {
            &mut self.chip_sets[slot(dimension)]
        }

        /// Reads all three chip sets and the note. Every dimension is sorted, and the
        /// key is whatever the card had (none for a draft).
        #[must_use]
        pub fn build_save_request(&self) -> AcknowledgmentRecord {
            AcknowledgmentRecord {
                key: self.maybe_key.clone(),
                test_name: self.test_name.clone(),
                branches: self.chip_set(ScopeDimension::Branches).to_sorted_values(),
                devices: self.chip_set(ScopeDimension::Devices).to_sorted_values(),
                test_case_names: self
                    .chip_set(ScopeDimension::TestCases)
                    .to_sorted_values(),
                note: Some(self.note.clone()),
            }
        }
    }
}

impl DetailEditor {
    #[must_use]
    pub fn render(&self, strategy: &dyn RenderStrategy) -> ViewNode {
        let content = ViewNode::new(NodeKind::Container)
            .class("modal-content")
            .child(
                ViewNode::new(NodeKind::Heading)
                    .class("modal-title")
                    .text(ui_str::MODAL_TITLE),
            )
            .child(
                ViewNode::new(NodeKind::Paragraph)
                    .class("modal-test-name")
                    .text(format!("{}{}", ui_str::MODAL_TEST_PREFIX, self.test_name)),
            )
            .children(self.chip_sets.iter().map(|it| it.render(strategy)))
            .child(
                ViewNode::new(NodeKind::Heading)
                    .class("note-header")
                    .text(ui_str::NOTE_HEADER),
            )
            .child(strategy.note_field(&self.note));

        ViewNode::new(NodeKind::Container)
            .class("detail-editor")
            .child(content)
            .child(strategy.modal_footer(self.is_saving))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Affordance, Capabilities, ChipInputEvent, assert_eq2};

    fn record() -> AcknowledgmentRecord {
        AcknowledgmentRecord {
            key: Some(AckKey::new("k7")),
            test_name: "T".into(),
            branches: vec!["b1".into()],
            devices: vec![],
            test_case_names: vec!["c1".into(), "c2".into()],
            note: Some("n".into()),
        }
    }

    #[test]
    fn seeded_from_record() {
        let editor = DetailEditor::new(EntryId(1), ModalSession(1), &record());
        assert_eq2!(
            editor
                .chip_set(ScopeDimension::Branches)
                .values()
                .collect::<Vec<_>>(),
            vec!["b1"]
        );
        assert!(editor.chip_set(ScopeDimension::Devices).is_empty());
        assert_eq2!(editor.chip_set(ScopeDimension::TestCases).len(), 2);
        assert_eq2!(editor.note, "n");
        assert_eq2!(editor.build_save_request(), record());
    }

    #[test]
    fn save_request_is_sorted() {
        let mut editor =
            DetailEditor::new(EntryId(1), ModalSession(1), &AcknowledgmentRecord::new_draft("T"));
        let branches = editor.chip_set_mut(ScopeDimension::Branches);
        branches.add("beta");
        branches.add("alpha");
        editor
            .chip_set_mut(ScopeDimension::Devices)
            .apply_input_event(ChipInputEvent::TextChanged("walleye".into()));

        let request = editor.build_save_request();
        assert_eq2!(request.key, None);
        assert_eq2!(request.branches, vec!["alpha", "beta"]);
        // Text left in the box is not a chip.
        assert!(request.devices.is_empty());
        assert_eq2!(request.note, Some(String::new()));
    }

    #[test]
    fn read_only_modal() {
        let editor = DetailEditor::new(EntryId(1), ModalSession(1), &record());
        let node = editor.render(Capabilities::read_only().render_strategy());
        assert_eq2!(node.affordances(), vec![&Affordance::Close]);
        assert!(node.text_entries().iter().all(|it| it.is_disabled));
        assert_eq2!(node.text_entries().len(), 1);
        assert!(node.visible_text().starts_with("Test AcknowledgmentTest: T"));
    }

    #[test]
    fn writable_modal() {
        let editor = DetailEditor::new(EntryId(1), ModalSession(1), &record());
        let node = editor.render(Capabilities::writable().render_strategy());
        // Three chip boxes and the note.
        assert_eq2!(node.text_entries().len(), 4);
        assert!(node.find_by_affordance(&Affordance::Save).is_some());
        assert!(node.find_by_affordance(&Affordance::Close).is_some());
    }
}
