// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Debug;

use test_ack_schema::ScopeDimension;

use crate::{Affordance, Capabilities, ChipInput, EntryId, Icon, NodeKind, TestNameSearch,
            ViewNode, ui_str};

/// The parts of the tree that differ between a writable and a read-only mount. The
/// components ask their strategy for these and attach whatever comes back, so they
/// never branch on a flag themselves.
pub trait RenderStrategy: Debug + Send + Sync {
    fn capabilities(&self) -> Capabilities;

    fn header_summary(&self) -> &'static str;

    /// Search field with autocomplete, plus the button that creates a draft.
    fn search_row(&self, search: &TestNameSearch) -> Option<ViewNode>;

    fn card_body_class(&self) -> &'static str;

    fn card_delete_control(&self, entry: EntryId, is_pending_delete: bool)
    -> Option<ViewNode>;

    fn chip_remove_control(&self, dimension: ScopeDimension, value: &str)
    -> Option<ViewNode>;

    fn chip_input_row(
        &self,
        dimension: ScopeDimension,
        input: &ChipInput,
    ) -> Option<ViewNode>;

    fn note_field(&self, note: &str) -> ViewNode;

    fn modal_footer(&self, is_saving: bool) -> ViewNode;
}

fn close_button() -> ViewNode {
    ViewNode::new(NodeKind::Button)
        .class("modal-close")
        .text(ui_str::BUTTON_CLOSE)
        .affordance(Affordance::Close)
}

fn note_text_area(note: &str) -> ViewNode {
    ViewNode::new(NodeKind::TextArea)
        .class("note")
        .text(note)
        .placeholder(ui_str::NOTE_PLACEHOLDER)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WritableStrategy;

impl RenderStrategy for WritableStrategy {
    fn capabilities(&self) -> Capabilities { Capabilities::writable() }

    fn header_summary(&self) -> &'static str { ui_str::HEADER_SUMMARY_WRITABLE }

    fn search_row(&self, search: &TestNameSearch) -> Option<ViewNode> {
        Some(search.render())
    }

    fn card_body_class(&self) -> &'static str { "ack-details" }

    fn card_delete_control(
        &self,
        entry: EntryId,
        is_pending_delete: bool,
    ) -> Option<ViewNode> {
        Some(
            ViewNode::new(NodeKind::Button)
                .class("btn-flat delete-button")
                .disabled(is_pending_delete)
                .affordance(Affordance::DeleteEntry(entry))
                .child(ViewNode::new(NodeKind::Icon(Icon::Clear))),
        )
    }

    fn chip_remove_control(
        &self,
        dimension: ScopeDimension,
        value: &str,
    ) -> Option<ViewNode> {
        Some(
            ViewNode::new(NodeKind::Icon(Icon::Clear))
                .class("close")
                .affordance(Affordance::RemoveChip(dimension, value.into())),
        )
    }

    fn chip_input_row(
        &self,
        dimension: ScopeDimension,
        input: &ChipInput,
    ) -> Option<ViewNode> {
        Some(input.render(dimension))
    }

    fn note_field(&self, note: &str) -> ViewNode {
        note_text_area(note).affordance(Affordance::NoteField)
    }

    fn modal_footer(&self, is_saving: bool) -> ViewNode {
        ViewNode::new(NodeKind::Container)
            .class("modal-footer")
            .child(close_button())
            .child(
                ViewNode::new(NodeKind::Button)
                    .class("modal-save")
                    .text(ui_str::BUTTON_SAVE)
                    .disabled(is_saving)
                    .affordance(Affordance::Save),
            )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReadOnlyStrategy;

impl RenderStrategy for ReadOnlyStrategy {
    fn capabilities(&self) -> Capabilities { Capabilities::read_only() }

    fn header_summary(&self) -> &'static str { ui_str::HEADER_SUMMARY_READ_ONLY }

    fn search_row(&self, _search: &TestNameSearch) -> Option<ViewNode> { None }

    // Without the delete control the body takes the full width.
    fn card_body_class(&self) -> &'static str { "ack-details full-width" }

    fn card_delete_control(
        &self,
        _entry: EntryId,
        _is_pending_delete: bool,
    ) -> Option<ViewNode> {
        None
    }

    fn chip_remove_control(
        &self,
        _dimension: ScopeDimension,
        _value: &str,
    ) -> Option<ViewNode> {
        None
    }

    fn chip_input_row(
        &self,
        _dimension: ScopeDimension,
        _input: &ChipInput,
    ) -> Option<ViewNode> {
        None
    }

    fn note_field(&self, note: &str) -> ViewNode { note_text_area(note).disabled(true) }

    fn modal_footer(&self, _is_saving: bool) -> ViewNode {
        ViewNode::new(NodeKind::Container)
            .class("modal-footer")
            .child(close_button())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn read_only_strategy_offers_nothing_mutating() {
        let strategy = ReadOnlyStrategy;
        let search = TestNameSearch::new(vec!["T".into()]);
        assert!(strategy.search_row(&search).is_none());
        assert!(strategy.card_delete_control(EntryId(1), false).is_none());
        assert!(
            strategy
                .chip_remove_control(ScopeDimension::Branches, "main")
                .is_none()
        );
        assert!(
            strategy
                .chip_input_row(ScopeDimension::Branches, &ChipInput::default())
                .is_none()
        );

        let note = strategy.note_field("n");
        assert!(note.is_disabled);
        assert!(note.maybe_affordance.is_none());

        let footer = strategy.modal_footer(false);
        assert_eq2!(footer.affordances(), vec![&Affordance::Close]);
    }

    #[test]
    fn writable_footer_has_save_and_close() {
        let footer = WritableStrategy.modal_footer(false);
        assert_eq2!(
            footer.affordances(),
            vec![&Affordance::Close, &Affordance::Save]
        );
        let saving = WritableStrategy.modal_footer(true);
        let save = saving.find_by_affordance(&Affordance::Save).unwrap();
        assert!(save.is_disabled);
    }

    #[test]
    fn pending_delete_disables_control() {
        let control = WritableStrategy
            .card_delete_control(EntryId(3), true)
            .unwrap();
        assert!(control.is_disabled);
        assert_eq2!(
            control.maybe_affordance,
            Some(Affordance::DeleteEntry(EntryId(3)))
        );
    }
}
