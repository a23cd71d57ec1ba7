// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use test_ack_schema::{AckKey, AcknowledgmentRecord, ScopeDimension};

use crate::{Affordance, EntryId, Icon, NodeKind, RenderStrategy, ScopeSummary, ViewNode,
            ui_str};

/// A card in the list. It is a projection of one [`AcknowledgmentRecord`] and has no
/// state of its own: editing builds a new card from the saved data and swaps it in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AckCard {
    record: AcknowledgmentRecord,
}

/// Everything a card needs to render besides its data.
#[derive(Clone, Copy, Debug)]
pub struct CardRenderArgs<'a> {
    pub entry: EntryId,
    pub is_visible: bool,
    pub is_pending_delete: bool,
    pub strategy: &'a dyn RenderStrategy,
}

impl AckCard {
    #[must_use]
    pub fn new(record: AcknowledgmentRecord) -> Self { Self { record } }

    #[must_use]
    pub fn record(&self) -> &AcknowledgmentRecord { &self.record }

    #[must_use]
    pub fn maybe_key(&self) -> Option<&AckKey> { self.record.key.as_ref() }

    #[must_use]
    pub fn test_name(&self) -> &str { &self.record.test_name }

    #[must_use]
    pub fn is_draft(&self) -> bool { self.record.is_draft() }

    #[must_use]
    pub fn summary(&self, dimension: ScopeDimension) -> ScopeSummary<'_> {
        ScopeSummary::new(self.record.values(dimension))
    }

    #[must_use]
    pub fn render(&self, args: CardRenderArgs<'_>) -> ViewNode {
        let CardRenderArgs {
            entry,
            is_visible,
            is_pending_delete,
            strategy,
        } = args;

        let title = ViewNode::new(NodeKind::Container)
            .class("ack-title")
            .child(
                ViewNode::new(NodeKind::Text)
                    .class("bold")
                    .text(self.test_name()),
            )
            .child(ViewNode::new(NodeKind::Icon(Icon::InfoOutline)).class("info"));

        let summary_lines = ScopeDimension::ALL.map(|dimension| {
            let summary = self.summary(dimension);
            ViewNode::new(NodeKind::Paragraph)
                .class("scope-summary")
                .child(
                    ViewNode::new(NodeKind::Label).text(format!(
                        "{} ",
                        ui_str::dimension_label(dimension)
                    )),
                )
                .child(ViewNode::new(NodeKind::Text).text(summary.lead_text()))
                .maybe_child(summary.count_text().map(|count| {
                    ViewNode::new(NodeKind::CountIndicator)
                        .class("count")
                        .text(count.as_str())
                }))
        });

        let body = ViewNode::new(NodeKind::Card)
            .class(strategy.card_body_class())
            .affordance(Affordance::OpenEntry(entry))
            .child(title)
            .children(summary_lines);

        ViewNode::new(NodeKind::Container)
            .class("ack-entry")
            .hidden(!is_visible)
            .disabled(is_pending_delete)
            .child(body)
            .maybe_child(strategy.card_delete_control(entry, is_pending_delete))
    }
}
