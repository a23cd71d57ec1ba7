// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use test_ack_schema::{AckKey, AcknowledgmentRecord};

use crate::{AckCard, AckEntry, AckError, AckEvent, AckSignal, Capabilities,
            CardRenderArgs, DEBUG_ACKS_MOD, DeleteRequest, DetailEditor, EditorOptions,
            Effect, EntryId, EntryState, FailureFeedback, GatewayError, ListChange,
            ModalRegion, ModalSession, NodeKind, Notice, NoticeKind, Notices,
            SaveRequest, TestNameSearch, Transition, ViewNode, WriteAccess, ok, ui_str};

/// Owns the list of cards, the modal region, and the search row. All state changes go
/// through [`Self::handle_event`] (user input) and [`Self::apply_signal`] (network
/// completions), both called from the one event loop that owns this struct.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AckListController {
    capabilities: Capabilities,
    options: EditorOptions,
    search: TestNameSearch,
    entries: Vec<AckEntry>,
    modal: ModalRegion,
    notices: Notices,
    last_entry_id: u64,
}

mod constructor_and_accessors_impl {
    use super::{AckCard, AckEntry, AckKey, AckListController, AcknowledgmentRecord,
                Capabilities, EditorOptions, EntryId, EntryState, ModalRegion, Notices,
                TestNameSearch};

    impl AckListController {
        /// Cards are shown in the order of `existing_acknowledgments`.
        #[must_use]
        pub fn new(
            all_test_names: Vec<String>,
            existing_acknowledgments: Vec<AcknowledgmentRecord>,
            capabilities: Capabilities,
            options: EditorOptions,
        ) -> Self {
            let mut it = Self {
                capabilities,
                options,
                search: TestNameSearch::new(all_test_names),
                entries: Vec::with_capacity(existing_acknowledgments.len()),
                modal: ModalRegion::default(),
                notices: Notices::new(options.notice_capacity),
                last_entry_id: 0,
            };
            for record in existing_acknowledgments {
                let id = it.next_entry_id();
                it.entries.push(AckEntry {
                    id,
                    card: AckCard::new(record),
                    state: EntryState::Clean,
                    is_visible: true,
                });
            }
            it
        }

        pub(super) fn next_entry_id(&mut self) -> EntryId {
            self.last_entry_id += 1;
            EntryId(self.last_entry_id)
        }

        #[must_use]
        pub fn capabilities(&self) -> Capabilities { self.capabilities }

        #[must_use]
        pub fn options(&self) -> EditorOptions { self.options }

        #[must_use]
        pub fn entries(&self) -> &[AckEntry] { &self.entries }

        /// Entries the user can see, drafts excluded.
        pub fn visible_entries(&self) -> impl Iterator<Item = &AckEntry> {
            self.entries.iter().filter(|it| it.is_visible)
        }

        #[must_use]
        pub fn entry(&self, id: EntryId) -> Option<&AckEntry> {
            self.entries.iter().find(|it| it.id == id)
        }

        #[must_use]
        pub fn find_by_key(&self, key: &AckKey) -> Option<&AckEntry> {
            self.entries
                .iter()
                .find(|it| it.card.maybe_key() == Some(key))
        }

        pub(super) fn index_of(&self, id: EntryId) -> Option<usize> {
            self.entries.iter().position(|it| it.id == id)
        }

        #[must_use]
        pub fn modal(&self) -> &ModalRegion { &self.modal }

        #[must_use]
        pub fn search(&self) -> &TestNameSearch { &self.search }

        #[must_use]
        pub fn notices(&self) -> &Notices { &self.notices }
    }
}

mod handle_event_impl {
    use super::{AckCard, AckEntry, AckError, AckEvent, AckListController,
                AcknowledgmentRecord, DEBUG_ACKS_MOD, DeleteRequest, DetailEditor,
                Effect, EntryId, EntryState, SaveRequest, WriteAccess, ok};

    impl AckListController {
        /// Applies one user event. Returns the backend call to make, if any.
        ///
        /// # Errors
        ///
        /// - [`AckError::ReadOnly`] for any mutation on a read-only mount.
        /// - [`AckError::UnknownEntry`] if the event names an entry that isn't in the
        ///   list.
        /// - [`AckError::EntryBusy`] if the entry already has a save or delete in
        ///   flight. The request is not sent again.
        /// - [`AckError::NoOpenEditor`] for editor events while the modal is closed.
        /// - [`AckError::EmptyTestName`] when adding with a blank search field.
        pub fn handle_event(&mut self, event: AckEvent) -> Result<Option<Effect>, AckError> {
            // % is Display, ? is Debug.
            DEBUG_ACKS_MOD.then(|| {
                tracing::debug!(message = "handle_event", event = ?event);
            });

            match event {
                AckEvent::CardClicked(entry) => {
                    self.open_entry(entry)?;
                    Ok(None)
                }
                AckEvent::CloseClicked => {
                    self.close_modal();
                    Ok(None)
                }
                AckEvent::NoticesDismissed => {
                    self.notices.clear();
                    Ok(None)
                }
                mutation => {
                    let access = self.require_write_access(&mutation)?;
                    self.handle_mutation(access, mutation)
                }
            }
        }

        fn require_write_access(&self, event: &AckEvent) -> Result<WriteAccess, AckError> {
            self.capabilities.write_access().ok_or_else(|| {
                tracing::warn!(
                    message = "read-only mount rejected mutation",
                    attempted = event.describe()
                );
                AckError::ReadOnly {
                    attempted: event.describe(),
                }
            })
        }

        fn handle_mutation(
            &mut self,
            access: WriteAccess,
            event: AckEvent,
        ) -> Result<Option<Effect>, AckError> {
            match event {
                AckEvent::SearchTextChanged(text) => self.search.set_query(text),
                AckEvent::SuggestionPicked(test_name) => self.search.pick(test_name),
                AckEvent::AddFromSearchClicked => self.add_draft_from_search()?,
                AckEvent::DeleteClicked(entry) => {
                    return self.start_delete(access, entry);
                }
                AckEvent::ChipInput { dimension, event } => {
                    self.open_editor_mut()?
                        .chip_set_mut(dimension)
                        .apply_input_event(event);
                }
                AckEvent::ChipRemoveClicked { dimension, value } => {
                    self.open_editor_mut()?
                        .chip_set_mut(dimension)
                        .remove(&value);
                }
                AckEvent::NoteChanged(note) => self.open_editor_mut()?.note = note,
                AckEvent::SaveClicked => return self.start_save(access),
                AckEvent::CardClicked(_)
                | AckEvent::CloseClicked
                | AckEvent::NoticesDismissed => {}
            }
            Ok(None)
        }

        fn open_editor_mut(&mut self) -> Result<&mut DetailEditor, AckError> {
            self.modal.editor_mut().ok_or(AckError::NoOpenEditor)
        }

        fn busy_check(&self, entry: EntryId) -> Result<usize, AckError> {
            let index = self.index_of(entry).ok_or(AckError::UnknownEntry(entry))?;
            let state = self.entries[index].state;
            if state == EntryState::Clean {
                Ok(index)
            } else {
                // % is Display, ? is Debug.
                DEBUG_ACKS_MOD.then(|| {
                    tracing::debug!(
                        message = "ignored request for busy entry",
                        entry = %entry,
                        state = ?state
                    );
                });
                Err(AckError::EntryBusy { entry, state })
            }
        }

        /// The new card is a hidden draft at the top of the list, shown only once its
        /// first save succeeds.
        fn add_draft_from_search(&mut self) -> Result<(), AckError> {
            let test_name = self.search.query.trim().to_string();
            if test_name.is_empty() {
                return Err(AckError::EmptyTestName);
            }

            self.discard_open_draft();

            let id = self.next_entry_id();
            let record = AcknowledgmentRecord::new_draft(test_name);
            self.modal.open(id, &record);
            self.entries.insert(
                0,
                AckEntry {
                    id,
                    card: AckCard::new(record),
                    state: EntryState::Clean,
                    is_visible: false,
                },
            );

            // % is Display, ? is Debug.
            DEBUG_ACKS_MOD.then(|| {
                tracing::debug!(message = "draft created", entry = %id);
            });
            ok!()
        }

        fn open_entry(&mut self, entry: EntryId) -> Result<(), AckError> {
            let index = self.index_of(entry).ok_or(AckError::UnknownEntry(entry))?;
            if self.entries[index].state == EntryState::PendingDelete {
                DEBUG_ACKS_MOD.then(|| {
                    tracing::debug!(message = "ignored click on card pending delete");
                });
                return Ok(());
            }

            // Opening another card discards the draft being edited, if any.
            if self.modal.editor().is_some_and(|it| it.entry != entry) {
                self.discard_open_draft();
            }

            // The draft may have been in front of this entry.
            let index = self.index_of(entry).ok_or(AckError::UnknownEntry(entry))?;
            let record = self.entries[index].card.record().clone();
            self.modal.open(entry, &record);
            Ok(())
        }

        fn close_modal(&mut self) {
            if self.modal.is_open() {
                self.discard_open_draft();
                self.modal.close();
            }
        }

        /// Drops the hidden draft the modal is editing, unless its save is in flight.
        fn discard_open_draft(&mut self) {
            let Some(entry) = self.modal.editor().map(|it| it.entry) else {
                return;
            };
            let Some(index) = self.index_of(entry) else {
                return;
            };
            let candidate = &self.entries[index];
            if candidate.is_hidden_draft() && candidate.state == EntryState::Clean {
                self.entries.remove(index);
                // % is Display, ? is Debug.
                DEBUG_ACKS_MOD.then(|| {
                    tracing::debug!(message = "unsaved draft discarded", entry = %entry);
                });
            }
        }

        fn start_save(&mut self, access: WriteAccess) -> Result<Option<Effect>, AckError> {
            let editor = self.modal.editor().ok_or(AckError::NoOpenEditor)?;
            let (entry, session) = (editor.entry, editor.session);
            let index = self.busy_check(entry)?;

            let record = editor.build_save_request();
            self.entries[index].state = EntryState::Saving;
            if let Some(editor) = self.modal.editor_mut() {
                editor.is_saving = true;
            }

            // % is Display, ? is Debug.
            DEBUG_ACKS_MOD.then(|| {
                tracing::debug!(
                    message = "save started",
                    entry = %entry,
                    session = ?session,
                    record = ?record
                );
            });

            Ok(Some(Effect::Save(SaveRequest {
                access,
                entry,
                session,
                record,
            })))
        }

        fn start_delete(
            &mut self,
            access: WriteAccess,
            entry: EntryId,
        ) -> Result<Option<Effect>, AckError> {
            let index = self.busy_check(entry)?;

            // A draft was never stored, there's nothing to ask the backend.
            let Some(key) = self.entries[index].card.maybe_key().cloned() else {
                self.entries.remove(index);
                if self.modal.editor().is_some_and(|it| it.entry == entry) {
                    self.modal.close();
                }
                return Ok(None);
            };

            self.entries[index].state = EntryState::PendingDelete;

            // % is Display, ? is Debug.
            DEBUG_ACKS_MOD.then(|| {
                tracing::debug!(message = "delete started", entry = %entry, key = %key);
            });

            Ok(Some(Effect::Delete(DeleteRequest { access, entry, key })))
        }
    }
}

mod apply_signal_impl {
    use super::{AckCard, AckEntry, AckKey, AckListController, AckSignal,
                AcknowledgmentRecord, DEBUG_ACKS_MOD, EntryId, EntryState,
                FailureFeedback, GatewayError, ListChange, ModalSession, Notice,
                NoticeKind, Transition};

    impl AckListController {
        /// Reconciles the list with a settled backend call.
        pub fn apply_signal(&mut self, signal: AckSignal) -> ListChange {
            match signal {
                AckSignal::SaveSettled {
                    entry,
                    session,
                    record,
                    result,
                } => {
                    let change = match result {
                        Ok(key) => self.on_save_succeeded(entry, record, key),
                        Err(error) => self.on_save_failed(entry, &record, &error),
                    };
                    // The modal closes either way, unless it moved on to another
                    // editor in the meantime.
                    self.modal.close_if_showing(session);
                    change
                }
                AckSignal::DeleteSettled { entry, key, result } => match result {
                    Ok(()) => self.on_delete_succeeded(entry, key),
                    Err(error) => self.on_delete_failed(entry, &error),
                },
            }
        }

        fn on_save_succeeded(
            &mut self,
            entry: EntryId,
            record: AcknowledgmentRecord,
            key: AckKey,
        ) -> ListChange {
            let Some(index) = self.index_of(entry) else {
                tracing::warn!(message = "save settled for missing entry", entry = %entry);
                return ListChange::Ignored { entry };
            };

            let new_id = self.next_entry_id();
            let was_draft = self.entries[index].card.is_draft();
            self.entries[index] = AckEntry {
                id: new_id,
                card: AckCard::new(record.with_key(key.clone())),
                state: EntryState::Clean,
                is_visible: true,
            };

            // Another editor may be open on the card that was just replaced.
            if let Some(editor) = self.modal.editor_mut()
                && editor.entry == entry
            {
                editor.retarget(new_id, key.clone());
            }

            // % is Display, ? is Debug.
            DEBUG_ACKS_MOD.then(|| {
                tracing::debug!(
                    message = "save succeeded",
                    old_entry = %entry,
                    new_entry = %new_id,
                    key = %key,
                    was_draft = was_draft
                );
            });

            if was_draft {
                ListChange::Inserted {
                    entry: new_id,
                    key,
                    transition: Transition::slide_down(),
                }
            } else {
                ListChange::Replaced {
                    old: entry,
                    new: new_id,
                    key,
                }
            }
        }

        fn on_save_failed(
            &mut self,
            entry: EntryId,
            record: &AcknowledgmentRecord,
            error: &GatewayError,
        ) -> ListChange {
            let reason = error.to_string();
            tracing::warn!(message = "save failed", entry = %entry, error = %reason);

            let Some(index) = self.index_of(entry) else {
                return ListChange::Ignored { entry };
            };

            self.push_notice(NoticeKind::SaveFailed, &record.test_name, &reason);

            if self.entries[index].card.is_draft() {
                self.entries.remove(index);
                ListChange::Discarded { entry, reason }
            } else {
                self.entries[index].state = EntryState::Clean;
                ListChange::Reverted { entry, reason }
            }
        }

        fn on_delete_succeeded(&mut self, entry: EntryId, key: AckKey) -> ListChange {
            let Some(index) = self.index_of(entry) else {
                tracing::warn!(message = "delete settled for missing entry", entry = %entry);
                return ListChange::Ignored { entry };
            };
            self.entries.remove(index);

            // An editor left open on the removed record has nothing to save into.
            let closed_editor = self.modal.editor().is_some_and(|it| it.entry == entry);
            if closed_editor {
                self.modal.close();
            }

            // % is Display, ? is Debug.
            DEBUG_ACKS_MOD.then(|| {
                tracing::debug!(
                    message = "delete succeeded",
                    entry = %entry,
                    key = %key,
                    closed_editor = closed_editor
                );
            });

            ListChange::Removed {
                entry,
                key,
                transition: Transition::slide_up(),
            }
        }

        fn on_delete_failed(&mut self, entry: EntryId, error: &GatewayError) -> ListChange {
            let reason = error.to_string();
            tracing::warn!(message = "delete failed", entry = %entry, error = %reason);

            let Some(index) = self.index_of(entry) else {
                return ListChange::Ignored { entry };
            };
            self.entries[index].state = EntryState::Clean;
            let test_name = self.entries[index].card.test_name().to_string();
            self.push_notice(NoticeKind::DeleteFailed, &test_name, &reason);

            ListChange::Reverted { entry, reason }
        }

        fn push_notice(&mut self, kind: NoticeKind, test_name: &str, reason: &str) {
            if self.options.failure_feedback == FailureFeedback::Notice {
                self.notices.push(Notice {
                    kind,
                    test_name: test_name.into(),
                    reason: reason.into(),
                });
            }
        }

        #[must_use]
        pub fn is_showing_session(&self, session: ModalSession) -> bool {
            self.modal.is_showing(session)
        }
    }
}

mod render_impl {
    use super::{AckListController, CardRenderArgs, EntryState, NodeKind, ViewNode, ui_str};

    impl AckListController {
        /// The whole widget: search row (writable only), header, cards, notices, and
        /// the modal region.
        #[must_use]
        pub fn render(&self) -> ViewNode {
            let strategy = self.capabilities.render_strategy();

            let header = ViewNode::new(NodeKind::Container)
                .class("section-header-col")
                .child(
                    ViewNode::new(NodeKind::Heading)
                        .class("section-header")
                        .text(ui_str::HEADER_TITLE),
                )
                .child(
                    ViewNode::new(NodeKind::Paragraph)
                        .class("acknowledgment-info")
                        .text(strategy.header_summary()),
                );

            let cards = ViewNode::new(NodeKind::Container).class("acks").children(
                self.entries.iter().map(|entry| {
                    entry.card.render(CardRenderArgs {
                        entry: entry.id,
                        is_visible: entry.is_visible,
                        is_pending_delete: entry.state == EntryState::PendingDelete,
                        strategy,
                    })
                }),
            );

            ViewNode::new(NodeKind::Container)
                .class("test-acknowledgments")
                .maybe_child(strategy.search_row(&self.search))
                .child(header)
                .child(cards)
                .maybe_child(self.notices.render())
                .child(self.modal.render(strategy))
        }
    }
}
