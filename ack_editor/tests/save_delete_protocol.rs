// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Drives a mounted editor against the in-memory gateway, the same way a host would:
//! events in, view tree and list changes out.

use std::{sync::Arc, time::Duration};

use test_ack_editor::{AckApp, AckError, AckEvent, Affordance, ChipInputEvent,
                      EditorOptions, EntryId, EntryState, FailureFeedback, GatewayRequest,
                      InMemoryGateway, ListChange, MountArgs, Transition, assert_eq2,
                      mount};
use test_ack_schema::{AckKey, AcknowledgmentRecord, ScopeDimension};

fn stored(key: &str, test_name: &str, branches: &[&str]) -> AcknowledgmentRecord {
    AcknowledgmentRecord {
        branches: branches.iter().map(|it| (*it).to_string()).collect(),
        ..AcknowledgmentRecord::new_draft(test_name).with_key(AckKey::new(key))
    }
}

fn mount_with(
    existing: Vec<AcknowledgmentRecord>,
    read_only: bool,
    options: EditorOptions,
) -> AckApp<InMemoryGateway> {
    let gateway = Arc::new(InMemoryGateway::new(existing.clone()));
    mount(
        MountArgs {
            all_test_names: vec!["T".into(), "Other".into()],
            existing_acknowledgments: existing,
            read_only,
        },
        gateway,
        options,
    )
}

fn chip(app: &mut AckApp<InMemoryGateway>, dimension: ScopeDimension, text: &str) {
    app.dispatch(AckEvent::ChipInput {
        dimension,
        event: ChipInputEvent::Focused,
    })
    .unwrap();
    app.dispatch(AckEvent::ChipInput {
        dimension,
        event: ChipInputEvent::TextChanged(text.into()),
    })
    .unwrap();
    app.dispatch(AckEvent::ChipInput {
        dimension,
        event: ChipInputEvent::EnterPressed,
    })
    .unwrap();
}

fn first_entry(app: &AckApp<InMemoryGateway>) -> EntryId { app.controller().entries()[0].id }

#[tokio::test]
async fn create_then_reopen_round_trip() {
    let mut app = mount_with(vec![], false, EditorOptions::default());

    app.dispatch(AckEvent::SearchTextChanged("T".into())).unwrap();
    app.dispatch(AckEvent::AddFromSearchClicked).unwrap();
    assert_eq2!(app.controller().visible_entries().count(), 0);

    chip(&mut app, ScopeDimension::Branches, "b1");
    chip(&mut app, ScopeDimension::TestCases, "c2");
    chip(&mut app, ScopeDimension::TestCases, "c1");
    app.dispatch(AckEvent::NoteChanged("n".into())).unwrap();
    app.dispatch(AckEvent::SaveClicked).unwrap();

    let changes = app.settle_all().await;
    let [ListChange::Inserted {
        entry,
        key,
        transition,
    }] = changes.as_slice()
    else {
        panic!("expected one insertion, got {changes:?}");
    };
    assert_eq2!(*transition, Transition::SlideDown(Duration::from_millis(150)));
    assert_eq2!(key, &AckKey::new("ack-1"));
    assert!(!app.controller().modal().is_open());

    let sent = app.gateway().requests();
    assert_eq2!(
        sent,
        vec![GatewayRequest::Save(AcknowledgmentRecord {
            key: None,
            test_name: "T".into(),
            branches: vec!["b1".into()],
            devices: vec![],
            test_case_names: vec!["c1".into(), "c2".into()],
            note: Some("n".into()),
        })]
    );

    // Reopen the card that replaced the draft.
    app.dispatch(AckEvent::CardClicked(*entry)).unwrap();
    let editor = app.controller().modal().editor().unwrap();
    assert_eq2!(
        editor
            .chip_set(ScopeDimension::Branches)
            .values()
            .collect::<Vec<_>>(),
        vec!["b1"]
    );
    assert!(editor.chip_set(ScopeDimension::Devices).is_empty());
    assert_eq2!(
        editor
            .chip_set(ScopeDimension::TestCases)
            .values()
            .collect::<Vec<_>>(),
        vec!["c1", "c2"]
    );
    assert_eq2!(editor.note, "n");
    assert_eq2!(editor.maybe_key(), Some(&AckKey::new("ack-1")));
}

#[tokio::test]
async fn branches_are_sorted_before_submit() {
    let mut app = mount_with(vec![stored("k1", "T", &[])], false, EditorOptions::default());
    app.dispatch(AckEvent::CardClicked(first_entry(&app))).unwrap();
    chip(&mut app, ScopeDimension::Branches, "beta");
    chip(&mut app, ScopeDimension::Branches, "alpha");
    app.dispatch(AckEvent::SaveClicked).unwrap();
    app.settle_all().await;

    let requests = app.gateway().requests();
    let [GatewayRequest::Save(record)] = requests.as_slice() else {
        panic!("expected one save");
    };
    assert_eq2!(record.branches, vec!["alpha", "beta"]);
    assert_eq2!(record.key, Some(AckKey::new("k1")));
}

#[tokio::test]
async fn edit_replaces_card_without_transition() {
    let mut app = mount_with(
        vec![stored("k1", "T", &["main"]), stored("k2", "Other", &[])],
        false,
        EditorOptions::default(),
    );
    let old = first_entry(&app);
    app.dispatch(AckEvent::CardClicked(old)).unwrap();
    chip(&mut app, ScopeDimension::Branches, "release");
    app.dispatch(AckEvent::SaveClicked).unwrap();

    let changes = app.settle_all().await;
    let [ListChange::Replaced { old: replaced, .. }] = changes.as_slice() else {
        panic!("expected a replacement, got {changes:?}");
    };
    assert_eq2!(*replaced, old);

    // Same position, new data.
    let card = &app.controller().entries()[0].card;
    assert_eq2!(card.test_name(), "T");
    assert_eq2!(
        card.summary(ScopeDimension::Branches).to_string(),
        "main (+1)"
    );
    assert_eq2!(app.controller().entries().len(), 2);
}

#[tokio::test]
async fn rapid_delete_clicks_send_one_request() {
    let mut app = mount_with(vec![stored("k1", "T", &[])], false, EditorOptions::default());
    let entry = first_entry(&app);
    app.gateway().hold();

    app.dispatch(AckEvent::DeleteClicked(entry)).unwrap();
    assert!(matches!(
        app.dispatch(AckEvent::DeleteClicked(entry)),
        Err(AckError::EntryBusy {
            state: EntryState::PendingDelete,
            ..
        })
    ));
    assert_eq2!(app.in_flight_count(), 1);

    // The rest of the UI keeps working while the call is pending.
    app.dispatch(AckEvent::SearchTextChanged("Oth".into())).unwrap();
    assert_eq2!(app.controller().search().suggestions(), vec!["Other"]);

    app.gateway().release();
    let changes = app.settle_all().await;
    assert!(matches!(
        changes.as_slice(),
        [ListChange::Removed {
            transition: Transition::SlideUp(_),
            ..
        }]
    ));
    assert_eq2!(app.gateway().delete_count(), 1);
    assert!(app.controller().entries().is_empty());
    assert!(app.gateway().records().is_empty());
}

#[tokio::test]
async fn delete_closes_editor_open_on_the_removed_card() {
    let mut app = mount_with(vec![stored("k1", "T", &[])], false, EditorOptions::default());
    let entry = first_entry(&app);

    app.dispatch(AckEvent::CardClicked(entry)).unwrap();
    assert!(app.controller().modal().is_open());

    app.dispatch(AckEvent::DeleteClicked(entry)).unwrap();
    let changes = app.settle_all().await;

    assert!(matches!(changes.as_slice(), [ListChange::Removed { .. }]));
    assert!(app.controller().entries().is_empty());
    assert!(!app.controller().modal().is_open());
    assert!(app.render().find_by_affordance(&Affordance::Save).is_none());
    assert!(matches!(
        app.dispatch(AckEvent::SaveClicked),
        Err(AckError::NoOpenEditor)
    ));
}

#[tokio::test]
async fn delete_keeps_editor_open_on_another_card() {
    let mut app = mount_with(
        vec![stored("k1", "T", &[]), stored("k2", "Other", &["main"])],
        false,
        EditorOptions::default(),
    );
    let first = app.controller().entries()[0].id;
    let second = app.controller().entries()[1].id;

    app.dispatch(AckEvent::CardClicked(second)).unwrap();
    app.dispatch(AckEvent::DeleteClicked(first)).unwrap();
    app.settle_all().await;

    assert_eq2!(app.controller().entries().len(), 1);
    assert!(app.controller().modal().is_open());
    assert!(app.render().find_by_affordance(&Affordance::Save).is_some());
}

#[tokio::test]
async fn failed_delete_can_be_retried() {
    let mut app = mount_with(
        vec![stored("k1", "T", &[])],
        false,
        EditorOptions {
            failure_feedback: FailureFeedback::Notice,
            ..Default::default()
        },
    );
    let entry = first_entry(&app);
    app.gateway().fail_next(1);

    app.dispatch(AckEvent::DeleteClicked(entry)).unwrap();
    let changes = app.settle_all().await;
    assert!(matches!(changes.as_slice(), [ListChange::Reverted { .. }]));
    assert_eq2!(
        app.controller().entry(entry).unwrap().state,
        EntryState::Clean
    );
    assert_eq2!(app.controller().notices().len(), 1);
    assert!(
        app.render()
            .visible_text()
            .contains("Could not delete acknowledgment for T")
    );

    app.dispatch(AckEvent::DeleteClicked(entry)).unwrap();
    app.settle_all().await;
    assert_eq2!(app.gateway().delete_count(), 2);
    assert!(app.controller().entries().is_empty());
}

#[tokio::test]
async fn failed_save_keeps_old_data() {
    let mut app = mount_with(vec![stored("k1", "T", &["main"])], false, EditorOptions::default());
    let entry = first_entry(&app);
    app.gateway().set_offline(true);

    app.dispatch(AckEvent::CardClicked(entry)).unwrap();
    app.dispatch(AckEvent::ChipRemoveClicked {
        dimension: ScopeDimension::Branches,
        value: "main".into(),
    })
    .unwrap();
    app.dispatch(AckEvent::SaveClicked).unwrap();
    assert_eq2!(
        app.controller().entry(entry).unwrap().state,
        EntryState::Saving
    );

    let changes = app.settle_all().await;
    assert!(changes[0].is_failure());
    assert!(!app.controller().modal().is_open());
    let card = &app.controller().entry(entry).unwrap().card;
    assert_eq2!(card.record().branches, vec!["main"]);
    // Silent by default.
    assert!(app.controller().notices().is_empty());
}

#[tokio::test]
async fn concurrent_save_on_same_card_is_refused() {
    let mut app = mount_with(vec![stored("k1", "T", &[])], false, EditorOptions::default());
    let entry = first_entry(&app);
    app.gateway().hold();

    app.dispatch(AckEvent::CardClicked(entry)).unwrap();
    app.dispatch(AckEvent::SaveClicked).unwrap();
    assert!(matches!(
        app.dispatch(AckEvent::SaveClicked),
        Err(AckError::EntryBusy { .. })
    ));
    // Nothing settled yet.
    assert!(app.process_pending_signals().is_empty());

    app.gateway().release();
    app.settle_all().await;
    assert_eq2!(app.gateway().save_count(), 1);
}

#[tokio::test]
async fn read_only_mount_offers_nothing_to_change() {
    let mut app = mount_with(
        vec![stored("k1", "T", &["main", "release"])],
        true,
        EditorOptions::default(),
    );
    app.dispatch(AckEvent::CardClicked(first_entry(&app))).unwrap();

    let tree = app.render();
    assert!(tree.affordances().iter().all(|it| !it.is_mutation()));
    assert!(tree.affordances().contains(&&Affordance::Close));
    let text_entries = tree.text_entries();
    assert!(!text_entries.is_empty());
    assert!(text_entries.iter().all(|it| it.is_disabled));

    assert!(matches!(
        app.dispatch(AckEvent::SaveClicked),
        Err(AckError::ReadOnly { .. })
    ));
    assert!(app.gateway().requests().is_empty());
    assert_eq2!(app.in_flight_count(), 0);
    assert!(app.next_signal().await.is_none());
}
