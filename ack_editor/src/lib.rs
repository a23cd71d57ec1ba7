// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Test acknowledgment editor
//!
//! A test acknowledgment silences failure alerts for one test, limited to some branches,
//! devices, and test cases (an empty scope means "all"). This crate is the editor for
//! them: a list of cards, a modal detail editor with chip sets, and the save / delete
//! protocol against the dashboard's `/api/test_acknowledgments` resource.
//!
//! The editor does not draw. [`AckApp::render`] returns a [`ViewNode`] tree that a host
//! paints, and the host feeds interaction back as [`AckEvent`]s. Each node that accepts
//! input carries an [`Affordance`] that maps to the event to send.
//!
//! ```text
//!  host ──AckEvent──▶ AckListController ──Effect──▶ tokio task ──▶ PersistenceGateway
//!   ▲                        │    ▲                                      │
//!   └──── ViewNode ◀─render──┘    └─────────────── AckSignal ◀───────────┘
//! ```
//!
//! # Capabilities
//!
//! Whether the user may edit is decided once at [`mount`] and carried as
//! [`Capabilities`]. It selects a [`RenderStrategy`], which is the only place that
//! decides whether add, remove, save, and delete controls exist. Mutations also need a
//! [`WriteAccess`] token that a read-only mount can't produce, so the backend calls are
//! unreachable there.
//!
//! # Save and delete
//!
//! Cards go `Clean` → `Saving` → replaced by a new card built from the saved data, or
//! back to `Clean` on failure. Deletes go `Clean` → `PendingDelete` → removed, or back to
//! `Clean`. An entry with a call in flight refuses another one. Failures are never fatal;
//! see [`ListChange`] and [`FailureFeedback`].
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use test_ack_editor::{AckEvent, EditorOptions, InMemoryGateway, MountArgs, mount,
//!                       paint_to_string};
//!
//! # async fn run() -> miette::Result<()> {
//! let args = MountArgs {
//!     all_test_names: vec!["VtsHalNfcV1_0Target".into()],
//!     existing_acknowledgments: vec![],
//!     read_only: false,
//! };
//! let mut app = mount(args, Arc::new(InMemoryGateway::default()), EditorOptions::default());
//! app.dispatch(AckEvent::SearchTextChanged("VtsHalNfcV1_0Target".into()))?;
//! app.dispatch(AckEvent::AddFromSearchClicked)?;
//! app.dispatch(AckEvent::SaveClicked)?;
//! app.settle_all().await;
//! println!("{}", paint_to_string(&app.render()));
//! # Ok(())
//! # }
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod acks;
pub mod core;

// Re-export.
pub use crate::core::*;
pub use acks::*;
