// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `acks` is a terminal host for [`test_ack_editor`]. It reads the page inputs from a
//! JSON file, mounts the editor against the dashboard REST API (or an in-memory backend
//! when no URL is given), and then loops:
//!
//! ```text
//! stdin line ──► HostCommand ──► AckEvent(s) ──► AckApp::dispatch
//!                                                     │
//!   painted view tree ◄── AckApp::render ◄── ListChange ◄── AckApp::next_signal
//! ```
//!
//! Type `help` at the prompt for the list of commands.

// Enable deny for unwrap_in_result in production code, but allow in tests.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod host;

// Re-export.
pub use host::*;
