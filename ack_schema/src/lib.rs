// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Wire types for test acknowledgments.
//!
//! A test acknowledgment silences failure alerts for one test, scoped to a combination of
//! branches, devices, and test case names. These types are shared by the editor
//! (`test_ack_editor`) and by anything that speaks the
//! `/api/test_acknowledgments` REST contract.
//!
//! The JSON shape is camelCase:
//!
//! ```json
//! {
//!   "key": null,
//!   "testName": "VtsHalNfcV1_0Target",
//!   "branches": ["master"],
//!   "devices": [],
//!   "testCaseNames": ["NfcHidlTest.OpenAndClose"],
//!   "note": "flaky on older radios"
//! }
//! ```
//!
//! An empty scope dimension means "applies to all values of this dimension", not "applies
//! to none".

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod ack_record;
pub mod scope_dimension;

// Re-export.
pub use ack_record::*;
pub use scope_dimension::*;
