// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! User facing strings. These match what the dashboard shows so screenshots and docs
//! stay valid.

pub const HEADER_TITLE: &str = "Test Acknowledgments";

pub const HEADER_SUMMARY_WRITABLE: &str = "Known test failures are acknowledged below \
     for specific branch and device configurations, and corresponding test breakage \
     alerts will be silenced. Click an entry to edit or see more information about the \
     test failure.";

pub const HEADER_SUMMARY_READ_ONLY: &str = "Known test failures are acknowledged below \
     for specific branch and device configurations, and corresponding test breakage \
     alerts will be silenced. Click an entry to see more information about the test \
     failure. To add, edit, or remove a test acknowledgment, contact a dashboard \
     administrator.";

pub const SEARCH_LABEL: &str = "Search for tests to add an acknowledgment";

pub const MODAL_TITLE: &str = "Test Acknowledgment";
pub const MODAL_TEST_PREFIX: &str = "Test: ";
pub const ALL_INDICATOR_INLINE: &str = " All";
pub const ALL_SUMMARY: &str = "All";

pub const NOTE_HEADER: &str = "Note:";
pub const NOTE_PLACEHOLDER: &str = "Type a note...";
pub const BUTTON_CLOSE: &str = "Close";
pub const BUTTON_SAVE: &str = "Save";

pub const SAVE_FAILED: &str = "Could not save acknowledgment";
pub const DELETE_FAILED: &str = "Could not delete acknowledgment";

/// Label of a dimension, on cards and in the modal, eg: `Branches:`.
#[must_use]
pub fn dimension_label(dimension: test_ack_schema::ScopeDimension) -> String {
    format!("{dimension}:")
}

#[must_use]
pub fn chip_placeholder(dimension: test_ack_schema::ScopeDimension) -> &'static str {
    use test_ack_schema::ScopeDimension;
    match dimension {
        ScopeDimension::Branches => "Specify a branch...",
        ScopeDimension::Devices => "Specify a device...",
        ScopeDimension::TestCases => "Specify a test case...",
    }
}
