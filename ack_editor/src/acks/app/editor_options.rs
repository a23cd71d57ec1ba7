// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// What happens, besides reverting the card, when a save or delete fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailureFeedback {
    /// Revert quietly. The failure is only in the [`crate::ListChange`] and the log.
    #[default]
    Silent,
    /// Also queue a [`crate::Notice`] that renders as a toast.
    Notice,
}

pub const DEFAULT_NOTICE_CAPACITY: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditorOptions {
    pub failure_feedback: FailureFeedback,
    /// How many notices are kept before the oldest is dropped.
    pub notice_capacity: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            failure_feedback: FailureFeedback::default(),
            notice_capacity: DEFAULT_NOTICE_CAPACITY,
        }
    }
}
