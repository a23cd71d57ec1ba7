// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::VecDeque;

use crate::{Affordance, Icon, NodeKind, ViewNode, ui_str};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    SaveFailed,
    DeleteFailed,
}

/// A failure the user is told about. Only produced with
/// [`crate::FailureFeedback::Notice`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub test_name: String,
    pub reason: String,
}

impl Notice {
    #[must_use]
    pub fn headline(&self) -> String {
        let prefix = match self.kind {
            NoticeKind::SaveFailed => ui_str::SAVE_FAILED,
            NoticeKind::DeleteFailed => ui_str::DELETE_FAILED,
        };
        format!("{prefix} for {}: {}", self.test_name, self.reason)
    }
}

/// Latest failures, oldest dropped first once `capacity` is reached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notices {
    queue: VecDeque<Notice>,
    capacity: usize,
}

impl Notices {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, notice: Notice) {
        if self.capacity == 0 {
            return;
        }
        while self.queue.len() >= self.capacity {
            self.queue.pop_front();
        }
        self.queue.push_back(notice);
    }

    pub fn clear(&mut self) { self.queue.clear(); }

    #[must_use]
    pub fn len(&self) -> usize { self.queue.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.queue.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> { self.queue.iter() }

    #[must_use]
    pub fn render(&self) -> Option<ViewNode> {
        if self.is_empty() {
            return None;
        }
        Some(
            ViewNode::new(NodeKind::Container)
                .class("toasts")
                .children(self.iter().map(|notice| {
                    ViewNode::new(NodeKind::Notice)
                        .class("toast")
                        .text(notice.headline())
                }))
                .child(
                    ViewNode::new(NodeKind::Button)
                        .class("btn-flat")
                        .affordance(Affordance::DismissNotices)
                        .child(ViewNode::new(NodeKind::Icon(Icon::Clear))),
                ),
        )
    }
}
