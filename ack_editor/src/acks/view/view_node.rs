// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Affordance, Icon};

/// What a [`ViewNode`] is, roughly one per kind of element the dashboard renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Container,
    Heading,
    Paragraph,
    Label,
    Text,
    Chip,
    AllIndicator,
    CountIndicator,
    Icon(Icon),
    TextField,
    TextArea,
    Button,
    Suggestions,
    Card,
    Modal,
    Notice,
}

impl NodeKind {
    #[must_use]
    pub fn is_text_entry(self) -> bool {
        matches!(self, NodeKind::TextField | NodeKind::TextArea)
    }
}

/// One node of the rendered tree. The editor never draws anything itself: it produces
/// this tree and the host paints it (see [`crate::paint_to_string`] for the plain text
/// painter). Hidden nodes stay in the tree so the host can animate them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewNode {
    pub kind: NodeKind,
    pub class_name: &'static str,
    pub text: String,
    pub maybe_placeholder: Option<&'static str>,
    pub is_disabled: bool,
    pub is_hidden: bool,
    pub maybe_affordance: Option<Affordance>,
    pub children: Vec<ViewNode>,
}

mod builder_impl {
    use super::{Affordance, NodeKind, ViewNode};

    impl ViewNode {
        #[must_use]
        pub fn new(kind: NodeKind) -> Self {
            Self {
                kind,
                class_name: "",
                text: String::new(),
                maybe_placeholder: None,
                is_disabled: false,
                is_hidden: false,
                maybe_affordance: None,
                children: vec![],
            }
        }

        #[must_use]
        pub fn class(mut self, class_name: &'static str) -> Self {
            self.class_name = class_name;
            self
        }

        #[must_use]
        pub fn text(mut self, text: impl Into<String>) -> Self {
            self.text = text.into();
            self
        }

        #[must_use]
        pub fn placeholder(mut self, placeholder: &'static str) -> Self {
            self.maybe_placeholder = Some(placeholder);
            self
        }

        #[must_use]
        pub fn disabled(mut self, is_disabled: bool) -> Self {
            self.is_disabled = is_disabled;
            self
        }

        #[must_use]
        pub fn hidden(mut self, is_hidden: bool) -> Self {
            self.is_hidden = is_hidden;
            self
        }

        #[must_use]
        pub fn affordance(mut self, affordance: Affordance) -> Self {
            self.maybe_affordance = Some(affordance);
            self
        }

        #[must_use]
        pub fn child(mut self, child: ViewNode) -> Self {
            self.children.push(child);
            self
        }

        /// Appends `maybe_child` only if it is [Some]. This is how capability gated
        /// parts of the tree are attached.
        #[must_use]
        pub fn maybe_child(mut self, maybe_child: Option<ViewNode>) -> Self {
            if let Some(child) = maybe_child {
                self.children.push(child);
            }
            self
        }

        #[must_use]
        pub fn children(mut self, children: impl IntoIterator<Item = ViewNode>) -> Self {
            self.children.extend(children);
            self
        }
    }
}

mod query_impl {
    use super::{Affordance, NodeKind, ViewNode};

    impl ViewNode {
        /// Pre-order walk over this node and all of its descendants, hidden ones
        /// included.
        pub fn iter(&self) -> impl Iterator<Item = &ViewNode> {
            let mut stack = vec![self];
            std::iter::from_fn(move || {
                let node = stack.pop()?;
                stack.extend(node.children.iter().rev());
                Some(node)
            })
        }

        #[must_use]
        pub fn find_by_class(&self, class_name: &str) -> Vec<&ViewNode> {
            self.iter()
                .filter(|node| node.class_name == class_name)
                .collect()
        }

        #[must_use]
        pub fn find_by_affordance(&self, affordance: &Affordance) -> Option<&ViewNode> {
            self.iter()
                .find(|node| node.maybe_affordance.as_ref() == Some(affordance))
        }

        #[must_use]
        pub fn affordances(&self) -> Vec<&Affordance> {
            self.iter()
                .filter_map(|node| node.maybe_affordance.as_ref())
                .collect()
        }

        #[must_use]
        pub fn text_entries(&self) -> Vec<&ViewNode> {
            self.iter().filter(|node| node.kind.is_text_entry()).collect()
        }

        /// Concatenated text of every visible node, the way a reader sees it. Icon
        /// glyph names are not text.
        #[must_use]
        pub fn visible_text(&self) -> String {
            let mut acc = String::new();
            collect_visible_text(self, &mut acc);
            acc
        }
    }

    fn collect_visible_text(node: &ViewNode, acc: &mut String) {
        if node.is_hidden {
            return;
        }
        if !matches!(node.kind, NodeKind::Icon(_)) {
            acc.push_str(&node.text);
        }
        for child in &node.children {
            collect_visible_text(child, acc);
        }
    }
}
