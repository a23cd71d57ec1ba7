// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Write;

use crate::{NodeKind, ViewNode};

const INDENT: &str = "  ";

/// Paints the visible part of `root` as an indented outline, one node per line. Nodes
/// that let the user do something are tagged with their affordance so a terminal host
/// can show what is clickable.
#[must_use]
pub fn paint_to_string(root: &ViewNode) -> String {
    let mut acc = String::new();
    paint_node(root, 0, &mut acc);
    acc
}

fn paint_node(node: &ViewNode, depth: usize, acc: &mut String) {
    if node.is_hidden {
        return;
    }

    let is_empty_container =
        matches!(node.kind, NodeKind::Container) && node.text.is_empty();

    let child_depth = if is_empty_container {
        depth
    } else {
        paint_line(node, depth, acc);
        depth + 1
    };

    for child in &node.children {
        paint_node(child, child_depth, acc);
    }
}

fn paint_line(node: &ViewNode, depth: usize, acc: &mut String) {
    for _ in 0..depth {
        acc.push_str(INDENT);
    }

    // The `write!` calls below go to a String and can't fail.
    match node.kind {
        NodeKind::Icon(icon) => {
            _ = write!(acc, "[{}]", icon.as_ref());
        }
        NodeKind::TextField | NodeKind::TextArea => {
            _ = write!(acc, "<{}>", node.text);
            if let Some(placeholder) = node.maybe_placeholder
                && node.text.is_empty()
            {
                _ = write!(acc, " {placeholder}");
            }
        }
        NodeKind::Button => {
            _ = write!(acc, "[ {} ]", node.text);
        }
        _ => acc.push_str(&node.text),
    }

    if node.is_disabled {
        acc.push_str(" (disabled)");
    }

    if let Some(affordance) = &node.maybe_affordance {
        _ = write!(acc, "  <- {affordance:?}");
    }

    acc.push('\n');
}
