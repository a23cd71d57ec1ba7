// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod affordance;
pub mod text_painter;
pub mod ui_str;
pub mod view_node;

// Re-export.
pub use affordance::*;
pub use text_painter::*;
pub use view_node::*;
