// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Turn on verbose tracing for the save / delete protocol and the modal region.
pub const DEBUG_ACKS_MOD: bool = true;

// Attach sources.
pub mod ack_error;
pub mod app;
pub mod capabilities;
pub mod card;
pub mod chip_set;
pub mod detail_editor;
pub mod gateway;
pub mod list_controller;
pub mod view;

// Re-export.
pub use ack_error::*;
pub use app::*;
pub use capabilities::*;
pub use card::*;
pub use chip_set::*;
pub use detail_editor::*;
pub use gateway::*;
pub use list_controller::*;
pub use view::*;
