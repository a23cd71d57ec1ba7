// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod ack_entry;
pub mod ack_list_controller;
pub mod list_change;
pub mod notices;
pub mod test_name_search;

// Re-export.
pub use ack_entry::*;
pub use ack_list_controller::*;
pub use list_change::*;
pub use notices::*;
pub use test_name_search::*;
