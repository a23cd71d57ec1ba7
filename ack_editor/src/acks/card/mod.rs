// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod ack_card;
pub mod scope_summary;

// Re-export.
pub use ack_card::*;
pub use scope_summary::*;
