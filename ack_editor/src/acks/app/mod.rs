// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod ack_app;
pub mod ack_event;
pub mod ack_signal;
pub mod editor_options;
pub mod effect;
pub mod mount_args;

// Re-export.
pub use ack_app::*;
pub use ack_event::*;
pub use ack_signal::*;
pub use editor_options::*;
pub use effect::*;
pub use mount_args::*;
