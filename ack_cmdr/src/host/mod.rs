// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Set to `true` to log every command the host parses.
pub const DEBUG_HOST_MOD: bool = true;

// Attach sources.
pub mod clap_config;
pub mod host_command;
pub mod launcher;
pub mod mount_inputs;
pub mod ui_str;

// Re-export.
pub use clap_config::*;
pub use host_command::*;
pub use launcher::*;
pub use mount_inputs::*;
