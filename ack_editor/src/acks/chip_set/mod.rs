// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod chip_input;
pub mod chip_set_editor;

// Re-export.
pub use chip_input::*;
pub use chip_set_editor::*;
