// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod detail_editor_struct;
pub mod modal_region;

// Re-export.
pub use detail_editor_struct::*;
pub use modal_region::*;
