// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod capabilities_struct;
pub mod render_strategy;

// Re-export.
pub use capabilities_struct::*;
pub use render_strategy::*;
