// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Log every request and response of the HTTP gateway.
pub const DEBUG_GATEWAY_MOD: bool = true;

// Attach sources.
pub mod gateway_config;
pub mod gateway_error;
pub mod http_gateway;
pub mod in_memory_gateway;
pub mod persistence_gateway;

// Re-export.
pub use gateway_config::*;
pub use gateway_error::*;
pub use http_gateway::*;
pub use in_memory_gateway::*;
pub use persistence_gateway::*;
