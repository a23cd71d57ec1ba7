// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Why a save or delete did not go through. The editor recovers from all of these by
/// reverting the card, so none is fatal.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum GatewayError {
    #[error("Invalid acknowledgments URL {url}: {reason}")]
    #[diagnostic(
        code(test_ack_editor::gateway::invalid_url),
        help("The base URL must be absolute, eg: https://dashboard.example.com")
    )]
    InvalidUrl { url: String, reason: String },

    #[error("Could not reach the acknowledgments backend")]
    #[diagnostic(code(test_ack_editor::gateway::transport))]
    Transport(#[from] reqwest::Error),

    #[error("{method} {url} failed with HTTP status {status}")]
    #[diagnostic(code(test_ack_editor::gateway::http_status))]
    HttpStatus {
        method: &'static str,
        url: String,
        status: u16,
    },

    #[error("The backend accepted the acknowledgment but did not return its key")]
    #[diagnostic(code(test_ack_editor::gateway::missing_key))]
    MissingKey,

    #[error("The acknowledgments backend is unavailable: {reason}")]
    #[diagnostic(code(test_ack_editor::gateway::unavailable))]
    Unavailable { reason: String },
}

pub type GatewayResult<T> = Result<T, GatewayError>;
