// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser};
use test_ack_editor::{DEFAULT_NOTICE_CAPACITY, EditorOptions, FailureFeedback};

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "acks")]
#[command(about = "✅ Acknowledge known test failures on the dashboard")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
      help_template = "{about}\nVersion: {bin} {version} 💻\n\nProvide the page inputs as a JSON file, or nothing to start with an empty list.\nUSAGE 📓:\n  acks [\x1b[32minputs file\x1b[0m] [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
  )]
pub struct CLIArg {
    /// JSON with `allTestNames`, `existingAcknowledgments`, and `readOnly`.
    #[arg(name = "inputs file")]
    pub maybe_inputs_file: Option<String>,

    #[arg(
        long,
        short = 'u',
        help = "Dashboard base URL, eg: `https://dash.example.com`. Without it, saves and deletes go to an in-memory backend seeded from the inputs file."
    )]
    pub base_url: Option<String>,

    #[arg(
        long,
        short = 'r',
        help = "Mount read-only, regardless of what the inputs file says."
    )]
    pub read_only: bool,

    #[arg(
        long,
        short = 'w',
        conflicts_with = "read_only",
        help = "Mount writable, regardless of what the inputs file says. A file that leaves out `readOnly` mounts read-only otherwise."
    )]
    pub writable: bool,

    #[arg(
        long,
        short = 'f',
        help = "Queue a notice when a save or delete fails, on top of reverting the card."
    )]
    pub notify_failures: bool,

    #[arg(
        long,
        default_value_t = DEFAULT_NOTICE_CAPACITY,
        help = "How many failure notices are kept before the oldest is dropped."
    )]
    pub notice_capacity: usize,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `acks.log` for debugging."
    )]
    pub enable_logging: bool,
}

impl CLIArg {
    #[must_use]
    pub fn editor_options(&self) -> EditorOptions {
        EditorOptions {
            failure_feedback: if self.notify_failures {
                FailureFeedback::Notice
            } else {
                FailureFeedback::Silent
            },
            notice_capacity: self.notice_capacity,
        }
    }
}
