// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use test_ack_cmdr::{CLIArg, launch};
use test_ack_editor::{CommonResult, TracingConfig, throws};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> CommonResult<()> {
    throws!({
        let cli_arg = CLIArg::parse();

        let enable_logging = cli_arg.global_options.enable_logging;
        if enable_logging {
            test_ack_editor::init(TracingConfig::new_file("acks.log"))?;
            // % is Display, ? is Debug.
            tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
        }

        launch(&cli_arg).await?;

        if enable_logging {
            tracing::debug!(message = "Stop logging...");
        }
    })
}
