// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::{IntoDiagnostic, WrapErr};
use test_ack_editor::MountArgs;

use crate::{CLIArg, DEBUG_HOST_MOD};

/// Reads the page inputs from `maybe_inputs_file`, or starts from
/// [`MountArgs::default`] when there is none. Then the `--read-only` and
/// `--writable` flags are applied on top.
///
/// # Errors
///
/// Returns an error if the file can't be read or is not valid JSON for [`MountArgs`].
pub async fn load_mount_args(cli_arg: &CLIArg) -> miette::Result<MountArgs> {
    let mut mount_args = match cli_arg.maybe_inputs_file.as_deref() {
        Some(inputs_file) => {
            let content = tokio::fs::read_to_string(inputs_file)
                .await
                .into_diagnostic()
                .wrap_err_with(|| format!("Could not read inputs file: {inputs_file}"))?;
            parse_mount_args(&content)
                .wrap_err_with(|| format!("Invalid inputs file: {inputs_file}"))?
        }
        None => MountArgs::default(),
    };

    apply_flags(&mut mount_args, cli_arg.read_only, cli_arg.writable);

    // % is Display, ? is Debug.
    DEBUG_HOST_MOD.then(|| {
        tracing::debug!(
            message = "mount inputs loaded",
            inputs_file = ?cli_arg.maybe_inputs_file,
            read_only = %mount_args.read_only,
            test_name_count = mount_args.all_test_names.len(),
        );
    });

    Ok(mount_args)
}

/// # Errors
///
/// Returns an error if `content` is not valid JSON for [`MountArgs`].
pub fn parse_mount_args(content: &str) -> miette::Result<MountArgs> {
    serde_json::from_str(content).into_diagnostic()
}

fn apply_flags(mount_args: &mut MountArgs, read_only: bool, writable: bool) {
    if read_only {
        mount_args.read_only = true;
    } else if writable {
        mount_args.read_only = false;
    }
}
