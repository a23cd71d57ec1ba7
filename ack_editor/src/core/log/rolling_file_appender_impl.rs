// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::{Path, PathBuf};

use tracing_appender::rolling::RollingFileAppender;

/// Opens `path_str` for appending, without rotation. A bare file name like `acks.log`
/// lands in the current folder.
///
/// Don't wrap the result in `tracing_appender::non_blocking`, the host exits before the
/// worker flushes and the tail of the log is lost.
///
/// # Errors
///
/// Returns an error if `path_str` has no file name, eg: `/` or `logs/..`.
pub fn try_create(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let Some(file_name) = path.file_name() else {
        miette::bail!("Log file path {} does not name a file", path.display());
    };

    let folder = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    Ok(tracing_appender::rolling::never(folder, file_name))
}
