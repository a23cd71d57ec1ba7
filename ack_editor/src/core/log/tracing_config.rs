// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::str::FromStr;

use tracing_core::LevelFilter;

/// Fields:
/// - `writers`: Vec<[`WriterArg`]> - Zero or more writers to use for tracing.
/// - `level`: [`tracing::Level`] - The log level to use for tracing.
/// - `tracing_log_file_path_and_prefix`: [String] - The file path and prefix to use for
///   the log file. Eg: `/tmp/acks` or `acks.log`.
/// - `preferred_display`: [`DisplayPreference`] - Where display output goes, when one
///   of the `writers` is [`WriterArg::Stdout`].
#[derive(Clone, Debug)]
pub struct TracingConfig {
    pub writers: Vec<WriterArg>,
    pub level: tracing::Level,
    pub tracing_log_file_path_and_prefix: String,
    pub preferred_display: DisplayPreference,
}

mod tracing_config_impl {
    use super::{DisplayPreference, LevelFilter, TracingConfig, WriterArg, WriterConfig};

    impl TracingConfig {
        /// Log to a file only, at `DEBUG` level. The display is left alone since the
        /// host usually owns it.
        #[must_use]
        pub fn new_file(tracing_log_file_path_and_prefix: impl Into<String>) -> Self {
            Self {
                writers: vec![WriterArg::File],
                level: tracing::Level::DEBUG,
                tracing_log_file_path_and_prefix: tracing_log_file_path_and_prefix.into(),
                preferred_display: DisplayPreference::Stderr,
            }
        }

        /// Log to both the given [`DisplayPreference`] and a file.
        #[must_use]
        pub fn new_display_and_file(
            preferred_display: DisplayPreference,
            tracing_log_file_path_and_prefix: impl Into<String>,
        ) -> Self {
            Self {
                writers: vec![WriterArg::File, WriterArg::Stdout],
                level: tracing::Level::DEBUG,
                tracing_log_file_path_and_prefix: tracing_log_file_path_and_prefix.into(),
                preferred_display,
            }
        }

        #[must_use]
        pub fn get_level_filter(&self) -> LevelFilter {
            tracing_subscriber::filter::LevelFilter::from_level(self.level)
        }

        #[must_use]
        pub fn get_writer_config(&self) -> Option<WriterConfig> {
            WriterConfig::from_writers(&self.writers)
        }
    }
}

/// Use to parse the command line arguments (provided by `clap` crate).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriterArg {
    Stdout,
    File,
    None,
}

/// The `clap` crate parses this into a string. This converts it into a [`WriterArg`].
impl FromStr for WriterArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stdout" => Ok(WriterArg::Stdout),
            "file" => Ok(WriterArg::File),
            "none" | "" => Ok(WriterArg::None),
            _ => Err(format!("{s} is not a valid tracing writer")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

/// Intermediate representation of [`TracingConfig::writers`], which is what the layer
/// factories in [`crate::tracing_init`] consume.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriterConfig {
    Display,
    File,
    DisplayAndFile,
}

impl WriterConfig {
    #[must_use]
    pub fn from_writers(writers: &[WriterArg]) -> Option<WriterConfig> {
        let contains_file_writer = writers.contains(&WriterArg::File);
        let contains_stdout_writer = writers.contains(&WriterArg::Stdout);
        match (contains_file_writer, contains_stdout_writer) {
            (true, true) => Some(WriterConfig::DisplayAndFile),
            (true, false) => Some(WriterConfig::File),
            (false, true) => Some(WriterConfig::Display),
            (false, false) => None,
        }
    }
}
