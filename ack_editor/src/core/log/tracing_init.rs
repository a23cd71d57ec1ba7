// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use crate::{DisplayPreference, TracingConfig, WriterConfig, rolling_file_appender_impl};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer. Note that
/// [`tracing_subscriber::fmt::format::Pretty`] and
/// [`tracing_subscriber::fmt::format::Compact`] are mutually exclusive.
#[macro_export]
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(true)
            .with_thread_names(false)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Installs the global subscriber built from `tracing_config`. Does nothing if the
/// config has no writers.
///
/// # Errors
///
/// Returns an error if a file layer can't be created, or if a global subscriber was
/// already installed.
pub fn init(tracing_config: TracingConfig) -> miette::Result<()> {
    if let Some(layers) = try_create_layers(&tracing_config)? {
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .map_err(|error| miette::miette!("Could not install tracing subscriber: {error}"))?;
    }
    Ok(())
}

/// Returns the layers. This does not initialize the tracing system. Use [`init`] for
/// that, or do it manually:
/// `try_create_layers(..).map(|layers| tracing_subscriber::registry().with(layers).init());`
///
/// # Errors
///
/// Returns an error if the file layer can't be created.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> miette::Result<Option<Vec<Box<DynLayer<tracing_subscriber::Registry>>>>> {
    let Some(writer_config) = tracing_config.get_writer_config() else {
        return Ok(None);
    };

    let level_filter = tracing_config.get_level_filter();

    let layers = {
        let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

        // Set the level filter from the tracing configuration. This is needed if you add
        // more layers which don't have a level filter.
        return_it.push(Box::new(level_filter));

        if let Some(layer) = try_create_display_layer(
            level_filter,
            writer_config,
            tracing_config.preferred_display,
        )? {
            return_it.push(layer);
        }

        if let Some(layer) = try_create_file_layer(
            level_filter,
            writer_config,
            &tracing_config.tracing_log_file_path_and_prefix,
        )? {
            return_it.push(layer);
        }

        return_it
    };

    Ok(Some(layers))
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// This is useful for composition of layers. There's more info in the docs
/// [here](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/layer/index.html#runtime-configuration-with-layers).
///
/// # Errors
///
/// Never fails today; the [`miette::Result`] keeps the signature symmetric with
/// [`try_create_file_layer`].
#[allow(clippy::unnecessary_wraps)]
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
    preferred_display: DisplayPreference,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    // Shared configuration regardless of where logs are output to.
    let fmt_layer = create_fmt!();

    Ok(match writer_config {
        WriterConfig::DisplayAndFile | WriterConfig::Display => match preferred_display {
            DisplayPreference::Stdout => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stdout)
                    .with_filter(level_filter),
            )),
            DisplayPreference::Stderr => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stderr)
                    .with_filter(level_filter),
            )),
        },
        WriterConfig::File => None,
    })
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
    tracing_log_file_path_and_prefix: &str,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    // Shared configuration regardless of where logs are output to.
    let fmt_layer = create_fmt!().with_ansi(false);

    Ok(match writer_config {
        WriterConfig::DisplayAndFile | WriterConfig::File => {
            let file = rolling_file_appender_impl::try_create(tracing_log_file_path_and_prefix)?;
            Some(Box::new(
                fmt_layer.with_writer(file).with_filter(level_filter),
            ))
        }
        WriterConfig::Display => None,
    })
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;
    use crate::WriterArg;

    fn temp_log_file(tag: &str) -> String {
        std::env::temp_dir()
            .join(format!("test_ack_editor_{tag}_{}.log", std::process::id()))
            .to_string_lossy()
            .to_string()
    }

    #[test]
    fn test_try_create_display_layer() {
        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_display_layer(
                LevelFilter::DEBUG,
                WriterConfig::Display,
                DisplayPreference::Stdout,
            )
            .unwrap();
        assert!(layer.is_some());
    }

    #[test]
    fn test_display_layer_skipped_for_file_only() {
        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_display_layer(
                LevelFilter::DEBUG,
                WriterConfig::File,
                DisplayPreference::Stdout,
            )
            .unwrap();
        assert!(layer.is_none());
    }

    #[test]
    fn test_try_create_file_layer() {
        let file_path = temp_log_file("layer");

        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_file_layer(LevelFilter::DEBUG, WriterConfig::File, &file_path)
                .unwrap();

        assert!(layer.is_some());
        assert!(std::path::Path::new(&file_path).exists());
        drop(std::fs::remove_file(&file_path));
    }

    #[test]
    fn test_no_writers_no_layers() {
        let config = TracingConfig {
            writers: vec![WriterArg::None],
            ..TracingConfig::new_file("unused.log")
        };
        assert!(try_create_layers(&config).unwrap().is_none());
    }

    /// The global subscriber can only be installed once per process.
    #[test]
    #[serial]
    fn test_init_installs_global_subscriber_once() {
        let file_path = temp_log_file("init");
        assert!(init(TracingConfig::new_file(file_path.clone())).is_ok());
        tracing::debug!(message = "logged to file");
        assert!(init(TracingConfig::new_file(file_path.clone())).is_err());
        drop(std::fs::remove_file(&file_path));
    }
}
