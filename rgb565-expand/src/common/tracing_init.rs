// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # [`init_tracing`]
//!
//! Set up a [`tracing_subscriber`] registry with a single compact `fmt` layer that
//! writes to `stdout` or `stderr`. The command line tools in this crate log to `stderr`
//! so that `stdout` only carries the user facing messages from
//! [`crate::rgb565_expand::ui_str`].
//!
//! Use [`TracingConfig`] to pick the output, the [`LevelFilter`], and whether the
//! subscriber is installed globally (apps) or thread locally (tests).

use miette::IntoDiagnostic;
use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

/// Where log lines are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

/// Whether the subscriber is the process wide default, or only for the current thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingScope {
    /// Once set, can't be unset or changed. Use this in binaries.
    Global,
    /// Reset when the returned [`dispatcher::DefaultGuard`] is dropped. Use this in
    /// tests.
    ThreadLocal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracingConfig {
    pub scope: TracingScope,
    pub display_preference: DisplayPreference,
    pub level_filter: LevelFilter,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            scope: TracingScope::Global,
            display_preference: DisplayPreference::Stderr,
            level_filter: LevelFilter::WARN,
        }
    }
}

impl TracingConfig {
    /// Config used by the binaries: `stderr`, global, `DEBUG` when `verbose` is set and
    /// `WARN` otherwise.
    #[must_use]
    pub fn new_for_cli(verbose: bool) -> Self {
        Self {
            level_filter: if verbose {
                LevelFilter::DEBUG
            } else {
                LevelFilter::WARN
            },
            ..Default::default()
        }
    }
}

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .with_ansi(true)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Initialize the tracing system with the provided [`TracingConfig`].
///
/// # Return
/// 1. [`TracingScope::ThreadLocal`] returns a [`dispatcher::DefaultGuard`]. Dropping it
///    resets the tracing system to its previous state for that thread.
/// 2. [`TracingScope::Global`] returns [`None`].
///
/// # Errors
///
/// Returns an error if the scope is [`TracingScope::Global`] and a global default
/// subscriber has already been set.
pub fn init_tracing(
    tracing_config: TracingConfig,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let layers = create_layers(tracing_config);
    match tracing_config.scope {
        TracingScope::Global => {
            tracing_subscriber::registry()
                .with(layers)
                .try_init()
                .into_diagnostic()?;
            Ok(None)
        }
        TracingScope::ThreadLocal => {
            let it = tracing_subscriber::registry().with(layers).set_default();
            Ok(Some(it))
        }
    }
}

/// Returns the layers. This does not initialize the tracing system.
#[must_use]
pub fn create_layers(
    tracing_config: TracingConfig,
) -> Vec<Box<DynLayer<tracing_subscriber::Registry>>> {
    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Global level filter, so layers added later without their own filter still obey it.
    return_it.push(Box::new(tracing_config.level_filter));

    return_it.push(create_display_layer(
        tracing_config.level_filter,
        tracing_config.display_preference,
    ));

    return_it
}

/// This erases the concrete type of the writer, and returns a boxed layer.
#[must_use]
pub fn create_display_layer<S>(
    level_filter: LevelFilter,
    display_preference: DisplayPreference,
) -> Box<DynLayer<S>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!();

    match display_preference {
        DisplayPreference::Stdout => Box::new(
            fmt_layer
                .with_writer(std::io::stdout)
                .with_filter(level_filter),
        ),
        DisplayPreference::Stderr => Box::new(
            fmt_layer
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        ),
    }
}
