use std::io::Stderr;
use tracing_subscriber::fmt::format::{DefaultFields, Format};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_filter(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
}

/// Plain fmt layer on stderr, so stdout carries only command output.
fn stderr_layer<S>() -> fmt::Layer<S, DefaultFields, Format, fn() -> Stderr> {
    fmt::layer()
        .with_writer(std::io::stderr as fn() -> Stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

pub fn init_cli_logger(verbose: bool) {
    let directives = if verbose {
        "small_utils=debug,info"
    } else {
        "small_utils=info"
    };

    tracing_subscriber::registry()
        .with(env_filter(directives))
        .with(stderr_layer().compact())
        .init();
}

pub fn init_json_logger() {
    tracing_subscriber::registry()
        .with(env_filter("small_utils=info"))
        .with(stderr_layer().json())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_layer_builds_both_formats() {
        let compact = tracing_subscriber::registry()
            .with(env_filter("small_utils=debug"))
            .with(stderr_layer().compact());
        tracing::subscriber::with_default(compact, || tracing::debug!("compact layer ready"));

        let json = tracing_subscriber::registry()
            .with(env_filter("small_utils=info"))
            .with(stderr_layer().json());
        tracing::subscriber::with_default(json, || tracing::info!("json layer ready"));
    }
}
