//! jcompiler CLI entry point

fn main() {
    // Structured logging on stderr, quiet by default so diagnostics stay the only output
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    jcompiler::cli::run();
}
