use tracing_subscriber::EnvFilter;

pub const DEFAULT_LEVEL: &str = "warn";

/// Level implied by `-q`/`-v`, falling back to the configured level.
pub fn level_for(verbose: u8, quiet: bool, configured: Option<&str>) -> String {
    if quiet {
        return "error".to_string();
    }
    match verbose {
        0 => configured
            .map(str::to_lowercase)
            .unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
        1 => "info".to_string(),
        _ => "debug".to_string(),
    }
}

/// Installs the stderr subscriber. `RUST_LOG` takes precedence over `level`.
pub fn init(level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
    if let Err(e) = result {
        eprintln!("warning: logging disabled: {e}");
    }
}
