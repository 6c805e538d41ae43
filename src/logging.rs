use anyhow::Context as _;

/// Filter used when `RUST_LOG` is unset: our own events at `info` (or `debug`
/// with `--verbose`), everything else at `warn`.
fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "warn,narrow=debug"
    } else {
        "warn,narrow=info"
    }
}

pub fn init(verbose: bool) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(default_directives(verbose)))
        .context("build log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("initialize tracing subscriber: {err}"))?;

    Ok(())
}
