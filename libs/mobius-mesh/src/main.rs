//! `mobius-strip`: prints the area and edge length of the demo strip, then
//! writes its surface plot.

use std::process::ExitCode;

use config::constants::ShapeConfig;
use mobius_mesh::{MobiusResult, MobiusStrip, Renderer, SvgRenderer};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "mobius-strip failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> MobiusResult<()> {
    let strip = MobiusStrip::from_config(ShapeConfig::demo());
    println!("{}", strip.summary());
    SvgRenderer::default().render(strip.mesh())
}

/// Logs go to stderr so stdout carries only the results. `RUST_LOG` overrides
/// the default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
