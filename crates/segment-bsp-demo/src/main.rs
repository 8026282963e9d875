use anyhow::{Context, Result};
use clap::Parser;
use segment_bsp::{render, BspConfig, BspTree, FirstSegment, DEFAULT_EPSILON};
use segment_bsp_demo::sample_segments;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "segment-bsp-demo")]
#[command(about = "Builds a BSP tree from the sample segments and prints it")]
struct Cmd {
    /// Tolerance for deciding whether a point lies on a splitting line
    #[arg(long, default_value_t = DEFAULT_EPSILON, value_parser = parse_epsilon)]
    epsilon: f64,
}

fn parse_epsilon(s: &str) -> Result<f64, String> {
    let epsilon: f64 = s.parse().map_err(|e| format!("{e}"))?;
    BspConfig::new()
        .with_epsilon(epsilon)
        .validate()
        .map(|()| epsilon)
        .map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cmd = Cmd::parse();
    let config = BspConfig::new().with_epsilon(cmd.epsilon);
    let segments = sample_segments();

    for line in &segments {
        println!("{line}");
    }

    let input = segments.len();
    let tree = BspTree::build(segments, &FirstSegment, &config)
        .context("failed to build BSP tree from sample segments")?;
    tracing::info!(
        input,
        segments = tree.segment_count(),
        depth = tree.depth(),
        epsilon = config.epsilon,
        "built tree"
    );

    println!();
    println!("{}", render(&tree));
    Ok(())
}
