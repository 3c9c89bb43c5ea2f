use anyhow::{Context, Result};
use clap::Parser;

use semver_bump::{config, output, ui};

#[derive(clap::Parser)]
#[command(
    name = "semver-bump",
    version,
    about = "Compute the next semantic version for a bump level"
)]
struct Args {
    #[arg(
        long,
        env = "CURRENT_VERSION",
        help = "The current semantic version (e.g. v1.2.3)"
    )]
    current_version: String,

    #[arg(
        long,
        env = "BUMP_LEVEL",
        help = "major, minor, patch, premajor, preminor, prepatch or prerelease"
    )]
    bump_level: String,

    #[arg(
        long,
        env = "PRERELEASE_TAG",
        help = "Pre-release tag for the pre* levels (default: alpha)"
    )]
    prerelease_tag: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Log bump decisions to stderr")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = config::load_config(args.config.as_deref()).context("Error loading config")?;
    let tag = config.resolve_prerelease_tag(args.prerelease_tag.as_deref());

    let new_version =
        match semver_bump::compute_bumped_version(&args.current_version, &args.bump_level, tag) {
            Ok(version) => version,
            Err(e) => {
                ui::display_error(&format!("Error bumping semver: {}", e));
                std::process::exit(1);
            }
        };

    log::info!("{} -> {}", args.current_version, new_version);
    output::set_action_output(&config.output.name, &new_version)
        .context("Error writing action output")?;

    Ok(())
}

fn init_logging(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or(if verbose { "debug" } else { "warn" });
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .init();
}
