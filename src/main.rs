use std::path::PathBuf;

use clap::ArgMatches;
use log::LevelFilter;
use triples::cmd::{app, selected, Cmd, CountCmd, SpectrumCmd};
use triples::config::TriplesConfig;

fn run(app: &ArgMatches) -> anyhow::Result<()> {
    TriplesConfig::init(app.get_one::<PathBuf>("config").map(|p| p.as_path()))?;

    match selected(app) {
        (CountCmd::NAME, m) => CountCmd::new().run(m),
        (SpectrumCmd::NAME, m) => SpectrumCmd::new().run(m),
        (name, _) => anyhow::bail!("unsupported command `{name}`"),
    }
}

fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    if let Err(e) = run(&app().get_matches()) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}
