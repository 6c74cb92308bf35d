use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use crate::config::TriplesConfig;
use crate::input::{strip_line, BitString};

pub trait Cmd {
    const NAME: &'static str;

    fn cmd() -> Command;

    fn run(&self, m: &ArgMatches) -> anyhow::Result<()>;
}

mod count;
pub use count::CountCmd;

mod spectrum;
pub use spectrum::SpectrumCmd;

/// The top level command, it takes the `count` arguments when no subcommand is given.
pub fn app() -> Command {
    let version = env!("TRIPLES_VERSION_INFO");
    CountCmd::args(
        Command::new("triples")
            .version(version)
            .long_version(format!("{version} ({})", env!("TRIPLES_GIT_INFO")))
            .about("count index triples of a binary string")
            .args_conflicts_with_subcommands(true),
    )
    .arg(
        Arg::new("config")
            .short('c')
            .long("config")
            .global(true)
            .action(ArgAction::Set)
            .value_parser(value_parser!(PathBuf))
            .required(false)
            .help("the configuration file"),
    )
    .subcommand(CountCmd::cmd())
    .subcommand(SpectrumCmd::cmd())
}

/// The subcommand to run and its matches, `count` with the top level matches by default.
pub fn selected(app: &ArgMatches) -> (&str, &ArgMatches) {
    app.subcommand().unwrap_or((CountCmd::NAME, app))
}

fn input_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("str")
            .value_name("STRING")
            .action(ArgAction::Set)
            .value_parser(value_parser!(String))
            .required(false)
            .help("the binary string, read one line from stdin if neither it nor `--file` is given"),
    )
    .arg(
        Arg::new("file")
            .short('f')
            .long("file")
            .action(ArgAction::Set)
            .value_parser(value_parser!(PathBuf))
            .required(false)
            .conflicts_with("str")
            .help("read the binary string from the first line of the file"),
    )
    .arg(
        Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .required(false)
            .help("reject characters other than `0` and `1`"),
    )
}

/// Reads the string from the `STRING` argument, the `--file`, or the first line of `stdin`.
fn read_input<R: BufRead>(m: &ArgMatches, mut stdin: R) -> anyhow::Result<BitString> {
    let config = TriplesConfig::config();

    let mut line = String::new();
    if let Some(s) = m.get_one::<String>("str") {
        line.push_str(s);
    } else if let Some(f) = m.get_one::<PathBuf>("file") {
        let file = File::open(f).with_context(|| format!("open `{}` failed", f.display()))?;
        BufReader::new(file)
            .read_line(&mut line)
            .with_context(|| format!("read `{}` failed", f.display()))?;
    } else {
        stdin.read_line(&mut line).context("read stdin failed")?;
    }

    let s = strip_line(&line);
    let input = if m.get_flag("strict") || config.strict {
        BitString::parse_strict(s)?
    } else {
        BitString::new(s)
    };

    log::debug!("input: {} bytes, {} ones", input.len(), input.ones());
    Ok(input)
}
