use std::io::BufRead;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use super::{input_args, read_input, Cmd};
use crate::config::TriplesConfig;
use crate::counter::Method;
use crate::error::TriplesError;
use crate::input::BitString;
use crate::report::{CountReport, OutputFormat};

/// Only the NTT-backed counter has a length bound.
fn check_limit(method: Method, input: &BitString, max_len: usize) -> Result<(), TriplesError> {
    match method {
        Method::Progression => input.check_len(max_len),
        Method::Literal | Method::Naive => Ok(()),
    }
}

#[derive(Default)]
pub struct CountCmd;

impl CountCmd {
    pub fn new() -> Self {
        CountCmd
    }

    /// The arguments of `count`, also accepted by the top level command.
    pub fn args(cmd: Command) -> Command {
        input_args(cmd)
            .arg(
                Arg::new("method")
                    .short('m')
                    .long("method")
                    .action(ArgAction::Set)
                    .value_parser(value_parser!(Method))
                    .required(false)
                    .help("the counting method, `literal` if not configured"),
            )
            .arg(
                Arg::new("output")
                    .short('o')
                    .long("output")
                    .action(ArgAction::Set)
                    .value_parser(value_parser!(OutputFormat))
                    .default_value("plain")
                    .help("the output format"),
            )
    }

    pub fn output<R: BufRead>(&self, m: &ArgMatches, stdin: R) -> anyhow::Result<String> {
        let input = read_input(m, stdin)?;
        let config = TriplesConfig::config();
        let method = m
            .get_one::<Method>("method")
            .copied()
            .unwrap_or(config.method);
        check_limit(method, &input, config.max_len)?;

        let count = method
            .counter()
            .count(&input)
            .with_context(|| format!("count with method `{method}` failed"))?;
        log::info!("{method}: {count} triples in {} positions", input.len());

        let format = m.get_one::<OutputFormat>("output").copied().unwrap_or_default();
        CountReport::new(method, &input, count).render(format)
    }
}

impl Cmd for CountCmd {
    const NAME: &'static str = "count";

    fn cmd() -> Command {
        Self::args(Command::new(Self::NAME).about("count the triples of a binary string"))
    }

    fn run(&self, m: &ArgMatches) -> anyhow::Result<()> {
        let out = self.output(m, std::io::stdin().lock())?;
        println!("{out}");
        Ok(())
    }
}
