use std::io::BufRead;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use transform::{dft, Complex};

use super::{input_args, read_input, Cmd};
use crate::config::TriplesConfig;
use crate::report::OutputFormat;
use crate::ty::TableShow;

/// DFT of the sign array, the values the literal counter walks.
pub struct Spectrum {
    bins: Vec<Complex<f64>>,
    precision: usize,
}

impl Spectrum {
    pub fn new(bins: Vec<Complex<f64>>, precision: usize) -> Self {
        Self { bins, precision }
    }

    pub fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        let p = self.precision;
        Ok(match format {
            OutputFormat::Plain => self
                .bins
                .iter()
                .map(|c| format!("{:.p$} {:.p$}", c.re, c.im))
                .collect::<Vec<_>>()
                .join("\n"),
            OutputFormat::Json => {
                let pairs = self.bins.iter().map(|c| [c.re, c.im]).collect::<Vec<_>>();
                serde_json::to_string(&pairs)?
            }
            OutputFormat::Table => self.table().trim_end().to_string(),
        })
    }
}

impl TableShow for Spectrum {
    const COLS: usize = 4;

    fn head() -> Vec<String> {
        ["bin", "re", "im", "norm"]
            .into_iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn cols(&self) -> Vec<(String, Vec<String>)> {
        let p = self.precision;
        let mut res = (0..Self::COLS).map(|_| vec![]).collect::<Vec<_>>();

        for (idx, c) in self.bins.iter().enumerate() {
            res[0].push(idx.to_string());
            res[1].push(format!("{:.p$}", c.re));
            res[2].push(format!("{:.p$}", c.im));
            res[3].push(format!("{:.p$}", c.norm()));
        }

        Self::head().into_iter().zip(res).collect()
    }
}

#[derive(Default)]
pub struct SpectrumCmd;

impl SpectrumCmd {
    pub fn new() -> Self {
        SpectrumCmd
    }

    pub fn output<R: BufRead>(&self, m: &ArgMatches, stdin: R) -> anyhow::Result<String> {
        let input = read_input(m, stdin)?;
        let precision = m
            .get_one::<usize>("precision")
            .copied()
            .unwrap_or(TriplesConfig::config().precision);
        let format = m.get_one::<OutputFormat>("output").copied().unwrap_or_default();

        let spectrum = Spectrum::new(dft(&input.signs().as_signal()), precision);
        spectrum.render(format)
    }
}

impl Cmd for SpectrumCmd {
    const NAME: &'static str = "spectrum";

    fn cmd() -> Command {
        input_args(
            Command::new(Self::NAME).about("print the DFT of the sign array, one `re im` bin per line"),
        )
        .arg(
            Arg::new("precision")
                .short('p')
                .long("precision")
                .value_name("N")
                .action(ArgAction::Set)
                .value_parser(value_parser!(usize))
                .required(false)
                .help("fractional digits of every value"),
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

    fn run(&self, m: &ArgMatches) -> anyhow::Result<()> {
        let out = self.output(m, std::io::stdin().lock())?;
        if !out.is_empty() {
            println!("{out}");
        }
        Ok(())
    }
}
