use std::fmt::{Display, Formatter};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::counter::Method;
use crate::input::BitString;
use crate::ty::TableShow;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// the bare count
    #[default]
    Plain,
    Json,
    Table,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountReport {
    pub method: Method,
    pub len: usize,
    pub ones: usize,
    pub count: u64,
}

impl CountReport {
    pub fn new(method: Method, input: &BitString, count: u64) -> Self {
        Self {
            method,
            len: input.len(),
            ones: input.ones(),
            count,
        }
    }

    pub fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        Ok(match format {
            OutputFormat::Plain => self.count.to_string(),
            OutputFormat::Json => serde_json::to_string(self)?,
            OutputFormat::Table => self.table().trim_end().to_string(),
        })
    }
}

impl TableShow for CountReport {
    const COLS: usize = 4;

    fn head() -> Vec<String> {
        ["method", "len", "ones", "count"]
            .into_iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn cols(&self) -> Vec<(String, Vec<String>)> {
        let row = [
            self.method.to_string(),
            self.len.to_string(),
            self.ones.to_string(),
            self.count.to_string(),
        ];

        Self::head()
            .into_iter()
            .zip(row)
            .map(|(h, c)| (h, vec![c]))
            .collect()
    }
}

impl Display for CountReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.table().as_str())
    }
}
