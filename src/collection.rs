//! Data collection for the pipe viewer: the sample pipe itself, plus the
//! host introspection that feeds the status title.

pub mod host;
pub mod pipe;

use crate::utils::error::{PipetopError, Result};

/// One parsed record of cpu/mem/load/proc values for a single tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    pub cpu: f64,
    pub mem: f64,
    pub load: f64,
    pub proc_count: u32,
}

impl Sample {
    /// Parses one pipe line of exactly four whitespace-separated numeric
    /// fields. All four are parsed as floating point; the fourth is then
    /// truncated to an integer process count.
    pub fn from_line(line: &str) -> Result<Self> {
        let trimmed = line.trim_end();
        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        if tokens.len() != 4 {
            return Err(PipetopError::MalformedSample(format!(
                "expected 4 fields but got {} in {trimmed:?}",
                tokens.len()
            )));
        }

        let mut fields = [0.0_f64; 4];
        for (field, token) in fields.iter_mut().zip(&tokens) {
            *field = token.parse().map_err(|_| {
                PipetopError::MalformedSample(format!(
                    "non-numeric field {token:?} in {trimmed:?}"
                ))
            })?;
        }

        Ok(Sample {
            cpu: fields[0],
            mem: fields[1],
            load: fields[2],
            proc_count: fields[3] as u32,
        })
    }
}

/// What the collection thread hands to the main thread after a successful
/// pipe read.
#[derive(Clone, Debug)]
pub struct Data {
    pub sample: Sample,
    pub uptime: String,
    pub total_processes: usize,
}

/// Owns the sample pipe and performs one full harvest per update interval.
#[derive(Debug)]
pub struct DataCollector {
    source: pipe::PipeSource,
}

impl DataCollector {
    pub fn new(source: pipe::PipeSource) -> Self {
        DataCollector { source }
    }

    /// Creates the sample pipe if nothing exists at its path yet.
    pub fn init(&mut self) -> Result<()> {
        self.source.create_if_missing()
    }

    /// Reads one sample from the pipe, then queries host introspection.
    ///
    /// Host data is computed fresh on every successful harvest, never
    /// cached. A failed pipe read skips introspection entirely so the tick
    /// contributes nothing.
    pub fn harvest(&mut self) -> Result<Data> {
        let sample = self.source.read_sample()?;

        Ok(Data {
            sample,
            uptime: host::uptime(),
            total_processes: host::total_process_count(),
        })
    }
}
