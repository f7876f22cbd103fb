use anyhow::Result;
use std::io::Write;
use tracing::{debug, info, warn};

use crate::environment::Environment;
use crate::report::ProbeReport;

pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M:%S";
pub const OPERANDS: (i32, i32) = (10, 5);

pub fn calculate(a: i32, b: i32) -> i64 {
    i64::from(a) + i64::from(b)
}

pub struct Probe<E: Environment> {
    env: E,
}

impl<E: Environment> Probe<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }

    // A failed listing becomes a missing count, never an error.
    pub fn collect(&self) -> ProbeReport {
        let timestamp = self.env.now().format(TIMESTAMP_FORMAT).to_string();

        let working_dir = match self.env.current_dir() {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Working directory unavailable: {:#}", e);
                None
            }
        };

        let (a, b) = OPERANDS;
        let sum = calculate(a, b);

        let entry_count = working_dir.as_deref().and_then(|dir| {
            match self.env.list_dir(dir) {
                Ok(entries) => Some(entries.len()),
                Err(e) => {
                    warn!("Directory listing failed: {:#}", e);
                    None
                }
            }
        });

        ProbeReport {
            timestamp,
            working_dir,
            operands: OPERANDS,
            sum,
            entry_count,
        }
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<ProbeReport> {
        info!("Running environment probe");

        let report = self.collect();
        match serde_json::to_string(&report) {
            Ok(json) => debug!("Probe report: {}", json),
            Err(e) => warn!("Could not serialize probe report: {}", e),
        }

        report.write_to(out)?;

        Ok(report)
    }
}
