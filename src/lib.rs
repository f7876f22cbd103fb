pub mod environment;
pub mod probe;
pub mod report;

pub use environment::{Environment, SystemEnvironment};
pub use probe::{calculate, Probe};
pub use report::ProbeReport;
