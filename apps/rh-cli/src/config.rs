//! Run parameters from flags and an optional YAML run file.

use std::path::Path;

use clap::Args;
use rh_fdm::{Real, RodParams};
use serde::Deserialize;

use crate::error::CliResult;

/// Rod parameters accepted on the command line. Unset flags fall back to the
/// run file, then to the built-in defaults.
#[derive(Args, Debug, Default, Clone)]
pub struct RodArgs {
    /// YAML run file with any of: length, time, dx, dt, amplitude
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,
    /// Rod length L
    #[arg(long)]
    pub length: Option<Real>,
    /// Stopping time T
    #[arg(long)]
    pub time: Option<Real>,
    /// Spatial step dx
    #[arg(long)]
    pub dx: Option<Real>,
    /// Time step dt
    #[arg(long)]
    pub dt: Option<Real>,
    /// Amplitude A of the initial profile A sin(pi x / L)
    #[arg(long)]
    pub amplitude: Option<Real>,
}

/// Contents of a YAML run file. Every field is optional.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RunFile {
    pub length: Option<Real>,
    pub time: Option<Real>,
    pub dx: Option<Real>,
    pub dt: Option<Real>,
    pub amplitude: Option<Real>,
}

impl RunFile {
    pub fn load(path: &Path) -> CliResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> CliResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }
}

/// Fully resolved run setup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSetup {
    pub params: RodParams,
    pub amplitude: Real,
}

impl RodArgs {
    /// Merge flags over the run file over defaults, then validate.
    pub fn resolve(&self) -> CliResult<RunSetup> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading run file");
                RunFile::load(path)?
            }
            None => RunFile::default(),
        };
        self.resolve_with(&file)
    }

    pub fn resolve_with(&self, file: &RunFile) -> CliResult<RunSetup> {
        let defaults = RodParams::default();
        let length = self.length.or(file.length).unwrap_or(defaults.length());
        let time = self.time.or(file.time).unwrap_or(defaults.stop_time());
        let dx = self.dx.or(file.dx).unwrap_or(defaults.dx());
        let dt = self.dt.or(file.dt).unwrap_or(defaults.dt());
        let amplitude = self.amplitude.or(file.amplitude).unwrap_or(1.0);

        Ok(RunSetup {
            params: RodParams::new(length, time, dx, dt)?,
            amplitude,
        })
    }
}
