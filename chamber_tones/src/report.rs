use std::io::{self, Write};

use cavity_modes::{compute, modes, Cavity, Mode, ModeError, ModeSearch};
use serde::Serialize;

use crate::cli::Target;

/// The computed result for one cavity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CavityReport {
    pub name: String,
    pub dimensions: Cavity,
    pub frequencies: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modes: Option<Vec<Mode>>,
}

impl CavityReport {
    pub fn build(target: &Target, search: &ModeSearch, with_modes: bool) -> Result<Self, ModeError> {
        let frequencies = compute(&target.cavity, search)?;
        let modes = if with_modes {
            Some(modes(&target.cavity, search)?)
        } else {
            None
        };
        Ok(Self {
            name: target.name.clone(),
            dimensions: target.cavity,
            frequencies,
            modes,
        })
    }
}

/// One labelled block per cavity separated by blank lines.
/// Frequencies print as a bracketed list, or one line per mode when modes were collected.
pub fn write_text<W: Write>(out: &mut W, reports: &[CavityReport]) -> io::Result<()> {
    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        match &report.modes {
            None => writeln!(out, "{}: {:?}", report.name, report.frequencies)?,
            Some(modes) => {
                writeln!(out, "{}:", report.name)?;
                for mode in modes {
                    writeln!(
                        out,
                        "  {:>8.2}  {:<12} {}",
                        mode.rounded_frequency(),
                        mode.index.to_string(),
                        mode.kind
                    )?;
                }
            }
        }
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, reports: &[CavityReport]) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut *out, reports)?;
    writeln!(out).map_err(serde_json::Error::io)
}
