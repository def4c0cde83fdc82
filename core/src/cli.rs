// core/src/cli.rs
use std::io::{self, Write};

use log::{error, info};
use serde::Serialize;

use crate::errors::{Result, TrainingError};
use crate::models::{InfoMessage, Package};
use crate::package::{parse_packages_json, read};
use crate::training::Training;
use crate::types::Cfg;

/// Utfall for én pakke i en rapport.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportLine {
    Ok { code: String, info: InfoMessage, message: String },
    Error { code: String, kind: String, error: String },
}

/// Beregn oppsummering for én pakke.
pub fn summarize(package: &Package) -> Result<InfoMessage> {
    read(package)?.show_training_info()
}

/// Kjør alle pakker. Med `fail_fast` avbrytes batchen ved første feil;
/// ellers blir feilen en egen linje og neste pakke kjøres.
pub fn build_report(packages: &[Package], cfg: &Cfg) -> Result<Vec<ReportLine>> {
    let mut lines = Vec::with_capacity(packages.len());

    for p in packages {
        match summarize(p) {
            Ok(info) => lines.push(ReportLine::Ok {
                code: p.code.clone(),
                message: info.get_message(),
                info: info.rounded(),
            }),
            Err(e) if cfg.fail_fast() => return Err(e),
            Err(e) => {
                error!("package {} skipped: {}", p.code, e);
                lines.push(ReportLine::Error {
                    code: p.code.clone(),
                    kind: e.kind().to_string(),
                    error: e.to_string(),
                });
            }
        }
    }

    Ok(lines)
}

/// Skriv meldingene til `out` etter hvert som de beregnes, én linje per pakke.
/// Med `fail_fast` står linjene før feilen igjen i `out` når feilen returneres.
pub fn write_training_report<W: Write>(
    packages: &[Package],
    cfg: &Cfg,
    out: &mut W,
) -> Result<usize> {
    let mut printed = 0usize;

    for p in packages {
        match summarize(p) {
            Ok(info) => {
                writeln!(out, "{}", info.get_message())
                    .map_err(|e| TrainingError::Write(e.to_string()))?;
                printed += 1;
            }
            Err(e) if cfg.fail_fast() => {
                error!("batch aborted at package {}: {}", p.code, e);
                return Err(e);
            }
            Err(e) => error!("package {} skipped: {}", p.code, e),
        }
    }

    info!("report done: {printed}/{} packages", packages.len());
    Ok(printed)
}

/// Som `write_training_report`, til stdout.
pub fn print_training_report(packages: &[Package], cfg: &Cfg) -> Result<usize> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_training_report(packages, cfg, &mut out)
}

/// JSON inn (liste med pakker), JSON ut (liste med `ReportLine`).
pub fn report_json(json_in: &str, cfg: &Cfg) -> Result<String> {
    let packages = parse_packages_json(json_in)?;
    let lines = build_report(&packages, cfg)?;
    serde_json::to_string(&lines).map_err(|e| TrainingError::Encode(e.to_string()))
}
