// core/src/package.rs
use std::collections::BTreeSet;

use log::{debug, warn};
use ordered_float::OrderedFloat;
use serde_json as json;
use serde_path_to_error as spte;

use crate::errors::{Result, TrainingError};
use crate::metrics::metrics;
use crate::models::{Package, WorkoutKind};
use crate::training::{Running, SportsWalking, Swimming, Workout};

/// Les en pakke fra sensoren og bygg riktig treningstype.
///
/// Rekkefølgen på sjekkene er fast: negative verdier først, så ukjent kode,
/// så antall verdier. En negativ verdi med ukjent kode gir altså
/// `NegativeValue`.
pub fn read_package(code: &str, data: &[f64]) -> Result<Workout> {
    match build(code, data) {
        Ok(w) => {
            metrics().package_accepted(code);
            debug!("package {code} accepted: {w:?}");
            Ok(w)
        }
        Err(e) => {
            metrics().package_rejected(e.kind());
            warn!("package {code} rejected: {e}");
            Err(e)
        }
    }
}

/// Som `read_package`, men for en `Package`.
pub fn read(package: &Package) -> Result<Workout> {
    read_package(&package.code, &package.data)
}

/// Parse en JSON-liste med pakker: `[{"code": "RUN", "data": [15000, 1, 75]}]`.
pub fn parse_packages_json(json_in: &str) -> Result<Vec<Package>> {
    let mut de = json::Deserializer::from_str(json_in);
    spte::deserialize(&mut de).map_err(|e| TrainingError::Parse {
        path: e.path().to_string(),
        msg: e.inner().to_string(),
    })
}

fn build(code: &str, data: &[f64]) -> Result<Workout> {
    check_negative(data)?;
    let kind: WorkoutKind = code.parse()?;

    if data.len() != kind.arity() {
        return Err(TrainingError::WrongArity {
            code: kind.code(),
            expected: kind.arity(),
            got: data.len(),
        });
    }
    check_finite(data)?;

    let action = action_count(data[0])?;
    let (duration_h, weight_kg) = (data[1], data[2]);

    let workout = match kind {
        WorkoutKind::Running => Running::new(action, duration_h, weight_kg).into(),
        WorkoutKind::SportsWalking => {
            let height = data[3];
            SportsWalking::new(action, duration_h, weight_kg, height).into()
        }
        WorkoutKind::Swimming => {
            let (length_pool_m, count_pool) = (data[3], data[4]);
            Swimming::new(action, duration_h, weight_kg, length_pool_m, count_pool).into()
        }
    };
    Ok(workout)
}

/// Alle verdier må være >= 0. Negative samles unikt og sortert.
fn check_negative(data: &[f64]) -> Result<()> {
    let negative: BTreeSet<OrderedFloat<f64>> = data
        .iter()
        .filter(|v| **v < 0.0)
        .map(|v| OrderedFloat(*v))
        .collect();

    if negative.is_empty() {
        Ok(())
    } else {
        Err(TrainingError::NegativeValue {
            values: negative.into_iter().map(|v| v.into_inner()).collect(),
        })
    }
}

/// NaN/inf avvises etter kode- og antall-sjekken.
fn check_finite(data: &[f64]) -> Result<()> {
    match data.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(TrainingError::NonFiniteValue { index }),
        None => Ok(()),
    }
}

fn action_count(v: f64) -> Result<u64> {
    if v.fract() != 0.0 || v >= u64::MAX as f64 {
        return Err(TrainingError::InvalidActionCount { value: v });
    }
    Ok(v as u64)
}
