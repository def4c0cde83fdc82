use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::TrainingError;
use crate::physics::RoundTo;

/// Informasjonsmelding om en gjennomført trening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    pub training_type: String, // "Running" | "SportsWalking" | "Swimming"
    pub duration: f64,         // timer
    pub distance: f64,         // km
    pub speed: f64,            // km/t
    pub calories: f64,         // kcal
}

impl InfoMessage {
    /// Ferdig formatert melding. Formatet er fast og må ikke endres.
    pub fn get_message(&self) -> String {
        format!(
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }

    /// Kopi med alle tall avrundet til 3 desimaler (for JSON-ut).
    pub fn rounded(&self) -> Self {
        Self {
            training_type: self.training_type.clone(),
            duration: self.duration.round_to(3),
            distance: self.distance.round_to(3),
            speed: self.speed.round_to(3),
            calories: self.calories.round_to(3),
        }
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_message())
    }
}

/// De tre kjente treningstypene og koden sensoren sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Swimming,
    Running,
    SportsWalking,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] =
        [WorkoutKind::Swimming, WorkoutKind::Running, WorkoutKind::SportsWalking];

    pub fn code(self) -> &'static str {
        match self {
            WorkoutKind::Swimming => "SWM",
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
        }
    }

    /// Typenavnet som vises i meldingen.
    pub fn name(self) -> &'static str {
        match self {
            WorkoutKind::Swimming => "Swimming",
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
        }
    }

    /// Antall råverdier typen forventer (basefelt først).
    pub fn arity(self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }

    pub fn valid_codes() -> Vec<&'static str> {
        Self::ALL.iter().map(|k| k.code()).collect()
    }
}

impl FromStr for WorkoutKind {
    type Err = TrainingError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.code() == code)
            .ok_or_else(|| TrainingError::UnknownWorkoutCode {
                code: code.to_string(),
                valid: Self::valid_codes(),
            })
    }
}

/// En pakke fra sensoren: kode + råverdier i feltrekkefølge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    #[serde(alias = "workout_type", alias = "type")]
    pub code: String,
    #[serde(alias = "values")]
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(code: &str, data: &[f64]) -> Self {
        Self { code: code.to_string(), data: data.to_vec() }
    }

    /// Standardpakkene som driveren kjører når ingen fil er gitt.
    pub fn samples() -> Vec<Package> {
        vec![
            Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
            Package::new("RUN", &[15000.0, 1.0, 75.0]),
            Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_format_is_verbatim() {
        let msg = InfoMessage {
            training_type: "Swimming".into(),
            duration: 1.0,
            distance: 0.9936,
            speed: 1.0,
            calories: 336.0,
        };
        assert_eq!(
            msg.get_message(),
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
             Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
        );
        assert_eq!(msg.to_string(), msg.get_message());
    }

    #[test]
    fn codes_roundtrip_through_from_str() {
        for kind in WorkoutKind::ALL {
            assert_eq!(kind.code().parse::<WorkoutKind>().unwrap(), kind);
        }
        assert!(matches!(
            "swm".parse::<WorkoutKind>(),
            Err(TrainingError::UnknownWorkoutCode { .. })
        ));
    }
}
