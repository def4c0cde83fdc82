// core/src/training.rs
use crate::errors::{Result, TrainingError};
use crate::models::{InfoMessage, WorkoutKind};
use crate::physics::{distance_km, duration_min, speed_kmh, LEN_STEP, M_IN_KM};

/// Rådata som er felles for alle treninger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingBase {
    pub action: u64,     // antall bevegelser (skritt/tak)
    pub duration_h: f64, // varighet, timer
    pub weight_kg: f64,  // vekt, kg
}

impl TrainingBase {
    pub fn new(action: u64, duration_h: f64, weight_kg: f64) -> Self {
        Self { action, duration_h, weight_kg }
    }

    fn require_duration(&self) -> Result<f64> {
        if self.duration_h > 0.0 {
            Ok(self.duration_h)
        } else {
            Err(TrainingError::InvalidDuration { duration_h: self.duration_h })
        }
    }
}

/// Felles grensesnitt for treningstypene.
///
/// `get_spent_calories` har ingen standardimplementasjon: hver type må
/// levere sin egen formel. Distanse og snittfart er skrittbasert med mindre
/// typen overstyrer dem.
pub trait Training {
    fn base(&self) -> &TrainingBase;

    fn kind(&self) -> WorkoutKind;

    /// Lengde på ett skritt/tak i meter.
    fn len_step(&self) -> f64 {
        LEN_STEP
    }

    /// Distanse i km.
    fn get_distance(&self) -> f64 {
        distance_km(self.base().action, self.len_step())
    }

    /// Snittfart i km/t. Feiler hvis varigheten er 0.
    fn get_mean_speed(&self) -> Result<f64> {
        let duration_h = self.base().require_duration()?;
        speed_kmh(self.get_distance(), duration_h)
            .ok_or(TrainingError::InvalidDuration { duration_h })
    }

    /// Forbrukte kilokalorier.
    fn get_spent_calories(&self) -> Result<f64>;

    fn show_training_info(&self) -> Result<InfoMessage> {
        Ok(InfoMessage {
            training_type: self.kind().name().to_string(),
            duration: self.base().duration_h,
            distance: self.get_distance(),
            speed: self.get_mean_speed()?,
            calories: self.get_spent_calories()?,
        })
    }
}

/// Trening: løping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub base: TrainingBase,
}

impl Running {
    pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

    pub fn new(action: u64, duration_h: f64, weight_kg: f64) -> Self {
        Self { base: TrainingBase::new(action, duration_h, weight_kg) }
    }
}

impl Training for Running {
    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn get_spent_calories(&self) -> Result<f64> {
        let speed = self.get_mean_speed()?;
        let b = &self.base;
        Ok((Self::CALORIES_MEAN_SPEED_MULTIPLIER * speed + Self::CALORIES_MEAN_SPEED_SHIFT)
            * b.weight_kg
            / M_IN_KM
            * duration_min(b.duration_h))
    }
}

/// Trening: sportsgange.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub base: TrainingBase,
    /// Høyde; deles på `CM_IN_M` for å få meter (180 => 1.8 m).
    pub height: f64,
}

impl SportsWalking {
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    pub const KMH_IN_MSEC: f64 = 0.278;
    pub const CM_IN_M: f64 = 100.0;

    pub fn new(action: u64, duration_h: f64, weight_kg: f64, height: f64) -> Self {
        Self { base: TrainingBase::new(action, duration_h, weight_kg), height }
    }
}

impl Training for SportsWalking {
    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn get_spent_calories(&self) -> Result<f64> {
        if !(self.height > 0.0) {
            return Err(TrainingError::InvalidHeight { height: self.height });
        }
        let speed_ms = self.get_mean_speed()? * Self::KMH_IN_MSEC;
        let height_m = self.height / Self::CM_IN_M;
        let w = self.base.weight_kg;

        Ok((Self::CALORIES_WEIGHT_MULTIPLIER * w
            + speed_ms.powi(2) / height_m * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * w)
            * duration_min(self.base.duration_h))
    }
}

/// Trening: svømming. Snittfart regnes fra bassenglengder, ikke tak.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub base: TrainingBase,
    pub length_pool_m: f64, // bassenglengde, meter
    pub count_pool: f64,    // antall lengder
}

impl Swimming {
    pub const LEN_STEP: f64 = 1.38;
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action: u64,
        duration_h: f64,
        weight_kg: f64,
        length_pool_m: f64,
        count_pool: f64,
    ) -> Self {
        Self {
            base: TrainingBase::new(action, duration_h, weight_kg),
            length_pool_m,
            count_pool,
        }
    }
}

impl Training for Swimming {
    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn len_step(&self) -> f64 {
        Self::LEN_STEP
    }

    fn get_mean_speed(&self) -> Result<f64> {
        let duration_h = self.base.require_duration()?;
        Ok(self.count_pool * self.length_pool_m / M_IN_KM / duration_h)
    }

    fn get_spent_calories(&self) -> Result<f64> {
        let speed = self.get_mean_speed()?;
        let b = &self.base;
        Ok((speed + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * b.weight_kg
            * b.duration_h)
    }
}

/// Lukket sett av treninger som fabrikken (`read_package`) returnerer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    pub fn as_training(&self) -> &dyn Training {
        match self {
            Workout::Running(t) => t,
            Workout::SportsWalking(t) => t,
            Workout::Swimming(t) => t,
        }
    }
}

impl Training for Workout {
    fn base(&self) -> &TrainingBase {
        self.as_training().base()
    }

    fn kind(&self) -> WorkoutKind {
        self.as_training().kind()
    }

    fn len_step(&self) -> f64 {
        self.as_training().len_step()
    }

    fn get_distance(&self) -> f64 {
        self.as_training().get_distance()
    }

    fn get_mean_speed(&self) -> Result<f64> {
        self.as_training().get_mean_speed()
    }

    fn get_spent_calories(&self) -> Result<f64> {
        self.as_training().get_spent_calories()
    }
}

impl From<Running> for Workout {
    fn from(t: Running) -> Self {
        Workout::Running(t)
    }
}

impl From<SportsWalking> for Workout {
    fn from(t: SportsWalking) -> Self {
        Workout::SportsWalking(t)
    }
}

impl From<Swimming> for Workout {
    fn from(t: Swimming) -> Self {
        Workout::Swimming(t)
    }
}
