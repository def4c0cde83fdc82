pub mod cli;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod package;
pub mod physics;
pub mod storage;
pub mod training;
pub mod types;

#[cfg(feature = "python")]
mod py;

pub use cli::{
    build_report, print_training_report, report_json, summarize, write_training_report, ReportLine,
};
pub use errors::TrainingError;
pub use models::{InfoMessage, Package, WorkoutKind};
pub use package::{parse_packages_json, read_package};
pub use physics::RoundTo;
pub use storage::{load_cfg, load_packages, save_packages};
pub use training::{Running, SportsWalking, Swimming, Training, TrainingBase, Workout};
pub use types::Cfg;
