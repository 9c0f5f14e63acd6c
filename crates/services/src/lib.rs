#![forbid(unsafe_code)]

pub mod app_services;
pub mod config;
pub mod error;
pub mod quiz;
pub mod sound;

pub use quiz_core::Clock;

pub use app_services::QuizServices;
pub use config::QuizConfig;
pub use error::{ConfigError, QuizServicesError, SoundError};
pub use quiz::{
    QuizMachine, QuizMachineBuilder, QuizProgress, QuizSnapshot, RankingRow, ResultSummary,
    ReviewItem, WrongNoteItem,
};
pub use sound::{SilentPlayer, SoundCue, SoundPlayer};
