#![forbid(unsafe_code)]

pub mod bank;
pub mod model;
pub mod time;

pub use bank::{QuestionBank, QuestionSource};
pub use time::Clock;
