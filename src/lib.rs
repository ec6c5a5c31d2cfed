#![doc = include_str!("../README.md")]

pub use crate::config::Config;
pub use crate::error::{Error, Result, Warning};
pub use crate::status::all_active_flags;
pub use crate::timeframe::Timeframe;
pub use crate::types::*;

pub mod classify;
pub mod config;
pub mod contractions;
pub mod date;
mod error;
pub mod extract;
pub mod red_words;
mod status;
pub mod timeframe;
mod types;
pub mod utils;
