//! Text helpers shared by the scanners

pub mod text;
