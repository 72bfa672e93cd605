pub mod catalog;
pub mod config;
pub mod generation;
pub mod intake;
pub mod model;

pub mod error;
