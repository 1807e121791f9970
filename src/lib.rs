// src/lib.rs

//! Decode particle-detector simulation event logs (`.sim`) into typed run,
//! event, interaction, and hit records. Select events by hit energy or
//! tracker layer.

pub mod common;
pub mod data;
pub mod debug;
pub mod printer;
pub mod readers;
pub mod selectors;
#[cfg(test)]
pub mod tests;
