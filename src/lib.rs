// src/lib.rs - Sensor log model, orientation correction and export, shared by the binaries.

pub mod config;
pub mod data;
pub mod error;
