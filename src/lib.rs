// src/lib.rs

pub mod command;
pub mod config;
pub mod core;
pub mod error;
pub mod host;
pub mod learning;
pub mod persistence;
pub mod render;
pub use crate::core::engine::CipherEngine;
