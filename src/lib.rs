// src/lib.rs

//! capwatch — CAP weather-alert ingestion engine

pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;
