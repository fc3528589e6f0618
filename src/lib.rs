// src/lib.rs

//! Kasparro site generator and audit browser library

pub mod browser;
pub mod catalog;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod storage;
pub mod utils;
