// src/core/mod.rs

pub mod browser;
pub mod html;
pub mod net;
