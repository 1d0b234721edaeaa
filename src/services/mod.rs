// src/services/mod.rs
pub mod upstream;
