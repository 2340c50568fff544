// src/util/mod.rs
pub mod testing;
pub mod time;
