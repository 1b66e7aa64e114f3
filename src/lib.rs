// src/lib.rs

pub mod cli;
pub mod params;
pub mod specs;

pub mod edition;
pub mod leaderboard;
pub mod participation;
pub mod roster;
pub mod stats;

pub mod file;
pub mod flags;
pub mod net;
pub mod runner;
pub mod sanitize;
pub mod tables;
