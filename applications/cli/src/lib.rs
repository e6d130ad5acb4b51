//! Cantor CLI - explore album play queues from the terminal

pub mod commands;
pub mod config;
