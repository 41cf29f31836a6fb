//! HTTP handlers

pub mod chat;
pub mod generate;
pub mod health;
pub mod models;
pub mod speech;
pub mod writing;
