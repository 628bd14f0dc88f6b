// ABOUTME: Library crate for visa-intake exposing the API client, wizard state and TUI for testing and reuse

#![allow(missing_docs)]

pub mod api;
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod intake;
pub mod models;
