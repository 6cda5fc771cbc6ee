//! sharemon-core — shared library for the sharemon status client.
//!
//! Provides:
//! - `config` — daemon connection settings and target resolution
//! - `models` — wire data model for the daemon's status response
//! - `health` — status-code classification (health tiers, share state)
//! - `fmt` — display formatting helpers (counters, durations)
//! - `view` — report view model and per-share row assembly
//! - `render` — fixed-width table rendering
//! - `rpc` — blocking client for the daemon's status RPC

pub mod config;
pub mod fmt;
pub mod health;
pub mod models;
pub mod render;
pub mod rpc;
pub mod view;
