//! Rule-based outfit recommendations over a wardrobe catalog.
//!
//! The engine in [`services`] is pure and synchronous; [`api`] exposes it over HTTP.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
