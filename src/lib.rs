//! Mood-based comic recommendations.
//!
//! A photo goes in, a detector turns it into a raw mood label, and the label
//! is normalized to one of a fixed set of categories, each of which maps to a
//! short, fixed list of comics.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
