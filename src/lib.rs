//! Draft simulator API - backend for a fantasy football draft simulator
//!
//! This crate provides the REST API serving:
//! - Reference player data with position filtering
//! - The set of positions present in the player pool
//! - Draft settings submission

pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod extract;
pub mod routes;
pub mod seed;
pub mod state;
