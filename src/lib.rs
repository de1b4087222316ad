//! InvestIQ Library
//!
//! Exposes the cache, data, and front-end modules for the binary and for
//! integration tests.

pub mod cache;
pub mod cli;
pub mod config;
pub mod data;
pub mod menu;
pub mod table;
pub mod web;
