//! Compensation Scenario Engine
//!
//! This crate records employee compensation-change requests and compares
//! four ways of handling each one: paying the requested salary, hiring a
//! replacement at market rate, staffing the role at market rate, or covering
//! it temporarily before a permanent hire.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
