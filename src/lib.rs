//! Shift Time & Overlap Engine
//!
//! This crate provides the scheduling core for a retail staff scheduler:
//! `HH:MM` time arithmetic with overnight wrap-around, the effective-hours
//! policy shared by schedule views and payroll, overlap validation for new
//! shifts, and per-employee payroll aggregation. An in-memory transactional
//! store and an axum HTTP API are built on top.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
