//! Data models for extracted policy records and configuration.

pub mod config;
pub mod policy;
