//! Common test utilities for buildnorm CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory with a manifest
//! - Fixtures: Reusable manifest constants

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
