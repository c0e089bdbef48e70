//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Run report model (CountReport / GatherReport)
//! - Extension classification
//! - Directory walking with subtree pruning
//! - File reading policies
//! - Path normalization utilities
//! - Rendering functions for different output formats

pub mod classify;
pub mod model;
pub mod paths;
pub mod read;
pub mod render;
pub mod walker;
