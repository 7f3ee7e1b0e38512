//! CLI infrastructure for the oxo engine
//!
//! This module provides the command-line interface for playing against the
//! engine, evaluating it against baseline opponents, and analyzing or
//! exporting solved positions.

pub mod commands;
pub mod output;
