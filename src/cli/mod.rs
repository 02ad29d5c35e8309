//! CLI infrastructure for the atlas tool
//!
//! This module provides the command-line interface for inspecting and
//! exporting the canonical board atlas.

pub mod commands;
pub mod output;
