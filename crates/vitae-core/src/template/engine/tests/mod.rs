//! Tests for template engine
//!
//! Organized into focused submodules, one per concern.

use super::*;

// Test helper functions
mod helpers;


mod render_escaping;
mod render_loops;
mod standalone;
