//! # Workflows Module
//!
//! This module provides the high-level, user-facing entry points of the fold
//! engine.
//!
//! ## Overview
//!
//! Workflows tie the stateless [`crate::core`] layer and the stateful
//! [`crate::engine`] layer together into complete procedures. The fold
//! workflow ([`fold`]) runs a full conformation search, from algorithm
//! selection through progress reporting, and returns a serialisable
//! [`fold::Solution`] holding the minimum score and its fold hash, the
//! engine's canonical interchange format.

pub mod fold;
