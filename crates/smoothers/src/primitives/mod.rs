//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive data structures and shared error types
//! used throughout the crate. It has zero internal dependencies within the
//! crate.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 3: Smoothers
//!   ↓
//! Layer 2: Engine
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Fixed-capacity circular sample window.
pub mod window;
