//! Layer 2: Engine
//!
//! # Purpose
//!
//! This layer holds the construction-time machinery shared by the filter
//! implementations, currently the parameter validator.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 3: Smoothers
//!   ↓
//! Layer 2: Engine ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Validation utilities.
pub mod validator;
