//! Core library for toolbelt
//!
//! This crate implements the **Functional Core** of the toolbelt application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The toolbelt project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`toolbelt_core`** (this crate): Pure transformation functions with zero I/O
//! - **`toolbelt`**: CLI argument handling and output rendering (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: Behavior is predictable and reproducible
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! The core crate is organized by domain:
//!
//! - [`baseconv`]: Arbitrary-base integer conversion over a 64-symbol digit alphabet
//! - [`password`]: Password strength estimation (charset classes, entropy, crack time)
//! - [`duration`]: Human-readable duration formatting against a fixed unit ladder
//!
//! Each module contains:
//!
//! - **Domain models**: Structured types representing inputs and outputs
//! - **Transformation functions**: Pure functions over those types
//! - **Comprehensive tests**: Unit tests using literal fixture data (no mocking)
//!
//! # Example Usage
//!
//! ```rust
//! use toolbelt_core::baseconv::convert_base;
//! use toolbelt_core::password::estimate;
//!
//! assert_eq!(convert_base("255", 10, 16).unwrap(), "ff");
//!
//! let strength = estimate("correct horse battery staple");
//! assert!(strength.entropy > 100.0);
//! ```
//!
//! # Pattern Reference
//!
//! This architecture is based on Gary Bernhardt's Functional Core, Imperative Shell pattern.
//! The key insight: **data transformation logic should be pure and ignorant of where data
//! comes from or where it goes**.

pub mod baseconv;
pub mod duration;
pub mod password;
