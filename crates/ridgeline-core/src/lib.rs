//! Ridgeline Core Types and Definitions
//!
//! This crate provides the foundational types for the Ridgeline roof
//! calculator. It includes:
//!
//! - **Roof**: The asymmetric gable roof solver ([`roof::solve`]) with its
//!   input and output records
//! - **Format**: Display formatting for millimeters, square meters and angles
//!   ([`format`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types for drawing ([`geometry`] module)
//! - **Draw**: Visual definitions for diagram elements ([`draw`] module)

pub mod color;
pub mod draw;
pub mod format;
pub mod geometry;
pub mod roof;
