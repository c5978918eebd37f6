//! Parterre Core Types and Definitions
//!
//! This crate provides the foundational types for the Parterre seatmap
//! renderer. It includes:
//!
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Units**: Seatmap-unit to render-unit conversion ([`units`] module)
//! - **Transforms**: Translate/rotate transform building ([`transform`] module)
//! - **Ellipse math**: Badge anchoring on ellipse boundaries ([`ellipse`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Text**: Text measurement for scrims and bounds ([`text`] module)

pub mod color;
pub mod ellipse;
pub mod geometry;
pub mod text;
pub mod transform;
pub mod units;
