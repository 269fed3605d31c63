//! Mullion Core Types and Definitions
//!
//! This crate provides the foundational types used by the Mullion frame
//! layout engine. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Points, sizes, bounds and affine fits ([`geometry`] module)
//! - **Draw**: Renderable primitives and the [`draw::Scene`] that holds them

pub mod color;
pub mod draw;
pub mod geometry;
