//! Frame layout: from parameters to a fitted scene.
//!
//! Each stage is a plain function or builder so it can be used and tested on
//! its own:
//!
//! - [`position`] - resolves automatic and custom dividers into ordered placements
//! - [`overlap`] - groups dividers whose profiles intersect
//! - [`thickness`] - checks the wall thickness against the profile size
//! - [`compose`] - draws the placements into a [`Scene`](mullion_core::draw::Scene)
//! - [`fit()`] - centres and scales a scene into a viewport

pub mod compose;
pub mod overlap;
pub mod position;
pub mod thickness;

mod fit;

pub use fit::fit;
