//! Organizational hierarchy resolution.

pub mod classifier;
pub mod fallback;
pub mod fuzzy;
pub mod handlers;
pub mod index;
pub mod ladder;
pub mod loader;
pub mod normalize;
pub mod registry;
pub mod resolver;
pub mod seeds;
