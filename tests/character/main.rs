//! End-to-end tests for `sbsprite-rs`: characters loaded from an in-memory
//! asset tree, recolored and rendered.

mod fixtures;
mod properties;
mod rendering;
