//! Pointer-driven visual effects for the portfolio page.
//!
//! This crate holds every piece of computed behavior on the page and knows
//! nothing about the DOM. The `site` crate reads pointer events and element
//! bounds from the browser, feeds them in here, and writes the resulting CSS
//! transforms back out. Keeping the math on this side lets it run and be
//! tested natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`pointer`] | Element bounds and pointer normalization |
//! | [`motion`] | Reduced-motion preference gate |
//! | [`frame`] | Single-slot per-frame update coalescing |
//! | [`tilt`] | 3D tilt-toward-pointer card effect |
//! | [`parallax`] | Depth-weighted layer offsets |
//! | [`decor`] | Seeded floating orb generation |
//! | [`copy`] | "Copied" feedback flag with revert tickets |
//! | [`consts`] | Shared numeric constants (rotation, scale, orb bounds) |

pub mod consts;
pub mod copy;
pub mod decor;
pub mod frame;
pub mod motion;
pub mod parallax;
pub mod pointer;
pub mod tilt;
