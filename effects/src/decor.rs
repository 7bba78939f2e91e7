//! Seeded floating orb generation.
//!
//! A decor block scatters `count` soft gradient orbs behind a section. Every
//! orb gets a random size, position, start delay and depth once, when the
//! block is created; after that it only loops its float animation.
//!
//! Generation is a pure function of `(count, seed)`. The page derives the seed
//! from a stable per-section key, so the server-rendered markup and the
//! hydrated markup agree and re-renders never re-roll the layout.

#[cfg(test)]
#[path = "decor_test.rs"]
mod decor_test;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::consts::{
    ORB_BASE_PERIOD_S, ORB_MAX_DELAY_S, ORB_MAX_DEPTH_PX, ORB_MAX_POSITION_PCT, ORB_MIN_SIZE_PX, ORB_SIZE_SPAN_PX,
};

/// Colour family of a decor block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DecorVariant {
    #[default]
    Blue,
    Purple,
    Pink,
}

impl DecorVariant {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Pink => "pink",
        }
    }

    /// Gradient colours for this variant (8-digit hex, low alpha).
    #[must_use]
    pub fn gradient(self) -> GradientPair {
        match self {
            Self::Blue => GradientPair { edge: "#60a5fa22", centre: "#93c5fd22" },
            Self::Purple => GradientPair { edge: "#a78bfa22", centre: "#c4b5fd22" },
            Self::Pink => GradientPair { edge: "#f472b622", centre: "#f9a8d422" },
        }
    }
}

/// Unknown names fall back to [`DecorVariant::Blue`].
impl From<&str> for DecorVariant {
    fn from(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "purple" => Self::Purple,
            "pink" => Self::Pink,
            _ => Self::Blue,
        }
    }
}

/// The two colours of an orb's radial gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientPair {
    pub edge: &'static str,
    pub centre: &'static str,
}

impl GradientPair {
    /// CSS `background` value for an orb.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "radial-gradient(circle at 30% 30%, {} 0%, {} 60%, transparent 70%)",
            self.centre, self.edge
        )
    }
}

/// One floating orb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orb {
    pub index: u32,
    /// Diameter in CSS pixels, in `[140, 260]`.
    pub size_px: u32,
    /// Offset from the container top, percent, in `[0, 80]`.
    pub top_pct: u32,
    /// Offset from the container left, percent, in `[0, 80]`.
    pub left_pct: u32,
    /// Animation start delay in seconds, in `[0, 4)`, two decimals.
    pub delay_s: f64,
    /// Depth inside the decor perspective, in `[-100, 100]`.
    pub depth_px: i32,
}

impl Orb {
    /// Float period; later orbs drift more slowly.
    #[must_use]
    pub fn period_s(&self) -> u32 {
        ORB_BASE_PERIOD_S + self.index
    }

    /// Inline style for the positioned wrapper.
    #[must_use]
    pub fn wrapper_style(&self) -> String {
        format!(
            "top: {}%; left: {}%; width: {}px; height: {}px; transform: translateZ({}px);",
            self.top_pct, self.left_pct, self.size_px, self.size_px, self.depth_px
        )
    }

    /// Inline style for the orb body: gradient and float animation.
    #[must_use]
    pub fn body_style(&self, variant: DecorVariant) -> String {
        format!(
            "background: {}; animation: decor-float {}s ease-in-out {:.2}s infinite;",
            variant.gradient().to_css(),
            self.period_s(),
            self.delay_s
        )
    }
}

/// Draw `count` orbs from `rng`.
pub fn generate_orbs<R: Rng + ?Sized>(count: u32, rng: &mut R) -> Vec<Orb> {
    let delay_steps = ORB_MAX_DELAY_S * 100.0;
    (0..count)
        .map(|index| Orb {
            index,
            size_px: ORB_MIN_SIZE_PX + rng.random_range(0..=ORB_SIZE_SPAN_PX),
            top_pct: rng.random_range(0..=ORB_MAX_POSITION_PCT),
            left_pct: rng.random_range(0..=ORB_MAX_POSITION_PCT),
            delay_s: (rng.random::<f64>() * delay_steps).floor() / 100.0,
            depth_px: rng.random_range(-ORB_MAX_DEPTH_PX..=ORB_MAX_DEPTH_PX),
        })
        .collect()
}

/// Deterministic orbs for a given seed.
#[must_use]
pub fn seeded_orbs(count: u32, seed: u64) -> Vec<Orb> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_orbs(count, &mut rng)
}

/// Stable seed for a decor instance key (FNV-1a, 64-bit).
///
/// Identical on every target, unlike `std`'s randomized hasher.
#[must_use]
pub fn instance_seed(key: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    key.bytes().fold(OFFSET, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(PRIME))
}
