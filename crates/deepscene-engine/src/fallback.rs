//! Selection policy for the "no signal" fallback paths.
//!
//! When neither keywords nor contextual rules say anything about a
//! description, the genre classifier, the mood classifier and the dialogue
//! generator each pick one candidate from a fixed list. `FallbackPolicy`
//! decides how that pick is made:
//!
//! | Policy | Behavior |
//! |--------|----------|
//! | `Random` | Thread-local RNG; picks vary between calls |
//! | `Seeded(seed)` | Per-call `StdRng` seeded from the seed, the call site and the description |
//! | `First` | Always the first candidate |
//!
//! No policy holds shared mutable state, so analyzers stay lock-free.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Where a fallback pick is being made.
///
/// Each site salts the seeded generator differently so the genre, mood and
/// dialogue picks for one description are independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallbackSite {
    Genre,
    Mood,
    Dialogue,
}

impl FallbackSite {
    fn salt(&self) -> u64 {
        match self {
            FallbackSite::Genre => 0x6765_6e72_6500_0001,
            FallbackSite::Mood => 0x6d6f_6f64_0000_0002,
            FallbackSite::Dialogue => 0x6469_616c_6f67_0003,
        }
    }
}

/// How fallback candidates are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Uniform pick from the thread-local RNG.
    #[default]
    Random,
    /// Uniform pick, reproducible for a given seed and description.
    Seeded(u64),
    /// Always the first candidate.
    First,
}

impl FallbackPolicy {
    /// Pick one candidate. Returns `None` only for an empty slice.
    pub fn choose<'a, T>(
        &self,
        site: FallbackSite,
        description: &str,
        candidates: &'a [T],
    ) -> Option<&'a T> {
        match self {
            FallbackPolicy::Random => candidates.choose(&mut rand::rng()),
            FallbackPolicy::Seeded(seed) => {
                let mut rng = StdRng::seed_from_u64(seed ^ site.salt() ^ fnv1a(description));
                candidates.choose(&mut rng)
            }
            FallbackPolicy::First => candidates.first(),
        }
    }

    /// Whether repeated calls with the same input always pick the same candidate.
    pub fn is_deterministic(&self) -> bool {
        !matches!(self, FallbackPolicy::Random)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackPolicy::Random => "random",
            FallbackPolicy::Seeded(_) => "seeded",
            FallbackPolicy::First => "first",
        }
    }
}

impl fmt::Display for FallbackPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackPolicy::Seeded(seed) => write!(f, "seeded({seed})"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

impl FromStr for FallbackPolicy {
    type Err = FallbackPolicyParseError;

    /// Parses `random`, `first`, `seeded` (seed 0) or `seeded:<u64>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "random" => Ok(FallbackPolicy::Random),
            "first" => Ok(FallbackPolicy::First),
            "seeded" => Ok(FallbackPolicy::Seeded(0)),
            _ => lower
                .strip_prefix("seeded:")
                .and_then(|seed| seed.trim().parse().ok())
                .map(FallbackPolicy::Seeded)
                .ok_or_else(|| FallbackPolicyParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown fallback policy: {0}")]
pub struct FallbackPolicyParseError(String);

/// 64-bit FNV-1a, stable across processes and platforms.
fn fnv1a(text: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    text.bytes()
        .fold(OFFSET, |hash, byte| (hash ^ byte as u64).wrapping_mul(PRIME))
}
