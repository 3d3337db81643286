//! Identifier generation.
//!
//! New rows get a pseudo-random non-negative `i32` key. Each candidate is
//! probed against the target table and redrawn on collision.
//!
//! The generator is seeded with a fixed value by default (see
//! [`IdGenerator::DEFAULT_SEED`]), so a fresh process walks the same
//! candidate sequence every time. The collision probe keeps keys unique; the
//! cost is extra probes once early candidates are taken. Set `ids.entropy`
//! to seed from the OS instead.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sea_orm::ConnectionTrait;
use std::collections::HashSet;

use crate::core::ShopResource;
use crate::errors::ShopError;
use crate::settings::IdSettings;

/// Seeded candidate source for integer primary keys.
pub struct IdGenerator {
    rng: StdRng,
}

impl IdGenerator {
    pub const DEFAULT_SEED: u64 = 55;

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        tracing::debug!(seed, "Identifier generator seeded");
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    #[must_use]
    pub fn from_settings(settings: IdSettings) -> Self {
        if settings.entropy {
            Self::from_entropy()
        } else {
            Self::seeded(settings.seed)
        }
    }

    fn draw(&mut self) -> i32 {
        self.rng.r#gen::<i32>() & i32::MAX
    }

    /// Draw until the candidate is not in `existing`.
    pub fn next_unused(&mut self, existing: &HashSet<i32>) -> i32 {
        loop {
            let candidate = self.draw();
            if !existing.contains(&candidate) {
                return candidate;
            }
            tracing::debug!(candidate, "Identifier collision, drawing again");
        }
    }

    /// Draw until no row of `T` uses the candidate as its key.
    ///
    /// # Errors
    ///
    /// Returns an error if a probe query fails.
    pub async fn allocate<T, C>(&mut self, db: &C) -> Result<i32, ShopError>
    where
        T: ShopResource<Key = i32>,
        C: ConnectionTrait,
    {
        loop {
            let candidate = self.draw();
            if !T::exists(db, candidate).await? {
                tracing::debug!(
                    resource = T::RESOURCE_NAME_SINGULAR,
                    id = candidate,
                    "Allocated identifier"
                );
                return Ok(candidate);
            }
            tracing::debug!(
                resource = T::RESOURCE_NAME_SINGULAR,
                candidate,
                "Identifier collision, drawing again"
            );
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::seeded(Self::DEFAULT_SEED)
    }
}
