//! Configuration for the divination engine.

/// Tunable parameters for a fortune session.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// RNG seed for reproducible draws.
    pub seed: u64,
    /// Probability that a drawn tarot card lands reversed (0.0-1.0).
    ///
    /// Kept explicit rather than hard-coded: classical decks are often read
    /// with 0.3, some readers prefer an even 0.5.
    pub reversal_probability: f64,
    /// Use the weighted omikuji draw; `false` selects uniformly.
    pub weighted_omikuji: bool,
    /// Oldest birth year accepted by the numerology date check.
    pub min_birth_year: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            reversal_probability: 0.3,
            weighted_omikuji: true,
            min_birth_year: 1900,
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the tarot reversal probability (clamped to 0.0-1.0).
    #[must_use]
    pub fn with_reversal_probability(mut self, p: f64) -> Self {
        self.reversal_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Select weighted or uniform omikuji draws.
    #[must_use]
    pub fn with_weighted_omikuji(mut self, weighted: bool) -> Self {
        self.weighted_omikuji = weighted;
        self
    }

    /// Set the oldest accepted birth year.
    #[must_use]
    pub fn with_min_birth_year(mut self, year: i32) -> Self {
        self.min_birth_year = year;
        self
    }
}
