use rand::SeedableRng;
use rand::rngs::StdRng;

/// Options controlling a batch engineering run.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineerOptions {
    /// Seed for the stage RNG. `None` seeds from the OS for production runs;
    /// tests pass a fixed seed for deterministic replay.
    pub seed: Option<u64>,
}

impl EngineerOptions {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Mutable state threaded through pipeline stages.
///
/// Randomness is an explicit dependency: the only random source available to
/// stages is the context RNG, so a seeded run is fully reproducible.
pub struct StageContext {
    pub rng: StdRng,
    /// Stage names in execution order, for debugging.
    pub executed_stages: Vec<String>,
}

impl StageContext {
    pub fn new(options: EngineerOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self {
            rng,
            executed_stages: Vec::new(),
        }
    }
}

impl Default for StageContext {
    fn default() -> Self {
        Self::new(EngineerOptions::default())
    }
}
