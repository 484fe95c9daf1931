use rand::Rng;
use rand_distr::StandardNormal;

/// Weight initialization scheme for freshly constructed neurons.
///
/// The caller supplies the `Rng`, so seeding (and with it, reproducible
/// networks) stays in the caller's hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Init {
    /// Uniform draw from `[-1, 1]`.
    #[default]
    Uniform,
    /// Standard normal draw (mean 0, sigma 1).
    Normal,
}

impl Init {
    /// Draws one initial weight from the scheme's distribution.
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> f64 {
        match self {
            Init::Uniform => rng.gen_range(-1.0..=1.0),
            Init::Normal => rng.sample(StandardNormal),
        }
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests; // Link to the test file
