use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::Value;

// Helper function to build leaf values from a slice of data
#[allow(dead_code)]
pub fn leaves(data: &[f64]) -> Vec<Value> {
    data.iter().copied().map(Value::new).collect()
}

// Helper function to get a deterministically seeded RNG for network tests
#[allow(dead_code)]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

// Small fixed binary-classification dataset: four 3-feature samples with
// targets in {-1.0, 1.0}. Used by the training tests.
#[allow(dead_code)]
pub fn demo_dataset() -> (Vec<Vec<f64>>, Vec<f64>) {
    let samples = vec![
        vec![2.0, 3.0, -1.0],
        vec![3.0, -1.0, 0.5],
        vec![0.5, 1.0, 1.0],
        vec![1.0, 1.0, -1.0],
    ];
    let targets = vec![1.0, -1.0, -1.0, 1.0];
    (samples, targets)
}
