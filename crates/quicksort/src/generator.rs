use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

const VALUE_POOL: i64 = 10;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ArrayCase {
    Ordered,
    Reversed,
    OneOff,
    Shuffled,
    RandomUniform,
    DuplicateHeavy,
}

pub const ALL_ARRAY_CASES: [ArrayCase; 6] = [
    ArrayCase::Ordered,
    ArrayCase::Reversed,
    ArrayCase::OneOff,
    ArrayCase::Shuffled,
    ArrayCase::RandomUniform,
    ArrayCase::DuplicateHeavy,
];

impl ArrayCase {
    pub fn label(self) -> &'static str {
        match self {
            Self::Ordered => "ordered",
            Self::Reversed => "reversed",
            Self::OneOff => "one_off",
            Self::Shuffled => "shuffled",
            Self::RandomUniform => "random_uniform",
            Self::DuplicateHeavy => "duplicate_heavy",
        }
    }
}

/// Builds the input array for `case`, deterministic per `(case, len, seed)`.
pub fn generate_case(case: ArrayCase, len: usize, seed: u64) -> Vec<i64> {
    match case {
        ArrayCase::Ordered => (1..=len as i64).collect(),
        ArrayCase::Reversed => (1..=len as i64).rev().collect(),
        ArrayCase::OneOff => one_off_case(len),
        ArrayCase::Shuffled => shuffled_case(len, seed),
        ArrayCase::RandomUniform => random_uniform_case(len, seed),
        ArrayCase::DuplicateHeavy => duplicate_heavy_case(len, seed),
    }
}

// Sorted run rotated by one: the minimum ends up last.
fn one_off_case(len: usize) -> Vec<i64> {
    if len == 0 {
        return Vec::new();
    }
    let mut data: Vec<i64> = (2..=len as i64).collect();
    data.push(1);
    data
}

fn shuffled_case(len: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data: Vec<i64> = (1..=len as i64).collect();
    data.shuffle(&mut rng);
    data
}

fn random_uniform_case(len: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let bound = len.max(1) as i64;
    (0..len).map(|_| rng.random_range(0..bound)).collect()
}

// One dominant value on at least half of the slots, the rest drawn from a
// small pool, then shuffled.
fn duplicate_heavy_case(len: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dominant = rng.random_range(0..VALUE_POOL);
    let majority = len.div_ceil(2);

    let mut data = vec![dominant; majority];
    for _ in majority..len {
        data.push(rng.random_range(0..VALUE_POOL));
    }
    data.shuffle(&mut rng);
    data
}
