//! Generation of the values to sort

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Element counts offered by the UI's size selector
pub const ELEMENT_COUNT_PRESETS: [usize; 7] = [50, 75, 100, 150, 200, 300, 400];

/// How the generated values are ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Arrangement {
    /// A random permutation of `1..=n`
    #[default]
    Shuffled,
    Sorted,
    Reversed,
    /// Shuffled values drawn from only a handful of distinct heights
    FewUnique,
}

impl Arrangement {
    pub const ALL: [Arrangement; 4] = [
        Arrangement::Shuffled,
        Arrangement::Sorted,
        Arrangement::Reversed,
        Arrangement::FewUnique,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Arrangement::Shuffled => "shuffled",
            Arrangement::Sorted => "sorted",
            Arrangement::Reversed => "reversed",
            Arrangement::FewUnique => "few-unique",
        }
    }

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|a| *a == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Arrangement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.key() == wanted)
            .ok_or_else(|| format!("unknown arrangement '{}'", s))
    }
}

/// Generate `count` bar heights in `1..=count`.
pub fn generate<R: Rng>(count: usize, arrangement: Arrangement, rng: &mut R) -> Vec<u32> {
    let top = count as u32;
    match arrangement {
        Arrangement::Shuffled => {
            let mut values: Vec<u32> = (1..=top).collect();
            values.shuffle(rng);
            values
        }
        Arrangement::Sorted => (1..=top).collect(),
        Arrangement::Reversed => (1..=top).rev().collect(),
        Arrangement::FewUnique => {
            let levels = count.clamp(1, 5) as u32;
            let step = (top / levels).max(1);
            (0..count)
                .map(|_| rng.random_range(1..=levels) * step)
                .collect()
        }
    }
}

/// Step through the presets up to `max`, wrapping around. Counts that are
/// not a preset move to the first preset above them.
pub fn next_preset(count: usize, max: usize) -> usize {
    ELEMENT_COUNT_PRESETS
        .iter()
        .copied()
        .find(|&preset| preset > count && preset <= max)
        .unwrap_or(ELEMENT_COUNT_PRESETS[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_shuffled_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut values = generate(50, Arrangement::Shuffled, &mut rng);
        values.sort_unstable();
        assert_eq!(values, (1..=50).collect::<Vec<u32>>());
    }

    #[test]
    fn test_same_seed_same_values() {
        let a = generate(75, Arrangement::Shuffled, &mut StdRng::seed_from_u64(9));
        let b = generate(75, Arrangement::Shuffled, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_few_unique_has_duplicates() {
        let mut rng = StdRng::seed_from_u64(1);
        let values = generate(100, Arrangement::FewUnique, &mut rng);
        assert_eq!(values.len(), 100);
        let mut distinct = values.clone();
        distinct.sort_unstable();
        distinct.dedup();
        assert!(distinct.len() <= 5);
        assert!(values.iter().all(|&v| (1..=100).contains(&v)));
    }

    #[test]
    fn test_next_preset_wraps() {
        assert_eq!(next_preset(50, 400), 75);
        assert_eq!(next_preset(400, 400), 50);
        assert_eq!(next_preset(60, 400), 75);
    }

    #[test]
    fn test_next_preset_stops_at_max() {
        assert_eq!(next_preset(150, 200), 200);
        assert_eq!(next_preset(200, 200), 50);
        assert_eq!(next_preset(300, 200), 50);
    }
}
