//! Runtime settings read from the environment.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Side length of the playing grid.
pub const DIMENSIONS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    /// Fixed shuffle seed (`PUZZLE_SEED`); unset means a fresh seed per run.
    pub seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            seed: env_parse(&lookup, "PUZZLE_SEED"),
        }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn env_parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparsable setting");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn seed_is_parsed() {
        let config = Config::from_lookup(|key| (key == "PUZZLE_SEED").then(|| " 42 ".to_string()));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn missing_or_bad_seed_falls_back() {
        assert_eq!(Config::from_lookup(|_| None).seed, None);
        assert_eq!(Config::from_lookup(|_| Some("abc".into())).seed, None);
    }

    #[test]
    fn seeded_rng_repeats() {
        let config = Config { seed: Some(9) };
        let a: u64 = config.rng().gen();
        let b: u64 = config.rng().gen();
        assert_eq!(a, b);
    }
}
