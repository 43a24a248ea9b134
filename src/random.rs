use rand::{Rng, RngCore};

/// Source of the `j` draws made by [`Grid::shuffle`](crate::grid::Grid::shuffle).
pub trait IndexPicker {
    /// Returns an index in `0..=max`.
    fn pick(&mut self, max: usize) -> usize;
}

/// Draws uniformly from any `rand` generator.
pub struct RngPicker<R>(pub R);

impl<R: RngCore> IndexPicker for RngPicker<R> {
    fn pick(&mut self, max: usize) -> usize {
        self.0.gen_range(0..=max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rng_picker_stays_in_range() {
        let mut picker = RngPicker(StdRng::seed_from_u64(7));
        for max in 0..50 {
            for _ in 0..20 {
                assert!(picker.pick(max) <= max);
            }
        }
    }

    #[test]
    fn rng_picker_accepts_borrowed_rng() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut picker = RngPicker(&mut rng);
        assert_eq!(picker.pick(0), 0);
    }
}
