use std::ops::Add;

/// Returns `a + b` for any pair of operands that support addition.
pub fn add<A, B>(a: A, b: B) -> A::Output
where
    A: Add<B>,
{
    a + b
}

/// A counter that starts at zero and only moves by [`Counter::increment`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    value: usize,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        self.value += 1;
    }

    pub fn value(&self) -> usize {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::{Counter, add};

    #[test]
    fn adds_integers() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(add(-7_i64, 7), 0);
    }

    #[test]
    fn adds_floats() {
        assert_eq!(add(1.5_f64, 2.25), 3.75);
    }

    #[test]
    fn concatenates_strings() {
        assert_eq!(add(String::from("a"), "b"), "ab");
    }

    #[test]
    fn new_counter_starts_at_zero() {
        assert_eq!(Counter::new().value(), 0);
        assert_eq!(Counter::default(), Counter::new());
    }

    #[test]
    fn increment_adds_one_per_call() {
        let mut counter = Counter::new();
        counter.increment();
        assert_eq!(counter.value(), 1);
        counter.increment();
        assert_eq!(counter.value(), 2);
    }

    #[test]
    fn increment_n_times_yields_n() {
        for n in [0_usize, 1, 5, 100] {
            let mut counter = Counter::new();
            for _ in 0..n {
                counter.increment();
            }
            assert_eq!(counter.value(), n);
        }
    }
}
