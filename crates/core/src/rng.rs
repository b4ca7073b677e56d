//! RNG module - deterministic random block selection
//!
//! Provides a simple LCG so that every random choice is reproducible from a
//! seed, plus a [`BlockQueue`] that hands out each block index exactly once in a
//! shuffled order (a block is consumed at most once per simulation).

/// Seeded LCG driving [`BlockQueue`] shuffles and [`crate::random_block`] picks
///
/// Uses the Numerical Recipes constants, so a seed always yields the same
/// block order.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Random index into a collection of `len` items, `None` if empty
    pub fn next_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.next_range(len as u32) as usize)
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Shuffled queue of block indices, each handed out once
#[derive(Debug, Clone)]
pub struct BlockQueue {
    order: Vec<usize>,
    next: usize,
}

impl BlockQueue {
    /// Queue over indices `0..len` shuffled with the given seed
    pub fn new(len: usize, seed: u32) -> Self {
        let mut order: Vec<usize> = (0..len).collect();
        SimpleRng::new(seed).shuffle(&mut order);
        Self { order, next: 0 }
    }

    /// Peek at the next index without removing it
    pub fn peek(&self) -> Option<usize> {
        self.order.get(self.next).copied()
    }

    /// Take the next index
    pub fn draw(&mut self) -> Option<usize> {
        let idx = self.peek()?;
        self.next += 1;
        Some(idx)
    }

    pub fn remaining(&self) -> usize {
        self.order.len() - self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_next_index_bounds() {
        let mut rng = SimpleRng::new(7);
        assert_eq!(rng.next_index(0), None);
        for _ in 0..50 {
            assert!(rng.next_index(3).unwrap() < 3);
        }
    }

    #[test]
    fn test_queue_hands_out_every_index_once() {
        let mut queue = BlockQueue::new(10, 42);
        let mut seen = Vec::new();
        while let Some(idx) = queue.draw() {
            seen.push(idx);
        }
        seen.sort_unstable();
        assert_eq!(seen, (0..10).collect::<Vec<_>>());
        assert_eq!(queue.remaining(), 0);
        assert_eq!(queue.peek(), None);
    }

    #[test]
    fn test_queue_same_seed_same_order() {
        let a: Vec<_> = std::iter::from_fn({
            let mut q = BlockQueue::new(6, 9);
            move || q.draw()
        })
        .collect();
        let b: Vec<_> = std::iter::from_fn({
            let mut q = BlockQueue::new(6, 9);
            move || q.draw()
        })
        .collect();
        assert_eq!(a, b);
    }
}
