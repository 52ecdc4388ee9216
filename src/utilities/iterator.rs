//! Iterator helpers that work without a heap.

pub trait Unique {
    fn all_unique(self) -> bool;
}

impl<T: Clone + Iterator<Item = I>, I: PartialEq> Unique for T {
    fn all_unique(mut self) -> bool {
        // O(n^2), heapless.
        while let Some(element) = self.next() {
            if self.clone().any(|e| e == element) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn all_unique_in_various_scenarios() {
        assert!(["debug", "accel", "help"].iter().all_unique());
        assert!(!["mount", "tree", "mount"].iter().all_unique());
        assert!([0u8; 0].iter().all_unique());
        assert!(![None, Some(3), Some(5), None].iter().all_unique());
    }
}
