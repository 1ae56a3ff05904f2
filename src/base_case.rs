/// Stable binary insertion sort. `arr[..sorted]` must already be non-decreasing.
///
/// Each new key goes behind every element equal to it, so equal keys keep their order.
/// Returns the writes into `arr`: the shifted elements plus one placement per key.
pub fn binary_insertion_sort<T: Ord + Copy>(arr: &mut [T], sorted: usize) -> u64 {
    let mut moves = 0;
    for j in sorted.max(1)..arr.len() {
        let key = arr[j];
        let i = arr[..j].partition_point(|x| *x <= key);
        arr.copy_within(i..j, i + 1);
        arr[i] = key;
        moves += (j - i + 1) as u64;
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn sorts_small() {
        let mut arr = [5, 2, 9, 1, 5, 6];
        binary_insertion_sort(&mut arr, 0);
        assert_eq!(arr, [1, 2, 5, 5, 6, 9]);
    }

    #[test]
    fn counts_shifts_and_placements() {
        let mut arr = [3, 2, 1];
        assert_eq!(binary_insertion_sort(&mut arr, 0), 5);
        let mut arr = [1, 4, 8, 3, 0];
        // 3 shifts 4 and 8, 0 shifts all four
        assert_eq!(binary_insertion_sort(&mut arr, 3), 3 + 5);
    }

    #[test]
    fn keeps_sorted_prefix() {
        let mut arr = [1, 4, 8, 3, 0];
        binary_insertion_sort(&mut arr, 3);
        assert_eq!(arr, [0, 1, 3, 4, 8]);
    }

    #[test]
    fn stable_on_equal_keys() {
        let mut tagged: Vec<Keyed> = [2, 1, 2, 1]
            .iter()
            .enumerate()
            .map(|(i, k)| Keyed(*k, i))
            .collect();
        binary_insertion_sort(&mut tagged, 0);
        let order: Vec<(u8, usize)> = tagged.iter().map(|k| (k.0, k.1)).collect();
        assert_eq!(order, vec![(1, 1), (1, 3), (2, 0), (2, 2)]);
    }

    #[test]
    fn random_matches_std() {
        let mut rng = StdRng::seed_from_u64(12345);
        for _ in 0..20 {
            let n = rng.gen_range(0..64);
            let mut arr: Vec<i32> = (0..n).map(|_| rng.gen_range(-10..10)).collect();
            let mut expected = arr.clone();
            expected.sort();
            binary_insertion_sort(&mut arr, 0);
            assert_eq!(arr, expected);
        }
    }

    #[derive(Debug, Clone, Copy)]
    struct Keyed(u8, usize);

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    impl Eq for Keyed {}

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }
}
