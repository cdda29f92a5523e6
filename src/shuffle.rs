// src/shuffle.rs

use rand::Rng;

/// Devuelve una copia barajada (Fisher-Yates) sin tocar la entrada.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.random_range(0..=i);
        out.swap(i, j);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn shuffle_is_a_permutation_and_leaves_input_alone() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in 0..12 {
            let input: Vec<u32> = (0..len).map(|n| n % 4).collect();
            let before = input.clone();
            let out = shuffle(&input, &mut rng);

            assert_eq!(input, before);
            assert_eq!(out.len(), input.len());

            let mut a = out.clone();
            let mut b = input.clone();
            a.sort_unstable();
            b.sort_unstable();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn empty_and_singleton_are_copied() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty: Vec<String> = vec![];
        assert!(shuffle(&empty, &mut rng).is_empty());
        assert_eq!(shuffle(&["solo"], &mut rng), vec!["solo"]);
    }

    #[test]
    fn same_seed_same_order() {
        let input: Vec<usize> = (0..20).collect();
        let a = shuffle(&input, &mut StdRng::seed_from_u64(42));
        let b = shuffle(&input, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn every_position_gets_visited() {
        // Con suficientes tiradas, el primer elemento acaba en todas las posiciones
        let input = [0, 1, 2, 3];
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let out = shuffle(&input, &mut rng);
            let pos = out.iter().position(|&x| x == 0).unwrap();
            seen[pos] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
