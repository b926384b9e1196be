// Copyright (C) 2020-2026 Andy Kurnia.

// Fast insecure non-cryptographic hash for short tile strings and placement
// keys. FNV-1a.

pub struct TileHasher(u64);

impl std::hash::Hasher for TileHasher {
    fn finish(&self) -> u64 {
        self.0
    }
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 = (self.0 ^ b as u64).wrapping_mul(0x0100_0000_01b3);
        }
    }
}

impl Default for TileHasher {
    fn default() -> TileHasher {
        TileHasher(0xcbf2_9ce4_8422_2325)
    }
}

pub type TileHasherDefault = std::hash::BuildHasherDefault<TileHasher>;
pub type TileHashSet<T> = std::collections::HashSet<T, TileHasherDefault>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::hash::Hasher;

    #[test]
    fn distinguishes_order() {
        let mut a = TileHasher::default();
        a.write(&[1, 2]);
        let mut b = TileHasher::default();
        b.write(&[2, 1]);
        assert_ne!(a.finish(), b.finish());
    }

    #[test]
    fn works_as_a_set() {
        let mut set = TileHashSet::<Box<[u8]>>::default();
        assert!(set.insert(vec![3, 1, 20].into_boxed_slice()));
        assert!(!set.insert(vec![3, 1, 20].into_boxed_slice()));
        assert!(set.contains(&[3u8, 1, 20][..]));
    }
}
