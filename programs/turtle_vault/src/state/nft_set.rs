use std::collections::BTreeMap;

use anchor_lang::prelude::*;

/// Ordered, duplicate-free collection of held NFT mints.
///
/// An append-ordered id array plus an id-to-position map, kept bijective at
/// every step. Removal swaps the target with the last element, patches the
/// moved element's map entry and truncates, so membership and removal never
/// scan the array. Iteration order is append order except that a removal
/// moves the last id into the vacated slot.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default)]
pub struct NftSet {
    ids: Vec<Pubkey>,
    index: BTreeMap<Pubkey, u32>,
}

impl NftSet {
    /// Serialized size for a set holding up to `capacity` ids.
    pub const fn space(capacity: usize) -> usize {
        // Vec: length prefix + ids; map: length prefix + (key, position) pairs.
        (4 + 32 * capacity) + (4 + (32 + 4) * capacity)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &Pubkey) -> bool {
        self.index.contains_key(id)
    }

    /// Held ids in iteration order.
    pub fn ids(&self) -> &[Pubkey] {
        &self.ids
    }

    /// Appends `id`; returns false without changes if it is already held.
    pub fn insert(&mut self, id: Pubkey) -> bool {
        if self.index.contains_key(&id) {
            return false;
        }
        self.index.insert(id, self.ids.len() as u32);
        self.ids.push(id);
        true
    }

    /// Removes `id` by swapping it with the last element and truncating;
    /// returns false without changes if it is not held.
    pub fn swap_remove(&mut self, id: &Pubkey) -> bool {
        let pos = match self.index.remove(id) {
            Some(pos) => pos as usize,
            None => return false,
        };
        let last = self.ids.len() - 1;
        if pos != last {
            let moved = self.ids[last];
            self.ids[pos] = moved;
            self.index.insert(moved, pos as u32);
        }
        self.ids.pop();
        true
    }

    /// Puts `new` into `old`'s slot; the fused form of appending `new` and
    /// then swap-removing `old`. Returns false without changes unless `old`
    /// is held and `new` is not.
    pub fn replace(&mut self, old: &Pubkey, new: Pubkey) -> bool {
        if self.index.contains_key(&new) {
            return false;
        }
        let pos = match self.index.remove(old) {
            Some(pos) => pos,
            None => return false,
        };
        self.ids[pos as usize] = new;
        self.index.insert(new, pos);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(n: usize) -> Vec<Pubkey> {
        (0..n).map(|_| Pubkey::new_unique()).collect()
    }

    fn assert_bijective(set: &NftSet) {
        assert_eq!(set.ids.len(), set.index.len());
        for (pos, id) in set.ids.iter().enumerate() {
            assert_eq!(set.index.get(id), Some(&(pos as u32)));
        }
    }

    #[test]
    fn insert_appends_and_rejects_duplicates() {
        let k = keys(3);
        let mut set = NftSet::default();

        assert!(set.insert(k[0]));
        assert!(set.insert(k[1]));
        assert!(set.insert(k[2]));
        assert!(!set.insert(k[1]));

        assert_eq!(set.ids(), &[k[0], k[1], k[2]]);
        assert_eq!(set.len(), 3);
        assert!(set.contains(&k[1]));
        assert_bijective(&set);
    }

    #[test]
    fn swap_remove_moves_the_last_id_into_the_hole() {
        let k = keys(3);
        let mut set = NftSet::default();
        for id in &k {
            set.insert(*id);
        }

        assert!(set.swap_remove(&k[0]));
        assert_eq!(set.ids(), &[k[2], k[1]]);
        assert!(!set.contains(&k[0]));
        assert_bijective(&set);

        assert!(!set.swap_remove(&k[0]));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn swap_remove_of_the_last_id_just_truncates() {
        let k = keys(2);
        let mut set = NftSet::default();
        set.insert(k[0]);
        set.insert(k[1]);

        assert!(set.swap_remove(&k[1]));
        assert_eq!(set.ids(), &[k[0]]);
        assert_bijective(&set);

        assert!(set.swap_remove(&k[0]));
        assert!(set.is_empty());
        assert_bijective(&set);
    }

    #[test]
    fn replace_fills_the_vacated_slot() {
        let k = keys(5);
        let mut set = NftSet::default();
        set.insert(k[0]);
        set.insert(k[1]);
        set.insert(k[2]);

        // Swapping in [3] and [4] for [0] and [1] leaves the incoming ids in
        // the outgoing ids' slots.
        assert!(set.replace(&k[0], k[3]));
        assert!(set.replace(&k[1], k[4]));

        assert_eq!(set.ids(), &[k[3], k[4], k[2]]);
        assert_eq!(set.len(), 3);
        assert!(!set.contains(&k[0]));
        assert!(!set.contains(&k[1]));
        assert_bijective(&set);
    }

    #[test]
    fn replace_rejects_missing_old_and_held_new() {
        let k = keys(4);
        let mut set = NftSet::default();
        set.insert(k[0]);
        set.insert(k[1]);

        assert!(!set.replace(&k[2], k[3]));
        assert!(!set.replace(&k[0], k[1]));
        assert_eq!(set.ids(), &[k[0], k[1]]);
        assert_bijective(&set);
    }

    #[test]
    fn interleaved_operations_keep_the_map_consistent() {
        let k = keys(8);
        let mut set = NftSet::default();

        for id in &k[..6] {
            set.insert(*id);
        }
        set.swap_remove(&k[2]);
        set.insert(k[6]);
        set.replace(&k[4], k[7]);
        set.swap_remove(&k[0]);

        assert_eq!(set.len(), 5);
        for id in [&k[1], &k[3], &k[5], &k[6], &k[7]] {
            assert!(set.contains(id));
        }
        for id in [&k[0], &k[2], &k[4]] {
            assert!(!set.contains(id));
        }
        assert_bijective(&set);
    }
}
