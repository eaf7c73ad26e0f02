use std::collections::HashMap;

/// Langmuir constants of one run, keyed by cage type and species slot (0..3).
#[derive(Debug, Default, Clone)]
pub struct LangmuirCache {
    data: HashMap<String, [f64; 3]>,
}

impl LangmuirCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, cage_type: &str, slot: usize, value: f64) {
        self.data
            .entry(cage_type.to_string())
            .or_insert([0.0; 3])[slot] = value;
    }

    pub fn get(&self, cage_type: &str, slot: usize) -> Option<f64> {
        self.data.get(cage_type).and_then(|row| row.get(slot).copied())
    }

    /// All three slot values for `cage_type`.
    pub fn row(&self, cage_type: &str) -> Option<&[f64; 3]> {
        self.data.get(cage_type)
    }

    pub fn cage_types(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.data.len() * 3
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get_round_trip_per_slot() {
        let mut cache = LangmuirCache::new();
        cache.insert("12", 0, 1.0e-6);
        cache.insert("12", 2, 3.0e-6);
        assert_eq!(cache.get("12", 0), Some(1.0e-6));
        assert_eq!(cache.get("12", 2), Some(3.0e-6));
        assert_eq!(cache.row("12"), Some(&[1.0e-6, 0.0, 3.0e-6]));
    }

    #[test]
    fn unknown_cage_or_slot_returns_none() {
        let mut cache = LangmuirCache::new();
        cache.insert("14", 1, 2.0);
        assert_eq!(cache.get("16", 1), None);
        assert_eq!(cache.get("14", 3), None);
    }

    #[test]
    fn len_counts_every_cage_slot_pair() {
        let mut cache = LangmuirCache::new();
        assert!(cache.is_empty());
        cache.insert("12", 0, 1.0);
        cache.insert("16", 0, 1.0);
        assert_eq!(cache.len(), 6);
        let mut cages: Vec<_> = cache.cage_types().collect();
        cages.sort();
        assert_eq!(cages, vec!["12", "16"]);
    }
}
