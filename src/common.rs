use std::{collections::HashMap, hash::Hash};

pub fn norm_1<K: Eq + Hash>(v: &HashMap<K, f64, ahash::RandomState>) -> f64 {
    v.values().map(|x| x.abs()).sum()
}

/// Largest absolute entry, `0.0` for an empty map.
pub fn norm_inf<K: Eq + Hash>(v: &HashMap<K, f64, ahash::RandomState>) -> f64 {
    v.values().fold(0.0, |acc, x| acc.max(x.abs()))
}
