//! Memoized flattening and size estimation.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::domain::dimensions::{self, EstimatorParams, ViewportDimensions};
use crate::domain::flatten::{self, FlatEntry};
use crate::option::SelectOption;

/// Structural fingerprint of an option set.
///
/// Covers everything the cached data depends on: the grouping shape and
/// the labels. Values are not hashed since entries are index paths.
pub fn options_fingerprint<T>(options: &[SelectOption<T>]) -> u64 {
    let mut hasher = DefaultHasher::new();
    options.len().hash(&mut hasher);
    for option in options {
        option.is_group().hash(&mut hasher);
        option.data().label.hash(&mut hasher);
        option.children().len().hash(&mut hasher);
        for child in option.children() {
            child.label.hash(&mut hasher);
        }
    }
    hasher.finish()
}

/// Cache for per-option-set computations.
///
/// Flattened entries and the longest label are recomputed only when the
/// option fingerprint changes. Dimensions are additionally keyed by row
/// count, height cap and estimation constants.
#[derive(Debug, Default)]
pub struct MenuCache {
    /// Fingerprint of the option set the entries were built from
    fingerprint: Option<u64>,

    /// Flattened rows
    entries: Vec<FlatEntry>,

    /// Longest label over the flattened rows
    longest_label: usize,

    /// (item_count, max_height bits, params) the dimensions were computed for
    dimensions_key: Option<(usize, u32, EstimatorParamsKey)>,
    dimensions: ViewportDimensions,

    /// Incremented on every recomputation or invalidation
    pub seq: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EstimatorParamsKey([u32; 4]);

impl From<&EstimatorParams> for EstimatorParamsKey {
    fn from(p: &EstimatorParams) -> Self {
        Self([
            p.item_height.to_bits(),
            p.width_multiplier.to_bits(),
            p.padding.to_bits(),
            p.width_extra.to_bits(),
        ])
    }
}

impl MenuCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes the flattened rows if the option set changed.
    ///
    /// # Returns
    /// `true` if the cache was rebuilt.
    pub fn refresh<T>(&mut self, options: &[SelectOption<T>]) -> bool {
        let fingerprint = options_fingerprint(options);
        if self.fingerprint == Some(fingerprint) {
            return false;
        }

        self.entries = flatten::flatten_options(options);
        self.longest_label = dimensions::longest_label(
            self.entries
                .iter()
                .filter_map(|e| e.resolve(options))
                .map(|v| v.label.as_deref()),
        );
        self.fingerprint = Some(fingerprint);
        self.dimensions_key = None;
        self.seq += 1;

        log::trace!(
            "menu cache rebuilt: {} rows, longest label {}",
            self.entries.len(),
            self.longest_label
        );
        true
    }

    /// Flattened rows of the last refreshed option set.
    pub fn entries(&self) -> &[FlatEntry] {
        &self.entries
    }

    pub fn longest_label(&self) -> usize {
        self.longest_label
    }

    /// Estimated viewport size for `item_count` rows.
    pub fn dimensions(&mut self, item_count: usize, max_height: f32, params: &EstimatorParams) -> ViewportDimensions {
        let key = (item_count, max_height.to_bits(), EstimatorParamsKey::from(params));
        if self.dimensions_key == Some(key) {
            return self.dimensions;
        }

        self.dimensions = ViewportDimensions {
            width: dimensions::estimate_width(self.longest_label, params),
            height: dimensions::estimate_height(item_count, max_height, params),
        };
        self.dimensions_key = Some(key);
        self.dimensions
    }

    /// Drops all cached data.
    pub fn invalidate(&mut self) {
        self.fingerprint = None;
        self.entries.clear();
        self.longest_label = 0;
        self.dimensions_key = None;
        self.seq += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::SelectableValue;

    fn sample() -> Vec<SelectOption<u32>> {
        vec![
            SelectOption::leaf(1, "A"),
            SelectOption::group(
                2,
                "Group",
                vec![SelectableValue::new(3, "C1"), SelectableValue::new(4, "C2")],
            ),
        ]
    }

    #[test]
    fn test_refresh_only_on_change() {
        let mut cache = MenuCache::new();
        let options = sample();

        assert!(cache.refresh(&options));
        assert!(!cache.refresh(&options));
        assert_eq!(cache.entries().len(), 4);
        assert_eq!(cache.longest_label(), 5);

        let mut changed = sample();
        changed.push(SelectOption::leaf(5, "A much longer label"));
        assert!(cache.refresh(&changed));
        assert_eq!(cache.entries().len(), 5);
        assert_eq!(cache.longest_label(), 19);
    }

    #[test]
    fn test_value_change_keeps_cache() {
        let mut cache = MenuCache::new();
        assert!(cache.refresh(&sample()));

        let mut relabeled_values = sample();
        if let SelectOption::Leaf(data) = &mut relabeled_values[0] {
            data.value = 100;
        }
        assert!(!cache.refresh(&relabeled_values));
    }

    #[test]
    fn test_fingerprint_sees_shape() {
        let grouped = vec![SelectOption::group(1u32, "x", vec![SelectableValue::new(2, "y")])];
        let flat = vec![SelectOption::leaf(1u32, "x"), SelectOption::leaf(2u32, "y")];
        assert_ne!(options_fingerprint(&grouped), options_fingerprint(&flat));
    }

    #[test]
    fn test_dimensions_memoized() {
        let mut cache = MenuCache::new();
        cache.refresh(&sample());
        let params = EstimatorParams::default();

        let dims = cache.dimensions(4, 300.0, &params);
        assert_eq!(dims.width, 5.0 * 8.0 + 16.0 + 36.0);
        assert_eq!(dims.height, 4.0 * 37.0);
        assert_eq!(cache.dimensions(4, 100.0, &params).height, 100.0);
    }

    #[test]
    fn test_invalidate() {
        let mut cache = MenuCache::new();
        let options = sample();
        cache.refresh(&options);
        let seq = cache.seq;

        cache.invalidate();
        assert!(cache.entries().is_empty());
        assert!(cache.seq > seq);
        assert!(cache.refresh(&options));
    }
}
