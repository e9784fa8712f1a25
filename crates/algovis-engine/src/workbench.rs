//! The engine facade.

use tracing::{debug, warn};

use algovis_common::{Value, ValueKind, ValueSource};
use algovis_core::list::{DoubleList, ListSortAlgorithm, SimpleList};
use algovis_core::sort::{sort, SortAlgorithm};

use crate::config::Config;
use crate::timing::{measure, Timed};

/// Session object a presentation layer drives.
///
/// Owns the configuration and the seeded random source, and wraps engine
/// calls with timing so results arrive ready to display. Everything is
/// synchronous; callers serialize access through their own event dispatch.
pub struct Workbench {
    config: Config,
    source: ValueSource,
}

impl Workbench {
    /// Creates a workbench from the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let source = ValueSource::from_seed_opt(config.seed);
        Self { config, source }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generates a random homogeneous sequence.
    pub fn generate_values(&mut self, size: usize, kind: ValueKind) -> Vec<Value> {
        debug!(size, %kind, "generating random sequence");
        self.source.values(kind, size)
    }

    /// Generates a random sequence of the configured default kind.
    pub fn generate_default(&mut self, size: usize) -> Vec<Value> {
        let kind = self.config.default_kind;
        self.generate_values(size, kind)
    }

    /// Sorts a sequence in place and reports the elapsed time.
    ///
    /// Warns (but proceeds) when a quadratic algorithm is asked to sort more
    /// than the configured threshold.
    pub fn sort_values(&self, values: &mut [Value], algorithm: SortAlgorithm) -> Timed<()> {
        if algorithm.is_quadratic() && values.len() > self.config.quadratic_warn_threshold {
            warn!(
                len = values.len(),
                threshold = self.config.quadratic_warn_threshold,
                algorithm = algorithm.name(),
                "quadratic sort above the recommended size"
            );
        }
        measure(|| sort(values, algorithm))
    }

    /// Creates a singly-linked list filled with `count` random values.
    pub fn random_simple_list(&mut self, kind: ValueKind, count: usize) -> SimpleList {
        let mut list = SimpleList::new(kind);
        list.fill_random(&mut self.source, count);
        list
    }

    /// Creates a doubly-linked list filled with `count` random values.
    pub fn random_double_list(&mut self, kind: ValueKind, count: usize) -> DoubleList {
        let mut list = DoubleList::new(kind);
        list.fill_random(&mut self.source, count);
        list
    }

    /// Sorts a simple list, reporting the elapsed time.
    ///
    /// Every list sort is quadratic, so the size warning applies to all of
    /// them.
    pub fn sort_simple_list(&self, list: &mut SimpleList, algorithm: ListSortAlgorithm) -> Timed<()> {
        self.warn_list_size(list.len(), algorithm);
        measure(|| list.sort(algorithm))
    }

    /// Sorts a double list, reporting the elapsed time.
    pub fn sort_double_list(&self, list: &mut DoubleList, algorithm: ListSortAlgorithm) -> Timed<()> {
        self.warn_list_size(list.len(), algorithm);
        measure(|| list.sort(algorithm))
    }

    fn warn_list_size(&self, len: usize, algorithm: ListSortAlgorithm) {
        if len > self.config.quadratic_warn_threshold {
            warn!(
                len,
                threshold = self.config.quadratic_warn_threshold,
                algorithm = algorithm.name(),
                "quadratic sort above the recommended size"
            );
        }
    }

    /// Direct access to the random source, for callers filling their own
    /// structures.
    pub fn source(&mut self) -> &mut ValueSource {
        &mut self.source
    }
}
