//! Observable integer histogram with equal-width binning.
//!
//! A [`Histogram`] owns a private copy of its observations and a configurable
//! bucket count, derives the bucket list from them, and notifies registered
//! [`ChangeObserver`]s synchronously after every mutation.

use std::fmt;
use std::rc::Rc;

use crate::error::{Error, Result};

/// A single histogram bucket.
///
/// Describes the closed integer interval `[range_min, range_max]` and the number
/// of observations that fell inside it. Immutable once produced; the histogram
/// rebuilds the whole bucket list on every recompute instead of mutating
/// buckets in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bucket {
    range_min: u32,
    range_max: u32,
    count: usize,
}

impl Bucket {
    /// Lower bound of the bucket's value range (inclusive).
    #[must_use]
    pub const fn range_min(&self) -> u32 {
        self.range_min
    }

    /// Upper bound of the bucket's value range (inclusive).
    #[must_use]
    pub const fn range_max(&self) -> u32 {
        self.range_max
    }

    /// Number of observations mapped to this bucket.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Whether a value falls inside this bucket's range.
    #[must_use]
    pub const fn contains(&self, value: u32) -> bool {
        value >= self.range_min && value <= self.range_max
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] = {}", self.range_min, self.range_max, self.count)
    }
}

/// Observer notified after every histogram recompute caused by a mutation.
///
/// Observers are invoked synchronously, in registration order, after the new
/// bucket list is fully in place: querying the histogram from inside the
/// callback sees the post-mutation state. The callback receives a shared
/// reference, so mutating the histogram from inside it (and with it any
/// notification reentrancy) is rejected at compile time.
pub trait ChangeObserver {
    /// Called once per mutation with the changed histogram as the subject.
    fn histogram_changed(&self, histogram: &Histogram);
}

/// Generates a histogram from a set of non-negative integer observations.
///
/// Supports a configurable number of buckets, and can be changed after
/// creation. The histogram stores its own copy of the observations, so later
/// mutation of the caller's array never desynchronizes the derived buckets.
///
/// # Example
///
/// ```
/// use binview::histogram::Histogram;
///
/// let histogram = Histogram::new(&[0, 1, 2, 10], 3).unwrap();
/// let buckets = histogram.buckets();
/// assert_eq!(buckets.len(), 3);
/// assert_eq!(buckets[0].count(), 3); // 0, 1, 2 in [0, 3]
/// assert_eq!(buckets[2].count(), 1); // 10 in [8, 11]
/// ```
pub struct Histogram {
    data: Vec<u32>,
    bucket_count: usize,
    buckets: Vec<Bucket>,
    observers: Vec<Rc<dyn ChangeObserver>>,
}

impl Histogram {
    /// Create a histogram over a copy of `data` with `bucket_count` buckets.
    ///
    /// No notification is sent: observers cannot have been registered yet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBucketCount`] if `bucket_count` is zero.
    pub fn new(data: &[u32], bucket_count: usize) -> Result<Self> {
        if bucket_count == 0 {
            return Err(Error::InvalidBucketCount {
                requested: bucket_count,
            });
        }

        let mut histogram = Self {
            data: data.to_vec(),
            bucket_count,
            buckets: Vec::new(),
            observers: Vec::new(),
        };
        histogram.recompute();
        Ok(histogram)
    }

    /// Replace the observations, recompute the buckets, and notify observers.
    ///
    /// An empty slice is valid and yields all-zero bucket counts.
    pub fn set_data(&mut self, data: &[u32]) {
        self.data = data.to_vec();
        self.recompute();
        self.notify_observers();
    }

    /// Replace the bucket count, recompute the buckets, and notify observers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBucketCount`] if `bucket_count` is zero; the
    /// stored state is untouched in that case.
    pub fn set_bucket_count(&mut self, bucket_count: usize) -> Result<()> {
        if bucket_count == 0 {
            return Err(Error::InvalidBucketCount {
                requested: bucket_count,
            });
        }

        self.bucket_count = bucket_count;
        self.recompute();
        self.notify_observers();
        Ok(())
    }

    /// Number of buckets the histogram is configured to produce.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    /// Read-only view over the current buckets, ordered by ascending range.
    #[must_use]
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// The largest count among the current buckets.
    ///
    /// Returns `0` for an empty dataset; the floor is `0`, never negative.
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.buckets
            .iter()
            .map(Bucket::count)
            .max()
            .unwrap_or(0)
    }

    /// Register an observer.
    ///
    /// Observers are notified in registration order. Duplicate registrations
    /// are kept and notified once per registration.
    pub fn add_observer(&mut self, observer: Rc<dyn ChangeObserver>) {
        self.observers.push(observer);
    }

    /// Rebuild the bucket list from the current data and bucket count.
    ///
    /// The list is replaced wholesale; a partially-built list is never visible.
    fn recompute(&mut self) {
        let range_per_bucket = self.range_per_bucket();

        let mut counts = vec![0usize; self.bucket_count];
        for &value in &self.data {
            let index = (u64::from(value) / range_per_bucket) as usize;
            debug_assert!(index < self.bucket_count);
            counts[index] += 1;
        }

        self.buckets = counts
            .iter()
            .enumerate()
            .map(|(index, &count)| {
                let range_min = index as u64 * range_per_bucket;
                let range_max = range_min + range_per_bucket - 1;
                // Bounds saturate at u32::MAX, the largest storable value.
                Bucket {
                    range_min: range_min.min(u64::from(u32::MAX)) as u32,
                    range_max: range_max.min(u64::from(u32::MAX)) as u32,
                    count,
                }
            })
            .collect();
    }

    /// Width of every bucket's value range: `ceil((max + 1) / bucket_count)`.
    ///
    /// The `+ 1` keeps the maximum observation strictly inside the last bucket
    /// even when it is an exact multiple of the bucket count, and the ceiling
    /// keeps the result at least 1 for an empty dataset (max = 0). Computed in
    /// `u64` so a maximum of `u32::MAX` cannot overflow.
    fn range_per_bucket(&self) -> u64 {
        let max_value = self.data.iter().copied().max().unwrap_or(0);
        (u64::from(max_value) + 1).div_ceil(self.bucket_count as u64)
    }

    /// Invoke every registered observer, in registration order.
    fn notify_observers(&self) {
        for observer in &self.observers {
            observer.histogram_changed(self);
        }
    }
}

impl fmt::Debug for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Histogram")
            .field("data", &self.data)
            .field("bucket_count", &self.bucket_count)
            .field("buckets", &self.buckets)
            .field("observers", &self.observers.len())
            .finish()
    }
}
