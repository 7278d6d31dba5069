//! Port statistics: min/max/total over a dataset and their orders of magnitude.

use crate::domain::{DomainError, ExposureDataset, OrdersOfMagnitude, PortStatistics};

/// Single pass over the dataset's counts. Empty datasets are an error, not zeros.
pub fn aggregate(dataset: &ExposureDataset) -> Result<PortStatistics, DomainError> {
    let mut counts = dataset.ports().iter().map(|p| p.count);
    let first = counts.next().ok_or(DomainError::EmptyDataset)?;

    let stats = counts.fold(
        PortStatistics {
            min_count: first,
            max_count: first,
            total_count: first,
        },
        |acc, count| PortStatistics {
            min_count: acc.min_count.min(count),
            max_count: acc.max_count.max(count),
            total_count: acc.total_count.saturating_add(count),
        },
    );
    Ok(stats)
}

/// Largest power of ten not exceeding `value`, i.e. `10^floor(log10(value))`.
///
/// Integer arithmetic, so exact powers of ten map to themselves.
pub fn order_of_magnitude(value: u64) -> Result<u64, DomainError> {
    value
        .checked_ilog10()
        .map(|exp| 10u64.pow(exp))
        .ok_or(DomainError::NonPositiveCount {
            what: "order of magnitude input",
            value,
        })
}

/// Orders of magnitude of the smallest and largest counts.
pub fn orders_of_magnitude(stats: &PortStatistics) -> Result<OrdersOfMagnitude, DomainError> {
    Ok(OrdersOfMagnitude {
        min: order_of_magnitude(stats.min_count)?,
        max: order_of_magnitude(stats.max_count)?,
    })
}
