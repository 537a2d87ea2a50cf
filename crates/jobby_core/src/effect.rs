use crate::FilterCriteria;

/// Work requested by a pure filter update; executed by the owning controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Re-issue the list request with these criteria.
    Refetch { criteria: FilterCriteria },
}
