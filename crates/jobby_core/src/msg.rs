use crate::{ErrorKind, RequestSeq};

#[derive(Debug, Clone, PartialEq)]
pub enum FetchMsg<T> {
    /// A fetch was triggered; the request is about to be issued.
    Triggered,
    /// The fetch issued as `seq` resolved.
    Resolved {
        seq: RequestSeq,
        outcome: Result<T, ErrorKind>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterMsg {
    /// User ticked or unticked an employment-type checkbox.
    EmploymentTypeToggled(String),
    /// User picked a salary tier (minimum package).
    SalaryFloorSelected(u64),
    /// User edited the search box. Does not refetch.
    SearchInputChanged(String),
    /// User pressed Enter or the search button.
    SearchSubmitted,
}
