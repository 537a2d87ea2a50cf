use crate::{Effect, FetchMsg, FilterCriteria, FilterMsg, ResourceState, StaleResponsePolicy};

/// Pure update function for a resource's fetch lifecycle.
///
/// `Triggered` always moves to `Loading`. A `Resolved` message overwrites
/// status unconditionally under `ApplyAll`; under `LatestOnly` it is dropped
/// unless it answers the most recently issued request.
pub fn update_resource<T>(
    mut state: ResourceState<T>,
    msg: FetchMsg<T>,
    policy: StaleResponsePolicy,
) -> ResourceState<T> {
    match msg {
        FetchMsg::Triggered => {
            state.begin_fetch();
        }
        FetchMsg::Resolved { seq, outcome } => {
            if policy.accepts(seq, state.latest_issued()) {
                state.resolve(outcome);
            }
        }
    }
    state
}

/// Pure update function for the list filters: applies a message and returns any effects.
pub fn update_filters(
    mut criteria: FilterCriteria,
    msg: FilterMsg,
) -> (FilterCriteria, Vec<Effect>) {
    let refetch = match msg {
        FilterMsg::EmploymentTypeToggled(tag) => criteria.toggle_employment_type(&tag),
        FilterMsg::SalaryFloorSelected(minimum_package) => {
            criteria.set_salary_floor(minimum_package);
            true
        }
        FilterMsg::SearchInputChanged(text) => {
            criteria.set_search_term(text);
            false
        }
        FilterMsg::SearchSubmitted => true,
    };

    let effects = if refetch {
        vec![Effect::Refetch {
            criteria: criteria.clone(),
        }]
    } else {
        Vec::new()
    };
    (criteria, effects)
}
