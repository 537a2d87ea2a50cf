use jobby_core::{update_filters, Effect, FilterCriteria, FilterMsg};

fn refetched(effects: &[Effect]) -> Option<&FilterCriteria> {
    match effects {
        [Effect::Refetch { criteria }] => Some(criteria),
        _ => None,
    }
}

#[test]
fn toggling_an_employment_type_refetches() {
    let (criteria, effects) = update_filters(
        FilterCriteria::new(),
        FilterMsg::EmploymentTypeToggled("FULLTIME".to_string()),
    );
    assert!(criteria.has_employment_type("FULLTIME"));
    assert_eq!(refetched(&effects), Some(&criteria));
}

#[test]
fn selecting_a_salary_tier_refetches() {
    let (criteria, effects) =
        update_filters(FilterCriteria::new(), FilterMsg::SalaryFloorSelected(2_000_000));
    assert_eq!(criteria.minimum_salary(), Some(2_000_000));
    assert_eq!(refetched(&effects), Some(&criteria));
}

#[test]
fn typing_in_search_box_does_not_refetch() {
    let (criteria, effects) = update_filters(
        FilterCriteria::new(),
        FilterMsg::SearchInputChanged("Backend".to_string()),
    );
    assert_eq!(criteria.search_term(), "Backend");
    assert!(effects.is_empty());
}

#[test]
fn submitting_search_refetches_with_held_term() {
    let (criteria, _) = update_filters(
        FilterCriteria::new(),
        FilterMsg::SearchInputChanged("Backend".to_string()),
    );
    let (criteria, effects) = update_filters(criteria, FilterMsg::SearchSubmitted);
    let requested = refetched(&effects).expect("refetch effect");
    assert_eq!(requested.search_term(), "Backend");
    assert_eq!(requested, &criteria);
}

#[test]
fn blank_toggle_is_noop() {
    let state = FilterCriteria::new().with_employment_type("FREELANCE");
    let (next, effects) =
        update_filters(state.clone(), FilterMsg::EmploymentTypeToggled(" ".to_string()));
    assert_eq!(next, state);
    assert!(effects.is_empty());
}
