use std::collections::BTreeSet;

use jobby_core::{FilterCriteria, EMPLOYMENT_TYPES, SALARY_TIERS};

#[test]
fn empty_criteria_keeps_all_parameters_present() {
    assert_eq!(
        FilterCriteria::new().to_query(),
        "employment_type=&minimum_package=&search="
    );
}

#[test]
fn full_criteria_serializes_every_parameter() {
    let criteria = FilterCriteria::new()
        .with_employment_type("PARTTIME")
        .with_employment_type("FULLTIME")
        .with_salary_floor(1_000_000)
        .with_search_term("Frontend");
    assert_eq!(
        criteria.to_query(),
        "employment_type=FULLTIME,PARTTIME&minimum_package=1000000&search=Frontend"
    );
}

#[test]
fn toggle_order_does_not_change_the_query() {
    let mut a = FilterCriteria::new();
    a.toggle_employment_type("FREELANCE");
    a.toggle_employment_type("INTERNSHIP");

    let mut b = FilterCriteria::new();
    b.toggle_employment_type("INTERNSHIP");
    b.toggle_employment_type("FREELANCE");

    assert_eq!(a, b);
    assert_eq!(a.to_query(), b.to_query());
}

#[test]
fn double_toggle_restores_the_original_set() {
    let original = FilterCriteria::new().with_employment_type("FULLTIME");
    let mut criteria = original.clone();
    criteria.toggle_employment_type("PARTTIME");
    assert!(criteria.has_employment_type("PARTTIME"));
    criteria.toggle_employment_type("PARTTIME");
    assert_eq!(criteria, original);
}

#[test]
fn salary_floor_replaces_previous_tier() {
    let mut criteria = FilterCriteria::new();
    criteria.set_salary_floor(1_000_000);
    criteria.set_salary_floor(3_000_000);
    assert_eq!(criteria.minimum_salary(), Some(3_000_000));
    assert_eq!(
        criteria.to_query(),
        "employment_type=&minimum_package=3000000&search="
    );
}

#[test]
fn search_term_is_form_encoded() {
    let criteria = FilterCriteria::new().with_search_term("rust & go");
    assert_eq!(
        criteria.to_query(),
        "employment_type=&minimum_package=&search=rust+%26+go"
    );
}

#[test]
fn commas_inside_a_tag_do_not_collide_with_the_separator() {
    let joined = FilterCriteria::new().with_employment_type("A,B");
    let split = FilterCriteria::new()
        .with_employment_type("A")
        .with_employment_type("B");
    assert_ne!(joined, split);
    assert_ne!(joined.to_query(), split.to_query());
}

#[test]
fn blank_tag_is_ignored() {
    let mut criteria = FilterCriteria::new();
    assert!(!criteria.toggle_employment_type("  "));
    assert_eq!(criteria, FilterCriteria::new());
}

#[test]
fn distinct_criteria_produce_distinct_queries() {
    let mut variants = Vec::new();
    for tag in EMPLOYMENT_TYPES.iter().map(|t| t.id) {
        for tier in SALARY_TIERS.iter().map(|t| Some(t.minimum_package)).chain([None]) {
            for term in ["", "dev", "dev ops", "dev+ops"] {
                let mut c = FilterCriteria::new().with_employment_type(tag).with_search_term(term);
                if let Some(floor) = tier {
                    c.set_salary_floor(floor);
                }
                variants.push(c);
            }
        }
    }
    variants.push(FilterCriteria::new());
    variants.push(FilterCriteria::new().with_search_term("&search=x"));

    let queries: BTreeSet<String> = variants.iter().map(FilterCriteria::to_query).collect();
    assert_eq!(queries.len(), variants.len());
}
