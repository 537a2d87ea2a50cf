use std::collections::BTreeSet;

use url::form_urlencoded::byte_serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmploymentType {
    pub id: &'static str,
    pub label: &'static str,
}

pub const EMPLOYMENT_TYPES: [EmploymentType; 4] = [
    EmploymentType {
        id: "FULLTIME",
        label: "Full Time",
    },
    EmploymentType {
        id: "PARTTIME",
        label: "Part Time",
    },
    EmploymentType {
        id: "FREELANCE",
        label: "Freelance",
    },
    EmploymentType {
        id: "INTERNSHIP",
        label: "Internship",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryTier {
    pub minimum_package: u64,
    pub label: &'static str,
}

pub const SALARY_TIERS: [SalaryTier; 4] = [
    SalaryTier {
        minimum_package: 1_000_000,
        label: "10 LPA and above",
    },
    SalaryTier {
        minimum_package: 2_000_000,
        label: "20 LPA and above",
    },
    SalaryTier {
        minimum_package: 3_000_000,
        label: "30 LPA and above",
    },
    SalaryTier {
        minimum_package: 4_000_000,
        label: "40 LPA and above",
    },
];

/// Selection criteria for the job list.
///
/// Employment types are kept sorted so that equal criteria always serialize
/// to the same query, regardless of the order the tags were toggled in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    employment_types: BTreeSet<String>,
    minimum_salary: Option<u64>,
    search_term: String,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn employment_types(&self) -> impl Iterator<Item = &str> {
        self.employment_types.iter().map(String::as_str)
    }

    pub fn has_employment_type(&self, tag: &str) -> bool {
        self.employment_types.contains(tag)
    }

    pub fn minimum_salary(&self) -> Option<u64> {
        self.minimum_salary
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Adds the tag if absent, removes it if present.
    ///
    /// Blank tags are ignored; returns whether the set changed.
    pub fn toggle_employment_type(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() {
            return false;
        }
        if !self.employment_types.remove(tag) {
            self.employment_types.insert(tag.to_string());
        }
        true
    }

    /// Replaces any previously selected floor.
    pub fn set_salary_floor(&mut self, minimum_package: u64) {
        self.minimum_salary = Some(minimum_package);
    }

    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.search_term = text.into();
    }

    pub fn with_employment_type(mut self, tag: &str) -> Self {
        if !self.has_employment_type(tag.trim()) {
            self.toggle_employment_type(tag);
        }
        self
    }

    pub fn with_salary_floor(mut self, minimum_package: u64) -> Self {
        self.set_salary_floor(minimum_package);
        self
    }

    pub fn with_search_term(mut self, text: impl Into<String>) -> Self {
        self.set_search_term(text);
        self
    }

    /// Serializes into the list endpoint's query string.
    ///
    /// All three parameters are always present, empty when unset:
    /// `employment_type=&minimum_package=&search=`.
    pub fn to_query(&self) -> String {
        let employment_type = self
            .employment_types
            .iter()
            .map(|tag| encode(tag))
            .collect::<Vec<_>>()
            .join(",");
        let minimum_package = self
            .minimum_salary
            .map(|value| value.to_string())
            .unwrap_or_default();
        format!(
            "employment_type={employment_type}&minimum_package={minimum_package}&search={}",
            encode(&self.search_term)
        )
    }
}

fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}

