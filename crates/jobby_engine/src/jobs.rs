use jobby_core::{update_filters, Effect, FilterCriteria, FilterMsg};

use crate::controller::{ControllerContext, PendingFetch, ResourceController};
use crate::resource::{ApiEndpoint, JobDetailResource, JobListResource, ProfileResource};

pub type ProfileController = ResourceController<ProfileResource>;
pub type JobListController = ResourceController<JobListResource>;
pub type JobDetailController = ResourceController<JobDetailResource>;

impl ResourceController<ProfileResource> {
    pub fn profile(endpoint: ApiEndpoint, ctx: ControllerContext) -> Self {
        Self::new(ProfileResource::new(endpoint), (), ctx)
    }
}

impl ResourceController<JobDetailResource> {
    pub fn job_detail(
        endpoint: ApiEndpoint,
        job_id: impl Into<String>,
        ctx: ControllerContext,
    ) -> Self {
        Self::new(JobDetailResource::new(endpoint, job_id), (), ctx)
    }
}

/// Filter mutators for the job list.
///
/// Checkbox and salary-tier changes refetch immediately; editing the search
/// text does not, only `submit_search` does.
impl ResourceController<JobListResource> {
    pub fn job_list(endpoint: ApiEndpoint, ctx: ControllerContext) -> Self {
        Self::new(JobListResource::new(endpoint), FilterCriteria::new(), ctx)
    }

    pub fn criteria(&self) -> FilterCriteria {
        self.params()
    }

    /// Replaces the criteria and refetches with them.
    pub fn on_criteria_changed(&self, criteria: FilterCriteria) -> PendingFetch {
        self.lock().params = criteria.clone();
        self.start(criteria)
    }

    /// `None` when the tag is blank and nothing changed.
    pub fn toggle_employment_type(&self, tag: &str) -> Option<PendingFetch> {
        self.apply_filter(FilterMsg::EmploymentTypeToggled(tag.to_string()))
    }

    pub fn set_salary_floor(&self, minimum_package: u64) -> Option<PendingFetch> {
        self.apply_filter(FilterMsg::SalaryFloorSelected(minimum_package))
    }

    pub fn set_search_term(&self, text: impl Into<String>) {
        // Never refetches; the effect list is always empty.
        let _ = self.apply_filter(FilterMsg::SearchInputChanged(text.into()));
    }

    pub fn submit_search(&self) -> Option<PendingFetch> {
        self.apply_filter(FilterMsg::SearchSubmitted)
    }

    fn apply_filter(&self, msg: FilterMsg) -> Option<PendingFetch> {
        let effects = {
            let mut shared = self.lock();
            let criteria = std::mem::take(&mut shared.params);
            let (criteria, effects) = update_filters(criteria, msg);
            shared.params = criteria;
            effects
        };

        let mut pending = None;
        for effect in effects {
            match effect {
                Effect::Refetch { criteria } => {
                    pending = Some(self.on_criteria_changed(criteria));
                }
            }
        }
        pending
    }
}
