//! Jobby core: pure fetch-lifecycle state machine, filter criteria and payload normalizers.
mod effect;
mod filter;
mod msg;
mod normalize;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use filter::{
    EmploymentType, FilterCriteria, SalaryTier, EMPLOYMENT_TYPES, SALARY_TIERS,
};
pub use msg::{FetchMsg, FilterMsg};
pub use normalize::{
    normalize_job_detail_bundle, normalize_job_list, normalize_profile, NormalizeError,
};
pub use state::{ErrorKind, FetchStatus, RequestSeq, ResourceState, StaleResponsePolicy};
pub use update::{update_filters, update_resource};
pub use view_model::{
    JobDetail, JobDetailBundle, JobSummary, LifeAtCompany, ProfileSummary, Skill,
};
