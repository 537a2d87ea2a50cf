use std::fmt::Write;

use jobby_core::{
    FetchStatus, JobDetailBundle, JobSummary, ProfileSummary, ResourceState, EMPLOYMENT_TYPES,
    SALARY_TIERS,
};

const LOADING: &str = "Loading...";
const FAILURE: &str = "Oops! Something went wrong\nWe cannot seem to find the page you are looking for";
const NO_JOBS: &str = "No Jobs Found\nWe could not find any jobs. Try other filters";

/// Renders any resource: status banner first, then the held data if there is any.
///
/// Stale data stays visible under the `Loading` and `Failure` banners.
fn render_state<T>(
    state: &ResourceState<T>,
    retry_hint: &str,
    body: impl Fn(&T, &mut String),
) -> String {
    let mut out = String::new();
    match state.status() {
        FetchStatus::Idle => {}
        FetchStatus::Loading => {
            out.push_str(LOADING);
            out.push('\n');
        }
        FetchStatus::Failure => {
            let _ = writeln!(out, "{FAILURE}");
            if let Some(kind) = state.last_error() {
                let _ = writeln!(out, "({kind}) {retry_hint}");
            }
        }
        FetchStatus::Success => {}
    }
    if let Some(data) = state.data() {
        if state.status() != FetchStatus::Success {
            out.push_str("-- previous result --\n");
        }
        body(data, &mut out);
    }
    out
}

pub fn profile(state: &ResourceState<ProfileSummary>, retry_hint: &str) -> String {
    render_state(state, retry_hint, |profile, out| {
        let _ = writeln!(out, "{}", profile.name);
        let _ = writeln!(out, "{}", profile.short_bio);
        let _ = writeln!(out, "avatar: {}", profile.avatar_url);
    })
}

pub fn jobs(state: &ResourceState<Vec<JobSummary>>, retry_hint: &str) -> String {
    render_state(state, retry_hint, |jobs, out| {
        if jobs.is_empty() {
            let _ = writeln!(out, "{NO_JOBS}");
            return;
        }
        for job in jobs {
            job_card(job, out);
        }
    })
}

pub fn job_detail(state: &ResourceState<JobDetailBundle>, retry_hint: &str) -> String {
    render_state(state, retry_hint, |bundle, out| {
        let job = &bundle.primary;
        let _ = writeln!(out, "{}  ★ {}", job.title, job.rating);
        let _ = writeln!(
            out,
            "{} | {} | {}",
            job.location,
            job.employment_type,
            job.package_per_annum.as_deref().unwrap_or("-")
        );
        let _ = writeln!(out, "Visit: {}", job.company_website_url);
        let _ = writeln!(out, "\nDescription\n{}", job.job_description);
        let skills: Vec<&str> = job.skills.iter().map(|s| s.name.as_str()).collect();
        let _ = writeln!(out, "\nSkills: {}", skills.join(", "));
        let _ = writeln!(
            out,
            "\nLife at Company\n{}",
            job.life_at_company.description
        );
        if !bundle.related.is_empty() {
            let _ = writeln!(out, "\nSimilar Jobs");
            for similar in &bundle.related {
                job_card(similar, out);
            }
        }
    })
}

fn job_card(job: &JobSummary, out: &mut String) {
    let _ = writeln!(out, "[{}] {}  ★ {}", job.id, job.title, job.rating);
    let _ = write!(out, "    {} | {}", job.location, job.employment_type);
    if let Some(package) = &job.package_per_annum {
        let _ = write!(out, " | {package}");
    }
    let _ = writeln!(out, "\n    {}", job.job_description);
}

pub fn filter_help() -> String {
    let mut out = String::from("Type of Employment:\n");
    for kind in EMPLOYMENT_TYPES {
        let _ = writeln!(out, "  {:<12} {}", kind.id, kind.label);
    }
    out.push_str("Salary Range:\n");
    for tier in SALARY_TIERS {
        let _ = writeln!(out, "  {:<12} {}", tier.minimum_package, tier.label);
    }
    out
}

pub fn json<T: serde::Serialize>(state: &ResourceState<T>) -> String {
    serde_json::to_string_pretty(state).unwrap_or_else(|err| format!("{{\"error\": \"{err}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobby_core::{update_resource, ErrorKind, FetchMsg, StaleResponsePolicy};

    fn resolved<T>(outcome: Result<T, ErrorKind>) -> ResourceState<T> {
        let state = update_resource(
            ResourceState::new(),
            FetchMsg::Triggered,
            StaleResponsePolicy::ApplyAll,
        );
        let seq = state.latest_issued();
        update_resource(
            state,
            FetchMsg::Resolved { seq, outcome },
            StaleResponsePolicy::ApplyAll,
        )
    }

    fn job(id: &str) -> JobSummary {
        JobSummary {
            id: id.to_string(),
            title: "Backend Engineer".to_string(),
            company_logo_url: "l".to_string(),
            employment_type: "Full Time".to_string(),
            location: "Delhi".to_string(),
            package_per_annum: Some("21 LPA".to_string()),
            rating: 4.0,
            job_description: "Build APIs".to_string(),
        }
    }

    #[test]
    fn idle_renders_nothing() {
        assert_eq!(jobs(&ResourceState::new(), ""), "");
    }

    #[test]
    fn empty_success_shows_no_jobs_view() {
        let out = jobs(&resolved(Ok(Vec::new())), "");
        assert!(out.starts_with("No Jobs Found"));
    }

    #[test]
    fn success_lists_jobs() {
        let out = jobs(&resolved(Ok(vec![job("a"), job("b")])), "");
        assert!(out.contains("[a] Backend Engineer"));
        assert!(out.contains("[b] Backend Engineer"));
        assert!(out.contains("Delhi | Full Time | 21 LPA"));
    }

    #[test]
    fn failure_shows_retry_hint_and_stale_data() {
        let state = resolved(Ok(vec![job("a")]));
        let state = update_resource(state, FetchMsg::Triggered, StaleResponsePolicy::ApplyAll);
        let loading = jobs(&state, "");
        assert!(loading.starts_with(LOADING));
        assert!(loading.contains("[a]"));

        let seq = state.latest_issued();
        let state = update_resource(
            state,
            FetchMsg::Resolved {
                seq,
                outcome: Err(ErrorKind::RequestFailed),
            },
            StaleResponsePolicy::ApplyAll,
        );
        let out = jobs(&state, "type `retry`");
        assert!(out.starts_with("Oops! Something went wrong"));
        assert!(out.contains("(request failed) type `retry`"));
        assert!(out.contains("-- previous result --"));
        assert!(out.contains("[a]"));
    }

    #[test]
    fn json_includes_status_and_data() {
        let out = json(&resolved(Ok(vec![job("a")])));
        assert!(out.contains("\"status\": \"Success\""));
        assert!(out.contains("\"id\": \"a\""));
    }

    #[test]
    fn filter_help_lists_catalogs() {
        let out = filter_help();
        assert!(out.contains("FULLTIME"));
        assert!(out.contains("40 LPA and above"));
    }
}
