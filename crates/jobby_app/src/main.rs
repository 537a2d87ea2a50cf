mod cli;
mod config;
mod logging;
mod render;
mod session;

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use jobby_core::{FetchStatus, FilterCriteria, ResourceState};
use jobby_engine::{
    ApiEndpoint, ControllerContext, FileCredentialStore, JobDetailController, JobListController,
    ProfileController, ReqwestTransport,
};
use jobby_logging::jobby_info;

use cli::{Cli, Commands};
use config::AppConfig;

const RETRY_HINT: &str = "run the command again to retry";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref())?;
    logging::initialize(config.log_destination, cli.verbose);

    let store = Arc::new(FileCredentialStore::new(config.token_path()));

    match cli.command {
        Commands::Login { token } => {
            store.set(&token).with_context(|| {
                format!("failed to store token at {}", store.path().display())
            })?;
            println!("Token saved to {}", store.path().display());
            Ok(())
        }
        Commands::Logout => {
            store
                .try_clear()
                .with_context(|| format!("failed to remove {}", store.path().display()))?;
            println!("Logged out");
            Ok(())
        }
        Commands::Profile => {
            let (endpoint, ctx) = wire(&config, store)?;
            let controller = ProfileController::profile(endpoint, ctx);
            controller.trigger().await;
            let state = controller.state();
            emit(&state, cli.json, render::profile(&state, RETRY_HINT))
        }
        Commands::Jobs {
            employment_types,
            min_package,
            search,
            interactive,
        } => {
            let (endpoint, ctx) = wire(&config, store)?;
            let jobs = JobListController::job_list(endpoint.clone(), ctx.clone());

            if interactive {
                return session::run(&jobs, cli.json).await;
            }

            let mut criteria = FilterCriteria::new();
            for tag in &employment_types {
                criteria = criteria.with_employment_type(tag);
            }
            if let Some(floor) = min_package {
                criteria.set_salary_floor(floor);
            }
            if let Some(term) = search {
                criteria.set_search_term(term);
            }

            let profile = ProfileController::profile(endpoint, ctx);
            tokio::join!(profile.trigger(), jobs.on_criteria_changed(criteria));

            let profile_state = profile.state();
            if !cli.json && profile_state.status() == FetchStatus::Success {
                println!("{}", render::profile(&profile_state, RETRY_HINT));
            }
            let state = jobs.state();
            emit(&state, cli.json, render::jobs(&state, RETRY_HINT))
        }
        Commands::Job { id } => {
            let (endpoint, ctx) = wire(&config, store)?;
            let controller = JobDetailController::job_detail(endpoint, id, ctx);
            controller.trigger().await;
            let state = controller.state();
            emit(&state, cli.json, render::job_detail(&state, RETRY_HINT))
        }
    }
}

fn wire(
    config: &AppConfig,
    store: Arc<FileCredentialStore>,
) -> Result<(ApiEndpoint, ControllerContext)> {
    let endpoint = ApiEndpoint::new(&config.api_base_url)
        .with_context(|| format!("invalid api_base_url {:?}", config.api_base_url))?;
    let transport = ReqwestTransport::new(config.transport_settings())
        .context("failed to build HTTP client")?;
    jobby_info!(
        "Using {} with token file {}",
        config.api_base_url,
        store.path().display()
    );
    let ctx = ControllerContext::new(Arc::new(transport), store)
        .with_policy(config.stale_response_policy);
    Ok((endpoint, ctx))
}

fn emit<T: serde::Serialize>(state: &ResourceState<T>, json: bool, text: String) -> Result<()> {
    if json {
        println!("{}", render::json(state));
    } else {
        print!("{text}");
    }
    if state.status() == FetchStatus::Failure {
        bail!("request failed");
    }
    Ok(())
}
