//! Command dispatch.
//! 命令分发。

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use cad_app::{AppDeps, RegistrationSession, SubmitOutcome};
use cad_core::{FieldId, RegistrantProfile, ValidationEngine};
use tracing::{info, info_span, Instrument};

use super::{resolve_config, wire_dependencies};
use crate::adapters::ConsoleNotice;
use crate::cli::{Cli, Command};

pub async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = resolve_config(cli.config.as_deref())?;
    let deps = wire_dependencies(&config, Arc::new(ConsoleNotice::stdout()))
        .context("Failed to wire dependencies")?;

    match cli.command {
        Command::Submit { profile } => {
            let outcome = submit_profile(&deps, &profile).await?;
            if let SubmitOutcome::Blocked { errors } = &outcome {
                for (field, message) in errors {
                    println!("  {}: {}", field.label(), message);
                }
            }
            Ok(exit_code(&outcome))
        }
        Command::Liveness => {
            let session_id = deps
                .create_liveness_session()
                .execute()
                .await
                .context("Failed to create liveness session")?;
            println!("{session_id}");
            Ok(ExitCode::SUCCESS)
        }
        Command::Municipalities => {
            let catalog = deps.load_municipality_catalog().execute().await?;
            for option in catalog.options() {
                println!("{}\t{}", option.value, option.label);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Replay a saved profile through a fresh form and submit it.
///
/// Each field is entered and blurred in form order, as a user would. Ctrl-C
/// tears the session down and cancels a pending submission.
pub async fn submit_profile(
    deps: &AppDeps,
    profile_path: &Path,
) -> anyhow::Result<SubmitOutcome> {
    let span = info_span!("command.submit", path = %profile_path.display());

    async {
        let raw = tokio::fs::read_to_string(profile_path)
            .await
            .with_context(|| format!("Failed to read profile: {}", profile_path.display()))?;
        let profile: RegistrantProfile =
            serde_json::from_str(&raw).context("Failed to parse profile JSON")?;

        let catalog = deps.load_municipality_catalog().execute().await?;
        let session = RegistrationSession::new(ValidationEngine::new(Arc::new(catalog)));
        for field in FieldId::ALL {
            session.set_field(field, profile.value(field));
            session.touch_field(field, None);
        }

        let interrupt = tokio::spawn({
            let session = session.clone();
            async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    session.teardown();
                }
            }
        });

        let outcome = deps.submit_registration().execute(&session).await;
        interrupt.abort();

        info!(?outcome, "Submit command finished");
        Ok(outcome)
    }
    .instrument(span)
    .await
}

fn exit_code(outcome: &SubmitOutcome) -> ExitCode {
    match outcome {
        SubmitOutcome::Submitted => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}
