use crate::cmd::connect;
use crate::modules::render;
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use code_arena_libs::{draft::ProblemDraft, ArenaApi};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct AdminArgs {
    #[command(subcommand)]
    command: AdminCommands,
}

#[derive(Debug, Subcommand)]
enum AdminCommands {
    /// List every problem with its id
    List,
    /// Print a blank problem draft
    Template,
    /// Print an existing problem as an editable draft
    Export { id: String },
    /// Create a problem from a draft file
    Create { path: PathBuf },
    /// Replace a problem with the contents of a draft file
    Update { id: String, path: PathBuf },
}

async fn read_draft(path: &Path) -> Result<ProblemDraft> {
    let content = tokio::fs::read_to_string(path).await.with_context(|| {
        let message = format!("failed to read draft file {}", path.display());
        tracing::error!(message);
        message
    })?;
    parse_draft(&content).with_context(|| format!("in draft file {}", path.display()))
}

/// Parse and validate a draft document.
pub(crate) fn parse_draft(content: &str) -> Result<ProblemDraft> {
    let draft: ProblemDraft = serde_json::from_str(content).with_context(|| {
        let message = "failed to parse problem draft";
        tracing::error!(message);
        message
    })?;

    if let Err(e) = draft.check() {
        let message = e.to_string().replace('\n', ", ");
        tracing::error!(message);
        anyhow::bail!(message);
    }
    Ok(draft)
}

pub(crate) async fn export<A>(api: &A, id: &str) -> Result<ProblemDraft>
where
    A: ArenaApi + Sync,
{
    let problem = api.problem_by_id(id).await.with_context(|| {
        let message = format!("failed to fetch problem {}", id);
        tracing::error!(message);
        message
    })?;
    Ok(ProblemDraft::try_from(problem)?)
}

pub(crate) async fn save<A>(api: &A, id: Option<&str>, draft: &ProblemDraft) -> Result<()>
where
    A: ArenaApi + Sync,
{
    let saved = match id {
        Some(id) => api.update_problem(id, draft).await,
        None => api.create_problem(draft).await,
    };
    saved.with_context(|| {
        let message = match id {
            Some(id) => format!("failed to update problem {}", id),
            None => format!("failed to create problem {}", draft.title),
        };
        tracing::error!(message);
        message
    })?;

    match id {
        Some(id) => tracing::info!("Problem {} updated successfully", id),
        None => tracing::info!("Problem {} created successfully", draft.title),
    }
    Ok(())
}

pub async fn run(args: AdminArgs) -> Result<()> {
    match args.command {
        AdminCommands::List => {
            let client = connect()?;
            let problems = client.all_problems().await.with_context(|| {
                let message = "failed to fetch problem list";
                tracing::error!(message);
                message
            })?;
            println!("{}", render::admin_table(&problems));
        }
        AdminCommands::Template => {
            println!("{}", serde_json::to_string_pretty(&ProblemDraft::template())?);
        }
        AdminCommands::Export { id } => {
            let client = connect()?;
            let draft = export(&client, &id).await?;
            println!("{}", serde_json::to_string_pretty(&draft)?);
        }
        AdminCommands::Create { path } => {
            let draft = read_draft(&path).await?;
            let client = connect()?;
            save(&client, None, &draft).await?;
        }
        AdminCommands::Update { id, path } => {
            let draft = read_draft(&path).await?;
            let client = connect()?;
            save(&client, Some(&id), &draft).await?;
        }
    }
    Ok(())
}
