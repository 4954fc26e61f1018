use crate::cmd::connect;
use crate::modules::render;
use anyhow::{Context, Result};
use clap::Args;
use code_arena_libs::{compute_ranks, models::RankedUser, sort_by_solved_desc, ArenaApi};

#[derive(Debug, Args)]
pub struct LeaderboardArgs {
    /// Only show the first N rows
    #[arg(short, long)]
    limit: Option<usize>,
    #[arg(long)]
    json: bool,
}

pub async fn run(args: LeaderboardArgs) -> Result<()> {
    let client = connect()?;
    let mut ranked = load(&client).await?;
    if let Some(limit) = args.limit {
        ranked.truncate(limit);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else {
        println!("{}", render::leaderboard_table(&ranked));
    }
    Ok(())
}

pub(crate) async fn load<A>(api: &A) -> Result<Vec<RankedUser>>
where
    A: ArenaApi + Sync,
{
    let mut users = api.all_users().await.with_context(|| {
        let message = "Failed to load leaderboard data.";
        tracing::error!(message);
        message
    })?;
    tracing::info!("{} users fetched", users.len());

    sort_by_solved_desc(&mut users);
    Ok(compute_ranks(users))
}
