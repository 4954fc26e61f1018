use crate::cmd::connect;
use crate::modules::render;
use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::Args;
use code_arena_libs::{
    models::{Problem, SolvedProblem, User},
    stats::{
        activity_by_day, difficulty_breakdown, progress_percent, DifficultyBreakdown,
        DEFAULT_ACTIVITY_DAYS, MAX_ACTIVITY_DAYS,
    },
    ArenaApi,
};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct ProfileArgs {
    /// Length of the activity calendar in days (1 to 366)
    #[arg(
        long,
        default_value_t = DEFAULT_ACTIVITY_DAYS,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_ACTIVITY_DAYS))
    )]
    days: u32,
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProfileSummary {
    user: User,
    solved_count: usize,
    total_problems: usize,
    progress_percent: u32,
    breakdown: DifficultyBreakdown,
    activity: Vec<(NaiveDate, usize)>,
    solved: Vec<SolvedProblem>,
}

pub(crate) fn summarize(
    user: User,
    solved: Vec<SolvedProblem>,
    problems: &[Problem],
    today: NaiveDate,
    days: u32,
) -> ProfileSummary {
    ProfileSummary {
        solved_count: solved.len(),
        total_problems: problems.len(),
        progress_percent: progress_percent(solved.len(), problems.len()),
        breakdown: difficulty_breakdown(&solved),
        activity: activity_by_day(&solved, today, days),
        user,
        solved,
    }
}

pub(crate) async fn load<A>(api: &A, today: NaiveDate, days: u32) -> Result<ProfileSummary>
where
    A: ArenaApi + Sync,
{
    let (user, solved, problems) = futures::try_join!(
        api.current_user(),
        api.solved_problems(),
        api.all_problems()
    )
    .with_context(|| {
        let message = "failed to load profile. ARENA_SESSION_TOKEN must hold a valid session";
        tracing::error!(message);
        message
    })?;

    Ok(summarize(user, solved, &problems, today, days))
}

fn describe(summary: &ProfileSummary) -> String {
    let user = &summary.user;
    let mut lines = vec![format!("[{}] {}", user.initial(), user.full_name())];
    if let Some(role) = user.role.as_deref() {
        lines.push(format!("Role: {}", role));
    }
    if let Some(email) = user.email_id.as_deref() {
        lines.push(format!("Email: {}", email));
    }
    if let Some(created_at) = user.created_at {
        lines.push(format!("Joined: {}", created_at.format("%Y-%m-%d")));
    }

    lines.push(format!(
        "Solved: {}/{} ({}%)",
        summary.solved_count, summary.total_problems, summary.progress_percent
    ));
    lines.push(render::breakdown_line(&summary.breakdown));
    lines.push(format!(
        "Activity (last {} days): {}",
        summary.activity.len(),
        render::activity_strip(&summary.activity)
    ));

    if summary.solved.is_empty() {
        lines.push(String::from("No problems solved yet."));
    } else {
        lines.push(String::from("Solved problems:"));
        lines.extend(summary.solved.iter().map(|problem| {
            let difficulty = problem
                .difficulty
                .map(|difficulty| difficulty.to_string())
                .unwrap_or_else(|| String::from("-"));
            format!("  {} [{}]", problem.title, difficulty)
        }));
    }

    lines.join("\n")
}

pub async fn run(args: ProfileArgs) -> Result<()> {
    let client = connect()?;
    let today = Utc::now().date_naive();
    let summary = load(&client, today, args.days).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", describe(&summary));
    }
    Ok(())
}
