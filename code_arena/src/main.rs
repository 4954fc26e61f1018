mod cmd;
mod modules;

use crate::cmd::{
    admin::{self, AdminArgs},
    judge::{self, JudgeArgs},
    leaderboard::{self, LeaderboardArgs},
    problems::{self, ProblemsArgs},
    profile::{self, ProfileArgs},
    show::{self, ShowArgs},
};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use std::{env, io, str::FromStr};
use tokio::runtime::Builder;
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt::{self, time::OffsetTime},
};

#[derive(Debug, Parser)]
#[command(name = "code_arena")]
#[command(about = "Terminal client for the Code Arena practice platform")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List problems, optionally filtered by difficulty, tag and solved status
    Problems(ProblemsArgs),
    /// Show users ranked by number of solved problems
    Leaderboard(LeaderboardArgs),
    /// Show the signed-in user's progress
    Profile(ProfileArgs),
    /// Show a problem statement with its starter code
    Show(ShowArgs),
    /// Run code against the visible test cases
    Run(JudgeArgs),
    /// Submit code against every test case
    Submit(JudgeArgs),
    /// Problem authoring
    Admin(AdminArgs),
}

fn main() {
    dotenv().ok();

    let log_level = env::var("RUST_LOG").unwrap_or(String::from("info"));
    let filter = EnvFilter::builder()
        .with_default_directive(
            LevelFilter::from_str(&log_level)
                .unwrap_or(LevelFilter::INFO)
                .into(),
        )
        .from_env_lossy();
    let format = fmt::format()
        .with_level(true)
        .with_target(true)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_timer(OffsetTime::local_rfc_3339().expect("couldn't determine local time offset"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .event_format(format)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("failed to set tracing subscriber");

    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("failed to build tokio runtime");

    let result = match Cli::parse().command {
        Commands::Problems(args) => runtime.block_on(problems::run(args)),
        Commands::Leaderboard(args) => runtime.block_on(leaderboard::run(args)),
        Commands::Profile(args) => runtime.block_on(profile::run(args)),
        Commands::Show(args) => runtime.block_on(show::run(args)),
        Commands::Run(args) => runtime.block_on(judge::run(args)),
        Commands::Submit(args) => runtime.block_on(judge::submit(args)),
        Commands::Admin(args) => runtime.block_on(admin::run(args)),
    };

    if let Err(e) = result {
        tracing::error!("command failed: {:?}", e);
        std::process::exit(1);
    }
}
