use crate::cmd::{connect, parse_language};
use crate::modules::render;
use anyhow::{Context, Result};
use clap::Args;
use code_arena_libs::{
    models::{Language, Problem},
    ArenaApi,
};

#[derive(Debug, Args)]
pub struct ShowArgs {
    id: String,
    /// Language of the starter code to print
    #[arg(short, long, value_parser = parse_language, default_value = "javascript")]
    language: Language,
    /// Also print the reference solution
    #[arg(long)]
    solution: bool,
}

pub(crate) async fn load<A>(api: &A, id: &str) -> Result<Problem>
where
    A: ArenaApi + Sync,
{
    api.problem_by_id(id).await.with_context(|| {
        let message = format!("failed to fetch problem {}", id);
        tracing::error!(message);
        message
    })
}

fn describe(problem: &Problem, language: Language, solution: bool) -> String {
    let mut text = render::problem_detail(problem, language);
    if solution {
        match problem.reference_code(language) {
            Some(code) if !code.is_empty() => {
                text.push_str(&format!("\n\nReference solution ({}):\n{}", language, code));
            }
            _ => {
                tracing::warn!("problem {} has no {} reference solution", problem.id, language);
            }
        }
    }
    text
}

pub async fn run(args: ShowArgs) -> Result<()> {
    let client = connect()?;
    let problem = load(&client, &args.id).await?;
    println!("{}", describe(&problem, args.language, args.solution));
    Ok(())
}
