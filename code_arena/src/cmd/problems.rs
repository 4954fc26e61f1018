use crate::cmd::connect;
use crate::modules::render;
use anyhow::{Context, Result};
use clap::Args;
use code_arena_libs::{
    filter_problems,
    models::{Difficulty, Identified, Problem, SolvedProblem, Tag},
    ArenaApi, FilterSelection, Selection, StatusFilter,
};
use std::collections::HashSet;

#[derive(Debug, Args)]
pub struct ProblemsArgs {
    /// all, easy, medium or hard
    #[arg(long, default_value = "all")]
    difficulty: Selection<Difficulty>,
    /// all, array, linkedList, graph, dp, stack or queue
    #[arg(long, default_value = "all")]
    tag: Selection<Tag>,
    /// all or solved
    #[arg(long, default_value = "all")]
    status: StatusFilter,
    #[arg(long)]
    json: bool,
}

impl ProblemsArgs {
    fn selection(&self) -> FilterSelection {
        FilterSelection {
            difficulty: self.difficulty,
            tag: self.tag,
            status: self.status,
        }
    }
}

pub async fn run(args: ProblemsArgs) -> Result<()> {
    let client = connect()?;
    let selection = args.selection();
    let (problems, solved) = load(&client, &selection).await?;

    let filtered = filter_problems(&problems, &solved, &selection);
    tracing::info!(
        "{} of {} problems match difficulty={} tag={} status={}",
        filtered.len(),
        problems.len(),
        selection.difficulty,
        selection.tag,
        selection.status
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&filtered)?);
    } else {
        let solved_ids: HashSet<&str> = solved.iter().map(|problem| problem.id()).collect();
        println!("{}", render::problem_table(&filtered, &solved_ids));
    }
    Ok(())
}

/// Fetch the problem list and the solved list side by side.
///
/// The solved list needs a session. Without one it is only an error when the solved filter is
/// active; otherwise the listing goes on without solved marks.
pub(crate) async fn load<A>(
    api: &A,
    selection: &FilterSelection,
) -> Result<(Vec<Problem>, Vec<SolvedProblem>)>
where
    A: ArenaApi + Sync,
{
    let (problems, solved) = futures::join!(api.all_problems(), api.solved_problems());

    let problems = problems.with_context(|| {
        let message = "failed to fetch problem list";
        tracing::error!(message);
        message
    })?;

    let solved = match solved {
        Ok(solved) => solved,
        Err(e) if selection.status == StatusFilter::All => {
            tracing::warn!("couldn't fetch solved problems, solved marks are omitted: {}", e);
            vec![]
        }
        Err(e) => {
            let message = "the solved filter needs a session. set ARENA_SESSION_TOKEN";
            tracing::error!(message);
            return Err(anyhow::Error::new(e).context(message));
        }
    };

    Ok((problems, solved))
}
