use crate::cmd::{connect, parse_language};
use crate::modules::render;
use anyhow::{Context, Result};
use clap::Args;
use code_arena_libs::{
    models::{CodeRequest, Language, RunResult, SubmitResult},
    ArenaApi,
};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct JudgeArgs {
    /// Problem id
    id: String,
    /// cpp, java or javascript
    #[arg(short, long, value_parser = parse_language)]
    language: Language,
    /// Source file holding the solution
    #[arg(short, long)]
    file: PathBuf,
}

async fn read_source(path: &Path) -> Result<String> {
    let code = tokio::fs::read_to_string(path).await.with_context(|| {
        let message = format!("failed to read source file {}", path.display());
        tracing::error!(message);
        message
    })?;

    if code.trim().is_empty() {
        let message = format!("source file {} is empty", path.display());
        tracing::error!(message);
        anyhow::bail!(message);
    }
    Ok(code)
}

pub(crate) async fn run_source<A>(
    api: &A,
    id: &str,
    language: Language,
    code: &str,
) -> Result<RunResult>
where
    A: ArenaApi + Sync,
{
    let request = CodeRequest::new(code, language);
    tracing::info!("running {} solution against problem {}", language, id);
    api.run_code(id, &request).await.with_context(|| {
        let message = format!("failed to run code for problem {}", id);
        tracing::error!(message);
        message
    })
}

pub(crate) async fn submit_source<A>(
    api: &A,
    id: &str,
    language: Language,
    code: &str,
) -> Result<SubmitResult>
where
    A: ArenaApi + Sync,
{
    let request = CodeRequest::new(code, language);
    tracing::info!("submitting {} solution for problem {}", language, id);
    api.submit_code(id, &request).await.with_context(|| {
        let message = format!("failed to submit code for problem {}", id);
        tracing::error!(message);
        message
    })
}

pub async fn run(args: JudgeArgs) -> Result<()> {
    let code = read_source(&args.file).await?;
    let client = connect()?;
    let result = run_source(&client, &args.id, args.language, &code).await?;
    println!("{}", render::run_report(&result));
    Ok(())
}

pub async fn submit(args: JudgeArgs) -> Result<()> {
    let code = read_source(&args.file).await?;
    let client = connect()?;
    let result = submit_source(&client, &args.id, args.language, &code).await?;
    println!("{}", render::submit_report(&result));
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cmd::fake::FakeArena;
    use clap::Parser;
    use code_arena_libs::models::{HiddenTestCase, Problem};

    #[derive(Debug, Parser)]
    struct Cli {
        #[command(flatten)]
        args: JudgeArgs,
    }

    fn arena() -> FakeArena {
        FakeArena {
            problems: vec![Problem {
                id: String::from("p1"),
                hidden_test_cases: vec![HiddenTestCase::default(); 2],
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_args() {
        let cli = Cli::parse_from(["run", "p1", "--language", "C++", "-f", "main.cpp"]);
        assert_eq!(cli.args.id, "p1");
        assert_eq!(cli.args.language, Language::Cpp);
        assert_eq!(cli.args.file, PathBuf::from("main.cpp"));

        assert!(Cli::try_parse_from(["run", "p1", "-f", "main.cpp"]).is_err());
    }

    #[tokio::test]
    async fn test_read_source() {
        let dir = std::env::temp_dir();
        let pid = std::process::id();
        let empty = dir.join(format!("code_arena_judge_empty_{}.js", pid));
        let filled = dir.join(format!("code_arena_judge_filled_{}.js", pid));
        tokio::fs::write(&empty, "  \n").await.unwrap();
        tokio::fs::write(&filled, "console.log(1);\n").await.unwrap();

        assert!(read_source(&empty).await.is_err());
        assert_eq!(read_source(&filled).await.unwrap(), "console.log(1);\n");
        let missing = dir.join(format!("code_arena_judge_missing_{}.js", pid));
        assert!(read_source(&missing).await.is_err());

        tokio::fs::remove_file(&empty).await.unwrap();
        tokio::fs::remove_file(&filled).await.unwrap();
    }

    #[tokio::test]
    async fn test_run_and_submit() {
        let arena = arena();

        let result = run_source(&arena, "p1", Language::JavaScript, "x")
            .await
            .unwrap();
        assert!(result.success);

        let result = submit_source(&arena, "p1", Language::JavaScript, "x")
            .await
            .unwrap();
        assert!(result.accepted);
        assert_eq!(result.total_test_cases, 2);

        let error = run_source(&arena, "nope", Language::Java, "x")
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), "failed to run code for problem nope");
        let error = submit_source(&arena, "nope", Language::Java, "x")
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), "failed to submit code for problem nope");
    }
}
