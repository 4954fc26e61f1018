//! Plain-text rendering of command output.

use chrono::NaiveDate;
use code_arena_libs::{
    models::{Language, Problem, RankedUser, RunResult, SubmitResult},
    stats::DifficultyBreakdown,
    Labeled,
};
use itertools::Itertools;
use std::collections::HashSet;

const TITLE_WIDTH: usize = 40;

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        value.to_string()
    } else {
        let head: String = value.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}

fn difficulty_label(problem: &Problem) -> &'static str {
    problem
        .difficulty
        .map(|difficulty| difficulty.label())
        .unwrap_or("-")
}

fn tags_label(problem: &Problem) -> String {
    if problem.tags.is_empty() {
        String::from("-")
    } else {
        problem.tags.iter().map(|tag| tag.label()).join(",")
    }
}

pub fn problem_table(problems: &[&Problem], solved_ids: &HashSet<&str>) -> String {
    if problems.is_empty() {
        return String::from("No problems found.");
    }

    let header = format!(
        "{:<4} {:<width$} {:<8} {:<16} {}",
        "#",
        "Title",
        "Level",
        "Tags",
        "Solved",
        width = TITLE_WIDTH
    );
    let rows = problems.iter().enumerate().map(|(index, problem)| {
        format!(
            "{:<4} {:<width$} {:<8} {:<16} {}",
            index + 1,
            truncate(&problem.title, TITLE_WIDTH),
            difficulty_label(problem),
            tags_label(problem),
            if solved_ids.contains(problem.id.as_str()) { "yes" } else { "" },
            width = TITLE_WIDTH
        )
        .trim_end()
        .to_string()
    });

    std::iter::once(header.trim_end().to_string())
        .chain(rows)
        .join("\n")
}

pub fn leaderboard_table(users: &[RankedUser]) -> String {
    if users.is_empty() {
        return String::from("No data available.");
    }

    users
        .iter()
        .map(|ranked| {
            format!(
                "{:>5}  [{}] {:<24} {} solved",
                format!("#{}", ranked.rank),
                ranked.user.initial(),
                truncate(ranked.user.display_name(), 24),
                ranked.solved_count
            )
        })
        .join("\n")
}

pub fn breakdown_line(breakdown: &DifficultyBreakdown) -> String {
    format!(
        "easy {}  medium {}  hard {}",
        breakdown.easy, breakdown.medium, breakdown.hard
    )
}

/// One cell per day: `.` none, `-` one, `+` two, `#` three or more.
pub fn activity_strip(activity: &[(NaiveDate, usize)]) -> String {
    activity
        .iter()
        .map(|(_, count)| match count {
            0 => '.',
            1 => '-',
            2 => '+',
            _ => '#',
        })
        .collect()
}

pub fn problem_detail(problem: &Problem, language: Language) -> String {
    let mut sections = vec![
        format!(
            "{}\n[{}] {}",
            problem.title,
            difficulty_label(problem),
            tags_label(problem)
        ),
        problem.description.clone(),
    ];

    for (index, case) in problem.visible_test_cases.iter().enumerate() {
        sections.push(format!(
            "Example {}:\n  Input: {}\n  Output: {}\n  Explanation: {}",
            index + 1,
            case.input,
            case.output,
            case.explanation
        ));
    }

    let starter = problem.starter_code(language);
    if !starter.is_empty() {
        sections.push(format!("Starter code ({}):\n{}", language, starter));
    }

    sections.join("\n\n")
}

/// Admin listing: ids are shown so problems can be exported or updated.
pub fn admin_table(problems: &[Problem]) -> String {
    if problems.is_empty() {
        return String::from("No problems found.");
    }

    problems
        .iter()
        .map(|problem| {
            format!(
                "{:<26} {:<8} {:<16} {}",
                problem.id,
                difficulty_label(problem),
                tags_label(problem),
                truncate(&problem.title, TITLE_WIDTH)
            )
        })
        .join("\n")
}

fn runtime_line(runtime: Option<f64>, memory: Option<u64>) -> String {
    format!(
        "Runtime: {} sec  Memory: {} KB",
        runtime.map(|r| r.to_string()).unwrap_or_else(|| String::from("-")),
        memory.map(|m| m.to_string()).unwrap_or_else(|| String::from("-"))
    )
}

pub fn run_report(result: &RunResult) -> String {
    let mut lines = vec![];
    if result.success {
        lines.push(String::from("All test cases passed"));
        lines.push(runtime_line(result.runtime, result.memory));
    } else {
        lines.push(
            result
                .error
                .clone()
                .unwrap_or_else(|| String::from("Some test cases failed")),
        );
    }

    for (index, case) in result.test_cases.iter().enumerate() {
        lines.push(format!(
            "Case {}: {}\n  Input: {}\n  Expected: {}\n  Output: {}",
            index + 1,
            if case.passed() { "passed" } else { "failed" },
            case.stdin,
            case.expected_output,
            case.stdout
        ));
    }

    lines.join("\n")
}

pub fn submit_report(result: &SubmitResult) -> String {
    let headline = if result.accepted {
        String::from("Accepted")
    } else {
        result
            .error
            .clone()
            .unwrap_or_else(|| String::from("Rejected"))
    };
    let mut lines = vec![
        headline,
        format!(
            "Test cases passed: {}/{}",
            result.passed_test_cases, result.total_test_cases
        ),
    ];
    if result.accepted {
        lines.push(runtime_line(result.runtime, result.memory));
    }
    lines.join("\n")
}

#[cfg(test)]
mod test {
    use super::*;
    use code_arena_libs::models::{
        Difficulty, ProblemRef, RunTestCase, StartCode, Tag, User, VisibleTestCase,
    };

    fn problem(id: &str, title: &str, difficulty: Option<Difficulty>, tags: &[Tag]) -> Problem {
        Problem {
            id: String::from(id),
            title: String::from(title),
            difficulty,
            tags: tags.to_vec(),
            ..Default::default()
        }
    }

    #[test]
    fn test_problem_table() {
        let two_sum = problem("1", "Two Sum", Some(Difficulty::Easy), &[Tag::Array]);
        let odd = problem("2", "Odd", None, &[]);
        let solved = HashSet::from(["1"]);

        let table = problem_table(&[&two_sum, &odd], &solved);
        let lines = table.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("#    Title"));
        assert!(lines[1].starts_with("1    Two Sum"));
        assert!(lines[1].contains("easy"));
        assert!(lines[1].contains("array"));
        assert!(lines[1].ends_with("yes"));
        assert!(lines[2].starts_with("2    Odd"));
        assert!(!lines[2].ends_with("yes"));
        assert_eq!(problem_table(&[], &HashSet::new()), "No problems found.");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
    }

    #[test]
    fn test_leaderboard_table() {
        let ranked = vec![
            RankedUser {
                user: User {
                    first_name: Some(String::from("ada")),
                    problem_solved: vec![ProblemRef::Id(String::from("p1"))],
                    ..Default::default()
                },
                rank: 1,
                solved_count: 1,
            },
            RankedUser {
                user: User::default(),
                rank: 2,
                solved_count: 0,
            },
        ];

        let table = leaderboard_table(&ranked);
        let lines = table.lines().collect::<Vec<_>>();
        assert!(lines[0].trim_start().starts_with("#1  [A] ada "));
        assert!(lines[0].ends_with(" 1 solved"));
        assert!(lines[1].contains("Anonymous"));
        assert!(lines[1].ends_with("0 solved"));
        assert_eq!(leaderboard_table(&[]), "No data available.");
    }

    #[test]
    fn test_admin_table() {
        let problems = vec![
            problem("64b0c1", "Two Sum", Some(Difficulty::Easy), &[Tag::Array]),
            problem("64b0c2", "Paths", Some(Difficulty::Hard), &[Tag::Graph, Tag::Dp]),
        ];

        let table = admin_table(&problems);
        let lines = table.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("64b0c1 "));
        assert!(lines[0].ends_with(" Two Sum"));
        assert!(lines[1].contains("graph,dp"));
        assert_eq!(admin_table(&[]), "No problems found.");
    }

    #[test]
    fn test_activity_strip() {
        let day = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        let activity = vec![(day, 0), (day, 1), (day, 2), (day, 7)];
        assert_eq!(activity_strip(&activity), ".-+#");
    }

    #[test]
    fn test_problem_detail() {
        let mut detail = problem("1", "Two Sum", Some(Difficulty::Easy), &[Tag::Array]);
        detail.description = String::from("Find two numbers.");
        detail.visible_test_cases = vec![VisibleTestCase {
            input: String::from("[2,7] 9"),
            output: String::from("[0,1]"),
            explanation: String::from("2 + 7 = 9"),
        }];
        detail.start_code = vec![StartCode {
            language: Language::JavaScript,
            boiler_code: String::from("main()"),
            user_code: String::from("function twoSum() {}"),
        }];

        let text = problem_detail(&detail, Language::JavaScript);
        assert!(text.starts_with("Two Sum\n[easy] array"));
        assert!(text.contains("Example 1:\n  Input: [2,7] 9"));
        assert!(text.ends_with("Starter code (JavaScript):\nfunction twoSum() {}"));

        let without_starter = problem_detail(&detail, Language::Cpp);
        assert!(!without_starter.contains("Starter code"));
    }

    #[test]
    fn test_reports() {
        let run = RunResult {
            success: false,
            test_cases: vec![RunTestCase {
                stdin: String::from("1"),
                expected_output: String::from("2"),
                stdout: String::from("3"),
                status_id: Some(4),
            }],
            ..Default::default()
        };
        let report = run_report(&run);
        assert!(report.starts_with("Some test cases failed"));
        assert!(report.contains("Case 1: failed"));

        let submit = SubmitResult {
            accepted: true,
            passed_test_cases: 5,
            total_test_cases: 5,
            runtime: Some(0.5),
            memory: Some(2048),
            error: None,
        };
        assert_eq!(
            submit_report(&submit),
            "Accepted\nTest cases passed: 5/5\nRuntime: 0.5 sec  Memory: 2048 KB"
        );
    }
}
