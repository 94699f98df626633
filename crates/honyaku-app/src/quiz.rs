use std::io::Write;
use std::sync::Arc;

use honyaku_core::Corpus;
use honyaku_scoring::{QuestionSelector, QuizSession};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::report;
use crate::state::AppState;

const QUIT_WORDS: [&str; 3] = ["quit", "exit", "q"];
const SKIP_WORD: &str = "skip";
const HISTORY_WORD: &str = "history";

/// What the learner typed at the answer prompt
#[derive(Debug, PartialEq, Eq)]
enum Reply {
    Quit,
    Skip,
    History,
    Answer(String),
}

impl Reply {
    fn parse(line: &str) -> Self {
        let command = line.to_lowercase();
        if QUIT_WORDS.contains(&command.as_str()) {
            Reply::Quit
        } else if command == SKIP_WORD {
            Reply::Skip
        } else if command == HISTORY_WORD {
            Reply::History
        } else {
            Reply::Answer(line.to_string())
        }
    }
}

type Input = Lines<BufReader<Stdin>>;

/// Interactive loop until the learner quits or the input ends
pub async fn run(state: AppState, details: bool, seed: Option<u64>) -> anyhow::Result<()> {
    println!("{}", "=".repeat(60));
    println!("翻訳クイズ: 英文を日本語に訳してください");
    println!("{}", "=".repeat(60));
    println!("利用可能なドキュメント数: {}", state.store.len());

    if state.store.is_empty() {
        println!("ドキュメントがありません。先に `honyaku seed` でサンプルを追加してください。");
        return Ok(());
    }

    let scorer = state.scorer();
    let selector = QuestionSelector::new(&state.config.quiz);
    let corpus: Arc<dyn Corpus> = Arc::new(state.store);

    let mut session = QuizSession::new(corpus, scorer, selector);
    if let Some(seed) = seed {
        session = session.with_seed(seed);
    }

    let mut input = BufReader::new(tokio::io::stdin()).lines();

    println!("(`{SKIP_WORD}` で次の問題、`{HISTORY_WORD}` で最近の結果、`quit` で終了)");

    'quiz: loop {
        let Some(question) = session.next_question() else {
            println!("出題できる英文が見つかりませんでした。");
            break;
        };
        report::print_question(&question);

        let answer = loop {
            let Some(line) = prompt(&mut input, "あなたの和訳: ").await? else {
                break 'quiz;
            };
            match Reply::parse(&line) {
                Reply::Quit => {
                    println!("終了します。");
                    break 'quiz;
                }
                Reply::Skip => {
                    println!("この問題をスキップします。");
                    continue 'quiz;
                }
                Reply::History => report::print_history(session.history()),
                Reply::Answer(answer) => break answer,
            }
        };

        println!("採点中...");
        match session.score_translation(&answer).await {
            Ok(result) => report::print_result(&result, details),
            Err(e) => {
                tracing::error!("Scoring failed: {e}");
                println!("採点できませんでした: {e}");
            }
        }

        let next = prompt(&mut input, "次の問題に進みますか？ (y/n): ").await?;
        if !next.is_some_and(|answer| answer.eq_ignore_ascii_case("y")) {
            break;
        }
    }

    if let Some(stats) = session.statistics() {
        report::print_statistics(&stats);
    }
    Ok(())
}

/// Print `label` and read one trimmed line, None at end of input
async fn prompt(input: &mut Input, label: &str) -> anyhow::Result<Option<String>> {
    print!("{label}");
    std::io::stdout().flush()?;

    let line = input.next_line().await?;
    Ok(line.map(|l| l.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_ignore_case() {
        assert_eq!(Reply::parse("Q"), Reply::Quit);
        assert_eq!(Reply::parse("exit"), Reply::Quit);
        assert_eq!(Reply::parse("SKIP"), Reply::Skip);
        assert_eq!(Reply::parse("History"), Reply::History);
    }

    #[test]
    fn anything_else_is_an_answer() {
        assert_eq!(Reply::parse("猫が寝ている"), Reply::Answer("猫が寝ている".to_string()));
        assert_eq!(Reply::parse("skipping"), Reply::Answer("skipping".to_string()));
        assert_eq!(Reply::parse(""), Reply::Answer(String::new()));
    }
}
