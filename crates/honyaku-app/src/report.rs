use honyaku_types::{DiffPart, DiffTag, QuizStatistics, ScoreResult, SentencePair};

const RULE_WIDTH: usize = 60;

/// Entries shown by the quiz `history` command
pub const HISTORY_LIMIT: usize = 10;

fn rule(c: char) -> String {
    c.to_string().repeat(RULE_WIDTH)
}

pub fn print_question(question: &SentencePair) {
    println!();
    println!("以下の英文を和訳してください:");
    println!("{}", rule('-'));
    println!("{}", question.english);
    println!("{}", rule('-'));
    println!("出典: {}", question.source);
}

pub fn print_result(result: &ScoreResult, details: bool) {
    println!();
    println!("{}", rule('='));
    println!("採点結果");
    println!("{}", rule('='));
    println!("スコア: {}点", result.score);
    println!("グレード: {}", result.grade);
    println!("フィードバック: {}", result.feedback);
    if let Some(reference) = &result.reference_translation {
        println!("模範解答: {reference}");
    }
    println!("{}", rule('='));

    if details {
        print_trace(result);
    }
}

fn print_trace(result: &ScoreResult) {
    let trace = &result.scoring_details;
    if trace.steps.is_empty() {
        return;
    }

    println!();
    println!("採点の詳細:");
    for step in &trace.steps {
        println!("  {step}");
    }

    if !trace.diff_parts.is_empty() {
        println!();
        println!("差分 ([-削除] [+追加] [回答→正解]):");
        println!("  {}", render_diff(&trace.diff_parts));
    }
}

/// Inline diff of the answer against the reference
pub fn render_diff(parts: &[DiffPart]) -> String {
    parts
        .iter()
        .map(|part| match part.tag {
            DiffTag::Match => part.user_segment.clone(),
            DiffTag::Replace => format!("[{}→{}]", part.user_segment, part.ref_segment),
            DiffTag::Delete => format!("[-{}]", part.user_segment),
            DiffTag::Insert => format!("[+{}]", part.ref_segment),
        })
        .collect()
}

/// Last `limit` results, oldest first, numbered by their place in the session
pub fn recent_results(history: &[ScoreResult], limit: usize) -> Vec<String> {
    let skip = history.len().saturating_sub(limit);
    history
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(i, result)| format!("{}. [{}] {}点 {}", i + 1, result.grade, result.score, result.english))
        .collect()
}

pub fn print_history(history: &[ScoreResult]) {
    println!();
    if history.is_empty() {
        println!("まだ採点結果がありません。");
        return;
    }
    println!("最近の結果 (最大{HISTORY_LIMIT}件):");
    for line in recent_results(history, HISTORY_LIMIT) {
        println!("  {line}");
    }
}

pub fn print_statistics(stats: &QuizStatistics) {
    println!();
    println!("{}", rule('='));
    println!("学習統計");
    println!("{}", rule('='));
    println!("総問題数: {}", stats.total_questions);
    println!("平均スコア: {:.1}点", stats.average_score);
    println!("最高スコア: {}点", stats.highest_score);
    println!("最低スコア: {}点", stats.lowest_score);
    println!();
    println!("グレード分布:");
    for (grade, count) in &stats.grade_distribution {
        println!("  {grade}: {count}回");
    }
    println!("{}", rule('='));
}

#[cfg(test)]
mod tests {
    use honyaku_types::{Grade, ScoringTrace};

    use super::*;

    fn part(tag: DiffTag, user: &str, reference: &str) -> DiffPart {
        DiffPart {
            tag,
            user_segment: user.to_string(),
            ref_segment: reference.to_string(),
        }
    }

    fn result(english: &str, score: u32) -> ScoreResult {
        let grade = Grade::from_score(score as i64);
        ScoreResult {
            score,
            grade,
            feedback: grade.feedback().to_string(),
            english: english.to_string(),
            reference_translation: None,
            scoring_details: ScoringTrace::default(),
        }
    }

    #[test]
    fn history_keeps_last_entries() {
        let history: Vec<_> = (0..12).map(|i| result(&format!("Sentence {i}."), i * 8)).collect();
        let lines = recent_results(&history, HISTORY_LIMIT);

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "3. [F] 16点 Sentence 2.");
        assert_eq!(lines[9], "12. [A] 88点 Sentence 11.");
    }

    #[test]
    fn short_history_is_shown_whole() {
        let history = [result("Cats sleep.", 75)];
        assert_eq!(recent_results(&history, HISTORY_LIMIT), ["1. [B] 75点 Cats sleep."]);
        assert!(recent_results(&[], HISTORY_LIMIT).is_empty());
    }

    #[test]
    fn diff_markers() {
        let parts = [
            part(DiffTag::Replace, "犬", "猫"),
            part(DiffTag::Match, "が", "が"),
            part(DiffTag::Delete, "とても", ""),
            part(DiffTag::Insert, "", "よく"),
        ];
        assert_eq!(render_diff(&parts), "[犬→猫]が[-とても][+よく]");
    }
}
