use std::collections::HashSet;

use anyhow::Context;
use honyaku_core::Corpus;
use honyaku_embed::build_embedder;
use honyaku_types::SentencePair;

use crate::report;
use crate::sample::sample_documents;
use crate::state::AppState;

/// Add the sample pairs not yet in the store
pub async fn seed(mut state: AppState) -> anyhow::Result<()> {
    let existing: HashSet<String> = state.store.all_documents().into_iter().map(|d| d.id).collect();
    let documents: Vec<_> = sample_documents()
        .into_iter()
        .filter(|d| !existing.contains(&d.id))
        .collect();

    if documents.is_empty() {
        println!("サンプルデータは登録済みです ({}件)", state.store.len());
        return Ok(());
    }

    // Corpus-fitted backends need the new texts too
    let mut texts = state.store.texts();
    texts.extend(documents.iter().map(|d| d.text.clone()));
    let embedder = build_embedder(&state.config.embedding, &texts);

    let added = state
        .store
        .add_documents(documents, embedder.as_ref())
        .await
        .context("failed to add sample documents")?;

    println!(
        "サンプル文を{}件追加しました (合計 {}件, {})",
        added,
        state.store.len(),
        state.store.path().display()
    );
    Ok(())
}

/// Score one answer; the reference comes from the store when not given
pub async fn score(
    state: &AppState,
    english: &str,
    answer: &str,
    reference: Option<String>,
    details: bool,
) -> anyhow::Result<()> {
    let question = SentencePair {
        english: english.to_string(),
        japanese: reference,
        source: "command line".to_string(),
        doc_id: String::new(),
    };

    let result = state
        .scorer()
        .score(answer, Some(&question), &state.store)
        .await
        .context("scoring failed")?;

    report::print_result(&result, details);
    Ok(())
}

pub async fn search(state: &AppState, query: &str, n_results: usize) -> anyhow::Result<()> {
    let hits = state
        .store
        .search(query, n_results, state.embedder.as_ref())
        .await
        .context("search failed")?;

    if hits.is_empty() {
        println!("該当するドキュメントがありません。");
        return Ok(());
    }

    for (rank, hit) in hits.iter().enumerate() {
        println!(
            "{}. [{:.4}] {} ({})",
            rank + 1,
            hit.distance,
            hit.document.id,
            hit.document.source()
        );
        for line in hit.document.text.lines() {
            println!("     {line}");
        }
    }
    Ok(())
}

pub fn reset(mut state: AppState) -> anyhow::Result<()> {
    let removed = state.store.len();
    state.store.delete_collection().context("failed to delete collection")?;
    println!("{removed}件のドキュメントを削除しました。");
    Ok(())
}
