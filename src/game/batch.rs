//! Concurrent processing of independent games
//!
//! Every game carries its own prior ratings, so games of a batch do not
//! depend on each other and run on the blocking pool side by side.

use crate::error::ScoringError;
use crate::game::processor::{GameInput, GameProcessor, GameReport};
use std::sync::Arc;
use tracing::info;

/// Process a batch of games, returning reports in input order
///
/// Games without a schedule index are assigned their position in the batch.
/// The first failing game fails the whole batch.
pub async fn process_batch(
    processor: Arc<GameProcessor>,
    games: Vec<GameInput>,
) -> crate::error::Result<Vec<GameReport>> {
    let handles: Vec<_> = games
        .into_iter()
        .enumerate()
        .map(|(position, mut game)| {
            game.index.get_or_insert(position);
            let processor = processor.clone();
            tokio::task::spawn_blocking(move || processor.process_game(&game))
        })
        .collect();

    let mut reports = Vec::with_capacity(handles.len());
    for (position, handle) in handles.into_iter().enumerate() {
        let report = handle.await.map_err(|e| ScoringError::ProcessingFailed {
            reason: format!("game {} did not complete: {}", position, e),
        })??;
        reports.push(report);
    }

    info!(games = reports.len(), "Processed batch");
    Ok(reports)
}
