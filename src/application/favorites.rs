use crate::domain::error::TransproError;
use crate::domain::model::FavoriteItem;
use crate::state::{AppState, FAVORITES_KEY};
use chrono::Utc;
use std::collections::HashSet;
use std::future::Future;
use tracing::info;

/// Save the current result as a favorite.
///
/// Returns the new id, or `None` when there is no result or no source text.
pub async fn save_favorite(state: &mut AppState) -> Result<Option<String>, TransproError> {
    let Some(result) = state.view.result.clone() else {
        return Ok(None);
    };
    if state.view.source_text.trim().is_empty() {
        return Ok(None);
    }

    let now = Utc::now().timestamp_millis();
    let id = next_id(&state.favorites, now);

    let item = FavoriteItem {
        id: id.clone(),
        source_text: state.view.source_text.clone(),
        context: state.view.context.clone(),
        result,
        created_at: now,
    };

    let mut favorites = Vec::with_capacity(state.favorites.len() + 1);
    favorites.push(item);
    favorites.extend(state.favorites.iter().cloned());

    persist_favorites(state, &favorites).await?;
    state.favorites = favorites;
    info!("Saved favorite {}", id);

    Ok(Some(id))
}

/// Delete a favorite after asking `confirm`.
///
/// Unknown ids are a no-op and never reach `confirm`. Returns whether an
/// item was removed.
pub async fn delete_favorite<F, Fut>(
    state: &mut AppState,
    id: &str,
    confirm: F,
) -> Result<bool, TransproError>
where
    F: FnOnce(&FavoriteItem) -> Fut,
    Fut: Future<Output = bool>,
{
    let pending = match state.favorite(id) {
        Some(item) => confirm(item),
        None => return Ok(false),
    };
    if !pending.await {
        return Ok(false);
    }

    let remaining: Vec<_> = state
        .favorites
        .iter()
        .filter(|item| item.id != id)
        .cloned()
        .collect();

    persist_favorites(state, &remaining).await?;
    state.favorites = remaining;
    info!("Deleted favorite {}", id);

    Ok(true)
}

/// Copy a favorite into the view. The favorites list is left untouched.
pub fn load_favorite(state: &mut AppState, id: &str) -> bool {
    let Some(item) = state.favorite(id).cloned() else {
        return false;
    };

    state.view.source_text = item.source_text;
    state.view.context = item.context;
    state.view.result = Some(item.result);
    true
}

/// Rewrite the whole list to the store. The caller commits `favorites` to
/// the state only after this succeeds.
async fn persist_favorites(
    state: &AppState,
    favorites: &[FavoriteItem],
) -> Result<(), TransproError> {
    let serialized = serde_json::to_string(favorites)?;
    state.store.set(FAVORITES_KEY, &serialized).await
}

/// Time-derived id, bumped past any existing numeric id so it stays unique
fn next_id(existing: &[FavoriteItem], now_millis: i64) -> String {
    let used: HashSet<i64> = existing
        .iter()
        .filter_map(|item| item.id.parse::<i64>().ok())
        .collect();

    let mut candidate = match used.iter().max() {
        Some(&latest) if latest >= now_millis => latest.checked_add(1).unwrap_or(now_millis),
        _ => now_millis,
    };
    // 只有在最大 id 已到 i64::MAX 时才会走到这里
    while used.contains(&candidate) {
        candidate = candidate.wrapping_add(1);
    }
    candidate.to_string()
}
