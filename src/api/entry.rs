use axum::Json;

use crate::engine::{EntryDraft, EntryPreview};

/// Derived values for a draft entry, honoring any manual overrides.
pub async fn preview_entry(Json(draft): Json<EntryDraft>) -> Json<EntryPreview> {
    Json(draft.preview())
}
