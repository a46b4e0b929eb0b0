//! Note CRUD handlers. Each one makes a single repository call.

use actix_web::{HttpResponse, web};

use notes_core::domain::{Note, NoteFields};
use notes_shared::SuccessResponse;
use notes_shared::dto::{NoteRequest, SearchQuery};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn fields(req: NoteRequest) -> NoteFields {
    NoteFields {
        title: req.title,
        content: req.content,
    }
}

/// GET /api/notes
pub async fn list_notes(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let notes = state.notes.list().await?;
    Ok(HttpResponse::Ok().json(notes))
}

/// POST /api/notes
pub async fn create_note(
    state: web::Data<AppState>,
    body: web::Json<NoteRequest>,
) -> AppResult<HttpResponse> {
    let note = state.notes.create(fields(body.into_inner())).await?;
    tracing::info!(note_id = note.id, "Note created");

    Ok(HttpResponse::Created().json(note))
}

/// PUT /api/notes/{id}
///
/// Reports success even when no note has this id.
pub async fn update_note(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<NoteRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let updated = state.notes.update(id, fields(body.into_inner())).await?;
    if updated == 0 {
        tracing::debug!(note_id = id, "Update matched no note");
    }

    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

/// DELETE /api/notes/{id}
///
/// Reports success even when no note has this id.
pub async fn delete_note(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let deleted = state.notes.delete(id).await?;
    if deleted == 0 {
        tracing::debug!(note_id = id, "Delete matched no note");
    }

    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

/// GET /api/notes/search?q=...
pub async fn search_notes(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let pattern = Note::search_pattern(query.q.as_deref());
    let notes = state.notes.search(&pattern).await?;
    Ok(HttpResponse::Ok().json(notes))
}
