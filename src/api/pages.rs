use actix_web::http::header::{self, ContentType};
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use askama::Template;

use crate::error::TodoError;
use crate::models::todo::NewTodo;
use crate::repository::database::Database;
use crate::views::index::IndexPage;

fn redirect_to_index() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

#[get("/")]
#[tracing::instrument(skip(db))]
pub async fn index(db: web::Data<Database>) -> Result<HttpResponse, TodoError> {
    let (todos, stats) = db.snapshot();
    let page = IndexPage::new(&todos, stats).render()?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page))
}

/// A body that does not bind, including an empty one, is an empty draft.
#[post("/add")]
#[tracing::instrument(skip(db, new_todo))]
pub async fn add_todo(db: web::Data<Database>, new_todo: Option<web::Form<NewTodo>>) -> HttpResponse {
    let new_todo = new_todo.map(web::Form::into_inner).unwrap_or_default();
    match db.add_todo(new_todo) {
        Some(todo) => tracing::info!(id = todo.id, title = %todo.title, "added todo"),
        None => tracing::info!("ignored todo with blank title"),
    }
    redirect_to_index()
}

#[post("/complete/{id}")]
#[tracing::instrument(skip(db))]
pub async fn complete_todo(db: web::Data<Database>, id: web::Path<i64>) -> HttpResponse {
    let id = id.into_inner();
    let found = db.complete_todo(id);
    tracing::info!(id, found, "complete todo");
    redirect_to_index()
}

#[post("/delete/{id}")]
#[tracing::instrument(skip(db))]
pub async fn delete_todo(db: web::Data<Database>, id: web::Path<i64>) -> HttpResponse {
    let id = id.into_inner();
    let found = db.delete_todo(id);
    tracing::info!(id, found, "delete todo");
    redirect_to_index()
}

#[get("/clear")]
#[tracing::instrument(skip(db))]
pub async fn clear_completed(db: web::Data<Database>) -> HttpResponse {
    let removed = db.clear_completed();
    tracing::info!(removed, "cleared completed todos");
    redirect_to_index()
}

fn invalid_id(err: actix_web::error::PathError, req: &HttpRequest) -> actix_web::Error {
    let raw = req.match_info().get("id").unwrap_or_default().to_string();
    tracing::warn!(id = %raw, error = %err, "rejected malformed todo id");
    TodoError::InvalidId(raw).into()
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(invalid_id))
        .service(index)
        .service(add_todo)
        .service(complete_todo)
        .service(delete_todo)
        .service(clear_completed);
}
