//! Post pages - list, create, edit and delete.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};

use postboard_core::DomainError;
use postboard_shared::{Notice, PostForm};

use crate::flash;
use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views::{self, Alert};

/// A body that is not a url-encoded form counts as a form with blank fields.
fn submitted(form: Option<web::Form<PostForm>>) -> PostForm {
    form.map(web::Form::into_inner).unwrap_or_default()
}

/// GET /
pub async fn index(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let posts = state.posts.list().await;
    flash::render(&req, StatusCode::OK, None, |alert| {
        views::posts::index(&posts, alert)
    })
}

/// GET /create
pub async fn create_form(req: HttpRequest) -> HttpResponse {
    flash::render(&req, StatusCode::OK, None, views::posts::create_form)
}

/// POST /create
pub async fn create(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: Option<web::Form<PostForm>>,
) -> AppResult<HttpResponse> {
    let form = submitted(form);

    match state
        .posts
        .create(&form.title, &form.content, &form.author)
        .await
    {
        Ok(_) => Ok(flash::redirect("/", Notice::Created)),
        Err(DomainError::Validation(msg)) => Ok(flash::render(
            &req,
            StatusCode::OK,
            Some(Alert::error(msg)),
            views::posts::create_form,
        )),
        Err(e) => Err(e.into()),
    }
}

/// GET /edit/{id}
pub async fn edit_form(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> HttpResponse {
    let id = path.into_inner();

    match state.posts.find(id).await {
        Some(post) => flash::render(&req, StatusCode::OK, None, |alert| {
            views::posts::edit_form(&post, alert)
        }),
        None => flash::redirect("/", Notice::NotFound),
    }
}

/// POST /edit/{id}
pub async fn edit(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<u64>,
    form: Option<web::Form<PostForm>>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let form = submitted(form);

    match state
        .posts
        .update(id, &form.title, &form.content, &form.author)
        .await
    {
        Ok(_) => Ok(flash::redirect("/", Notice::Updated)),
        Err(DomainError::NotFound { .. }) => Ok(flash::redirect("/", Notice::NotFound)),
        Err(DomainError::Validation(msg)) => {
            // Re-render with the stored values; the rejected input is discarded.
            let Some(post) = state.posts.find(id).await else {
                return Ok(flash::redirect("/", Notice::NotFound));
            };
            Ok(flash::render(
                &req,
                StatusCode::OK,
                Some(Alert::error(msg)),
                |alert| views::posts::edit_form(&post, alert),
            ))
        }
        Err(e) => Err(e.into()),
    }
}

/// POST /delete/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<u64>) -> AppResult<HttpResponse> {
    state.posts.delete(path.into_inner()).await?;
    Ok(flash::redirect("/", Notice::Deleted))
}
