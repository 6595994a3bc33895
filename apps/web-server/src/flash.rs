//! Flash notices carried across a redirect in a short-lived cookie.

use actix_web::cookie::{Cookie, time::Duration};
use actix_web::http::{StatusCode, header};
use actix_web::{HttpRequest, HttpResponse};

use postboard_shared::Notice;

use crate::views::Alert;

/// Cookie holding the pending notice code.
pub const FLASH_COOKIE: &str = "postboard_flash";

/// Redirect to `location`, leaving `notice` for the next page.
pub fn redirect(location: &str, notice: Notice) -> HttpResponse {
    let cookie = Cookie::build(FLASH_COOKIE, notice.code())
        .path("/")
        .http_only(true)
        .max_age(Duration::minutes(1))
        .finish();

    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .cookie(cookie)
        .finish()
}

/// Pending notice sent with the request, if any.
pub fn pending(req: &HttpRequest) -> Option<Notice> {
    req.cookie(FLASH_COOKIE)
        .and_then(|c| Notice::from_code(c.value()))
}

/// Render an HTML page, consuming any pending notice.
///
/// `extra` takes precedence over the pending notice when both exist.
pub fn render(
    req: &HttpRequest,
    status: StatusCode,
    extra: Option<Alert>,
    page: impl FnOnce(Option<&Alert>) -> String,
) -> HttpResponse {
    let had_cookie = req.cookie(FLASH_COOKIE).is_some();
    let alert = extra.or_else(|| pending(req).map(Alert::from));

    let mut builder = HttpResponse::build(status);
    builder.content_type(header::ContentType::html());
    if had_cookie {
        let mut removal = Cookie::build(FLASH_COOKIE, "").path("/").finish();
        removal.make_removal();
        builder.cookie(removal);
    }

    builder.body(page(alert.as_ref()))
}
