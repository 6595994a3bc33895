//! Error pages.

use super::{escape, layout};

/// Page for unknown routes and missing resources.
pub fn not_found() -> String {
    error_page(
        "Page not found",
        "The page you were looking for does not exist.",
    )
}

/// Page for unexpected failures.
pub fn server_error() -> String {
    error_page(
        "Server error",
        "Something went wrong on our side. Please try again later.",
    )
}

/// Page for malformed requests.
pub fn bad_request(detail: &str) -> String {
    error_page("Bad request", detail)
}

fn error_page(title: &str, detail: &str) -> String {
    let body = format!(
        r#"<h2>{}</h2>
<p>{}</p>
<p><a href="/">Back to posts</a></p>"#,
        escape(title),
        escape(detail)
    );
    layout(title, None, &body)
}
