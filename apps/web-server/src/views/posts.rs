//! Post list and form pages.

use postboard_core::domain::Post;

use super::{Alert, escape, layout};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// The post list, newest first as given.
pub fn index(posts: &[Post], alert: Option<&Alert>) -> String {
    let body = if posts.is_empty() {
        r#"<p class="empty">No posts yet. <a href="/create">Write the first one.</a></p>"#
            .to_string()
    } else {
        posts.iter().map(post_card).collect::<Vec<_>>().join("\n")
    };

    layout("Posts", alert, &body)
}

fn post_card(post: &Post) -> String {
    let edited = if post.updated_at != post.created_at {
        format!(
            " &middot; updated {}",
            post.updated_at.format(TIMESTAMP_FORMAT)
        )
    } else {
        String::new()
    };

    format!(
        r#"<article class="post" id="post-{id}">
<h2>{title}</h2>
<p class="post-meta">by {author} &middot; {created}{edited}</p>
<div class="post-content">{content}</div>
<div class="post-actions">
<a href="/edit/{id}">Edit</a>
<form method="post" action="/delete/{id}" onsubmit="return confirm('Delete this post? This cannot be undone.');">
<button type="submit">Delete</button>
</form>
</div>
</article>"#,
        id = post.id,
        title = escape(&post.title),
        author = escape(&post.author),
        created = post.created_at.format(TIMESTAMP_FORMAT),
        content = escape(&post.content),
    )
}

/// Values pre-filled into a post form.
#[derive(Debug, Default)]
pub struct FormValues<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub author: &'a str,
}

impl<'a> From<&'a Post> for FormValues<'a> {
    fn from(post: &'a Post) -> Self {
        Self {
            title: &post.title,
            content: &post.content,
            author: &post.author,
        }
    }
}

/// Empty form for a new post.
pub fn create_form(alert: Option<&Alert>) -> String {
    let body = post_form("New post", "/create", "Publish", &FormValues::default());
    layout("New post", alert, &body)
}

/// Form pre-filled with an existing post.
pub fn edit_form(post: &Post, alert: Option<&Alert>) -> String {
    let action = format!("/edit/{}", post.id);
    let body = post_form("Edit post", &action, "Save", &FormValues::from(post));
    layout("Edit post", alert, &body)
}

fn post_form(heading: &str, action: &str, submit: &str, values: &FormValues<'_>) -> String {
    format!(
        r#"<h2>{heading}</h2>
<form class="post-form" method="post" action="{action}">
<label for="title">Title</label>
<input id="title" name="title" type="text" required value="{title}">
<label for="author">Author</label>
<input id="author" name="author" type="text" required value="{author}">
<label for="content">Content</label>
<textarea id="content" name="content" required>{content}</textarea>
<p><button type="submit">{submit}</button> <a href="/">Cancel</a></p>
</form>"#,
        action = escape(action),
        title = escape(values.title),
        author = escape(values.author),
        content = escape(values.content),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use postboard_core::domain::PostDraft;

    fn post() -> Post {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        Post::new(3, PostDraft::new("<b>Hi</b>", "line", "eve").unwrap(), at)
    }

    #[test]
    fn test_index_empty() {
        let html = index(&[], None);
        assert!(html.contains("No posts yet"));
    }

    #[test]
    fn test_index_escapes_user_text() {
        let html = index(&[post()], None);
        assert!(html.contains("&lt;b&gt;Hi&lt;/b&gt;"));
        assert!(!html.contains("<b>Hi</b>"));
        assert!(html.contains(r#"action="/delete/3""#));
        assert!(html.contains("2024-05-01 10:00"));
    }

    #[test]
    fn test_index_shows_edit_time() {
        let mut edited = post();
        edited.updated_at = edited.created_at + Duration::hours(2);

        let html = index(&[edited], None);

        assert!(html.contains("updated 2024-05-01 12:00"));
    }

    #[test]
    fn test_edit_form_prefilled() {
        let html = edit_form(&post(), None);
        assert!(html.contains(r#"action="/edit/3""#));
        assert!(html.contains(r#"value="eve""#));
        assert!(html.contains(">line</textarea>"));
    }

    #[test]
    fn test_create_form_is_empty() {
        let html = create_form(Some(&Alert::error("required")));
        assert!(html.contains(r#"value="""#));
        assert!(html.contains("alert-error"));
    }
}
