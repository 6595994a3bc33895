//! HTML rendering for the browser front end.

pub mod errors;
pub mod posts;

use postboard_shared::{Level, Notice};

/// A message box shown above the page body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub level: Level,
    pub message: String,
}

impl Alert {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }
}

impl From<Notice> for Alert {
    fn from(notice: Notice) -> Self {
        Self {
            level: notice.level(),
            message: notice.message().to_string(),
        }
    }
}

/// Escape text for use in element content and quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 48rem; margin: 0 auto; padding: 1rem; color: #222; }
header { display: flex; justify-content: space-between; align-items: center; border-bottom: 1px solid #ddd; }
header a { text-decoration: none; }
.alert { padding: .75rem 1rem; margin: 1rem 0; border-radius: 4px; transition: opacity .5s ease-out; }
.alert-success { background: #e6f4ea; color: #1e4620; }
.alert-error { background: #fdecea; color: #611a15; }
.post { border: 1px solid #ddd; border-radius: 4px; padding: 1rem; margin: 1rem 0; }
.post-meta { color: #666; font-size: .875rem; }
.post-content { white-space: pre-wrap; }
.post-actions { display: flex; gap: .5rem; }
.post-actions form { display: inline; }
.post-form label { display: block; margin-top: .75rem; font-weight: 600; }
.post-form input, .post-form textarea { width: 100%; box-sizing: border-box; padding: .5rem; }
.post-form textarea { min-height: 10rem; }
"#;

const SCRIPT: &str = r#"
document.addEventListener('DOMContentLoaded', function () {
  document.querySelectorAll('.alert').forEach(function (alert) {
    setTimeout(function () {
      alert.style.opacity = '0';
      setTimeout(function () { alert.remove(); }, 500);
    }, 3000);
  });
  document.querySelectorAll('.post-form').forEach(function (form) {
    form.addEventListener('submit', function (e) {
      var blank = ['title', 'author', 'content'].filter(function (name) {
        var field = form.querySelector('#' + name);
        return field && field.value.trim() === '';
      });
      if (blank.length > 0) {
        e.preventDefault();
        alert('Please fill in: ' + blank.join(', '));
      }
    });
  });
});
"#;

/// Wrap a page body in the shared layout.
pub fn layout(title: &str, alert: Option<&Alert>, body: &str) -> String {
    let alert_html = alert
        .map(|a| {
            format!(
                r#"<div class="alert alert-{}" role="alert">{}</div>"#,
                a.level.as_str(),
                escape(&a.message)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} - Postboard</title>
<style>{STYLE}</style>
</head>
<body>
<header><h1><a href="/">Postboard</a></h1><a href="/create">New post</a></header>
<main>
{alert_html}
{body}
</main>
<script>{SCRIPT}</script>
</body>
</html>
"#,
        title = escape(title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
        assert_eq!(escape("日本語"), "日本語");
    }

    #[test]
    fn test_layout_renders_alert() {
        let alert = Alert::from(Notice::Deleted);
        let html = layout("Posts", Some(&alert), "<p>body</p>");

        assert!(html.contains(r#"class="alert alert-success""#));
        assert!(html.contains("Post deleted"));
        assert!(html.contains("<p>body</p>"));
    }
}
