//! Server-rendered HTML pages: the upload form and the share page.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use clawshare_core::error::{AppError, ErrorKind};
use clawshare_core::types::ShareId;
use clawshare_service::ResolvedShare;

use crate::dto::request::SharePageQuery;
use crate::error::{public_message, status_and_code};
use crate::state::AppState;

const STYLE: &str = r#"<style>
body{font-family:system-ui,sans-serif;max-width:36rem;margin:3rem auto;padding:0 1rem;color:#222}
h1{font-size:1.6rem}.card{border:1px solid #ddd;border-radius:8px;padding:1.2rem}
.muted{color:#777}.error{color:#b00020}
button,.button{background:#2962ff;color:#fff;border:0;border-radius:6px;padding:.6rem 1.2rem;text-decoration:none;display:inline-block;cursor:pointer}
input,select{padding:.4rem;margin:.3rem 0 .8rem;width:100%;box-sizing:border-box}
</style>"#;

const UPLOAD_SCRIPT: &str = r#"<script>
document.getElementById('share-form').addEventListener('submit', async (event) => {
  event.preventDefault();
  const form = event.target;
  const status = document.getElementById('status');
  const file = form.file.files[0];
  if (!file) { status.textContent = 'Choose a file first.'; return; }
  status.textContent = 'Creating share...';
  try {
    const created = await fetch('/api/share', { method: 'POST', body: new FormData(form) });
    const body = await created.json();
    if (!body.success) { status.textContent = body.error; return; }
    status.textContent = 'Uploading...';
    const put = await fetch(body.uploadUrl, {
      method: 'PUT',
      headers: { 'Content-Type': file.type || 'application/octet-stream' },
      body: file,
    });
    if (!put.ok) { status.textContent = 'Upload failed (' + put.status + ')'; return; }
    status.innerHTML = '';
    const link = document.createElement('a');
    link.href = body.shareUrl;
    link.textContent = body.shareUrl;
    status.append('Share link: ', link);
  } catch (err) {
    status.textContent = 'Upload failed: ' + err;
  }
});
</script>"#;

/// GET /
pub async fn index() -> Html<String> {
    let body = r#"<h1>ClawShare</h1>
<div class="card">
<form id="share-form">
<label>File <input type="file" name="file" required></label>
<label>Expires in
<select name="expiresIn">
<option value="3600">1 hour</option>
<option value="86400">1 day</option>
<option value="604800" selected>7 days</option>
<option value="2592000">30 days</option>
</select></label>
<label>Password (optional) <input type="password" name="password" autocomplete="new-password"></label>
<label><input type="checkbox" name="download" value="true" style="width:auto"> Force download</label>
<button type="submit">Share</button>
</form>
<p id="status" class="muted"></p>
</div>"#;
    Html(layout("ClawShare", &format!("{body}{UPLOAD_SCRIPT}")))
}

/// GET /s/{id}?password=
pub async fn share_page(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Query(query): Query<SharePageQuery>,
) -> Response {
    let result = match ShareId::parse(&raw_id) {
        Ok(id) => {
            state
                .share_service
                .resolve(&id, query.password.as_deref())
                .await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(resolved) => Html(render_share(&resolved)).into_response(),
        Err(err) => render_failure(&raw_id, &err),
    }
}

fn render_share(resolved: &ResolvedShare) -> String {
    let meta = &resolved.meta;
    let action = if meta.is_download { "Download" } else { "Open" };
    let body = format!(
        r#"<h1>{name}</h1>
<div class="card">
<p>{size:.1} KB · {content_type}</p>
<p class="muted">Expires {expires}</p>
<a class="button" href="{url}">{action}</a>
</div>"#,
        name = escape_html(&meta.name),
        size = meta.size as f64 / 1024.0,
        content_type = escape_html(&meta.content_type),
        expires = meta.expires_at.format("%Y-%m-%d %H:%M UTC"),
        url = escape_html(&resolved.download_url),
    );
    layout(&meta.name, &body)
}

fn render_failure(raw_id: &str, err: &AppError) -> Response {
    let (status, _) = status_and_code(err.kind);

    let body = match err.kind {
        ErrorKind::PasswordRequired | ErrorKind::InvalidPassword => {
            let notice = if err.kind == ErrorKind::InvalidPassword {
                r#"<p class="error">Incorrect password.</p>"#
            } else {
                ""
            };
            format!(
                r#"<h1>Password required</h1>
<div class="card">
{notice}
<form method="get" action="/s/{id}">
<label>Password <input type="password" name="password" autofocus></label>
<button type="submit">Unlock</button>
</form>
</div>"#,
                id = escape_html(raw_id),
            )
        }
        ErrorKind::Expired => page_error("This share has expired."),
        ErrorKind::NotFound => page_error("This share does not exist or was revoked."),
        _ => page_error(&public_message(err)),
    };

    let status = if status == StatusCode::UNAUTHORIZED {
        StatusCode::OK
    } else {
        status
    };
    (status, Html(layout("ClawShare", &body))).into_response()
}

fn page_error(message: &str) -> String {
    format!(
        r#"<h1>Unavailable</h1>
<div class="card"><p class="error">{}</p><p><a href="/">Share a file</a></p></div>"#,
        escape_html(message)
    )
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en"><head><meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>{STYLE}</head>
<body>{body}</body></html>"#,
        title = escape_html(title),
    )
}

/// Escape text for inclusion in HTML content or a quoted attribute.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
