//! Page components for the quicknote interface.

use crate::markdown::html_escape;
use crate::models::{Note, SAVE_ACTION, UPLOAD_ACTION};

use super::styles::STYLE;

// ============================================================================
// Compose Form
// ============================================================================

/// The note editor. `text` is the current compose text, echoed back after an
/// upload so the inserted image reference is visible. The HTML parser drops
/// one newline directly after `<textarea>`, so one is always emitted there.
pub fn compose_form(text: &str) -> String {
    format!(
        r#"<form class="compose" action="/note" method="post" enctype="multipart/form-data">
            <textarea name="textContent" placeholder="Write a note... (Markdown supported)">
{text}</textarea>
            <div class="actions">
                <input type="file" name="image" accept="image/*">
                <button type="submit" name="upload" value="{upload}">{upload}</button>
                <span class="spacer"></span>
                <button type="submit" name="save" value="{save}" class="primary">{save}</button>
            </div>
        </form>"#,
        text = html_escape(text),
        upload = UPLOAD_ACTION,
        save = SAVE_ACTION,
    )
}

// ============================================================================
// Note List
// ============================================================================

/// Notes in the order given. Content is stored as sanitized HTML and is
/// inserted verbatim.
pub fn note_list(notes: &[Note]) -> String {
    if notes.is_empty() {
        return r#"<p class="empty">No notes yet.</p>"#.to_string();
    }

    let mut list_html = String::from("<ul class=\"note-list\">");

    for note in notes {
        list_html.push_str(&format!(
            r#"<li class="note-item" id="note-{id}">
                <div class="note-content">{content}</div>
                <span class="meta">{created}</span>
            </li>"#,
            id = html_escape(&note.id),
            content = note.content,
            created = note.created_at.format("%Y-%m-%d %H:%M"),
        ));
    }

    list_html.push_str("</ul>");
    list_html
}

// ============================================================================
// Pages
// ============================================================================

pub fn index_page(notes: &[Note], compose_text: &str) -> String {
    let content = format!(
        "<h1>Quicknote</h1>{}{}",
        compose_form(compose_text),
        note_list(notes)
    );
    base_html("Quicknote", &content)
}

pub fn error_page(message: &str) -> String {
    let content = format!(
        r#"<h1>Error</h1>
        <div class="message error">{}</div>
        <a href="/">Back to notes</a>"#,
        html_escape(message)
    );
    base_html("Error", &content)
}

pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{STYLE}</style>
</head>
<body>
    <div class="container">
        {content}
    </div>
</body>
</html>"#,
        title = html_escape(title),
        content = content,
    )
}
