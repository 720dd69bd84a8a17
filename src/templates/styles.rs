//! CSS styles for the quicknote page.

// ============================================================================
// CSS Styles
// ============================================================================

pub const STYLE: &str = r#"
/* Solarized Light Theme */
:root {
    --base01: #586e75;
    --base00: #657b83;
    --base1: #93a1a1;
    --base2: #eee8d5;
    --base3: #fdf6e3;

    --red: #dc322f;
    --blue: #268bd2;
    --cyan: #2aa198;

    --bg: var(--base3);
    --fg: var(--base00);
    --muted: var(--base1);
    --border: var(--base2);
    --link: var(--blue);
    --link-hover: var(--cyan);
    --accent: var(--base2);
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
    line-height: 1.6;
    color: var(--fg);
    background: var(--bg);
}

.container {
    max-width: 760px;
    margin: 0 auto;
    padding: 1rem;
}

a { color: var(--link); text-decoration: none; }
a:hover { color: var(--link-hover); text-decoration: underline; }

h1 { font-size: 1.5rem; font-weight: 600; margin: 1rem 0; }

.compose {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    margin-bottom: 2rem;
}

.compose textarea {
    width: 100%;
    min-height: 8rem;
    padding: 0.75rem;
    border: 1px solid var(--border);
    border-radius: 4px;
    background: white;
    color: var(--base01);
    font-family: "SF Mono", "Consolas", "Liberation Mono", monospace;
    font-size: 0.9rem;
    resize: vertical;
}

.compose .actions {
    display: flex;
    gap: 0.5rem;
    align-items: center;
    flex-wrap: wrap;
}

.compose .actions .spacer { flex: 1; }

.compose button {
    padding: 0.4rem 1rem;
    border: 1px solid var(--border);
    border-radius: 4px;
    background: var(--accent);
    color: var(--fg);
    cursor: pointer;
    font-family: inherit;
    font-size: 0.9rem;
}

.compose button.primary {
    background: var(--link);
    border-color: var(--link);
    color: white;
}

.note-list { list-style: none; }

.note-item {
    padding: 0.75rem 0;
    border-bottom: 1px solid var(--border);
}

.note-item:last-child { border-bottom: none; }
.note-item .meta { font-size: 0.75rem; color: var(--muted); }

.note-content pre {
    background: var(--accent);
    padding: 1rem;
    overflow-x: auto;
    border-radius: 4px;
    margin: 0.5rem 0;
}
.note-content code {
    font-family: "SF Mono", "Consolas", "Liberation Mono", monospace;
    font-size: 0.9em;
}
.note-content p code {
    background: var(--accent);
    padding: 0.1rem 0.3rem;
    border-radius: 3px;
}
.note-content img { max-width: 100%; }
.note-content blockquote {
    border-left: 3px solid var(--border);
    padding-left: 1rem;
    color: var(--muted);
}

.empty { color: var(--muted); font-style: italic; }

.message.error {
    padding: 0.75rem 1rem;
    border-left: 3px solid var(--red);
    background: var(--accent);
    margin: 1rem 0;
}
"#;
