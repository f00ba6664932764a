//! One page per workflow phase, plus the share handoff page.

use crate::models::{AnalysisResult, ShareDialog};

use super::components::{base_html, html_escape, notes_counter, share_dialog};

pub const MAX_NOTE_CHARS: usize = 280;

/// Seconds between reloads of the processing page.
pub const PROCESSING_REFRESH_SECS: u32 = 1;

// ============================================================================
// Composing
// ============================================================================

pub fn render_composing(note_count: usize, placeholder: &str, captured: bool) -> String {
    let sticky_class = if captured {
        "sticky-note captured"
    } else {
        "sticky-note"
    };

    let done_button = if note_count > 0 {
        r#"<form method="POST" action="/analyze">
            <button type="submit" class="btn done">&#129504; I'm done - help me process this &#8594;</button>
        </form>"#
    } else {
        ""
    };

    let content = format!(
        r##"<div class="blob top"></div>
        <div class="blob bottom"></div>
        <div class="container">
            <div class="brain">&#129504;</div>
            <h1>Let's Organize<br>Your Brain.</h1>
            <p class="intro">Type your thoughts below 1 per sticky note. When you're done just tell me. I'll help you solve your problems.</p>
            <div style="text-align: center">{counter}</div>
        </div>
        <form method="POST" action="/notes" class="{sticky_class}" id="note-form">
            <textarea name="text" id="note-input" maxlength="{max}" placeholder="{placeholder}" autofocus></textarea>
            <div class="sticky-footer">
                <span class="char-count" id="char-count">0/{max}</span>
                <button type="submit" class="btn" id="note-send" disabled>&#10148; Send to void</button>
            </div>
        </form>
        {done_button}
        <script>
        (function() {{
            const form = document.getElementById('note-form');
            const input = document.getElementById('note-input');
            const count = document.getElementById('char-count');
            const send = document.getElementById('note-send');
            function sync() {{
                count.textContent = input.value.length + '/{max}';
                send.disabled = input.value.trim() === '';
            }}
            input.addEventListener('input', sync);
            // Enter submits; Shift+Enter inserts a newline
            input.addEventListener('keydown', function(e) {{
                if (e.key === 'Enter' && !e.shiftKey) {{
                    e.preventDefault();
                    if (input.value.trim() !== '') form.submit();
                }}
            }});
            sync();
        }})();
        </script>"##,
        counter = notes_counter(note_count),
        sticky_class = sticky_class,
        max = MAX_NOTE_CHARS,
        placeholder = html_escape(placeholder),
        done_button = done_button,
    );

    base_html("Mind Dump", &content, None)
}

// ============================================================================
// Processing
// ============================================================================

pub fn render_processing() -> String {
    let content = r#"<div class="container" style="text-align: center">
            <div class="void-portal">&#10024;</div>
            <h2>Processing your thoughts...</h2>
            <p class="loading-dots">Analyzing patterns and finding insights</p>
            <form method="POST" action="/reset">
                <button type="submit" class="link-button">Start over</button>
            </form>
        </div>"#;

    base_html("Mind Dump - Processing", content, Some(PROCESSING_REFRESH_SECS))
}

// ============================================================================
// Result
// ============================================================================

pub fn render_result(result: &AnalysisResult, dialog: Option<&ShareDialog>) -> String {
    let suggestions: String = result
        .suggestions
        .iter()
        .map(|s| format!("<li><span>{}</span></li>", html_escape(s)))
        .collect();

    let dialog_html = dialog.map(share_dialog).unwrap_or_default();

    let content = format!(
        r#"<div class="container">
            <div class="brain" style="color: var(--accent)">&#10004;</div>
            <h2>Here's what I found</h2>
            <div class="card">
                <h3>Summary</h3>
                <p>{summary}</p>
                <h3>Ways to help yourself</h3>
                <ul class="suggestions">{suggestions}</ul>
            </div>
            <div class="actions">
                <a href="/share/email" class="btn wide">&#9993; Email to myself</a>
                <a href="/share/text" class="btn wide secondary">&#128172; Text to myself</a>
                <form method="POST" action="/reset">
                    <button type="submit" class="btn wide outline">Start over</button>
                </form>
            </div>
        </div>
        {dialog}"#,
        summary = html_escape(&result.summary),
        suggestions = suggestions,
        dialog = dialog_html,
    );

    base_html("Mind Dump - Results", &content, None)
}

// ============================================================================
// Share Handoff
// ============================================================================

/// Sends the browser to a `mailto:` or `sms:` URI, with a manual link as backup.
pub fn render_handoff(uri: &str) -> String {
    let escaped = html_escape(uri);
    let content = format!(
        r#"<div class="container" style="text-align: center">
            <h2>Opening your app...</h2>
            <p class="intro">If nothing happens, <a href="{uri}">tap here</a>.</p>
            <a href="/" class="btn outline">Back to results</a>
        </div>
        <script>window.location.href = document.querySelector('a[href^="mailto:"], a[href^="sms:"]').href;</script>"#,
        uri = escaped,
    );

    base_html("Mind Dump - Share", &content, None)
}
