//! Shared HTML components for the mind dump pages.
//!
//! Contains the base HTML template, the notes counter and the share dialog.

use crate::models::{ShareDialog, ShareKind};

use super::styles::STYLE;

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// ============================================================================
// Base Template
// ============================================================================

/// Wrap page content. `refresh_secs` adds a meta refresh back to the same page.
pub fn base_html(title: &str, content: &str, refresh_secs: Option<u32>) -> String {
    let refresh = refresh_secs
        .map(|secs| format!(r#"<meta http-equiv="refresh" content="{}">"#, secs))
        .unwrap_or_default();

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="theme-color" content="#CD6741">
    {refresh}
    <title>{title}</title>
    <style>{STYLE}</style>
</head>
<body>
    <div class="page">
        {content}
    </div>
</body>
</html>"##,
        refresh = refresh,
        title = html_escape(title),
        STYLE = STYLE,
        content = content,
    )
}

// ============================================================================
// Notes Counter
// ============================================================================

pub fn notes_counter(count: usize) -> String {
    if count == 0 {
        return String::new();
    }
    let plural = if count == 1 { "" } else { "s" };
    format!(
        r#"<div class="counter">&#10003; {} thought{} captured</div>"#,
        count, plural
    )
}

// ============================================================================
// Share Dialog
// ============================================================================

pub fn share_dialog(dialog: &ShareDialog) -> String {
    let (title, input_type, placeholder) = match dialog.kind {
        ShareKind::Email => ("Email to yourself", "email", "your@email.com"),
        ShareKind::Text => ("Text to yourself", "tel", "Your phone number"),
    };

    format!(
        r##"<div class="modal-overlay">
        <div class="modal">
            <h3>{title}</h3>
            <form method="POST" action="/share" id="share-form">
                <input type="{input_type}" name="contact" id="share-contact"
                       placeholder="{placeholder}" value="{contact}" autofocus required>
            </form>
            <div class="actions">
                <form method="POST" action="/share/cancel">
                    <button type="submit" class="btn secondary">Cancel</button>
                </form>
                <button type="submit" form="share-form" class="btn" id="share-send">Send</button>
            </div>
        </div>
    </div>
    <script>
    (function() {{
        const input = document.getElementById('share-contact');
        const send = document.getElementById('share-send');
        function sync() {{ send.disabled = input.value.trim() === ''; }}
        input.addEventListener('input', sync);
        sync();
    }})();
    </script>"##,
        title = title,
        input_type = input_type,
        placeholder = placeholder,
        contact = html_escape(&dialog.contact),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<b>"it's" & more</b>"#),
            "&lt;b&gt;&quot;it&#39;s&quot; &amp; more&lt;/b&gt;"
        );
    }

    #[test]
    fn test_notes_counter_pluralizes() {
        assert_eq!(notes_counter(0), "");
        assert!(notes_counter(1).contains("1 thought captured"));
        assert!(notes_counter(3).contains("3 thoughts captured"));
    }

    #[test]
    fn test_share_dialog_kinds() {
        let email = share_dialog(&ShareDialog {
            kind: ShareKind::Email,
            contact: String::new(),
        });
        assert!(email.contains("Email to yourself"));
        assert!(email.contains(r#"type="email""#));

        let text = share_dialog(&ShareDialog {
            kind: ShareKind::Text,
            contact: "<555>".to_string(),
        });
        assert!(text.contains("Text to yourself"));
        assert!(text.contains(r#"value="&lt;555&gt;""#));
    }
}
