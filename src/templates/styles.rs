//! CSS styles for the mind dump pages.
//!
//! Contains the main STYLE constant with all CSS for the web interface.

// ============================================================================
// CSS Styles
// ============================================================================

pub const STYLE: &str = r#"
/* Warm Paper Theme */
:root {
    --bg: #F9F9F9;
    --fg: #262624;
    --accent: #CD6741;
    --muted: #908F88;
    --card: #ffffff;
    --sticky: #FFF4B8;
    --sticky-shadow: rgba(38, 38, 36, 0.15);
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
    line-height: 1.6;
    color: var(--fg);
    background: var(--bg);
    min-height: 100vh;
}

.page {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    padding: 1rem;
    position: relative;
    overflow: hidden;
}

.container {
    max-width: 42rem;
    width: 100%;
}

h1, h2, h3 { color: var(--accent); font-weight: 700; }
h1 { font-size: 2.25rem; margin: 1rem 0; text-align: center; }
h2 { font-size: 1.75rem; margin-bottom: 1rem; text-align: center; }
h3 { font-size: 1.25rem; font-weight: 600; margin-bottom: 1rem; }

.intro {
    max-width: 28rem;
    margin: 0 auto 2rem auto;
    color: var(--muted);
    text-align: center;
}

.brain {
    font-size: 3.5rem;
    text-align: center;
}

/* Background decorations */
.blob {
    position: absolute;
    width: 20rem;
    height: 20rem;
    border-radius: 50%;
    opacity: 0.1;
    pointer-events: none;
    animation: float-up 6s ease-in-out infinite;
}
.blob.top { top: -10rem; right: -10rem; background: var(--muted); }
.blob.bottom { bottom: -10rem; left: -10rem; background: var(--accent); animation-delay: 1s; }

@keyframes float-up {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(-20px); }
}

/* Notes counter */
.counter {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    border-radius: 9999px;
    border: 2px solid var(--accent);
    color: var(--accent);
    font-weight: 500;
    margin-bottom: 1.5rem;
}

/* Sticky note */
.sticky-note {
    width: 20rem;
    height: 20rem;
    border-radius: 1rem;
    padding: 1.5rem;
    display: flex;
    flex-direction: column;
    background: var(--sticky);
    box-shadow: 0 10px 25px var(--sticky-shadow);
    transition: transform 0.3s;
    margin-bottom: 2rem;
}
.sticky-note:hover { transform: rotate(1deg) translateY(-4px); }
.sticky-note.captured { animation: void-swirl 0.8s ease-in forwards; }

@keyframes void-swirl {
    0% { transform: scale(1) rotate(0deg); opacity: 1; }
    60% { transform: scale(0.6) rotate(180deg); opacity: 0.4; }
    100% { transform: scale(1) rotate(360deg); opacity: 1; }
}

.sticky-note textarea {
    flex: 1;
    width: 100%;
    resize: none;
    background: transparent;
    border: none;
    outline: none;
    font-size: 1.125rem;
    line-height: 1.6;
    color: var(--fg);
    font-family: "Comic Sans MS", "Bradley Hand", cursive;
}

.sticky-footer {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-top: 1rem;
}
.char-count { font-size: 0.875rem; opacity: 0.6; }

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    border-radius: 9999px;
    border: none;
    background: var(--accent);
    color: var(--bg);
    font-weight: 500;
    font-size: 1rem;
    cursor: pointer;
    text-decoration: none;
    transition: transform 0.2s;
}
.btn:hover { transform: scale(1.05); }
.btn:disabled { opacity: 0.5; cursor: not-allowed; transform: none; }
.btn.secondary { background: var(--muted); }
.btn.outline { background: transparent; color: var(--accent); border: 2px solid var(--accent); }
.btn.wide { flex: 1; border-radius: 0.75rem; padding: 0.75rem 1.5rem; }

.btn.done {
    padding: 1rem 2rem;
    border-radius: 1rem;
    font-size: 1.125rem;
    font-weight: 700;
    animation: pulse-glow 2s ease-in-out infinite;
}

@keyframes pulse-glow {
    0%, 100% { box-shadow: 0 0 0 0 rgba(205, 103, 65, 0.4); }
    50% { box-shadow: 0 0 20px 5px rgba(205, 103, 65, 0.2); }
}

.actions {
    display: flex;
    flex-wrap: wrap;
    gap: 0.75rem;
}
.actions form { display: flex; flex: 1; }

/* Processing */
.void-portal {
    width: 8rem;
    height: 8rem;
    border-radius: 50%;
    margin: 0 auto 2rem auto;
    display: flex;
    align-items: center;
    justify-content: center;
    background: radial-gradient(circle, var(--fg) 0%, var(--accent) 100%);
    color: var(--bg);
    font-size: 3rem;
    animation: spin 4s linear infinite;
}
@keyframes spin { to { transform: rotate(360deg); } }

.loading-dots { color: var(--muted); text-align: center; }
.loading-dots::after {
    content: "";
    animation: dots 1.5s steps(4, end) infinite;
}
@keyframes dots {
    0% { content: ""; }
    25% { content: "."; }
    50% { content: ".."; }
    75% { content: "..."; }
}

.link-button {
    background: none;
    border: none;
    color: var(--muted);
    text-decoration: underline;
    cursor: pointer;
    margin-top: 2rem;
    font-size: 0.875rem;
}

/* Result */
.card {
    background: var(--card);
    border-radius: 1rem;
    padding: 1.5rem;
    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
    margin-bottom: 1.5rem;
}
.card p { margin-bottom: 1.5rem; line-height: 1.7; }
.suggestions { list-style: none; }
.suggestions li {
    display: flex;
    gap: 0.75rem;
    align-items: flex-start;
    margin-bottom: 0.75rem;
}
.suggestions li::before {
    content: "\2192";
    color: var(--accent);
    font-weight: 700;
}

/* Share dialog */
.modal-overlay {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.5);
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
    z-index: 50;
}
.modal {
    background: var(--card);
    border-radius: 1rem;
    padding: 1.5rem;
    width: 100%;
    max-width: 28rem;
}
.modal input {
    width: 100%;
    padding: 0.75rem 1rem;
    border-radius: 0.75rem;
    border: 2px solid var(--accent);
    margin-bottom: 1rem;
    font-size: 1rem;
    outline: none;
}
.modal .actions .btn { flex: 1; border-radius: 0.75rem; }
"#;
