//! HTML rendering for the hours page.

use crate::page::form::FormState;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; background: #f5f7fa; margin: 0; }
.container { max-width: 760px; margin: 40px auto; padding: 32px; background: #fff; border-radius: 12px; box-shadow: 0 4px 20px rgba(0,0,0,.08); }
.title { text-align: center; margin-top: 0; }
label { display: block; font-weight: 600; margin-bottom: 8px; }
textarea { width: 100%; min-height: 120px; padding: 12px; font-size: 15px; border: 2px solid #e1e5e9; border-radius: 8px; box-sizing: border-box; }
.parse-button { width: 100%; margin: 20px 0; padding: 14px; font-size: 16px; font-weight: 600; color: #fff; background: #4f6ef7; border: 0; border-radius: 8px; cursor: pointer; }
.parse-button:disabled { background: #9aa8f0; cursor: not-allowed; }
.loading { display: inline-block; width: 14px; height: 14px; margin-right: 8px; border: 2px solid #fff; border-top-color: transparent; border-radius: 50%; animation: spin 1s linear infinite; vertical-align: middle; }
@keyframes spin { to { transform: rotate(360deg); } }
.output { white-space: pre-wrap; font-family: ui-monospace, monospace; padding: 16px; min-height: 80px; background: #f8f9fa; border: 2px solid #e1e5e9; border-radius: 8px; }
.output.success { border-color: #28a745; background: #f0fff4; }
.output.error { border-color: #dc3545; background: #fff5f5; color: #a71d2a; }
"#;

// Disables the trigger while the form round-trips.
const SCRIPT: &str = r#"
document.getElementById('hours-form').addEventListener('submit', function () {
  var button = document.getElementById('parse-button');
  button.disabled = true;
  button.innerHTML = '<span class="loading"></span>Parsing with AI...';
  document.getElementById('output').className = 'output';
  document.getElementById('output').textContent = 'Processing your request...';
});
"#;

pub fn render_page(state: &FormState) -> String {
    let button = if state.loading {
        r#"<button id="parse-button" class="parse-button" type="submit" disabled><span class="loading"></span>Parsing with AI...</button>"#
    } else {
        r#"<button id="parse-button" class="parse-button" type="submit">Parse Hours</button>"#
    };

    let output_class = match state.status.css_class() {
        "" => "output".to_string(),
        class => format!("output {class}"),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="description" content="Parse natural language business hours descriptions using AI">
<title>Hours of Operation</title>
<style>{STYLE}</style>
</head>
<body>
<div class="container">
<h1 class="title">🕒 Hours of Operation</h1>
<form id="hours-form" method="post" action="/">
<label for="hours_text">Describe your business hours:</label>
<textarea id="hours_text" name="hours_text" placeholder="Enter a natural language description of your business hours...">{input}</textarea>
{button}
</form>
<label>Structured JSON Output:</label>
<div id="output" class="{output_class}">{output}</div>
</div>
<script>{SCRIPT}</script>
</body>
</html>
"#,
        input = escape_html(&state.hours_text),
        output = escape_html(&state.output),
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
