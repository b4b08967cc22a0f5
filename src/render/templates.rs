//! HTML page shell around a rendered listing.

use super::view::escape_text;
use crate::site::Language;

/// Base HTML template.
pub fn base_template(title: &str, language: Language, template: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
</head>
<body class="{}-template appear">
    <main>
        <div class="section">
            {}
        </div>
    </main>
</body>
</html>"#,
        language,
        escape_text(title),
        template,
        content
    )
}
