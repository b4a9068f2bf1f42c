use crate::group_lookup::domain::model::enums::lookup_outcome::LookupOutcome;

/// Renders the lookup page. The form is always present; the section under it
/// depends on the outcome. Every caller-influenced value is escaped at the
/// exact point it is embedded.
pub fn render(
    submitted_upn: Option<&str>,
    outcome: Option<&LookupOutcome>,
    action_url: &str,
) -> String {
    let result_markup = match (submitted_upn, outcome) {
        (_, Some(LookupOutcome::Failure(reason))) => format!(
            r#"                <div class="alert alert-danger">{}</div>"#,
            escape_html(reason)
        ),
        (Some(upn), Some(LookupOutcome::Success(memberships))) => {
            let items = memberships
                .iter()
                .map(|membership| {
                    format!(
                        r#"                    <li class="list-group-item">{}</li>"#,
                        escape_html(membership.display_name().unwrap_or_default())
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");

            format!(
                "                <h5>Groups for <code>{}</code></h5>\n                <ul class=\"list-group\">\n{}\n                </ul>",
                escape_html(upn),
                items
            )
        }
        (Some(upn), Some(LookupOutcome::Empty)) => format!(
            r#"                <div class="alert alert-warning">No groups found for <code>{}</code>.</div>"#,
            escape_html(upn)
        ),
        _ => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Azure AD User Groups</title>
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css" rel="stylesheet">
</head>
<body class="bg-light">
    <div class="container py-5">
        <div class="card shadow-lg">
            <div class="card-body">
                <h1 class="card-title mb-4">Azure AD User Group Lookup</h1>
                <form method="GET" action="{action}" class="row g-3 mb-4">
                    <div class="col-md-8">
                        <input type="email" name="upn" class="form-control" placeholder="Enter UPN">
                    </div>
                    <div class="col-md-4">
                        <button type="submit" class="btn btn-primary w-100">Lookup Groups</button>
                    </div>
                </form>
{result}
            </div>
        </div>
    </div>
</body>
</html>
"#,
        action = escape_html(action_url),
        result = result_markup
    )
}

pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for character in value.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(character),
        }
    }
    escaped
}
