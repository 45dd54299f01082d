//! HTML fragments for animal records and the page template they are spliced into.

use crate::core::{AnimalRecord, FetchOutcome};

/// Marker in the template that is replaced by the generated fragment.
pub const PLACEHOLDER: &str = "__REPLACE_ANIMALS_INFO__";
pub const NO_RESULTS_MESSAGE: &str = "No animal information found";

pub fn escape_html(text: &str) -> String {
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

pub fn error_fragment(name: &str, error: &str) -> String {
    format!(
        r#"<div class="error-message">
    <h2>Error: {}</h2>
    <p>Couldn't find information about "{}"</p>
    <p>Please try another animal name</p>
</div>"#,
        escape_html(error),
        escape_html(name)
    )
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// One `<li>` card. Absent fields drop their whole line.
pub fn serialize_animal(record: &AnimalRecord) -> String {
    let characteristics = &record.characteristics;
    let mut details = Vec::new();

    if let Some(diet) = present(characteristics.diet.as_deref()) {
        details.push(format!(
            "<p><strong>Diet:</strong> {}</p>",
            escape_html(diet)
        ));
    }
    if let Some(location) = present(record.first_location()) {
        details.push(format!(
            "<p><strong>Location:</strong> {}</p>",
            escape_html(location)
        ));
    }
    if let Some(kind) = present(characteristics.kind.as_deref()) {
        details.push(format!(
            "<p><strong>Type:</strong> {}</p>",
            escape_html(kind)
        ));
    }
    if let Some(description) = present(characteristics.description.as_deref()) {
        details.push(format!("<p>{}</p>", escape_html(description)));
    }

    let mut card = String::from("<li class=\"animal-card\">\n");
    card.push_str(&format!("    <h2>{}</h2>\n", escape_html(&record.name)));
    card.push_str("    <div class=\"animal-details\">\n");
    for line in details {
        card.push_str("        ");
        card.push_str(&line);
        card.push('\n');
    }
    card.push_str("    </div>\n</li>");
    card
}

pub fn render_outcome(outcome: &FetchOutcome, name: &str) -> String {
    match outcome {
        FetchOutcome::Error(error) => error_fragment(name, error),
        FetchOutcome::Records(records) if records.is_empty() => {
            error_fragment(name, NO_RESULTS_MESSAGE)
        }
        FetchOutcome::Records(records) => records
            .iter()
            .map(serialize_animal)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Returns `None` when the template has no placeholder.
pub fn substitute(template: &str, fragment: &str) -> Option<String> {
    let occurrences = template.matches(PLACEHOLDER).count();
    if occurrences == 0 {
        return None;
    }
    if occurrences > 1 {
        tracing::warn!(
            "Template contains {} placeholders, replacing all of them",
            occurrences
        );
    }
    Some(template.replace(PLACEHOLDER, fragment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Characteristics;

    fn record(name: &str) -> AnimalRecord {
        AnimalRecord {
            name: name.to_string(),
            taxonomy: Default::default(),
            locations: vec![],
            characteristics: Characteristics::default(),
        }
    }

    #[test]
    fn test_missing_diet_has_no_diet_line() {
        let mut fox = record("Fox");
        fox.characteristics.kind = Some("Mammal".to_string());

        let html = serialize_animal(&fox);

        assert!(!html.contains("Diet:"));
        assert!(!html.contains("Location:"));
        assert!(html.contains("<p><strong>Type:</strong> Mammal</p>"));
    }

    #[test]
    fn test_only_first_location_is_rendered() {
        let mut fox = record("Fox");
        fox.locations = vec!["Europe".to_string(), "Asia".to_string()];

        let html = serialize_animal(&fox);

        assert!(html.contains("<p><strong>Location:</strong> Europe</p>"));
        assert!(!html.contains("Asia"));
    }

    #[test]
    fn test_interpolated_values_are_escaped() {
        let mut evil = record("<script>alert('x')</script>");
        evil.characteristics.description = Some("Fish & \"chips\"".to_string());

        let html = serialize_animal(&evil);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("<p>Fish &amp; &quot;chips&quot;</p>"));
    }

    #[test]
    fn test_render_error_outcome() {
        let outcome = FetchOutcome::Error("yeti not found".to_string());

        let html = render_outcome(&outcome, "yeti");

        assert!(html.starts_with("<div class=\"error-message\">"));
        assert!(html.contains("<h2>Error: yeti not found</h2>"));
        assert!(html.contains("information about &quot;yeti&quot;"));
    }

    #[test]
    fn test_render_empty_records_is_no_results_block() {
        let html = render_outcome(&FetchOutcome::Records(vec![]), "zebra");
        assert_eq!(html, error_fragment("zebra", NO_RESULTS_MESSAGE));
    }

    #[test]
    fn test_render_multiple_records() {
        let outcome = FetchOutcome::Records(vec![record("Fox"), record("Owl")]);

        let html = render_outcome(&outcome, "");

        assert_eq!(html.matches("<li class=\"animal-card\">").count(), 2);
        assert!(html.find("Fox").unwrap() < html.find("Owl").unwrap());
    }

    #[test]
    fn test_substitute_replaces_single_placeholder() {
        let template = "<ul>__REPLACE_ANIMALS_INFO__</ul>";

        let page = substitute(template, "<li>Lion</li>").unwrap();

        assert_eq!(page, "<ul><li>Lion</li></ul>");
        assert!(!page.contains(PLACEHOLDER));
    }

    #[test]
    fn test_substitute_replaces_every_placeholder() {
        let template = "<ul>__REPLACE_ANIMALS_INFO__</ul><ol>__REPLACE_ANIMALS_INFO__</ol>";

        let page = substitute(template, "<li>Lion</li>").unwrap();

        assert_eq!(page, "<ul><li>Lion</li></ul><ol><li>Lion</li></ol>");
        assert_eq!(page.matches(PLACEHOLDER).count(), 0);
    }

    #[test]
    fn test_substitute_without_placeholder() {
        assert!(substitute("<ul></ul>", "<li>Lion</li>").is_none());
    }
}
