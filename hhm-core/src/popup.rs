//! Popup content formatting.
//!
//! Popup fragments are plain HTML strings assembled here and handed to the
//! map glue, which anchors them at the click coordinate. Keeping the
//! assembly in Rust makes the formatting testable without a renderer.

use serde_json::{Map, Value};

/// Which property titles a point popup and which properties stay out of
/// its body table.
#[derive(Debug, Clone, Copy)]
pub struct PopupConfig {
    pub title_field: &'static str,
    pub exclude_fields: &'static [&'static str],
}

/// Popup configuration for the monitoring-location layer.
pub const LOCATIONS_POPUP: PopupConfig = PopupConfig {
    title_field: "description",
    exclude_fields: &["index", "description"],
};

/// Escape a string for inclusion in HTML text or attribute context.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `hydroHealthPct` -> `Hydro Health Pct`.
fn prettify_label(field: &str) -> String {
    let mut out = String::with_capacity(field.len() + 4);
    for (i, c) in field.chars().enumerate() {
        if i == 0 {
            out.extend(c.to_uppercase());
        } else {
            if c.is_uppercase() {
                out.push(' ');
            }
            out.push(c);
        }
    }
    out
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "--".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Build the point-feature popup: a heading from the title field plus a
/// label/value table of the remaining properties.
pub fn point_popup_html(properties: &Map<String, Value>, config: &PopupConfig) -> String {
    let title = properties
        .get(config.title_field)
        .map(format_value)
        .unwrap_or_default();

    let mut html = String::new();
    html.push_str("<div class=\"hhm-popup\">");
    html.push_str(&format!("<h4>{}</h4>", escape_html(&title)));
    html.push_str("<table>");
    for (field, value) in properties {
        if config.exclude_fields.contains(&field.as_str()) {
            continue;
        }
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>",
            escape_html(&prettify_label(field)),
            escape_html(&format_value(value)),
        ));
    }
    html.push_str("</table></div>");
    html
}

/// Build the boundary popup: just the region name.
pub fn boundary_popup_html(name: &str) -> String {
    format!("<div class=\"hhm-popup\">{}</div>", escape_html(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_properties() -> Map<String, Value> {
        json!({
            "description": "Snake River nr Heise",
            "index": 42,
            "locType": "Streamflow",
            "huc8": "Upper Henrys",
            "hydroHealthPct": 96.4,
            "medianIndicator": null,
        })
        .as_object()
        .unwrap()
        .clone()
    }

    #[test]
    fn title_comes_from_the_configured_field() {
        let html = point_popup_html(&sample_properties(), &LOCATIONS_POPUP);
        assert!(html.contains("<h4>Snake River nr Heise</h4>"));
    }

    #[test]
    fn excluded_fields_stay_out_of_the_body() {
        let html = point_popup_html(&sample_properties(), &LOCATIONS_POPUP);
        assert!(!html.contains("<td>42</td>"));
        assert!(!html.contains("Index"));
        // title field appears only in the heading
        assert_eq!(html.matches("Snake River nr Heise").count(), 1);
    }

    #[test]
    fn labels_are_prettified_and_nulls_render_as_dashes() {
        let html = point_popup_html(&sample_properties(), &LOCATIONS_POPUP);
        assert!(html.contains("<td>Hydro Health Pct</td><td>96.4</td>"));
        assert!(html.contains("<td>Median Indicator</td><td>--</td>"));
        assert!(html.contains("<td>Loc Type</td><td>Streamflow</td>"));
    }

    #[test]
    fn values_are_html_escaped() {
        let mut props = sample_properties();
        props.insert("description".into(), json!("<script>alert('x')</script>"));
        let html = point_popup_html(&props, &LOCATIONS_POPUP);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn boundary_popup_escapes_the_name() {
        assert_eq!(
            boundary_popup_html("Upper <Henrys>"),
            "<div class=\"hhm-popup\">Upper &lt;Henrys&gt;</div>"
        );
    }
}
