//! Image prompt composition.

pub const QUALITY_CLAUSE: &str = "high quality, detailed, professional photography";
pub const FILM_STILL_CLAUSE: &str = "film still, dramatic composition";

const STYLE_LABEL: &str = "style:";

/// Build the image prompt for a description and style.
///
/// A leading `style:` label on the style (any case) is dropped.
pub fn compose_prompt(description: &str, style: &str) -> String {
    let style = strip_style_label(style);
    [
        description.to_string(),
        format!("cinematic style, {style}"),
        QUALITY_CLAUSE.to_string(),
        FILM_STILL_CLAUSE.to_string(),
    ]
    .join(", ")
}

fn strip_style_label(style: &str) -> &str {
    let trimmed = style.trim();
    match trimmed.get(..STYLE_LABEL.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(STYLE_LABEL) => {
            trimmed[STYLE_LABEL.len()..].trim()
        }
        _ => trimmed,
    }
}
