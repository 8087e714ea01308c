use super::{escape, external_link};
use crate::domain::PlatformSpecs;

/// Card with the platform avatar, name and its counters
pub fn platform_specs(props: &PlatformSpecs) -> String {
    let specs: String = props
        .specs
        .iter()
        .map(|spec| {
            format!(
                r#"<li><strong class="count">{}</strong> <span class="muted">{}</span></li>"#,
                escape(&spec.count),
                escape(&spec.label)
            )
        })
        .collect();

    let image = if props.image_url.is_empty() {
        String::new()
    } else {
        format!(
            r#"<img src="{}" alt="{}">"#,
            escape(&props.image_url),
            escape(&props.title)
        )
    };

    format!(
        r#"<section class="platform">{}<div>{}<ul class="specs">{}</ul></div></section>"#,
        image,
        external_link(&props.link, "title", &format!("<h3>{}</h3>", escape(&props.title))),
        specs
    )
}
