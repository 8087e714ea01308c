use chrono::{Datelike, Utc};

use super::{escape, external_link};
use crate::domain::Profile;

pub fn header(avatar_url: &str) -> String {
    format!(
        r##"<header><a href="#intro" class="brand">Portfolio</a><img src="{}" alt="Avatar"></header>"##,
        escape(avatar_url)
    )
}

/// Byte ranges of highlighted phrases in `text`, non-overlapping and in order.
/// At equal start the longer phrase wins.
fn highlight_ranges(text: &str, highlights: &[String]) -> Vec<(usize, usize)> {
    let mut candidates: Vec<(usize, usize)> = highlights
        .iter()
        .filter(|h| !h.is_empty())
        .flat_map(|h| text.match_indices(h.as_str()).map(|(start, m)| (start, start + m.len())))
        .collect();
    candidates.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for (start, end) in candidates {
        if ranges.last().map_or(true, |&(_, last_end)| start >= last_end) {
            ranges.push((start, end));
        }
    }
    ranges
}

/// Bio paragraph with every highlighted phrase emphasised
fn bio(profile: &Profile) -> String {
    let text = &profile.bio;
    let mut html = String::with_capacity(text.len());
    let mut cursor = 0;

    for (start, end) in highlight_ranges(text, &profile.highlights) {
        html.push_str(&escape(&text[cursor..start]));
        html.push_str(&format!(
            r#"<strong class="primary">{}</strong>"#,
            escape(&text[start..end])
        ));
        cursor = end;
    }
    html.push_str(&escape(&text[cursor..]));

    html
}

pub fn intro(profile: &Profile) -> String {
    let badges: String = profile
        .links
        .iter()
        .map(|link| external_link(&link.url, "badge", &format!("{} &#8599;", escape(&link.label))))
        .collect();

    let image = profile
        .image_url
        .as_deref()
        .map(|url| {
            format!(
                r#"<img class="portrait" src="{}" alt="Profile Picture" width="330" height="330">"#,
                escape(url)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<section id="intro" class="intro"><div><h1><span>HI, I&#39;M {}!</span><span class="primary">{}.</span></h1><p class="muted">{}</p><nav class="badges">{}</nav></div>{}</section>"#,
        escape(&profile.name.to_uppercase()),
        escape(&profile.headline.to_uppercase()),
        bio(profile),
        badges,
        image
    )
}

pub fn subtitle(title: &str, id: &str) -> String {
    format!(
        r#"<h2 class="subtitle" id="{}">{}</h2>"#,
        escape(id),
        escape(title)
    )
}

pub fn footer(profile: &Profile) -> String {
    format!(
        "<footer>&copy; {} {}. All rights reserved.</footer>",
        Utc::now().year(),
        escape(&profile.name)
    )
}
