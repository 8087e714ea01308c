use super::{escape, external_link};
use crate::domain::Article;

fn article_card(article: &Article) -> String {
    let date = article
        .published
        .map(|d| format!(r#"<time datetime="{}">{}</time>"#, d.to_rfc3339(), d.format("%b %-d, %Y")))
        .unwrap_or_default();

    let inner = format!(
        r#"<h3>{}</h3>{}<p class="muted">{}</p>"#,
        escape(&article.title),
        date,
        escape(&article.description)
    );

    external_link(&article.link, "card article", &inner)
}

pub fn medium_articles(articles: &[Article]) -> String {
    if articles.is_empty() {
        return r#"<p class="muted">No articles published yet.</p>"#.to_string();
    }

    let cards: String = articles.iter().map(article_card).collect();
    format!(r#"<div class="grid articles">{}</div>"#, cards)
}
