use super::{escape, external_link};
use crate::domain::Repository;

fn repo_card(repo: &Repository) -> String {
    let description = repo
        .description
        .as_deref()
        .map(|d| format!(r#"<p class="muted">{}</p>"#, escape(d)))
        .unwrap_or_default();

    let mut meta = Vec::new();
    if let Some(language) = &repo.language {
        meta.push(escape(language));
    }
    meta.push(format!("&#9733; {}", repo.stargazers_count));
    if repo.forks_count > 0 {
        meta.push(format!("forks {}", repo.forks_count));
    }
    if repo.fork {
        meta.push("fork".to_string());
    }

    let topics: String = repo
        .topics
        .iter()
        .map(|t| format!(r#"<span class="badge">{}</span>"#, escape(t)))
        .collect();

    let inner = format!(
        r#"<h3>{}</h3>{}<p class="meta">{}</p><div class="badges">{}</div>"#,
        escape(&repo.name),
        description,
        meta.join(" &middot; "),
        topics
    );

    external_link(&repo.html_url, "card repo", &inner)
}

/// Grid of repository cards, in the order the API returned them
pub fn repos_list(repos: &[Repository]) -> String {
    if repos.is_empty() {
        return r#"<p class="muted">No public repositories yet.</p>"#.to_string();
    }

    let cards: String = repos.iter().map(repo_card).collect();
    format!(r#"<div class="grid repos">{}</div>"#, cards)
}
