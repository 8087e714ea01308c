use super::{escape, external_link};
use crate::domain::Certification;

fn badge(certification: &Certification) -> String {
    let image = certification
        .badge_url
        .as_deref()
        .map(|url| format!(r#"<img src="{}" alt="{}" width="96" height="96">"#, escape(url), escape(&certification.name)))
        .unwrap_or_default();

    let inner = format!(
        r#"{}<h3>{}</h3><p class="muted">{}</p>"#,
        image,
        escape(&certification.name),
        escape(&certification.issuer)
    );

    match &certification.url {
        Some(url) => external_link(url, "card certification", &inner),
        None => format!(r#"<div class="card certification">{}</div>"#, inner),
    }
}

pub fn certifications(certifications: &[Certification]) -> String {
    if certifications.is_empty() {
        return r#"<p class="muted">No certifications listed.</p>"#.to_string();
    }

    let badges: String = certifications.iter().map(badge).collect();
    format!(r#"<div class="grid certifications">{}</div>"#, badges)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn certification(url: Option<&str>) -> Certification {
        Certification {
            name: "Scrum Foundation".to_string(),
            issuer: "CertiProf".to_string(),
            url: url.map(|u| u.to_string()),
            badge_url: Some("https://images.credly.com/badge.png".to_string()),
        }
    }

    #[test]
    fn test_linked_certification() {
        let html = certifications(&[certification(Some("https://credly.com/b/1"))]);
        assert!(html.contains(r#"<a href="https://credly.com/b/1""#));
        assert!(html.contains(r#"alt="Scrum Foundation""#));
    }

    #[test]
    fn test_unlinked_certification() {
        let html = certifications(&[certification(None)]);
        assert!(html.contains(r#"<div class="card certification">"#));
        assert!(!html.contains("<a "));
    }
}
