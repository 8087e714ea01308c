//! Presentational components. Every function here is a pure mapping from
//! props to markup; escaping happens at interpolation time.

mod articles;
mod certifications;
mod platform;
mod repos;
mod sections;

pub use articles::medium_articles;
pub use certifications::certifications;
pub use platform::platform_specs;
pub use repos::repos_list;
pub use sections::{footer, header, intro, subtitle};

use crate::domain::PortfolioPage;

const STYLESHEET: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; color: #0f172a; background: #fff; }
a { color: inherit; }
header { position: fixed; top: 0; left: 0; right: 0; height: 4rem; display: flex; align-items: center; justify-content: space-between; padding: 0 2.5rem; background: #fff; border-bottom: 1px solid #e2e8f0; }
header img { width: 2.5rem; height: 2.5rem; border-radius: 9999px; }
main { position: relative; top: 4.25rem; max-width: 1200px; margin: 0 auto 2.5rem; padding: 0 2.5rem; }
.intro { display: flex; flex-wrap: wrap; gap: 2rem; align-items: center; margin-top: 1.25rem; }
.intro h1 { font-size: 3rem; font-weight: 800; margin: 0 0 .75rem; display: flex; flex-direction: column; }
.primary { color: #7c3aed; }
.muted { color: #64748b; }
.badges { display: flex; flex-wrap: wrap; gap: .5rem; }
.badge { display: inline-flex; gap: .25rem; padding: .125rem .625rem; border-radius: .375rem; background: #f1f5f9; font-size: .75rem; font-weight: 600; text-decoration: none; }
.subtitle { display: flex; gap: .5rem; align-items: center; margin: 2.5rem 0 1rem; font-size: 1.5rem; }
.platform { display: flex; gap: 1rem; align-items: center; margin-bottom: 1rem; }
.platform img { width: 4rem; height: 4rem; border-radius: 9999px; }
.specs { display: flex; gap: 1rem; list-style: none; padding: 0; margin: 0; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 1rem; }
.card { border: 1px solid #e2e8f0; border-radius: .75rem; padding: 1rem; }
.card h3 { margin: 0 0 .5rem; font-size: 1rem; }
footer { margin-top: 5rem; padding: 2rem; text-align: center; font-size: .875rem; color: #64748b; }
"#;

/// Escape text for use in element content and double-quoted attributes
pub fn escape(text: &str) -> String {
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

/// Anchor opening in a new tab
pub(crate) fn external_link(url: &str, class: &str, inner: &str) -> String {
    format!(
        r#"<a href="{}" class="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
        escape(url),
        class,
        inner
    )
}

/// Render the whole page as a standalone HTML document
pub fn render_page(page: &PortfolioPage) -> String {
    let mut body = String::new();

    body.push_str(&header(&page.avatar_url));
    body.push_str(r#"<main>"#);
    body.push_str(&intro(&page.profile));

    body.push_str(&subtitle("GitHub Projects", "github"));
    body.push_str(&platform_specs(&page.github));
    body.push_str(&repos_list(&page.repos));

    body.push_str(&subtitle("Medium Articles", "medium"));
    body.push_str(&medium_articles(&page.articles));

    body.push_str(&subtitle("Certifications", "certifications"));
    body.push_str(&certifications(&page.profile.certifications));

    body.push_str(&subtitle("YouTube Videos", "youtube"));
    body.push_str(&platform_specs(&page.youtube));
    body.push_str("</main>");

    body.push_str(&footer(&page.profile));

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{} | {}</title>\n<style>{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(&page.profile.name),
        escape(&page.profile.headline),
        STYLESHEET,
        body
    )
}
