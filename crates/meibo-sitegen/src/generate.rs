//! HTML site generation.
//!
//! Takes the profile list and generates the final static site:
//!
//! - **Index page** (`index.html`): card grid linking every profile
//! - **Profile pages** (`{id}.html`): one page per profile
//!
//! Profiles carrying an `originalPage` reference keep their hand-written
//! page: the index links to it and no page is generated.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating
//! with automatic escaping. CSS is embedded at compile time from `static/`.

use std::fs;
use std::path::Path;

use maud::{html, Markup, DOCTYPE};
use meibo_core::Profile;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

const INDEX_CSS: &str = include_str!("../static/index.css");
const PROFILE_CSS: &str = include_str!("../static/profile.css");

/// Generate the site from a profile list JSON file into `output_dir`.
///
/// Returns the number of profile pages written (the index not counted).
pub fn generate(profiles_path: &Path, output_dir: &Path) -> Result<usize, GenerateError> {
    let content = fs::read_to_string(profiles_path)?;
    let profiles: Vec<Profile> = serde_json::from_str(&content)?;

    fs::create_dir_all(output_dir)?;

    let index_html = render_index(&profiles);
    fs::write(output_dir.join("index.html"), index_html.into_string())?;
    println!("Generated index.html");

    let mut written = 0;
    for profile in &profiles {
        if let Some(page) = &profile.original_page {
            println!("Keeping existing page: {} -> {page}", profile.name);
            continue;
        }

        let page_html = render_profile_page(profile);
        fs::write(
            output_dir.join(profile.page_name()),
            page_html.into_string(),
        )?;
        written += 1;
    }

    println!(
        "Site generated at {}: {} profile pages + index",
        output_dir.display(),
        written
    );
    Ok(written)
}

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ja" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (css) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders the index page with the profile card grid
fn render_index(profiles: &[Profile]) -> Markup {
    let content = html! {
        div.container {
            h1 { "人物プロフィール一覧" }
            div.profiles-grid {
                @for profile in profiles {
                    (render_profile_card(profile))
                }
            }
        }
    };

    base_document("人物プロフィール一覧", INDEX_CSS, content)
}

/// Renders one card in the index grid
fn render_profile_card(profile: &Profile) -> Markup {
    html! {
        a.profile-card href=(profile.page_name()) {
            @if let Some(image) = &profile.image {
                img.profile-image src=(image) alt=(profile.name);
            }
            div.profile-name {
                (profile.name)
                @if let Some(english) = &profile.english_name {
                    span.profile-english { (english) }
                }
            }
            @if let Some(age) = profile.age {
                div.profile-age { (age) "歳" }
            }
            div.profile-occupation { (profile.occupation) }
            div.profile-bio { (profile.bio) }
        }
    }
}

/// Renders a full profile page
fn render_profile_page(profile: &Profile) -> Markup {
    let title = format!("{} - プロフィール", profile.name);

    let content = html! {
        div.container {
            a.back-link href="index.html" { "← 一覧に戻る" }
            div.profile-header {
                @if let Some(image) = &profile.image {
                    img.profile-image src=(image) alt=(profile.name);
                }
                div.profile-info {
                    h1.profile-name { (profile.name) }
                    div.profile-meta {
                        div.meta-item {
                            span.meta-label { "年齢:" }
                            @if let Some(age) = profile.age {
                                span { (age) "歳" }
                            } @else {
                                span { "非公開" }
                            }
                        }
                        div.meta-item {
                            span.meta-label { "職業:" }
                            span { (profile.occupation) }
                        }
                        div.meta-item {
                            span.meta-label { "所在地:" }
                            span { (profile.location) }
                        }
                    }
                    p.profile-bio { (profile.bio) }
                }
            }
            @if !profile.skills.is_empty() {
                div.skills-section {
                    h2.section-title { "スキル" }
                    div.skills-grid {
                        @for skill in &profile.skills {
                            span.skill-tag { (skill) }
                        }
                    }
                }
            }
        }
    };

    base_document(&title, PROFILE_CSS, content)
}
