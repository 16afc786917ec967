use std::fmt::Write;

use danawood_core::catalog::{Project, PROJECT_CATEGORIES};

use super::{bullet_list, escape, layout};

/// Card linking to a project detail page.
pub fn project_card(project: &Project) -> String {
    format!(
        r#"<article class="project-card">
<a href="/projects/{id}">
<img src="{image}" alt="{title}">
<span class="category">{category}</span>
<h3>{title}</h3>
<p class="meta">{location} &bull; {year}</p>
</a>
<p>{short}</p>
</article>"#,
        id = escape(&project.id),
        image = escape(&project.image),
        title = escape(&project.title),
        category = escape(&project.category),
        location = escape(&project.location),
        year = escape(&project.year),
        short = escape(&project.short_description),
    )
}

/// Portfolio listing with the category filter bar.
///
/// `active` is the selected filter label; `projects` is already filtered.
pub fn projects_page(projects: &[&Project], active: &str) -> String {
    let mut filters = String::from(r#"<nav class="category-filter">"#);
    for category in PROJECT_CATEGORIES {
        let class = if *category == active { " class=\"active\"" } else { "" };
        let _ = write!(
            filters,
            r#"<a{class} href="/projects?category={query}">{label}</a>"#,
            query = escape(&category_query_value(category)),
            label = escape(category),
        );
    }
    filters.push_str("</nav>");

    let mut grid = String::new();
    if projects.is_empty() {
        grid.push_str(r#"<p class="empty">No projects found in this category.</p>"#);
    } else {
        grid.push_str(r#"<div class="project-grid">"#);
        for project in projects {
            grid.push_str(&project_card(project));
        }
        grid.push_str("</div>");
    }

    let body = format!(
        r#"<section class="page-hero">
<span class="label">Our Portfolio</span>
<h1>Featured Projects</h1>
<p>Explore our collection of bespoke interiors crafted for discerning clients across the UAE.</p>
</section>
<section class="projects">
{filters}
{grid}
</section>"#
    );
    layout("Projects", &body)
}

/// Project detail page with its related-projects panel.
pub fn project_detail(project: &Project, related: &[&Project]) -> String {
    let mut gallery = String::new();
    for (idx, image) in project.gallery_images.iter().enumerate() {
        let _ = write!(
            gallery,
            r#"<img src="{}" alt="{} gallery {}">"#,
            escape(image),
            escape(&project.title),
            idx + 1
        );
    }

    let testimonial = project
        .testimonial
        .as_ref()
        .map(|t| {
            format!(
                r#"<section class="testimonial"><blockquote>&ldquo;{}&rdquo;</blockquote><p class="author">{}</p><p class="role">{}</p></section>"#,
                escape(&t.quote),
                escape(&t.author),
                escape(&t.role)
            )
        })
        .unwrap_or_default();

    let mut related_cards = String::new();
    for p in related {
        related_cards.push_str(&project_card(p));
    }

    let body = format!(
        r#"<section class="detail-hero">
<a class="back" href="/projects">&larr; All Projects</a>
<span class="category">{category}</span>
<h1>{title}</h1>
<p class="meta">{location} &bull; {year}</p>
</section>
<section class="main-image"><img src="{image}" alt="{title}"></section>
<section class="overview">
<h2>Project Overview</h2>
<p>{full}</p>
<h3>Key Features</h3>
{features}
</section>
<section class="challenge-solution">
<div><h3>The Challenge</h3><p>{challenge}</p></div>
<div><h3>Our Solution</h3><p>{solution}</p></div>
</section>
<section class="gallery">{gallery}</section>
{testimonial}
<section class="related">
<h2>Related Projects</h2>
<div class="project-grid">{related_cards}</div>
</section>
<section class="cta">
<h2>Start Your Project</h2>
<a href="/contact">Request a Consultation</a>
</section>"#,
        category = escape(&project.category),
        title = escape(&project.title),
        location = escape(&project.location),
        year = escape(&project.year),
        image = escape(&project.image),
        full = escape(&project.full_description),
        features = bullet_list(&project.features),
        challenge = escape(&project.challenge),
        solution = escape(&project.solution),
    );
    layout(&project.title, &body)
}

/// Shown when a project id does not resolve.
pub fn project_not_found() -> String {
    layout(
        "Project Not Found",
        r#"<section class="not-found">
<h1>Project Not Found</h1>
<p>The project you're looking for doesn't exist.</p>
<a href="/projects">&larr; Back to Projects</a>
</section>"#,
    )
}

/// Query-string form of a category label. Labels are plain words, so only
/// spaces need encoding (as `+`).
fn category_query_value(value: &str) -> String {
    value.replace(' ', "+")
}
