use std::fmt::Write;

use danawood_core::catalog::SiteCatalogs;
use danawood_core::contact::{ContactInquiry, FieldErrors};
use danawood_core::site::{self, ABOUT_PARAGRAPHS, FAQS, PROCESS_STAGES, STATS, WHY_CHOOSE_US};

use super::contact::{contact_details, contact_form};
use super::projects::project_card;
use super::services::service_grid;
use super::{escape, layout, HOME_PROJECTS, HOME_SERVICES};

fn about_section() -> String {
    let mut paragraphs = String::new();
    for p in ABOUT_PARAGRAPHS {
        let _ = write!(paragraphs, "<p>{}</p>", escape(p));
    }
    let mut stats = String::new();
    for stat in STATS {
        let _ = write!(
            stats,
            r#"<div class="stat"><strong>{}</strong><span>{}</span></div>"#,
            escape(stat.value),
            escape(stat.label)
        );
    }
    format!(
        r#"<section id="about" class="about">
<span class="label">About Us</span>
<h2>The Art of Fine Woodworking</h2>
{paragraphs}
<div class="stats">{stats}</div>
</section>"#
    )
}

fn process_section() -> String {
    let mut stages = String::new();
    for stage in PROCESS_STAGES {
        let _ = write!(
            stages,
            r#"<li><span class="number">{}</span><h3>{}</h3><p>{}</p></li>"#,
            escape(stage.number),
            escape(stage.title),
            escape(stage.description)
        );
    }
    format!(
        r#"<section id="process" class="process">
<span class="label">How We Work</span>
<h2>Our Process</h2>
<ol>{stages}</ol>
</section>"#
    )
}

/// Home page: hero, about, featured services and projects, process and
/// the contact form.
pub fn home(catalogs: &SiteCatalogs) -> String {
    let services: Vec<_> = catalogs.services.iter().take(HOME_SERVICES).collect();

    let mut projects = String::new();
    for project in catalogs.projects.iter().take(HOME_PROJECTS) {
        projects.push_str(&project_card(project));
    }

    let body = format!(
        r#"<section id="home" class="hero">
<h1>Crafting Timeless Interiors</h1>
<p>{tagline}</p>
<a href="/projects">View Our Work</a>
<a href="/contact">Get Free Consultation</a>
</section>
{about}
<section id="services" class="services">
<span class="label">Our Services</span>
<h2>Crafting Excellence</h2>
{services}
</section>
<section id="projects" class="projects">
<span class="label">Our Portfolio</span>
<h2>Featured Projects</h2>
<div class="project-grid">{projects}</div>
<a href="/projects">View All Projects</a>
</section>
{process}
<section id="contact" class="contact">
{details}
{form}
</section>"#,
        tagline = escape(site::TAGLINE),
        about = about_section(),
        services = service_grid(&services),
        process = process_section(),
        details = contact_details(),
        form = contact_form(&ContactInquiry::default(), &FieldErrors::default()),
    );
    layout("Home", &body)
}

pub fn about() -> String {
    let body = format!(
        r#"<section class="page-hero">
<span class="label">Who We Are</span>
<h1>About {company}</h1>
<p>Crafting exceptional interiors with precision, passion, and over two decades of expertise.</p>
</section>
{about}
<section class="mission">
<h3>Our Mission</h3>
<p>{mission}</p>
</section>"#,
        company = escape(site::COMPANY_NAME),
        about = about_section(),
        mission = escape(site::MISSION),
    );
    layout("About", &body)
}

pub fn process() -> String {
    let mut highlights = String::new();
    for item in WHY_CHOOSE_US {
        let _ = write!(
            highlights,
            "<li><h3>{}</h3><p>{}</p></li>",
            escape(item.title),
            escape(item.description)
        );
    }
    let mut faqs = String::new();
    for faq in FAQS {
        let _ = write!(
            faqs,
            "<details><summary>{}</summary><p>{}</p></details>",
            escape(faq.question),
            escape(faq.answer)
        );
    }

    let body = format!(
        r#"<section class="page-hero">
<span class="label">How We Work</span>
<h1>Our Process</h1>
</section>
{process}
<section class="why-choose-us">
<h2>Why Choose Us</h2>
<ul>{highlights}</ul>
</section>
<section class="faq">
<h2>Frequently Asked Questions</h2>
{faqs}
</section>"#,
        process = process_section(),
    );
    layout("Process", &body)
}

/// Page for any path that matches no route.
pub fn not_found() -> String {
    layout(
        "Page Not Found",
        r#"<section class="not-found">
<h1>404</h1>
<h2>Page Not Found</h2>
<p>The page you're looking for doesn't exist or has been moved.</p>
<a href="/">&larr; Return to Home</a>
</section>"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_features_first_four_projects() {
        let catalogs = SiteCatalogs::embedded().unwrap();
        let html = home(&catalogs);
        assert!(html.contains(r#"href="/projects/jumeirah-beach-residence""#));
        assert!(!html.contains(r#"href="/projects/downtown-dubai-penthouse""#));
        assert!(html.contains(r#"href="/services/media-units""#));
    }

    #[test]
    fn process_page_lists_faqs() {
        let html = process();
        assert!(html.contains("How long does a typical project take?"));
        assert!(html.contains("German Machinery"));
    }

    #[test]
    fn not_found_links_home() {
        assert!(not_found().contains(r#"<a href="/">"#));
    }
}
