use std::fmt::Write;

use danawood_core::catalog::Service;

use super::{bullet_list, escape, layout};

/// Image for a service, or the placeholder when it has none.
fn service_image(service: &Service) -> String {
    match &service.image {
        Some(image) => format!(
            r#"<img src="{}" alt="{}">"#,
            escape(image),
            escape(&service.title)
        ),
        None => r#"<div class="placeholder">Image Coming Soon</div>"#.to_string(),
    }
}

/// Card linking to a service detail page.
pub fn service_card(service: &Service) -> String {
    format!(
        r#"<article class="service-card">
<a href="/services/{id}">
{image}
<span class="number">{number}</span>
<h3>{title}</h3>
</a>
<p>{short}</p>
</article>"#,
        id = escape(&service.id),
        image = service_image(service),
        number = escape(&service.number),
        title = escape(&service.title),
        short = escape(&service.short_description),
    )
}

/// Grid of service cards.
pub fn service_grid(services: &[&Service]) -> String {
    let mut out = String::from(r#"<div class="service-grid">"#);
    for service in services {
        out.push_str(&service_card(service));
    }
    out.push_str("</div>");
    out
}

/// Listing of every service.
pub fn services_page(services: &[&Service]) -> String {
    let body = format!(
        r#"<section class="page-hero">
<span class="label">What We Do</span>
<h1>Our Services</h1>
<p>From concept to completion, we deliver exceptional woodworking and interior solutions tailored to your vision.</p>
</section>
<section class="services">{grid}</section>
<section class="cta">
<h2>Ready to Transform Your Space?</h2>
<p>Let's discuss your project and bring your vision to life with our expert craftsmanship.</p>
<a href="/contact">Request Consultation</a>
</section>"#,
        grid = service_grid(services),
    );
    layout("Services", &body)
}

/// Service detail page with its related-services panel.
pub fn service_detail(service: &Service, related: &[&Service]) -> String {
    let mut included = String::from("<ol class=\"included\">");
    for feature in &service.features {
        let _ = write!(included, "<li>{}</li>", escape(feature));
    }
    included.push_str("</ol>");

    let mut process = String::from("<ol class=\"process\">");
    for (idx, step) in service.process.iter().enumerate() {
        let _ = write!(
            process,
            r#"<li><span class="number">{:02}</span><h3>{}</h3><p>{}</p></li>"#,
            idx + 1,
            escape(&step.step),
            escape(&step.description)
        );
    }
    process.push_str("</ol>");

    // A single image is already shown as the main image.
    let gallery = if service.gallery_images.len() > 1 {
        let mut out = String::from(r#"<section class="gallery"><h2>Project Examples</h2>"#);
        for (idx, image) in service.gallery_images.iter().enumerate() {
            let _ = write!(
                out,
                r#"<img src="{}" alt="{} example {}">"#,
                escape(image),
                escape(&service.title),
                idx + 1
            );
        }
        out.push_str("</section>");
        out
    } else {
        String::new()
    };

    let body = format!(
        r#"<section class="detail-hero">
<a class="back" href="/services">&larr; All Services</a>
<span class="number">{number}</span>
<h1>{title}</h1>
<p>{short}</p>
</section>
<section class="main-image">{image}</section>
<section class="about-service">
<h2>About This Service</h2>
<p>{full}</p>
<h3>Key Benefits</h3>
{benefits}
<a href="/contact">Request a Quote</a>
<h3>What's Included</h3>
{included}
</section>
<section class="service-process">
<h2>Our Process</h2>
{process}
</section>
{gallery}
<section class="related">
<h2>Related Services</h2>
{related}
</section>"#,
        number = escape(&service.number),
        title = escape(&service.title),
        short = escape(&service.short_description),
        image = service_image(service),
        full = escape(&service.full_description),
        benefits = bullet_list(&service.benefits),
        related = service_grid(related),
    );
    layout(&service.title, &body)
}

/// Shown when a service id does not resolve.
pub fn service_not_found() -> String {
    layout(
        "Service Not Found",
        r#"<section class="not-found">
<h1>Service Not Found</h1>
<p>The service you're looking for doesn't exist.</p>
<a href="/services">&larr; Back to Services</a>
</section>"#,
    )
}
