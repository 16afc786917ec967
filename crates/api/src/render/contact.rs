use danawood_core::contact::{ContactAcknowledgement, ContactInquiry, FieldErrors};
use danawood_core::site::{self, whatsapp_link};

use super::{escape, layout};

/// The inquiry form, prefilled with `values` and annotated with `errors`.
pub fn contact_form(values: &ContactInquiry, errors: &FieldErrors) -> String {
    let error_for = |field: &str| {
        errors
            .get(field)
            .map(|msg| format!(r#"<p class="field-error">{}</p>"#, escape(msg)))
            .unwrap_or_default()
    };

    format!(
        r#"<form class="contact-form" method="post" action="/contact">
<label>Full Name *<input name="name" value="{name}" placeholder="Your name"></label>
{name_error}
<label>Email Address *<input name="email" type="email" value="{email}" placeholder="your@email.com"></label>
{email_error}
<label>Phone Number *<input name="phone" type="tel" value="{phone}" placeholder="+971 XX XXX XXXX"></label>
{phone_error}
<label>Your Message<textarea name="message" placeholder="Tell us about your project...">{message}</textarea></label>
{message_error}
<button type="submit">Send Message</button>
</form>"#,
        name = escape(&values.name),
        email = escape(&values.email),
        phone = escape(&values.phone),
        message = escape(values.message.as_deref().unwrap_or_default()),
        name_error = error_for("name"),
        email_error = error_for("email"),
        phone_error = error_for("phone"),
        message_error = error_for("message"),
    )
}

/// Contact details shown beside the form.
pub fn contact_details() -> String {
    format!(
        r#"<div class="contact-details">
<h2>Get In Touch</h2>
<a href="tel:{dial}"><strong>Call Us</strong> {phone}</a>
<a href="mailto:{email}"><strong>Email Us</strong> {email}</a>
<p><strong>Visit Us</strong> {address}</p>
<a class="whatsapp" href="{whatsapp}" target="_blank" rel="noopener noreferrer">Chat on WhatsApp</a>
</div>"#,
        dial = escape(site::PHONE_DIAL),
        phone = escape(site::PHONE_DISPLAY),
        email = escape(site::EMAIL),
        address = escape(site::ADDRESS),
        whatsapp = escape(&whatsapp_link(site::PHONE_DIAL, site::WHATSAPP_GREETING)),
    )
}

/// Full contact page.
pub fn contact_page(values: &ContactInquiry, errors: &FieldErrors) -> String {
    let body = format!(
        r#"<section class="page-hero">
<span class="label">Contact Us</span>
<h1>Let's Create Something Beautiful</h1>
<p>Ready to transform your space? Book a free consultation with our design experts and take the first step towards your dream home.</p>
</section>
<section class="contact">
{details}
{form}
</section>"#,
        details = contact_details(),
        form = contact_form(values, errors),
    );
    layout("Contact", &body)
}

/// Contact page after an accepted inquiry: the acknowledgement and a
/// cleared form.
pub fn contact_sent(ack: &ContactAcknowledgement) -> String {
    let body = format!(
        r#"<section class="notice" role="status">
<h2>{title}</h2>
<p>{description}</p>
</section>
<section class="contact">
{details}
{form}
</section>"#,
        title = escape(ack.title),
        description = escape(ack.description),
        details = contact_details(),
        form = contact_form(&ContactInquiry::default(), &FieldErrors::default()),
    );
    layout("Contact", &body)
}
