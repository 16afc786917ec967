//! Static company content shared by every page.

use serde::Serialize;

pub const COMPANY_NAME: &str = "Dana Woodworks";

pub const TAGLINE: &str = "Bespoke interiors and custom furniture, crafted in the UAE.";

/// Phone number as displayed.
pub const PHONE_DISPLAY: &str = "+971 56 156 1112";

/// Phone number in `tel:` form.
pub const PHONE_DIAL: &str = "+971561561112";

pub const EMAIL: &str = "info@danawoodworks.ae";

pub const ADDRESS: &str = "Fortune Hotel - Dubai";

pub const WHATSAPP_GREETING: &str =
    "Hello, I'm interested in your woodworking services. Please provide more information.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Home", href: "/" },
    NavLink { name: "About", href: "/about" },
    NavLink { name: "Services", href: "/services" },
    NavLink { name: "Projects", href: "/projects" },
    NavLink { name: "Process", href: "/process" },
    NavLink { name: "Contact", href: "/contact" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "20+", label: "Years Experience" },
    Stat { value: "2,500+", label: "Happy Clients" },
    Stat { value: "100+", label: "Awards Won" },
    Stat { value: "5,000+", label: "Projects Completed" },
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "Dana Wooden Works is the UAE's premier provider of bespoke home interior design, \
     fit-out solutions, and custom-made furniture. With a legacy built on precision \
     craftsmanship and timeless design, we specialize in transforming residential spaces \
     into elegant, functional environments.",
    "From luxurious kitchens and tailor-made closets to handcrafted vanities and full-home \
     fit-outs, every project we undertake reflects our commitment to excellence, innovation, \
     and client satisfaction. Our expert team works closely with homeowners, architects, and \
     consultants to deliver seamless, end-to-end interior solutions.",
];

pub const MISSION: &str = "To deliver world-class interior fit-out solutions that combine \
     innovative design, superior craftsmanship, and personalized service, ensuring every \
     space we create reflects our clients' unique vision and exceeds their expectations.";

/// A numbered stage of the company-wide working process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stage {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS_STAGES: &[Stage] = &[
    Stage {
        number: "01",
        title: "Initial Consultation",
        description: "We begin with understanding your vision, requirements, and lifestyle. \
                      Our designers visit your space to assess dimensions and discuss possibilities.",
    },
    Stage {
        number: "02",
        title: "Design Concept",
        description: "Our team creates detailed 3D renderings and material selections, \
                      ensuring every element aligns with your aesthetic preferences.",
    },
    Stage {
        number: "03",
        title: "Production",
        description: "Your custom pieces are crafted in our high-end factory using premium \
                      materials and state-of-the-art German machinery.",
    },
    Stage {
        number: "04",
        title: "Installation",
        description: "Our professional team handles precise installation, ensuring flawless \
                      execution and minimal disruption to your daily life.",
    },
    Stage {
        number: "05",
        title: "Follow-Up",
        description: "We conduct a final walkthrough with you and provide ongoing support, \
                      backed by our comprehensive warranty program.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

pub const WHY_CHOOSE_US: &[Highlight] = &[
    Highlight {
        title: "20+ Years Experience",
        description: "Two decades of excellence in luxury woodworking and interior design across the UAE.",
    },
    Highlight {
        title: "German Machinery",
        description: "State-of-the-art manufacturing equipment ensuring precision and quality in every piece.",
    },
    Highlight {
        title: "Premium Materials",
        description: "We source only the finest materials from trusted global suppliers.",
    },
    Highlight {
        title: "Expert Craftsmen",
        description: "Our team of skilled artisans brings decades of combined experience to your project.",
    },
    Highlight {
        title: "End-to-End Service",
        description: "From initial consultation to final installation, we manage every detail.",
    },
    Highlight {
        title: "Warranty & Support",
        description: "Comprehensive warranty backed by responsive after-sales support.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "How long does a typical project take?",
        answer: "Project timelines vary based on scope and complexity. A standard kitchen \
                 typically takes 4-6 weeks from design approval to installation, while full \
                 home fit-outs may require 8-12 weeks.",
    },
    Faq {
        question: "Do you provide 3D designs before production?",
        answer: "Yes, we create detailed 3D renderings for all projects. This allows you to \
                 visualize the final result and make any adjustments before production begins.",
    },
    Faq {
        question: "What warranty do you offer?",
        answer: "We provide a comprehensive 5-year warranty on all our woodwork, covering \
                 manufacturing defects and structural integrity. Hardware components carry \
                 their respective manufacturer warranties.",
    },
    Faq {
        question: "Do you work with architects and consultants?",
        answer: "Absolutely. We regularly collaborate with architects, interior designers, and \
                 project consultants to ensure seamless integration of our work into larger projects.",
    },
    Faq {
        question: "What areas do you serve?",
        answer: "We serve clients throughout the UAE, including Dubai, Abu Dhabi, Sharjah, and \
                 other emirates. We also undertake select international projects.",
    },
];

/// Everything a front end needs to render the shared page chrome and the
/// about/process sections.
#[derive(Debug, Clone, Serialize)]
pub struct SiteInfo {
    pub company_name: &'static str,
    pub tagline: &'static str,
    pub phone: &'static str,
    pub phone_dial: &'static str,
    pub email: &'static str,
    pub address: &'static str,
    pub whatsapp_url: String,
    pub nav: &'static [NavLink],
    pub about: &'static [&'static str],
    pub mission: &'static str,
    pub stats: &'static [Stat],
    pub process: &'static [Stage],
    pub why_choose_us: &'static [Highlight],
    pub faqs: &'static [Faq],
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            company_name: COMPANY_NAME,
            tagline: TAGLINE,
            phone: PHONE_DISPLAY,
            phone_dial: PHONE_DIAL,
            email: EMAIL,
            address: ADDRESS,
            whatsapp_url: whatsapp_link(PHONE_DIAL, WHATSAPP_GREETING),
            nav: NAV_LINKS,
            about: ABOUT_PARAGRAPHS,
            mission: MISSION,
            stats: STATS,
            process: PROCESS_STAGES,
            why_choose_us: WHY_CHOOSE_US,
            faqs: FAQS,
        }
    }
}

/// Build a WhatsApp click-to-chat link.
///
/// Non-digits are dropped from `phone`; `text` is percent-encoded with the
/// same unreserved set as JavaScript's `encodeURIComponent`.
///
/// ```
/// use danawood_core::site::whatsapp_link;
///
/// assert_eq!(
///     whatsapp_link("+971 56", "Hi there!"),
///     "https://wa.me/97156?text=Hi%20there!"
/// );
/// ```
pub fn whatsapp_link(phone: &str, text: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    format!("https://wa.me/{digits}?text={}", encode_uri_component(text))
}

fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            other => out.push_str(&format!("%{other:02X}")),
        }
    }
    out
}
