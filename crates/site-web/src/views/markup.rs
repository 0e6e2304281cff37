// HTML generated from the authored content.
//
// Pure string building; nothing here touches the DOM, so the page shape can
// be checked on the host.

use crate::constants::*;
use site_core::{
    ContactField, ContactTab, ExperienceDescriptor, NavLayout, NavView, EXPERIENCES,
    SOCIAL_CARDS, TECH_NODES,
};
use std::fmt::Write;

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn cell_selector(index: usize) -> String {
    format!("[{DATA_CELL}=\"{index}\"] .{CELL_FX_CLASS}")
}

fn field_placeholder(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => "Your Name",
        ContactField::Email => "Email Address",
        ContactField::Company => "Company/Organization",
        ContactField::Message => "Tell us about your event vision...",
        ContactField::Phone => "Phone (optional)",
    }
}

/// Everything mounted under the app root, top to bottom.
pub fn page_html() -> String {
    let mut html = String::with_capacity(16 * 1024);
    nav_shell(&mut html);
    _ = write!(
        html,
        r#"<button id="{MUTE_BUTTON_ID}" class="mute-toggle" type="button"></button><div id="{BURST_OVERLAY_ID}" class="ignite-burst {HIDDEN_CLASS}" aria-hidden="true"></div>"#
    );
    hero(&mut html);
    for (i, exp) in EXPERIENCES.iter().enumerate() {
        experience_section(&mut html, i, exp);
    }
    tech_section(&mut html);
    personal_section(&mut html);
    cta_section(&mut html);
    contact_modal(&mut html);
    experience_modal(&mut html);
    html
}

fn nav_shell(html: &mut String) {
    _ = write!(
        html,
        r#"<nav id="{NAV_ID}" aria-label="Page sections"><div class="nav-progress-track"><div id="{NAV_PROGRESS_ID}" class="nav-progress" style="width: 0%"></div></div><button id="{NAV_MENU_TOGGLE_ID}" class="nav-menu-toggle" type="button" aria-expanded="false" aria-controls="{NAV_ITEMS_ID}">☰</button><ul id="{NAV_ITEMS_ID}" class="nav-items"></ul><div id="{LIVE_REGION_ID}" class="sr-only" aria-live="polite"></div></nav>"#
    );
}

fn hero(html: &mut String) {
    let hero_id = site_core::HERO_SECTION_ID;
    _ = write!(
        html,
        r#"<section id="{hero_id}" class="hero"><h1 class="hero-question"><span id="{HERO_TEXT_ID}"></span><span id="{HERO_CURSOR_ID}" class="cursor" aria-hidden="true">|</span></h1><div id="{HERO_EXTRAS_ID}" class="hero-extras {HIDDEN_CLASS}"><div class="hero-logos"><span class="logo">YOUR LOGO</span><span class="sparkle">✨</span><span class="logo">MOSAIC</span></div><button id="{IGNITE_BUTTON_ID}" class="ignite-button" type="button">IGNITE</button><p class="ignite-hint">Go ahead. Start the fire.</p><h2 class="hero-headline">GSHA 2025:<br>Ignite Your Performance</h2><p class="hero-subline">Six disruptive experience concepts for Google Search Honours, designed for culture, clout, and connection.</p></div></section>"#
    );
}

fn experience_section(html: &mut String, index: usize, exp: &ExperienceDescriptor) {
    _ = write!(
        html,
        r#"<section id="{id}" class="experience {REVEAL_CLASS}" style="--accent: {color}"><h2>{name}</h2><p class="tagline">{tagline}</p><p class="description">{description}</p><ol class="phases">"#,
        id = exp.id,
        color = exp.color,
        name = escape(exp.name),
        tagline = escape(exp.tagline),
        description = escape(exp.description),
    );
    for phase in &exp.phases {
        _ = write!(
            html,
            r#"<li><h3>{}</h3><p>{}</p></li>"#,
            escape(phase.title),
            escape(phase.description)
        );
    }
    let kind = exp.kind.as_str();
    _ = write!(
        html,
        r#"</ol><div class="{CELL_CLASS} {kind}" {DATA_CELL}="{index}" role="application" aria-label="Interactive {kind} visual. Click or tap to play."><div class="{CELL_FX_CLASS}"></div></div><button type="button" class="explore" {DATA_EXPERIENCE}="{id}">Explore the full concept</button></section>"#,
        id = exp.id,
    );
}

fn tech_section(html: &mut String) {
    _ = write!(
        html,
        r#"<section id="{}" class="tech"><h2>The Technology Stack</h2><p>A symphony of cutting-edge technologies orchestrated to create unforgettable experiences</p><ul class="tech-nodes">"#,
        site_core::TECH_SECTION_ID
    );
    for node in &TECH_NODES {
        _ = write!(
            html,
            r#"<li class="tech-node" id="tech-{}"><h3>{}</h3><p class="tech-line">{}</p><p class="tech-details">{}</p></li>"#,
            node.id,
            escape(node.name),
            escape(node.description),
            escape(node.details)
        );
    }
    html.push_str("</ul></section>");
}

fn personal_section(html: &mut String) {
    _ = write!(
        html,
        r#"<section id="{}" class="personal {REVEAL_CLASS}"><h2>"If you want the room to remember,<br>you have to set it on fire first."</h2><p>Event experience and concept by <strong>Your Name</strong>, Mosaic Creative Lead.</p><ul class="social-cards">"#,
        site_core::PERSONAL_SECTION_ID
    );
    for card in &SOCIAL_CARDS {
        _ = write!(
            html,
            r#"<li class="social-card {}"><p>{}</p><span class="author">{}</span> <span class="timestamp">{}</span></li>"#,
            card.platform,
            escape(card.content),
            escape(card.author),
            escape(card.timestamp)
        );
    }
    html.push_str("</ul></section>");
}

fn cta_section(html: &mut String) {
    _ = write!(
        html,
        r#"<section id="{}" class="cta {REVEAL_CLASS}"><h2>Ready to ignite<br><span class="glow">GSHA 2025?</span></h2><p>Let's turn performance into legend.</p><button id="{OPEN_CONTACT_ID}" class="cta-button" type="button">Start the Conversation</button></section>"#,
        site_core::CTA_SECTION_ID
    );
}

fn contact_modal(html: &mut String) {
    _ = write!(
        html,
        r#"<div id="{CONTACT_MODAL_ID}" class="modal {HIDDEN_CLASS}" role="dialog" aria-modal="true" aria-labelledby="contact-title"><div id="{CONTACT_BACKDROP_ID}" class="modal-backdrop"></div><div class="modal-panel"><button id="{CONTACT_CLOSE_ID}" class="modal-close" type="button" aria-label="Close">×</button><h2 id="contact-title">Start the Conversation</h2><p>Let's turn performance into legend.</p><div class="tabs" role="tablist">"#
    );
    for tab in ContactTab::ALL {
        _ = write!(
            html,
            r#"<button type="button" role="tab" {DATA_TAB}="{}">{}</button>"#,
            tab.as_str(),
            tab.label()
        );
    }
    _ = write!(
        html,
        r#"</div><div {DATA_PANEL}="{}"><h3>Book a Strategy Session</h3><p>Let's discuss how these concepts can transform your next event</p><ul><li>30-minute strategy call</li><li>Available this week</li><li>Virtual or in-person</li></ul><button id="{BOOK_CALL_ID}" type="button">Book Your Session</button></div>"#,
        ContactTab::Booking.as_str()
    );
    _ = write!(
        html,
        r#"<form id="{CONTACT_FORM_ID}" {DATA_PANEL}="{}"><h3>Send a Message</h3>"#,
        ContactTab::Message.as_str()
    );
    for field in ContactField::ALL {
        let name = field.as_str();
        let placeholder = field_placeholder(field);
        let required = if field.is_required() { " required" } else { "" };
        let input_type = match field {
            ContactField::Email => "email",
            ContactField::Phone => "tel",
            _ => "text",
        };
        if field == ContactField::Message {
            _ = write!(
                html,
                r#"<textarea name="{name}" placeholder="{placeholder}" rows="4"{required}></textarea>"#
            );
        } else {
            _ = write!(
                html,
                r#"<input type="{input_type}" name="{name}" placeholder="{placeholder}"{required}>"#
            );
        }
    }
    _ = write!(
        html,
        r#"<button id="{CONTACT_SUBMIT_ID}" type="submit">Send Message</button></form><div {DATA_PANEL}="{}"><h3>Direct Contact</h3><p>Reach out directly for immediate response</p><a href="mailto:contact@yourname.com">contact@yourname.com</a><a href="tel:+1234567890">+1 (234) 567-8900</a><p>Response time: Within 4 business hours</p></div><div class="modal-footer"><p>Ready to download the complete concept deck?</p><button id="{DOWNLOAD_CONCEPT_ID}" type="button">Download Complete Concept</button></div></div></div>"#,
        ContactTab::Direct.as_str()
    );
}

fn experience_modal(html: &mut String) {
    _ = write!(
        html,
        r#"<div id="{EXPERIENCE_MODAL_ID}" class="modal {HIDDEN_CLASS}" role="dialog" aria-modal="true"><div id="{EXPERIENCE_BACKDROP_ID}" class="modal-backdrop"></div><div class="modal-panel"><button id="{EXPERIENCE_CLOSE_ID}" class="modal-close" type="button" aria-label="Close">×</button><div id="{EXPERIENCE_BODY_ID}"></div><button id="{EXPERIENCE_DOWNLOAD_ID}" type="button">Download PDF</button></div></div>"#
    );
}

/// Detail dialog content for one experience.
pub fn experience_body_html(exp: &ExperienceDescriptor) -> String {
    let mut html = String::new();
    _ = write!(
        html,
        r#"<h2 style="color: {}">{}</h2><p class="tagline">{}</p><p>{}</p><ol class="phases">"#,
        exp.color,
        escape(exp.name),
        escape(exp.tagline),
        escape(exp.full_concept)
    );
    for phase in &exp.phases {
        _ = write!(
            html,
            r#"<li><h3>{}</h3><p>{}</p><p class="animation">{}</p></li>"#,
            escape(phase.title),
            escape(phase.description),
            escape(phase.animation)
        );
    }
    html.push_str("</ol>");
    html
}

/// Navigation list items for the current view.
pub fn nav_items_html(view: &NavView) -> String {
    let mut html = String::new();
    for item in &view.items {
        let s = item.section;
        let (class, current) = if item.active {
            (ACTIVE_CLASS, r#" aria-current="true""#)
        } else {
            ("", "")
        };
        let label = match view.layout {
            NavLayout::Desktop => String::new(),
            NavLayout::Mobile => escape(s.name),
        };
        _ = write!(
            html,
            r#"<li><button type="button" class="nav-item {class}" {DATA_SECTION}="{id}" style="--accent: {color}" title="{name}" aria-label="Go to {name}"{current}><span class="orb"></span><span class="label">{label}</span></button></li>"#,
            id = s.id,
            color = s.color,
            name = escape(s.name),
        );
    }
    html
}
