// HTML for the header and the five content sections, built from `content.rs`.
//
// Anything that reveals on scroll starts with `HIDDEN_CLASS` and carries
// `data-reveal-group` / `data-reveal-index` plus the animation class to swap in.
// Elements watched by a section observer carry `data-track-index`.

use super::contact::{Field, SUBMIT_LABEL_IDLE};
use super::content::*;
use super::reveal::SECTION_GROUP;
use std::fmt::Write;

pub const HIDDEN_CLASS: &str = "reveal-hidden";
pub const SECTION_ANIMATE_CLASS: &str = "section-animate";
pub const TRACK_ATTR: &str = "data-track-index";
pub const SKILLS_BLOCK: usize = 3;

pub fn escape_html(text: &str) -> String {
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

/// Attributes for an element hidden until `(group, index)` is revealed.
pub fn reveal_attrs(group: &str, index: usize, animation: &str) -> String {
    format!(
        r#"data-reveal-group="{group}" data-reveal-index="{index}" data-reveal="{animation}""#
    )
}

/// CSS selector matching the element(s) revealed for `(group, index)`.
pub fn reveal_selector(group: &str, index: usize) -> String {
    format!(r#"[data-reveal-group="{group}"][data-reveal-index="{index}"]"#)
}

fn nav_buttons(class: &str) -> String {
    NAV_ITEMS
        .iter()
        .map(|item| {
            format!(
                r#"<button type="button" class="{class}" data-nav-target="{}">{}</button>"#,
                item.target,
                escape_html(item.label)
            )
        })
        .collect()
}

pub fn header() -> String {
    format!(
        r#"<nav class="nav container">
  <button type="button" class="brand" data-nav-target="home"><span class="gradient-text">{initials}</span></button>
  <div class="nav-links">{links}</div>
  <button type="button" id="menu-toggle" class="menu-toggle" aria-label="Toggle menu" aria-expanded="false"><span class="menu-icon"></span></button>
</nav>
<div id="mobile-menu" class="mobile-menu">{mobile}</div>"#,
        initials = OWNER_INITIALS,
        links = nav_buttons("nav-link"),
        mobile = nav_buttons("mobile-link"),
    )
}

pub fn hero() -> String {
    let badges: String = HERO_BADGES
        .iter()
        .map(|b| format!(r#"<span class="badge animate-float">{}</span>"#, escape_html(b)))
        .collect();
    format!(
        r#"<section id="home" class="hero">
  <div class="container hero-grid">
    <div class="hero-text animate-fade-in-left">
      <h1><span class="hero-greeting">Hi, I&#39;m</span><span class="gradient-text hero-name">{name}</span></h1>
      <div class="hero-tagline"><span id="typewriter" class="typewriter" aria-label="{tagline}"></span></div>
      <p class="hero-summary">{summary}</p>
      <div class="hero-badges">{badges}</div>
      <div class="hero-actions">
        <button type="button" class="btn btn-primary" data-nav-target="projects">View My Work</button>
        <button type="button" class="btn btn-outline" data-nav-target="contact">Get In Touch</button>
      </div>
    </div>
    <div class="hero-avatar-wrap animate-scale-in">
      <div id="avatar" class="avatar"><div class="avatar-core">{initials}</div></div>
    </div>
  </div>
  <div class="scroll-indicator" aria-hidden="true"></div>
</section>"#,
        name = escape_html(OWNER_NAME),
        tagline = escape_html(HERO_TAGLINE),
        summary = escape_html(HERO_SUMMARY),
        badges = badges,
        initials = OWNER_INITIALS,
    )
}

fn timeline_cards(entries: &[TimelineEntry], class: &str) -> String {
    let mut out = String::new();
    for (i, e) in entries.iter().enumerate() {
        _ = write!(
            out,
            r#"<div class="card {class} delay-{delay}"><h4>{title}</h4><p class="card-place">{place}</p><p class="card-meta">{meta}</p><p>{desc}</p></div>"#,
            delay = (i + 1) * 200,
            title = escape_html(e.title),
            place = escape_html(e.place),
            meta = escape_html(e.meta),
            desc = escape_html(e.description),
        );
    }
    out
}

pub fn about() -> String {
    let skills: String = SKILLS
        .iter()
        .map(|s| {
            format!(
                r#"<div class="skill-card"><div class="skill-row"><span class="skill-name">{name}</span><span class="skill-level">{level}%</span></div><div class="skill-track"><div class="skill-bar tone-{tone}" data-level="{level}" style="width:0%"></div></div></div>"#,
                name = escape_html(s.name),
                level = s.level,
                tone = s.tone,
            )
        })
        .collect();
    format!(
        r#"<section id="about" class="section {animate}">
  <div class="container">
    <div class="section-head {hidden}" {track}="0" {head}>
      <h2 class="section-title"><span class="gradient-text">About Me</span></h2>
      <p class="section-lead">Passionate about turning complex data into actionable insights that drive business growth</p>
    </div>
    <div class="about-grid">
      <div class="timeline {hidden}" {track}="1" {edu_attrs}>
        <h3 class="block-title">Education</h3>
        {education}
      </div>
      <div class="timeline {hidden}" {track}="2" {exp_attrs}>
        <h3 class="block-title">Experience</h3>
        {experience}
      </div>
    </div>
    <div class="skills {hidden}" {track}="{skills_block}" {skills_attrs}>
      <h3 class="block-title">Technical Skills</h3>
      <div class="skills-grid">{skills}</div>
    </div>
  </div>
</section>"#,
        animate = SECTION_ANIMATE_CLASS,
        hidden = HIDDEN_CLASS,
        track = TRACK_ATTR,
        head = reveal_attrs("block", 0, "animate-fade-in-down"),
        edu_attrs = reveal_attrs("block", 1, "animate-fade-in-left"),
        education = timeline_cards(EDUCATION, "card-education"),
        exp_attrs = reveal_attrs("block", 2, "animate-fade-in-right"),
        experience = timeline_cards(EXPERIENCE, "card-experience"),
        skills_block = SKILLS_BLOCK,
        skills_attrs = reveal_attrs("block", SKILLS_BLOCK, "animate-bounce-in"),
        skills = skills,
    )
}

fn project_card(index: usize, project: &Project, active: bool) -> String {
    let tags: String = project
        .tech_stack
        .iter()
        .map(|t| format!(r#"<span class="tag">{}</span>"#, escape_html(t)))
        .collect();
    format!(
        r#"<div class="project-card {hidden}{active}" {track}="{index}" data-project-index="{index}" {attrs}>
  <div class="project-icon tone-{tone}"></div>
  <div class="project-body"><h3>{title}</h3><p>{desc}</p><div class="tags">{tags}</div></div>
</div>"#,
        hidden = HIDDEN_CLASS,
        active = if active { " active" } else { "" },
        track = TRACK_ATTR,
        index = index,
        attrs = reveal_attrs("project", index, "animate-fade-in-left"),
        tone = project.tone,
        title = escape_html(project.title),
        desc = escape_html(project.description),
        tags = tags,
    )
}

/// Preview pane body for the selected project.
pub fn project_preview(project: &Project) -> String {
    let features: String = project
        .features
        .iter()
        .enumerate()
        .map(|(i, f)| {
            format!(
                r#"<li class="animate-fade-in-right delay-{}">{}</li>"#,
                i * 100,
                escape_html(f)
            )
        })
        .collect();
    format!(
        r#"<div class="preview-image"><img src="{img}" alt="{title}"></div>
<div class="preview-body">
  <h3>{title}</h3>
  <h4>Key Features</h4>
  <ul class="feature-list">{features}</ul>
  <div class="preview-actions"><button type="button" class="btn btn-primary">Live Demo</button><button type="button" class="btn btn-outline">View Code</button></div>
</div>"#,
        img = escape_html(project.image),
        title = escape_html(project.title),
        features = features,
    )
}

pub fn projects(active: usize) -> String {
    let cards: String = PROJECTS
        .iter()
        .enumerate()
        .map(|(i, p)| project_card(i, p, i == active))
        .collect();
    let preview = PROJECTS.get(active).map(project_preview).unwrap_or_default();
    format!(
        r#"<section id="projects" class="section {animate}">
  <div class="container">
    <div class="section-head {hidden}" {head}>
      <h2 class="section-title"><span class="gradient-text">Featured Projects</span></h2>
      <p class="section-lead">Explore my analytics dashboard projects that showcase data storytelling and business intelligence</p>
    </div>
    <div class="projects-grid">
      <div class="project-list">{cards}</div>
      <div class="project-preview {hidden}" {preview_attrs}><div id="project-preview-body">{preview}</div></div>
    </div>
  </div>
</section>"#,
        animate = SECTION_ANIMATE_CLASS,
        hidden = HIDDEN_CLASS,
        head = reveal_attrs(SECTION_GROUP, 0, "animate-fade-in-down"),
        cards = cards,
        preview_attrs = reveal_attrs(SECTION_GROUP, 0, "animate-fade-in-right"),
        preview = preview,
    )
}

pub fn resume() -> String {
    let highlights: String = RESUME_HIGHLIGHTS
        .iter()
        .enumerate()
        .map(|(i, h)| {
            format!(
                r#"<li class="{HIDDEN_CLASS}" {}><span class="dot"></span><span>{}</span></li>"#,
                reveal_attrs("highlight", i, "animate-fade-in-left"),
                escape_html(h)
            )
        })
        .collect();
    let meta = RESUME_META
        .iter()
        .map(|m| format!("<span>{}</span>", escape_html(m)))
        .collect::<Vec<_>>()
        .join(r#"<span class="sep"></span>"#);
    let includes: String = RESUME_INCLUDES
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect();
    format!(
        r#"<section id="resume" class="section {animate}" {track}="0">
  <div class="container">
    <div class="section-head {hidden}" {head}>
      <h2 class="section-title"><span class="gradient-text">My Resume</span></h2>
      <p class="section-lead">Download my complete resume to learn more about my experience and qualifications</p>
    </div>
    <div class="resume-grid">
      <div class="resume-card {hidden}" {card_attrs}>
        <div class="resume-owner"><h3>{name}</h3><p>{role}</p></div>
        <h4>Key Highlights</h4>
        <ul class="highlights">{highlights}</ul>
        <p class="resume-note">Complete details including projects, certifications, and technical skills</p>
      </div>
      <div class="resume-download {hidden}" {download_attrs}>
        <h3>Ready to Download?</h3>
        <p>Get the full details of my professional journey, including detailed project descriptions, technical competencies, and career achievements in data analytics and business intelligence.</p>
        <button type="button" id="resume-download" class="btn btn-primary btn-large">Download Resume</button>
        <div class="resume-meta">{meta}</div>
        <div class="resume-includes"><strong>What&#39;s included:</strong><ul>{includes}</ul></div>
      </div>
    </div>
  </div>
</section>"#,
        animate = SECTION_ANIMATE_CLASS,
        track = TRACK_ATTR,
        hidden = HIDDEN_CLASS,
        head = reveal_attrs(SECTION_GROUP, 0, "animate-fade-in-down"),
        card_attrs = reveal_attrs(SECTION_GROUP, 0, "animate-fade-in-left"),
        name = escape_html(OWNER_NAME),
        role = escape_html(OWNER_ROLE),
        highlights = highlights,
        download_attrs = reveal_attrs(SECTION_GROUP, 0, "animate-fade-in-right"),
        meta = meta,
        includes = includes,
    )
}

fn form_field(field: Field, label: &str, placeholder: &str) -> String {
    let id = field.id();
    let control = match field {
        Field::Message => format!(
            r#"<textarea id="{id}" name="{id}" rows="5" required placeholder="{placeholder}"></textarea>"#
        ),
        Field::Email => format!(
            r#"<input type="email" id="{id}" name="{id}" required placeholder="{placeholder}">"#
        ),
        _ => format!(r#"<input type="text" id="{id}" name="{id}" required placeholder="{placeholder}">"#),
    };
    format!(r#"<div class="form-field"><label for="{id}">{label} *</label>{control}</div>"#)
}

pub fn contact() -> String {
    let info: String = CONTACT_INFO
        .iter()
        .enumerate()
        .map(|(i, c)| {
            format!(
                r#"<a class="contact-item {HIDDEN_CLASS}" href="{href}" {attrs}><span class="contact-icon tone-{tone}"></span><span><span class="contact-label">{label}</span><span class="contact-value">{value}</span></span></a>"#,
                href = escape_html(c.href),
                attrs = reveal_attrs("contact-info", i, "animate-fade-in-right"),
                tone = c.tone,
                label = escape_html(c.label),
                value = escape_html(c.value),
            )
        })
        .collect();
    let social: String = SOCIAL_LINKS
        .iter()
        .enumerate()
        .map(|(i, s)| {
            format!(
                r#"<a class="social-link {HIDDEN_CLASS}" href="{href}" target="_blank" rel="noopener noreferrer" aria-label="{label}" {attrs}>{label}</a>"#,
                href = escape_html(s.href),
                label = escape_html(s.label),
                attrs = reveal_attrs("social", i, "animate-bounce-in"),
            )
        })
        .collect();
    format!(
        r#"<section id="contact" class="section {animate}" {track}="0">
  <div class="container">
    <div class="section-head {hidden}" {head}>
      <h2 class="section-title"><span class="gradient-text">Get In Touch</span></h2>
      <p class="section-lead">Ready to collaborate on your next data analytics project? Let&#39;s discuss how I can help transform your data into insights.</p>
    </div>
    <div class="contact-grid">
      <div class="contact-info {hidden}" {info_attrs}>
        <h3>Let&#39;s Connect</h3>
        <p>I&#39;m always interested in discussing new opportunities in data analytics, business intelligence, and dashboard development. Whether you have a project in mind or just want to connect, I&#39;d love to hear from you.</p>
        <div class="contact-items">{info}</div>
        <div class="social"><h4>Follow Me</h4><div class="social-links">{social}</div></div>
      </div>
      <div class="contact-form-card {hidden}" {form_attrs}>
        <h3>Send a Message</h3>
        <form id="contact-form" class="contact-form">
          <div class="form-row">{name}{email}</div>
          {subject}
          {message}
          <button type="submit" id="contact-submit" class="btn btn-primary btn-block"><span id="contact-submit-label">{label}</span></button>
        </form>
      </div>
    </div>
  </div>
</section>"#,
        animate = SECTION_ANIMATE_CLASS,
        track = TRACK_ATTR,
        hidden = HIDDEN_CLASS,
        head = reveal_attrs(SECTION_GROUP, 0, "animate-fade-in-down"),
        info_attrs = reveal_attrs(SECTION_GROUP, 0, "animate-fade-in-left"),
        info = info,
        social = social,
        form_attrs = reveal_attrs(SECTION_GROUP, 0, "animate-fade-in-right"),
        name = form_field(Field::Name, "Name", "Your name"),
        email = form_field(Field::Email, "Email", "your.email@example.com"),
        subject = form_field(Field::Subject, "Subject", "What&#39;s this about?"),
        message = form_field(Field::Message, "Message", "Tell me about your project or question..."),
        label = SUBMIT_LABEL_IDLE,
    )
}

/// All five content sections in document order.
pub fn page_sections() -> String {
    [hero(), about(), projects(0), resume(), contact()].join("\n")
}
