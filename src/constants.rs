// Element ids and class names the page shell in `index.html` provides or the
// sections rely on.
// Shell
pub const BACKGROUND_CANVAS_ID: &str = "particle-canvas";
pub const HEADER_ID: &str = "site-header";
pub const MAIN_ID: &str = "main";

// Header
pub const MENU_TOGGLE_ID: &str = "menu-toggle";
pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const MENU_OPEN_CLASS: &str = "open";
pub const NAV_TARGET_SELECTOR: &str = "[data-nav-target]";

// Hero
pub const TYPEWRITER_ID: &str = "typewriter";
pub const AVATAR_ID: &str = "avatar";

// Sections
pub const ABOUT_ID: &str = "about";
pub const PROJECTS_ID: &str = "projects";
pub const RESUME_ID: &str = "resume";
pub const CONTACT_ID: &str = "contact";
pub const PAGE_REVEALED_CLASS: &str = "animate-in";

// Projects
pub const PROJECT_CARD_SELECTOR: &str = "[data-project-index]";
pub const PROJECT_PREVIEW_BODY_ID: &str = "project-preview-body";
pub const ACTIVE_CLASS: &str = "active";

// Resume
pub const RESUME_DOWNLOAD_ID: &str = "resume-download";
pub const HOVER_PULSE_CLASS: &str = "animate-pulse-3d";

// Contact
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_SUBMIT_ID: &str = "contact-submit";
pub const CONTACT_SUBMIT_LABEL_ID: &str = "contact-submit-label";
pub const SUBMITTING_CLASS: &str = "is-submitting";
