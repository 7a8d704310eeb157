use constcat::concat;

mod components;
mod variables;

pub use components::BASE_COMPONENTS;
pub use variables::CSS_VARIABLES;

pub const PORTFOLIO_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
}

a {
  color: var(--primary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    r#"
/* Page layout */
.page {
  min-height: 100vh;
  color: var(--text-primary);
  background-color: var(--background);
  display: flex;
  flex-direction: column;
}

.container {
  width: 100%;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.app-header {
  position: sticky;
  top: 0;
  z-index: 10;
  background-color: var(--surface);
  border-bottom: 1px solid var(--border);
  box-shadow: var(--shadow-sm);
}

.nav-container {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: var(--space-6) var(--space-4);
}

.owner-name {
  font-size: 1.25rem;
  font-weight: 600;
  color: var(--heading-accent);
}

.nav {
  display: flex;
  align-items: center;
}

.nav-links {
  display: flex;
  align-items: center;
  list-style: none;
  gap: var(--space-6);
  margin-right: var(--space-6);
}

.nav-link {
  font-size: 0.875rem;
  color: var(--text-secondary);
  border-bottom: 2px solid transparent;
}

.nav-link:hover {
  color: var(--primary);
}

.nav-link.active {
  color: var(--primary);
  border-bottom-color: var(--primary);
}

.page-content {
  flex-grow: 1;
  padding-top: var(--space-12);
  padding-bottom: var(--space-12);
}

.section-title {
  font-size: 1.875rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
  color: var(--text-primary);
}

/* Home */
.hero {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: space-between;
  gap: var(--space-8);
}

.hero-text {
  flex: 1 1 320px;
}

.hero-title {
  font-size: 3rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
  color: var(--text-primary);
}

.hero-title .highlight {
  color: var(--primary);
}

.portrait-column {
  flex: 1 1 320px;
  display: flex;
  justify-content: center;
}

.portrait-frame {
  position: relative;
  width: 256px;
  height: 256px;
  overflow: hidden;
  border-radius: var(--radius-full);
  box-shadow: var(--shadow-xl);
  transition: transform var(--transition-normal) var(--easing-standard);
}

.portrait-frame:hover {
  transform: scale(1.05) rotate(3deg);
}

.portrait-tint {
  position: absolute;
  inset: 0;
  opacity: 0.75;
  background-image: linear-gradient(to bottom right, var(--gradient-from), var(--gradient-to));
}

.portrait-image {
  position: absolute;
  height: 200%;
  max-width: none;
  left: 50%;
  top: 40%;
  transform: translate(-50%, -50%);
}

.portrait-initials {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 4rem;
  font-weight: 700;
  color: white;
}

/* About */
.about-header {
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
  margin-bottom: var(--space-6);
}

.about-index {
  font-size: 3.75rem;
  font-weight: 700;
  color: var(--heading-accent);
}

.social-glyphs {
  display: flex;
  gap: var(--space-4);
  color: var(--text-muted);
}

.about-greeting {
  font-size: 2.25rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
}

.about-subtitle {
  font-size: 1.5rem;
  font-weight: 600;
  margin-bottom: var(--space-2);
}

.about-text {
  color: var(--text-body);
  margin-bottom: var(--space-4);
}

/* Skills and works */
.skill-list {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
}

.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
  gap: var(--space-6);
}

.project-title {
  font-size: 1.25rem;
  font-weight: 600;
  margin-bottom: var(--space-2);
  color: var(--primary);
}

.project-description {
  margin-bottom: var(--space-4);
  color: var(--text-secondary);
}

/* Contact */
.contact-rows {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
  color: var(--text-secondary);
}

.contact-row {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.contact-glyph {
  color: var(--primary);
}

/* Footer */
.page-footer {
  margin-top: var(--space-12);
  background-color: var(--surface);
  box-shadow: var(--shadow-sm);
}

.footer-links {
  display: flex;
  justify-content: center;
  gap: var(--space-4);
  padding: var(--space-6) 0;
}

.footer-links a {
  color: var(--text-muted);
}

.footer-links a:hover {
  color: var(--primary);
}
"#
);
