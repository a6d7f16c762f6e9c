//! Global CSS styles for the profile card.
//!
//! Light colors live on `:root`; `html.dark` overrides them.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PAPER (Backgrounds) */
  --page-bg: linear-gradient(45deg, #fde2ed 0%, #f8b5d3 100%);
  --card-bg: #fff7fb;
  --card-border: #f3c6da;
  --surface: #ffeef6;

  /* PINK (Titles, Actions, Favorites) */
  --pink: #f78fb3;
  --pink-deep: #c55fa0;
  --pink-glow: rgba(247, 143, 179, 0.35);

  /* MEDALS */
  --gold: #d4af37;
  --silver: #a8a9ad;

  /* TEXT */
  --text-primary: #3a2a35;
  --text-secondary: #7a5f70;
  --text-on-accent: #ffffff;

  /* Typography */
  --font-sans: 'Nunito', 'Segoe UI', system-ui, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

html.dark {
  --page-bg: linear-gradient(45deg, #17121a 0%, #2a1d2a 100%);
  --card-bg: #1e1b24;
  --card-border: #3a2f3f;
  --surface: #2a2431;
  --pink-glow: rgba(247, 143, 179, 0.2);
  --text-primary: #f5eef3;
  --text-secondary: #c9b6c4;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  min-height: 100vh;
  background: var(--page-bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
  transition: background var(--transition-normal), color var(--transition-normal);
}

/* === Page === */
.profile-page {
  padding: 20px;
}

.page-header {
  text-align: center;
  margin-bottom: 30px;
}

.page-title {
  color: var(--pink);
  font-size: 32px;
  margin: 20px 0;
}

.page-subtitle {
  color: var(--pink-deep);
  font-size: 14px;
}

/* === Card === */
.profile-card {
  position: relative;
  max-width: 460px;
  margin: 0 auto;
  padding: 32px 28px;
  background: var(--card-bg);
  border: 1px solid var(--card-border);
  border-radius: 20px;
  box-shadow: 0 12px 32px var(--pink-glow);
  cursor: pointer;
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.profile-card:hover {
  transform: translateY(-4px);
}

.theme-toggle {
  position: absolute;
  top: 16px;
  right: 16px;
  padding: 6px 12px;
  border: 1px solid var(--card-border);
  border-radius: 999px;
  background: var(--surface);
  color: var(--text-primary);
  cursor: pointer;
}

/* === Header === */
.profile-header {
  text-align: center;
  margin-bottom: 24px;
}

.profile-avatar {
  width: 96px;
  height: 96px;
  margin: 0 auto 12px;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  background: var(--pink);
  color: var(--text-on-accent);
  font-size: 36px;
  font-weight: 700;
}

.profile-avatar.pulse {
  animation: pulse 2s infinite;
}

@keyframes pulse {
  0%   { box-shadow: 0 0 0 0 var(--pink-glow); }
  70%  { box-shadow: 0 0 0 16px rgba(0, 0, 0, 0); }
  100% { box-shadow: 0 0 0 0 rgba(0, 0, 0, 0); }
}

.profile-name {
  font-size: 26px;
  color: var(--text-primary);
}

.student-id,
.view-count {
  color: var(--text-secondary);
  font-size: 14px;
  margin-top: 4px;
}

.social-links {
  display: flex;
  justify-content: center;
  gap: 12px;
  margin-top: 12px;
}

.social-links a {
  font-size: 22px;
  text-decoration: none;
  transition: transform var(--transition-fast);
}

.social-links a:hover {
  transform: scale(1.2);
}

/* === Info Grid === */
.profile-info {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 12px;
  margin-bottom: 24px;
}

.info-item {
  padding: 12px;
  border-radius: 12px;
  background: var(--surface);
}

.info-label {
  font-size: 12px;
  color: var(--text-secondary);
  text-transform: uppercase;
}

.info-value {
  font-size: 16px;
  font-weight: 600;
}

/* === Sections === */
.profile-section {
  margin-bottom: 20px;
}

.profile-section h3 {
  margin-bottom: 10px;
  color: var(--pink-deep);
}

.hobbies-list {
  list-style: none;
  display: flex;
  flex-wrap: wrap;
  gap: 8px;
}

.hobby-item,
.skill-tag {
  padding: 6px 12px;
  border-radius: 999px;
  border: 1px solid var(--card-border);
  background: var(--surface);
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.hobby-item.favorite {
  background: var(--pink);
  border-color: var(--pink);
  color: var(--text-on-accent);
}

.skills {
  display: flex;
  flex-wrap: wrap;
  gap: 8px;
}

.skill-tag:hover {
  border-color: var(--pink);
}

/* === Badges === */
.badges {
  display: flex;
  flex-wrap: wrap;
  gap: 8px;
}

.badge {
  padding: 6px 12px;
  border-radius: 999px;
  background: var(--surface);
  font-size: 14px;
}

.badge.gold { border: 1px solid var(--gold); }
.badge.silver { border: 1px solid var(--silver); }
.badge .medal { color: var(--gold); }
.badge.silver .medal { color: var(--silver); }

/* === Buttons === */
.contact-button {
  width: 100%;
  padding: 12px;
  border: none;
  border-radius: 12px;
  background: var(--pink);
  color: var(--text-on-accent);
  font-size: 16px;
  cursor: pointer;
}

.btn-primary,
.btn-secondary {
  padding: 8px 16px;
  border-radius: 8px;
  cursor: pointer;
}

.btn-primary {
  border: none;
  background: var(--pink);
  color: var(--text-on-accent);
}

.btn-secondary {
  border: 1px solid var(--card-border);
  background: transparent;
  color: var(--text-primary);
}

/* === Contact Modal === */
.modal-backdrop {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.45);
  z-index: 10;
}

.contact-modal {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  pointer-events: none;
  z-index: 11;
}

.contact-card {
  position: relative;
  width: min(92vw, 440px);
  padding: 24px;
  border-radius: 16px;
  background: var(--card-bg);
  pointer-events: auto;
}

.modal-close {
  position: absolute;
  top: 12px;
  right: 12px;
  border: none;
  background: transparent;
  color: var(--text-secondary);
  font-size: 18px;
  cursor: pointer;
}

.modal-title {
  margin-bottom: 16px;
  color: var(--pink-deep);
}

.contact-form {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 12px;
}

.contact-form label {
  display: flex;
  flex-direction: column;
  gap: 4px;
  font-size: 13px;
  color: var(--text-secondary);
}

.contact-form .full {
  grid-column: 1 / -1;
}

.input-field {
  padding: 8px;
  border: 1px solid var(--card-border);
  border-radius: 8px;
  background: var(--surface);
  color: var(--text-primary);
  font-family: inherit;
}

.input-field:focus {
  outline: none;
  border-color: var(--pink);
  box-shadow: 0 0 0 3px var(--pink-glow);
}

.textarea {
  resize: vertical;
}

.modal-actions {
  display: flex;
  justify-content: flex-end;
  gap: 8px;
  margin-top: 8px;
}

.contact-sent {
  text-align: center;
}

/* === Toast === */
.toast {
  position: fixed;
  bottom: 24px;
  left: 50%;
  transform: translateX(-50%);
  padding: 10px 18px;
  border-radius: 999px;
  background: var(--pink-deep);
  color: var(--text-on-accent);
  box-shadow: 0 6px 18px var(--pink-glow);
  z-index: 20;
  cursor: pointer;
}
"#;
