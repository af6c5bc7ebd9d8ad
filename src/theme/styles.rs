//! Global CSS styles for Artfolio.
//!
//! Warm paper tones with a single ink accent. Animation keyframes used by
//! the interaction controllers live in `artfolio_core::style` and are
//! injected separately, once.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --paper: #fbf7f0;
  --paper-deep: #f1e8da;
  --ink: #2b2522;
  --ink-soft: rgba(43, 37, 34, 0.7);
  --accent: #667eea;
  --accent-deep: #764ba2;
  --error: #ef4444;

  --font-display: 'Playfair Display', Georgia, serif;
  --font-body: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;

  --radius: 12px;
  --shadow: 0 10px 30px rgba(43, 37, 34, 0.12);
}

* { box-sizing: border-box; margin: 0; padding: 0; }

html { scroll-behavior: smooth; }

body {
  background: var(--paper);
  color: var(--ink);
  font-family: var(--font-body);
  line-height: 1.6;
}

/* === Header === */
.site-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 1000;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 2rem;
  transition: background 0.3s ease, backdrop-filter 0.3s ease;
}

.site-logo {
  font-family: var(--font-display);
  font-size: 1.4rem;
  color: var(--ink);
  text-decoration: none;
}

.site-nav { display: flex; gap: 0.5rem; }

.nav-link {
  position: relative;
  overflow: hidden;
  padding: 0.5rem 1rem;
  border-radius: 999px;
  color: var(--ink);
  text-decoration: none;
}

.nav-link:hover { background: var(--paper-deep); }

.nav-link .ripple { background: rgba(102, 126, 234, 0.35); }

/* === Hero === */
.hero {
  position: relative;
  min-height: 90vh;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
  padding: 6rem 2rem 4rem;
}

.hero-parallax {
  position: absolute;
  inset: -20% 0 0 0;
  background:
    radial-gradient(circle at 20% 30%, rgba(102, 126, 234, 0.18), transparent 40%),
    radial-gradient(circle at 80% 60%, rgba(118, 75, 162, 0.16), transparent 45%);
  will-change: transform;
  z-index: 0;
}

.hero-content { position: relative; z-index: 1; text-align: center; }

.artist-name {
  font-family: var(--font-display);
  font-size: clamp(3rem, 8vw, 6rem);
  background: linear-gradient(135deg, var(--accent), var(--accent-deep));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
  transition: filter 1s ease;
}

.hero-tagline { color: var(--ink-soft); font-size: 1.2rem; }

.illustrations {
  position: absolute;
  inset: 0;
  pointer-events: none;
}

.illustration-placeholder {
  position: absolute;
  font-size: 2.5rem;
  animation: float 6s ease-in-out infinite;
}

.illustration-placeholder:nth-child(1) { top: 18%; left: 12%; }
.illustration-placeholder:nth-child(2) { top: 25%; right: 14%; }
.illustration-placeholder:nth-child(3) { bottom: 20%; left: 18%; }
.illustration-placeholder:nth-child(4) { bottom: 16%; right: 20%; }

@keyframes float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-20px); }
}

/* === Sections === */
.page section:not(.hero) { max-width: 1100px; margin: 0 auto; padding: 4rem 2rem; }

.section-title {
  font-family: var(--font-display);
  font-size: 2.2rem;
  margin-bottom: 1.5rem;
}

/* === Portfolio === */
.portfolio-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: 2rem;
}

.portfolio-item {
  position: relative;
  background: white;
  border-radius: var(--radius);
  box-shadow: var(--shadow);
  overflow: hidden;
  cursor: pointer;
  opacity: 0;
  animation: fadeInUp 0.6s ease forwards;
  animation-play-state: paused;
  transition: transform 0.3s ease;
}

.portfolio-item.selected { outline: 2px solid var(--accent); }

.portfolio-art {
  height: 200px;
  display: flex;
  align-items: center;
  justify-content: center;
  background: linear-gradient(135deg, var(--accent), var(--accent-deep));
}

.portfolio-initial {
  font-family: var(--font-display);
  font-size: 4rem;
  color: rgba(255, 255, 255, 0.85);
}

.portfolio-caption { padding: 1.25rem; }

.portfolio-description { color: var(--ink-soft); font-size: 0.95rem; }

.btn-ghost.view-full-size {
  position: absolute;
  top: 1rem;
  right: 1rem;
  padding: 0.4rem 0.9rem;
  border: none;
  border-radius: 999px;
  background: rgba(255, 255, 255, 0.9);
  color: var(--accent-deep);
  cursor: pointer;
}

/* Uses `translate` so the hover tilt keeps the `transform` property. */
@keyframes fadeInUp {
  from { opacity: 0; translate: 0 30px; }
  to { opacity: 1; translate: 0 0; }
}

/* === Modals === */
.modal {
  display: none;
  position: fixed;
  inset: 0;
  z-index: 2000;
  background: rgba(0, 0, 0, 0.8);
  overflow-y: auto;
}

.modal-content {
  position: relative;
  max-width: 800px;
  margin: 5vh auto;
  padding: 2rem;
  background: var(--paper);
  border-radius: var(--radius);
}

.modal-image { width: 100%; border-radius: 8px; margin-bottom: 1rem; }

.modal-title { font-family: var(--font-display); font-size: 1.8rem; }

.close {
  position: absolute;
  top: 0.75rem;
  right: 1.25rem;
  font-size: 2rem;
  cursor: pointer;
  color: var(--ink-soft);
}

.close:hover { color: var(--ink); }

.success-content { max-width: 480px; text-align: center; }

.success-title { font-family: var(--font-display); font-size: 1.6rem; margin-bottom: 0.5rem; }

/* === Forms === */
.contact-form, .newsletter-form { display: flex; flex-direction: column; gap: 1rem; max-width: 640px; }

.newsletter-form { flex-direction: row; }

.form-group { display: flex; flex-direction: column; gap: 0.35rem; }

.form-group input,
.form-group textarea,
.form-group select,
.newsletter-form input {
  padding: 0.75rem 1rem;
  border: 2px solid var(--paper-deep);
  border-radius: 8px;
  background: white;
  font: inherit;
}

.newsletter-form input { flex: 1; }

.btn-primary {
  padding: 0.75rem 1.75rem;
  border: none;
  border-radius: 999px;
  background: linear-gradient(135deg, var(--accent), var(--accent-deep));
  color: white;
  font: inherit;
  cursor: pointer;
}

.btn-primary:disabled { cursor: wait; }

.btn-ghost {
  padding: 0.75rem 1.75rem;
  border: 2px solid var(--accent);
  border-radius: 999px;
  background: transparent;
  color: var(--accent);
  cursor: pointer;
}

/* === Contact details === */
.contact-items {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: 1.5rem;
}

.contact-item {
  padding: 1.5rem;
  background: white;
  border-radius: var(--radius);
  box-shadow: var(--shadow);
  opacity: 0;
  animation: fadeInUp 0.6s ease forwards;
  animation-play-state: paused;
}

/* === Overlays === */
.notification {
  color: white;
  box-shadow: var(--shadow);
}

.confetti-layer { pointer-events: none; }
"#;
