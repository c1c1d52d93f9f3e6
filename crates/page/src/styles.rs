pub const STYLESHEET: &str = r#"
:root {
  --background: #0b0d14;
  --foreground: #e6e8ef;
  --muted: #8a90a3;
  --primary: #38bdf8;
  --secondary: #1a1e2b;
  --border: rgba(255, 255, 255, 0.06);
  --nav-height: 64px;
}
*, *::before, *::after { box-sizing: border-box; }
body {
  margin: 0;
  background: var(--background);
  color: var(--foreground);
  font-family: "Inter", system-ui, sans-serif;
  line-height: 1.5;
}
::selection { background: rgba(56, 189, 248, 0.3); }
button { font: inherit; cursor: pointer; }
.container { max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; }
.glass { background: rgba(15, 18, 28, 0.6); backdrop-filter: blur(12px); }

.site-nav { position: fixed; top: 0; width: 100%; z-index: 50; border-bottom: 1px solid var(--border); }
.nav-inner { height: var(--nav-height); display: flex; align-items: center; justify-content: space-between; }
.brand { background: none; border: 0; color: var(--primary); font-family: ui-monospace, monospace; font-size: 1.25rem; font-weight: 700; }
.brand:hover { opacity: 0.8; }
.nav-links { display: flex; gap: 2rem; }
.nav-link { background: none; border: 0; color: var(--muted); font-size: 0.875rem; font-weight: 500; }
.nav-link:hover, .nav-link.active { color: var(--primary); }

.btn { display: inline-flex; align-items: center; gap: 0.5rem; border-radius: 0.5rem; border: 1px solid transparent; font-weight: 500; }
.btn-primary { background: var(--primary); color: #04121c; box-shadow: 0 10px 25px rgba(56, 189, 248, 0.2); }
.btn-outline { background: transparent; color: var(--foreground); border-color: rgba(255, 255, 255, 0.1); }
.btn-outline:hover { background: rgba(255, 255, 255, 0.05); }
.btn-sm { padding: 0.35rem 0.75rem; font-size: 0.875rem; }
.btn-md { padding: 0.5rem 1rem; }
.btn-lg { padding: 0.75rem 2rem; font-size: 1.125rem; }

.badge { display: inline-block; border-radius: 999px; padding: 0.15rem 0.75rem; font-size: 0.75rem; border: 1px solid transparent; }
.badge-primary { background: var(--primary); color: #04121c; }
.badge-secondary { background: var(--secondary); color: var(--foreground); }
.badge-outline { border-color: rgba(56, 189, 248, 0.4); color: var(--primary); }
.badge-glow { background: rgba(56, 189, 248, 0.1); padding: 0.25rem 1rem; }

.icon { display: inline-block; vertical-align: middle; }
.icon-sm { width: 1rem; height: 1rem; }
.icon-md { width: 1.5rem; height: 1.5rem; }
.accent-purple { color: #c084fc; width: 1.5rem; height: 1.5rem; }
.accent-green { color: #4ade80; width: 1.5rem; height: 1.5rem; }
.accent-blue { color: #60a5fa; width: 1.5rem; height: 1.5rem; }
.accent-teal { color: #2dd4bf; width: 1.5rem; height: 1.5rem; }
.accent-yellow { color: #facc15; width: 1.5rem; height: 1.5rem; }

.hero { position: relative; height: 100vh; display: flex; align-items: center; justify-content: center; overflow: hidden; }
.hero-bg { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; opacity: 0.4; }
.hero-fade { position: absolute; inset: 0; background: linear-gradient(to bottom, transparent, var(--background)); }
.hero-content { position: relative; z-index: 10; text-align: center; }
.hero-stack > * + * { margin-top: 1.5rem; }
.hero-title { font-size: clamp(3rem, 7vw, 4.5rem); font-weight: 700; letter-spacing: -0.02em; margin: 0; }
.gradient-text { background: linear-gradient(to right, var(--primary), #c084fc); -webkit-background-clip: text; background-clip: text; color: transparent; }
.hero-headline { font-size: 1.5rem; font-weight: 300; color: var(--muted); max-width: 42rem; margin-left: auto; margin-right: auto; }
.hero-quote { font-style: italic; color: var(--muted); max-width: 42rem; margin-left: auto; margin-right: auto; }
.hero-actions { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; padding-top: 2rem; }
.scroll-hint { position: absolute; bottom: 2rem; left: 50%; margin-left: -0.75rem; color: var(--muted); animation: bounce 1s infinite; }
@keyframes bounce { 0%, 100% { translate: 0 -25%; } 50% { translate: 0 0; } }

.section { padding: 6rem 0; }
.section-tinted { background: rgba(26, 30, 43, 0.2); }
.section-title { font-family: ui-monospace, monospace; font-size: 1.875rem; color: var(--primary); text-align: center; margin: 0 0 3rem; }
.about-blurb { max-width: 48rem; margin: 0 auto; text-align: center; }
.lead { font-size: 1.125rem; color: var(--muted); line-height: 1.75; }
.highlight { color: #fff; font-weight: 500; }

.timeline { position: relative; max-width: 48rem; margin: 0 auto; display: grid; gap: 2rem; }
.timeline-rule { position: absolute; left: 50%; top: 0; bottom: 0; width: 2px; background: var(--border); }
.timeline-entry { position: relative; display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; align-items: center; }
.timeline-left .timeline-meta { text-align: right; }
.timeline-right .timeline-meta { order: 2; }
.timeline-right .timeline-bullets { order: 1; text-align: right; list-style: none; }
.timeline-dot { position: absolute; left: 50%; width: 1rem; height: 1rem; margin-left: -0.5rem; border-radius: 50%; background: var(--primary); box-shadow: 0 0 0 4px var(--background); }
.entry-title { font-size: 1.25rem; margin: 0; }
.entry-org { color: var(--primary); font-family: ui-monospace, monospace; font-size: 0.875rem; }
.timeline-bullets { color: var(--muted); font-size: 0.875rem; }

.project-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 1.5rem; }
.project-slot { display: flex; }
.card { display: flex; flex-direction: column; width: 100%; border: 1px solid var(--border); border-radius: 0.75rem; transition: all 0.3s; }
.card:hover { border-color: rgba(56, 189, 248, 0.5); transform: translateY(-4px); }
.card-header, .card-content { padding: 1.5rem; }
.card-content { display: flex; flex-direction: column; flex-grow: 1; padding-top: 0; }
.card-title { font-size: 1.25rem; margin: 0.5rem 0 0; }
.card-description { color: var(--muted); }
.icon-frame { display: inline-flex; padding: 0.5rem; border-radius: 0.5rem; border: 1px solid var(--border); }
.tech-stack { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-top: auto; padding-top: 1rem; }
.tech { font-family: ui-monospace, monospace; font-size: 10px; text-transform: uppercase; letter-spacing: 0.05em; }

.skill-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 2rem; }
.skill-group { padding: 1.5rem; border-radius: 1rem; border: 1px solid var(--border); background: rgba(11, 13, 20, 0.4); }
.skill-category { font-size: 1.125rem; border-bottom: 1px solid var(--border); padding-bottom: 0.5rem; }
.skill-items { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.skill { font-size: 0.875rem; color: var(--muted); }

.site-footer { padding: 3rem 0; border-top: 1px solid var(--border); text-align: center; }
.footer-title { color: #fff; font-size: 1.5rem; margin-bottom: 2rem; }
.socials { display: flex; justify-content: center; gap: 1.5rem; margin-bottom: 2rem; }
.social { display: inline-flex; padding: 0.75rem; border-radius: 999px; background: rgba(26, 30, 43, 0.3); color: var(--foreground); }
.social:hover { background: var(--primary); color: #fff; }
.contact-details { color: var(--muted); font-size: 0.875rem; }
.copyright { font-size: 0.75rem; opacity: 0.5; padding-top: 1rem; }

@media (max-width: 768px) {
  .nav-links, .nav-cta { display: none; }
  .timeline-entry { grid-template-columns: 1fr; }
  .timeline-rule, .timeline-dot { display: none; }
  .timeline-left .timeline-meta, .timeline-right .timeline-bullets { text-align: left; }
}
@media (prefers-reduced-motion: reduce) {
  [data-reveal] { opacity: 1 !important; transform: none !important; }
}
"#;
