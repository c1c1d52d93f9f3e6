//! Static assets served next to the page.

pub const HERO_BACKGROUND_PATH: &str = "assets/hero-bg.svg";

/// Dark neon backdrop for the hero banner.
pub fn hero_background_svg() -> String {
    let mut lines = String::new();
    for i in 0..12 {
        let y = 40 + i * 60;
        let opacity = 0.05 + (i % 4) as f32 * 0.04;
        lines.push_str(&format!(
            r##"<path d="M0 {y} C480 {c1} 960 {c2} 1920 {y}" stroke="url(#neon)" stroke-width="1.5" fill="none" opacity="{opacity:.2}"/>"##,
            c1 = y - 120,
            c2 = y + 120,
        ));
    }
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 1920 1080" preserveAspectRatio="xMidYMid slice"><defs><radialGradient id="glow" cx="50%" cy="40%" r="70%"><stop offset="0%" stop-color="#1e3a8a" stop-opacity="0.9"/><stop offset="60%" stop-color="#0b0d14" stop-opacity="1"/></radialGradient><linearGradient id="neon" x1="0" x2="1"><stop offset="0%" stop-color="#38bdf8"/><stop offset="100%" stop-color="#c084fc"/></linearGradient></defs><rect width="1920" height="1080" fill="url(#glow)"/>{lines}</svg>"##
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_is_standalone_svg() {
        let svg = hero_background_svg();
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<path").count(), 12);
    }
}
