use askama::Template;
use shared::{
    domain::SectionId,
    motion::{RevealManifest, RevealSpec, RevealTrigger},
};

/// Attributes that put an element in its hidden starting state and tell the
/// client runtime how to reveal it.
#[derive(Template, Debug, Clone, PartialEq, Eq)]
#[template(
    source = r#"id="{{ id }}" data-reveal="{{ trigger }}" data-reveal-delay="{{ delay_ms }}" data-reveal-duration="{{ duration_ms }}" style="{{ style }}""#,
    ext = "html"
)]
pub struct RevealAttrs {
    pub id: String,
    pub trigger: &'static str,
    pub delay_ms: u32,
    pub duration_ms: u32,
    pub style: String,
}

/// Records `element_id` in the manifest and returns the attributes its element carries.
pub fn animate(
    manifest: &mut RevealManifest,
    section: SectionId,
    element_id: impl Into<String>,
    spec: RevealSpec,
) -> RevealAttrs {
    let id = element_id.into();
    let initial = spec.initial_state();
    let trigger = match spec.trigger {
        RevealTrigger::Mount => "mount",
        RevealTrigger::InView => "in-view",
    };
    let mut style = format!("opacity: {};", initial.opacity);
    if let Some(transform) = initial.offset.css_transform() {
        style.push_str(&format!(" transform: {transform};"));
    }
    manifest.push(id.clone(), section, spec);
    RevealAttrs {
        id,
        trigger,
        delay_ms: spec.delay_ms,
        duration_ms: spec.duration_ms,
        style,
    }
}

#[cfg(test)]
mod tests {
    use shared::motion::{Offset, Stagger};

    use super::*;

    #[test]
    fn annotated_element_starts_hidden_and_is_recorded() {
        let mut manifest = RevealManifest::new();
        let spec = Stagger::default().apply(2, RevealSpec::in_view(Offset::Y(20.0)));
        let attrs = animate(&mut manifest, SectionId::Projects, "projects-card-2", spec);
        assert_eq!(attrs.id, "projects-card-2");
        assert_eq!(attrs.style, "opacity: 0; transform: translateY(20px);");
        assert_eq!(attrs.trigger, "in-view");
        assert_eq!(attrs.delay_ms, 200);
        assert_eq!(manifest.get("projects-card-2").map(|t| t.spec), Some(spec));
    }

    #[test]
    fn attributes_render_escaped() {
        let attrs = RevealAttrs {
            id: "a\"b".into(),
            trigger: "mount",
            delay_ms: 0,
            duration_ms: 500,
            style: "opacity: 0;".into(),
        };
        let markup = attrs.render().expect("render");
        assert!(markup.starts_with("id=\"a&quot;b\" data-reveal=\"mount\""));
        assert!(markup.ends_with("style=\"opacity: 0;\""));
    }
}
