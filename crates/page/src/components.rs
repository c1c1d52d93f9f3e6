//! Visual primitives. Each option set maps to the class list the templates apply.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonOptions {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
}

impl ButtonOptions {
    pub fn classes(self) -> String {
        let variant = match self.variant {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
        };
        let size = match self.size {
            ButtonSize::Sm => "btn-sm",
            ButtonSize::Md => "btn-md",
            ButtonSize::Lg => "btn-lg",
        };
        format!("btn {variant} {size}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl BadgeVariant {
    pub fn classes(self) -> &'static str {
        match self {
            BadgeVariant::Primary => "badge badge-primary",
            BadgeVariant::Secondary => "badge badge-secondary",
            BadgeVariant::Outline => "badge badge-outline",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_options_map_to_classes() {
        let options = ButtonOptions {
            variant: ButtonVariant::Outline,
            size: ButtonSize::Lg,
        };
        assert_eq!(options.classes(), "btn btn-outline btn-lg");
        assert_eq!(ButtonOptions::default().classes(), "btn btn-primary btn-md");
    }

    #[test]
    fn badge_variants_share_base_class() {
        assert_eq!(BadgeVariant::Secondary.classes(), "badge badge-secondary");
        assert!(BadgeVariant::Outline.classes().starts_with("badge "));
    }
}
