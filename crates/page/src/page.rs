use askama::Template;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use shared::{
    content::SiteContent,
    domain::{Section, SectionId},
    error::SiteError,
    motion::RevealManifest,
    settings::Settings,
};

use crate::{
    runtime::CLIENT_RUNTIME,
    styles::STYLESHEET,
    views::{self, NavView},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    pub title: String,
    pub description: String,
    /// Prefix for asset URLs, without a trailing slash. Empty means site root.
    pub asset_base: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "Abhishek Harkar | GenAI Full Stack Engineer".into(),
            description: "Portfolio of Abhishek Harkar: GenAI full stack engineering, DevOps and system architecture.".into(),
            asset_base: String::new(),
        }
    }
}

impl From<&Settings> for PageOptions {
    fn from(settings: &Settings) -> Self {
        let mut options = Self {
            asset_base: settings.asset_base.clone(),
            ..Self::default()
        };
        if let Some(title) = &settings.title {
            options.title = title.clone();
        }
        options
    }
}

/// A button carrying `data-scroll-target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollButton {
    pub label: String,
    pub target: String,
}

/// Rendered markup plus every reveal target inside it.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub html: String,
    pub manifest: RevealManifest,
}

impl RenderedPage {
    pub fn document(&self) -> Html {
        Html::parse_fragment(&self.html)
    }

    /// Ids of elements carrying `data-section`, in document order.
    pub fn section_ids(&self) -> Vec<String> {
        let document = self.document();
        select(&document, "[data-section]")
            .into_iter()
            .filter_map(|element| element.value().id().map(str::to_string))
            .collect()
    }

    pub fn scroll_buttons(&self) -> Vec<ScrollButton> {
        let document = self.document();
        select(&document, "[data-scroll-target]")
            .into_iter()
            .filter_map(|element| {
                let target = element.value().attr("data-scroll-target")?;
                Some(ScrollButton {
                    label: text_of(element),
                    target: target.to_string(),
                })
            })
            .collect()
    }

    pub fn has_element(&self, id: &str) -> bool {
        let document = self.document();
        find_by_id(&document, id).is_some()
    }

    /// Trimmed text content of the element with this id.
    pub fn text_by_id(&self, id: &str) -> Option<String> {
        let document = self.document();
        find_by_id(&document, id).map(text_of)
    }

    /// Scroll targets with no element of that id.
    pub fn dangling_targets(&self) -> Vec<String> {
        let document = self.document();
        self.scroll_buttons()
            .into_iter()
            .filter(|button| find_by_id(&document, &button.target).is_none())
            .map(|button| button.target)
            .collect()
    }
}

fn select<'a>(document: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(css) {
        Ok(selector) => document.select(&selector).collect(),
        Err(err) => {
            tracing::warn!(css, error = ?err, "invalid selector");
            Vec::new()
        }
    }
}

fn find_by_id<'a>(document: &'a Html, id: &str) -> Option<ElementRef<'a>> {
    select(document, "[id]")
        .into_iter()
        .find(|element| element.value().id() == Some(id))
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[derive(Template)]
#[template(path = "body.html")]
struct BodyView {
    nav: NavView,
    sections: Vec<String>,
    footer: String,
}

#[derive(Template)]
#[template(path = "page.html")]
struct DocumentView<'a> {
    title: &'a str,
    description: &'a str,
    stylesheet: &'static str,
    body: &'a str,
    manifest_json: String,
    runtime: &'static str,
}

#[derive(Debug, Serialize)]
struct SiteData<'a> {
    content: &'a SiteContent,
    sections: Vec<Section>,
    reveal: &'a RevealManifest,
}

#[derive(Debug, Clone)]
pub struct PageRenderer {
    content: SiteContent,
    options: PageOptions,
}

impl PageRenderer {
    pub fn new(content: SiteContent, options: PageOptions) -> Self {
        Self { content, options }
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    pub fn options(&self) -> &PageOptions {
        &self.options
    }

    /// Navigation bar followed by every section, once each, in order.
    pub fn render(&self) -> Result<RenderedPage, SiteError> {
        let mut manifest = RevealManifest::new();
        let mut sections = Vec::with_capacity(SectionId::ALL.len());
        let mut footer = String::new();
        for id in SectionId::ALL {
            let markup = views::render_section(id, &self.content, &self.options, &mut manifest)?;
            if id == SectionId::Contact {
                footer = markup;
            } else {
                sections.push(markup);
            }
        }
        let body = BodyView {
            nav: views::nav(&self.content),
            sections,
            footer,
        };
        let html = body.render()?;
        tracing::debug!(targets = manifest.targets.len(), "page laid out");
        Ok(RenderedPage { html, manifest })
    }

    /// A single section with its own reveal targets.
    pub fn render_section(&self, id: SectionId) -> Result<RenderedPage, SiteError> {
        let mut manifest = RevealManifest::new();
        let html = views::render_section(id, &self.content, &self.options, &mut manifest)?;
        Ok(RenderedPage { html, manifest })
    }

    /// Complete HTML document with stylesheet, reveal manifest and client runtime.
    pub fn render_html(&self) -> Result<String, SiteError> {
        let page = self.render()?;
        let document = DocumentView {
            title: &self.options.title,
            description: &self.options.description,
            stylesheet: STYLESHEET,
            body: &page.html,
            manifest_json: script_safe(&serde_json::to_string(&page.manifest)?),
            runtime: CLIENT_RUNTIME,
        };
        Ok(document.render()?)
    }

    /// Content, section order and reveal manifest as JSON.
    pub fn site_json(&self) -> Result<String, SiteError> {
        let page = self.render()?;
        let data = SiteData {
            content: &self.content,
            sections: Section::all().collect(),
            reveal: &page.manifest,
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }
}

fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}

#[cfg(test)]
#[path = "tests/page_tests.rs"]
mod tests;
