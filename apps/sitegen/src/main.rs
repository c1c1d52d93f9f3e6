use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use interaction::{
    ManualObserver, PageController, RevealController, RevealState, ScrollOutcome,
    SimulatedViewport, UiEffect, UiEvent,
};
use page::{
    assets::{hero_background_svg, HERO_BACKGROUND_PATH},
    PageOptions, PageRenderer, RenderedPage,
};
use shared::{
    content::SiteContent,
    domain::SectionId,
    error::SiteError,
    settings::{load_settings, normalize_asset_base, Settings},
};
use tracing::{info, warn};

/// Height of the fixed navigation bar, in CSS pixels.
const NAV_HEIGHT: f64 = 64.0;

#[derive(Parser, Debug)]
#[command(about = "Builds and checks the portfolio page")]
struct Cli {
    /// Overrides the configured log filter.
    #[arg(long)]
    log: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Writes the production page into an output directory.
    Build {
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long)]
        asset_base: Option<String>,
    },
    /// Lists section anchors in document order.
    Sections,
    /// Verifies anchors, navigation bindings and reveal targets.
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = load_settings();
    apply_overrides(&mut settings, &cli);
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&settings.log_filter))
        .init();

    match cli.command {
        Command::Build { .. } => {
            let renderer = PageRenderer::new(SiteContent::default(), PageOptions::from(&settings));
            let written = build(&renderer, &settings.out_dir)
                .with_context(|| format!("build into '{}' failed", settings.out_dir.display()))?;
            for path in written {
                info!(path = %path.display(), "wrote");
            }
        }
        Command::Sections => {
            for id in SectionId::ALL {
                println!("{}\t#{id}", id.order());
            }
        }
        Command::Check => {
            let renderer = PageRenderer::new(SiteContent::default(), PageOptions::from(&settings));
            let problems = check(&renderer.render()?);
            if !problems.is_empty() {
                for problem in &problems {
                    warn!("{problem}");
                }
                bail!("{} problem(s) found", problems.len());
            }
            println!("page ok");
        }
    }

    Ok(())
}

/// Command-line flags win over `site.toml` and the environment.
fn apply_overrides(settings: &mut Settings, cli: &Cli) {
    if let Some(log) = &cli.log {
        settings.log_filter = log.clone();
    }
    if let Command::Build { out, asset_base } = &cli.command {
        if let Some(out) = out {
            settings.out_dir = out.clone();
        }
        if let Some(base) = asset_base {
            settings.asset_base = normalize_asset_base(base);
        }
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), SiteError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| SiteError::io(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| SiteError::io(path, e))
}

/// Writes the page, its JSON view and assets under `out`.
fn build(renderer: &PageRenderer, out: &Path) -> Result<Vec<PathBuf>, SiteError> {
    let files = [
        (out.join("index.html"), renderer.render_html()?),
        (out.join("site.json"), renderer.site_json()?),
        (out.join(HERO_BACKGROUND_PATH), hero_background_svg()),
    ];
    let mut written = Vec::with_capacity(files.len());
    for (path, contents) in files {
        write_file(&path, &contents)?;
        written.push(path);
    }
    Ok(written)
}

/// Replays clicks, scrolling and visibility changes over the rendered page.
fn check(page: &RenderedPage) -> Vec<String> {
    let mut problems = Vec::new();

    let rendered = page.section_ids();
    let expected: Vec<&str> = SectionId::ALL.iter().map(|id| id.as_str()).collect();
    if rendered != expected {
        problems.push(format!("section order {rendered:?}, expected {expected:?}"));
    }

    let mut seen = HashSet::new();
    for target in &page.manifest.targets {
        if !seen.insert(target.element_id.as_str()) {
            problems.push(format!("duplicate reveal target '{}'", target.element_id));
        }
        if !page.has_element(&target.element_id) {
            problems.push(format!("reveal target '{}' not rendered", target.element_id));
        }
    }

    let tops: Vec<(String, f64)> = rendered
        .iter()
        .enumerate()
        .map(|(i, id)| (id.clone(), i as f64 * 1000.0))
        .collect();
    let viewport = tops
        .iter()
        .fold(SimulatedViewport::new(), |viewport, (id, top)| {
            viewport.with_element(id.as_str(), *top)
        });
    let reveal = RevealController::mount(page.manifest.targets.clone(), &mut ManualObserver::new());
    let mut controller = PageController::new(viewport, reveal, NAV_HEIGHT);

    for button in page.scroll_buttons() {
        if button.target.parse::<SectionId>().is_err() {
            problems.push(format!("button targets '{}', which is not a section", button.target));
        }
        let effect = controller.handle(UiEvent::NavClicked {
            target: button.target.clone(),
        });
        if effect == UiEffect::Scroll(ScrollOutcome::Missing) {
            problems.push(format!("button targets missing anchor '{}'", button.target));
        }
    }

    for (id, top) in tops.iter().skip(1) {
        controller.handle(UiEvent::Scrolled { top: *top });
        if controller.active_section().map(SectionId::as_str) != Some(id.as_str()) {
            problems.push(format!("scrolling to {top} does not activate '{id}'"));
        }
    }

    for target in &page.manifest.targets {
        controller.handle(UiEvent::Visibility {
            element_id: target.element_id.clone(),
            intersecting: true,
        });
        if controller.reveal().state(&target.element_id) != Some(RevealState::Revealed) {
            problems.push(format!("'{}' never revealed", target.element_id));
        }
    }

    problems
}
