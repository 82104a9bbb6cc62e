//! Kind-keyed dispatch from an [`ActiveWidget`] to the code that draws it.
//!
//! Adding a new widget kind means registering a new [`Renderer`]; nothing
//! in the dispatch path changes. Kinds without a registration are drawn by
//! the registry's fallback, so an unknown kind never fails to render.

use crate::datasets;
use crate::pie::PieChart;
use crate::placeholder::{NoData, UnknownWidget};
use crate::stat_bar::StatBar;
use ratatui::layout::Rect;
use ratatui::Frame;
use std::collections::HashMap;
use tileboard_core::{ActiveWidget, WidgetKind};

/// Draws the body of one widget card.
///
/// `area` is the card's inner area; the card border and title are drawn by
/// the caller.
pub trait Renderer: Send + Sync {
    fn render(&self, widget: &ActiveWidget, frame: &mut Frame, area: Rect);

    /// Short call to action shown in the card title, if any.
    fn card_action(&self) -> Option<&str> {
        None
    }
}

/// Lookup of [`Renderer`]s by [`WidgetKind`] with an explicit fallback.
pub struct RendererRegistry {
    renderers: HashMap<WidgetKind, Box<dyn Renderer>>,
    fallback: Box<dyn Renderer>,
}

impl RendererRegistry {
    /// An empty registry that draws everything with `fallback`.
    pub fn new(fallback: impl Renderer + 'static) -> Self {
        Self {
            renderers: HashMap::new(),
            fallback: Box::new(fallback),
        }
    }

    /// The stock registry: the reference charts for the seeded kinds, the
    /// no-data placeholder for the generic catalog kinds, and
    /// [`UnknownWidget`] for everything else.
    pub fn with_defaults() -> Self {
        Self::new(UnknownWidget::default())
            .with(
                WidgetKind::CLIENT_ACCOUNTS,
                PieChart::new(datasets::CLIENT_ACCOUNTS),
            )
            .with(
                WidgetKind::RISK_ASSESSMENT,
                PieChart::new(datasets::RISK_ASSESSMENT),
            )
            .with(WidgetKind::SECURITY_SCORE, NoData::default().with_add_hint())
            .with(WidgetKind::WORKLOAD_ALERTS, NoData::default().with_add_hint())
            .with(WidgetKind::REGISTRY_SCAN, StatBar::new(datasets::REGISTRY_SCAN))
            .with(WidgetKind::SECURITY_ISSUES, StatBar::new(datasets::IMAGE_SECURITY))
            .with(WidgetKind::WIDGET_1, NoData::default())
            .with(WidgetKind::WIDGET_2, NoData::default())
    }

    /// Builder form of [`register`](RendererRegistry::register).
    pub fn with(mut self, kind: WidgetKind, renderer: impl Renderer + 'static) -> Self {
        self.register(kind, renderer);
        self
    }

    /// Register `renderer` for `kind`, replacing any earlier registration.
    pub fn register(&mut self, kind: WidgetKind, renderer: impl Renderer + 'static) {
        if self.renderers.insert(kind.clone(), Box::new(renderer)).is_some() {
            tracing::debug!(%kind, "replaced renderer");
        }
    }

    pub fn is_registered(&self, kind: &WidgetKind) -> bool {
        self.renderers.contains_key(kind)
    }

    /// The renderer for `kind`, or the fallback.
    pub fn renderer_for(&self, kind: &WidgetKind) -> &dyn Renderer {
        self.renderers
            .get(kind)
            .map(Box::as_ref)
            .unwrap_or(self.fallback.as_ref())
    }

    pub fn render(&self, widget: &ActiveWidget, frame: &mut Frame, area: Rect) {
        self.renderer_for(&widget.kind).render(widget, frame, area);
    }

    /// The title call to action for `kind`'s renderer.
    pub fn card_action(&self, kind: &WidgetKind) -> Option<&str> {
        self.renderer_for(kind).card_action()
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
