use crate::chart::{geometry, ChartBackend};
use crate::core::aggregate::Segment;
use crate::utils::error::Result;

/// Keeps the most recent (segments, title) pair and replays the same pure
/// layout whenever the viewport changes. The cache is scoped to one view;
/// nothing is shared across components.
pub struct ChartView<B: ChartBackend> {
    backend: B,
    width: f64,
    height: f64,
    last: Option<(Vec<Segment>, String)>,
}

impl<B: ChartBackend> ChartView<B> {
    pub fn new(backend: B, width: f64, height: f64) -> Self {
        Self {
            backend,
            width,
            height,
            last: None,
        }
    }

    pub fn show(&mut self, segments: Vec<Segment>, title: &str) -> Result<()> {
        self.last = Some((segments, title.to_string()));
        self.redraw()
    }

    pub fn resize(&mut self, width: f64, height: f64) -> Result<()> {
        self.width = width;
        self.height = height;
        if self.last.is_some() {
            self.redraw()
        } else {
            Ok(())
        }
    }

    fn redraw(&self) -> Result<()> {
        let Some((segments, title)) = &self.last else {
            return Ok(());
        };
        let layout = geometry::layout(segments, title, self.width, self.height);
        self.backend.render(&layout)
    }
}
