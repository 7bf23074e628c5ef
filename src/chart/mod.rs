pub mod geometry;
pub mod svg;
pub mod view;

use crate::utils::error::Result;
use self::geometry::PieLayout;

/// Rendering collaborator: consumes a computed layout, produces a picture.
pub trait ChartBackend {
    fn render(&self, layout: &PieLayout) -> Result<()>;
}
