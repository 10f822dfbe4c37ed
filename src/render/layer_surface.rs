use serde::{Deserialize, Serialize};

use crate::core::PlotArea;

/// Off-screen composition target for the series layer.
///
/// Sized to the plot area. A new surface (with a bumped `generation`) is
/// created whenever the plot-area pixel size changes, so backends can drop
/// any texture tied to an older generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerSurface {
    pub width: u32,
    pub height: u32,
    pub generation: u64,
}

impl LayerSurface {
    #[must_use]
    pub fn for_plot_area(plot_area: PlotArea, generation: u64) -> Self {
        let (width, height) = plot_area.surface_size();
        Self {
            width,
            height,
            generation,
        }
    }

    /// Returns `true` when this surface already has the size `plot_area` needs.
    #[must_use]
    pub fn fits(self, plot_area: PlotArea) -> bool {
        plot_area.surface_size() == (self.width, self.height)
    }

    /// Keeps `self` when the size still fits, otherwise re-creates it with the
    /// next generation.
    #[must_use]
    pub fn resized_for(self, plot_area: PlotArea) -> Self {
        if self.fits(plot_area) {
            self
        } else {
            Self::for_plot_area(plot_area, self.generation + 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LayerSurface;
    use crate::core::PlotArea;

    #[test]
    fn surface_is_recreated_only_on_size_change() {
        let area = PlotArea::new(100.0, 400.0, 100.0, 300.0).expect("area");
        let surface = LayerSurface::for_plot_area(area, 0);
        assert_eq!((surface.width, surface.height), (300, 200));

        let shifted = PlotArea::new(50.0, 350.0, 10.0, 210.0).expect("area");
        assert_eq!(surface.resized_for(shifted), surface);

        let larger = PlotArea::new(100.0, 500.0, 100.0, 300.0).expect("area");
        let recreated = surface.resized_for(larger);
        assert_eq!(recreated.generation, 1);
        assert_eq!(recreated.width, 400);
    }
}
