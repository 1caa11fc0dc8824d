#![forbid(unsafe_code)]

//! `kuji` is a duplicate-avoiding seating lottery with a headless chart renderer.
//!
//! The core crate draws randomized seat assignments, rejecting rosters already
//! recorded in the persisted history, and partitions seats into labeled groups.
//! The optional renderer lays the result out on a circular chart and emits SVG.
//!
//! # Features
//!
//! - `render`: enable chart layout + SVG rendering (`kuji::render`)

pub use kuji_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use kuji_render::model::{
        BoardLayout, DoubleRingLayout, ResultsGridLayout, SeatingLayout, SingleRingLayout,
    };
    pub use kuji_render::results::{DEFAULT_RESULT_COLUMNS, layout_results_grid};
    pub use kuji_render::svg::{SvgRenderOptions, render_svg};
    pub use kuji_render::{LabelOrientation, LayoutOptions, RingVariant, layout_seating};

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Core(#[from] kuji_core::Error),
        #[error(transparent)]
        Render(#[from] kuji_render::Error),
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// Lays out an assignment against the engine's effective (themed) config.
    pub fn layout_assignment(
        engine: &kuji_core::Engine,
        assignment: &kuji_core::Assignment,
        layout_options: &LayoutOptions,
    ) -> Result<SeatingLayout> {
        let config = engine.effective_config();
        Ok(kuji_render::layout_seating(
            assignment,
            config.as_value(),
            layout_options,
        )?)
    }

    /// Convenience wrapper that bundles an [`Engine`](kuji_core::Engine) and
    /// common options for headless rendering.
    ///
    /// Intended for UI integrations where threading 3-4 separate parameters per
    /// call is noisy. All work is CPU-bound apart from history persistence.
    #[derive(Debug, Default)]
    pub struct HeadlessRenderer {
        pub engine: kuji_core::Engine,
        pub layout: LayoutOptions,
        pub svg: SvgRenderOptions,
    }

    impl HeadlessRenderer {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_site_config(mut self, site_config: kuji_core::KujiConfig) -> Self {
            self.engine = self.engine.with_site_config(site_config);
            self
        }

        pub fn with_history(mut self, history: kuji_core::HistoryStore) -> Self {
            self.engine = self.engine.with_history(history);
            self
        }

        /// Draws a fresh assignment, records it, and lays out the chart.
        pub fn draw_and_layout(
            &mut self,
            names: &[String],
        ) -> Result<(kuji_core::Assignment, SeatingLayout)> {
            let assignment = self.engine.draw(names)?;
            let layout = layout_assignment(&self.engine, &assignment, &self.layout)?;
            Ok((assignment, layout))
        }

        /// Draws a fresh assignment, records it, and renders the chart to SVG.
        pub fn draw_and_render(
            &mut self,
            names: &[String],
        ) -> Result<(kuji_core::Assignment, String)> {
            let (assignment, layout) = self.draw_and_layout(names)?;
            let svg = render_svg(&layout, &self.svg);
            Ok((assignment, svg))
        }

        /// Lays out an existing assignment without touching the history.
        pub fn layout_assignment(
            &self,
            assignment: &kuji_core::Assignment,
        ) -> Result<SeatingLayout> {
            layout_assignment(&self.engine, assignment, &self.layout)
        }

        /// Lays out the results listing, honoring `seating.resultColumns`.
        pub fn results_grid(&self, assignment: &kuji_core::Assignment) -> ResultsGridLayout {
            let columns = self
                .engine
                .site_config()
                .get_i64("seating.resultColumns")
                .and_then(|n| usize::try_from(n).ok())
                .filter(|n| *n >= 1)
                .unwrap_or(DEFAULT_RESULT_COLUMNS);
            layout_results_grid(assignment, columns)
        }

        pub fn render_assignment_svg(
            &self,
            assignment: &kuji_core::Assignment,
        ) -> Result<String> {
            let layout = self.layout_assignment(assignment)?;
            Ok(render_svg(&layout, &self.svg))
        }
    }
}
