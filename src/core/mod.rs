pub mod axis;
pub mod bar_series;
pub mod easing;
pub mod layout;
pub mod line_series;
pub mod scale;
pub mod spec;
pub mod types;

pub use axis::{CategoryAxis, ValueAxis};
pub use bar_series::{CategoryBar, project_category_bars};
pub use easing::{Easing, EntranceAnimation, ease_out_bounce};
pub use layout::{PlotArea, PlotMargins};
pub use line_series::{LineSegment, project_category_line};
pub use scale::LinearScale;
pub use spec::{ChartSpec, PageData, TitleTemplate, chart_title};
pub use types::{ChartKind, Viewport};
