// Shared by the terminal and browser dashboards

pub mod chart;
pub mod controller;
pub mod domain;
pub mod endpoint;
pub mod error;
pub mod port;
pub mod render;
pub mod source;
#[cfg(feature = "widgets")]
pub mod widgets;

pub use chart::{ChartConfig, ChartKind, ChartTarget, Rgb};
pub use controller::{RequestController, RequestPolicy, SubmitOutcome, UnknownPolicy};
pub use domain::{Difficulty, ProfileStatistics};
pub use endpoint::{EndpointTemplate, DEFAULT_ENDPOINT};
pub use error::{FetchError, SubmitError};
pub use port::{SummaryTile, UiPort};
pub use render::{build_dashboard, ChartRenderer, Dashboard};
pub use source::StatsSource;
