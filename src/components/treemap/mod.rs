mod colors;
mod component;
mod config;
mod layout;
mod legend;
mod loader;
mod tooltip;
mod types;

pub use component::TreemapChart;
pub use config::ChartConfig;
pub use loader::{DATA_URL, LoadError, fetch_dataset};
pub use types::Dataset;
