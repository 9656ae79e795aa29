use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, info};

use crate::components::treemap::{
	ChartConfig, DATA_URL, Dataset, LoadError, TreemapChart, fetch_dataset,
};

/// Chart variant drawn on the home page.
const CHART: ChartConfig = ChartConfig::MOVIE_SALES;

async fn load() -> Result<Dataset, LoadError> {
	let data = fetch_dataset(DATA_URL).await?;
	info!(
		"Loaded {:?}: {} genres, {} movies",
		data.name,
		data.children.len(),
		data.movie_count()
	);
	Ok(data)
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let dataset = RwSignal::new(None::<Dataset>);

	spawn_local(async move {
		match load().await {
			Ok(data) => dataset.set(Some(data)),
			// Nothing is drawn; the console is the only place this shows up.
			Err(e) => error!("Could not load {DATA_URL}: {e}"),
		}
	});

	view! {
		<div id="chart-container">
			{move || dataset.get().map(|data| view! { <TreemapChart data=data config=CHART /> })}
		</div>
	}
}
