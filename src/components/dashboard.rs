use dioxus::prelude::*;

use crate::analytics::{percent_of, ChartData};
use crate::api::ApiClient;
use crate::models::AnalyticsData;

pub const LOAD_FAILED_MESSAGE: &str = "Could not load analytics data.";

// Segment palette for the category breakdown.
const SLICE_COLORS: [&str; 6] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#A7C957", "#386641",
];

type Snapshot = Result<(AnalyticsData, ChartData), String>;

/// What the dashboard shows for a given fetch state. A failed fetch maps to
/// `Failed` and nothing else; no partial panels.
#[derive(Debug, PartialEq)]
enum DashboardView<'a> {
    Loading,
    Failed,
    Ready(&'a AnalyticsData, &'a ChartData),
}

fn dashboard_view(snapshot: &Option<Snapshot>) -> DashboardView<'_> {
    match snapshot {
        None => DashboardView::Loading,
        Some(Err(_)) => DashboardView::Failed,
        Some(Ok((data, charts))) => DashboardView::Ready(data, charts),
    }
}

// Read-only dashboard. One fetch per mount; the chart rows are derived once
// right after the response lands and never recomputed.
#[component]
pub fn AnalyticsDashboard() -> Element {
    let api = use_context::<ApiClient>();
    let snapshot = use_resource(move || {
        let api = api.clone();
        async move {
            match api.analytics_data().await {
                Ok(data) => {
                    let charts = ChartData::reshape(&data);
                    Ok((data, charts))
                }
                Err(err) => {
                    tracing::error!("Analytics request failed: {err}");
                    Err(err.to_string())
                }
            }
        }
    });

    match dashboard_view(&*snapshot.read_unchecked()) {
        DashboardView::Loading => rsx! {
            div {
                class: "flex items-center justify-center h-full",
                div { class: "spinner" }
            }
        },
        DashboardView::Failed => rsx! {
            div {
                class: "alert-error",
                "{LOAD_FAILED_MESSAGE}"
            }
        },
        DashboardView::Ready(data, charts) => rsx! {
            div {
                class: "flex flex-col gap-4 h-full overflow-y-auto",
                div { class: "text-2xl font-bold", "Analytics Dashboard" }
                div {
                    class: "grid grid-cols-2 gap-4",
                    StatPanel {
                        label: "Total Products",
                        value: data.total_products.to_string()
                    }
                    StatPanel {
                        label: "Image Coverage",
                        value: format!("{}%", data.image_coverage_percent)
                    }
                }
                div {
                    class: "grid grid-cols-2 gap-4",
                    PriceDistributionPanel { data: data.clone() }
                    CategoryPanel { charts: charts.clone() }
                }
                BrandPanel { charts: charts.clone() }
            }
        },
    }
}

#[component]
fn StatPanel(label: String, value: String) -> Element {
    rsx! {
        div {
            class: "bg-white rounded-lg shadow p-4 text-center",
            div { class: "text-lg font-semibold", "{label}" }
            div { class: "text-3xl font-bold text-brand", "{value}" }
        }
    }
}

#[component]
fn PriceDistributionPanel(data: AnalyticsData) -> Element {
    let max_count = data
        .price_distribution
        .iter()
        .map(|b| b.count)
        .max()
        .unwrap_or(0)
        .max(1);

    rsx! {
        div {
            class: "bg-white rounded-lg shadow p-4",
            div { class: "text-lg font-semibold mb-2", "Price Distribution" }
            div {
                class: "flex items-end gap-2 chart-area",
                for (bucket, height) in data
                    .price_distribution
                    .iter()
                    .map(|b| (b, b.count * 100 / max_count))
                {
                    div {
                        class: "flex flex-col flex-1 h-full justify-end text-center",
                        div { class: "text-xs text-gray-500", "{bucket.count}" }
                        div {
                            class: "price-bar w-full",
                            style: "height: {height}%;"
                        }
                        div { class: "text-xs text-gray-500 mt-1", "{bucket.name}" }
                    }
                }
            }
        }
    }
}

#[component]
fn CategoryPanel(charts: ChartData) -> Element {
    let total: u64 = charts.categories.iter().map(|c| c.value).sum();
    let slices: Vec<_> = charts
        .categories
        .iter()
        .enumerate()
        .map(|(i, slice)| {
            (
                slice.name.clone(),
                percent_of(slice.value, total),
                SLICE_COLORS[i % SLICE_COLORS.len()],
            )
        })
        .collect();

    rsx! {
        div {
            class: "bg-white rounded-lg shadow p-4",
            div { class: "text-lg font-semibold mb-2", "Top Categories" }
            div {
                class: "flex w-full rounded overflow-hidden category-bar",
                for (name, pct, color) in slices.iter() {
                    div {
                        key: "{name}",
                        style: "width: {pct}%; background-color: {color};"
                    }
                }
            }
            div {
                class: "flex flex-wrap gap-3 mt-2",
                for (name, pct, color) in slices.iter() {
                    div {
                        key: "{name}",
                        class: "flex items-center gap-1 text-sm",
                        span {
                            class: "legend-dot",
                            style: "background-color: {color};"
                        }
                        "{name} ({pct:.0}%)"
                    }
                }
            }
        }
    }
}

#[component]
fn BrandPanel(charts: ChartData) -> Element {
    // The backend already limits and orders this list; rows render as-is.
    let max_count = charts.brands.iter().map(|b| b.count).max().unwrap_or(0).max(1);

    rsx! {
        div {
            class: "bg-white rounded-lg shadow p-4",
            div { class: "text-lg font-semibold mb-2", "Top Brands" }
            div {
                class: "flex flex-col gap-2",
                for (brand, width) in charts
                    .brands
                    .iter()
                    .map(|b| (b, b.count * 100 / max_count))
                {
                    div {
                        key: "{brand.name}",
                        class: "flex items-center gap-3",
                        div { class: "brand-name text-sm text-gray-700", "{brand.name}" }
                        div {
                            class: "flex-1",
                            div {
                                class: "brand-bar",
                                style: "width: {width}%;"
                            }
                        }
                        div { class: "text-sm text-gray-500", "{brand.count}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resolved() -> (AnalyticsData, ChartData) {
        let data: AnalyticsData = serde_json::from_value(json!({
            "total_products": 10,
            "image_coverage_percent": 50.0,
            "price_distribution": [{ "name": "$0-50", "count": 10 }],
            "brand_counts": { "Acme": 10 },
            "category_counts": { "Chairs": 10 }
        }))
        .unwrap();
        let charts = ChartData::reshape(&data);
        (data, charts)
    }

    #[test]
    fn failed_fetch_shows_only_the_error_notice() {
        let state = Some(Err("connection refused".to_string()));
        assert_eq!(dashboard_view(&state), DashboardView::Failed);
    }

    #[test]
    fn fetch_states_map_to_loading_then_ready() {
        assert_eq!(dashboard_view(&None), DashboardView::Loading);

        let (data, charts) = resolved();
        let state = Some(Ok((data.clone(), charts.clone())));
        assert_eq!(dashboard_view(&state), DashboardView::Ready(&data, &charts));
    }
}
