use serde_json::Value;

use crate::models::AnalyticsData;

/// One row of the ranked brand list.
#[derive(Clone, Debug, PartialEq)]
pub struct BrandCount {
    pub name: String,
    pub count: u64,
}

/// One segment of the category breakdown.
#[derive(Clone, Debug, PartialEq)]
pub struct CategorySlice {
    pub name: String,
    pub value: u64,
}

/// Chart-ready rows derived from one analytics snapshot. Computed once,
/// right after the fetch resolves, and kept alongside the raw data; a pure
/// function of the snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartData {
    pub brands: Vec<BrandCount>,
    pub categories: Vec<CategorySlice>,
}

impl ChartData {
    /// Flattens the backend's count mappings into ordered sequences,
    /// preserving each mapping's iteration order. The backend already
    /// limits and orders the brand list; nothing is re-sorted here.
    pub fn reshape(data: &AnalyticsData) -> Self {
        let brands = data
            .brand_counts
            .iter()
            .map(|(name, value)| BrandCount {
                name: name.clone(),
                count: as_count(value),
            })
            .collect();
        let categories = data
            .category_counts
            .iter()
            .map(|(name, value)| CategorySlice {
                name: name.clone(),
                value: as_count(value),
            })
            .collect();
        Self { brands, categories }
    }
}

fn as_count(value: &Value) -> u64 {
    value.as_u64().unwrap_or(0)
}

pub fn percent_of(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot() -> AnalyticsData {
        serde_json::from_value(json!({
            "total_products": 100,
            "image_coverage_percent": 92.0,
            "price_distribution": [],
            "brand_counts": { "Acme": 5, "Zeta": 2 },
            "category_counts": { "Chairs": 60, "Tables": 25, "Shelves": 15 }
        }))
        .unwrap()
    }

    #[test]
    fn reshape_preserves_mapping_order() {
        let charts = ChartData::reshape(&snapshot());

        assert_eq!(
            charts.brands,
            vec![
                BrandCount { name: "Acme".to_string(), count: 5 },
                BrandCount { name: "Zeta".to_string(), count: 2 },
            ]
        );
        assert_eq!(
            charts.categories.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            vec!["Chairs", "Tables", "Shelves"]
        );
    }

    #[test]
    fn reshape_is_idempotent() {
        let data = snapshot();
        assert_eq!(ChartData::reshape(&data), ChartData::reshape(&data));
    }

    #[test]
    fn non_integer_counts_read_as_zero() {
        let data: AnalyticsData = serde_json::from_value(json!({
            "total_products": 1,
            "image_coverage_percent": 0.0,
            "brand_counts": { "Odd": "five" },
            "category_counts": {}
        }))
        .unwrap();

        let charts = ChartData::reshape(&data);
        assert_eq!(charts.brands[0].count, 0);
        assert!(charts.categories.is_empty());
    }

    #[test]
    fn percent_of_handles_zero_whole() {
        assert_eq!(percent_of(10, 0), 0.0);
        assert_eq!(percent_of(25, 100), 25.0);
        assert_eq!(percent_of(1, 3).round(), 33.0);
    }
}
