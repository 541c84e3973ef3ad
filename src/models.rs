use serde::Deserialize;
use serde_json::{Map, Value};

/// One product suggestion as returned by the backend. The backend sends more
/// fields than these; serde drops whatever the client does not display.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Product {
    pub uniq_id: String,
    pub title: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub generated_description: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<Product>,
}

/// Response body of `GET /analytics-data`. The two count mappings keep the
/// backend's key order because serde_json is built with `preserve_order`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AnalyticsData {
    pub total_products: u64,
    pub image_coverage_percent: f64,
    #[serde(default)]
    pub price_distribution: Vec<PriceBucket>,
    #[serde(default)]
    pub brand_counts: Map<String, Value>,
    #[serde(default)]
    pub category_counts: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PriceBucket {
    pub name: String,
    pub count: u64,
}

pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200?text=No+Image";
pub const FALLBACK_DESCRIPTION: &str = "A great choice for your home!";

/// What a product card actually shows. Built once at render time; every
/// fallback applies independently of the others.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayProduct {
    pub image: String,
    pub title: String,
    pub brand: String,
    pub price: String,
    pub description: String,
}

impl From<&Product> for DisplayProduct {
    fn from(product: &Product) -> Self {
        Self {
            image: product
                .images
                .first()
                .cloned()
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            title: product.title.clone(),
            brand: product.brand.clone().unwrap_or_else(|| "N/A".to_string()),
            price: product.price.clone().unwrap_or_default(),
            description: product
                .generated_description
                .clone()
                .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_falls_back_for_every_missing_field() {
        let product = Product {
            uniq_id: "p1".to_string(),
            title: "Oak Side Table".to_string(),
            ..Default::default()
        };

        let card = DisplayProduct::from(&product);
        assert_eq!(card.image, PLACEHOLDER_IMAGE);
        assert_eq!(card.brand, "N/A");
        assert_eq!(card.price, "");
        assert_eq!(card.description, FALLBACK_DESCRIPTION);
        assert_eq!(card.title, "Oak Side Table");
    }

    #[test]
    fn display_fallbacks_are_independent() {
        let product = Product {
            uniq_id: "p2".to_string(),
            title: "Velvet Armchair".to_string(),
            brand: Some("Acme".to_string()),
            price: Some("$129.99".to_string()),
            images: vec![],
            generated_description: None,
        };

        let card = DisplayProduct::from(&product);
        assert_eq!(card.brand, "Acme");
        assert_eq!(card.price, "$129.99");
        assert_eq!(card.image, PLACEHOLDER_IMAGE);
        assert_eq!(card.description, FALLBACK_DESCRIPTION);
    }

    #[test]
    fn display_uses_first_image() {
        let product = Product {
            uniq_id: "p3".to_string(),
            title: "Bookshelf".to_string(),
            images: vec![
                "https://img.example/front.jpg".to_string(),
                "https://img.example/side.jpg".to_string(),
            ],
            ..Default::default()
        };

        let card = DisplayProduct::from(&product);
        assert_eq!(card.image, "https://img.example/front.jpg");
    }

    #[test]
    fn product_deserializes_with_missing_optionals() {
        let product: Product = serde_json::from_value(json!({
            "uniq_id": "abc",
            "title": "Rustic Bench"
        }))
        .unwrap();

        assert_eq!(product.uniq_id, "abc");
        assert!(product.brand.is_none());
        assert!(product.images.is_empty());
    }

    #[test]
    fn analytics_data_deserializes_backend_shape() {
        let data: AnalyticsData = serde_json::from_value(json!({
            "total_products": 312,
            "image_coverage_percent": 87.5,
            "price_distribution": [
                { "name": "$0-50", "count": 40 },
                { "name": "$50-100", "count": 25 }
            ],
            "brand_counts": { "Acme": 5, "Zeta": 2 },
            "category_counts": { "Chairs": 120, "Tables": 80 }
        }))
        .unwrap();

        assert_eq!(data.total_products, 312);
        assert_eq!(data.price_distribution.len(), 2);
        assert_eq!(data.price_distribution[0].name, "$0-50");
        assert_eq!(data.brand_counts.len(), 2);
    }
}
