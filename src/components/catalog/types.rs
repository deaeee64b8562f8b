//! Product records as delivered by the catalog payload.

use serde::Deserialize;

/// A product of the catalog.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Product {
	/// Unique identifier, also used to deduplicate inquiry items.
	pub id: String,
	/// Display name.
	pub name: String,
	#[serde(default)]
	pub description: String,
	/// Price in Argentine pesos.
	pub price: f64,
	/// Image URLs; the first one is the product's thumbnail.
	#[serde(default)]
	pub images: Vec<String>,
	#[serde(default)]
	pub category: String,
	/// Featured products are listed first.
	#[serde(default)]
	pub featured: bool,
}

/// Complete catalog payload.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Catalog {
	/// Products in payload order.
	pub products: Vec<Product>,
}

impl Catalog {
	/// Parse the JSON payload embedded in the page.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}

	/// Products with featured ones first, otherwise in payload order.
	pub fn display_order(&self) -> Vec<Product> {
		let (mut featured, rest): (Vec<_>, Vec<_>) =
			self.products.iter().cloned().partition(|p| p.featured);
		featured.extend(rest);
		featured
	}
}

/// Format an amount of pesos the way `es-AR` does: `$ 1.234,50`.
pub fn format_price(amount: f64) -> String {
	let cents = (amount.abs() * 100.0).round() as u64;
	let digits = (cents / 100).to_string();

	let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
	for (i, ch) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			grouped.push('.');
		}
		grouped.push(ch);
	}

	let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
	format!("{sign}$ {grouped},{:02}", cents % 100)
}
