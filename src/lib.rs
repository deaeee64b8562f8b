//! print-storefront: storefront UI core for a 3D-printing catalog.
//!
//! This crate provides the WASM client pieces of the storefront: an ambient
//! particle field for hero sections and the inquiry list visitors use to ask
//! about products, plus the light/dark scheme they both follow.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod theme;

pub use components::catalog::{Catalog, Product, ProductList};
pub use components::inquiry::{
	InquiryItem, InquiryProvider, InquiryQuestionDialog, InquirySidebar, InquiryStore, use_inquiry,
};
pub use components::particle_field::{FieldConfig, ParticleField, Tone};
pub use theme::{ColorScheme, ThemeToggle, provide_color_scheme};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("storefront: logging initialized");
}

/// Load the catalog from a script element with id="product-data".
/// Expected format: JSON with { products: [...] }
fn load_catalog() -> Option<Catalog> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("product-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match Catalog::from_json(&json_text) {
		Ok(catalog) => {
			info!("storefront: loaded {} products", catalog.products.len());
			Some(catalog)
		}
		Err(e) => {
			warn!("storefront: failed to parse product data: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads the catalog from the DOM and renders the hero, product list and
/// inquiry views inside the scheme and inquiry providers.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();
	provide_color_scheme();

	let catalog = load_catalog().unwrap_or_default();
	let catalog_signal = Signal::derive(move || catalog.clone());

	view! {
		<Html attr:lang="es" attr:dir="ltr" />
		<Title text="Impresiones 3D" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<InquiryProvider>
			<header class="site-header">
				<span class="brand">"Impresiones 3D"</span>
				<ThemeToggle />
			</header>
			<section class="hero" style="position: relative; overflow: hidden;">
				<ParticleField tone=Tone::Auto class="hero-particles" />
				<div class="hero-content">
					<h1>"Impresiones 3D"</h1>
					<p class="subtitle">"Piezas a medida, figuras y objetos de diseño."</p>
				</div>
			</section>
			<main>
				<ProductList catalog=catalog_signal />
			</main>
			<InquirySidebar />
			<InquiryQuestionDialog />
		</InquiryProvider>
	}
}
