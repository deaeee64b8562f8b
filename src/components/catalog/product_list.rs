//! Product cards with inquiry actions.

use leptos::prelude::*;

use super::types::{Catalog, Product, format_price};
use crate::components::inquiry::{InquiryItem, use_inquiry};

#[component]
fn ProductCard(product: Product) -> impl IntoView {
	let store = use_inquiry();
	let item = InquiryItem::from(&product);
	let (to_list, to_ask) = (item.clone(), item.clone());
	let id = item.id;
	let listed = move || store.contains(&id);
	let image = product
		.images
		.first()
		.cloned()
		.map(|src| view! { <img src=src alt=product.name.clone() /> });

	view! {
		<article class="product-card" class:featured=product.featured>
			{image}
			<h3>{product.name}</h3>
			<p class="description">{product.description}</p>
			<p class="price">{format_price(product.price)}</p>
			<div class="actions">
				<button on:click=move |_| store.add_item(to_list.clone())>
					{move || if listed() { "En tu lista de consulta" } else { "Agregar a consultas" }}
				</button>
				<button on:click=move |_| store.open_question_dialog(to_ask.clone())>
					"Preguntar"
				</button>
			</div>
		</article>
	}
}

/// Grid of catalog products, featured ones first.
#[component]
pub fn ProductList(#[prop(into)] catalog: Signal<Catalog>) -> impl IntoView {
	view! {
		<Show
			when=move || catalog.with(|c| !c.products.is_empty())
			fallback=|| view! { <p class="empty">"No hay productos para mostrar."</p> }
		>
			<section class="product-list">
				<For
					each=move || catalog.with(Catalog::display_order)
					key=|product| product.id.clone()
					children=|product| view! { <ProductCard product=product /> }
				/>
			</section>
		</Show>
	}
}
