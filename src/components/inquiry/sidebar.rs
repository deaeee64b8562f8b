//! Side panel listing the inquiry items.

use leptos::prelude::*;

use super::context::use_inquiry;
use super::state::InquiryItem;
use crate::components::catalog::format_price;

#[component]
fn InquiryRow(item: InquiryItem) -> impl IntoView {
	let store = use_inquiry();
	let id = item.id.clone();
	let subject = item.clone();
	let thumbnail = item
		.image_url
		.clone()
		.map(|src| view! { <img class="thumb" src=src alt=item.name.clone() /> });
	let price = item
		.price
		.map(|p| view! { <p class="price">{format_price(p)}</p> });

	view! {
		<li class="inquiry-item">
			{thumbnail}
			<div class="details">
				<p class="name">{item.name}</p>
				{price}
			</div>
			<div class="actions">
				<button on:click=move |_| store.open_question_dialog(subject.clone())>"Preguntar"</button>
				<button on:click=move |_| store.remove_item(&id)>"Quitar"</button>
			</div>
		</li>
	}
}

/// Floating button with the item count, and the panel it opens.
#[component]
pub fn InquirySidebar() -> impl IntoView {
	let store = use_inquiry();

	view! {
		<button class="inquiry-toggle" on:click=move |_| store.toggle_sidebar()>
			{move || format!("Lista de consulta ({})", store.item_count())}
		</button>
		<Show when=move || store.is_sidebar_open()>
			<aside class="inquiry-sidebar">
				<header>
					<h2>"Productos para consulta"</h2>
					<p>"Lista de productos para hacer preguntas. No es un carrito de compras."</p>
					<button class="close" on:click=move |_| store.set_sidebar_open(false)>
						"Cerrar"
					</button>
				</header>
				<Show
					when=move || { store.item_count() > 0 }
					fallback=|| {
						view! {
							<p class="empty">
								"Todavía no agregaste productos. Desde cada producto podés usar el botón \"Agregar a consultas\"."
							</p>
						}
					}
				>
					<ul class="inquiry-items">
						<For
							each=move || store.items()
							key=|item| item.id.clone()
							children=|item| view! { <InquiryRow item=item /> }
						/>
					</ul>
				</Show>
			</aside>
		</Show>
	}
}
