//! Site-wide light/dark color scheme.
//!
//! The scheme lives in a context signal so any component can follow it. The
//! particle field reads it to pick its tone; the toggle button flips it and
//! persists the choice in `localStorage`. Changes made elsewhere, in another
//! tab or by a script touching the `dark` class, flow back into the signal.

use std::time::Duration;

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{
	Document, Event, MutationObserver, MutationObserverInit, Storage, StorageEvent, Window,
};

/// `localStorage` key holding the persisted scheme.
pub const STORAGE_KEY: &str = "theme";
/// Class set on `<html>` while the dark scheme is active.
const DARK_CLASS: &str = "dark";
/// Matches the CSS transition applied while switching schemes.
const TRANSITION: Duration = Duration::from_millis(400);

/// Light or dark page appearance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorScheme {
	/// Dark text on light surfaces.
	#[default]
	Light,
	/// Light text on dark surfaces.
	Dark,
}

impl ColorScheme {
	/// Parse a persisted name, `"light"` or `"dark"`.
	pub fn parse(raw: &str) -> Option<Self> {
		match raw {
			"light" => Some(Self::Light),
			"dark" => Some(Self::Dark),
			_ => None,
		}
	}

	/// Name used for persistence.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Dark => "dark",
		}
	}

	/// The other scheme.
	pub fn toggled(self) -> Self {
		match self {
			Self::Light => Self::Dark,
			Self::Dark => Self::Light,
		}
	}

	/// Pick the scheme: an explicitly stored choice wins, then a dark class
	/// already present on the document. Otherwise light.
	pub fn resolve(stored: Option<&str>, document_dark: bool) -> Self {
		match stored.and_then(Self::parse) {
			Some(scheme) => scheme,
			None if document_dark => Self::Dark,
			None => Self::Light,
		}
	}
}

/// Scheme implied by a `storage` event, or `None` when the event concerns
/// another key.
///
/// A removed or unreadable value falls back to the document class.
pub fn scheme_from_storage_event(
	key: Option<&str>,
	new_value: Option<&str>,
	document_dark: bool,
) -> Option<ColorScheme> {
	// A `None` key means the whole storage was cleared.
	match key {
		Some(STORAGE_KEY) | None => Some(ColorScheme::resolve(new_value, document_dark)),
		Some(_) => None,
	}
}

/// Shared handle to the current scheme.
#[derive(Clone, Copy, Debug)]
pub struct ColorSchemeContext {
	/// Active scheme.
	pub scheme: RwSignal<ColorScheme>,
	/// True for a short while after a toggle, so views can animate the switch.
	pub is_transitioning: RwSignal<bool>,
}

impl ColorSchemeContext {
	/// Flip the scheme, persist it and update the document class.
	pub fn toggle(&self) {
		let next = self.scheme.get_untracked().toggled();
		self.scheme.set(next);
		persist(next);
		apply_to_document(next);
		debug!("storefront: color scheme switched to {}", next.as_str());

		let transitioning = self.is_transitioning;
		transitioning.set(true);
		set_timeout(
			move || {
				let _ = transitioning.try_set(false);
			},
			TRANSITION,
		);
	}
}

fn window() -> Option<Window> {
	web_sys::window()
}

fn document() -> Option<Document> {
	window()?.document()
}

fn storage() -> Option<Storage> {
	window()?.local_storage().ok().flatten()
}

fn stored_scheme() -> Option<String> {
	storage()?.get_item(STORAGE_KEY).ok().flatten()
}

fn document_is_dark() -> bool {
	document()
		.and_then(|d| d.document_element())
		.map(|root| root.class_list().contains(DARK_CLASS))
		.unwrap_or(false)
}

fn persist(scheme: ColorScheme) {
	if let Some(storage) = storage() {
		let _ = storage.set_item(STORAGE_KEY, scheme.as_str());
	}
}

fn apply_to_document(scheme: ColorScheme) {
	let Some(root) = document().and_then(|d| d.document_element()) else {
		return;
	};
	let classes = root.class_list();
	let _ = match scheme {
		ColorScheme::Dark => classes.add_1(DARK_CLASS),
		ColorScheme::Light => classes.remove_1(DARK_CLASS),
	};
}

/// Store `next` unless it is already current.
fn follow(scheme: RwSignal<ColorScheme>, next: ColorScheme) {
	if scheme.try_get_untracked().is_some_and(|current| current != next) {
		let _ = scheme.try_set(next);
		debug!("storefront: color scheme followed to {}", next.as_str());
	}
}

/// Keeps a scheme signal in step with the browser: the `storage` event for
/// other tabs, and a class observer on `<html>` for scripts.
///
/// Dropping it detaches both.
struct SchemeSync {
	window: Window,
	on_storage: Closure<dyn FnMut(Event)>,
	observer: Option<(MutationObserver, Closure<dyn FnMut()>)>,
}

impl SchemeSync {
	fn attach(window: Window, scheme: RwSignal<ColorScheme>) -> Self {
		let on_storage: Closure<dyn FnMut(Event)> = Closure::new(move |ev: Event| {
			let Some(ev) = ev.dyn_ref::<StorageEvent>() else {
				return;
			};
			let (key, value) = (ev.key(), ev.new_value());
			if let Some(next) =
				scheme_from_storage_event(key.as_deref(), value.as_deref(), document_is_dark())
			{
				apply_to_document(next);
				follow(scheme, next);
			}
		});
		let _ = window
			.add_event_listener_with_callback("storage", on_storage.as_ref().unchecked_ref());

		let observer = observe_root_class(scheme);
		if observer.is_none() {
			warn!("storefront: cannot observe <html> class, scheme follows storage only");
		}

		Self {
			window,
			on_storage,
			observer,
		}
	}
}

fn observe_root_class(
	scheme: RwSignal<ColorScheme>,
) -> Option<(MutationObserver, Closure<dyn FnMut()>)> {
	let root = document()?.document_element()?;
	let on_mutation: Closure<dyn FnMut()> = Closure::new(move || {
		let next = ColorScheme::resolve(None, document_is_dark());
		follow(scheme, next);
	});
	let observer = MutationObserver::new(on_mutation.as_ref().unchecked_ref()).ok()?;

	let options = MutationObserverInit::new();
	options.set_attributes(true);
	options.set_attribute_filter(&js_sys::Array::of1(&JsValue::from_str("class")));
	observer.observe_with_options(&root, &options).ok()?;
	Some((observer, on_mutation))
}

impl Drop for SchemeSync {
	fn drop(&mut self) {
		let _ = self.window.remove_event_listener_with_callback(
			"storage",
			self.on_storage.as_ref().unchecked_ref(),
		);
		if let Some((observer, _)) = &self.observer {
			observer.disconnect();
		}
	}
}

/// Resolve the initial scheme from the browser and provide it to descendants.
///
/// Until the calling owner is cleaned up, the scheme also follows changes
/// made in other tabs or directly on the document class.
pub fn provide_color_scheme() -> ColorSchemeContext {
	let stored = stored_scheme();
	let initial = ColorScheme::resolve(stored.as_deref(), document_is_dark());
	apply_to_document(initial);

	let context = ColorSchemeContext {
		scheme: RwSignal::new(initial),
		is_transitioning: RwSignal::new(false),
	};
	provide_context(context);

	if let Some(window) = window() {
		let sync = StoredValue::new_local(Some(SchemeSync::attach(window, context.scheme)));
		on_cleanup(move || {
			let _ = sync.try_update_value(|slot| slot.take());
		});
	}
	context
}

/// The scheme provided by an ancestor, if any.
pub fn use_color_scheme() -> Option<ColorSchemeContext> {
	use_context::<ColorSchemeContext>()
}

/// Button switching between the light and dark scheme.
#[component]
pub fn ThemeToggle() -> impl IntoView {
	let context = use_color_scheme();
	let label = move || match context.map(|c| c.scheme.get()).unwrap_or_default() {
		ColorScheme::Light => "Modo oscuro",
		ColorScheme::Dark => "Modo claro",
	};

	view! {
		<button
			class="theme-toggle"
			on:click=move |_| {
				if let Some(c) = context {
					c.toggle();
				}
			}
		>
			{label}
		</button>
	}
}

#[cfg(test)]
mod tests {
	use leptos::reactive::owner::Owner;

	use super::*;

	#[test]
	fn toggle_builds_with_and_without_a_scheme() {
		Owner::new().with(|| {
			let _unprovided = view! { <ThemeToggle /> }.into_view();

			provide_context(ColorSchemeContext {
				scheme: RwSignal::new(ColorScheme::Dark),
				is_transitioning: RwSignal::new(false),
			});
			let _provided = view! { <ThemeToggle /> }.into_view();
			assert_eq!(use_color_scheme().map(|c| c.scheme.get_untracked()), Some(ColorScheme::Dark));
		});
	}

	#[test]
	fn stored_choice_wins() {
		assert_eq!(ColorScheme::resolve(Some("light"), true), ColorScheme::Light);
		assert_eq!(ColorScheme::resolve(Some("dark"), false), ColorScheme::Dark);
	}

	#[test]
	fn falls_back_to_document_class_then_light() {
		assert_eq!(ColorScheme::resolve(None, true), ColorScheme::Dark);
		assert_eq!(ColorScheme::resolve(None, false), ColorScheme::Light);
		assert_eq!(ColorScheme::resolve(Some("sepia"), false), ColorScheme::Light);
		assert_eq!(ColorScheme::resolve(Some("sepia"), true), ColorScheme::Dark);
	}

	#[test]
	fn storage_events_for_other_keys_are_ignored() {
		assert_eq!(scheme_from_storage_event(Some("cart"), Some("dark"), false), None);
		assert_eq!(scheme_from_storage_event(Some("Theme"), Some("dark"), false), None);
	}

	#[test]
	fn storage_event_on_theme_key_is_followed() {
		assert_eq!(
			scheme_from_storage_event(Some(STORAGE_KEY), Some("dark"), false),
			Some(ColorScheme::Dark)
		);
		assert_eq!(
			scheme_from_storage_event(Some(STORAGE_KEY), Some("light"), true),
			Some(ColorScheme::Light)
		);
	}

	#[test]
	fn removed_or_cleared_theme_falls_back_to_document() {
		assert_eq!(
			scheme_from_storage_event(Some(STORAGE_KEY), None, true),
			Some(ColorScheme::Dark)
		);
		assert_eq!(
			scheme_from_storage_event(Some(STORAGE_KEY), Some("garbage"), false),
			Some(ColorScheme::Light)
		);
		assert_eq!(scheme_from_storage_event(None, None, false), Some(ColorScheme::Light));
	}

	#[test]
	fn toggled_round_trips_names() {
		for scheme in [ColorScheme::Light, ColorScheme::Dark] {
			assert_ne!(scheme.toggled(), scheme);
			assert_eq!(ColorScheme::parse(scheme.as_str()), Some(scheme));
		}
	}
}
