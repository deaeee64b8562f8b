//! Leptos component mounting the particle field on a canvas.
//!
//! The canvas sizes itself to its parent element. Window listeners track the
//! pointer, focus loss and resizes; an animation loop runs via
//! `requestAnimationFrame`, handing each frame to the particle pool. All of it
//! is owned by a [`FrameLoop`] that tears everything down when the component
//! is cleaned up.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, Event, HtmlCanvasElement, PointerEvent, VisibilityState, Window,
};

use super::config::FieldConfig;
use super::field::{FrameEnv, ParticlePool};
use super::simulation::Pointer;
use super::tone::{Rgb, Tone};
use crate::theme::use_color_scheme;

/// Mutable state shared between the frame callback and the event listeners.
struct FieldContext {
	pool: ParticlePool,
	canvas: HtmlCanvasElement,
	ctx: Option<CanvasRenderingContext2d>,
	pointer: Pointer,
	reduced_motion: bool,
}

type Listener = Closure<dyn FnMut(Event)>;

/// Owns the animation subscription and the window listeners of one field.
///
/// Dropping it stops the loop, cancels the pending frame and detaches every
/// listener.
struct FrameLoop {
	window: Window,
	running: Rc<Cell<bool>>,
	frame_id: Rc<Cell<Option<i32>>>,
	animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
	listeners: Vec<(&'static str, Listener)>,
}

impl FrameLoop {
	fn listen(&mut self, event: &'static str, listener: Listener) {
		let _ = self
			.window
			.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
		self.listeners.push((event, listener));
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		self.running.set(false);
		if let Some(id) = self.frame_id.take() {
			let _ = self.window.cancel_animation_frame(id);
		}
		for (event, listener) in &self.listeners {
			let _ = self
				.window
				.remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
		}
		// Breaks the closure's reference to itself.
		self.animate.borrow_mut().take();
		debug!("storefront: particle field torn down");
	}
}

fn prefers_reduced_motion(window: &Window) -> bool {
	window
		.match_media("(prefers-reduced-motion: reduce)")
		.ok()
		.flatten()
		.map(|query| query.matches())
		.unwrap_or(false)
}

fn document_visible(window: &Window) -> bool {
	window
		.document()
		.map(|d| d.visibility_state() == VisibilityState::Visible)
		.unwrap_or(false)
}

/// Measure the parent box and, if the size changed, resize the canvas: CSS
/// size in layout units, backing buffer in clamped device pixels.
fn sync_size(field: &mut FieldContext, window: &Window) {
	let Some(parent) = field.canvas.parent_element() else {
		return;
	};
	let rect = parent.get_bounding_client_rect();
	if !field.pool.resize(rect.width(), rect.height()) {
		return;
	}

	let bounds = field.pool.bounds();
	let config = field.pool.config();
	let dpr = config.clamp_dpr(window.device_pixel_ratio());
	let (buffer_w, buffer_h) = config.backing_size(bounds.width, bounds.height, dpr);

	let style = web_sys::HtmlElement::style(&field.canvas);
	let _ = style.set_property("width", &format!("{}px", bounds.width));
	let _ = style.set_property("height", &format!("{}px", bounds.height));
	field.canvas.set_width(buffer_w);
	field.canvas.set_height(buffer_h);
	if let Some(ref ctx) = field.ctx {
		let _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
	}
	debug!(
		"storefront: particle field sized to {}x{} ({} particles)",
		bounds.width,
		bounds.height,
		field.pool.particles().len()
	);
}

/// Renders a decorative field of drifting dots behind its siblings.
///
/// The canvas fills its parent, which should be positioned. `tone` chooses
/// light or dark dots; `Tone::Auto` follows the provided color scheme (light
/// when none is provided). The field never intercepts pointer events.
#[component]
pub fn ParticleField(
	#[prop(optional)] tone: Tone,
	#[prop(into, optional)] class: String,
	#[prop(optional)] config: FieldConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let scheme = use_color_scheme();
	let fill = Memo::new(move |_| tone.resolve(scheme.map(|c| c.scheme.get()).unwrap_or_default()));
	let frame_loop = StoredValue::new_local(None::<FrameLoop>);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let ctx = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok());
		if ctx.is_none() {
			warn!("storefront: no 2d context, particle field stays blank");
		}

		let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
		let field = Rc::new(RefCell::new(FieldContext {
			pool: ParticlePool::new(config.clone(), seed),
			canvas,
			ctx,
			pointer: Pointer::default(),
			reduced_motion: prefers_reduced_motion(&window),
		}));
		sync_size(&mut field.borrow_mut(), &window);

		let mut guard = FrameLoop {
			window: window.clone(),
			running: Rc::new(Cell::new(true)),
			frame_id: Rc::new(Cell::new(None)),
			animate: Rc::new(RefCell::new(None)),
			listeners: Vec::new(),
		};

		let field_pointer = field.clone();
		guard.listen(
			"pointermove",
			Closure::new(move |ev: Event| {
				let Some(ev) = ev.dyn_ref::<PointerEvent>() else {
					return;
				};
				let mut f = field_pointer.borrow_mut();
				let Some(parent) = f.canvas.parent_element() else {
					return;
				};
				let rect = parent.get_bounding_client_rect();
				f.pointer = Pointer::at(
					ev.client_x() as f64 - rect.left(),
					ev.client_y() as f64 - rect.top(),
				);
			}),
		);

		let field_blur = field.clone();
		guard.listen(
			"blur",
			Closure::new(move |_: Event| {
				field_blur.borrow_mut().pointer.active = false;
			}),
		);

		let (field_resize, window_resize) = (field.clone(), window.clone());
		guard.listen(
			"resize",
			Closure::new(move |_: Event| {
				sync_size(&mut field_resize.borrow_mut(), &window_resize);
			}),
		);

		let (field_anim, animate_inner, frame_id, running) = (
			field.clone(),
			guard.animate.clone(),
			guard.frame_id.clone(),
			guard.running.clone(),
		);
		let window_anim = window.clone();
		*guard.animate.borrow_mut() = Some(Closure::new(move || {
			if !running.get() {
				return;
			}
			{
				let mut field = field_anim.borrow_mut();
				let FieldContext {
					pool,
					ctx,
					pointer,
					reduced_motion,
					..
				} = &mut *field;
				if let Some(ctx) = ctx {
					let env = FrameEnv {
						pointer: *pointer,
						visible: document_visible(&window_anim),
						reduced_motion: *reduced_motion,
					};
					let color = fill.try_get_untracked().unwrap_or(Rgb::BLACK);
					pool.frame(&env, color, ctx);
				}
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Ok(id) = window_anim.request_animation_frame(cb.as_ref().unchecked_ref()) {
					frame_id.set(Some(id));
				}
			}
		}));
		if let Some(ref cb) = *guard.animate.borrow() {
			if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				guard.frame_id.set(Some(id));
			}
		}

		// Replacing a previous loop drops it, which tears it down.
		frame_loop.set_value(Some(guard));
	});

	on_cleanup(move || {
		let _ = frame_loop.try_update_value(|slot| slot.take());
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class=class
			aria-hidden="true"
			style="display: block; pointer-events: none;"
		/>
	}
}
