//! Browser bindings.
//!
//! [`WebGlobeView`] wraps the controller for a page that renders with its
//! own WebGL/WebGPU code. DOM handlers forward events, `tick` is called
//! from `requestAnimationFrame`, and the returned [`WebFrame`] carries the
//! pose as flat float arrays. Picking uses an analytic unit sphere unless
//! the page installs its own picker callback.

use glam::{Quat, Vec2, Vec3};
use wasm_bindgen::{JsCast, prelude::*};
use web_sys::{Event, KeyboardEvent, MouseEvent, TouchEvent, WheelEvent};

use crate::{
    input::{InputEvent, InputProcessor, MouseButton},
    options::Options,
    scene::{Camera, HeadlessScene, SceneHandles, SurfacePicker},
    view::{FramePose, ViewController, ViewMode},
};

/// Longest delta a single tick may advance, e.g. after a hidden tab.
const MAX_DT_MS: f64 = 100.0;

/// Install the panic hook and route `log` to the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Picker backed by a page callback `(ndcX, ndcY) => [x, y, z] | null`.
struct JsPicker<'a>(&'a js_sys::Function);

impl SurfacePicker for JsPicker<'_> {
    fn pick_surface(&self, ndc: Vec2) -> Option<Vec3> {
        let value = self
            .0
            .call2(
                &JsValue::NULL,
                &JsValue::from(ndc.x),
                &JsValue::from(ndc.y),
            )
            .ok()?;
        if value.is_null() || value.is_undefined() {
            return None;
        }
        let array = js_sys::Array::from(&value);
        let component = |i: u32| array.get(i).as_f64().map(|v| v as f32);
        Some(Vec3::new(component(0)?, component(1)?, component(2)?))
    }
}

/// The interactive globe controller, driven from JavaScript.
#[wasm_bindgen]
pub struct WebGlobeView {
    view: ViewController,
    input: InputProcessor,
    scene: HeadlessScene,
    picker: Option<js_sys::Function>,
    last_now_ms: Option<f64>,
}

#[wasm_bindgen]
impl WebGlobeView {
    /// Create a view. `options_toml` may override any default option;
    /// `scroll_y` is the page's current `window.scrollY`.
    ///
    /// # Errors
    ///
    /// Throws when `options_toml` does not parse.
    #[wasm_bindgen(constructor)]
    pub fn new(
        options_toml: Option<String>,
        width: u32,
        height: u32,
        scroll_y: f32,
    ) -> Result<WebGlobeView, JsValue> {
        let options = match options_toml {
            Some(text) => Options::from_toml_str(&text)
                .map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => Options::default(),
        };
        let mut scene = HeadlessScene::new(Camera::from_options(
            &options.camera,
            1.0,
        ));
        scene.resize(width, height);
        let mut input =
            InputProcessor::with_key_bindings(options.keybindings.clone());
        input.set_viewport(width, height);
        input.set_scroll_origin(scroll_y);
        log::info!("globe view created at {width}x{height}");

        Ok(Self {
            view: ViewController::new(options),
            input,
            scene,
            picker: None,
            last_now_ms: None,
        })
    }

    /// Install a picker callback `(ndcX, ndcY) => [x, y, z] | null`.
    #[wasm_bindgen(js_name = setPicker)]
    pub fn set_picker(&mut self, picker: js_sys::Function) {
        self.picker = Some(picker);
    }

    /// Go back to the built-in analytic picker.
    #[wasm_bindgen(js_name = clearPicker)]
    pub fn clear_picker(&mut self) {
        self.picker = None;
    }

    /// Canvas resized (physical pixels).
    pub fn resize(&mut self, width: u32, height: u32) {
        self.scene.resize(width, height);
        self.forward(InputEvent::Resized { width, height }, None);
    }

    /// `mousedown` handler.
    #[wasm_bindgen(js_name = onMouseDown)]
    pub fn on_mouse_down(&mut self, event: &MouseEvent) {
        let (x, y) = offset(event);
        self.forward(
            InputEvent::PointerDown {
                x,
                y,
                button: MouseButton::from_dom(event.button()),
            },
            Some(event.time_stamp()),
        );
    }

    /// `mousemove` handler.
    #[wasm_bindgen(js_name = onMouseMove)]
    pub fn on_mouse_move(&mut self, event: &MouseEvent) {
        let (x, y) = offset(event);
        self.forward(InputEvent::PointerMoved { x, y }, Some(event.time_stamp()));
    }

    /// `mouseup` handler.
    #[wasm_bindgen(js_name = onMouseUp)]
    pub fn on_mouse_up(&mut self, event: &MouseEvent) {
        self.forward(
            InputEvent::PointerUp {
                button: MouseButton::from_dom(event.button()),
            },
            Some(event.time_stamp()),
        );
    }

    /// `wheel` handler.
    #[wasm_bindgen(js_name = onWheel)]
    pub fn on_wheel(&mut self, event: &WheelEvent) {
        self.forward(
            InputEvent::Wheel {
                dx: event.delta_x() as f32,
                dy: event.delta_y() as f32,
            },
            Some(event.time_stamp()),
        );
    }

    /// Page `scroll` handler; pass `window.scrollY`.
    #[wasm_bindgen(js_name = onScroll)]
    pub fn on_scroll(&mut self, scroll_y: f32, now_ms: f64) {
        self.forward(InputEvent::Scroll { y: scroll_y }, Some(now_ms));
    }

    /// `touchstart` handler. Prevents the default pinch-zoom when more
    /// than one finger is down.
    #[wasm_bindgen(js_name = onTouchStart)]
    pub fn on_touch_start(&mut self, event: &TouchEvent) {
        let (touches, x, y) = first_touch(event);
        if touches > 1 {
            event.prevent_default();
        }
        self.forward(
            InputEvent::TouchStart { touches, x, y },
            Some(event.time_stamp()),
        );
    }

    /// `touchmove` handler.
    #[wasm_bindgen(js_name = onTouchMove)]
    pub fn on_touch_move(&mut self, event: &TouchEvent) {
        let (touches, x, y) = first_touch(event);
        if touches > 1 {
            event.prevent_default();
        }
        self.forward(
            InputEvent::TouchMoved { touches, x, y },
            Some(event.time_stamp()),
        );
    }

    /// `touchend` / `touchcancel` handler.
    #[wasm_bindgen(js_name = onTouchEnd)]
    pub fn on_touch_end(&mut self, event: &TouchEvent) {
        let (touches, x, y) = first_touch(event);
        self.forward(
            InputEvent::TouchEnd { touches, x, y },
            Some(event.time_stamp()),
        );
    }

    /// `contextmenu` handler; suppresses the browser menu.
    #[wasm_bindgen(js_name = onContextMenu)]
    pub fn on_context_menu(&mut self, event: &Event) {
        event.prevent_default();
        self.forward(InputEvent::ContextMenu, None);
    }

    /// `keydown` handler, matched on `KeyboardEvent.code`.
    #[wasm_bindgen(js_name = onKeyDown)]
    pub fn on_key_down(&mut self, event: &KeyboardEvent) {
        if event.repeat() {
            return;
        }
        if let Some(command) = self.input.handle_key_press(&event.code()) {
            self.view.execute(command, event.time_stamp());
        }
    }

    /// Focus a latitude/longitude in degrees.
    #[wasm_bindgen(js_name = zoomToLocation)]
    pub fn zoom_to_location(&mut self, latitude: f32, longitude: f32, now_ms: f64) {
        self.view.zoom_to_location(latitude, longitude, now_ms);
    }

    /// Leave zoom-focus.
    #[wasm_bindgen(js_name = exitZoom)]
    pub fn exit_zoom(&mut self) {
        self.view.exit_zoom();
    }

    /// Advance one frame. Pass the `requestAnimationFrame` timestamp.
    pub fn tick(&mut self, now_ms: f64) -> WebFrame {
        let dt_ms = self
            .last_now_ms
            .map_or(0.0, |last| (now_ms - last).clamp(0.0, MAX_DT_MS));
        self.last_now_ms = Some(now_ms);

        let pose = self.view.tick(now_ms, dt_ms as f32);
        // Keep the analytic picker's camera in step with the page's.
        pose.apply(&mut self.scene, &SceneHandles::default());
        WebFrame { pose }
    }
}

impl WebGlobeView {
    fn forward(&mut self, event: InputEvent, now_ms: Option<f64>) {
        let command = match &self.picker {
            Some(f) => self.input.handle_event(event, &JsPicker(f)),
            None => self.input.handle_event(event, &self.scene),
        };
        if let Some(command) = command {
            let now = now_ms.or(self.last_now_ms).unwrap_or(0.0);
            self.view.execute(command, now);
        }
    }
}

fn offset(event: &MouseEvent) -> (f32, f32) {
    (event.offset_x() as f32, event.offset_y() as f32)
}

/// Active touch count plus the position of the first (or first lifted)
/// touch, relative to the event target.
fn first_touch(event: &TouchEvent) -> (u32, f32, f32) {
    let touches = event.touches();
    let touch = touches.get(0).or_else(|| event.changed_touches().get(0));
    let (x, y) = touch.map_or((0.0, 0.0), |t| {
        let rect = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .map(|el| el.get_bounding_client_rect());
        let (left, top) = rect.map_or((0.0, 0.0), |r| (r.left(), r.top()));
        (
            (f64::from(t.client_x()) - left) as f32,
            (f64::from(t.client_y()) - top) as f32,
        )
    });
    (touches.length(), x, y)
}

fn quat_array(q: Quat) -> Vec<f32> {
    q.to_array().to_vec()
}

/// One frame's pose as flat arrays for the page's renderer.
#[wasm_bindgen]
pub struct WebFrame {
    pose: FramePose,
}

#[wasm_bindgen]
impl WebFrame {
    /// Camera position `[x, y, z]`; it looks at the origin.
    #[wasm_bindgen(getter, js_name = cameraPosition)]
    #[must_use]
    pub fn camera_position(&self) -> Vec<f32> {
        self.pose.camera_position.to_array().to_vec()
    }

    /// Globe orientation quaternion `[x, y, z, w]`.
    #[wasm_bindgen(getter, js_name = globeOrientation)]
    #[must_use]
    pub fn globe_orientation(&self) -> Vec<f32> {
        quat_array(self.pose.bodies.globe)
    }

    /// Cloud shell orientation quaternion `[x, y, z, w]`.
    #[wasm_bindgen(getter, js_name = cloudsOrientation)]
    #[must_use]
    pub fn clouds_orientation(&self) -> Vec<f32> {
        quat_array(self.pose.bodies.clouds)
    }

    /// Atmosphere orientation quaternion `[x, y, z, w]`.
    #[wasm_bindgen(getter, js_name = atmosphereOrientation)]
    #[must_use]
    pub fn atmosphere_orientation(&self) -> Vec<f32> {
        quat_array(self.pose.bodies.atmosphere)
    }

    /// Orbiter `[px, py, pz, qx, qy, qz, qw, tx, ty, tz]` (position,
    /// orientation, nametag), empty when the orbiter is disabled.
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn orbiter(&self) -> Vec<f32> {
        self.pose.orbiter.map_or_else(Vec::new, |o| {
            let mut out = Vec::with_capacity(10);
            out.extend(o.position.to_array());
            out.extend(o.orientation.to_array());
            out.extend(o.nametag_position.to_array());
            out
        })
    }

    /// Whether zoom-focus mode produced this frame.
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn zooming(&self) -> bool {
        self.pose.mode == ViewMode::ZoomFocus
    }

    /// Eased zoom progress, `undefined` in free mode.
    #[wasm_bindgen(getter, js_name = zoomProgress)]
    #[must_use]
    pub fn zoom_progress(&self) -> Option<f32> {
        self.pose.zoom_progress
    }

    /// Seconds for the day/night shader's `time` uniform.
    #[wasm_bindgen(getter, js_name = shaderTime)]
    #[must_use]
    pub fn shader_time(&self) -> f32 {
        self.pose.shader_time
    }
}
