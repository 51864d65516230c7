use bloomline_io::{
    Actions, BASE_CANVAS_ID, BrowserImages, CanvasStack, CanvasSurface, DensitySlider,
    HttpDecorator, OVERLAY_CANVAS_ID, ShapePicker, notify,
};
use bloomline_shapes::{
    BusyGuard, CUSTOM_SHAPE_EXAMPLE, ClientConfig, DecorateError, FormSnapshot, Phase, PhaseCell,
    Renderer, ShapeId, submit,
};
use dioxus::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already initialized: {e}").into());
    }

    dioxus::launch(app);
}

/// [`Phase`] stored in a Dioxus signal, so the busy guard drives the UI.
struct PhaseSignal(Signal<Phase>);

impl PhaseCell for PhaseSignal {
    fn phase(&self) -> Phase {
        *self.0.peek()
    }

    fn set_phase(&mut self, phase: Phase) {
        self.0.set(phase);
    }
}

/// Root application component.
///
/// Holds the form state and the submission phase in signals and wires
/// together the shape picker, density slider, buttons, and canvases.
fn app() -> Element {
    let config = use_hook(ClientConfig::default);

    // --- Application state ---
    let phase = use_signal(Phase::default);
    let mut shape = use_signal(ShapeId::default);
    let mut custom_text = use_signal(|| CUSTOM_SHAPE_EXAMPLE.to_owned());
    let mut density = use_signal(|| config.density.default);

    // --- Submission ---
    // Form values are read with `peek` so neither the callback nor the
    // mount effect below subscribes to them.
    let run = {
        let config = config.clone();
        use_callback(move |()| {
            let Some(guard) = BusyGuard::acquire(PhaseSignal(phase)) else {
                log::debug!("submission already in flight; ignoring");
                return;
            };
            let snapshot = FormSnapshot {
                shape: *shape.peek(),
                custom_text: custom_text.peek().clone(),
                density: *density.peek(),
            };
            let config = config.clone();

            spawn(async move {
                let _guard = guard;
                if let Err(e) = decorate(&snapshot, &config).await {
                    notify::report(&e);
                }
            });
        })
    };

    // Decorate the default shape once the canvases are mounted.
    use_effect(move || run.call(()));

    let busy = phase().is_busy();

    rsx! {
        style { dangerous_inner_html: include_str!("../assets/style.css") }

        main { class: "app",
            header {
                h1 { "bloomline" }
                p { class: "tagline", "Pick a shape and grow a path of flowers around it." }
            }

            div { class: "layout",
                aside { class: "controls",
                    ShapePicker {
                        selected: shape(),
                        custom_text: custom_text(),
                        on_select: move |s| shape.set(s),
                        on_custom_change: move |t| custom_text.set(t),
                    }
                    DensitySlider {
                        value: density(),
                        range: config.density,
                        on_change: move |d| density.set(d),
                    }
                    Actions { busy, on_generate: run }
                }

                CanvasStack {
                    width: config.canvas_width,
                    height: config.canvas_height,
                    busy,
                }
            }
        }
    }
}

/// Run one submission against the page's canvases.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
async fn decorate(snapshot: &FormSnapshot, config: &ClientConfig) -> Result<(), DecorateError> {
    let images = BrowserImages::new(config)?;
    let mut base = CanvasSurface::by_id(BASE_CANVAS_ID)?;
    let mut overlay = CanvasSurface::by_id(OVERLAY_CANVAS_ID)?;
    let renderer = Renderer::new(&images, config);
    let client = HttpDecorator::from_config(config);

    submit(snapshot, &client, &renderer, &mut base, &mut overlay).await
}
