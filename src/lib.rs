pub mod camera;
pub mod constants;
pub mod core;
pub mod diagram;
pub mod input;
pub mod viewer;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod readouts;
#[cfg(target_arch = "wasm32")]
mod render;
#[cfg(target_arch = "wasm32")]
mod session;

#[cfg(target_arch = "wasm32")]
pub use web_entry::{start, stop_render_loop};

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::constants::{BOX_CANVAS_ID, NET_CANVAS_ID};
    use crate::core::{Axis, Dimensions, SliderRange};
    use crate::session::Session;
    use crate::{dom, events, frame, readouts, render};
    use instant::Instant;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys as web;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("boxfold-web starting");

        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
        Ok(())
    }

    async fn init() -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        let box_canvas = dom::canvas_by_id(&document, BOX_CANVAS_ID)?;
        let net_canvas = dom::canvas_by_id(&document, NET_CANVAS_ID)?;
        dom::sync_canvas_backing_size(&box_canvas);
        dom::sync_canvas_backing_size(&net_canvas);

        let sliders = [
            dom::slider_by_axis(&document, Axis::Width)?,
            dom::slider_by_axis(&document, Axis::Height)?,
            dom::slider_by_axis(&document, Axis::Depth)?,
        ];
        let ranges: [SliderRange; 3] =
            std::array::from_fn(|i| dom::slider_range(&sliders[i], Axis::ALL[i]));
        let defaults = Dimensions::default();
        let mut dims = defaults;
        for (axis, input) in Axis::ALL.into_iter().zip(sliders.iter()) {
            dims = dims.with(axis, dom::slider_value(input).unwrap_or(defaults.get(axis)));
        }
        log::info!(
            "[init] sliders w={:?} h={:?} d={:?} start=({:.1}, {:.1}, {:.1})",
            ranges[0],
            ranges[1],
            ranges[2],
            dims.width,
            dims.height,
            dims.depth
        );

        let net = dom::NetCanvas::new(net_canvas)?;

        // leak a canvas clone to satisfy 'static lifetime for surface
        let leaked_canvas: &'static web::HtmlCanvasElement = Box::leak(Box::new(box_canvas.clone()));
        let gpu = render::GpuState::new(leaked_canvas).await?;

        let session = Rc::new(RefCell::new(Session::new(gpu, net, dims, ranges)));
        {
            let s = session.borrow();
            let stored = s.viewer.dimensions();
            readouts::set_all(&document, &stored);
            for (axis, input) in Axis::ALL.into_iter().zip(sliders.iter()) {
                readouts::sync_slider(input, stored.get(axis));
            }
            log::info!("[init] scene ready, live meshes={}", s.gpu.live_meshes());
        }

        events::wire_sliders(&document, sliders, session.clone());
        events::wire_resize(&box_canvas, session.clone());
        events::wire_input_handlers(events::pointer::InputWiring {
            canvas: box_canvas.clone(),
            session: session.clone(),
        });

        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
            session,
            canvas: box_canvas,
            started: Instant::now(),
        }));
        let handle = frame::start_loop(frame_ctx);
        log::info!("[init] render loop running={}", handle.is_running());
        LOOP.with(|slot| *slot.borrow_mut() = Some(handle));

        Ok(())
    }

    thread_local! {
        static LOOP: RefCell<Option<frame::LoopHandle>> = const { RefCell::new(None) };
    }

    /// Stop the render loop from JS. The last frame stays on screen.
    #[wasm_bindgen(js_name = stopRenderLoop)]
    pub fn stop_render_loop() {
        LOOP.with(|slot| {
            if let Some(handle) = slot.borrow().as_ref() {
                handle.stop();
            }
        });
    }
}
