use crate::core::{Axis, Dimensions, SliderRange};
use crate::dom::NetCanvas;
use crate::render::{GpuMesh, GpuState};
use crate::viewer::{BoxViewer, FrameParams};

/// Everything one page session mutates, owned in one place and shared
/// between event handlers and the frame loop through `Rc<RefCell<_>>`.
pub struct Session {
    pub viewer: BoxViewer<GpuMesh>,
    pub gpu: GpuState<'static>,
    pub net: NetCanvas,
}

impl Session {
    /// Build the session and run the first rebuild so both views start in
    /// sync.
    pub fn new(
        gpu: GpuState<'static>,
        net: NetCanvas,
        dims: Dimensions,
        ranges: [SliderRange; 3],
    ) -> Self {
        let mut s = Self {
            viewer: BoxViewer::new(dims, ranges),
            gpu,
            net,
        };
        s.rebuild();
        s
    }

    pub fn rebuild(&mut self) {
        let size = self.net.size();
        self.viewer.rebuild(&mut self.gpu, &mut self.net, size);
    }

    pub fn set_dimension(&mut self, axis: Axis, value: f32) -> f32 {
        let size = self.net.size();
        self.viewer
            .set_dimension(axis, value, &mut self.gpu, &mut self.net, size)
    }

    pub fn redraw_net(&mut self) {
        let size = self.net.size();
        self.viewer.redraw_net(&mut self.net, size);
    }

    /// One display frame: orbit easing, idle spin, hue, then a render.
    pub fn frame(&mut self, elapsed_sec: f32, surface_size: (u32, u32)) {
        let params: FrameParams = self.viewer.frame(elapsed_sec);
        self.gpu.resize_if_needed(surface_size.0, surface_size.1);
        if let Err(e) = self.gpu.render(self.viewer.scene(), &params) {
            log::error!("[frame] render error: {:?}", e);
        }
    }
}
