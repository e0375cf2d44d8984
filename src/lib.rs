use wasm_bindgen::prelude::*;
use js_sys::Float32Array;

pub mod animation;
pub mod config;
pub mod data;
pub mod error;
pub mod math;

pub use animation::{MorphEngine, InstanceBuffer, Transform};
pub use config::TreeConfig;
pub use data::{ElementDataset, Mode};
pub use error::MorphError;

/// Install panic hook and console logger
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Fails only if the host page already installed a logger
    #[cfg(target_arch = "wasm32")]
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Scene state exposed to JavaScript.
///
/// Owns the mode flag on behalf of the page and accumulates elapsed time; the
/// page calls `update` once per animation frame and uploads the buffers.
#[wasm_bindgen]
pub struct EvergreenScene {
    engine: MorphEngine,
    mode: Mode,
    time: f32,
}

#[wasm_bindgen]
impl EvergreenScene {
    /// Create a scene with the default configuration and a time-based seed
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<EvergreenScene, JsValue> {
        let config = TreeConfig::default().with_seed(js_sys::Date::now() as u64);
        Self::with_config(&config).map_err(to_js_error)
    }

    /// Create a scene from a YAML preset
    #[wasm_bindgen]
    pub fn from_yaml(yaml: &str) -> Result<EvergreenScene, JsValue> {
        let config = TreeConfig::from_yaml(yaml).map_err(to_js_error)?;
        Self::with_config(&config).map_err(to_js_error)
    }

    /// Advance the animation by `dt` seconds
    #[wasm_bindgen]
    pub fn update(&mut self, dt: f32) {
        if dt.is_finite() && dt > 0.0 {
            self.time += dt;
        }
        self.engine.update(self.mode, self.time, dt);
    }

    #[wasm_bindgen]
    pub fn set_arranged(&mut self, arranged: bool) {
        self.set_mode(Mode::from_arranged(arranged));
    }

    /// Flip between scattered and arranged, returning true if now arranged
    #[wasm_bindgen]
    pub fn toggle_mode(&mut self) -> bool {
        self.set_mode(self.mode.toggle());
        self.mode.is_arranged()
    }

    #[wasm_bindgen]
    pub fn is_arranged(&self) -> bool {
        self.mode.is_arranged()
    }

    #[wasm_bindgen]
    pub fn time(&self) -> f32 {
        self.time
    }

    #[wasm_bindgen]
    pub fn needle_count(&self) -> usize {
        self.engine.needles().len()
    }

    #[wasm_bindgen]
    pub fn ornament_count(&self) -> usize {
        self.engine.ornaments().len()
    }

    /// Needle model matrices, 16 floats each
    #[wasm_bindgen]
    pub fn needle_matrices(&self) -> Float32Array {
        Float32Array::from(self.engine.needles().as_floats())
    }

    /// Ornament model matrices, 16 floats each
    #[wasm_bindgen]
    pub fn ornament_matrices(&self) -> Float32Array {
        Float32Array::from(self.engine.ornaments().as_floats())
    }

    /// Ornament RGB colors, 3 floats each. Only needs uploading once.
    #[wasm_bindgen]
    pub fn ornament_colors(&self) -> Float32Array {
        Float32Array::from(self.engine.ornament_colors().as_floats())
    }

    #[wasm_bindgen]
    pub fn topper_matrix(&self) -> Float32Array {
        Float32Array::from(&self.engine.topper().matrix().to_cols_array()[..])
    }
}

impl EvergreenScene {
    pub fn with_config(config: &TreeConfig) -> error::Result<Self> {
        Ok(Self {
            engine: MorphEngine::new(config)?,
            mode: Mode::Scattered,
            time: 0.0,
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if mode != self.mode {
            log::debug!("Mode changed: {:?} -> {:?} at t={:.2}", self.mode, mode, self.time);
        }
        self.mode = mode;
    }

    pub fn engine(&self) -> &MorphEngine {
        &self.engine
    }
}

fn to_js_error(err: MorphError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
