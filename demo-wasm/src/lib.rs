use sprung::{
    cube, two_link_pendulum, ChainConfig, CubeConfig, Impulse, MassSpringSystem, NoOpStepObserver,
    Tuning, Vec3,
};
use wasm_bindgen::prelude::*;

fn flatten(points: &[Vec3<f32>]) -> Vec<f32> {
    let mut out = Vec::with_capacity(points.len() * 3);
    for p in points {
        out.push(p.x);
        out.push(p.y);
        out.push(p.z);
    }
    out
}

/// Returns flat [ax, ay, az, bx, by, bz, ...] for every visible spring.
fn flatten_segments(system: &MassSpringSystem<f32>) -> Vec<f32> {
    let mut out = Vec::new();
    for (a, b) in system.visible_segments() {
        out.extend_from_slice(&[a.x, a.y, a.z, b.x, b.y, b.z]);
    }
    out
}

fn kick_from_index(direction: u32) -> Option<Impulse> {
    Impulse::ALL.get(direction as usize).copied()
}

/// Slider handling shared by both demos.
struct Controls {
    tuning: Tuning<f32>,
    pending: Vec<Impulse>,
    kick_strength: f32,
}

impl Controls {
    fn new() -> Self {
        Controls { tuning: Tuning::new(), pending: Vec::new(), kick_strength: 1.0 }
    }

    /// Apply queued kicks, then advance one frame.
    fn advance(&mut self, system: &mut MassSpringSystem<f32>) -> Result<(), JsError> {
        let config = self.tuning.step_config().map_err(|e| JsError::new(&e.to_string()))?;
        for kick in self.pending.drain(..) {
            system.apply_kick(kick, self.kick_strength);
        }
        system.step(self.tuning.frame_dt(), &config, &mut NoOpStepObserver);
        Ok(())
    }

    fn set_kick_strength(&mut self, strength: f32) {
        self.kick_strength = strength.max(0.0);
    }

    fn set_params(&mut self, system: &mut MassSpringSystem<f32>, mass: f32, stiffness: f32, damping: f32, gravity: f32) -> Result<(), JsError> {
        self.tuning.set_mass(mass);
        self.tuning.set_stiffness(stiffness);
        self.tuning.set_damping(damping);
        self.tuning.set_gravity(gravity);
        self.tuning.apply(system).map_err(|e| JsError::new(&e.to_string()))
    }
}

// ---- Cube Demo ----

#[wasm_bindgen]
pub struct CubeDemo {
    body: MassSpringSystem<f32>,
    controls: Controls,
}

#[wasm_bindgen]
impl CubeDemo {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<CubeDemo, JsError> {
        let body = cube(&CubeConfig::default()).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(CubeDemo { body, controls: Controls::new() })
    }

    /// Advance one frame.
    pub fn update(&mut self) -> Result<(), JsError> {
        self.controls.advance(&mut self.body)
    }

    pub fn set_time_scale(&mut self, scale: f32) {
        self.controls.tuning.set_time_scale(scale);
    }

    pub fn set_params(&mut self, mass: f32, stiffness: f32, damping: f32, gravity: f32) -> Result<(), JsError> {
        self.controls.set_params(&mut self.body, mass, stiffness, damping, gravity)
    }

    /// Queue a kick for the next frame. `direction` indexes +X, -X, +Y, -Y, +Z, -Z.
    pub fn kick(&mut self, direction: u32) {
        if let Some(kick) = kick_from_index(direction) {
            self.controls.pending.push(kick);
        }
    }

    pub fn set_kick_strength(&mut self, strength: f32) {
        self.controls.set_kick_strength(strength);
    }

    /// Returns flat [x0, y0, z0, x1, y1, z1, ...] positions
    pub fn positions(&self) -> Vec<f32> {
        flatten(&self.body.positions())
    }

    pub fn segments(&self) -> Vec<f32> {
        flatten_segments(&self.body)
    }

    pub fn particle_count(&self) -> usize {
        self.body.len()
    }
}

// ---- Pendulum Demo ----

#[wasm_bindgen]
pub struct PendulumDemo {
    chain: MassSpringSystem<f32>,
    controls: Controls,
}

#[wasm_bindgen]
impl PendulumDemo {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<PendulumDemo, JsError> {
        let chain = two_link_pendulum(&ChainConfig::default()).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(PendulumDemo { chain, controls: Controls::new() })
    }

    pub fn update(&mut self) -> Result<(), JsError> {
        self.controls.advance(&mut self.chain)
    }

    pub fn set_time_scale(&mut self, scale: f32) {
        self.controls.tuning.set_time_scale(scale);
    }

    pub fn set_params(&mut self, mass: f32, stiffness: f32, damping: f32, gravity: f32) -> Result<(), JsError> {
        self.controls.set_params(&mut self.chain, mass, stiffness, damping, gravity)
    }

    pub fn kick(&mut self, direction: u32) {
        if let Some(kick) = kick_from_index(direction) {
            self.controls.pending.push(kick);
        }
    }

    pub fn set_kick_strength(&mut self, strength: f32) {
        self.controls.set_kick_strength(strength);
    }

    pub fn positions(&self) -> Vec<f32> {
        flatten(&self.chain.positions())
    }

    pub fn segments(&self) -> Vec<f32> {
        flatten_segments(&self.chain)
    }

    pub fn particle_count(&self) -> usize {
        self.chain.len()
    }
}
