//! Background particle field: sparks and embers drifting upward and leaning
//! toward the pointer.
//!
//! Positions are in world units on a plane facing a perspective camera. The
//! field is purely visual; it never feeds back into page state.

use crate::constants::*;
use glam::{Vec2, Vec3};
use rand::prelude::*;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
    Spark,
    Ember,
}

/// Per-instance data uploaded to the GPU each frame.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// Visible extent of the `z = 0` plane, in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn from_camera(fov_deg: f32, distance: f32, aspect: f32) -> Self {
        let height = 2.0 * (fov_deg.to_radians() * 0.5).tan() * distance;
        Self {
            width: height * aspect.max(1e-3),
            height,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ParticleParams {
    pub count: usize,
    pub intensity: f32,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            intensity: PAGE_PARTICLE_INTENSITY,
        }
    }
}

pub struct ParticleField {
    pub params: ParticleParams,
    viewport: Viewport,
    positions: Vec<Vec3>,
    colors: Vec<[f32; 3]>,
    kinds: Vec<ParticleKind>,
    pointer: Vec2,
    elapsed: f32,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(params: ParticleParams, viewport: Viewport, seed: u64) -> Self {
        let mut field = Self {
            params,
            viewport,
            positions: Vec::new(),
            colors: Vec::new(),
            kinds: Vec::new(),
            pointer: Vec2::ZERO,
            elapsed: 0.0,
            rng: StdRng::seed_from_u64(seed),
        };
        field.spawn_all();
        field
    }

    fn spawn_all(&mut self) {
        let n = self.params.count;
        self.positions.clear();
        self.colors.clear();
        self.kinds.clear();
        for _ in 0..n {
            let x = (self.rng.gen::<f32>() - 0.5) * self.viewport.width * 2.0;
            let y = (self.rng.gen::<f32>() - 0.5) * self.viewport.height * 2.0;
            let z = (self.rng.gen::<f32>() - 0.5) * PARTICLE_DEPTH_SPREAD;
            self.positions.push(Vec3::new(x, y, z));
            if self.rng.gen_bool(EMBER_PROBABILITY) {
                self.kinds.push(ParticleKind::Ember);
                self.colors.push(EMBER_COLOR);
            } else {
                self.kinds.push(ParticleKind::Spark);
                self.colors.push(SPARK_COLOR);
            }
        }
    }

    /// Respawns the whole field when the visible extent changes.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            self.viewport = viewport;
            self.spawn_all();
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Pointer in normalized device coordinates, `[-1, 1]` on both axes, +y up.
    pub fn set_pointer(&mut self, ndc: Vec2) {
        self.pointer = ndc.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Advance one display frame. Motion is per frame; `dt` only drives the
    /// ember flicker clock.
    pub fn step(&mut self, dt: Duration) {
        self.elapsed += dt.as_secs_f32();
        let intensity = self.params.intensity;
        let drift = PARTICLE_DRIFT_PER_FRAME * intensity;
        let pull = POINTER_INFLUENCE * intensity * POINTER_PULL_SCALE;
        let target = Vec2::new(
            self.pointer.x * self.viewport.width,
            self.pointer.y * self.viewport.height,
        );

        for i in 0..self.positions.len() {
            let p = &mut self.positions[i];
            p.y += drift;
            p.x += (target.x - p.x) * pull;
            p.y += (target.y - p.y) * pull;

            if p.y > self.viewport.height {
                p.y = -self.viewport.height;
                p.x = (self.rng.gen::<f32>() - 0.5) * self.viewport.width * 2.0;
            }

            if self.kinds[i] == ParticleKind::Ember {
                self.colors[i][1] = EMBER_COLOR[1] * ember_flicker(self.elapsed, i);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn kinds(&self) -> &[ParticleKind] {
        &self.kinds
    }

    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    pub fn write_instances(&self, out: &mut Vec<ParticleInstance>) {
        out.clear();
        out.extend(
            self.positions
                .iter()
                .zip(&self.colors)
                .map(|(p, c)| ParticleInstance {
                    position: p.to_array(),
                    color: *c,
                }),
        );
    }
}

#[inline]
pub fn ember_flicker(elapsed_sec: f32, index: usize) -> f32 {
    EMBER_FLICKER_BASE + (elapsed_sec * EMBER_FLICKER_RATE + index as f32).sin() * EMBER_FLICKER_SPAN
}

/// Map a client-space pointer position to NDC with +y up.
#[inline]
pub fn pointer_ndc(client_x: f64, client_y: f64, inner_width: f64, inner_height: f64) -> Vec2 {
    if inner_width <= 0.0 || inner_height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        ((client_x / inner_width) * 2.0 - 1.0) as f32,
        (-((client_y / inner_height) * 2.0) + 1.0) as f32,
    )
}
