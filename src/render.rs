//! Read-only frame output for an external renderer.
//!
//! Nothing here draws. The structs below are laid out for direct upload to a
//! GPU buffer (`bytemuck::cast_slice`), and `FormationUniforms` carries what a
//! shader needs to evaluate the formation on the GPU instead of the CPU.

use crate::camera::FollowCamera;
use crate::core::{FormationEngine, GestureSymbol, ParticleStore};
use glam::{Mat4, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub pos: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FormationUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub hand_pos: [f32; 3],
    pub time: f32,
    pub tint: [f32; 3],
    pub color_mix: f32,
    pub gesture: f32,
    pub _pad: [f32; 3],
}

/// Numeric gesture encoding used only at the shader boundary.
#[inline]
pub fn gesture_code(gesture: GestureSymbol) -> f32 {
    match gesture {
        GestureSymbol::None => 0.0,
        GestureSymbol::Fist => 1.0,
        GestureSymbol::Open => 2.0,
        GestureSymbol::Peace => 3.0,
        GestureSymbol::Metal => 4.0,
    }
}

/// Borrowed snapshot of everything a renderer reads after a frame.
pub struct FrameView<'a> {
    pub store: &'a ParticleStore,
    pub formation: &'a FormationEngine,
    pub camera: &'a FollowCamera,
    pub hand_anchor: Vec3,
    pub gesture: GestureSymbol,
}

impl<'a> FrameView<'a> {
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Scene-wide tint color.
    pub fn tint(&self) -> Vec3 {
        self.formation.tint()
    }

    pub fn view_proj(&self) -> Mat4 {
        self.camera.view_proj()
    }

    /// Per-particle draw data: jittered position, tinted color, size.
    pub fn instances(&self) -> impl Iterator<Item = ParticleInstance> + '_ {
        self.store.iter().map(move |p| {
            let pos = self.formation.render_position(p);
            let color = self.formation.render_color(p);
            ParticleInstance {
                pos: pos.to_array(),
                size: p.size,
                color: color.extend(1.0).to_array(),
            }
        })
    }

    /// Refill `out` with this frame's instances, reusing its allocation.
    pub fn write_instances(&self, out: &mut Vec<ParticleInstance>) {
        out.clear();
        out.reserve(self.store.len());
        out.extend(self.instances());
    }

    pub fn uniforms(&self) -> FormationUniforms {
        FormationUniforms {
            view_proj: self.view_proj().to_cols_array_2d(),
            hand_pos: self.hand_anchor.to_array(),
            time: self.formation.elapsed_sec() as f32,
            tint: self.tint().to_array(),
            color_mix: self.formation.params.tint_mix,
            gesture: gesture_code(self.gesture),
            _pad: [0.0; 3],
        }
    }
}
