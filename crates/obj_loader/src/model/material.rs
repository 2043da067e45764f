//! Wavefront material description (Phong model)

use crate::foundation::math::Vec3;

/// A material record parsed from an MTL document.
///
/// Fields mirror the classic Wavefront Phong keywords. Everything defaults
/// to zero or empty; meshes whose `usemtl` binding never matches keep this
/// default material. Materials are identified by `name`; within one loaded
/// set the first name match wins on duplicates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Material {
    /// Material name (`newmtl`)
    pub name: String,

    /// Ambient color (`Ka`)
    pub ka: Vec3,

    /// Diffuse color (`Kd`)
    pub kd: Vec3,

    /// Specular color (`Ks`)
    pub ks: Vec3,

    /// Specular exponent (`Ns`)
    pub ns: f32,

    /// Optical density (`Ni`)
    pub ni: f32,

    /// Dissolve (`d`)
    pub d: f32,

    /// Illumination model (`illum`)
    pub illum: i32,

    /// Ambient texture map (`map_Ka`)
    pub map_ka: String,

    /// Diffuse texture map (`map_Kd`)
    pub map_kd: String,

    /// Specular texture map (`map_Ks`)
    pub map_ks: String,

    /// Specular highlight map (`map_Ns`)
    pub map_ns: String,

    /// Alpha texture map (`map_d`)
    pub map_d: String,

    /// Bump map (`map_Bump`, `map_bump`, or `bump`)
    pub map_bump: String,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: String::new(),
            ka: Vec3::zeros(),
            kd: Vec3::zeros(),
            ks: Vec3::zeros(),
            ns: 0.0,
            ni: 0.0,
            d: 0.0,
            illum: 0,
            map_ka: String::new(),
            map_kd: String::new(),
            map_ks: String::new(),
            map_ns: String::new(),
            map_d: String::new(),
            map_bump: String::new(),
        }
    }
}
