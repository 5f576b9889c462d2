use crate::foundation::error::{PathElem, ValidationError};

pub use kurbo::{Affine, Rect};

/// Spatial frame of a scene object: `[x, y, width, height]` on the wire.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(into = "[f64; 4]")]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Frame as a `kurbo` rectangle (origin at `x, y`).
    pub fn to_rect(self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

impl From<[f64; 4]> for Frame {
    fn from([x, y, width, height]: [f64; 4]) -> Self {
        Self::new(x, y, width, height)
    }
}

impl From<Frame> for [f64; 4] {
    fn from(f: Frame) -> Self {
        [f.x, f.y, f.width, f.height]
    }
}

/// 2D affine transform as three coordinate pairs: x basis, y basis, translation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(into = "[[f64; 2]; 3]")]
pub struct Transform {
    pub basis_x: [f64; 2],
    pub basis_y: [f64; 2],
    pub translation: [f64; 2],
}

impl Transform {
    pub const IDENTITY: Self = Self {
        basis_x: [1.0, 0.0],
        basis_y: [0.0, 1.0],
        translation: [0.0, 0.0],
    };

    pub fn to_affine(self) -> Affine {
        Affine::new([
            self.basis_x[0],
            self.basis_x[1],
            self.basis_y[0],
            self.basis_y[1],
            self.translation[0],
            self.translation[1],
        ])
    }
}

impl From<[[f64; 2]; 3]> for Transform {
    fn from([basis_x, basis_y, translation]: [[f64; 2]; 3]) -> Self {
        Self {
            basis_x,
            basis_y,
            translation,
        }
    }
}

impl From<Transform> for [[f64; 2]; 3] {
    fn from(t: Transform) -> Self {
        [t.basis_x, t.basis_y, t.translation]
    }
}

/// Straight (non-premultiplied) RGBA color with every channel in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(into = "[f64; 4]")]
pub struct Rgba {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl Rgba {
    /// Build a color, rejecting any channel outside `[0, 1]`.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Result<Self, ValidationError> {
        for (channel, c) in [("r", r), ("g", g), ("b", b), ("a", a)] {
            if !is_unit(c) {
                return Err(ValidationError::at(
                    &[],
                    format!("color channel {channel} must be in [0, 1] (got {c})"),
                ));
            }
        }
        Ok(Self { r, g, b, a })
    }

    pub(crate) fn from_channels(
        channels: [f64; 4],
        path: &[PathElem],
    ) -> Result<Self, ValidationError> {
        for (i, c) in channels.iter().enumerate() {
            if !is_unit(*c) {
                return Err(ValidationError::at(
                    &[path, &[PathElem::Index(i)]].concat(),
                    format!("color component must be in [0, 1] (got {c})"),
                ));
            }
        }
        let [r, g, b, a] = channels;
        Ok(Self { r, g, b, a })
    }

    pub fn r(self) -> f64 {
        self.r
    }

    pub fn g(self) -> f64 {
        self.g
    }

    pub fn b(self) -> f64 {
        self.b
    }

    pub fn a(self) -> f64 {
        self.a
    }

    /// Quantize to 8-bit channels for renderers that want bytes.
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f64| (c * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

impl From<Rgba> for [f64; 4] {
    fn from(c: Rgba) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

pub(crate) fn is_unit(v: f64) -> bool {
    (0.0..=1.0).contains(&v)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
