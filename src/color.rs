//! Scalar → RGB color mapping.
//!
//! Ribbons are colored by sequence position through a [`Colormap`]. The
//! default ramp is Viridis; Plasma is available through
//! [`ColormapKind`](crate::options::ColormapKind).

/// A continuous function from a normalized scalar to a display color.
pub trait Colormap: Send + Sync {
    /// Color at position `t`. Values outside `[0, 1]` are clamped.
    fn color(&self, t: f32) -> [f32; 3];
}

/// Viridis control points, t = 0.00, 0.25, 0.50, 0.75, 1.00.
const VIRIDIS: [[f32; 3]; 5] = [
    [0.267_004, 0.004_874, 0.329_415],
    [0.229_739, 0.322_361, 0.545_706],
    [0.127_568, 0.566_949, 0.550_556],
    [0.369_214, 0.788_888, 0.382_914],
    [0.993_248, 0.906_157, 0.143_936],
];

/// Plasma control points, t = 0.00, 0.25, 0.50, 0.75, 1.00.
const PLASMA: [[f32; 3]; 5] = [
    [0.050_383, 0.029_803, 0.527_975],
    [0.494_877, 0.011_990, 0.657_865],
    [0.798_216, 0.280_197, 0.469_538],
    [0.973_416, 0.585_761, 0.251_540],
    [0.940_015, 0.975_158, 0.131_326],
];

/// A color ramp defined by N evenly-spaced color stops.
/// `t = 0` maps to the first color, `t = 1` maps to the last.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
    stops: Vec<[f32; 3]>,
}

impl ColorRamp {
    /// Build a ramp from explicit stops. A single stop yields a constant
    /// map; an empty list yields black.
    #[must_use]
    pub fn new(stops: Vec<[f32; 3]>) -> Self {
        Self { stops }
    }

    /// Perceptually uniform purple → green → yellow ramp.
    #[must_use]
    pub fn viridis() -> Self {
        Self::new(VIRIDIS.to_vec())
    }

    /// Perceptually uniform blue → magenta → yellow ramp.
    #[must_use]
    pub fn plasma() -> Self {
        Self::new(PLASMA.to_vec())
    }

    /// Interpolate the ramp at position `t` in [0, 1].
    #[must_use]
    pub fn sample(&self, t: f32) -> [f32; 3] {
        match self.stops.len() {
            0 => return [0.0; 3],
            1 => return self.stops[0],
            _ => {}
        }
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let n = self.stops.len() - 1;
        let scaled = t * n as f32;
        let idx = (scaled as usize).min(n - 1);
        let frac = scaled - idx as f32;

        let a = &self.stops[idx];
        let b = &self.stops[idx + 1];
        [
            a[0] + (b[0] - a[0]) * frac,
            a[1] + (b[1] - a[1]) * frac,
            a[2] + (b[2] - a[2]) * frac,
        ]
    }
}

impl Default for ColorRamp {
    fn default() -> Self {
        Self::viridis()
    }
}

impl Colormap for ColorRamp {
    fn color(&self, t: f32) -> [f32; 3] {
        self.sample(t)
    }
}

/// Decode a packed `0xRRGGBB` value into linear 0..1 components.
#[must_use]
pub fn hex_color(rgb: u32) -> [f32; 3] {
    [
        ((rgb >> 16) & 0xff) as f32 / 255.0,
        ((rgb >> 8) & 0xff) as f32 / 255.0,
        (rgb & 0xff) as f32 / 255.0,
    ]
}
