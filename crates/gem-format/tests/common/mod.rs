//! Byte-level builder for synthetic `.gem` buffers.

#![allow(dead_code)]

pub struct GemBuilder {
    bytes: Vec<u8>,
}

pub struct TrailerSpec<'a> {
    pub folds: i32,
    pub mirror: i32,
    pub gear: i32,
    pub refractive_index: f64,
    pub gear_angle: f64,
    pub text: &'a str,
}

impl Default for TrailerSpec<'_> {
    fn default() -> Self {
        Self {
            folds: 8,
            mirror: 1,
            gear: 96,
            refractive_index: 1.76,
            gear_angle: 0.0,
            text: "",
        }
    }
}

impl GemBuilder {
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    fn f64(&mut self, v: f64) -> &mut Self {
        self.bytes.extend_from_slice(&v.to_le_bytes());
        self
    }

    fn i32(&mut self, v: i32) -> &mut Self {
        self.bytes.extend_from_slice(&v.to_le_bytes());
        self
    }

    /// A well-formed facet record.
    pub fn facet(mut self, normal: [f64; 3], text: &str, vertices: &[[f64; 3]]) -> Self {
        self.facet_record(normal, 1, text, vertices);
        self
    }

    pub fn facet_record(
        &mut self,
        normal: [f64; 3],
        marker: i32,
        text: &str,
        vertices: &[[f64; 3]],
    ) -> &mut Self {
        for c in normal {
            self.f64(c);
        }
        self.i32(marker);
        self.bytes.push(text.len() as u8);
        self.bytes.extend_from_slice(text.as_bytes());
        for (i, v) in vertices.iter().enumerate() {
            // Vertex markers carry no meaning; vary them anyway.
            self.i32(i as i32 + 1);
            for c in v {
                self.f64(*c);
            }
        }
        self.i32(0)
    }

    pub fn trailer(mut self, spec: &TrailerSpec<'_>) -> Self {
        self.i32(0)
            .i32(0)
            .i32(spec.folds)
            .i32(spec.mirror)
            .i32(spec.gear)
            .f64(spec.refractive_index)
            .f64(spec.gear_angle);
        self.bytes.extend_from_slice(spec.text.as_bytes());
        self
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}

pub const TRIANGLE: [[f64; 3]; 3] = [[0.0, 0.0, -1.0], [1.0, 0.0, 0.0], [0.5, 0.8, 0.0]];

pub const SQUARE: [[f64; 3]; 4] = [
    [0.5, 0.5, 0.2],
    [-0.5, 0.5, 0.2],
    [-0.5, -0.5, 0.2],
    [0.5, -0.5, 0.2],
];

pub const DOWN: [f64; 3] = [0.0, 0.6, -0.8];
pub const UP: [f64; 3] = [0.0, 0.0, 1.0];
