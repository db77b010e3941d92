/// A 2D point or offset where the components are 32-bit floats.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Vec2f(pub f32, pub f32);

impl Vec2f {
    /// Scales the vector by a scalar.
    pub fn scale(self, s: f32) -> Vec2f {
        Vec2f(self.0 * s, self.1 * s)
    }
}

impl std::ops::Add for Vec2f {
    type Output = Vec2f;

    fn add(self, other: Vec2f) -> Vec2f {
        Vec2f(self.0 + other.0, self.1 + other.1)
    }
}

impl std::ops::AddAssign for Vec2f {
    fn add_assign(&mut self, other: Vec2f) {
        self.0 += other.0;
        self.1 += other.1;
    }
}

impl std::ops::Sub for Vec2f {
    type Output = Vec2f;

    fn sub(self, other: Vec2f) -> Vec2f {
        Vec2f(self.0 - other.0, self.1 - other.1)
    }
}

impl From<(f32, f32)> for Vec2f {
    fn from(v: (f32, f32)) -> Vec2f {
        Vec2f(v.0, v.1)
    }
}
