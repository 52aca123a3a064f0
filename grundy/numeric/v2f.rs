#![allow(missing_docs)]

use std::ops::{Add, Mul, Sub};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct V2f {
    pub x: f32,
    pub y: f32,
}

impl V2f {
    pub const ZERO: V2f = V2f { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn distance(u: V2f, v: V2f) -> f32 {
        f32::sqrt((v.x - u.x).mul_add(v.x - u.x, (v.y - u.y) * (v.y - u.y)))
    }

    #[must_use]
    pub fn direction(u: V2f, v: V2f) -> V2f {
        (V2f {
            x: v.x - u.x,
            y: v.y - u.y,
        })
        .normalized()
    }

    #[must_use]
    pub fn length(self) -> f32 {
        f32::sqrt(self.x.mul_add(self.x, self.y * self.y))
    }

    #[must_use]
    pub fn normalized(self) -> V2f {
        let l = self.length();
        if l == 0.0 {
            return self;
        }

        V2f {
            x: self.x / l,
            y: self.y / l,
        }
    }
}

impl Add for V2f {
    type Output = V2f;

    fn add(self, rhs: Self) -> Self::Output {
        V2f {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for V2f {
    type Output = V2f;

    fn sub(self, rhs: Self) -> Self::Output {
        V2f {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<f32> for V2f {
    type Output = V2f;

    fn mul(self, rhs: f32) -> Self::Output {
        V2f {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

#[test]
fn direction_is_unit() {
    let d = V2f::direction(V2f::ZERO, V2f { x: 3.0, y: 4.0 });
    assert!((d.length() - 1.0).abs() < f32::EPSILON);
    assert!((V2f::distance(V2f::ZERO, V2f { x: 3.0, y: 4.0 }) - 5.0).abs() < f32::EPSILON);
}
