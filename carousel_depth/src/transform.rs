// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal 3D placement matrix as reported by hosts.

/// Row-major 4×4 placement matrix using row-vector convention.
///
/// Element `m[r][c]` is `m{r+1}{c+1}` in layer-transform notation, so the
/// translation lives in the last row (`m41`, `m42`, `m43`). Only the parts
/// needed for ordering are interpreted: [`depth`](Self::depth) and
/// [`x_position`](Self::x_position).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform3D {
    /// Matrix rows.
    pub m: [[f64; 4]; 4],
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform3D {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Builds a transform from its rows.
    #[must_use]
    pub const fn from_rows(m: [[f64; 4]; 4]) -> Self {
        Self { m }
    }

    /// A pure translation.
    #[must_use]
    pub const fn translation(x: f64, y: f64, z: f64) -> Self {
        let mut t = Self::IDENTITY;
        t.m[3][0] = x;
        t.m[3][1] = y;
        t.m[3][2] = z;
        t
    }

    /// A pure scale.
    #[must_use]
    pub const fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        let mut t = Self::IDENTITY;
        t.m[0][0] = sx;
        t.m[1][1] = sy;
        t.m[2][2] = sz;
        t
    }

    /// Applies `self`, then `next`.
    #[must_use]
    pub fn then(&self, next: &Self) -> Self {
        let mut out = [[0.0; 4]; 4];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.m[r][k] * next.m[k][c]).sum();
            }
        }
        Self { m: out }
    }

    /// Applies `self`, then a translation.
    #[must_use]
    pub fn then_translate(&self, x: f64, y: f64, z: f64) -> Self {
        self.then(&Self::translation(x, y, z))
    }

    /// Projected depth: the sum of the z column (`m13 + m23 + m33 + m43`).
    #[must_use]
    pub fn depth(&self) -> f64 {
        self.m.iter().map(|row| row[2]).sum()
    }

    /// Projected lateral position: the sum of the x column (`m11 + m21 + m31 + m41`).
    #[must_use]
    pub fn x_position(&self) -> f64 {
        self.m.iter().map(|row| row[0]).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::Transform3D;

    #[test]
    fn identity_projects_unit_components() {
        assert_eq!(Transform3D::IDENTITY.depth(), 1.0);
        assert_eq!(Transform3D::IDENTITY.x_position(), 1.0);
    }

    #[test]
    fn translation_shifts_depth_and_x() {
        let t = Transform3D::translation(30.0, 5.0, -2.0);
        assert_eq!(t.depth(), -1.0);
        assert_eq!(t.x_position(), 31.0);
    }

    #[test]
    fn composition_applies_left_then_right() {
        let t = Transform3D::scale(2.0, 2.0, 2.0).then_translate(10.0, 0.0, 4.0);
        assert_eq!(t.m[3][0], 10.0);
        assert_eq!(t.m[0][0], 2.0);
        // Scale first, so the translation is not scaled.
        assert_eq!(t.depth(), 6.0);

        let u = Transform3D::translation(10.0, 0.0, 4.0).then(&Transform3D::scale(2.0, 2.0, 2.0));
        assert_eq!(u.m[3][0], 20.0);
        assert_eq!(u.m[3][2], 8.0);
    }
}
