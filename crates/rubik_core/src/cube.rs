use std::collections::HashSet;

use itertools::iproduct;
use rubikmath::{Float, Rotation, approx_eq};
use strum::{EnumCount, IntoEnumIterator};

use crate::{CUBELET_COUNT, Cubelet, Face, Move, home_index};

/// Quiescent state of a 3x3x3 cube.
///
/// The cubelets never change order in storage, so an index into
/// [`Cube::cubelets()`] identifies the same physical cubelet for the lifetime
/// of the cube.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    /// Cubelets, in construction order.
    cubelets: Vec<Cubelet>,
    /// Index of the cubelet at the centre of each face.
    centres: [usize; Face::COUNT],
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

impl Cube {
    /// Constructs a solved cube.
    pub fn new() -> Self {
        let cubelets: Vec<Cubelet> = iproduct!(-1..=1, -1..=1, -1..=1)
            .map(|(x, y, z)| Cubelet::new([x, y, z]))
            .collect();
        debug_assert_eq!(cubelets.len(), CUBELET_COUNT);

        let mut centres = [0; Face::COUNT];
        for face in Face::iter() {
            if let Some(i) = home_index(face.centre()) {
                centres[face.index()] = i;
            }
        }

        Self { cubelets, centres }
    }

    /// Returns all cubelets, in construction order.
    pub fn cubelets(&self) -> &[Cubelet] {
        &self.cubelets
    }
    /// Replaces every cubelet with the corresponding one from `snapshot`.
    ///
    /// `snapshot` must come from [`Cube::cubelets()`] on this cube.
    pub fn restore(&mut self, snapshot: &[Cubelet]) {
        if snapshot.len() != self.cubelets.len() {
            rubikmath::debug_panic!(
                "snapshot has {} cubelets; expected {}",
                snapshot.len(),
                self.cubelets.len(),
            );
            return;
        }
        self.cubelets.clone_from_slice(snapshot);
    }

    /// Returns the index of the cubelet at the centre of `face`.
    pub fn centre_index(&self, face: Face) -> usize {
        self.centres[face.index()]
    }
    /// Returns the cubelet at the centre of `face`.
    pub fn centre(&self, face: Face) -> &Cubelet {
        &self.cubelets[self.centre_index(face)]
    }

    /// Returns the turning axis for `face` along with the coordinate shared by
    /// every cubelet in the face layer.
    ///
    /// This is the single nonzero coordinate of the face's centre cubelet.
    pub fn turning_axis(&self, face: Face) -> Option<(u8, Float)> {
        let centre = self.centre(face);
        let mut nonzero = centre.position.iter_nonzero();
        match (nonzero.next(), nonzero.next()) {
            (Some(axis), None) => Some(axis),
            _ => {
                rubikmath::debug_panic!("face {face} centre is at {centre}, not a face centre");
                None
            }
        }
    }

    /// Returns the indices of the cubelets in the layer of `face`.
    ///
    /// A cubelet belongs to the layer if its coordinate along the turning axis
    /// equals that of the face's centre.
    pub fn face_members(&self, face: Face) -> Vec<usize> {
        let Some((axis, value)) = self.turning_axis(face) else {
            return vec![];
        };
        self.cubelets
            .iter()
            .enumerate()
            .filter(|(_, c)| approx_eq(&c.position.get(axis), &value))
            .map(|(i, _)| i)
            .collect()
    }

    /// Rotates a set of cubelets without snapping them to the grid, for
    /// partial turns.
    ///
    /// If `snap_axis` is given, that coordinate of each rotated cubelet is
    /// reset to the exact layer value so that face membership stays stable.
    pub fn rotate_cubelets(
        &mut self,
        indices: &[usize],
        delta: &Rotation,
        snap_axis: Option<(u8, Float)>,
    ) {
        for &i in indices {
            let Some(cubelet) = self.cubelets.get_mut(i) else {
                rubikmath::debug_panic!("cubelet index {i} out of range");
                continue;
            };
            cubelet.rotate(delta);
            if let Some((axis, value)) = snap_axis
                && let Some(coord) = cubelet.position.get_mut(axis)
            {
                *coord = value;
            }
        }
    }

    /// Instantly turns the layer of `face` by `angle` radians around the
    /// centre's position vector, then snaps every cubelet to the grid.
    ///
    /// `angle` should be a multiple of a quarter turn.
    pub fn turn_face(&mut self, face: Face, angle: Float) {
        let grip = self.face_members(face);
        let delta = Rotation::from_axis_angle(angle, self.centre(face).position);
        for &i in &grip {
            let cubelet = &mut self.cubelets[i];
            cubelet.rotate(&delta);
            cubelet.align();
        }
        log::trace!("turned face {face} by {:.1}°", angle.to_degrees());
        self.validate_centres();
    }
    /// Instantly applies a move.
    pub fn do_move(&mut self, twist: Move) {
        self.turn_face(twist.face, twist.angle());
    }

    /// Checks that each face's centre lookup still points at a face centre.
    fn validate_centres(&self) {
        for face in Face::iter() {
            let centre = self.centre(face);
            if centre.grid_position() != Some(face.centre()) {
                rubikmath::debug_panic!("stale centre for face {face}: {centre}");
            }
        }
    }

    /// Returns whether every cubelet sits on an integer grid cell inside the
    /// cube and no two cubelets share a cell.
    pub fn is_on_grid(&self) -> bool {
        let mut seen = HashSet::new();
        self.cubelets.iter().all(|c| {
            c.grid_position().is_some_and(|grid| {
                grid.iter().all(|x| (-1..=1).contains(x)) && seen.insert(grid)
            })
        })
    }

    /// Returns whether every visible sticker faces the same direction as its
    /// color's home face.
    ///
    /// Spin of the face centres is not visible, so it is ignored.
    pub fn is_solved(&self) -> bool {
        self.cubelets.iter().all(|c| {
            c.sticker_normals()
                .all(|(color, normal)| approx_eq(&normal, &color.home_normal()))
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_centre_indices_match_construction_order() {
        let cube = Cube::new();
        let expected = [
            (Face::R, 4),
            (Face::D, 10),
            (Face::B, 12),
            (Face::F, 14),
            (Face::U, 16),
            (Face::L, 22),
        ];
        for (face, index) in expected {
            assert_eq!(cube.centre_index(face), index);
            assert_eq!(cube.centre(face).home(), face.centre());
        }
    }

    #[test]
    fn test_face_members() {
        let cube = Cube::new();
        for face in Face::iter() {
            let members = cube.face_members(face);
            assert_eq!(members.len(), 9);
            assert!(members.contains(&cube.centre_index(face)));
        }
    }

    #[test]
    fn test_turn_keeps_grid() {
        let mut cube = Cube::new();
        for ch in "urFdBl".chars() {
            cube.do_move(Move::from_char(ch).unwrap());
            assert!(cube.is_on_grid());
        }
        assert!(!cube.is_solved());
    }

    #[test]
    fn test_restore() {
        let mut cube = Cube::new();
        let snapshot = cube.cubelets().to_vec();
        cube.do_move(Move::from_char('f').unwrap());
        assert_ne!(cube, Cube::new());
        cube.restore(&snapshot);
        assert_eq!(cube, Cube::new());
    }
}
