//! Pure hex-grid coordinate math. Axial `(q, r)` storage with the implicit
//! cube coordinate `s = -q - r` derived on demand. No dependency on the
//! match state or any ECS — these functions are total and side-effect free.

use serde::{Deserialize, Serialize};

/// An axial hex coordinate. Equality and hashing are by `(q, r)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hex {
    pub q: i32,
    pub r: i32,
}

impl Hex {
    pub const ORIGIN: Hex = Hex { q: 0, r: 0 };

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The implicit third cube coordinate.
    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }
}

impl std::ops::Add for Hex {
    type Output = Hex;
    fn add(self, rhs: Hex) -> Hex {
        Hex::new(self.q + rhs.q, self.r + rhs.r)
    }
}

impl std::ops::Sub for Hex {
    type Output = Hex;
    fn sub(self, rhs: Hex) -> Hex {
        Hex::new(self.q - rhs.q, self.r - rhs.r)
    }
}

impl std::ops::Mul<i32> for Hex {
    type Output = Hex;
    fn mul(self, rhs: i32) -> Hex {
        Hex::new(self.q * rhs, self.r * rhs)
    }
}

/// The six neighbor directions, starting East and proceeding
/// counter-clockwise. Order is load-bearing: `neighbors` and `ring` both
/// index into this table directly.
pub const DIRECTIONS: [Hex; 6] = [
    Hex::new(1, 0),
    Hex::new(1, -1),
    Hex::new(0, -1),
    Hex::new(-1, 0),
    Hex::new(-1, 1),
    Hex::new(0, 1),
];

fn length(h: Hex) -> i32 {
    (h.q.abs() + h.r.abs() + h.s().abs()) / 2
}

/// Hex distance between `a` and `b`.
pub fn distance(a: Hex, b: Hex) -> i32 {
    length(a - b)
}

/// The six hexes adjacent to `h`, in [`DIRECTIONS`] order.
pub fn neighbors(h: Hex) -> [Hex; 6] {
    let mut out = [Hex::ORIGIN; 6];
    for (i, d) in DIRECTIONS.iter().enumerate() {
        out[i] = h + *d;
    }
    out
}

/// All hexes within `radius` of `center`, filled disk, in no particular order.
pub fn spiral(center: Hex, radius: i32) -> Vec<Hex> {
    let mut out = Vec::new();
    for q in -radius..=radius {
        let r1 = (-radius - q).max(-radius);
        let r2 = (radius - q).min(radius);
        for r in r1..=r2 {
            out.push(center + Hex::new(q, r));
        }
    }
    out
}

/// Exactly the hexes at `distance == radius` from `center`, walking the
/// six edges starting from the corner at `DIRECTIONS[4] * radius`.
pub fn ring(center: Hex, radius: i32) -> Vec<Hex> {
    if radius == 0 {
        return vec![center];
    }
    let mut out = Vec::with_capacity((radius * 6) as usize);
    let mut current = center + DIRECTIONS[4] * radius;
    for direction in DIRECTIONS {
        for _ in 0..radius {
            out.push(current);
            current = current + direction;
        }
    }
    out
}

fn lerp(a: i32, b: i32, t: f64) -> f64 {
    a as f64 + (b - a) as f64 * t
}

fn cube_lerp(a: Hex, b: Hex, t: f64) -> (f64, f64, f64) {
    (lerp(a.q, b.q, t), lerp(a.r, b.r, t), lerp(a.s(), b.s(), t))
}

/// Rounds fractional cube coordinates to the nearest valid `Hex`,
/// resetting whichever component had the largest rounding error so that
/// `q + r + s == 0` is preserved.
fn cube_round(fq: f64, fr: f64, fs: f64) -> Hex {
    let mut q = fq.round();
    let mut r = fr.round();
    let s = fs.round();

    let q_diff = (q - fq).abs();
    let r_diff = (r - fr).abs();
    let s_diff = (s - fs).abs();

    if q_diff > r_diff && q_diff > s_diff {
        q = -r - s;
    } else if r_diff > s_diff {
        r = -q - s;
    }
    Hex::new(q as i32, r as i32)
}

/// The sequence of hexes forming a straight line from `start` to `end`,
/// inclusive of both endpoints.
pub fn linedraw(start: Hex, end: Hex) -> Vec<Hex> {
    let n = distance(start, end);
    if n == 0 {
        return vec![start];
    }
    (0..=n)
        .map(|i| {
            let t = i as f64 / n as f64;
            let (fq, fr, fs) = cube_lerp(start, end, t);
            cube_round(fq, fr, fs)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// distance from a hex to itself is zero
    #[test]
    fn distance_to_self_is_zero() {
        assert_eq!(distance(Hex::new(3, -2), Hex::new(3, -2)), 0);
    }

    /// adjacent hexes are exactly distance 1 apart
    #[test]
    fn neighbors_are_distance_one() {
        for n in neighbors(Hex::ORIGIN) {
            assert_eq!(distance(Hex::ORIGIN, n), 1);
        }
    }

    /// a radius-0 ring is just the center
    #[test]
    fn ring_zero_is_center() {
        assert_eq!(ring(Hex::ORIGIN, 0), vec![Hex::ORIGIN]);
    }

    /// ring(n) has exactly 6n hexes, all at distance n
    #[test]
    fn ring_has_six_times_radius_hexes_all_at_distance() {
        for radius in 1..=4 {
            let hexes = ring(Hex::ORIGIN, radius);
            assert_eq!(hexes.len(), (radius * 6) as usize);
            for h in hexes {
                assert_eq!(distance(Hex::ORIGIN, h), radius);
            }
        }
    }

    /// spiral(n) contains every hex within n, and only those
    #[test]
    fn spiral_matches_distance_filter() {
        let radius = 3;
        let mut expected: Vec<Hex> = (-10..=10)
            .flat_map(|q| (-10..=10).map(move |r| Hex::new(q, r)))
            .filter(|h| distance(Hex::ORIGIN, *h) <= radius)
            .collect();
        let mut actual = spiral(Hex::ORIGIN, radius);
        expected.sort_by_key(|h| (h.q, h.r));
        actual.sort_by_key(|h| (h.q, h.r));
        assert_eq!(expected, actual);
    }

    /// linedraw between adjacent hexes is just the two endpoints
    #[test]
    fn linedraw_adjacent_is_two_hexes() {
        let a = Hex::ORIGIN;
        let b = Hex::new(1, 0);
        assert_eq!(linedraw(a, b), vec![a, b]);
    }

    /// linedraw always starts and ends at its arguments
    #[test]
    fn linedraw_endpoints_match_inputs() {
        let a = Hex::new(-2, 3);
        let b = Hex::new(4, -1);
        let line = linedraw(a, b);
        assert_eq!(*line.first().unwrap(), a);
        assert_eq!(*line.last().unwrap(), b);
    }

    /// linedraw to self is the single hex
    #[test]
    fn linedraw_self_is_single_hex() {
        assert_eq!(linedraw(Hex::ORIGIN, Hex::ORIGIN), vec![Hex::ORIGIN]);
    }
}
