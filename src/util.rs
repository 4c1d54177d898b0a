use std::fmt;
use fxhash::FxHashSet;

/**
 * Hash set with a fast non-cryptographically secure hash function.
 */
pub type HashSet<V> = FxHashSet<V>;

/// Formats a float the way Tiled does: shortest round-trip form, no trailing ".0".
pub fn fmt_num<T: Copy + fmt::Display + Into<f64>>(value: T) -> String {
    if value.into() == 0.0 {
        return String::from("0");
    }
    format!("{value}")
}

/// Formats a list of points as Tiled's "x,y x,y" attribute value.
pub fn fmt_points(points: &[glam::Vec2]) -> String {
    let mut out = String::with_capacity(points.len() * 8);
    for (i, point) in points.iter().enumerate() {
        if i != 0 {
            out.push(' ');
        }
        out.push_str(&fmt_num(point.x));
        out.push(',');
        out.push_str(&fmt_num(point.y));
    }
    out
}

#[cfg(test)]
mod test {
    use glam::Vec2;
    use super::{fmt_num, fmt_points};

    #[test]
    fn whole_numbers_drop_fraction() {
        assert_eq!("7", fmt_num(7.0));
        assert_eq!("-4", fmt_num(-4.0));
        assert_eq!("0", fmt_num(-0.0f32));
        assert_eq!("0", fmt_num(-0.0f64));
        assert_eq!("0.5", fmt_num(0.5f64));
    }

    #[test]
    fn fractions_keep_shortest_form() {
        assert_eq!("1.81818", fmt_num(1.81818f32));
        assert_eq!("0.363636", fmt_num(0.363636f32));
    }

    #[test]
    fn points() {
        let points = [Vec2::new(0.0, 0.0), Vec2::new(26.3636, -4.0), Vec2::new(14.9091, 24.7273)];
        assert_eq!("0,0 26.3636,-4 14.9091,24.7273", fmt_points(&points));
        assert_eq!("", fmt_points(&[]));
    }
}
