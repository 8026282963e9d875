//! Classifying and splitting segments against a splitting line.

use tracing::trace;

use crate::{BspError, Line, DEFAULT_EPSILON};

/// Position of a segment relative to a splitting line.
#[derive(Debug, Clone, PartialEq)]
pub enum Relation {
    /// Both endpoints are ahead of the line, or one is ahead and one is on it
    Ahead,
    /// Both endpoints are behind the line, or one is behind and one is on it
    Behind,
    /// Both endpoints lie on the line
    Collinear,
    /// One endpoint is ahead and the other behind; the segment was split
    /// at the intersection point.
    Straddles {
        /// Piece on the ahead side, stored in the back subtree
        back: Line,
        /// Piece on the behind side, stored in the front subtree
        front: Line,
    },
}

impl Relation {
    /// Returns true for [`Relation::Straddles`].
    #[inline]
    pub fn is_straddling(&self) -> bool {
        matches!(self, Relation::Straddles { .. })
    }
}

impl Line {
    /// Classifies `other` relative to the infinite line through `self`,
    /// splitting it if it straddles.
    ///
    /// Each endpoint of `other` is weighted by [`crate::Side::weight`] and
    /// the weights are summed:
    ///
    /// - `> 0`: [`Relation::Ahead`]
    /// - `< -1`: [`Relation::Behind`]
    /// - `== 0`: [`Relation::Collinear`]
    /// - `== -1`: [`Relation::Straddles`]
    ///
    /// When splitting, the piece keeping the ahead endpoint becomes `back`
    /// and the piece keeping the behind endpoint becomes `front`. Both share
    /// the intersection point and keep the direction of `other`.
    ///
    /// # Errors
    /// Returns [`BspError::DegenerateGeometry`] if `self` is vertical, or if
    /// `other` straddles and cannot be intersected (vertical or parallel).
    pub fn relate(&self, other: &Line, epsilon: f64) -> Result<Relation, BspError> {
        let p1_side = self.classify_point(other.p1(), epsilon)?;
        let p2_side = self.classify_point(other.p2(), epsilon)?;
        let sum = p1_side.weight() + p2_side.weight();

        trace!(%other, ?p1_side, ?p2_side, "classified segment");

        // -1 can only come from one ahead (+1) and one behind (-2). A sum of
        // zero only comes from two on-line endpoints with these weights.
        let relation = match sum {
            s if s > 0 => Relation::Ahead,
            s if s < -1 => Relation::Behind,
            0 => Relation::Collinear,
            _ => {
                let cut = self.intersection(other)?;
                if p1_side.weight() > 0 {
                    Relation::Straddles {
                        back: Line::new(other.p1(), cut),
                        front: Line::new(cut, other.p2()),
                    }
                } else {
                    Relation::Straddles {
                        back: Line::new(cut, other.p2()),
                        front: Line::new(other.p1(), cut),
                    }
                }
            }
        };
        Ok(relation)
    }

    /// [`Line::relate`] with [`DEFAULT_EPSILON`].
    pub fn relate_default(&self, other: &Line) -> Result<Relation, BspError> {
        self.relate(other, DEFAULT_EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DegenerateKind;
    use proptest::prelude::*;

    fn make_line(a: [f64; 2], b: [f64; 2]) -> Line {
        Line::from_coords(a[0], a[1], b[0], b[1])
    }

    #[test]
    fn behind_diagonal() {
        let splitter = make_line([1.0, 1.0], [2.0, 2.0]);
        let other = make_line([4.0, 4.0], [7.0, 4.0]);
        assert_eq!(splitter.relate_default(&other), Ok(Relation::Behind));
    }

    #[test]
    fn ahead_diagonal() {
        let splitter = make_line([1.0, 1.0], [2.0, 2.0]);
        let other = make_line([0.0, 10.0], [3.0, 8.0]);
        assert_eq!(splitter.relate_default(&other), Ok(Relation::Ahead));
    }

    #[test]
    fn touching_on_ahead_side_is_ahead() {
        let splitter = make_line([0.0, 0.0], [1.0, 0.0]);
        let other = make_line([2.0, 0.0], [3.0, 1.0]);
        assert_eq!(splitter.relate_default(&other), Ok(Relation::Ahead));
    }

    #[test]
    fn self_is_collinear() {
        let splitter = make_line([1.0, 1.0], [2.0, 2.0]);
        assert_eq!(splitter.relate_default(&splitter.clone()), Ok(Relation::Collinear));
    }

    #[test]
    fn disjoint_collinear_segment() {
        let splitter = make_line([1.0, 1.0], [2.0, 2.0]);
        let other = make_line([5.0, 5.0], [-3.0, -3.0]);
        assert_eq!(splitter.relate_default(&other), Ok(Relation::Collinear));
    }

    #[test]
    fn straddle_with_p1_ahead() {
        let splitter = make_line([1.0, 1.0], [2.0, 2.0]);
        let other = make_line([6.0, 7.0], [9.0, 7.0]);
        let relation = splitter.relate_default(&other).unwrap();
        assert_eq!(
            relation,
            Relation::Straddles {
                back: make_line([6.0, 7.0], [7.0, 7.0]),
                front: make_line([7.0, 7.0], [9.0, 7.0]),
            }
        );
    }

    #[test]
    fn straddle_with_p1_behind() {
        let splitter = make_line([0.0, 0.0], [1.0, 0.0]);
        let other = make_line([0.0, -1.0], [2.0, 1.0]);
        let Relation::Straddles { back, front } = splitter.relate_default(&other).unwrap() else {
            panic!("expected a straddle");
        };
        // back keeps the ahead endpoint (p2), front keeps the behind endpoint (p1)
        assert_eq!(back.p2(), other.p2());
        assert_eq!(front.p1(), other.p1());
        assert_eq!(back.p1(), front.p2());
        assert!((back.p1().x - 1.0).abs() < 1e-12);
        assert!(back.p1().y.abs() < 1e-12);
    }

    #[test]
    fn split_pieces_reconstruct_original() {
        let splitter = make_line([1.0, 1.0], [2.0, 2.0]);
        let other = make_line([2.0, 5.0], [4.0, 2.0]);
        let Relation::Straddles { back, front } = splitter.relate_default(&other).unwrap() else {
            panic!("expected a straddle");
        };
        // p1 is ahead, so back runs p1 -> cut and front runs cut -> p2
        assert_eq!(back.p1(), other.p1());
        assert_eq!(back.p2(), front.p1());
        assert_eq!(front.p2(), other.p2());
        assert!((back.p2().x - 3.2).abs() < 1e-9);
        assert!((back.p2().y - 3.2).abs() < 1e-9);
    }

    #[test]
    fn vertical_splitter_is_rejected() {
        let splitter = make_line([0.0, 0.0], [0.0, 5.0]);
        let other = make_line([-1.0, 1.0], [1.0, 2.0]);
        assert_eq!(
            splitter.relate_default(&other),
            Err(BspError::DegenerateGeometry(DegenerateKind::VerticalSplitter))
        );
    }

    #[test]
    fn vertical_straddling_segment_is_rejected() {
        let splitter = make_line([0.0, 0.0], [1.0, 0.0]);
        let other = make_line([0.5, -1.0], [0.5, 1.0]);
        assert_eq!(
            splitter.relate_default(&other),
            Err(BspError::DegenerateGeometry(DegenerateKind::VerticalSegment))
        );
    }

    #[test]
    fn vertical_non_straddling_segment_is_fine() {
        let splitter = make_line([0.0, 0.0], [1.0, 0.0]);
        let other = make_line([0.5, 1.0], [0.5, 2.0]);
        assert_eq!(splitter.relate_default(&other), Ok(Relation::Ahead));
    }

    #[test]
    fn two_verticals_are_rejected() {
        let splitter = make_line([0.0, 0.0], [0.0, 1.0]);
        let other = make_line([-1.0, 0.0], [-1.0, 1.0]);
        assert!(matches!(
            splitter.relate_default(&other),
            Err(BspError::DegenerateGeometry(_))
        ));
    }

    #[test]
    fn wide_epsilon_turns_straddle_into_collinear() {
        let splitter = make_line([0.0, 0.0], [1.0, 0.0]);
        let other = make_line([0.0, -0.01], [1.0, 0.01]);
        assert!(splitter.relate_default(&other).unwrap().is_straddling());
        assert_eq!(splitter.relate(&other, 0.1), Ok(Relation::Collinear));
    }

    fn arb_line() -> impl Strategy<Value = Line> {
        let coord = || (-20i32..20).prop_map(f64::from);
        (coord(), coord(), coord(), coord())
            .prop_map(|(x1, y1, x2, y2)| Line::from_coords(x1, y1, x2, y2))
    }

    proptest! {
        #[test]
        fn non_vertical_line_is_collinear_with_itself(line in arb_line()) {
            prop_assume!(!line.is_vertical());
            prop_assert_eq!(line.relate_default(&line.clone()), Ok(Relation::Collinear));
        }

        #[test]
        fn split_pieces_share_cut_and_keep_endpoints(splitter in arb_line(), other in arb_line()) {
            if let Ok(Relation::Straddles { back, front }) = splitter.relate_default(&other) {
                let back_first = back.p1() == other.p1()
                    && back.p2() == front.p1()
                    && front.p2() == other.p2();
                let front_first = front.p1() == other.p1()
                    && front.p2() == back.p1()
                    && back.p2() == other.p2();
                prop_assert!(back_first || front_first);

                // The back piece keeps the endpoint ahead of the splitter
                let ahead = if back_first { back.p1() } else { back.p2() };
                prop_assert_eq!(
                    splitter.classify_point(ahead, DEFAULT_EPSILON),
                    Ok(crate::Side::Ahead)
                );
            }
        }

        #[test]
        fn vertical_splitter_never_classifies(
            x in -20i32..20,
            y1 in -20i32..20,
            y2 in -20i32..20,
            other in arb_line(),
        ) {
            let x = f64::from(x);
            let splitter = Line::from_coords(x, f64::from(y1), x, f64::from(y2));
            prop_assert_eq!(
                splitter.relate_default(&other),
                Err(BspError::DegenerateGeometry(DegenerateKind::VerticalSplitter))
            );
        }
    }
}
