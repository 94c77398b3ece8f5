use crate::interface::*;

// Running best of a search node. Ties go to the move offered last, in both
// directions, so the result depends on the order moves are offered in.
pub(super) struct ValueMove {
    maximizing: bool,
    value: Evaluation,
    m: Option<Move>,
}

impl ValueMove {
    pub(super) fn new(maximizing: bool) -> Self {
        let value = if maximizing { WORST_EVAL } else { BEST_EVAL };
        Self { maximizing, value, m: None }
    }

    pub(super) fn offer(&mut self, value: Evaluation, m: Move) {
        let better = if self.maximizing { value >= self.value } else { value <= self.value };
        if better {
            self.value = value;
            self.m = Some(m);
        }
    }

    pub(super) fn into_inner(self) -> (Evaluation, Option<Move>) {
        (self.value, self.m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_ties_replace_earlier() {
        let mut best = ValueMove::new(true);
        best.offer(5, Move::new(1, 1));
        best.offer(5, Move::new(1, 3));
        best.offer(4, Move::new(1, 5));
        assert_eq!(best.into_inner(), (5, Some(Move::new(1, 3))));

        let mut best = ValueMove::new(false);
        best.offer(-2, Move::new(1, 1));
        best.offer(-2, Move::new(3, 1));
        best.offer(0, Move::new(5, 1));
        assert_eq!(best.into_inner(), (-2, Some(Move::new(3, 1))));
    }

    #[test]
    fn empty_node_keeps_sentinel() {
        assert_eq!(ValueMove::new(true).into_inner(), (WORST_EVAL, None));
        assert_eq!(ValueMove::new(false).into_inner(), (BEST_EVAL, None));
    }
}
