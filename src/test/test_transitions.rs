#[cfg(test)]
mod test {
    use crate::core::*;
    use crate::lts::*;
    use crate::lts::StateValue::{Block, Free, Man};
    use crate::test::test_util::LevelTestState;

    const LEVELS: &[&str] = &[
        r#"
#####
#@ .#
#####
"#,
        r#"
######
#@$ .#
######
"#,
        r#"
########
# @$  .#
# $  $ #
# .# $ #
#..#   #
########
"#,
        r#"
       ####
########  ##
#          ###
# @$$ ##   ..#
# $$   ##  ..#
#         ####
###########
"#,
    ];

    #[test]
    fn corridor_moves_and_pushes() {
        let level = LevelTestState::new(LEVELS[0]);
        let lts = level.lts(false);

        let summary: Vec<(TransitionKind, Action)> =
            lts.transitions.iter().map(|t| (t.kind, t.action)).collect();
        assert_eq!(
            summary,
            vec![
                (TransitionKind::Move, Action::Step(Direction::Right)),
                (TransitionKind::Push, Action::Step(Direction::Right)),
                (TransitionKind::Move, Action::Step(Direction::Left)),
                (TransitionKind::Move, Action::Step(Direction::Right)),
                (TransitionKind::Move, Action::Step(Direction::Left)),
                (TransitionKind::Push, Action::Step(Direction::Left)),
                (TransitionKind::Finished, Action::Finish),
            ]
        );
    }

    #[test]
    fn move_and_push_constraints() {
        let level = LevelTestState::new(LEVELS[0]);
        let lts = level.lts(false);

        assert_eq!(
            lts.transitions[0].constraints,
            vec![Constraint::new(0, Man, Free), Constraint::new(1, Free, Man)]
        );
        assert_eq!(
            lts.transitions[1].constraints,
            vec![
                Constraint::new(0, Man, Free),
                Constraint::new(1, Block, Man),
                Constraint::new(2, Free, Block),
            ]
        );
    }

    #[test]
    fn finished_requires_a_block_on_every_goal() {
        let level = LevelTestState::new(LEVELS[2]);
        let lts = level.lts(false);
        let finished = lts.transitions.last().unwrap();

        assert_eq!(finished.kind, TransitionKind::Finished);
        assert_eq!(finished.action, Action::Finish);
        let goal_vars: Vec<usize> = level
            .grid
            .goal_positions()
            .iter()
            .map(|pos| *lts.variables.get_by_left(pos).unwrap())
            .collect();
        let constrained: Vec<usize> = finished.constraints.iter().map(|c| c.var).collect();
        assert_eq!(constrained, goal_vars);
        assert!(finished.constraints.iter().all(|c| c.from == Block && c.to == Block));
        assert_eq!(
            lts.transitions.iter().filter(|t| t.kind == TransitionKind::Finished).count(),
            1
        );
    }

    #[test]
    fn initial_valuation_collapses_goals_to_free() {
        let level = LevelTestState::new(LEVELS[1]);
        let lts = level.lts(false);
        assert_eq!(lts.initial, vec![Man, Block, Free, Free]);
    }

    #[test]
    fn goals_start_free_in_the_initial_valuation() {
        assert_eq!(StateValue::initial_for(CellKind::Goal), Free);
        assert_eq!(StateValue::initial_for(CellKind::Free), Free);
        assert_eq!(StateValue::initial_for(CellKind::Block), Block);
        assert_eq!(StateValue::initial_for(CellKind::Man), Man);
    }

    #[test]
    fn variables_are_numbered_row_major() {
        let level = LevelTestState::new(LEVELS[2]);
        let lts = level.lts(false);
        assert_eq!(lts.ordered_positions(), level.grid.used_positions());
        for (index, pos) in lts.ordered_positions().iter().enumerate() {
            assert_eq!(lts.position_of(index), Some(pos));
        }
    }

    #[test]
    fn optimizing_only_drops_pushes() {
        for &text in LEVELS {
            let level = LevelTestState::new(text);
            let plain = level.lts(false).stats();
            let optimized = level.lts(true).stats();

            assert_eq!(optimized.moves, plain.moves);
            assert!(optimized.pushes <= plain.pushes);
            assert_eq!(optimized.pushes + optimized.pruned_pushes, plain.pushes);
            assert_eq!(plain.pruned_pushes, 0);
        }
    }

    #[test]
    fn push_into_corner_is_pruned() {
        let level = LevelTestState::new(LEVELS[1]);
        let plain = level.lts(false);
        let optimized = level.lts(true);

        let push_dirs = |lts: &Lts| -> Vec<Action> {
            lts.transitions
                .iter()
                .filter(|t| t.kind == TransitionKind::Push)
                .map(|t| t.action)
                .collect()
        };
        // the man's start cell is a corner, so pushing left back onto it is dead
        assert_eq!(
            push_dirs(&plain),
            vec![
                Action::Step(Direction::Right),
                Action::Step(Direction::Right),
                Action::Step(Direction::Left),
                Action::Step(Direction::Left),
            ]
        );
        assert_eq!(
            push_dirs(&optimized),
            vec![
                Action::Step(Direction::Right),
                Action::Step(Direction::Right),
                Action::Step(Direction::Left),
            ]
        );
        assert_eq!(optimized.pruned_pushes, 1);
    }

    #[test]
    fn generator_matches_the_assembled_system() {
        let level = LevelTestState::new(LEVELS[2]);
        let options = EtfOptions { optimize: true };
        let variables = number_variables(&level.grid);
        let transitions = generate_transitions(&level.grid, &variables, &options);

        assert_eq!(transitions, level.lts(true).transitions);
        assert_eq!(transitions.last(), Some(&finished_transition(&level.grid, &variables)));
    }

    #[test]
    fn transitions_only_touch_used_cells() {
        let level = LevelTestState::new(LEVELS[3]);
        let lts = level.lts(true);
        for transition in &lts.transitions {
            for constraint in &transition.constraints {
                let pos = lts.position_of(constraint.var).unwrap();
                assert!(level.grid[pos].in_use);
            }
        }
    }
}
