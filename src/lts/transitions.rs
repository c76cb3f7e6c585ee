use bimap::BiMap;
use log::{debug, info};
use crate::core::{is_dead, Direction, Grid, Vec2};
use crate::lts::{Action, Constraint, EtfOptions, Lts, StateSort, StateValue, Transition, TransitionKind};
use crate::lts::StateValue::{Block, Free, Man};

/// Numbers the used cells row-major. Expects `mark_used` to have run.
pub fn number_variables(grid: &Grid) -> BiMap<Vec2, usize> {
    grid.used_positions()
        .into_iter()
        .enumerate()
        .map(|(index, pos)| (pos, index))
        .collect()
}

struct Generated {
    transitions: Vec<Transition>,
    pruned_pushes: usize,
}

fn generate(grid: &Grid, variables: &BiMap<Vec2, usize>, options: &EtfOptions) -> Generated {
    let var = |pos: &Vec2| variables.get_by_left(pos).copied();
    let mut transitions = Vec::new();
    let mut pruned_pushes = 0;

    for man in grid.used_positions() {
        let Some(man_var) = var(&man) else {
            continue;
        };

        for dir in Direction::ALL {
            let Some(empty_var) = var(&man.step(dir)) else {
                continue;
            };
            transitions.push(Transition {
                kind: TransitionKind::Move,
                action: Action::Step(dir),
                constraints: vec![
                    Constraint::new(man_var, Man, Free),
                    Constraint::new(empty_var, Free, Man),
                ],
            });
        }

        for dir in Direction::ALL {
            let block = man.step(dir);
            let destination = block.step(dir);
            let (Some(block_var), Some(destination_var)) = (var(&block), var(&destination)) else {
                continue;
            };
            if options.optimize && is_dead(grid, destination) {
                debug!("pruned push {:?} from {:?} onto dead position {:?}", dir, man, destination);
                pruned_pushes += 1;
                continue;
            }
            transitions.push(Transition {
                kind: TransitionKind::Push,
                action: Action::Step(dir),
                constraints: vec![
                    Constraint::new(man_var, Man, Free),
                    Constraint::new(block_var, Block, Man),
                    Constraint::new(destination_var, Free, Block),
                ],
            });
        }
    }

    transitions.push(finished_transition(grid, variables));

    Generated { transitions, pruned_pushes }
}

/// Enabled exactly when every goal holds a block. Changes nothing, so it can recur.
pub fn finished_transition(grid: &Grid, variables: &BiMap<Vec2, usize>) -> Transition {
    let mut constraints: Vec<Constraint> = grid
        .goal_positions()
        .iter()
        .filter_map(|pos| variables.get_by_left(pos))
        .map(|&var| Constraint::new(var, Block, Block))
        .collect();
    constraints.sort_unstable_by_key(|c| c.var);

    Transition {
        kind: TransitionKind::Finished,
        action: Action::Finish,
        constraints,
    }
}

/// Moves and pushes for every used cell in row-major order, followed by the finished transition.
pub fn generate_transitions(
    grid: &Grid,
    variables: &BiMap<Vec2, usize>,
    options: &EtfOptions,
) -> Vec<Transition> {
    generate(grid, variables, options).transitions
}

impl Lts {
    /// Builds the transition system of a grid whose used set is already at its fixed point.
    pub fn from_grid(grid: &Grid, options: &EtfOptions) -> Lts {
        let variables = number_variables(grid);
        let initial = grid
            .used_positions()
            .iter()
            .map(|pos| StateValue::initial_for(grid[pos].kind))
            .collect();
        let Generated { transitions, pruned_pushes } = generate(grid, &variables, options);

        let lts = Lts {
            variables,
            initial,
            transitions,
            state_sort: StateSort { legacy: !options.optimize },
            pruned_pushes,
        };

        let stats = lts.stats();
        info!(
            "generated {} moves and {} pushes over {} variables ({} pushes pruned)",
            stats.moves, stats.pushes, stats.variables, stats.pruned_pushes
        );
        lts
    }
}
