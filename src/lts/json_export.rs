use serde::Serialize;
use crate::core::EtfError;
use crate::lts::{variable_name, Action, Lts, StateValue};

#[derive(Serialize, Debug)]
struct JsonData {
    variables: Vec<JsonVariable>,
    transitions: Vec<JsonTransition>,
    state_sort: Vec<&'static str>,
    action_sort: Vec<&'static str>,
}

#[derive(Serialize, Debug)]
struct JsonVariable {
    name: String,
    row: i32,
    col: i32,
    initial: StateValue,
}

#[derive(Serialize, Debug)]
struct JsonTransition {
    action: &'static str,
    constraints: Vec<JsonConstraint>,
}

#[derive(Serialize, Debug)]
struct JsonConstraint {
    variable: String,
    from: StateValue,
    to: StateValue,
}

pub fn get_json_data(lts: &Lts) -> Result<String, EtfError> {
    let variables = lts
        .ordered_positions()
        .iter()
        .zip(lts.initial.iter())
        .map(|(pos, &initial)| JsonVariable {
            name: variable_name(pos),
            row: pos.i,
            col: pos.j,
            initial,
        })
        .collect();

    let transitions = lts
        .transitions
        .iter()
        .map(|transition| JsonTransition {
            action: transition.action.label(),
            constraints: transition
                .constraints
                .iter()
                .filter_map(|c| {
                    lts.position_of(c.var).map(|pos| JsonConstraint {
                        variable: variable_name(pos),
                        from: c.from,
                        to: c.to,
                    })
                })
                .collect(),
        })
        .collect();

    let json_data = JsonData {
        variables,
        transitions,
        state_sort: lts.state_sort.labels(),
        action_sort: Action::ALL.iter().map(|a| a.label()).collect(),
    };
    Ok(serde_json::to_string_pretty(&json_data)?)
}
