use crate::core::{ACTION_TYPE, ACTION_VAR, STATE_TYPE, WILDCARD};
use crate::lts::{variable_name, Action, Lts, Transition};

fn render_state(lts: &Lts, out: &mut String) {
    let declarations: Vec<String> = lts
        .ordered_positions()
        .iter()
        .map(|pos| format!("{}:{}", variable_name(pos), STATE_TYPE))
        .collect();

    out.push_str("begin state\n");
    out.push_str(&declarations.join(" "));
    out.push_str("\nend state\n");
}

fn render_edge(out: &mut String) {
    out.push_str("begin edge\n");
    out.push_str(&format!("{}:{}\n", ACTION_VAR, ACTION_TYPE));
    out.push_str("end edge\n");
}

fn render_init(lts: &Lts, out: &mut String) {
    let values: Vec<String> = lts
        .initial
        .iter()
        .map(|&value| lts.state_sort.index_of(value).to_string())
        .collect();

    out.push_str("begin init\n");
    out.push_str(&values.join(" "));
    out.push_str("\nend init\n");
}

/// One token per variable, then the action index.
pub fn render_transition_vector(lts: &Lts, transition: &Transition) -> String {
    let mut tokens = vec![WILDCARD.to_string(); lts.variable_count()];
    for constraint in &transition.constraints {
        tokens[constraint.var] = format!(
            "{}/{}",
            lts.state_sort.index_of(constraint.from),
            lts.state_sort.index_of(constraint.to)
        );
    }
    tokens.push(transition.action.index().to_string());
    tokens.join(" ")
}

fn render_trans(lts: &Lts, out: &mut String) {
    for transition in &lts.transitions {
        out.push_str("begin trans\n");
        out.push_str(&render_transition_vector(lts, transition));
        out.push_str("\nend trans\n");
    }
}

fn render_sort(name: &str, labels: &[&str], out: &mut String) {
    out.push_str(&format!("begin sort {}\n", name));
    for label in labels {
        out.push_str(&format!("\"{}\"\n", label));
    }
    out.push_str("end sort\n");
}

/// The whole ETF document. Built in memory so nothing is written if an earlier step fails.
pub fn render_etf(lts: &Lts) -> String {
    let mut out = String::new();
    render_state(lts, &mut out);
    render_edge(&mut out);
    render_init(lts, &mut out);
    render_trans(lts, &mut out);
    render_sort(STATE_TYPE, &lts.state_sort.labels(), &mut out);
    let action_labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();
    render_sort(ACTION_TYPE, &action_labels, &mut out);
    out
}
