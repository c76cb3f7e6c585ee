mod etf_export;
mod json_export;
mod model_helpers;
mod models;
mod transitions;

pub use etf_export::{render_etf, render_transition_vector};
pub use json_export::get_json_data;
pub use model_helpers::variable_name;
pub use models::{Action, Constraint, EtfOptions, Lts, LtsStats, StateSort, StateValue, Transition, TransitionKind};
pub use transitions::{finished_transition, generate_transitions, number_variables};
