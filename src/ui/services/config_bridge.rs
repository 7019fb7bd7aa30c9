use crate::config::{EvolutionConfig, DEFAULT_TARGET};
use crate::ui::state::AppState;

pub struct ConfigBridge;

impl ConfigBridge {
    /// Convert the input row to an EvolutionConfig.
    ///
    /// A blank phrase is replaced by the default phrase (also written back
    /// into the field). The mutation count falls back to 1 when it does not
    /// parse and is never below 1.
    pub fn to_evolution_config(state: &mut AppState) -> EvolutionConfig {
        if state.target_input.is_empty() {
            state.target_input = DEFAULT_TARGET.to_string();
        }

        let mutations = Self::parse_mutations(&state.mutations_input);

        EvolutionConfig {
            target: state.target_input.clone(),
            mutations,
            ..state.evolution.clone()
        }
    }

    pub fn parse_mutations(input: &str) -> usize {
        let parsed = input.trim().parse::<i64>().unwrap_or(1);
        usize::try_from(parsed.max(1)).unwrap_or(1)
    }
}
