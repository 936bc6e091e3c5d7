use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("State not found: {type_name}, context: {context}")]
    StateNotFound {
        type_name: &'static str,
        context: String,
    },
    #[error("Compute not found: {type_name}, context: {context}")]
    ComputeNotFound {
        type_name: &'static str,
        context: String,
    },
    #[error("State context is gone, update for {type_name} dropped")]
    Disconnected { type_name: &'static str },
}

impl StateError {
    pub fn state_not_found(type_name: &'static str, context: impl Into<String>) -> Self {
        Self::StateNotFound {
            type_name,
            context: context.into(),
        }
    }

    pub fn compute_not_found(type_name: &'static str, context: impl Into<String>) -> Self {
        Self::ComputeNotFound {
            type_name,
            context: context.into(),
        }
    }
}
