// Questionnaire: nine single-field steps, then the results screen.
// State is per session and in memory only.

pub mod handlers;
pub mod profile;
pub mod session;
pub mod state;
pub mod steps;
pub mod tech;
