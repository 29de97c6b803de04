//! Data shapes exchanged with the FitTrack backend.

mod auth;
mod plan;
mod response;
mod user;

pub use auth::{LoginRequest, LoginResult, RegisterRequest};
pub use plan::{DietPlan, FitnessPlan};
pub use response::ApiResponse;
pub use user::{FitnessGoal, UserInfo, UserUpdate};
