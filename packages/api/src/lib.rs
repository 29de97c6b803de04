//! # API crate — typed access to the FitTrack backend
//!
//! Every page in the `web` package reaches the backend through this crate. It
//! owns the data shapes exchanged with the backend, the request utility all
//! calls go through, the API wrappers themselves, and the development proxy.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`models`] | — | Records exchanged with the backend (`UserInfo`, plans, login/registration) and the `ApiResponse` envelope |
//! | [`request`] | — | `Transport` trait, `reqwest` transport, recording transport for tests, `ApiClient` |
//! | [`user`] | — | User API wrappers (`get_user_info`, `update_user_info`, `check_*`) |
//! | [`config`] | — | Base URL and token from the environment or page origin |
//! | [`proxy`] | `server` for the handler | `/api/*` prefix rules and the axum forwarding handler |
//! | [`error`] | — | `ApiError` |

pub mod config;
pub mod error;
pub mod models;
pub mod proxy;
pub mod request;
pub mod user;

pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{
    ApiResponse, DietPlan, FitnessGoal, FitnessPlan, LoginRequest, LoginResult, RegisterRequest,
    UserInfo, UserUpdate,
};
pub use request::{ApiClient, ApiRequest, HttpTransport, Method, RecordingTransport, Transport};
