//! User API wrappers.
//!
//! Each method maps one operation onto one backend call. Paths are built by
//! plain interpolation; failure handling belongs to the [`Transport`] and the
//! caller.

use crate::error::ApiError;
use crate::models::{ApiResponse, UserInfo, UserUpdate};
use crate::request::{ApiClient, ApiRequest, Transport};

impl<T: Transport> ApiClient<T> {
    /// `GET /user/{id}`
    pub async fn get_user_info(&self, id: i64) -> Result<ApiResponse<UserInfo>, ApiError> {
        self.request(ApiRequest::get(format!("/user/{id}"))).await
    }

    /// `PUT /user/{id}` with the partial profile as body.
    pub async fn update_user_info(
        &self,
        id: i64,
        update: &UserUpdate,
    ) -> Result<ApiResponse<UserInfo>, ApiError> {
        self.request(ApiRequest::put(format!("/user/{id}"), update)?)
            .await
    }

    /// `GET /user/check/username/{username}`; `data` is true when taken.
    pub async fn check_username(&self, username: &str) -> Result<ApiResponse<bool>, ApiError> {
        self.request(ApiRequest::get(format!("/user/check/username/{username}")))
            .await
    }

    /// `GET /user/check/phone/{phone}`; `data` is true when taken.
    pub async fn check_phone(&self, phone: &str) -> Result<ApiResponse<bool>, ApiError> {
        self.request(ApiRequest::get(format!("/user/check/phone/{phone}")))
            .await
    }

    /// `GET /user/check/email/{email}`; `data` is true when taken.
    pub async fn check_email(&self, email: &str) -> Result<ApiResponse<bool>, ApiError> {
        self.request(ApiRequest::get(format!("/user/check/email/{email}")))
            .await
    }
}
