//! `/user/*` operations.

use crate::client::Client;
use crate::error::Error;
use crate::http::Transport;
use crate::registry::Operation;
use crate::types::ApiResult;

impl<T: Transport> Client<T> {
    /// The user's secret RSS key, returned in `result`.
    pub fn user_secret(&self) -> Result<ApiResult, Error> {
        let result: ApiResult = self.call(Operation::UserSecret, &self.query())?;
        let has_secret = result
            .result
            .as_deref()
            .is_some_and(|secret| !secret.trim().is_empty());
        if !has_secret {
            return Err(Error::UnexpectedResponse {
                result_code: result.result_code.unwrap_or_default(),
            });
        }
        Ok(result)
    }
}
