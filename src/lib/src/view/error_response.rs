use serde::{Deserialize, Serialize};

// Body the remote sends alongside non 2xx statuses
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorDetail {
    pub code: u16,
    pub message: String,
}
