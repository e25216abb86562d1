use serde::{Deserialize, Serialize};

/// Body of a successful `POST /api/login`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LoginSuccessResponse {
    /// Session token issued by the server
    pub token: String,
    /// Username the server authenticated
    pub username: String,
}
