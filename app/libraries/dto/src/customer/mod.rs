pub mod input;
pub mod list;

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct PostCustomerOutput {
    pub id: i64,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SuccessOutput {
    pub success: bool,
}

impl SuccessOutput {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
