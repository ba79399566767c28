use serde::Serialize;

use super::entities::Tutor;

#[derive(Debug, Serialize)]
pub struct TutorListResponse {
    pub items: Vec<Tutor>,
}
