//! Student resource facade.

use aula_models::{EstudianteCreateDto, EstudianteDto, EstudianteUpdateDto, RudeCode};
use tracing::instrument;

use crate::client::{AdminClient, RequestOptions, with_query};
use crate::error::ApiError;

const STUDENTS_PATH: &str = "/admin/students";

/// Operations on `/admin/students`.
#[derive(Debug, Clone, Copy)]
pub struct Students<'a> {
    client: &'a AdminClient,
}

impl<'a> Students<'a> {
    pub(crate) fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }

    /// Lists students, forwarding `query` verbatim as the query string.
    #[instrument(skip(self))]
    pub async fn list(&self, query: &str) -> Result<Vec<EstudianteDto>, ApiError> {
        self.client
            .request(&with_query(STUDENTS_PATH, query), RequestOptions::get())
            .await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<EstudianteDto, ApiError> {
        self.client
            .request(&format!("{}/{}", STUDENTS_PATH, id), RequestOptions::get())
            .await
    }

    /// Creates a student. The backend assigns `id` and `codigo_rude`.
    #[instrument(skip(self, payload))]
    pub async fn create(&self, payload: &EstudianteCreateDto) -> Result<EstudianteDto, ApiError> {
        self.client
            .request(STUDENTS_PATH, RequestOptions::post().json(payload)?)
            .await
    }

    #[instrument(skip(self, payload))]
    pub async fn update(
        &self,
        id: &str,
        payload: &EstudianteUpdateDto,
    ) -> Result<EstudianteDto, ApiError> {
        self.client
            .request(
                &format!("{}/{}", STUDENTS_PATH, id),
                RequestOptions::put().json(payload)?,
            )
            .await
    }

    /// Asks the backend to issue a new registration code for a student.
    #[instrument(skip(self))]
    pub async fn regenerate_code(&self, id: &str) -> Result<RudeCode, ApiError> {
        self.client
            .request(
                &format!("{}/{}/rude", STUDENTS_PATH, id),
                RequestOptions::post(),
            )
            .await
    }
}
