//! Teacher resource facade.

use aula_models::{DocenteCreateDto, DocenteDto, DocenteUpdateDto};
use tracing::instrument;

use crate::client::{AdminClient, RequestOptions, with_query};
use crate::error::ApiError;

const TEACHERS_PATH: &str = "/admin/teachers";

/// Operations on `/admin/teachers`.
#[derive(Debug, Clone, Copy)]
pub struct Teachers<'a> {
    client: &'a AdminClient,
}

impl<'a> Teachers<'a> {
    pub(crate) fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, query: &str) -> Result<Vec<DocenteDto>, ApiError> {
        self.client
            .request(&with_query(TEACHERS_PATH, query), RequestOptions::get())
            .await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<DocenteDto, ApiError> {
        self.client
            .request(&format!("{}/{}", TEACHERS_PATH, id), RequestOptions::get())
            .await
    }

    #[instrument(skip(self, payload))]
    pub async fn create(&self, payload: &DocenteCreateDto) -> Result<DocenteDto, ApiError> {
        self.client
            .request(TEACHERS_PATH, RequestOptions::post().json(payload)?)
            .await
    }

    #[instrument(skip(self, payload))]
    pub async fn update(&self, id: &str, payload: &DocenteUpdateDto) -> Result<DocenteDto, ApiError> {
        self.client
            .request(
                &format!("{}/{}", TEACHERS_PATH, id),
                RequestOptions::put().json(payload)?,
            )
            .await
    }
}
