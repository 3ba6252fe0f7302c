use super::NDB_URI_PART;
use crate::AppError;
use crate::api::client::{DataGovClient, UriAction};
use crate::api::models::{ListResponse, NutrientReportResponse};
use crate::storage::config::Config;

/// Nutrient service for the NDB nutrient list and report endpoints
pub struct NutrientService {
    client: DataGovClient,
}

impl NutrientService {
    /// Create new NutrientService instance around an existing client
    pub fn new(client: DataGovClient) -> Self {
        Self { client }
    }

    /// Build a service for the public NDB endpoint.
    pub fn with_key(key: &str) -> crate::Result<Self> {
        Ok(Self::new(DataGovClient::new(NDB_URI_PART, key)?))
    }

    /// Build a service from a loaded configuration.
    pub fn from_config(config: &Config) -> crate::Result<Self> {
        Ok(Self::new(config.build_client(NDB_URI_PART)?))
    }

    /// List known nutrients in alphabetical order.
    pub async fn list_nutrients(&self, max: u32, offset: u32) -> Result<ListResponse, AppError> {
        let max = max.to_string();
        let offset = offset.to_string();
        let params = [
            ("lt", "n"),
            ("max", max.as_str()),
            ("offset", offset.as_str()),
        ];

        Ok(self.client.run_request(UriAction::List, &params).await?)
    }

    /// Fetch per-food values for one or more nutrients. The endpoint
    /// accepts the `nutrients` parameter repeated once per nutrient ID.
    pub async fn nutrient_report(
        &self,
        nutrient_ids: &[&str],
        max: u32,
        offset: u32,
    ) -> Result<NutrientReportResponse, AppError> {
        let max = max.to_string();
        let offset = offset.to_string();
        let mut params: Vec<(&str, &str)> =
            vec![("max", max.as_str()), ("offset", offset.as_str())];
        for id in nutrient_ids {
            params.push(("nutrients", id));
        }

        Ok(self
            .client
            .run_request(UriAction::Nutrients, &params)
            .await?)
    }
}
