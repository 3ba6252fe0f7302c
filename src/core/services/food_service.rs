use super::NDB_URI_PART;
use crate::AppError;
use crate::api::client::{DataGovClient, UriAction};
use crate::api::models::{FoodReportResponse, ListResponse, SearchResponse};
use crate::storage::config::Config;

/// Report flavors accepted by the `reports` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportType {
    Basic,
    Full,
    Stats,
}

impl ReportType {
    pub fn as_param(self) -> &'static str {
        match self {
            ReportType::Basic => "b",
            ReportType::Full => "f",
            ReportType::Stats => "s",
        }
    }
}

/// Food service for the NDB list, search and report endpoints
pub struct FoodService {
    client: DataGovClient,
}

impl FoodService {
    /// Create new FoodService instance around an existing client
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

    /// List foods in alphabetical order.
    pub async fn list_foods(&self, max: u32, offset: u32) -> Result<ListResponse, AppError> {
        let max = max.to_string();
        let offset = offset.to_string();
        let params = [
            ("lt", "f"),
            ("max", max.as_str()),
            ("offset", offset.as_str()),
        ];

        Ok(self.client.run_request(UriAction::List, &params).await?)
    }

    /// Search foods matching a query string.
    pub async fn search_foods(
        &self,
        query: &str,
        max: u32,
        offset: u32,
    ) -> Result<SearchResponse, AppError> {
        let max = max.to_string();
        let offset = offset.to_string();
        let params = [
            ("q", query),
            ("max", max.as_str()),
            ("offset", offset.as_str()),
        ];

        Ok(self.client.run_request(UriAction::Search, &params).await?)
    }

    /// Fetch a nutrient report for a single food.
    pub async fn food_report(
        &self,
        ndbno: &str,
        report_type: ReportType,
    ) -> Result<FoodReportResponse, AppError> {
        let params = [("ndbno", ndbno), ("type", report_type.as_param())];

        Ok(self.client.run_request(UriAction::Report, &params).await?)
    }
}
