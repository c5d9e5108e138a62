use serde::{Deserialize, Serialize};

use crate::utils::error::DataShapeError;

/// Body of one search call against the Quake API.
///
/// The remote contract expects `size` as the string form of the numeric
/// page size, while `start` stays numeric.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub start: u32,
    pub size: String,
}

impl SearchRequest {
    /// Build a request for one page of results
    pub fn new(query: impl Into<String>, page_size: u32, start_page: u32) -> Self {
        Self {
            query: query.into(),
            start: start_page,
            size: page_size.to_string(),
        }
    }
}

/// Decoded search response. The pagination block and the data array are
/// kept best-effort optional; the accessors surface their absence as
/// structural errors instead of failing the decode.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub meta: Option<ResponseMeta>,
    #[serde(default)]
    pub data: Option<Vec<ResultItem>>,
}

impl SearchResponse {
    /// Pagination block of the response
    pub fn pagination(&self) -> Result<&Pagination, DataShapeError> {
        self.meta
            .as_ref()
            .and_then(|meta| meta.pagination.as_ref())
            .ok_or(DataShapeError::MissingPagination)
    }

    /// Result items of the response, in server order
    pub fn items(&self) -> Result<&[ResultItem], DataShapeError> {
        self.data.as_deref().ok_or(DataShapeError::MissingData)
    }
}

/// `meta` block of a search response
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMeta {
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Pagination counters reported by the server
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    #[serde(default)]
    pub page_index: u64,
    #[serde(default)]
    pub page_size: u64,
    #[serde(default)]
    pub total: u64,
}

/// One asset in the `data` array. Only the fields the table and the
/// export consume are decoded; everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultItem {
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub port: u16,
    #[serde(default)]
    pub service: Option<ServiceInfo>,
}

impl ResultItem {
    /// Host of the HTTP service, if the item exposes one
    pub fn http_host(&self) -> Option<&str> {
        self.service
            .as_ref()?
            .http
            .as_ref()
            .map(|http| http.host.as_str())
    }
}

/// `service` sub-structure of a result item
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceInfo {
    #[serde(default)]
    pub http: Option<HttpService>,
}

/// `service.http` sub-structure of a result item
#[derive(Debug, Clone, Deserialize)]
pub struct HttpService {
    #[serde(default)]
    pub host: String,
}

/// Flattened, 1-indexed projection of a result item for spreadsheet export
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ExportRecord {
    pub index: usize,
    pub host: String,
    pub ip: String,
    pub port: u16,
}
