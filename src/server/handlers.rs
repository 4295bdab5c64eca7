//! MCP tool handlers for the Nefesh directory server.
//!
//! This module implements all the MCP tools using the rmcp SDK's
//! tool_router pattern.

use crate::error::{SearchError, StoreError};
use crate::geo::Gazetteer;
use crate::models::TherapistDraft;
use crate::repositories::TherapistRepository;
use crate::search::{ProximitySearch, SearchResults};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// The Nefesh MCP server that exposes tools for the therapist directory.
#[derive(Clone)]
pub struct NefeshMcpServer {
    therapist_service: Arc<dyn crate::services::TherapistService>,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for NefeshMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "nefesh-mcp-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("MCP server for the Nefesh therapist directory - manage therapist records and find therapists within a travel radius of a city using fuzzy city matching.".into()),
        }
    }
}

// Helper structs for tool parameters
#[derive(Debug, Deserialize, JsonSchema)]
struct TherapistIdParams {
    id: u64,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct CreateTherapistParams {
    name: String,
    city: String,
    #[serde(default)]
    region: String,
    #[serde(default)]
    profession: String,
    #[serde(default)]
    notes: String,
    #[serde(default)]
    languages: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    gender: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct UpdateTherapistParams {
    id: u64,
    name: String,
    city: String,
    #[serde(default)]
    region: String,
    #[serde(default)]
    profession: String,
    #[serde(default)]
    notes: String,
    #[serde(default)]
    languages: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    gender: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SearchTherapistsParams {
    /// City name to search near; "_" means no geo filter
    city: String,
    /// Travel radius in kilometers
    max_distance_km: u32,
}

impl CreateTherapistParams {
    fn into_draft(self) -> TherapistDraft {
        TherapistDraft {
            region: self.region,
            name: self.name,
            city: self.city,
            profession: self.profession,
            notes: self.notes,
            languages: self.languages,
            phone: self.phone,
            address: self.address,
            gender: self.gender,
        }
    }
}

impl UpdateTherapistParams {
    fn into_draft(self) -> TherapistDraft {
        TherapistDraft {
            region: self.region,
            name: self.name,
            city: self.city,
            profession: self.profession,
            notes: self.notes,
            languages: self.languages,
            phone: self.phone,
            address: self.address,
            gender: self.gender,
        }
    }
}

// Helper functions to convert errors to MCP errors.
// Not-found conditions surface as invalid-params so clients can tell a bad
// request from a broken server.
fn store_error_to_mcp(e: StoreError) -> McpError {
    let code = match &e {
        StoreError::NotFound(_) | StoreError::InvalidRecord(_) => ErrorCode::INVALID_PARAMS,
        _ => ErrorCode::INTERNAL_ERROR,
    };
    McpError {
        code,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn search_error_to_mcp(e: SearchError) -> McpError {
    match e {
        SearchError::CityNotFound(_) | SearchError::NoResults => McpError {
            code: ErrorCode::INVALID_PARAMS,
            message: Cow::from(e.to_string()),
            data: None,
        },
        SearchError::Store(inner) => store_error_to_mcp(inner),
    }
}

fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

// Tool router implementation
#[tool_router]
impl NefeshMcpServer {
    /// Create a new Nefesh MCP server.
    pub fn new(
        repository: Arc<dyn TherapistRepository>,
        gazetteer: Arc<Gazetteer>,
        resolve_confidence_floor: u8,
        match_accept_threshold: u8,
    ) -> Self {
        let search = ProximitySearch::new(
            gazetteer,
            resolve_confidence_floor,
            match_accept_threshold,
        );

        let therapist_service = Arc::new(crate::services::TherapistServiceImpl::new(
            repository, search,
        )) as Arc<dyn crate::services::TherapistService>;

        Self {
            therapist_service,
            tool_router: Self::tool_router(),
        }
    }

    /// List every therapist in the directory.
    #[tool(description = "List every therapist record in the directory")]
    async fn list_therapists(&self) -> Result<CallToolResult, McpError> {
        let therapists = self
            .therapist_service
            .list_therapists()
            .await
            .map_err(store_error_to_mcp)?;

        let response = serde_json::json!({
            "result_count": therapists.len(),
            "therapists": therapists,
        });

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&response).map_err(to_mcp_error)?,
        )]))
    }

    /// Retrieve a single therapist record by id.
    #[tool(description = "Retrieve a single therapist record by id")]
    async fn get_therapist(
        &self,
        params: Parameters<TherapistIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let therapist = self
            .therapist_service
            .get_therapist(params.id)
            .await
            .map_err(store_error_to_mcp)?;

        let json_response = serde_json::to_string_pretty(&therapist).map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }

    /// Create a new therapist record.
    #[tool(
        description = "Create a new therapist record. The directory assigns the id; name and city are required."
    )]
    async fn create_therapist(
        &self,
        params: Parameters<CreateTherapistParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!(name = %params.name, city = %params.city, "MCP Handler: create_therapist called");

        let therapist = self
            .therapist_service
            .create_therapist(params.into_draft())
            .await
            .map_err(|e| {
                tracing::error!("Failed to create therapist: {:?}", e);
                store_error_to_mcp(e)
            })?;

        tracing::info!("Therapist created successfully: id={}", therapist.id);
        let json_response = serde_json::to_string_pretty(&therapist).map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }

    /// Replace an existing therapist record.
    #[tool(
        description = "Replace an existing therapist record by id. All fields are overwritten with the provided values."
    )]
    async fn update_therapist(
        &self,
        params: Parameters<UpdateTherapistParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let id = params.id;

        let therapist = self
            .therapist_service
            .update_therapist(id, params.into_draft())
            .await
            .map_err(|e| {
                tracing::error!("Failed to update therapist {}: {:?}", id, e);
                store_error_to_mcp(e)
            })?;

        let json_response = serde_json::to_string_pretty(&therapist).map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }

    /// Delete a therapist record.
    #[tool(description = "Delete a therapist record by id")]
    async fn delete_therapist(
        &self,
        params: Parameters<TherapistIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        self.therapist_service
            .delete_therapist(params.id)
            .await
            .map_err(store_error_to_mcp)?;

        let response = serde_json::json!({
            "status": "success",
            "message": format!("Therapist {} deleted successfully", params.id),
        });

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&response).map_err(to_mcp_error)?,
        )]))
    }

    /// Find therapists within a travel radius of a city.
    #[tool(
        description = "Find therapists within a travel radius of a city. City names are fuzzy-matched, so misspellings and word-order changes still resolve. Pass city \"_\" to list everyone without a geo filter. Results are sorted by ascending distance in kilometers."
    )]
    async fn search_therapists(
        &self,
        params: Parameters<SearchTherapistsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!(
            city = %params.city,
            max_distance_km = params.max_distance_km,
            "MCP Handler: search_therapists called"
        );

        let results = self
            .therapist_service
            .search_by_city(&params.city, params.max_distance_km)
            .await
            .map_err(search_error_to_mcp)?;

        let response = match results {
            SearchResults::All(therapists) => serde_json::json!({
                "city_query": params.city,
                "result_count": therapists.len(),
                "therapists": therapists,
            }),
            SearchResults::Near { origin_city, matches } => serde_json::json!({
                "city_query": params.city,
                "origin_city": origin_city,
                "max_distance_km": params.max_distance_km,
                "result_count": matches.len(),
                "matches": matches,
            }),
        };

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&response).map_err(to_mcp_error)?,
        )]))
    }
}
