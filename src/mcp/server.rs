//! MCP server implementation using rmcp.
//!
//! Exposes the wtt operations as MCP tools over stdio transport.
//! Each tool calls the same core logic as the CLI commands.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo, Tool};
use rmcp::{tool, tool_handler, tool_router, ErrorData, ServerHandler, ServiceExt};
use serde::Serialize;

use crate::catalog::Catalog;
use crate::cli::output::{format_error, format_json};
use crate::config::EstimateSettings;
use crate::error::WttError;
use crate::operations::{self, EstimateRequest};

use super::tools::{CompareParams, EquivalencesParams, EstimateParams, ModelsParams, TokensParams};

/// The wtt MCP server.
///
/// Holds the catalog and estimate defaults loaded at startup; every tool
/// call reads them immutably.
#[derive(Clone)]
pub struct WttServer {
    catalog: Arc<Catalog>,
    defaults: Arc<EstimateSettings>,
    tool_router: ToolRouter<WttServer>,
}

// ── Helper functions ────────────────────────────────────────────

impl WttServer {
    fn respond<T: Serialize>(
        result: crate::error::Result<T>,
    ) -> Result<CallToolResult, ErrorData> {
        match result {
            Ok(value) => Ok(CallToolResult::success(vec![Content::text(format_json(&value))])),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format_error(&e))])),
        }
    }

    /// Tool definitions advertised to clients.
    #[must_use]
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    /// Same defaulting as `wtt estimate`.
    fn request<'a>(&'a self, params: &'a EstimateParams) -> EstimateRequest<'a> {
        EstimateRequest {
            query: &params.query,
            model_id: params.model.as_deref(),
            output_tokens: params.output_tokens,
        }
        .or_defaults(&self.defaults)
    }
}

// ── Tool implementations ────────────────────────────────────────

#[tool_router]
impl WttServer {
    #[must_use]
    pub fn new(catalog: Catalog, defaults: EstimateSettings) -> Self {
        Self {
            catalog: Arc::new(catalog),
            defaults: Arc::new(defaults),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Estimate input/output tokens, energy (kWh and Wh), CO2 (grams) and real-world equivalents for an LLM query. Optionally pass a model id and an expected output token count."
    )]
    async fn estimate(
        &self,
        Parameters(params): Parameters<EstimateParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Self::respond(operations::estimate(&self.catalog, &self.request(&params)))
    }

    #[tool(
        description = "Estimate the token count of a text using the 4 characters per token heuristic. Whitespace-only text counts as zero tokens."
    )]
    async fn tokens(
        &self,
        Parameters(params): Parameters<TokensParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Self::respond(Ok(operations::count_tokens(&params.text)))
    }

    #[tool(
        description = "Show what an energy amount in watt-hours could power: LED bulb, laptop, microwave, smartphone charges, TV."
    )]
    async fn compare(
        &self,
        Parameters(params): Parameters<CompareParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Self::respond(operations::compare_energy(&self.catalog, params.energy_wh))
    }

    #[tool(
        description = "List the model catalog grouped by provider, with parameter counts in billions (active parameters for MoE models)."
    )]
    async fn models(
        &self,
        Parameters(params): Parameters<ModelsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Self::respond(Ok(operations::list_models(
            &self.catalog,
            params.provider.as_deref(),
        )))
    }

    #[tool(
        description = "List the equivalence catalog (appliance wattages, display units). Disabled entries are hidden unless all=true."
    )]
    async fn equivalences(
        &self,
        Parameters(params): Parameters<EquivalencesParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Self::respond(Ok(operations::list_equivalences(
            &self.catalog,
            params.all.unwrap_or(false),
        )))
    }
}

// ── ServerHandler implementation ────────────────────────────────

#[tool_handler]
impl ServerHandler for WttServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "wtt: WhatTheTokens energy estimator for LLM queries. \
                 Use 'estimate' for a full report (tokens, energy, CO2 grams, equivalences). \
                 Use 'models' to discover model ids, 'tokens' for a token count only, \
                 and 'compare' to translate any Wh amount into appliance runtimes. \
                 All figures are rough educational approximations."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// ── Server startup ──────────────────────────────────────────────

/// Start the MCP server on stdio transport.
///
/// Tracing must already write to stderr; stdout is the MCP transport.
pub async fn start_mcp_server(
    catalog: Catalog,
    defaults: EstimateSettings,
) -> crate::error::Result<()> {
    tracing::info!("Starting wtt MCP server");

    let server = WttServer::new(catalog, defaults);

    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| WttError::Other(format!("MCP server error: {e}")))?;

    tracing::info!("MCP server running on stdio");

    service
        .waiting()
        .await
        .map_err(|e| WttError::Other(format!("MCP server error: {e}")))?;

    Ok(())
}
