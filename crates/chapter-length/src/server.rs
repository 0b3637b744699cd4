//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes chapter-length measurement, validation, and truncation to story
//! generation agents over stdio. Each `#[tool]` method delegates to the core
//! library; the server only parses categories and serializes results.
//!
//! Category parameters take the exact label (`"A few sentences"`) or the
//! slug (`few-sentences`). Unknown labels are rejected with
//! `invalid_params`.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use chapter_length_core::{
    CHAPTER_LENGTH_SPECS, LengthCategory, enforce_chapter_length, measure_chapter,
    truncate_with_outcome, validate_chapter_length,
};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `list_categories` tool.
#[derive(Debug, Default, serde::Deserialize, schemars::JsonSchema)]
pub struct ListCategoriesParams {}

/// Parameters for tools that take a chapter and a category.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ChapterParams {
    /// The chapter text.
    pub text: String,
    /// Category label, e.g. "A few sentences". Omit for the server default.
    pub category: Option<String>,
}

#[derive(Serialize)]
struct Verdict {
    category: LengthCategory,
    valid: bool,
}

/// MCP server exposing chapter-length tools.
#[derive(Clone)]
pub struct ChapterServer {
    default_category: LengthCategory,
    max_input_bytes: Option<usize>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for ChapterServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl ChapterServer {
    /// Create a server with the built-in default category and no input limit.
    pub fn new() -> Self {
        Self {
            default_category: LengthCategory::default(),
            max_input_bytes: None,
            tool_router: Self::tool_router(),
        }
    }

    /// Category used when a tool call omits one.
    pub fn with_default_category(mut self, category: LengthCategory) -> Self {
        self.default_category = category;
        self
    }

    /// Reject chapter text larger than `max` bytes.
    pub fn with_max_input_bytes(mut self, max: Option<usize>) -> Self {
        self.max_input_bytes = max;
        self
    }

    fn category(&self, label: Option<&str>) -> Result<LengthCategory, McpError> {
        label.map_or(Ok(self.default_category), |label| {
            label
                .parse()
                .map_err(|e: chapter_length_core::LengthError| {
                    McpError::invalid_params(e.to_string(), None)
                })
        })
    }

    fn check_size(&self, text: &str) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if text.len() > max => Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            )),
            _ => Ok(()),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "default_category": self.default_category.label(),
        });

        let text = if params.format == "json" {
            to_json(&info)?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// List the categories and their bounds.
    #[tool(
        description = "List chapter-length categories with their sentence, word, and paragraph bounds."
    )]
    #[tracing::instrument(skip(self, _params), fields(otel.kind = "server"))]
    fn list_categories(
        &self,
        Parameters(_params): Parameters<ListCategoriesParams>,
    ) -> Result<CallToolResult, McpError> {
        let table: Vec<serde_json::Value> = CHAPTER_LENGTH_SPECS
            .iter()
            .map(|(category, spec)| {
                serde_json::json!({
                    "label": category.label(),
                    "slug": category.slug(),
                    "spec": spec,
                })
            })
            .collect();
        tracing::info!(tool = "list_categories", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(to_json(&table)?)]))
    }

    /// Measure a chapter against a category.
    #[tool(
        description = "Count sentences, words, and paragraphs in a chapter and compare each against the category bounds."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn measure_chapter(
        &self,
        Parameters(params): Parameters<ChapterParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;
        let category = self.category(params.category.as_deref())?;

        let report = measure_chapter(&params.text, category);

        tracing::info!(tool = "measure_chapter", pass = report.pass, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(to_json(&report)?)]))
    }

    /// Validate a chapter against a category.
    #[tool(
        description = "Check whether a chapter fits its length category. Returns {category, valid}."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn validate_chapter_length(
        &self,
        Parameters(params): Parameters<ChapterParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;
        let category = self.category(params.category.as_deref())?;

        let valid = validate_chapter_length(&params.text, category);

        tracing::info!(tool = "validate_chapter_length", valid, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(to_json(
            &Verdict { category, valid },
        )?)]))
    }

    /// Truncate a chapter to a category's upper bounds.
    #[tool(
        description = "Truncate a chapter to the category's maximum paragraphs, sentences, and words. Never lengthens text."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn truncate_to_spec(
        &self,
        Parameters(params): Parameters<ChapterParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;
        let category = self.category(params.category.as_deref())?;

        let outcome = truncate_with_outcome(&params.text, category);

        tracing::info!(
            tool = "truncate_to_spec",
            truncated = outcome.truncated,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(to_json(&outcome)?)]))
    }

    /// Validate, then truncate if needed.
    #[tool(
        description = "Accept a generated chapter if it fits, otherwise truncate it. Reports whether the result needs regeneration."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn enforce_chapter_length(
        &self,
        Parameters(params): Parameters<ChapterParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;
        let category = self.category(params.category.as_deref())?;

        let enforcement = enforce_chapter_length(&params.text, category);
        let mut json = serde_json::to_value(&enforcement)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;
        json["needs_regeneration"] = enforcement.needs_regeneration().into();

        tracing::info!(
            tool = "enforce_chapter_length",
            action = ?enforcement.action,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(to_json(&json)?)]))
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_handler]
impl ServerHandler for ChapterServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Validate generated chapters against their length category \
                 and truncate chapters that run long.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
