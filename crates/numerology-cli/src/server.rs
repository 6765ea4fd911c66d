use std::sync::Arc;

use numerology_store::{SavedInputs, Store};
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::payload::{self, InputError};

#[derive(Clone)]
pub struct NumerologyServer {
    state: Arc<Mutex<ServerState>>,
    tool_router: ToolRouter<Self>,
}

struct ServerState {
    /// `None` when the caller opted out of remembering inputs.
    store: Option<Store>,
}

impl NumerologyServer {
    pub fn new(store: Option<Store>) -> Self {
        Self {
            state: Arc::new(Mutex::new(ServerState { store })),
            tool_router: Self::tool_router(),
        }
    }

    async fn remember(&self, save: impl FnOnce(&Store) -> numerology_store::Result<()>) {
        let state = self.state.lock().await;
        if let Some(store) = &state.store
            && let Err(e) = save(store)
        {
            tracing::warn!("failed to remember input: {e}");
        }
    }
}

fn json_result<E: std::fmt::Display>(result: Result<serde_json::Value, E>) -> CallToolResult {
    let value = result.unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() }));
    CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(&value).unwrap_or_default(),
    )])
}

// --- Tool parameter types ---

#[derive(Debug, Deserialize, JsonSchema)]
struct LifePathRequest {
    /// Birth date as YYYY-MM-DD
    date: String,
    /// Remember this date for later recall (default true)
    remember: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ExpressionRequest {
    /// Full name; Latin letters and Hangul syllables are counted
    name: String,
    /// Remember this name for later recall (default true)
    remember: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct NumberRequest {
    /// A canonical number: 1-9, 11, 22 or 33
    number: u32,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct CompatibilityRequest {
    /// First number, 1-33
    a: u32,
    /// Second number, 1-33
    b: u32,
}

#[tool_router]
impl NumerologyServer {
    #[tool(
        description = "Compute the life path number for a birth date (YYYY-MM-DD). Returns the number, whether it is a master number (11, 22, 33), its meaning and an extended insight."
    )]
    async fn numerology_life_path(
        &self,
        Parameters(req): Parameters<LifePathRequest>,
    ) -> Result<CallToolResult, McpError> {
        let result = payload::life_path(&req.date);
        if result.is_ok() && req.remember.unwrap_or(true) {
            self.remember(|store| store.save_birth_date(&req.date)).await;
        }
        Ok(json_result(result))
    }

    #[tool(
        description = "Compute the expression number for a name. Latin letters count A=1..Z=26, Hangul syllables count by a fixed 1-19 mapping; everything else is ignored."
    )]
    async fn numerology_expression(
        &self,
        Parameters(req): Parameters<ExpressionRequest>,
    ) -> Result<CallToolResult, McpError> {
        let result = payload::expression(&req.name);
        if result.is_ok() && req.remember.unwrap_or(true) {
            self.remember(|store| store.save_name(&req.name)).await;
        }
        Ok(json_result(result))
    }

    #[tool(description = "Look up the meaning of a canonical number (1-9, 11, 22, 33).")]
    async fn numerology_meaning(
        &self,
        Parameters(req): Parameters<NumberRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(json_result(payload::meaning(req.number)))
    }

    #[tool(
        description = "Life purpose, hidden potential, main challenge and keys to success for a number. Numbers without a dedicated entry get a generic reading."
    )]
    async fn numerology_insight(
        &self,
        Parameters(req): Parameters<NumberRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(json_result(Ok::<_, InputError>(payload::insight(req.number))))
    }

    #[tool(
        description = "Score the compatibility of two numbers in 1-33 as a percentage, with tier, shared affinities, cautions and each side's headline traits."
    )]
    async fn numerology_compatibility(
        &self,
        Parameters(req): Parameters<CompatibilityRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(json_result(payload::compatibility(req.a, req.b)))
    }

    #[tool(description = "Return the last remembered birth date and name, if any.")]
    async fn numerology_recall(&self) -> Result<CallToolResult, McpError> {
        let state = self.state.lock().await;
        let saved = match &state.store {
            None => Ok(SavedInputs::default()),
            Some(store) => store.saved_inputs().inspect_err(|e| {
                tracing::error!("failed to read remembered inputs: {e}");
            }),
        };
        Ok(json_result(saved.map(|saved| {
            serde_json::json!({
                "birthDate": saved.birth_date,
                "name": saved.name,
            })
        })))
    }
}

#[tool_handler]
impl ServerHandler for NumerologyServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Numerology calculator.\n\n\
                 - numerology_life_path: birth date (YYYY-MM-DD) to life path number.\n\
                 - numerology_expression: name to expression number.\n\
                 - numerology_meaning / numerology_insight: what a number stands for.\n\
                 - numerology_compatibility: percentage score for two numbers in 1-33.\n\
                 - numerology_recall: last remembered birth date and name.\n\n\
                 Results are plain data; phrase them for the user yourself. \
                 Invalid input returns a JSON object with an \"error\" field."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
