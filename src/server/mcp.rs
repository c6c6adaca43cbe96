//! MCP server adapter
//!
//! Exposes the agent generation pipeline through the official rmcp SDK:
//! management tools (create/get/list/test/delete/add-component), catalog
//! queries and two read-only resources. Pure marshalling; every decision
//! lives in the pipeline.

use rmcp::{
    handler::server::ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Content, Implementation, ListResourcesResult,
        ListToolsResult, PaginatedRequestParam, RawResource, ReadResourceRequestParam,
        ReadResourceResult, Resource, ResourceContents, ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
    ErrorData as McpError, RoleServer,
};
use serde_json::{json, Map, Value};
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

use crate::domain::{
    AgentFilter, AgentStatus, ComponentCategory, Domain, GeneratorError, GeneratorResult,
};
use crate::pipeline::{AgentGenerator, CreateAgentRequest};

const CATALOG_RESOURCE_URI: &str = "components://catalog";
const CONTEXT_RESOURCE_URI: &str = "intelligence://context";

/// AgentForge MCP server
#[derive(Clone)]
pub struct ForgeServer {
    generator: Arc<AgentGenerator>,
}

impl ForgeServer {
    pub fn new(generator: Arc<AgentGenerator>) -> Self {
        Self { generator }
    }

    async fn dispatch(&self, name: &str, args: &Value) -> GeneratorResult<Value> {
        match name {
            "create_agent" => {
                let request = CreateAgentRequest {
                    name: required_str(args, "name")?.to_string(),
                    description: required_str(args, "description")?.to_string(),
                    domain: parse_or_default(args, "domain")?,
                    complexity: parse_or_default(args, "complexity")?,
                };
                let result = self.generator.create_agent(request).await?;
                Ok(json!({
                    "agent_id": result.agent.id,
                    "agent": result.agent,
                    "ai_enhancements": result.enhancements,
                }))
            }
            "get_agent" => {
                let details = self
                    .generator
                    .get_agent(required_str(args, "agent_id")?)
                    .await?;
                Ok(serde_json::to_value(details)?)
            }
            "list_agents" => {
                let filter = AgentFilter {
                    domain: optional_parse::<Domain>(args, "domain")?,
                    status: optional_parse::<AgentStatus>(args, "status")?,
                };
                let listing = self.generator.list_agents(filter).await?;
                Ok(serde_json::to_value(listing)?)
            }
            "test_agent" => {
                let agent_id = required_str(args, "agent_id")?;
                let test_input = args.get("test_input").cloned().unwrap_or_else(|| json!({}));
                let scenario = args
                    .get("scenario")
                    .and_then(Value::as_str)
                    .unwrap_or("default");
                let report = self
                    .generator
                    .test_agent(agent_id, test_input, scenario)
                    .await?;
                Ok(serde_json::to_value(report)?)
            }
            "delete_agent" => {
                let agent_id = required_str(args, "agent_id")?;
                let confirm = args
                    .get("confirm")
                    .and_then(Value::as_bool)
                    .unwrap_or(false);
                if !confirm {
                    return Err(GeneratorError::Validation(
                        "Deletion requires confirm=true".to_string(),
                    ));
                }
                self.generator.delete_agent(agent_id).await?;
                Ok(json!({ "deleted": agent_id }))
            }
            "add_component" => {
                let details = self
                    .generator
                    .add_component(
                        required_str(args, "agent_id")?,
                        required_str(args, "component_id")?,
                    )
                    .await?;
                Ok(serde_json::to_value(details)?)
            }
            "get_components" => {
                let category = optional_parse::<ComponentCategory>(args, "category")?;
                let search = args.get("search").and_then(Value::as_str);
                let components = self.generator.get_components(category, search).await?;
                Ok(json!({
                    "total": components.len(),
                    "components": components,
                }))
            }
            "domain_insights" => {
                let domain = optional_parse::<Domain>(args, "domain")?.unwrap_or_default();
                let insights = self.generator.domain_insights(domain).await?;
                Ok(serde_json::to_value(insights)?)
            }
            other => Err(GeneratorError::Validation(format!(
                "Unknown tool: {}",
                other
            ))),
        }
    }
}

fn required_str<'a>(args: &'a Value, field: &str) -> GeneratorResult<&'a str> {
    args.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| GeneratorError::Validation(format!("Missing required field: {}", field)))
}

fn parse_or_default<T>(args: &Value, field: &str) -> GeneratorResult<T>
where
    T: FromStr<Err = GeneratorError> + Default,
{
    Ok(optional_parse(args, field)?.unwrap_or_default())
}

fn optional_parse<T>(args: &Value, field: &str) -> GeneratorResult<Option<T>>
where
    T: FromStr<Err = GeneratorError>,
{
    args.get(field)
        .and_then(Value::as_str)
        .map(T::from_str)
        .transpose()
}

fn tool(name: &str, description: &str, schema: Value) -> Tool {
    let schema = match schema {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    Tool::new(name.to_string(), description.to_string(), schema)
}

fn tool_definitions() -> Vec<Tool> {
    vec![
        tool(
            "create_agent",
            "Creates an AI agent specification from a free-text description, \
             with automatic domain detection, component selection and configuration",
            json!({
                "type": "object",
                "properties": {
                    "name": { "type": "string", "description": "Agent name" },
                    "description": { "type": "string", "description": "Free-text description of what the agent should do" },
                    "domain": { "type": "string", "description": "Business domain; 'general' auto-detects", "default": "general" },
                    "complexity": { "type": "string", "enum": ["simple", "medium", "complex"], "default": "medium" }
                },
                "required": ["name", "description"]
            }),
        ),
        tool(
            "get_agent",
            "Fetches a stored agent with derived statistics",
            json!({
                "type": "object",
                "properties": {
                    "agent_id": { "type": "string" }
                },
                "required": ["agent_id"]
            }),
        ),
        tool(
            "list_agents",
            "Lists stored agents, sorted by intelligence score",
            json!({
                "type": "object",
                "properties": {
                    "domain": { "type": "string", "description": "Filter by domain" },
                    "status": { "type": "string", "enum": ["draft", "active", "deployed", "inactive"] }
                }
            }),
        ),
        tool(
            "test_agent",
            "Runs one simulated test against a stored agent and updates its metrics",
            json!({
                "type": "object",
                "properties": {
                    "agent_id": { "type": "string" },
                    "test_input": { "type": "object", "description": "Input payload, e.g. {\"user_message\": \"...\"}" },
                    "scenario": { "type": "string", "default": "default" }
                },
                "required": ["agent_id"]
            }),
        ),
        tool(
            "delete_agent",
            "Deletes a stored agent; requires confirm=true",
            json!({
                "type": "object",
                "properties": {
                    "agent_id": { "type": "string" },
                    "confirm": { "type": "boolean", "default": false }
                },
                "required": ["agent_id"]
            }),
        ),
        tool(
            "add_component",
            "Adds a catalog component to an existing agent and recomputes its workflow and scores",
            json!({
                "type": "object",
                "properties": {
                    "agent_id": { "type": "string" },
                    "component_id": { "type": "string" }
                },
                "required": ["agent_id", "component_id"]
            }),
        ),
        tool(
            "get_components",
            "Queries the component catalog by category and/or free-text search",
            json!({
                "type": "object",
                "properties": {
                    "category": { "type": "string", "enum": ["ai_processing", "integrations", "data_tools", "workflow_control"] },
                    "search": { "type": "string" }
                }
            }),
        ),
        tool(
            "domain_insights",
            "Returns learned usage insights for one domain",
            json!({
                "type": "object",
                "properties": {
                    "domain": { "type": "string", "default": "general" }
                }
            }),
        ),
    ]
}

impl ServerHandler for ForgeServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder()
                .enable_resources()
                .enable_tools()
                .build(),
            server_info: Implementation {
                name: "agentforge".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                website_url: None,
                icons: None,
            },
            instructions: Some(
                "AgentForge - generates declarative AI agent specifications from \
                 natural-language descriptions"
                    .to_string(),
            ),
        }
    }

    fn ping(
        &self,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<(), McpError>> + Send + '_ {
        async move {
            info!("MCP ping received");
            Ok(())
        }
    }

    fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListResourcesResult, McpError>> + Send + '_ {
        async move {
            let resources = vec![
                Resource::new(
                    RawResource {
                        uri: CATALOG_RESOURCE_URI.into(),
                        name: "Katalog Komponentów".into(),
                        title: None,
                        description: Some("Component catalog overview and sample".into()),
                        mime_type: Some("application/json".into()),
                        size: None,
                        icons: None,
                    },
                    None,
                ),
                Resource::new(
                    RawResource {
                        uri: CONTEXT_RESOURCE_URI.into(),
                        name: "Smart Context".into(),
                        title: None,
                        description: Some("Learned usage patterns and insights".into()),
                        mime_type: Some("application/json".into()),
                        size: None,
                        icons: None,
                    },
                    None,
                ),
            ];
            Ok(ListResourcesResult {
                resources,
                next_cursor: None,
            })
        }
    }

    fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ReadResourceResult, McpError>> + Send + '_ {
        let generator = self.generator.clone();
        async move {
            let uri = request.uri.as_str();
            let content = match uri {
                CATALOG_RESOURCE_URI => {
                    let stats = generator
                        .catalog_stats()
                        .await
                        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
                    let sample = generator
                        .get_components(None, None)
                        .await
                        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
                    json!({
                        "stats": stats,
                        "components_sample": sample.into_iter().take(10).collect::<Vec<_>>(),
                        "domains": [
                            "communication", "ecommerce", "customer_service", "sales",
                            "marketing", "finance", "hr", "development", "analytics", "general"
                        ],
                    })
                }
                CONTEXT_RESOURCE_URI => {
                    let insights = generator
                        .domain_insights(Domain::General)
                        .await
                        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
                    json!({
                        "intelligence_features": {
                            "nlp_analysis": true,
                            "auto_configuration": true,
                            "smart_suggestions": true,
                            "background_learning": true,
                        },
                        "general_insights": insights,
                    })
                }
                other => {
                    return Err(McpError::resource_not_found(
                        format!("Unknown resource: {}", other),
                        None,
                    ))
                }
            };

            Ok(ReadResourceResult {
                contents: vec![ResourceContents::text(content.to_string(), uri.to_string())],
            })
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        async move {
            Ok(ListToolsResult {
                tools: tool_definitions(),
                next_cursor: None,
            })
        }
    }

    fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        let server = self.clone();
        async move {
            let name = request.name.as_ref();
            let args = request
                .arguments
                .map(Value::Object)
                .unwrap_or_else(|| json!({}));

            // Domain failures become structured results with a success flag;
            // only internal faults surface as protocol errors.
            let payload = match server.dispatch(name, &args).await {
                Ok(mut value) => {
                    if let Some(map) = value.as_object_mut() {
                        map.insert("success".to_string(), json!(true));
                    }
                    value
                }
                Err(err @ (GeneratorError::AgentNotFound(_)
                | GeneratorError::ComponentNotFound(_)
                | GeneratorError::Validation(_))) => json!({
                    "success": false,
                    "error": err.to_string(),
                }),
                Err(err) => {
                    return Err(McpError::internal_error(err.to_string(), None));
                }
            };

            Ok(CallToolResult::success(vec![Content::text(
                payload.to_string(),
            )]))
        }
    }
}
