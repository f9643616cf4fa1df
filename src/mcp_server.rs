use serde_json::{json, Value};
use tracing::debug;
use crate::config::FormatterConfig;
use crate::error::{Result, ServiceError};
use crate::formatter::{FormatterSession, PhoneFormatter};
use crate::registry::REGISTRY;

#[derive(Clone)]
pub struct McpServer {
    formatter: PhoneFormatter,
}

impl Default for McpServer {
    fn default() -> Self {
        Self::new(&FormatterConfig::default())
    }
}

impl McpServer {
    pub fn new(config: &FormatterConfig) -> Self {
        Self {
            formatter: PhoneFormatter::new(config),
        }
    }

    pub async fn handle_request(&self, request: Value) -> Result<Value> {
        let method = request["method"].as_str().unwrap_or("");
        debug!("MCP request: {}", method);

        match method {
            "initialize" => self.handle_initialize(),
            "tools/list" => self.handle_tools_list(),
            "tools/call" => self.handle_tool_call(&request["params"]),
            _ => Err(ServiceError::UnknownMethod(method.to_string())),
        }
    }

    fn handle_initialize(&self) -> Result<Value> {
        Ok(json!({
            "result": {
                "protocolVersion": "2024-11-05",
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": "phone-input",
                    "version": env!("CARGO_PKG_VERSION")
                }
            }
        }))
    }

    fn handle_tools_list(&self) -> Result<Value> {
        Ok(json!({
            "result": {
                "tools": [
                    {
                        "name": "format_phone",
                        "description": "Parse a stored phone value and return its country, digits and formatted display",
                        "inputSchema": {
                            "type": "object",
                            "properties": {
                                "value": {
                                    "type": "string",
                                    "description": "Stored value, e.g. \"+1 (555) 555-5555\" (may be empty)"
                                },
                                "country_hint": {
                                    "type": "string",
                                    "description": "Country name used when the value is empty"
                                },
                                "selected_iso": {
                                    "type": "string",
                                    "description": "Country already selected in the field, kept for shared calling codes"
                                }
                            },
                            "required": ["value"]
                        }
                    },
                    {
                        "name": "apply_input",
                        "description": "Feed the full field content after a keystroke; rejected input leaves the session unchanged",
                        "inputSchema": {
                            "type": "object",
                            "properties": {
                                "iso_code": { "type": "string", "description": "Selected country" },
                                "digits": { "type": "string", "description": "Digits accepted so far" },
                                "input": { "type": "string", "description": "New field content" }
                            },
                            "required": ["iso_code", "digits", "input"]
                        }
                    },
                    {
                        "name": "change_country",
                        "description": "Reformat the current digits for another country",
                        "inputSchema": {
                            "type": "object",
                            "properties": {
                                "iso_code": { "type": "string", "description": "Currently selected country" },
                                "digits": { "type": "string", "description": "Digits accepted so far" },
                                "new_iso": { "type": "string", "description": "Country to switch to" }
                            },
                            "required": ["digits", "new_iso"]
                        }
                    },
                    {
                        "name": "classify_phone",
                        "description": "Check a stored phone value against its country's maximum length",
                        "inputSchema": {
                            "type": "object",
                            "properties": {
                                "value": { "type": "string", "description": "Stored value" }
                            },
                            "required": ["value"]
                        }
                    },
                    {
                        "name": "list_countries",
                        "description": "Countries for a picker, sorted by name",
                        "inputSchema": {
                            "type": "object",
                            "properties": {}
                        }
                    }
                ]
            }
        }))
    }

    fn handle_tool_call(&self, params: &Value) -> Result<Value> {
        let tool_name = params["name"]
            .as_str()
            .ok_or(ServiceError::MissingArgument("name"))?;

        let arguments = &params["arguments"];

        match tool_name {
            "format_phone" => self.format_phone(arguments),
            "apply_input" => self.apply_input(arguments),
            "change_country" => self.change_country(arguments),
            "classify_phone" => self.classify_phone(arguments),
            "list_countries" => self.list_countries(),
            _ => Err(ServiceError::UnknownTool(tool_name.to_string())),
        }
    }

    fn format_phone(&self, args: &Value) -> Result<Value> {
        let value = required_str(args, "value")?;
        let session = self.formatter.initialize_with_selection(
            value,
            args["country_hint"].as_str(),
            args["selected_iso"].as_str(),
        );

        Ok(session_response(
            format!("Formatted as {}", session.committed_value()),
            &session,
            json!({}),
        ))
    }

    fn apply_input(&self, args: &Value) -> Result<Value> {
        let iso_code = known_iso(args, "iso_code")?;
        let digits = required_str(args, "digits")?;
        let input = required_str(args, "input")?;

        let session = self.formatter.restore(iso_code, digits);
        let outcome = self.formatter.apply_input(&session, input);

        let text = if outcome.accepted {
            format!("Accepted: {}", outcome.display)
        } else {
            format!("Rejected: {} allows at most {} digits", iso_code, ceiling(iso_code))
        };

        Ok(session_response(
            text,
            &outcome.session,
            json!({ "accepted": outcome.accepted }),
        ))
    }

    fn change_country(&self, args: &Value) -> Result<Value> {
        let digits = required_str(args, "digits")?;
        let new_iso = known_iso(args, "new_iso")?;
        let current_iso = args["iso_code"].as_str().unwrap_or(new_iso);

        let session = self.formatter.restore(current_iso, digits);
        let moved = self.formatter.change_country(&session, new_iso);

        Ok(session_response(
            format!("Switched to {}: {}", moved.iso_code(), moved.committed_value()),
            &moved,
            json!({}),
        ))
    }

    fn classify_phone(&self, args: &Value) -> Result<Value> {
        let value = required_str(args, "value")?;
        let session = self.formatter.initialize(value, None);
        let verdict = session.verdict();

        Ok(session_response(
            format!("{} ({})", verdict, session.iso_code()),
            &session,
            json!({ "verdict": verdict }),
        ))
    }

    fn list_countries(&self) -> Result<Value> {
        let countries: Vec<Value> = REGISTRY
            .entries_sorted_by_country_name()
            .into_iter()
            .map(|entry| {
                json!({
                    "iso_code": entry.iso_code,
                    "label": entry.picker_label(),
                    "calling_code": entry.calling_code,
                    "max_digits": entry.example_national_length
                })
            })
            .collect();

        Ok(json!({
            "result": {
                "content": [{
                    "type": "text",
                    "text": format!("{} countries available", countries.len())
                }],
                "data": { "countries": countries }
            }
        }))
    }
}

fn required_str<'a>(args: &'a Value, field: &'static str) -> Result<&'a str> {
    args[field].as_str().ok_or(ServiceError::MissingArgument(field))
}

fn known_iso<'a>(args: &'a Value, field: &'static str) -> Result<&'a str> {
    let iso_code = required_str(args, field)?;
    if REGISTRY.lookup_by_iso_code(iso_code).is_none() {
        return Err(ServiceError::InvalidArgument {
            field,
            reason: format!("unknown country '{}'", iso_code),
        });
    }
    Ok(iso_code)
}

fn ceiling(iso_code: &str) -> usize {
    REGISTRY
        .lookup_by_iso_code(iso_code)
        .map_or(0, |entry| entry.example_national_length)
}

fn session_response(text: String, session: &FormatterSession, mut extra: Value) -> Value {
    if let Some(obj) = extra.as_object_mut() {
        obj.insert("iso_code".to_string(), json!(session.iso_code()));
        obj.insert("digits".to_string(), json!(session.digits()));
        obj.insert("display".to_string(), json!(session.display()));
        obj.insert("committed".to_string(), json!(session.committed_value()));
    }

    json!({
        "result": {
            "content": [{
                "type": "text",
                "text": text
            }],
            "data": extra
        }
    })
}
