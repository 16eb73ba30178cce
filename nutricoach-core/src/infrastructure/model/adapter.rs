//! Message adapters - convert conversations to and from the Gemini wire format

use crate::types::{Part, Role, ToolCallRequest, ToolDeclaration, Turn};
use serde::Deserialize;
use serde_json::{Map, Value, json};

/// Adapter for converting conversation turns to API formats
pub struct MessageAdapter;

impl MessageAdapter {
    /// Convert turns to Gemini `contents`.
    /// Tool results travel as `user` turns holding `functionResponse` parts.
    pub fn to_gemini_format(turns: &[Turn]) -> Vec<Value> {
        turns
            .iter()
            .map(|turn| {
                let role = match turn.role {
                    Role::Model => "model",
                    Role::User | Role::Tool => "user",
                };
                let parts: Vec<Value> = turn.parts.iter().map(Self::part_to_gemini).collect();
                json!({ "role": role, "parts": parts })
            })
            .collect()
    }

    /// Wrap declarations in a single Gemini tool entry; `None` when nothing is offered.
    pub fn to_gemini_tools(declarations: &[ToolDeclaration]) -> Option<Value> {
        if declarations.is_empty() {
            return None;
        }
        let functions: Vec<Value> = declarations
            .iter()
            .map(|declaration| {
                json!({
                    "name": declaration.name,
                    "description": declaration.description,
                    "parameters": declaration.parameters,
                })
            })
            .collect();
        Some(json!([{ "functionDeclarations": functions }]))
    }

    /// Convert response parts back into a model turn, dropping thought summaries.
    pub fn from_gemini_parts(parts: Vec<GeminiPart>) -> Turn {
        let parts = parts
            .into_iter()
            .filter(|part| !part.thought.unwrap_or(false))
            .filter_map(|part| {
                if let Some(call) = part.function_call {
                    return Some(Part::ToolCall(ToolCallRequest {
                        name: call.name,
                        arguments: call.args,
                        signature: part.thought_signature,
                    }));
                }
                part.text.map(Part::Text)
            })
            .collect();
        Turn::model(parts)
    }

    fn part_to_gemini(part: &Part) -> Value {
        match part {
            Part::Text(text) => json!({ "text": text }),
            Part::ToolCall(call) => {
                let mut value = json!({
                    "functionCall": { "name": call.name, "args": call.arguments }
                });
                if let Some(signature) = &call.signature {
                    value["thoughtSignature"] = json!(signature);
                }
                value
            }
            Part::ToolResult(result) => json!({
                "functionResponse": { "name": result.name, "response": result.result }
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiPart {
    text: Option<String>,
    thought: Option<bool>,
    function_call: Option<GeminiFunctionCall>,
    thought_signature: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiFunctionCall {
    name: String,
    #[serde(default)]
    args: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ToolCallResult;

    #[test]
    fn tool_turns_are_sent_as_user_function_responses() {
        let turns = vec![
            Turn::user("Analyze: an apple"),
            Turn::tool_results(vec![ToolCallResult {
                name: "get_food_nutrition".into(),
                result: json!({ "found": true }),
            }]),
        ];

        let contents = MessageAdapter::to_gemini_format(&turns);
        assert_eq!(
            contents[0],
            json!({ "role": "user", "parts": [{ "text": "Analyze: an apple" }] })
        );
        assert_eq!(contents[1]["role"], json!("user"));
        assert_eq!(
            contents[1]["parts"][0]["functionResponse"],
            json!({ "name": "get_food_nutrition", "response": { "found": true } })
        );
    }

    #[test]
    fn parses_function_calls_and_keeps_signature_for_replay() {
        let parts: Vec<GeminiPart> = serde_json::from_value(json!([
            { "text": "thinking about it", "thought": true },
            {
                "functionCall": { "name": "get_food_nutrition", "args": { "food_name": "apple" } },
                "thoughtSignature": "sig-1"
            },
            { "text": "done" }
        ]))
        .expect("parts deserialize");

        let turn = MessageAdapter::from_gemini_parts(parts);
        assert_eq!(turn.role, Role::Model);
        assert_eq!(turn.parts.len(), 2);
        assert_eq!(turn.text(), "done");

        let replayed = MessageAdapter::to_gemini_format(std::slice::from_ref(&turn));
        assert_eq!(replayed[0]["role"], json!("model"));
        assert_eq!(replayed[0]["parts"][0]["thoughtSignature"], json!("sig-1"));
        assert_eq!(
            replayed[0]["parts"][0]["functionCall"]["args"],
            json!({ "food_name": "apple" })
        );
    }

    #[test]
    fn empty_declarations_offer_no_tools() {
        assert!(MessageAdapter::to_gemini_tools(&[]).is_none());

        let declaration = ToolDeclaration {
            name: "calculate_tdee".into(),
            description: "Calculate daily calorie needs".into(),
            parameters: json!({ "type": "object" }),
        };
        let tools = MessageAdapter::to_gemini_tools(&[declaration]).expect("tools present");
        assert_eq!(
            tools[0]["functionDeclarations"][0]["name"],
            json!("calculate_tdee")
        );
    }
}
