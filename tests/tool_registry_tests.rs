// Tool registry tests - the two built-in tools as the model sees them
//
// Exercises declarations, dispatch by name and the structured error payloads
// that keep a conversation going.

use nutricoach_core::nutrition::NUTRITION_TABLE;
use nutricoach_core::tooling::{LookupOutcome, ToolRegistry, compute_energy, lookup_food};
use nutricoach_core::types::ToolCallRequest;
use serde_json::{Map, Value, json};

fn request(name: &str, args: Value) -> ToolCallRequest {
    let args = match args {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    ToolCallRequest::new(name, args)
}

#[test]
fn declarations_describe_both_tools() {
    let registry = ToolRegistry::with_builtin_tools();
    let declarations = registry.declarations();
    assert_eq!(declarations.len(), 2);

    let lookup = &declarations[0];
    assert_eq!(lookup.name, "get_food_nutrition");
    assert_eq!(lookup.parameters["required"], json!(["food_name"]));

    let energy = &declarations[1];
    assert_eq!(energy.name, "calculate_tdee");
    assert_eq!(
        energy.parameters["required"],
        json!(["weight_kg", "height_cm", "age", "sex"])
    );
}

#[test]
fn every_table_key_resolves_to_itself() {
    for record in NUTRITION_TABLE {
        match lookup_food(NUTRITION_TABLE, record.food_key) {
            LookupOutcome::Found(found) => assert_eq!(found, *record),
            other => panic!("{} did not resolve: {other:?}", record.food_key),
        }
    }
}

#[test]
fn fuzzy_ties_prefer_the_later_key() {
    // "rice" scores equally against white_rice and brown_rice.
    match lookup_food(NUTRITION_TABLE, "Rice") {
        LookupOutcome::Found(record) => assert_eq!(record.food_key, "white_rice"),
        other => panic!("expected a match, got {other:?}"),
    }
}

#[test]
fn dispatch_returns_lookup_miss_as_data() {
    let registry = ToolRegistry::with_builtin_tools();
    let result = registry.dispatch(&request("get_food_nutrition", json!({ "food_name": "sushi" })));
    assert_eq!(
        result.result,
        json!({ "found": false, "error": "Food 'sushi' not found" })
    );
}

#[test]
fn dispatch_energy_matches_formula() {
    let registry = ToolRegistry::with_builtin_tools();
    let result = registry.dispatch(&request(
        "calculate_tdee",
        json!({ "weight_kg": 70, "height_cm": 165, "age": 28, "sex": "female", "activity_level": "active" }),
    ));
    assert_eq!(result.result["bmr"], json!(1430));
    assert_eq!(result.result["tdee"], json!(2467));

    let direct = compute_energy(70.0, 165.0, 28, "female", "active");
    assert_eq!(result.result["tdee"], json!(direct.tdee));
}

#[test]
fn unknown_tool_never_panics() {
    let registry = ToolRegistry::with_builtin_tools();
    let result = registry.dispatch(&request("get_weather", json!({ "city": "Pune" })));
    assert_eq!(result.result, json!({ "error": "Unknown tool" }));
}
