//! The chat tool registry: game rules exposed as schema-described tools.
//!
//! Each tool wraps one engine rule. The NPC only sees the tools for the
//! location the player is standing in, so the professor cannot rent flats
//! and the estate agent cannot grade lectures. Tool failures are reported
//! back to the model as unsuccessful results, never as errors.

use serde::Serialize;
use serde_json::{json, Value};

use ratrace_engine::locations::{
    estate_agent, home, job_office, john_lewis, shop, university, workplace,
};
use ratrace_engine::GameConfig;
use ratrace_types::{Location, PlayerState, RuleOutcome};

/// A tool the NPC can call, with its wire schema.
#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    /// Tool name.
    pub name: &'static str,
    /// What the tool does, written for the model.
    pub description: &'static str,
    /// JSON schema of the tool input.
    pub input_schema: Value,
}

/// Result of one executed tool call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolResult {
    /// Whether the underlying rule applied its effects.
    pub success: bool,
    /// The rule's player-facing message.
    pub message: String,
}

impl From<RuleOutcome> for ToolResult {
    fn from(outcome: RuleOutcome) -> Self {
        Self {
            success: outcome.success,
            message: outcome.message,
        }
    }
}

/// Schema for a tool that takes no input.
fn empty_schema() -> Value {
    json!({ "type": "object", "properties": {}, "required": [] })
}

/// Schema for a tool taking a single required string parameter.
fn string_schema(param: &str, description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            param: { "type": "string", "description": description }
        },
        "required": [param]
    })
}

/// Every chat tool in the game.
pub fn all_tools() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            name: "attend_lecture",
            description: "Attend a lecture at university. Requires being enrolled in a course. \
                          Each lecture charges the course fee and progresses you toward completing \
                          your current course.",
            input_schema: empty_schema(),
        },
        ToolSpec {
            name: "enroll_course",
            description: "Enroll in a university course. Available courses: middle_school, \
                          high_school, vocational, bachelor_arts, bachelor_science, \
                          bachelor_business, master_arts, master_science, mba, phd, \
                          executive_mba. Prerequisites required for advanced courses.",
            input_schema: string_schema(
                "course_id",
                "The id of the course to enroll in (e.g. 'high_school', 'bachelor_science')",
            ),
        },
        ToolSpec {
            name: "get_job",
            description: "Visit the job office to automatically get the best available job based \
                          on your qualifications and appearance. Better education and appearance \
                          unlock higher-paying jobs.",
            input_schema: empty_schema(),
        },
        ToolSpec {
            name: "apply_for_job",
            description: "Apply for a specific job by title. Requires the right education and a \
                          sufficient appearance level; higher-paying jobs need a sharper look.",
            input_schema: string_schema(
                "job_title",
                "The title of the job to apply for (e.g. 'Junior Developer', 'Marketing Manager')",
            ),
        },
        ToolSpec {
            name: "work",
            description: "Work a shift and earn a quarter of your daily wage. Increases \
                          tiredness. Requires having a job first.",
            input_schema: empty_schema(),
        },
        ToolSpec {
            name: "buy_food",
            description: "Buy a random affordable food item from the shop. Food reduces hunger \
                          immediately and is not stored in inventory.",
            input_schema: empty_schema(),
        },
        ToolSpec {
            name: "purchase_food_item",
            description: "Purchase a specific food item from the shop. Items include: Apple, \
                          Banana, Bread, Milk, Eggs, Cheese, Chicken, Beef, Rice, Pasta, \
                          Vegetables, Pizza, Sandwich, Coffee, Chocolate. Food reduces hunger \
                          based on calories.",
            input_schema: string_schema(
                "item_name",
                "The name of the food item to purchase (e.g. 'Apple', 'Pizza')",
            ),
        },
        ToolSpec {
            name: "rest",
            description: "Rest at home to reduce tiredness. Better flats provide better rest and \
                          happiness boosts.",
            input_schema: empty_schema(),
        },
        ToolSpec {
            name: "browse_john_lewis",
            description: "Browse John Lewis and buy a random affordable item. Work clothes \
                          (suits, shirts, shoes) improve your appearance for job applications.",
            input_schema: empty_schema(),
        },
        ToolSpec {
            name: "purchase_clothing",
            description: "Purchase a specific item from John Lewis. Clothing such as 'Formal \
                          Suit', 'Oxford Shoes' or 'Blazer' improves your appearance (look \
                          level) for jobs; furniture does not.",
            input_schema: string_schema(
                "item_name",
                "The name of the item to purchase (e.g. 'Formal Suit', 'Oxford Shoes')",
            ),
        },
        ToolSpec {
            name: "browse_flats",
            description: "Visit the estate agent to view available flats for rent, and your \
                          current accommodation.",
            input_schema: empty_schema(),
        },
        ToolSpec {
            name: "rent_flat",
            description: "Rent a flat at the given tier. Tier 0=Homeless (no rent), 1=Dingy \
                          Bedsit (£10/day), 2=Basic Studio (£25/day), 3=Comfortable Flat \
                          (£50/day), 4=Stylish Apartment (£100/day), 5=Luxury Penthouse \
                          (£200/day). Better flats provide better rest.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "tier": {
                        "type": "integer",
                        "description": "The flat tier to rent (0-5)",
                        "minimum": 0,
                        "maximum": 5
                    }
                },
                "required": ["tier"]
            }),
        },
    ]
}

/// Tool names available at each location.
const fn tool_names_for(location: Location) -> &'static [&'static str] {
    match location {
        Location::University => &["attend_lecture", "enroll_course"],
        Location::JobOffice => &["get_job", "apply_for_job"],
        Location::Workplace => &["work"],
        Location::Shop => &["buy_food", "purchase_food_item"],
        Location::Home => &["rest"],
        Location::JohnLewis => &["browse_john_lewis", "purchase_clothing"],
        Location::EstateAgent => &["browse_flats", "rent_flat"],
    }
}

/// The tools available in a location's chat context.
pub fn tools_for_location(location: Location) -> Vec<ToolSpec> {
    let names = tool_names_for(location);
    all_tools()
        .into_iter()
        .filter(|tool| names.contains(&tool.name))
        .collect()
}

/// Extract a required string argument.
fn string_arg(arguments: &Value, name: &str) -> Result<String, ToolResult> {
    arguments
        .get(name)
        .and_then(Value::as_str)
        .map(ToOwned::to_owned)
        .ok_or_else(|| ToolResult {
            success: false,
            message: format!("Missing required argument: {name}"),
        })
}

/// Execute a tool against the player state and report the outcome.
///
/// Unknown tools and missing arguments come back as unsuccessful results.
/// Clothing purchases recompute the look level so chat-driven shopping
/// counts toward job eligibility like any other purchase.
pub fn execute_tool(
    name: &str,
    arguments: &Value,
    state: &mut PlayerState,
    config: &GameConfig,
) -> ToolResult {
    let outcome = match name {
        "attend_lecture" => university::attend_lecture(state),
        "enroll_course" => match string_arg(arguments, "course_id") {
            Ok(course_id) => university::enroll_course(state, &course_id),
            Err(result) => return result,
        },
        "get_job" => job_office::visit_job_office(state),
        "apply_for_job" => match string_arg(arguments, "job_title") {
            Ok(job_title) => job_office::apply_for_job(state, &job_title),
            Err(result) => return result,
        },
        "work" => workplace::visit_workplace(state, config),
        "buy_food" => shop::visit_shop(state),
        "purchase_food_item" => match string_arg(arguments, "item_name") {
            Ok(item_name) => shop::purchase_food(state, &item_name),
            Err(result) => return result,
        },
        "rest" => home::visit_home(state),
        "browse_john_lewis" => {
            let outcome = john_lewis::visit_john_lewis(state, config);
            john_lewis::recompute_look(state);
            outcome
        }
        "purchase_clothing" => match string_arg(arguments, "item_name") {
            Ok(item_name) => {
                let outcome = john_lewis::purchase_item(state, config, &item_name);
                john_lewis::recompute_look(state);
                outcome
            }
            Err(result) => return result,
        },
        "browse_flats" => estate_agent::visit_estate_agent(state),
        "rent_flat" => {
            let Some(tier) = arguments.get("tier").and_then(Value::as_u64) else {
                return ToolResult {
                    success: false,
                    message: String::from("Missing required argument: tier"),
                };
            };
            let tier = u8::try_from(tier).unwrap_or(u8::MAX);
            estate_agent::rent_flat(state, tier)
        }
        _ => {
            return ToolResult {
                success: false,
                message: format!("Unknown tool: {name}"),
            }
        }
    };

    outcome.into()
}
