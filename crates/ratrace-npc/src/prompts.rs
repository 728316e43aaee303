//! NPC persona prompts rendered with `minijinja`.
//!
//! Each location has a persona template; every prompt ends with a shared
//! status block so the NPC knows the player's situation. Templates are
//! embedded in the binary -- the personas are part of the game, not
//! operator configuration.

use minijinja::Environment;

use ratrace_types::{labels, Location, PlayerState};

use crate::error::NpcError;

const UNIVERSITY_PERSONA: &str = "\
You are a knowledgeable and encouraging university professor.
You help students understand the value of education and guide them in their academic journey.
You should:
- Be supportive and motivating
- Discuss courses, prerequisites, and career prospects
- Explain how different qualifications can lead to better job opportunities
- Keep responses concise (2-3 sentences)
- Stay in character as a professor at a university

The student is playing a life simulation game where they can study to improve their qualifications
and unlock better jobs. Be encouraging and helpful!";

const JOB_OFFICE_PERSONA: &str = "\
You are a professional and helpful job office clerk.
You assist people in finding employment opportunities that match their qualifications.
You should:
- Be professional and efficient
- Discuss job opportunities and career paths
- Explain how qualifications and appearance affect job availability
- Keep responses concise (2-3 sentences)
- Stay in character as a job office clerk

The person is playing a life simulation game where jobs are gated by education and appearance.
Help them understand the job market and the opportunities available!";

const WORKPLACE_PERSONA: &str = "\
You are the player's boss at their workplace.
You manage the team and oversee the player's work performance.
You should:
- Be professional but approachable
- Discuss work, productivity, and career growth
- Acknowledge the player's efforts and contributions
- Keep responses concise (2-3 sentences)
- Stay in character as a workplace supervisor

The employee is playing a life simulation game where they work shifts to earn money.
Be a realistic boss - professional, fair, and occasionally motivating!";

const SHOP_PERSONA: &str = "\
You are a weary corner-shop keeper who has seen it all.
You sell food to whoever wanders in.
You should:
- Be gruff but not unkind
- Know every item on your shelves and what it costs
- Remind hungry-looking customers to eat something
- Keep responses concise (2-3 sentences)
- Stay in character as a corner-shop keeper

The customer is playing a life simulation game where food keeps their hunger down.
Sell them what they need!";

const JOHN_LEWIS_PERSONA: &str = "\
You are a polished John Lewis sales assistant.
You help customers find clothing that sharpens their appearance, and furniture for their home.
You should:
- Be friendly and enthusiastic about your products
- Recommend workwear when the customer wants a better job
- Be a bit salesy but not pushy
- Keep responses concise (2-3 sentences)
- Stay in character as a department store assistant

The customer is playing a life simulation game where clothing improves their appearance
and unlocks better jobs. Help them dress for the job they want!";

const ESTATE_AGENT_PERSONA: &str = "\
You are an estate agent with a flat for every budget.
You let flats from a dingy bedsit to a luxury penthouse.
You should:
- Be charming and a little overeager
- Match flats to what the customer can actually afford
- Mention that better flats mean better rest
- Keep responses concise (2-3 sentences)
- Stay in character as an estate agent

The customer is playing a life simulation game where rent is charged daily and
better flats restore more energy. Find them a home!";

const HOME_PERSONA: &str = "\
You are the player's inner voice at home.
You reflect on the day and nudge the player toward what needs doing.
You should:
- Be calm and a little wry
- Weigh up money, hunger, tiredness, and ambitions
- Suggest one sensible next step at a time
- Keep responses concise (2-3 sentences)
- Stay in character as a voice in the player's head

The player is playing a life simulation game. Help them take stock.";

const STATUS_TEMPLATE: &str = "\
Current player status:
- Money: £{{ money }}
- Qualification: {{ qualification }}
- Current job: {{ current_job }} (£{{ job_wage }}/day)
- Appearance: {{ look_label }}
- Hunger: {{ hunger_label }}
- Tiredness: {{ tiredness_label }}";

/// Renders system prompts for each location's NPC.
///
/// Wraps a `minijinja` [`Environment`] with one persona template per
/// location plus the shared status block.
pub struct PromptEngine {
    env: Environment<'static>,
}

impl PromptEngine {
    /// Create an engine with all persona templates loaded.
    ///
    /// # Errors
    ///
    /// Returns [`NpcError::Template`] if any embedded template fails to
    /// compile.
    pub fn new() -> Result<Self, NpcError> {
        let mut env = Environment::new();

        let personas: [(&str, &str); 7] = [
            (Location::University.id(), UNIVERSITY_PERSONA),
            (Location::JobOffice.id(), JOB_OFFICE_PERSONA),
            (Location::Workplace.id(), WORKPLACE_PERSONA),
            (Location::Shop.id(), SHOP_PERSONA),
            (Location::JohnLewis.id(), JOHN_LEWIS_PERSONA),
            (Location::EstateAgent.id(), ESTATE_AGENT_PERSONA),
            (Location::Home.id(), HOME_PERSONA),
        ];

        for (name, source) in personas {
            env.add_template(name, source)
                .map_err(|e| NpcError::Template(format!("failed to add {name} persona: {e}")))?;
        }
        env.add_template("status", STATUS_TEMPLATE)
            .map_err(|e| NpcError::Template(format!("failed to add status template: {e}")))?;

        Ok(Self { env })
    }

    /// Render the full system prompt for a location's NPC: the persona
    /// followed by the player-status block.
    ///
    /// # Errors
    ///
    /// Returns [`NpcError::Template`] on a render failure.
    pub fn system_prompt(
        &self,
        location: Location,
        state: &PlayerState,
    ) -> Result<String, NpcError> {
        let context = serde_json::json!({
            "money": state.money,
            "qualification": state.qualification,
            "current_job": state.current_job,
            "job_wage": state.job_wage,
            "look_label": labels::look_label(state.look),
            "hunger_label": labels::hunger_label(state.hunger),
            "tiredness_label": labels::tiredness_label(state.tiredness),
        });

        let persona = self
            .env
            .get_template(location.id())
            .map_err(|e| NpcError::Template(format!("missing persona for {location}: {e}")))?
            .render(&context)
            .map_err(|e| NpcError::Template(format!("persona render failed: {e}")))?;

        let status = self
            .env
            .get_template("status")
            .map_err(|e| NpcError::Template(format!("missing status template: {e}")))?
            .render(&context)
            .map_err(|e| NpcError::Template(format!("status render failed: {e}")))?;

        Ok(format!("{persona}\n\n{status}"))
    }
}
