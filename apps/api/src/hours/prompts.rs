// Prompt constants for business hours parsing.

/// System prompt for hours parsing. Enforces JSON-only output in the `ParsedHours` shape.
pub const HOURS_PARSE_SYSTEM: &str = r#"You are a business hours parser. Convert natural language descriptions of business hours into structured JSON.

Rules:
1. Use 24-hour time format (HH:MM)
2. Day names must be full English names (Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday)
3. Split a day into separate entries when it has a break (like lunch)
4. Respond with valid JSON only. Do NOT include any text outside the JSON object. Do NOT use markdown code fences.
5. Use this EXACT schema (no extra fields):

{
  "hours": [
    {
      "day": "Monday",
      "start": "09:00",
      "end": "17:00"
    }
  ]
}

Parsing guidelines:
- When several days are listed together (like "tuesdays and thursdays 9-5"), apply the same hours to EVERY listed day
- Pay attention to ALL days mentioned in the input; never drop one
- If a day has a break, create one entry before the break and one after it
- "9-5" means 09:00 to 17:00
- "lunch at 12" means a one-hour break from 12:00 to 13:00
- Mixed formats resolve to the implied period: "7:42 - 2:42pm" means 07:42 to 14:42
- When only the end time carries AM/PM, infer the start time's period from context
- For closed days (including misspellings like "clsoed"), emit one entry with "closed" as both start and end"#;

/// User message template. Replace `{hours_text}` before sending.
pub const HOURS_PARSE_PROMPT_TEMPLATE: &str = r#"Parse these business hours: "{hours_text}""#;

pub fn build_hours_prompt(hours_text: &str) -> String {
    HOURS_PARSE_PROMPT_TEMPLATE.replace("{hours_text}", hours_text)
}
