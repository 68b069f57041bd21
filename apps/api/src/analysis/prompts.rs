// All LLM prompt constants for the analysis module.

/// System prompt for the narrative career analysis.
pub const ANALYSIS_SYSTEM: &str =
    "You are a career guidance expert specializing in supporting people at \
    risk of offending. Provide practical, empathetic guidance with clear \
    section headers using markdown.";

/// Analysis prompt template. Replace `{caas_scores}` and the background
/// placeholders before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are a career guidance expert specializing in supporting people at risk of offending.
Please analyze the following assessment results and background information to provide personalized career guidance.

CAAS Assessment Scores:
{caas_scores}

Background Information:
- Location: {county}, {postcode_area}
- Education: {education}
- Current Situation: {current_situation}
- Career Interests: {interests}
- Barriers: {barriers}
- Support Systems: {support_systems}
- Goals: {goals}

Please provide:
1. A summary of key strengths and areas for development
2. Specific career recommendations considering local opportunities
3. Tailored strategies for overcoming identified barriers
4. Immediate next steps they can take
5. Long-term development suggestions

Focus on practical, achievable recommendations that consider their specific circumstances.

Format your response with clear section headers using markdown formatting (e.g., ### Strengths and Development Areas)."#;
