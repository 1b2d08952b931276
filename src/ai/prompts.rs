//! Fixed instruction templates sent to the generative model.
//!
//! Every template asks for a rigid output shape so the callers can parse the
//! free-text answer by convention (verdict on the first line, bullet lines).

/// Shared platform context embedded into the audio prompt
pub const SYSTEM_CONTEXT: &str = "You are the AI assistant for PrismEcho, a spatial audio debate platform.
Your responses must be:
- CONCISE: Maximum 2-3 short bullet points or single sentences
- NEUTRAL: No bias toward any perspective
- STRUCTURED: Follow the exact output format requested
- DEBATE-FOCUSED: Capture key arguments, not filler words";

const MODERATION_TEMPLATE: &str = "<task>Content Moderation Check</task>
<context>You are moderating content for a professional debate platform.</context>

<rules>
Flag as UNSAFE if the content contains:
1. Hate speech (racial, religious, gender, sexuality-based)
2. Threats or calls for violence
3. Harassment or discrimination
4. Promotion of illegal activities
</rules>

<input>{text}</input>

<output_format>
Respond with exactly one word on the first line: SAFE or UNSAFE
If UNSAFE, add the specific reason on line 2 (max 10 words)
</output_format>";

const AUDIO_SUMMARY_TEMPLATE: &str = "<task>Summarize Audio for Debate Platform</task>
<context>{context}</context>

<instructions>
Listen to the audio and extract the KEY ARGUMENT being made.
Do NOT transcribe word-for-word.
Summarize the main point in 1-2 concise bullet points.
</instructions>

<output_format>
• [Main argument in under 15 words]
• [Supporting point if present, under 12 words]
</output_format>

<rules>
- Output ONLY bullet points, no introduction or explanation
- Use present tense (\"argues\", \"believes\", \"questions\")
- Capture the stance/opinion, not filler words
- Maximum 30 words total
</rules>";

const TRANSCRIPT_SUMMARY_TEMPLATE: &str = "<task>Summarize Debate Point</task>
<input>{transcript}</input>
<output>
Output 1-2 bullet points (max 15 words each).
Format: • [point]
No introduction, just bullets.
</output>";

const OPENING_QUESTION_TEMPLATE: &str = "<task>Generate Debate Opening Question</task>
<context>Creating the first node for a PrismEcho debate room.</context>

<topic>{topic}</topic>

<instructions>
Generate a single thought-provoking question that:
1. Is neutral (not leading toward any answer)
2. Invites multiple valid perspectives
3. Uses clear, accessible language
4. Creates genuine curiosity
</instructions>

<output_format>
Output ONLY the question, no quotes, no explanation.
Maximum 18 words.
</output_format>

<examples>
Topic: \"Climate change policies\"
Good: \"How should we balance economic growth with environmental protection?\"
Bad: \"Don't you think we need stricter climate laws?\" (leading)

Topic: \"AI in education\"
Good: \"What role should AI play in how students learn?\"
Bad: \"Should AI replace teachers?\" (oversimplified binary)
</examples>";

pub fn moderation(text: &str) -> String {
    MODERATION_TEMPLATE.replace("{text}", text)
}

pub fn audio_summary() -> String {
    AUDIO_SUMMARY_TEMPLATE.replace("{context}", SYSTEM_CONTEXT)
}

pub fn transcript_summary(transcript: &str) -> String {
    TRANSCRIPT_SUMMARY_TEMPLATE.replace("{transcript}", transcript)
}

pub fn opening_question(topic: &str) -> String {
    OPENING_QUESTION_TEMPLATE.replace("{topic}", topic)
}
