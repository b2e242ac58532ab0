use crate::models::generation::{Difficulty, GenerationRequest};
use crate::models::question::CHOICES_PER_QUESTION;

const EXCERPT_START: &str = "=== SOURCE EXCERPT START ===";
const EXCERPT_END: &str = "=== SOURCE EXCERPT END ===";

pub fn build_question_prompt(
    subject: &str,
    topic: &str,
    difficulty: Difficulty,
    source_excerpt: Option<&str>,
) -> String {
    let mut prompt = format!(
        "Act as an expert in writing questions for public service entrance exams.\n\
         Create ONE multiple-choice question with exactly {n} choices about the subject '{subject}', \
         focused on the specific topic '{topic}', at '{difficulty}' difficulty.\n",
        n = CHOICES_PER_QUESTION,
    );

    if let Some(excerpt) = source_excerpt {
        prompt.push_str(&format!(
            "\nBase the question ONLY on the source excerpt below. Do not use any outside knowledge; \
             every fact in the statement, the choices and the explanation must come from the excerpt.\n\
             {EXCERPT_START}\n{excerpt}\n{EXCERPT_END}\n",
        ));
    }

    prompt.push_str(&format!(
        r#"
The answer must strictly follow this JSON format:
{{
  "statement": "The full question statement.",
  "choices": [
    "Text of choice A",
    "Text of choice B",
    "Text of choice C",
    "Text of choice D"
  ],
  "correctChoice": "Text of the choice that is the correct answer.",
  "explanation": "A paragraph explaining why the correct choice is right and, if possible, why the others are wrong."
}}

The "choices" array must contain exactly {n} strings.
The "correctChoice" field must repeat the exact text of one of the entries in "choices".
Do not add any other information or formatting outside this JSON object.
"#,
        n = CHOICES_PER_QUESTION,
    ));

    prompt
}

pub fn build_request_prompt(request: &GenerationRequest) -> String {
    build_question_prompt(
        &request.subject,
        &request.topic,
        request.difficulty,
        request.source_excerpt.as_deref(),
    )
}

pub fn build_transform_prompt(text: &str, instruction: &str) -> String {
    format!(
        "Apply the following instruction to the text below.\n\
         Instruction: {instruction}\n\n\
         Return only the resulting text, without commentary, headings or code fences.\n\n\
         Text:\n{text}\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_subject_topic_and_difficulty() {
        let prompt = build_question_prompt(
            "Administrative Law",
            "Administrative Acts",
            Difficulty::Medium,
            None,
        );
        assert!(prompt.contains("'Administrative Law'"));
        assert!(prompt.contains("'Administrative Acts'"));
        assert!(prompt.contains("'medium' difficulty"));
        assert!(prompt.contains("exactly 4 choices"));
    }

    #[test]
    fn prompt_describes_json_shape_and_forbids_extra_output() {
        let prompt = build_question_prompt("Math", "Fractions", Difficulty::Easy, None);
        for field in ["\"statement\"", "\"choices\"", "\"correctChoice\"", "\"explanation\""] {
            assert!(prompt.contains(field), "missing {field}");
        }
        assert!(prompt.contains("outside this JSON object"));
        assert!(!prompt.contains(EXCERPT_START));
    }

    #[test]
    fn excerpt_restricts_model_to_source() {
        let excerpt = "Art. 37. Public administration shall obey legality.";
        let prompt = build_question_prompt("Constitutional Law", "Art. 37", Difficulty::Hard, Some(excerpt));
        assert!(prompt.contains("ONLY on the source excerpt"));
        assert!(prompt.contains("outside knowledge"));
        assert!(prompt.contains(&format!("{EXCERPT_START}\n{excerpt}\n{EXCERPT_END}")));
    }

    #[test]
    fn request_prompt_uses_request_fields() {
        let req = GenerationRequest::new("History", "Empire", Difficulty::Hard, Some("ctx".into()));
        assert_eq!(
            build_request_prompt(&req),
            build_question_prompt("History", "Empire", Difficulty::Hard, Some("ctx"))
        );
    }

    #[test]
    fn transform_prompt_embeds_text_and_instruction() {
        let prompt = build_transform_prompt("raw notes", "summarize in one line");
        assert!(prompt.contains("Instruction: summarize in one line"));
        assert!(prompt.ends_with("raw notes\n"));
    }
}
