//! Prompt template for the remote answer judge

/// Build the yes/no evaluation prompt for one response/answer pair.
///
/// Carries two worked examples (one wrong, one right) ahead of the pair
/// under evaluation.
pub fn build_judge_prompt(model_response: &str, correct_answer: &str) -> String {
    format!(
        "You are an answer evaluator. I will give you a response and an answer.\n\
         Please tell me whether this response is correct or wrong. Just answer yes or no.\n\
         \n\
         Examples:\n\
         Response: The figure that cannot be folded into a cube is: C. <image>\n\
         Correct Answer: B\n\
         Evaluation: no\n\
         \n\
         Response: The unfolded shape of the cube is: B. <image>\n\
         Correct Answer: B\n\
         Evaluation: yes\n\
         \n\
         Now evaluate:\n\
         Response: {model_response}\n\
         Correct Answer: {correct_answer}"
    )
}
