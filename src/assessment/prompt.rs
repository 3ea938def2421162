use crate::models::UserHealthData;

/// The three things the model is asked for. Phrasing matters: the
/// extractor looks for condition names followed by percentages.
pub const ANALYSIS_REQUEST: &str = "Analyze the health information and provide:
1. Risk percentages for diabetes, hypertension, and depression
2. Key recommendations
3. Brief explanation";

/// Build the assessment prompt for one request.
pub fn build_assessment_prompt(data: &UserHealthData) -> String {
    let smoker = if data.smoker { "Yes" } else { "No" };

    let mut prompt = format!(
        "Patient Information:
- Symptoms: {symptoms}
- Age: {age}
- Gender: {gender}
- Weight: {weight}kg
- Height: {height}cm
- Smoker: {smoker}
- Physical Activity Level: {activity}
- Medical History: {history}
",
        symptoms = data.symptoms,
        age = data.age,
        gender = data.gender,
        weight = data.weight,
        height = data.height,
        activity = data.physical_activity,
        history = data.medical_history,
    );

    let documents: Vec<&str> = data
        .medical_documents
        .iter()
        .map(|d| d.trim())
        .filter(|d| !d.is_empty())
        .collect();
    if !documents.is_empty() {
        prompt.push_str("\nMedical Documents:\n");
        for (i, doc) in documents.iter().enumerate() {
            prompt.push_str(&format!("<document index=\"{}\">\n{doc}\n</document>\n", i + 1));
        }
    }

    prompt.push('\n');
    prompt.push_str(ANALYSIS_REQUEST);
    prompt.push('\n');
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PhysicalActivity;

    fn data() -> UserHealthData {
        UserHealthData {
            symptoms: "Frequent headaches".into(),
            age: 47,
            gender: "male".into(),
            weight: 92.0,
            height: 178.5,
            smoker: true,
            physical_activity: PhysicalActivity::Medium,
            medical_history: "None".into(),
            medical_documents: vec![],
        }
    }

    #[test]
    fn prompt_contains_patient_fields() {
        let prompt = build_assessment_prompt(&data());
        assert!(prompt.starts_with("Patient Information:\n"));
        assert!(prompt.contains("- Symptoms: Frequent headaches\n"));
        assert!(prompt.contains("- Age: 47\n"));
        assert!(prompt.contains("- Weight: 92kg\n"));
        assert!(prompt.contains("- Height: 178.5cm\n"));
        assert!(prompt.contains("- Smoker: Yes\n"));
        assert!(prompt.contains("- Physical Activity Level: medium\n"));
        assert!(prompt.contains("- Medical History: None\n"));
    }

    #[test]
    fn prompt_ends_with_analysis_request() {
        let prompt = build_assessment_prompt(&data());
        assert!(prompt.trim_end().ends_with("3. Brief explanation"));
        assert!(prompt.contains("diabetes, hypertension, and depression"));
    }

    #[test]
    fn non_smoker_rendered_as_no() {
        let mut d = data();
        d.smoker = false;
        assert!(build_assessment_prompt(&d).contains("- Smoker: No\n"));
    }

    #[test]
    fn documents_section_only_when_present() {
        assert!(!build_assessment_prompt(&data()).contains("Medical Documents"));

        let mut d = data();
        d.medical_documents = vec!["HbA1c 7.2%".into(), "   ".into(), "BP 150/95".into()];
        let prompt = build_assessment_prompt(&d);
        assert!(prompt.contains("Medical Documents:"));
        assert!(prompt.contains("<document index=\"1\">\nHbA1c 7.2%\n</document>"));
        assert!(prompt.contains("<document index=\"2\">\nBP 150/95\n</document>"));
        assert!(!prompt.contains("index=\"3\""));
    }
}
