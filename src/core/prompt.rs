use crate::domain::model::PromptRequest;

pub const SYSTEM_MESSAGE: &str =
    "Assistant médical expérimental. Ne remplace pas un avis médical professionnel.";

const CASE_PREAMBLE: &str = "\
Vous êtes un assistant médical intelligent destiné aux médecins.
Analysez le cas clinique suivant sans poser de diagnostic définitif.

Veuillez fournir :
- Des hypothèses générales (non concluantes)
- Des questions complémentaires pertinentes
- Des examens médicaux éventuellement recommandés

⚠️ Mentionnez clairement que la décision finale appartient au médecin.

Cas clinique :
";

/// The case text is appended verbatim: no trimming, no escaping.
pub fn build_prompt(case_text: &str) -> String {
    let mut prompt = String::with_capacity(CASE_PREAMBLE.len() + case_text.len() + 1);
    prompt.push_str(CASE_PREAMBLE);
    prompt.push_str(case_text);
    prompt.push('\n');
    prompt
}

pub fn build_request(case_text: &str) -> PromptRequest {
    PromptRequest {
        system: Some(SYSTEM_MESSAGE.to_string()),
        prompt: build_prompt(case_text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_ends_with_case_text() {
        let prompt = build_prompt("Patient de 52 ans avec ictère");
        assert!(prompt.starts_with("Vous êtes un assistant médical"));
        assert!(prompt.ends_with("Cas clinique :\nPatient de 52 ans avec ictère\n"));
    }

    #[test]
    fn test_prompt_keeps_special_characters() {
        let case_text = "  <b>T° 39,5</b> & \"douleur\" {x}\n\tSpO2 92%  ";
        let prompt = build_prompt(case_text);
        let tail = &prompt[CASE_PREAMBLE.len()..];
        assert_eq!(tail, format!("{}\n", case_text));
    }

    #[test]
    fn test_prompt_states_physician_decides() {
        let prompt = build_prompt("x");
        assert!(prompt.contains("la décision finale appartient au médecin"));
        assert!(prompt.contains("sans poser de diagnostic définitif"));
        assert!(prompt.contains("examens médicaux"));
    }

    #[test]
    fn test_request_carries_system_message() {
        let request = build_request("toux");
        assert_eq!(request.system.as_deref(), Some(SYSTEM_MESSAGE));
        assert_eq!(request.prompt, build_prompt("toux"));
    }
}
