//! Fixed prompt templates for the tutoring gateway
//!
//! The templates are bilingual by design: instructions to the model are in
//! Portuguese, the student's content is embedded verbatim. Every template
//! always contains the literal submitted text and proficiency level.

/// Build the conversational tutoring prompt.
///
/// The history is rendered as a JSON array; the turns are opaque and never
/// interpreted.
pub fn chat_prompt(level: &str, previous_messages: &[String], message: &str) -> String {
    let history =
        serde_json::to_string(previous_messages).unwrap_or_else(|_| "[]".to_string());

    format!(
        "Você é um professor de inglês amigável e paciente. O nível de inglês do aluno é {level}.\n\
         \n\
         Histórico da conversa: {history}\n\
         \n\
         Aluno: {message}\n\
         \n\
         Por favor, responda naturalmente em inglês, corrija quaisquer erros e ajude o aluno a melhorar.\n\
         Forneça explicações em português quando necessário, especialmente ao corrigir erros.\n\
         \n\
         Formato da resposta:\n\
         1. Resposta em inglês\n\
         2. [Correções] (se houver erros)\n\
         3. [Dicas em português] (sugestões de melhoria)\n"
    )
}

/// Build the writing-analysis prompt demanding the structured JSON shape.
pub fn analysis_prompt(level: &str, text: &str) -> String {
    format!(
        "Você é um assistente avançado de escrita em inglês. Analise o seguinte texto escrito por um aluno de nível {level}.\n\
         \n\
         Texto para analisar: \"{text}\"\n\
         \n\
         Forneça uma análise detalhada no seguinte formato JSON:\n\
         {{\n\
         \x20   \"grammarScore\": (número entre 0-100),\n\
         \x20   \"vocabularyScore\": (número entre 0-100),\n\
         \x20   \"coherenceScore\": (número entre 0-100),\n\
         \x20   \"overallScore\": (número entre 0-100),\n\
         \x20   \"corrections\": [\n\
         \x20       {{\n\
         \x20           \"original\": \"texto incorreto\",\n\
         \x20           \"suggestion\": \"texto corrigido\",\n\
         \x20           \"explanation\": \"explicação em português do por que esta correção é necessária\",\n\
         \x20           \"type\": \"gramática|vocabulário|estilo\",\n\
         \x20           \"severity\": \"baixa|média|alta\"\n\
         \x20       }}\n\
         \x20   ],\n\
         \x20   \"suggestions\": [\n\
         \x20       {{\n\
         \x20           \"category\": \"vocabulário|estrutura|estilo\",\n\
         \x20           \"text\": \"sugestão de melhoria em português\"\n\
         \x20       }}\n\
         \x20   ],\n\
         \x20   \"feedback\": \"feedback detalhado em português com avaliação geral e dicas de melhoria\"\n\
         }}\n\
         \n\
         Foque em fornecer feedback construtivo e explicações claras em português para as melhorias.\n"
    )
}

/// Build the writing-improvement prompt (free-text response expected).
pub fn improvement_prompt(level: &str, text: &str) -> String {
    format!(
        "Você é um assistente avançado de escrita em inglês. Melhore o seguinte texto escrito por um aluno de nível {level}.\n\
         \n\
         Texto para melhorar: \"{text}\"\n\
         \n\
         Por favor, forneça:\n\
         1. Uma versão melhorada do texto em inglês\n\
         2. Lista em português das melhorias específicas feitas\n\
         3. Sugestões em português para aprimoramento adicional\n\
         \n\
         Formate sua resposta de maneira clara e estruturada em português.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_prompt_contains_message_and_level() {
        let prompt = chat_prompt("beginner", &[], "Where is the library?");
        assert!(prompt.contains("Where is the library?"));
        assert!(prompt.contains("beginner"));
    }

    #[test]
    fn chat_prompt_embeds_history_as_json_array() {
        let history = vec!["Hello!".to_string(), "How are you?".to_string()];
        let prompt = chat_prompt("intermediate", &history, "Fine, thanks");
        assert!(prompt.contains(r#"["Hello!","How are you?"]"#));
    }

    #[test]
    fn chat_prompt_empty_history_renders_empty_array() {
        let prompt = chat_prompt("intermediate", &[], "Hi");
        assert!(prompt.contains("Histórico da conversa: []"));
    }

    #[test]
    fn analysis_prompt_demands_json_shape() {
        let prompt = analysis_prompt("advanced", "I has two cat");
        assert!(prompt.contains("I has two cat"));
        assert!(prompt.contains("advanced"));
        assert!(prompt.contains("\"grammarScore\""));
        assert!(prompt.contains("\"corrections\""));
        assert!(prompt.contains("\"feedback\""));
    }

    #[test]
    fn improvement_prompt_contains_text_and_level() {
        let prompt = improvement_prompt("beginner", "me wants coffee");
        assert!(prompt.contains("me wants coffee"));
        assert!(prompt.contains("beginner"));
        assert!(prompt.contains("Texto para melhorar"));
    }
}
