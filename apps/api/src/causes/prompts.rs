// Prompt template for the cause search endpoint.

use crate::causes::request::CauseQuery;
use crate::llm_client::prompts::render;

/// Replace: {interesses}, {habilidades}, {localizacao}
pub const CAUSE_PROMPT_TEMPLATE: &str = r#"Uma pessoa quer se engajar em causas sociais perto de onde mora.
- Causas que a motivam: {interesses}
- Habilidades que pode oferecer: {habilidades}
- Localização: {localizacao}

Liste de 3 a 5 tipos de organizações (por exemplo ONGs, associações, abrigos, projetos sociais) que combinam com esse perfil.
Responda apenas com termos curtos de busca, separados por vírgula, sem explicações."#;

const NO_SKILLS_PLACEHOLDER: &str = "não informadas";

pub fn build_cause_prompt(query: &CauseQuery) -> String {
    render(
        CAUSE_PROMPT_TEMPLATE,
        &[
            ("{interesses}", query.interesses()),
            (
                "{habilidades}",
                query.habilidades().unwrap_or(NO_SKILLS_PLACEHOLDER),
            ),
            ("{localizacao}", query.localizacao()),
        ],
    )
}
