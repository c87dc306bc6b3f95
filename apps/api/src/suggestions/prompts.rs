// Prompt template for the profile suggestion endpoint.

use crate::llm_client::prompts::render;
use crate::suggestions::profile::Profile;

/// Replace: {interests}, {skills}, {contribution_method}, {location}
pub const SUGGESTION_PROMPT_TEMPLATE: &str = r#"Analise o perfil de um usuário interessado em voluntariado e engajamento social:
- Interesses/Causas que motivam: {interests}
- Habilidades específicas que gostaria de oferecer: {skills}
- Tipo de contribuição que gostaria de oferecer: {contribution_method}
- Localização: {location}

Com base nessas informações, interprete e categorize os interesses do usuário.
Sugira que tipo de oportunidades ou organizações seriam mais alinhadas com este perfil.
A resposta deve ser um parágrafo ou dois, amigável e encorajador.
O foco inicial é apenas interpretar o perfil e dar uma direção geral."#;

/// Renders the suggestion prompt. Values are embedded verbatim.
///
/// Substitution is single-pass so a value containing `{location}` or similar
/// is never expanded a second time.
pub fn build_suggestion_prompt(profile: &Profile) -> String {
    render(
        SUGGESTION_PROMPT_TEMPLATE,
        &[
            ("{interests}", profile.interests()),
            ("{skills}", profile.skills()),
            ("{contribution_method}", profile.contribution_method()),
            ("{location}", profile.location()),
        ],
    )
}
