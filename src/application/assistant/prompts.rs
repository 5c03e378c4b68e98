//! Prompt templates for the assistant. The instructions are fixed; only the
//! article text and the reader's question vary. Replies are requested in the
//! catalog's locale, pt-BR.

pub fn summary_prompt(content: &str) -> String {
    format!(
        "Você é um editor de notícias experiente. Por favor, forneça um resumo \
         conciso de 3 pontos do conteúdo do artigo a seguir.\n\
         Responda EXCLUSIVAMENTE em Português (Brasil).\n\
         Mantenha o tom profissional e jornalístico.\n\n\
         Conteúdo do Artigo:\n{content}"
    )
}

pub fn question_prompt(question: &str, context: &str) -> String {
    format!(
        "Contexto (Artigo Atual): {context}\n\n\
         Pergunta do Usuário: {question}\n\n\
         Responda à pergunta do usuário com base no contexto do artigo \
         fornecido. Seja breve, útil e responda em Português (Brasil)."
    )
}
