//! Single-shot answer generation from retrieved context

use std::sync::Arc;

use tracing::debug;

use super::llm::LanguageModel;
use super::prompt::PromptTemplate;
use crate::domain::error::DomainError;
use crate::domain::retrieval::Retriever;

/// Generates one answer: retrieve `k` passages, assemble the prompt, complete
pub struct AnswerGenerator {
    retriever: Arc<Retriever>,
    llm: Arc<dyn LanguageModel>,
    template: PromptTemplate,
}

impl AnswerGenerator {
    pub fn new(retriever: Arc<Retriever>, llm: Arc<dyn LanguageModel>) -> Self {
        Self {
            retriever,
            llm,
            template: PromptTemplate::default(),
        }
    }

    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.template = template;
        self
    }

    /// Generate an answer for `query` using the `k` nearest passages.
    /// Passage texts are joined with blank lines to form the context block.
    pub async fn generate(&self, query: &str, k: usize) -> Result<String, DomainError> {
        let passages = self.retriever.retrieve(query, k).await?;

        let context = passages
            .iter()
            .map(|p| p.chunk.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");

        let prompt = self.template.render(query, &context);

        debug!(
            k = k,
            context_passages = passages.len(),
            prompt_len = prompt.len(),
            "Generating answer"
        );

        let response = self.llm.complete(&prompt).await?;
        Ok(response.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::generation::llm::mock::MockLanguageModel;
    use crate::domain::retrieval::embedding::mock::MockEmbeddingProvider;
    use crate::domain::retrieval::store::mock::MockVectorStore;

    fn retriever_with(passages: Vec<crate::domain::retrieval::RetrievedPassage>) -> Arc<Retriever> {
        Arc::new(Retriever::new(
            Arc::new(MockVectorStore::with_passages(passages)),
            Arc::new(MockEmbeddingProvider::new(8)),
        ))
    }

    #[tokio::test]
    async fn test_generate_joins_context_with_blank_lines() {
        let retriever = retriever_with(vec![
            MockVectorStore::passage("1", "primul pasaj", 0.1),
            MockVectorStore::passage("2", "al doilea pasaj", 0.2),
        ]);
        let llm = Arc::new(MockLanguageModel::new(vec!["raspuns"]));
        let generator = AnswerGenerator::new(retriever, llm.clone())
            .with_template(PromptTemplate::new("{context}"));

        let answer = generator.generate("intrebare", 2).await.unwrap();

        assert_eq!(answer, "raspuns");
        let prompts = llm.prompts();
        assert_eq!(prompts[0], "primul pasaj\n\nal doilea pasaj");
    }

    #[tokio::test]
    async fn test_generate_with_empty_store_yields_empty_context() {
        let retriever = retriever_with(vec![]);
        let llm = Arc::new(MockLanguageModel::new(vec!["Nu am putut genera un răspuns."]));
        let generator = AnswerGenerator::new(retriever, llm.clone())
            .with_template(PromptTemplate::new("C:{context}"));

        generator.generate("intrebare", 3).await.unwrap();
        assert_eq!(llm.prompts()[0], "C:");
    }
}
