pub mod http_client;
pub mod openai;

pub use http_client::{HttpClient, HttpClientTrait};
pub use openai::OpenAiChatModel;
