// Question matching
// Decides which canned answer a question gets

use crate::models::{ApiResponse, Link, StudentQuestion};

const MODEL_CHOICE_ANSWER: &str = "You must use `gpt-3.5-turbo-0125`, even if the AI Proxy only supports `gpt-4o-mini`. Use the OpenAI API directly for this question.";

const IMAGE_ACKNOWLEDGEMENT: &str = " I also received an image, which will be considered in the analysis.";

/// 質問から回答を組み立てる能力。
/// ハンドラは `Arc<dyn QuestionMatcher>` 越しにしか触らないため、
/// 将来は埋め込み検索などの実装に差し替えられる。
pub trait QuestionMatcher: Send + Sync {
    /// Builds the answer for an already validated question.
    fn answer(&self, query: &StudentQuestion) -> ApiResponse;
}

/// A canned answer returned when every keyword occurs in the question.
#[derive(Debug, Clone)]
pub struct KeywordRule {
    keywords: Vec<String>,
    answer: String,
    links: Vec<Link>,
}

impl KeywordRule {
    /// キーワードは小文字で保持し、照合時に質問文も小文字化して比較する。
    pub fn new<I, S>(keywords: I, answer: impl Into<String>, links: Vec<Link>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        KeywordRule {
            keywords: keywords
                .into_iter()
                .map(|keyword| keyword.as_ref().to_lowercase())
                .collect(),
            answer: answer.into(),
            links,
        }
    }

    /// `question` must already be lowercased.
    fn matches(&self, question: &str) -> bool {
        self.keywords.iter().all(|keyword| question.contains(keyword.as_str()))
    }

    fn to_response(&self) -> ApiResponse {
        ApiResponse::new(self.answer.clone(), self.links.clone())
    }
}

/// 大文字小文字を無視した部分一致で回答を選ぶ `QuestionMatcher`。
/// 先頭から順にルールを試し、どれにも当たらなければ汎用回答を返す。
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    rules: Vec<KeywordRule>,
}

impl KeywordMatcher {
    pub fn new(rules: Vec<KeywordRule>) -> Self {
        KeywordMatcher { rules }
    }
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        KeywordMatcher::new(vec![model_choice_rule()])
    }
}

impl QuestionMatcher for KeywordMatcher {
    fn answer(&self, query: &StudentQuestion) -> ApiResponse {
        let lowered = query.text().to_lowercase();

        match self.rules.iter().find(|rule| rule.matches(&lowered)) {
            Some(rule) => rule.to_response(),
            None => generic_answer(query),
        }
    }
}

/// GA5 question 8: which model to call when both are mentioned.
pub fn model_choice_rule() -> KeywordRule {
    KeywordRule::new(
        ["gpt-4o-mini", "gpt3.5 turbo"],
        MODEL_CHOICE_ANSWER,
        vec![
            Link::new(
                "https://discourse.onlinedegree.iitm.ac.in/t/ga5-question-8-clarification/155939/4",
                "Use the model that’s mentioned in the question.",
            ),
            Link::new(
                "https://discourse.onlinedegree.iitm.ac.in/t/ga5-question-8-clarification/155939/3",
                "My understanding is that you just have to use a tokenizer, similar to what Prof. Anand used, to get the number of tokens and multiply that by the given rate.",
            ),
        ],
    )
}

/// 質問文をそのまま埋め込んだ汎用回答。画像があれば一文を追記する。
pub fn generic_answer(query: &StudentQuestion) -> ApiResponse {
    let mut answer = format!(
        "Thank you for your question: '{}'. I'm currently processing it based on the available course content and Discourse posts. Please note that the full AI logic is under development.",
        query.text()
    );
    if query.has_image() {
        answer.push_str(IMAGE_ACKNOWLEDGEMENT);
    }

    ApiResponse::new(
        answer,
        vec![
            Link::new("https://discourse.onlinedegree.iitm.ac.in/", "Visit the TDS Discourse Forum"),
            Link::new(
                "https://onlinedegree.iitm.ac.in/course/tools-in-data-science",
                "TDS Course Page",
            ),
        ],
    )
}
