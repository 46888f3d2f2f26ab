use serde::Deserialize;

/// Message returned when the request carries no usable question.
pub const QUESTION_REQUIRED: &str = "'question' field is required.";

/// Number of base64 characters of an attached image written to the log.
const IMAGE_LOG_PREFIX_CHARS: usize = 50;

/// 学生から届く質問ペイロード。
/// `question` は必須だが、欠落時に axum の 422 ではなく 400 を返したいので
/// `Option<String>` で受けて `validate` で判定する。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentQuestion {
    #[serde(default)]
    pub question: Option<String>,
    /// Optional base64 encoded image attachment. Never decoded.
    #[serde(default)]
    pub image: Option<String>,
}

impl StudentQuestion {
    pub fn new(question: impl Into<String>) -> Self {
        StudentQuestion {
            question: Some(question.into()),
            image: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// 質問文が空白以外の文字を含むことを検証する。
    /// 失敗時は `Err(String)` を返し、ハンドラ層で `ApiError::Validation` に変換される。
    pub fn validate(&self) -> Result<(), String> {
        match self.question.as_deref() {
            Some(question) if !question.trim().is_empty() => Ok(()),
            _ => Err(QUESTION_REQUIRED.to_string()),
        }
    }

    /// The question exactly as sent, or `""` when absent.
    pub fn text(&self) -> &str {
        self.question.as_deref().unwrap_or_default()
    }

    /// 空文字列の画像は「画像なし」と同じ扱いにする。
    pub fn attached_image(&self) -> Option<&str> {
        self.image.as_deref().filter(|image| !image.is_empty())
    }

    pub fn has_image(&self) -> bool {
        self.attached_image().is_some()
    }

    /// ログ出力用に画像の先頭だけを切り出す。
    /// `chars()` 単位で数えるので、マルチバイト文字の途中で切れることはない。
    pub fn image_log_prefix(&self) -> Option<&str> {
        self.attached_image().map(|image| {
            match image.char_indices().nth(IMAGE_LOG_PREFIX_CHARS) {
                Some((end, _)) => &image[..end],
                None => image,
            }
        })
    }
}
