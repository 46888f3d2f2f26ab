// Models module

pub mod answer;
pub mod question;

// Re-export commonly used types
pub use answer::{ApiResponse, HealthStatus, Link};
pub use question::StudentQuestion;
