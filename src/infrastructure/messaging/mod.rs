mod log_reporter;
mod mock_reporter;
mod slack_reporter;

pub use log_reporter::LogReporter;
pub use mock_reporter::MockReporter;
pub use slack_reporter::SlackReporter;
