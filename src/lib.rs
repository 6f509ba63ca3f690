pub mod config;
pub mod error;
pub mod layout;
pub mod locale;
pub mod logging;
pub mod model;
pub mod questionnaire;
pub mod sections;
pub mod styles;
pub mod utils;
pub mod workbook;

pub use config::{Cli, CliArgs, Command, GeneratorConfig};
pub use error::{ErrorCode, QuestionnaireError, Result};
pub use layout::MediaStore;
pub use locale::{Locale, LocaleProfile};
pub use logging::{LoggingConfig, init_logging};
pub use model::Candidate;
pub use questionnaire::{GeneratedQuestionnaire, QuestionnaireGenerator, fill_worksheet};
pub use sections::{GenerationReport, SectionKind, SectionOutcome, SectionReport};
