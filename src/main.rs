use anyhow::Context;
use clap::Parser;
use questionnaire_xlsx::{
    Candidate, Cli, Command, GeneratorConfig, LoggingConfig, QuestionnaireGenerator, init_logging,
};

fn main() -> anyhow::Result<()> {
    let logging_config = LoggingConfig::from_env();
    let _guard = init_logging(logging_config)?;

    let cli = Cli::parse();
    let config = GeneratorConfig::from_args(cli.global)?;

    // fail fast before touching any template
    config.validate()?;

    let generator = QuestionnaireGenerator::new(config);

    match cli.command {
        Command::Generate {
            candidate,
            locale,
            out,
        } => {
            let data = Candidate::from_path(&candidate)
                .with_context(|| format!("failed to load candidate {:?}", candidate))?;
            let locale = locale.unwrap_or_else(|| data.locale());
            let generated = generator
                .generate_for(&data, locale)
                .with_context(|| format!("failed to generate {locale} questionnaire"))?;

            let dest = out
                .unwrap_or_else(|| generator.config().output_dir().join(&generated.filename));
            generated
                .persist_to(&dest)
                .with_context(|| format!("failed to copy questionnaire to {:?}", dest))?;

            println!("{}", dest.display());
            println!("{}", serde_json::to_string_pretty(&generated.report)?);
        }
    }

    Ok(())
}
