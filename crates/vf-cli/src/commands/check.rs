use anyhow::{Context, bail};
use vf_core::responses::{CheckResponse, ValidationFailedResponse};
use vf_core::{ArticleInput, sample_article};
use vf_session::{CheckOutcome, SubmissionOutcome};

use crate::cli::root_commands::CheckArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::rows::ResultRow;
use crate::context::AppContext;
use crate::output::{notices, output};
use crate::progress::Progress;

/// Marker error for input rejected by validation. The error map has already
/// been printed when this is returned.
#[derive(Debug)]
pub struct InvalidArticle;

impl std::fmt::Display for InvalidArticle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("article failed validation")
    }
}

impl std::error::Error for InvalidArticle {}

/// Handle `verifact check`.
pub async fn handle(
    args: &CheckArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let input = article_from_args(args)?;
    let text_length = input.text_length();

    let spinner = Progress::spinner("Analyzing article...");
    let outcome = ctx.session.check(input).await;
    match &outcome {
        CheckOutcome::Submitted(SubmissionOutcome::Failed(_)) => spinner.finish_err("failed"),
        _ => spinner.finish_clear(),
    }
    notices(&ctx.session.take_notices(), flags);

    match outcome {
        CheckOutcome::Invalid(errors) => reject(errors, text_length, flags),
        CheckOutcome::Submitted(SubmissionOutcome::Failed(kind)) => {
            bail!("analysis failed ({kind}) against {}", ctx.config.gateway.url)
        }
        CheckOutcome::Submitted(SubmissionOutcome::Succeeded(result)) => {
            if flags.format == OutputFormat::Table {
                output(&ResultRow::from(&result), flags.format)
            } else {
                output(&CheckResponse::from(result), flags.format)
            }
        }
    }
}

fn reject(
    errors: vf_core::ValidationErrors,
    text_length: usize,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    output(&ValidationFailedResponse::new(errors, text_length), flags.format)?;
    Err(InvalidArticle.into())
}

/// Build the form from flags. Missing fields stay empty so validation
/// reports them.
fn article_from_args(args: &CheckArgs) -> anyhow::Result<ArticleInput> {
    if args.sample {
        return Ok(sample_article());
    }

    let text = match (&args.text, &args.text_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read article text from {path}"))?,
        (None, None) => String::new(),
    };

    Ok(ArticleInput::new(
        args.title.clone().unwrap_or_default(),
        args.author.clone().unwrap_or_default(),
        text,
    ))
}
