mod args;
mod value_enum;

pub use args::Args;
use char_freq_domain::ClassificationPolicy;
use char_freq_ports::source::SourceRequest;
use char_freq_shared_kernel::{PresentationError, Result};

use crate::config::{Config, SampleRequest};

fn validate_at_least_one(flag: &str, value: Option<usize>) -> Result<()> {
    if value == Some(0) {
        return Err(PresentationError::InvalidValue {
            flag: flag.to_string(),
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        }
        .into());
    }
    Ok(())
}

/// `-` selects stdin; no inputs at all means stdin too.
fn make_inputs(args: &Args) -> Vec<SourceRequest> {
    if let Some(text) = &args.text {
        return vec![SourceRequest::Text(text.clone())];
    }
    if args.paths.is_empty() {
        return if args.generate_sample.is_some() { Vec::new() } else { vec![SourceRequest::Stdin] };
    }
    args.paths
        .iter()
        .map(|p| if p.as_os_str() == "-" { SourceRequest::Stdin } else { SourceRequest::Path(p.clone()) })
        .collect()
}

fn make_sample(args: &Args) -> Result<Option<SampleRequest>> {
    let Some(path) = &args.generate_sample else {
        return Ok(None);
    };
    if args.sample_len == 0 {
        return Err(PresentationError::InvalidValue {
            flag: "--sample-len".to_string(),
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        }
        .into());
    }
    Ok(Some(SampleRequest { path: path.clone(), len: args.sample_len, seed: args.seed }))
}

/// Convert parsed CLI arguments into a run configuration.
///
/// # Errors
///
/// Returns `Err` when `--top` or `--sample-len` is zero.
pub fn build_config(args: &Args) -> Result<Config> {
    validate_at_least_one("--top", args.top)?;
    let sample = make_sample(args)?;

    Ok(Config {
        inputs: make_inputs(args),
        sample,
        mode: args.mode.into(),
        policy: ClassificationPolicy::new(args.class.into(), args.screen.into()),
        sort: args.sort.clone(),
        top: args.top,
        format: args.format.into(),
        parent_fallback: !args.no_parent_fallback,
    })
}
