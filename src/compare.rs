use std::borrow::Cow;
use std::time::Instant;

use canonical::{ngram_list, normalize, shingle_list, tokens};
use coefficient::to_set;
use perceptual::{fingerprint, Fingerprint, WinnowConfig};
use profile::Profile;
use tracing::{debug, warn, Level};

use crate::error::{Operand, SimilarityError};
use crate::metric::{EditUnit, Metric, MetricConfig, Representation};

/// Score two strings with the configured metric.
///
/// Returns a value in `[0.0, 1.0]`, where 1.0 means the operands are
/// equivalent under the metric. Inputs too short for the requested n-gram,
/// shingle or window size fail with [`SimilarityError::InputTooShort`] naming
/// the offending operand.
pub fn compare(first: &str, second: &str, cfg: &MetricConfig) -> Result<f64, SimilarityError> {
    let start = Instant::now();
    let span = tracing::span!(
        Level::DEBUG,
        "textsim.compare",
        metric = %cfg.metric,
        normalize = cfg.normalize
    );
    let _guard = span.enter();

    match compare_inner(first, second, cfg) {
        Ok(score) => {
            let elapsed_micros = start.elapsed().as_micros();
            debug!(
                first_len = first.len(),
                second_len = second.len(),
                score,
                elapsed_micros,
                "compare_success"
            );
            Ok(score)
        }
        Err(err) => {
            let elapsed_micros = start.elapsed().as_micros();
            warn!(
                operand = ?err.operand(),
                error = %err,
                elapsed_micros,
                "compare_failure"
            );
            Err(err)
        }
    }
}

/// Score two strings with a metric picked by name and default parameters.
pub fn compare_named(first: &str, second: &str, metric: &str) -> Result<f64, SimilarityError> {
    let metric: Metric = metric.parse()?;
    compare(first, second, &MetricConfig::new(metric))
}

fn compare_inner(first: &str, second: &str, cfg: &MetricConfig) -> Result<f64, SimilarityError> {
    cfg.validate()?;
    let first = prepare(first, cfg);
    let second = prepare(second, cfg);
    let (first, second) = (first.as_ref(), second.as_ref());

    match cfg.metric {
        Metric::Edit {
            edit,
            unit: EditUnit::Chars,
        } => Ok(edit.similarity_str(first, second)),
        Metric::Edit {
            edit,
            unit: EditUnit::Tokens,
        } => {
            let a = tokens(first, &cfg.separator);
            let b = tokens(second, &cfg.separator);
            Ok(edit.similarity(&a, &b))
        }
        Metric::Equal => Ok(if first == second { 1.0 } else { 0.0 }),
        Metric::Set {
            representation,
            coefficient,
        } => {
            let (a, b) = element_pair(first, second, representation, cfg)?;
            Ok(coefficient.apply(&to_set(a), &to_set(b)))
        }
        Metric::Winnowing {
            representation,
            coefficient,
        } => {
            let (a, b) = fingerprint_pair(first, second, representation, cfg)?;
            Ok(perceptual::similarity(&a, &b, coefficient))
        }
        Metric::WinnowingEdit {
            representation,
            edit,
        } => {
            let (a, b) = fingerprint_pair(first, second, representation, cfg)?;
            Ok(edit.similarity(&a.hash_values(), &b.hash_values()))
        }
        Metric::Cosine {
            representation,
            weighting,
        } => {
            let (a, b) = element_pair(first, second, representation, cfg)?;
            let a: Profile<String> = a.into_iter().collect();
            let b: Profile<String> = b.into_iter().collect();
            Ok(profile::cosine(&a, &b, weighting))
        }
        Metric::Manhattan { representation } => {
            let (a, b) = element_pair(first, second, representation, cfg)?;
            let a: Profile<String> = a.into_iter().collect();
            let b: Profile<String> = b.into_iter().collect();
            Ok(profile::manhattan(&a, &b))
        }
    }
}

fn prepare<'a>(text: &'a str, cfg: &MetricConfig) -> Cow<'a, str> {
    if cfg.normalize {
        Cow::Owned(normalize(
            text,
            cfg.metric.normalization_target(),
            &cfg.normalization,
        ))
    } else {
        Cow::Borrowed(text)
    }
}

/// Break `text` into the elements of `representation`.
pub(crate) fn elements(
    text: &str,
    representation: Representation,
    cfg: &MetricConfig,
    operand: Operand,
) -> Result<Vec<String>, SimilarityError> {
    match representation {
        Representation::Tokens => Ok(tokens(text, &cfg.separator)),
        Representation::NGrams => ngram_list(text, cfg.n_gram_size, cfg.padding)
            .map_err(|err| SimilarityError::tokenize(operand, err)),
        Representation::Shingles => {
            let toks = tokens(text, &cfg.separator);
            shingle_list(&toks, cfg.shingle_size)
                .map_err(|err| SimilarityError::tokenize(operand, err))
        }
    }
}

fn element_pair(
    first: &str,
    second: &str,
    representation: Representation,
    cfg: &MetricConfig,
) -> Result<(Vec<String>, Vec<String>), SimilarityError> {
    let a = elements(first, representation, cfg, Operand::First)?;
    let b = elements(second, representation, cfg, Operand::Second)?;
    Ok((a, b))
}

fn fingerprint_pair(
    first: &str,
    second: &str,
    representation: Representation,
    cfg: &MetricConfig,
) -> Result<(Fingerprint, Fingerprint), SimilarityError> {
    let winnow: WinnowConfig = cfg.effective_winnow()?;
    let (a, b) = element_pair(first, second, representation, cfg)?;
    let a = fingerprint(&a, &winnow).map_err(|err| SimilarityError::fingerprint(Operand::First, err))?;
    let b =
        fingerprint(&b, &winnow).map_err(|err| SimilarityError::fingerprint(Operand::Second, err))?;
    Ok((a, b))
}
