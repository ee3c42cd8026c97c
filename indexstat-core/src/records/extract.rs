use crate::records::{Columns, MalformedPolicy, RawLine, RecordError, Samples};
use std::collections::HashSet;

/// Number of distinct tokens in `columns` of a whitespace-separated line.
///
/// `line_number` is only used to label the error for a short line.
pub fn distinct_count(
    line: &str,
    columns: Columns,
    line_number: usize,
) -> Result<usize, RecordError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let Some(fields) = tokens.get(columns.first..columns.end()) else {
        return Err(RecordError::ShortLine {
            line: line_number,
            found: tokens.len(),
            expected: columns.end(),
        });
    };

    Ok(fields.iter().collect::<HashSet<_>>().len())
}

/// Drains `lines` into a sample sequence.
///
/// Read errors always abort. Short lines abort or are skipped depending on
/// `policy`.
pub fn collect_samples<I>(
    lines: I,
    columns: Columns,
    policy: MalformedPolicy,
) -> Result<Samples, RecordError>
where
    I: IntoIterator<Item = Result<RawLine, RecordError>>,
{
    let mut samples = Samples::default();

    for line in lines {
        let line = line?;

        match distinct_count(&line.text, columns, line.number) {
            Ok(count) => samples.values.push(count),
            Err(err @ RecordError::ShortLine { .. }) if policy == MalformedPolicy::Skip => {
                tracing::warn!(line = line.number, "skipping malformed record: {err}");
                samples.skipped += 1;
            }
            Err(err) => return Err(err),
        }
    }

    tracing::info!(
        samples = samples.len(),
        skipped = samples.skipped,
        "collected distinct-count samples"
    );

    Ok(samples)
}
