//! Scoring a typed reconstruction against the text being memorised.

use std::borrow::Cow;

use crate::error::{CompareError, Result, Side};
use crate::lcs;
use crate::segment;
use crate::types::CompareOptions;
use serde::Serialize;

/// Status of one reference unit after alignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AlignmentEntry {
    /// Reproduced in the correct relative order.
    Correct { unit: String },
    /// Not reproduced.
    Missed { unit: String },
    /// Not reproduced; the user typed `actual` in its place.
    Wrong { expected: String, actual: String },
}

impl AlignmentEntry {
    /// The reference unit this entry stands for.
    pub fn expected(&self) -> &str {
        match self {
            Self::Correct { unit } | Self::Missed { unit } => unit,
            Self::Wrong { expected, .. } => expected,
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct { .. })
    }

    fn kind(&self) -> SegmentKind {
        match self {
            Self::Correct { .. } => SegmentKind::Correct,
            Self::Missed { .. } => SegmentKind::Missed,
            Self::Wrong { .. } => SegmentKind::Wrong,
        }
    }
}

/// Kind of a rendered run of entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    Correct,
    Missed,
    Wrong,
}

/// Consecutive `Correct` or `Missed` entries joined for display, or a single
/// `Wrong` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffSegment {
    /// Reference text covered by this run.
    pub text: String,
    pub kind: SegmentKind,
    /// What the user typed instead (only for `Wrong` segments).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
}

/// Outcome of one comparison. One entry per reference unit, in reference
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    total: usize,
    correct_count: usize,
    missed_count: usize,
    wrong_count: usize,
    extra_count: usize,
    accuracy: u8,
    entries: Vec<AlignmentEntry>,
}

impl ComparisonResult {
    /// Number of reference units.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn missed_count(&self) -> usize {
        self.missed_count
    }

    pub fn wrong_count(&self) -> usize {
        self.wrong_count
    }

    /// Candidate units that align with no reference unit.
    pub fn extra_count(&self) -> usize {
        self.extra_count
    }

    /// Percentage of reference units reproduced, rounded half up.
    pub fn accuracy(&self) -> u8 {
        self.accuracy
    }

    pub fn entries(&self) -> &[AlignmentEntry] {
        &self.entries
    }

    /// Whether accuracy reaches `threshold` percent.
    pub fn is_passing(&self, threshold: u8) -> bool {
        self.accuracy >= threshold
    }

    /// The aligned subsequence as text.
    pub fn matched_text(&self) -> String {
        self.entries
            .iter()
            .filter(|e| e.is_correct())
            .map(AlignmentEntry::expected)
            .collect()
    }

    /// Group consecutive `Correct` and `Missed` entries into display runs.
    /// Every `Wrong` entry becomes its own segment.
    pub fn segments(&self) -> Vec<DiffSegment> {
        let mut segments: Vec<DiffSegment> = Vec::new();

        for entry in &self.entries {
            let kind = entry.kind();
            let actual = match entry {
                AlignmentEntry::Wrong { actual, .. } => Some(actual.as_str()),
                _ => None,
            };

            match segments.last_mut() {
                // Each Wrong entry keeps its own pairing with what was typed.
                Some(last) if last.kind == kind && kind != SegmentKind::Wrong => {
                    last.text.push_str(entry.expected());
                }
                _ => segments.push(DiffSegment {
                    text: entry.expected().to_string(),
                    kind,
                    actual: actual.map(str::to_string),
                }),
            }
        }

        segments
    }
}

/// Compare with default options.
pub fn compare(reference: &str, candidate: &str) -> Result<ComparisonResult> {
    compare_with(reference, candidate, &CompareOptions::default())
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Slot {
    Unmatched,
    Matched,
    /// Paired with the candidate unit at this index.
    Substituted(usize),
}

/// Compare a reconstruction against the reference text.
///
/// Fails only on precondition violations: an empty reference, either side
/// exceeding `options.max_units`, or the alignment table exceeding
/// `options.max_cells`.
pub fn compare_with(
    reference: &str,
    candidate: &str,
    options: &CompareOptions,
) -> Result<ComparisonResult> {
    let ref_units = segment::units(reference, options.granularity);
    if ref_units.is_empty() {
        return Err(CompareError::EmptyReference);
    }
    let cand_units = segment::units(candidate, options.granularity);

    check_len(Side::Reference, ref_units.len(), options.max_units)?;
    check_len(Side::Candidate, cand_units.len(), options.max_units)?;

    let cells = lcs::LcsTable::cell_count(ref_units.len(), cand_units.len());
    if cells > options.max_cells {
        return Err(CompareError::TableTooLarge {
            cells,
            max: options.max_cells,
        });
    }

    let ref_keys = comparison_keys(&ref_units, options.case_sensitive);
    let cand_keys = comparison_keys(&cand_units, options.case_sensitive);
    let pairs = lcs::align(&ref_keys, &cand_keys);

    let mut slots = vec![Slot::Unmatched; ref_units.len()];
    for &(r, _) in &pairs {
        slots[r] = Slot::Matched;
    }

    if options.annotate_substitutions {
        pair_gaps(&pairs, ref_units.len(), cand_units.len(), &mut slots);
    }

    let mut correct_count = 0;
    let mut missed_count = 0;
    let mut wrong_count = 0;
    let entries: Vec<AlignmentEntry> = ref_units
        .iter()
        .zip(&slots)
        .map(|(unit, slot)| match *slot {
            Slot::Matched => {
                correct_count += 1;
                AlignmentEntry::Correct {
                    unit: unit.to_string(),
                }
            }
            Slot::Unmatched => {
                missed_count += 1;
                AlignmentEntry::Missed {
                    unit: unit.to_string(),
                }
            }
            Slot::Substituted(c) => {
                wrong_count += 1;
                AlignmentEntry::Wrong {
                    expected: unit.to_string(),
                    actual: cand_units[c].to_string(),
                }
            }
        })
        .collect();

    let total = entries.len();
    Ok(ComparisonResult {
        total,
        correct_count,
        missed_count,
        wrong_count,
        extra_count: cand_units.len() - correct_count - wrong_count,
        accuracy: percent(correct_count, total),
        entries,
    })
}

fn check_len(side: Side, len: usize, max: usize) -> Result<()> {
    if len > max {
        return Err(CompareError::TooLong { side, len, max });
    }
    Ok(())
}

fn comparison_keys<'a>(units: &[&'a str], case_sensitive: bool) -> Vec<Cow<'a, str>> {
    units
        .iter()
        .map(|u| {
            if case_sensitive {
                Cow::Borrowed(*u)
            } else {
                Cow::Owned(u.to_lowercase())
            }
        })
        .collect()
}

/// Between consecutive matched pairs, pair the k-th unmatched reference unit
/// with the k-th unmatched candidate unit of the same gap.
fn pair_gaps(pairs: &[(usize, usize)], ref_len: usize, cand_len: usize, slots: &mut [Slot]) {
    let mut ref_start = 0;
    let mut cand_start = 0;
    let end = (ref_len, cand_len);

    for &(r, c) in pairs.iter().chain(std::iter::once(&end)) {
        for (ri, ci) in (ref_start..r).zip(cand_start..c) {
            slots[ri] = Slot::Substituted(ci);
        }
        ref_start = r + 1;
        cand_start = c + 1;
    }
}

/// `round(100 * part / whole)` with halves rounded up. `whole` is non-zero.
fn percent(part: usize, whole: usize) -> u8 {
    ((200 * part + whole) / (2 * whole)) as u8
}
