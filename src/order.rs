use crate::models::EpisodeRecord;

/// Sort episodes for display: newest (highest number) first.
///
/// `sort_by` is a stable sort, so records sharing an episode number keep
/// their relative input order. Duplicate numbers are a data-quality defect
/// upstream, not something this policy resolves.
pub fn order(mut records: Vec<EpisodeRecord>) -> Vec<EpisodeRecord> {
    records.sort_by(|a, b| b.episode.cmp(&a.episode));
    records
}
