//! Bucket aggregator: sorts matches, groups them by bucket and keeps the best.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::report::{CareerBucket, CareerMatch};

pub const MAX_BUCKETS: usize = 5;
pub const MAX_CAREERS_PER_BUCKET: usize = 5;

/// Score descending, then career id ascending. Ids compare as plain strings,
/// so "c10" sorts before "c9".
fn by_score_then_id(a: &CareerMatch, b: &CareerMatch) -> Ordering {
    b.match_score
        .cmp(&a.match_score)
        .then_with(|| a.career_id.cmp(&b.career_id))
}

/// Groups matches into buckets.
///
/// Algorithm:
/// 1. Sort matches by score desc (ties: career id asc).
/// 2. Group by bucket name.
/// 3. bucket_score = round(mean of ALL member scores)
/// 4. Sort buckets by score desc (ties: bucket name asc), keep the top 5,
///    each with its top 5 careers.
pub fn aggregate_buckets(mut matches: Vec<CareerMatch>) -> Vec<CareerBucket> {
    matches.sort_by(by_score_then_id);

    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<CareerMatch>> = HashMap::new();
    for m in matches {
        if !groups.contains_key(&m.bucket) {
            order.push(m.bucket.clone());
        }
        groups.entry(m.bucket.clone()).or_default().push(m);
    }

    let mut buckets: Vec<CareerBucket> = order
        .into_iter()
        .filter_map(|name| groups.remove(&name).map(|members| (name, members)))
        .map(|(bucket_name, members)| {
            let total: u32 = members.iter().map(|m| m.match_score).sum();
            let bucket_score = (total as f64 / members.len() as f64).round() as u32;
            CareerBucket {
                bucket_name,
                bucket_score,
                top_careers: members.into_iter().take(MAX_CAREERS_PER_BUCKET).collect(),
            }
        })
        .collect();

    buckets.sort_by(|a, b| {
        b.bucket_score
            .cmp(&a.bucket_score)
            .then_with(|| a.bucket_name.cmp(&b.bucket_name))
    });
    buckets.truncate(MAX_BUCKETS);
    buckets
}
