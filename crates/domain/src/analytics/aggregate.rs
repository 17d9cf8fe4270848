use std::collections::HashMap;

use facet_filter_shared_kernel::MediaType;
use serde::Serialize;

use crate::model::Asset;

/// How many result assets mention a given entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityCount {
    pub entity: String,
    pub count: usize,
}

/// Summary figures over a filtered result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultStats {
    pub total: usize,
    /// Every media type in declaration order, zero counts included.
    pub type_counts: Vec<(MediaType, usize)>,
    /// Rounded mean score; 0 for an empty result.
    pub average_score: u32,
    /// Most frequent first; ties ordered by name.
    pub top_entities: Vec<EntityCount>,
}

impl ResultStats {
    pub fn from_assets<'a, I>(assets: I, top: Option<usize>) -> Self
    where
        I: IntoIterator<Item = &'a Asset>,
    {
        let mut total = 0usize;
        let mut score_sum = 0.0f64;
        let mut type_counts = MediaType::ALL.map(|t| (t, 0usize));
        let mut entities: HashMap<&str, usize> = HashMap::new();

        for asset in assets {
            total += 1;
            score_sum += asset.score;
            if let Some(slot) = type_counts.iter_mut().find(|(t, _)| *t == asset.media_type) {
                slot.1 += 1;
            }
            for entity in &asset.entities {
                *entities.entry(entity.as_str()).or_insert(0) += 1;
            }
        }

        Self {
            total,
            type_counts: type_counts.to_vec(),
            average_score: average(score_sum, total),
            top_entities: rank_entities(entities, top),
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn average(sum: f64, count: usize) -> u32 {
    if count == 0 {
        return 0;
    }
    (sum / count as f64).round().max(0.0) as u32
}

fn rank_entities(counts: HashMap<&str, usize>, top: Option<usize>) -> Vec<EntityCount> {
    let mut ranked: Vec<EntityCount> = counts
        .into_iter()
        .map(|(entity, count)| EntityCount { entity: entity.to_string(), count })
        .collect();
    // HashMap の順序は不定なので名前で安定化する
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.entity.cmp(&b.entity)));
    if let Some(n) = top {
        ranked.truncate(n);
    }
    ranked
}
