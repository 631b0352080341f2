use itertools::Itertools;
use log::debug;
use rand::SeedableRng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::rngs::StdRng;

use crate::error::{Result, SchedulerError};
use crate::scheduler::{CardState, Grade, SchedulerConfig, next_state};

const GRADES: [Grade; 4] = [Grade::Again, Grade::Hard, Grade::Good, Grade::Easy];

/// Deck-level simulation settings. Days are the unit of time; `learn_span`
/// is the number of days simulated.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatorConfig {
    pub deck_size: usize,
    pub learn_span: usize,
    /// New cards introduced per day.
    pub learn_limit: usize,
    /// Due cards answered per day.
    pub review_limit: usize,
    /// Grade distribution for the first review of a card
    /// (Again/Hard/Good/Easy weights).
    pub first_rating_prob: [f64; 4],
    /// Grade distribution for later reviews. SM-2 has no forgetting curve to
    /// derive lapses from, so Again carries its own weight here.
    pub review_rating_prob: [f64; 4],
    /// Cards stop being reviewed once they reach this many lapses.
    pub suspend_after_lapses: Option<u32>,
    pub scheduler: SchedulerConfig,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            deck_size: 10_000,
            learn_span: 365,
            learn_limit: 10,
            review_limit: 200,
            first_rating_prob: [0.15, 0.2, 0.6, 0.05],
            review_rating_prob: [0.1, 0.27, 0.54, 0.09],
            suspend_after_lapses: None,
            scheduler: SchedulerConfig::default(),
        }
    }
}

/// One card inside a simulated deck.
#[derive(Debug, Clone)]
struct Card {
    state: CardState,
    /// Day index (fractional) at which the card is due next.
    due: f64,
    suspended: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub review_cnt_per_day: Vec<usize>,
    pub learn_cnt_per_day: Vec<usize>,
    pub lapse_cnt_per_day: Vec<usize>,
    pub cards: Vec<CardState>,
}

/// Simulates a deck under the SM-2 scheduler for `learn_span` days.
///
/// Each day answers due cards (oldest due first, capped by `review_limit`)
/// with grades drawn from `review_rating_prob`, then introduces up to
/// `learn_limit` new cards graded from `first_rating_prob`. Deterministic
/// for a given seed.
pub fn simulate(config: &SimulatorConfig, seed: Option<u64>) -> Result<SimulationResult> {
    if config.deck_size == 0 {
        return Err(SchedulerError::InvalidDeckSize);
    }
    let first_rating_dist = WeightedIndex::new(config.first_rating_prob)
        .map_err(|_| SchedulerError::InvalidRatingProbability)?;
    let review_rating_dist = WeightedIndex::new(config.review_rating_prob)
        .map_err(|_| SchedulerError::InvalidRatingProbability)?;
    let mut rng = StdRng::seed_from_u64(seed.unwrap_or(42));

    let mut cards: Vec<Card> = Vec::with_capacity(config.deck_size);
    let mut introduced = 0usize;

    let mut review_cnt_per_day = vec![0; config.learn_span];
    let mut learn_cnt_per_day = vec![0; config.learn_span];
    let mut lapse_cnt_per_day = vec![0; config.learn_span];

    for today in 0..config.learn_span {
        let day = today as f64;

        let due_today = cards
            .iter()
            .enumerate()
            .filter(|(_, card)| !card.suspended && card.due <= day)
            .map(|(i, card)| (i, card.due))
            .sorted_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
            .take(config.review_limit)
            .collect_vec();

        for idx in due_today {
            let grade = GRADES[review_rating_dist.sample(&mut rng)];
            let card = &mut cards[idx];
            let next = next_state(&card.state, grade, &config.scheduler);
            if grade == Grade::Again {
                lapse_cnt_per_day[today] += 1;
                if let Some(max_lapses) = config.suspend_after_lapses {
                    if next.lapse_count >= max_lapses {
                        card.suspended = true;
                    }
                }
            }
            card.due = day + next.interval_days;
            card.state = next;
            review_cnt_per_day[today] += 1;
        }

        let learn_today = config.learn_limit.min(config.deck_size - introduced);
        for _ in 0..learn_today {
            let grade = GRADES[first_rating_dist.sample(&mut rng)];
            let state = next_state(&CardState::default(), grade, &config.scheduler);
            cards.push(Card {
                due: day + state.interval_days,
                state,
                suspended: false,
            });
        }
        introduced += learn_today;
        learn_cnt_per_day[today] = learn_today;

        debug!(
            "day {today}: {} reviews, {learn_today} new, {} lapses",
            review_cnt_per_day[today], lapse_cnt_per_day[today]
        );
    }

    Ok(SimulationResult {
        review_cnt_per_day,
        learn_cnt_per_day,
        lapse_cnt_per_day,
        cards: cards.into_iter().map(|card| card.state).collect(),
    })
}
