use chrono::{DateTime, Utc};
use sm2::{CardState, Grade, ReviewLogEntry, SchedulerConfig, preview, schedule};

struct Card {
    state: CardState,
    due: DateTime<Utc>,
}

impl Card {
    fn new() -> Self {
        Self {
            state: CardState::default(),
            due: Utc::now(),
        }
    }
}

fn main() {
    let config = SchedulerConfig::default();

    // A brand-new card: show what each answer button would schedule.
    let mut card = Card::new();
    let states = preview(&card.state, &config, Utc::now());
    println!("New card buttons: {}", states.button_labels());

    // The learner answers "Good" a few times in a row.
    let mut log = Vec::new();
    for _ in 0..4 {
        let now = Utc::now();
        let result = schedule(&card.state, Grade::Good, &config, now);
        log.push(ReviewLogEntry::new(&card.state, &result, Grade::Good, now));
        card.state = result.state;
        card.due = result.due_at;
        println!(
            "Good -> interval {} days, ease {}, due {}",
            card.state.interval_days, card.state.ease_factor, card.due
        );
    }

    // A slip on a mature card: short retry step, spacing history kept.
    let now = Utc::now();
    let result = schedule(&card.state, Grade::Again, &config, now);
    log.push(ReviewLogEntry::new(&card.state, &result, Grade::Again, now));
    card.state = result.state;
    card.due = result.due_at;
    println!(
        "Again -> interval {} days ({} lapse), ease {}, due {}",
        card.state.interval_days, card.state.lapse_count, card.state.ease_factor, card.due
    );

    let states = preview(&card.state, &config, Utc::now());
    println!("Buttons after the lapse: {}", states.button_labels());
    println!("Review log entries collected: {}", log.len());
}
