use sm2::{SimulatorConfig, simulate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .apply()?;

    let config = SimulatorConfig {
        deck_size: 1000,
        learn_span: 180,
        learn_limit: 20,
        review_limit: 200,
        suspend_after_lapses: Some(8),
        ..Default::default()
    };

    let result = simulate(&config, None)?;

    let total_reviews: usize = result.review_cnt_per_day.iter().sum();
    let total_lapses: usize = result.lapse_cnt_per_day.iter().sum();
    let peak_reviews = result.review_cnt_per_day.iter().max().copied().unwrap_or(0);
    let mature = result
        .cards
        .iter()
        .filter(|state| state.interval_days >= 21.0)
        .count();

    println!("Simulated {} days:", config.learn_span);
    println!("  total reviews: {total_reviews}");
    println!("  total lapses:  {total_lapses}");
    println!("  peak reviews in one day: {peak_reviews}");
    println!("  mature cards (interval >= 21d): {mature}/{}", result.cards.len());
    Ok(())
}
