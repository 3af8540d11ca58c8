use rosterui::{ProductTag, RosterProfile, RosterUI, RowSeed};

type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() -> AppResult<()> {
    let ui = RosterUI::new(RosterProfile::soft_delete())
        .with_title("Notification group · Field Ops")
        .with_description("Addresses notified when matching product listings go live.")
        .seed_rows(vec![
            RowSeed::new(
                "dispatch@fieldops.example",
                vec![ProductTag::LinePipe, ProductTag::Casing],
            )
            .with_persisted_id(41),
            RowSeed::new("yard@fieldops.example", vec![ProductTag::Any]).with_persisted_id(42),
        ]);

    match ui.run()? {
        Some(outcome) => {
            println!("{}", outcome.urlencoded_body());
        }
        None => {
            eprintln!("discarded");
        }
    }
    Ok(())
}
