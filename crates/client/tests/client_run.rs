use arena_client::{Client, ClientConfig};
use game_core::SessionOutcome;

const STANDARD_NARRATION: &str = "\
hero (player) attacks 🤬 for 20 HP!
🤬 (enemy) attacks hero for 10 HP!
hero (player) attacks 🤬 for 20 HP!
🤬 has been defeated!

hero (player) attacks 😤 for 20 HP!
😤 (enemy) attacks hero for 15 HP!
hero (player) attacks 😤 for 20 HP!
😤 (enemy) attacks hero for 15 HP!
hero (player) attacks 😤 for 20 HP!
😤 has been defeated!

hero (player) attacks 🥶 for 20 HP!
🥶 (enemy) attacks hero for 25 HP!
hero (player) attacks 🥶 for 20 HP!
🥶 (enemy) attacks hero for 25 HP!
hero (player) attacks 🥶 for 20 HP!
🥶 (enemy) attacks hero for 25 HP!
hero has been defeated!
hero, you lost!
";

#[test]
fn narrates_the_standard_session() {
    let mut client = Client::builder()
        .config(ClientConfig::new("hero"))
        .output(Vec::<u8>::new())
        .build()
        .expect("output is set");

    let summary = client.run().expect("session runs");

    assert_eq!(summary.outcome, SessionOutcome::Defeat);
    let narration = String::from_utf8(client.into_output()).unwrap();
    assert_eq!(narration, STANDARD_NARRATION);
}

#[test]
fn default_config_uses_the_default_player() {
    let mut client = Client::builder().output(Vec::<u8>::new()).build().unwrap();

    let summary = client.run().unwrap();

    assert_eq!(summary.player, "😎");
    let narration = String::from_utf8(client.into_output()).unwrap();
    assert!(narration.ends_with("😎, you lost!\n"));
}

#[test]
fn build_requires_an_output() {
    let result = Client::builder().config(ClientConfig::default()).build();

    let err = result.err().expect("missing output is rejected");
    assert!(err.to_string().contains("Output is required"));
}
