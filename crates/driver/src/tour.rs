use bag::{
    random::RngCore,
    Bag,
    Error,
};
use core::fmt::Display;

const FRUITS: [&str; 5] = ["orange", "grape", "kiwi", "coconut", "lime"];

fn yes_no(answer: bool) -> &'static str {
    if answer {
        "yes"
    } else {
        "no"
    }
}

fn or_nothing<T: Display>(item: Option<T>) -> String {
    item.map_or_else(|| String::from("nothing"), |item| item.to_string())
}

/// Walks a bag through every operation and returns one line per step.
///
/// # Errors
///
/// If the bag refuses one of the fruits.
pub fn run<B>(mut words: B, rng: &mut dyn RngCore) -> Result<Vec<String>, Error>
where
    B: Bag<&'static str> + Display,
{
    let mut lines = Vec::new();
    for fruit in FRUITS {
        words.add(fruit)?;
    }
    lines.push(format!("bag: {} ({} items)", words, words.len()));

    lines.push(format!("contains 'kiwi'? {}", yes_no(words.contains(&"kiwi"))));
    lines.push(format!("contains 'mango'? {}", yes_no(words.contains(&"mango"))));

    lines.push(format!("peek (always the same): {}", or_nothing(words.get())));
    lines.push(format!("peek (always the same): {}", or_nothing(words.get())));

    lines.push(format!("random peek: {}", or_nothing(words.get_random_with(rng))));
    lines.push(format!("random peek: {}", or_nothing(words.get_random_with(rng))));

    let removed = words.remove_item(&"grape");
    lines.push(format!("removed 'grape'? {} -> {}", yes_no(removed), words));

    lines.push(format!("remove (an end one): {}", or_nothing(words.remove())));
    lines.push(format!("bag: {}", words));

    lines.push(format!("remove random: {}", or_nothing(words.remove_random_with(rng))));
    lines.push(format!("bag: {}", words));

    while words.remove().is_some() {}
    lines.push(format!("emptied: {}", words));
    lines.push(format!("random peek: {}", or_nothing(words.get_random_with(rng))));
    lines.push(format!("remove random: {}", or_nothing(words.remove_random_with(rng))));
    lines.push(format!("removed 'kiwi'? {}", yes_no(words.remove_item(&"kiwi"))));
    Ok(lines)
}
